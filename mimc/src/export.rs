//! Text encodings of a round constant schedule, as consumed by deployment
//! tooling: one literal per line, JSON, or an ES module.

use crate::{
    error::{MimcError, Result as MimcResult},
    field,
    generator::RoundConstants,
};
use ark_ff::PrimeField;
use serde::Serialize;
use std::{
    io::{self, Write},
    str::FromStr,
};

/// Number encoding of the exported constants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    B10,
    #[default]
    Hex,
}

impl FromStr for Mode {
    type Err = ();

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_lowercase().as_str() {
            "b10" => Ok(Mode::B10),
            "hex" => Ok(Mode::Hex),
            _ => Err(()),
        }
    }
}

/// A schedule with every number already encoded according to a [Mode]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportedConstants {
    pub seed: String,
    pub rounds: usize,
    pub modulus: String,
    pub constants: Vec<String>,
}

impl ExportedConstants {
    pub fn new<F: PrimeField>(schedule: &RoundConstants<F>, mode: Mode) -> Self {
        let modulus = field::modulus_biguint::<F>();
        let (modulus, constants) = match mode {
            Mode::B10 => (modulus.to_string(), schedule.to_decimal_strings()),
            Mode::Hex => (format!("{:#x}", modulus), schedule.to_hex_strings()),
        };
        ExportedConstants {
            seed: schedule.config().seed.clone(),
            rounds: schedule.len(),
            modulus,
            constants,
        }
    }
}

/// One constant per line
pub fn write_lines<W: Write>(writer: &mut W, exported: &ExportedConstants) -> io::Result<()> {
    for constant in &exported.constants {
        writeln!(writer, "{}", constant)?;
    }
    Ok(())
}

pub fn write_json<W: Write>(writer: W, exported: &ExportedConstants) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(writer, exported)
}

/// Check that `name` matches `[A-Za-z_$][A-Za-z0-9_$]*`
pub fn check_variable_name(name: &str) -> MimcResult<()> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_' || first == '$')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        None => false,
    };
    if !valid {
        return Err(MimcError::InvalidVariableName(name.to_string()));
    }
    Ok(())
}

/// An ES module exporting the constants as an array of string literals under
/// `variable_name`. Nothing is written if `variable_name` is not a valid
/// identifier.
pub fn write_es5<W: Write>(
    writer: &mut W,
    exported: &ExportedConstants,
    variable_name: &str,
) -> io::Result<()> {
    check_variable_name(variable_name)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;

    writeln!(
        writer,
        "// @gen this file is generated - don't edit it directly"
    )?;
    writeln!(
        writer,
        "// Generated by mimc-constants v{}",
        env!("CARGO_PKG_VERSION")
    )?;
    // Debug formatting keeps arbitrary seeds on a single comment line
    writeln!(
        writer,
        "// Seed: {:?}, rounds: {}",
        exported.seed, exported.rounds
    )?;
    writeln!(writer, "// Modulus: {}", exported.modulus)?;

    writeln!(writer)?;
    writeln!(writer, "const {} = [", variable_name)?;
    for (i, constant) in exported.constants.iter().enumerate() {
        if i + 1 < exported.constants.len() {
            writeln!(writer, "  '{}',", constant)?;
        } else {
            writeln!(writer, "  '{}'", constant)?;
        }
    }
    writeln!(writer, "];")?;
    writeln!(writer)?;
    writeln!(writer, "export {{ {} }};", variable_name)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{generator::round_constants, MimcConfig};

    const MODULUS_HEX: &str = "0x30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001";

    fn exported(mode: Mode) -> ExportedConstants {
        let schedule = round_constants(&MimcConfig::default().with_rounds(3)).unwrap();
        ExportedConstants::new(&schedule, mode)
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("B10".parse::<Mode>(), Ok(Mode::B10));
        assert_eq!("hex".parse::<Mode>(), Ok(Mode::Hex));
        assert_eq!("base64".parse::<Mode>(), Err(()));
    }

    #[test]
    fn test_lines_hex() {
        let mut out = Vec::new();
        write_lines(&mut out, &exported(Mode::Hex)).unwrap();
        let expected = "\
0x0000000000000000000000000000000000000000000000000000000000000000
0x2e2ebbb178296b63d88ec198f0976ad98bc1d4eb0d921ddd2eb86cb7e70a98e5
0x21bfc154b5b071d22d06105663553801f858c1f231020b4c291a729d6281d349
";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_lines_b10() {
        let mut out = Vec::new();
        write_lines(&mut out, &exported(Mode::B10)).unwrap();
        let expected = "\
0
20888961410941983456478427210666206549300505294776164667214940546594746570981
15265126113435022738560151911929040668591755459209400716467504685752745317193
";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_json() {
        let mut out = Vec::new();
        write_json(&mut out, &exported(Mode::Hex)).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["seed"], "mimc");
        assert_eq!(value["rounds"], 3);
        assert_eq!(value["modulus"], MODULUS_HEX);
        assert_eq!(value["constants"].as_array().unwrap().len(), 3);
        assert_eq!(
            value["constants"][1],
            "0x2e2ebbb178296b63d88ec198f0976ad98bc1d4eb0d921ddd2eb86cb7e70a98e5"
        );
    }

    #[test]
    fn test_es5() {
        let mut out = Vec::new();
        write_es5(&mut out, &exported(Mode::B10), "mimcConstants").unwrap();
        let generated = String::from_utf8(out).unwrap();

        let expected_body = "\
const mimcConstants = [
  '0',
  '20888961410941983456478427210666206549300505294776164667214940546594746570981',
  '15265126113435022738560151911929040668591755459209400716467504685752745317193'
];

export { mimcConstants };
";
        assert!(generated.starts_with("// @gen this file is generated"));
        assert!(generated.contains("// Seed: \"mimc\", rounds: 3\n"));
        assert!(generated.contains(
            "// Modulus: 21888242871839275222246405745257275088548364400416034343698204186575808495617\n"
        ));
        assert!(generated.ends_with(expected_body));
    }

    #[test]
    fn test_variable_names() {
        for name in ["mimcConstants", "_x", "$", "a1_$"] {
            assert_eq!(check_variable_name(name), Ok(()));
        }
        for name in ["", "a b", "1abc", "a-b", "x;alert(1)", "é"] {
            assert_eq!(
                check_variable_name(name),
                Err(MimcError::InvalidVariableName(name.to_string()))
            );
        }
    }

    #[test]
    fn test_es5_rejects_invalid_name() {
        let mut out = Vec::new();
        let err = write_es5(&mut out, &exported(Mode::Hex), "a b").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert!(out.is_empty());
    }
}
