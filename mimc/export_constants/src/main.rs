use clap::{Parser, ValueEnum};
use log::{error, info};
use mimc_constants::{
    export::{self, ExportedConstants, Mode},
    generator::round_constants,
    MimcConfig, MimcError, DEFAULT_ROUNDS, DEFAULT_SEED,
};
use std::{
    ffi::OsString,
    fs::File,
    io::{self, Write},
    process::ExitCode,
};
use thiserror::Error;

/// Command line mirror of [Mode], which stays free of clap in the library
#[derive(Debug, Clone, ValueEnum)]
pub enum ModeArg {
    B10,
    Hex,
}

impl From<ModeArg> for Mode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::B10 => Mode::B10,
            ModeArg::Hex => Mode::Hex,
        }
    }
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Lines,
    Json,
    Es5,
}

#[derive(Parser)]
#[command(name = "export_constants")]
#[command(about = "Export the round constants of the MiMC permutation")]
struct Args {
    /// Seed for round constants
    #[arg(short, long, default_value = DEFAULT_SEED)]
    seed: OsString,

    /// Number of rounds
    #[arg(short, long, default_value_t = DEFAULT_ROUNDS)]
    rounds: usize,

    /// Number encoding format (base-10 or hexadecimal)
    #[arg(value_enum, short, long, default_value = "hex")]
    mode: ModeArg,

    /// Output file format
    #[arg(value_enum, short, long, default_value = "lines")]
    format: OutputFormat,

    /// Name of the exported array in es5 output
    #[arg(long, default_value = "mimcConstants")]
    variable_name: String,

    /// Display settings on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Output file path, use "-" for stdout
    #[arg(default_value = "-")]
    output_file: String,
}

#[derive(Error, Debug)]
enum ExportError {
    #[error(transparent)]
    Constants(#[from] MimcError),
    #[error("could not write output: {0}")]
    Io(#[from] io::Error),
    #[error("could not serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

fn run(args: Args) -> Result<(), ExportError> {
    let config = MimcConfig::from_seed_bytes(args.seed.as_encoded_bytes(), Some(args.rounds))?;

    if args.verbose {
        eprintln!("# rounds {}", config.rounds);
        eprintln!("# seed {}", config.seed);
    }

    if let OutputFormat::Es5 = args.format {
        export::check_variable_name(&args.variable_name)?;
    }

    let constants = round_constants(&config)?;
    let exported = ExportedConstants::new(&constants, args.mode.into());

    let mut writer: Box<dyn Write> = match args.output_file.as_str() {
        "-" => Box::new(io::stdout()),
        path => Box::new(File::create(path)?),
    };

    match args.format {
        OutputFormat::Lines => export::write_lines(&mut writer, &exported)?,
        OutputFormat::Json => {
            export::write_json(&mut writer, &exported)?;
            writeln!(writer)?;
        }
        OutputFormat::Es5 => export::write_es5(&mut writer, &exported, &args.variable_name)?,
    }
    writer.flush()?;

    info!(
        "Exported {} round constants to {}",
        exported.rounds, args.output_file
    );
    Ok(())
}

pub fn main() -> ExitCode {
    // See https://github.com/rust-lang/log
    env_logger::init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
