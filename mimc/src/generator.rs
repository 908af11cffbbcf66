//! This module derives MiMC round constants from a Keccak-256 hash chain

use crate::{
    constants::{ConstantsVersion, MimcConfig},
    error::{MimcError, Result},
    field,
};
use ark_bn254::Fr;
use ark_ff::{PrimeField, Zero};
use log::debug;
use num_bigint::BigUint;
use once_cell::sync::Lazy;
use sha3::{Digest, Keccak256};

/// Width of a link of the hash chain, in bytes
pub const DIGEST_LENGTH: usize = 32;

/// An ordered round constant schedule, together with the configuration it
/// was derived from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundConstants<F> {
    config: MimcConfig,
    constants: Vec<F>,
}

impl<F: PrimeField> RoundConstants<F> {
    pub fn config(&self) -> &MimcConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.constants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constants.is_empty()
    }

    /// The constant added at `round`, if the schedule has that many rounds
    pub fn get(&self, round: usize) -> Option<&F> {
        self.constants.get(round)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, F> {
        self.constants.iter()
    }

    pub fn as_slice(&self) -> &[F] {
        &self.constants
    }

    pub fn to_biguints(&self) -> Vec<BigUint> {
        self.iter().map(|c| field::to_biguint(*c)).collect()
    }

    pub fn to_hex_strings(&self) -> Vec<String> {
        self.iter().map(|c| field::to_hex_string(*c)).collect()
    }

    pub fn to_decimal_strings(&self) -> Vec<String> {
        self.iter().map(|c| field::to_decimal_string(*c)).collect()
    }
}

impl<'a, F> IntoIterator for &'a RoundConstants<F> {
    type Item = &'a F;
    type IntoIter = std::slice::Iter<'a, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.constants.iter()
    }
}

/// Derive the round constants described by `config` in the field `F`.
///
/// The chain starts at `Keccak256(seed)`. Each following round hashes the
/// previous raw digest again and reduces the result modulo the field order.
/// Round `0` gets no constant, the round key is added there instead.
pub fn round_constants_in<F: PrimeField>(config: &MimcConfig) -> Result<RoundConstants<F>> {
    config.validate()?;
    if config.version != ConstantsVersion::FieldReduced {
        return Err(MimcError::UnsupportedVersion(config.version));
    }

    debug!(
        "Deriving {} round constants from seed {:?}",
        config.rounds, config.seed
    );

    let mut constants = Vec::new();
    constants
        .try_reserve_exact(config.rounds)
        .map_err(|_| MimcError::TooManyRounds(config.rounds))?;
    constants.push(F::zero());

    let mut digest = Keccak256::digest(config.seed.as_bytes());
    for _ in 1..config.rounds {
        digest = Keccak256::digest(digest);
        constants.push(field::reduce_be_bytes::<F>(&digest));
    }

    Ok(RoundConstants {
        config: config.clone(),
        constants,
    })
}

/// Derive the round constants described by `config` in the BN254 scalar field
pub fn round_constants(config: &MimcConfig) -> Result<RoundConstants<Fr>> {
    round_constants_in::<Fr>(config)
}

/// Round constants as big integers. Absent arguments are replaced by
/// [crate::DEFAULT_SEED] and [crate::DEFAULT_ROUNDS].
pub fn generate(seed: Option<&str>, rounds: Option<usize>) -> Result<Vec<BigUint>> {
    let config = MimcConfig::new(seed, rounds);
    Ok(round_constants(&config)?.to_biguints())
}

/// The default schedule, computed on first use
pub fn default_constants() -> &'static RoundConstants<Fr> {
    static DEFAULT_CONSTANTS: Lazy<RoundConstants<Fr>> = Lazy::new(|| {
        round_constants(&MimcConfig::default()).expect("the default configuration is valid")
    });
    &DEFAULT_CONSTANTS
}
