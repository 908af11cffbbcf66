//! Configuration of a round constant schedule.

use crate::error::{MimcError, Result};
use serde::{Deserialize, Serialize};

/// Seed of the constant family used by the deployed permutations
pub const DEFAULT_SEED: &str = "mimc";

/// Number of rounds of the deployed permutations
pub const DEFAULT_ROUNDS: usize = 91;

/// How the hash chain is turned into constants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstantsVersion {
    /// Raw 256-bit digests, neither reduced nor zeroed at the first round.
    /// Not supported by the generator.
    Legacy,
    /// Digests reduced modulo the field order, first constant forced to zero.
    #[default]
    FieldReduced,
}

/// Inputs of a round constant schedule.
///
/// Deserializing fills any missing field with its default, so `{}` is the
/// default schedule.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct MimcConfig {
    pub seed: String,
    pub rounds: usize,
    pub version: ConstantsVersion,
}

impl Default for MimcConfig {
    fn default() -> Self {
        MimcConfig {
            seed: DEFAULT_SEED.to_string(),
            rounds: DEFAULT_ROUNDS,
            version: ConstantsVersion::default(),
        }
    }
}

impl MimcConfig {
    /// Create a configuration, substituting the defaults for absent values
    pub fn new(seed: Option<&str>, rounds: Option<usize>) -> Self {
        MimcConfig {
            seed: seed.unwrap_or(DEFAULT_SEED).to_string(),
            rounds: rounds.unwrap_or(DEFAULT_ROUNDS),
            version: ConstantsVersion::default(),
        }
    }

    /// Create a configuration from a raw byte seed, which must be UTF-8
    pub fn from_seed_bytes(seed: &[u8], rounds: Option<usize>) -> Result<Self> {
        let seed = std::str::from_utf8(seed)?;
        Ok(Self::new(Some(seed), rounds))
    }

    pub fn with_seed(mut self, seed: impl Into<String>) -> Self {
        self.seed = seed.into();
        self
    }

    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }

    pub fn with_version(mut self, version: ConstantsVersion) -> Self {
        self.version = version;
        self
    }

    /// Check that the schedule has at least one round
    pub fn validate(&self) -> Result<()> {
        if self.rounds == 0 {
            return Err(MimcError::InvalidRoundCount(self.rounds));
        }
        Ok(())
    }
}
