//! This crate derives the round constants of the MiMC permutation over the
//! BN254 scalar field.
//!
//! The constants are a Keccak-256 hash chain started from a seed string, with
//! every link reduced modulo the field order. The first round receives no
//! constant, so element `0` is always zero.
//!
//! To obtain the schedule used by the deployed `MiMCpe7` and `MiMCpe5`
//! instances (seed `"mimc"`, 91 rounds), use:
//! ```rust
//! use mimc_constants::{generator, DEFAULT_ROUNDS};
//!
//! let constants = generator::default_constants();
//! assert_eq!(constants.len(), DEFAULT_ROUNDS);
//! ```
//!
//! Other schedules are described by a [MimcConfig]:
//! ```rust
//! use mimc_constants::{generator::round_constants, MimcConfig};
//!
//! let config = MimcConfig::default().with_seed("other").with_rounds(46);
//! let constants = round_constants(&config).unwrap();
//! assert_eq!(constants.len(), 46);
//! ```

pub mod cache;
pub mod constants;
pub mod error;
pub mod export;
pub mod field;
pub mod generator;

pub use constants::{ConstantsVersion, MimcConfig, DEFAULT_ROUNDS, DEFAULT_SEED};
pub use error::{MimcError, Result};
pub use generator::{generate, RoundConstants};
