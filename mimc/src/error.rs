use crate::constants::ConstantsVersion;
use thiserror::Error;

// Round constant generation error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MimcError {
    #[error("invalid round count {0}: at least one round is required")]
    InvalidRoundCount(usize),
    #[error("seed is not valid UTF-8: {0}")]
    InvalidSeedEncoding(#[from] std::str::Utf8Error),
    #[error("round constant version {0:?} is not supported")]
    UnsupportedVersion(ConstantsVersion),
    #[error("cannot allocate a schedule of {0} rounds")]
    TooManyRounds(usize),
    #[error("invalid JavaScript identifier {0:?}")]
    InvalidVariableName(String),
}

pub type Result<T> = std::result::Result<T, MimcError>;
