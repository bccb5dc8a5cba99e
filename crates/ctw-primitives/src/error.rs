use thiserror::Error;

/// Errors produced while parsing addresses or deriving program addresses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrimitivesError {
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("invalid seeds: {0}")]
    InvalidSeeds(String),

    #[error("derivation exhausted: {0}")]
    DerivationExhausted(String),
}
