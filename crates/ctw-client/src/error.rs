use ctw_primitives::PrimitivesError;
use thiserror::Error;

/// Errors surfaced while building or decoding wrap-program instructions.
///
/// Every error is local to the call that produced it and deterministic, so
/// retrying with the same input yields the same error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CtwError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("account schema mismatch: {0}")]
    AccountSchemaMismatch(String),

    #[error("derivation exhausted: {0}")]
    DerivationExhausted(String),

    #[error("invalid instruction data: {0}")]
    InvalidInstructionData(String),

    /// A Base58 string or byte slice that is not a 32-byte address. Builders
    /// take parsed [`ctw_primitives::Address`] values and never raise this;
    /// it lets callers apply `?` to `str::parse::<Address>()` inside
    /// functions returning `CtwError`.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

impl From<PrimitivesError> for CtwError {
    fn from(e: PrimitivesError) -> Self {
        match e {
            PrimitivesError::DerivationExhausted(msg) => CtwError::DerivationExhausted(msg),
            PrimitivesError::InvalidAddress(msg) => CtwError::InvalidAddress(msg),
            // Seeds are compiled in; a bad seed is a caller-side argument bug.
            PrimitivesError::InvalidSeeds(msg) => CtwError::InvalidArgument(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_argument() {
        let err = CtwError::InvalidArgument("auditor key is 31 bytes".into());
        assert_eq!(err.to_string(), "invalid argument: auditor key is 31 bytes");
    }

    #[test]
    fn display_account_schema_mismatch() {
        let err = CtwError::AccountSchemaMismatch("expected 10 accounts, got 9".into());
        assert_eq!(
            err.to_string(),
            "account schema mismatch: expected 10 accounts, got 9"
        );
    }

    #[test]
    fn display_invalid_instruction_data() {
        let err = CtwError::InvalidInstructionData("unknown discriminator".into());
        assert_eq!(
            err.to_string(),
            "invalid instruction data: unknown discriminator"
        );
    }

    #[test]
    fn exhausted_derivation_keeps_its_kind() {
        let err: CtwError = PrimitivesError::DerivationExhausted("no bump".into()).into();
        assert_eq!(err, CtwError::DerivationExhausted("no bump".into()));
    }

    #[test]
    fn bad_seeds_become_invalid_argument() {
        let err: CtwError = PrimitivesError::InvalidSeeds("seed 0 too long".into()).into();
        assert!(matches!(err, CtwError::InvalidArgument(_)));
    }

    #[test]
    fn address_parse_errors_propagate_with_question_mark() {
        fn parse_mint(s: &str) -> Result<ctw_primitives::Address, CtwError> {
            Ok(s.parse::<ctw_primitives::Address>()?)
        }

        assert!(parse_mint("EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v").is_ok());
        assert!(matches!(parse_mint("1"), Err(CtwError::InvalidAddress(_))));
    }

    #[test]
    fn debug_format_works() {
        let err = CtwError::DerivationExhausted("fail".into());
        let debug = format!("{:?}", err);
        assert!(debug.contains("DerivationExhausted"));
    }
}
