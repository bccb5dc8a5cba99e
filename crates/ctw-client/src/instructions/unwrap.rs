//! `unwrap`: burn confidential tokens and release base tokens from the vault.
//!
//! The program burns `amount` from the owner's confidential token account's
//! non-confidential balance and transfers the same amount from the vault to
//! `token_account`. Moving funds out of the confidential balance first (a
//! confidential-transfer withdraw with its proof) is the caller's job.

use ctw_primitives::Instruction;

use super::build_instruction;
use super::wrap::WrapAccounts;
use crate::data::CtwInstructionData;
use crate::error::CtwError;

/// Accounts of `unwrap`. Same slots as `wrap`, funds flow the other way.
pub type UnwrapAccounts = WrapAccounts;

/// Build `unwrap` for `amount` base units of the token.
pub fn build_unwrap(accounts: &UnwrapAccounts, amount: u64) -> Result<Instruction, CtwError> {
    build_instruction(&accounts.addresses(), CtwInstructionData::Unwrap { amount })
}
