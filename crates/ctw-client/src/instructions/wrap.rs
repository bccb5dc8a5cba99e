//! `wrap`: move base tokens into the vault and mint the confidential
//! equivalent.
//!
//! The program transfers `amount` from `token_account` to the vault, mints
//! `amount` of the confidential mint to `confidential_token_account`, and
//! deposits it into that account's pending confidential balance.
//!
//! The confidential token account must already exist and be configured for
//! confidential transfers. Nothing here checks that. After the instruction
//! lands, the owner still has to apply the pending balance.

use ctw_primitives::{AccountMeta, Address, Instruction, TOKEN_2022_PROGRAM_ID, TOKEN_PROGRAM_ID};

use super::build_instruction;
use crate::data::CtwInstructionData;
use crate::error::CtwError;
use crate::pda::{
    derive_confidential_mint, derive_confidential_token_account, derive_token_account,
    derive_token_vault,
};
use crate::schema::WRAP_SCHEMA;
use crate::PROGRAM_AUTHORITY;

/// Accounts of `wrap` (and `unwrap`), in program order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrapAccounts {
    pub token_mint: Address,
    /// The owner's base-token account.
    pub token_account: Address,
    pub token_vault: Address,
    pub confidential_mint: Address,
    /// The owner's Token Extensions account for the confidential mint.
    pub confidential_token_account: Address,
    pub program_authority: Address,
    /// Owner of both token accounts.
    pub authority: Address,
    pub payer: Address,
    pub token_program: Address,
    pub token_extensions_program: Address,
}

impl WrapAccounts {
    /// Fill every account from the base mint, the owner and the fee payer,
    /// assuming the owner uses associated token accounts on both sides.
    pub fn resolve(token_mint: Address, owner: Address, payer: Address) -> Result<Self, CtwError> {
        let (confidential_mint, _) = derive_confidential_mint(&token_mint)?;

        Ok(Self {
            token_mint,
            token_account: derive_token_account(&owner, &token_mint)?,
            token_vault: derive_token_vault(&token_mint)?,
            confidential_mint,
            confidential_token_account: derive_confidential_token_account(
                &owner,
                &confidential_mint,
            )?,
            program_authority: PROGRAM_AUTHORITY,
            authority: owner,
            payer,
            token_program: TOKEN_PROGRAM_ID,
            token_extensions_program: TOKEN_2022_PROGRAM_ID,
        })
    }

    pub(crate) fn addresses(&self) -> [Address; 10] {
        [
            self.token_mint,
            self.token_account,
            self.token_vault,
            self.confidential_mint,
            self.confidential_token_account,
            self.program_authority,
            self.authority,
            self.payer,
            self.token_program,
            self.token_extensions_program,
        ]
    }

    pub fn to_account_metas(&self) -> Result<Vec<AccountMeta>, CtwError> {
        WRAP_SCHEMA.account_metas(&self.addresses())
    }

    /// Rebuild the typed accounts from a flat list, checking count, flags and
    /// every pinned address.
    pub fn try_from_metas(metas: &[AccountMeta]) -> Result<Self, CtwError> {
        WRAP_SCHEMA.check_accounts(metas)?;
        let key = |i: usize| metas[i].pubkey;

        Ok(Self {
            token_mint: key(0),
            token_account: key(1),
            token_vault: key(2),
            confidential_mint: key(3),
            confidential_token_account: key(4),
            program_authority: key(5),
            authority: key(6),
            payer: key(7),
            token_program: key(8),
            token_extensions_program: key(9),
        })
    }
}

/// Build `wrap` for `amount` base units of the token.
pub fn build_wrap(accounts: &WrapAccounts, amount: u64) -> Result<Instruction, CtwError> {
    build_instruction(&accounts.addresses(), CtwInstructionData::Wrap { amount })
}
