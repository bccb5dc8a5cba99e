//! `initialize`: create the confidential mint mirroring a base mint.
//!
//! The program creates the confidential mint PDA under Token Extensions,
//! enables confidential transfers on it with the given auditor key and
//! auto-approval of new accounts, copies the base mint's decimals and freeze
//! authority, and opens the token vault.

use ctw_primitives::{
    AccountMeta, Address, Instruction, ASSOCIATED_TOKEN_PROGRAM_ID, SYSTEM_PROGRAM_ID,
    TOKEN_2022_PROGRAM_ID, TOKEN_PROGRAM_ID,
};

use super::build_instruction;
use crate::data::{AuditorPubkey, CtwInstructionData};
use crate::error::CtwError;
use crate::pda::{derive_confidential_mint, derive_token_vault};
use crate::schema::INITIALIZE_SCHEMA;
use crate::PROGRAM_AUTHORITY;

/// Accounts of `initialize`, in program order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitializeAccounts {
    /// The existing SPL Token mint to mirror.
    pub token_mint: Address,
    pub confidential_mint: Address,
    pub program_authority: Address,
    pub token_vault: Address,
    /// Pays rent for the new mint and vault.
    pub payer: Address,
    pub token_program: Address,
    pub associated_token_program: Address,
    pub token_extensions_program: Address,
    pub system_program: Address,
}

impl InitializeAccounts {
    /// Fill every derived and well-known account for `token_mint`.
    pub fn resolve(token_mint: Address, payer: Address) -> Result<Self, CtwError> {
        let (confidential_mint, _) = derive_confidential_mint(&token_mint)?;
        let token_vault = derive_token_vault(&token_mint)?;

        Ok(Self {
            token_mint,
            confidential_mint,
            program_authority: PROGRAM_AUTHORITY,
            token_vault,
            payer,
            token_program: TOKEN_PROGRAM_ID,
            associated_token_program: ASSOCIATED_TOKEN_PROGRAM_ID,
            token_extensions_program: TOKEN_2022_PROGRAM_ID,
            system_program: SYSTEM_PROGRAM_ID,
        })
    }

    fn addresses(&self) -> [Address; 9] {
        [
            self.token_mint,
            self.confidential_mint,
            self.program_authority,
            self.token_vault,
            self.payer,
            self.token_program,
            self.associated_token_program,
            self.token_extensions_program,
            self.system_program,
        ]
    }

    pub fn to_account_metas(&self) -> Result<Vec<AccountMeta>, CtwError> {
        INITIALIZE_SCHEMA.account_metas(&self.addresses())
    }

    /// Rebuild the typed accounts from a flat list, checking count, flags and
    /// every pinned address.
    pub fn try_from_metas(metas: &[AccountMeta]) -> Result<Self, CtwError> {
        INITIALIZE_SCHEMA.check_accounts(metas)?;
        let key = |i: usize| metas[i].pubkey;

        Ok(Self {
            token_mint: key(0),
            confidential_mint: key(1),
            program_authority: key(2),
            token_vault: key(3),
            payer: key(4),
            token_program: key(5),
            associated_token_program: key(6),
            token_extensions_program: key(7),
            system_program: key(8),
        })
    }
}

/// Build `initialize`.
///
/// `auditor_pubkey` must be exactly 32 bytes (an ElGamal public key);
/// anything else fails with [`CtwError::InvalidArgument`] before encoding.
pub fn build_initialize(
    accounts: &InitializeAccounts,
    auditor_pubkey: &[u8],
) -> Result<Instruction, CtwError> {
    let auditor_pubkey = AuditorPubkey::try_from(auditor_pubkey)?;
    build_instruction(
        &accounts.addresses(),
        CtwInstructionData::Initialize { auditor_pubkey },
    )
}
