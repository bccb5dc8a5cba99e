//! Static account and argument layouts of every wrap-program operation.
//!
//! The on-chain program enforces the same account order and flags, so these
//! tables are versioned with it and never configurable at runtime. Slots the
//! program pins to a constant or to a derivation of the base mint carry an
//! [`AccountRule`], so a list whose same-flag accounts trade places is still
//! rejected.

use ctw_primitives::{
    AccountMeta, Address, ASSOCIATED_TOKEN_PROGRAM_ID, SYSTEM_PROGRAM_ID, TOKEN_2022_PROGRAM_ID,
    TOKEN_PROGRAM_ID,
};

use crate::data::{INITIALIZE_DISCRIMINATOR, UNWRAP_DISCRIMINATOR, WRAP_DISCRIMINATOR};
use crate::error::CtwError;
use crate::pda::{derive_confidential_mint, derive_token_vault};
use crate::PROGRAM_AUTHORITY;

/// The operations the wrap program exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Initialize,
    Wrap,
    Unwrap,
}

impl Operation {
    pub const ALL: [Operation; 3] = [Operation::Initialize, Operation::Wrap, Operation::Unwrap];

    /// Instruction name as declared by the program.
    pub fn name(&self) -> &'static str {
        schema_for(*self).name
    }

    pub fn discriminator(&self) -> [u8; 8] {
        schema_for(*self).discriminator
    }
}

/// One declared account slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountSpec {
    pub name: &'static str,
    pub is_writable: bool,
    pub is_signer: bool,
    pub rule: AccountRule,
}

/// Which address a slot must hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountRule {
    /// Chosen by the caller.
    Any,
    /// A compiled-in address.
    Fixed(Address),
    /// The confidential mint of the base mint found at the given slot.
    ConfidentialMintOf(usize),
    /// The token vault of the base mint found at the given slot.
    TokenVaultOf(usize),
}

impl AccountRule {
    /// The address this rule pins, given the rest of the account list.
    /// `None` for caller-chosen slots.
    fn expected(&self, metas: &[AccountMeta]) -> Result<Option<Address>, CtwError> {
        let mint_at = |slot: usize| {
            metas.get(slot).map(|meta| meta.pubkey).ok_or_else(|| {
                CtwError::AccountSchemaMismatch(format!("no base mint at account {slot}"))
            })
        };

        match *self {
            AccountRule::Any => Ok(None),
            AccountRule::Fixed(address) => Ok(Some(address)),
            AccountRule::ConfidentialMintOf(slot) => {
                Ok(Some(derive_confidential_mint(&mint_at(slot)?)?.0))
            }
            AccountRule::TokenVaultOf(slot) => Ok(Some(derive_token_vault(&mint_at(slot)?)?)),
        }
    }
}

/// Wire type of one argument field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgType {
    /// Raw bytes, no length prefix.
    FixedBytes(usize),
    /// Little-endian unsigned 64-bit integer.
    U64,
}

impl ArgType {
    pub const fn encoded_len(&self) -> usize {
        match self {
            ArgType::FixedBytes(len) => *len,
            ArgType::U64 => 8,
        }
    }
}

/// One declared argument field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgSpec {
    pub name: &'static str,
    pub ty: ArgType,
}

/// The fixed description of one operation.
#[derive(Debug, PartialEq, Eq)]
pub struct OperationSchema {
    pub operation: Operation,
    pub name: &'static str,
    pub discriminator: [u8; 8],
    pub accounts: &'static [AccountSpec],
    pub args: &'static [ArgSpec],
}

const fn account(name: &'static str, is_writable: bool, is_signer: bool) -> AccountSpec {
    AccountSpec {
        name,
        is_writable,
        is_signer,
        rule: AccountRule::Any,
    }
}

const fn pinned(name: &'static str, is_writable: bool, rule: AccountRule) -> AccountSpec {
    AccountSpec {
        name,
        is_writable,
        is_signer: false,
        rule,
    }
}

// Both layouts put the base mint first.
const TOKEN_MINT_SLOT: usize = 0;

const INITIALIZE_ACCOUNTS: &[AccountSpec] = &[
    account("token_mint", false, false),
    pinned("confidential_mint", true, AccountRule::ConfidentialMintOf(TOKEN_MINT_SLOT)),
    pinned("program_authority", false, AccountRule::Fixed(PROGRAM_AUTHORITY)),
    pinned("token_vault", true, AccountRule::TokenVaultOf(TOKEN_MINT_SLOT)),
    account("payer", true, true),
    pinned("token_program", false, AccountRule::Fixed(TOKEN_PROGRAM_ID)),
    pinned(
        "associated_token_program",
        false,
        AccountRule::Fixed(ASSOCIATED_TOKEN_PROGRAM_ID),
    ),
    pinned(
        "token_extensions_program",
        false,
        AccountRule::Fixed(TOKEN_2022_PROGRAM_ID),
    ),
    pinned("system_program", false, AccountRule::Fixed(SYSTEM_PROGRAM_ID)),
];

// Wrap and unwrap take the same accounts; only the direction differs.
const WRAP_ACCOUNTS: &[AccountSpec] = &[
    account("token_mint", false, false),
    account("token_account", true, false),
    pinned("token_vault", true, AccountRule::TokenVaultOf(TOKEN_MINT_SLOT)),
    pinned("confidential_mint", true, AccountRule::ConfidentialMintOf(TOKEN_MINT_SLOT)),
    account("confidential_token_account", true, false),
    pinned("program_authority", false, AccountRule::Fixed(PROGRAM_AUTHORITY)),
    account("authority", false, true),
    account("payer", true, true),
    pinned("token_program", false, AccountRule::Fixed(TOKEN_PROGRAM_ID)),
    pinned(
        "token_extensions_program",
        false,
        AccountRule::Fixed(TOKEN_2022_PROGRAM_ID),
    ),
];

const AMOUNT_ARGS: &[ArgSpec] = &[ArgSpec {
    name: "amount",
    ty: ArgType::U64,
}];

pub static INITIALIZE_SCHEMA: OperationSchema = OperationSchema {
    operation: Operation::Initialize,
    name: "initialize",
    discriminator: INITIALIZE_DISCRIMINATOR,
    accounts: INITIALIZE_ACCOUNTS,
    args: &[ArgSpec {
        name: "auditor_pubkey",
        ty: ArgType::FixedBytes(32),
    }],
};

pub static WRAP_SCHEMA: OperationSchema = OperationSchema {
    operation: Operation::Wrap,
    name: "wrap",
    discriminator: WRAP_DISCRIMINATOR,
    accounts: WRAP_ACCOUNTS,
    args: AMOUNT_ARGS,
};

pub static UNWRAP_SCHEMA: OperationSchema = OperationSchema {
    operation: Operation::Unwrap,
    name: "unwrap",
    discriminator: UNWRAP_DISCRIMINATOR,
    accounts: WRAP_ACCOUNTS,
    args: AMOUNT_ARGS,
};

pub fn schema_for(operation: Operation) -> &'static OperationSchema {
    match operation {
        Operation::Initialize => &INITIALIZE_SCHEMA,
        Operation::Wrap => &WRAP_SCHEMA,
        Operation::Unwrap => &UNWRAP_SCHEMA,
    }
}

impl OperationSchema {
    /// Length of the instruction data: discriminator plus every argument.
    pub fn data_len(&self) -> usize {
        self.discriminator.len() + self.args.iter().map(|a| a.ty.encoded_len()).sum::<usize>()
    }

    /// Attach the declared flags to `addresses`, which must be given in
    /// declared order. Callers cannot override the flags.
    pub fn account_metas(&self, addresses: &[Address]) -> Result<Vec<AccountMeta>, CtwError> {
        self.check_len(addresses.len())?;

        Ok(self
            .accounts
            .iter()
            .zip(addresses)
            .map(|(spec, pubkey)| AccountMeta {
                pubkey: *pubkey,
                is_signer: spec.is_signer,
                is_writable: spec.is_writable,
            })
            .collect())
    }

    /// Check an account list against this schema: exact length, the exact
    /// signer/writable flags at every position, then the address of every
    /// pinned slot.
    pub fn check_accounts(&self, metas: &[AccountMeta]) -> Result<(), CtwError> {
        self.check_len(metas.len())?;

        for (i, (spec, meta)) in self.accounts.iter().zip(metas).enumerate() {
            if spec.is_signer != meta.is_signer || spec.is_writable != meta.is_writable {
                return Err(CtwError::AccountSchemaMismatch(format!(
                    "{}: account {i} ({}) expected signer={} writable={}, got signer={} writable={}",
                    self.name,
                    spec.name,
                    spec.is_signer,
                    spec.is_writable,
                    meta.is_signer,
                    meta.is_writable,
                )));
            }
        }

        for (i, (spec, meta)) in self.accounts.iter().zip(metas).enumerate() {
            let Some(expected) = spec.rule.expected(metas)? else {
                continue;
            };
            if meta.pubkey != expected {
                return Err(CtwError::AccountSchemaMismatch(format!(
                    "{}: account {i} ({}) expected {expected}, got {}",
                    self.name, spec.name, meta.pubkey,
                )));
            }
        }

        Ok(())
    }

    fn check_len(&self, got: usize) -> Result<(), CtwError> {
        if got != self.accounts.len() {
            return Err(CtwError::AccountSchemaMismatch(format!(
                "{}: expected {} accounts, got {got}",
                self.name,
                self.accounts.len()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instructions::wrap::WrapAccounts;

    #[test]
    fn account_counts() {
        assert_eq!(INITIALIZE_SCHEMA.accounts.len(), 9);
        assert_eq!(WRAP_SCHEMA.accounts.len(), 10);
        assert_eq!(UNWRAP_SCHEMA.accounts.len(), 10);
    }

    #[test]
    fn data_lengths() {
        assert_eq!(INITIALIZE_SCHEMA.data_len(), 40);
        assert_eq!(WRAP_SCHEMA.data_len(), 16);
        assert_eq!(UNWRAP_SCHEMA.data_len(), 16);
    }

    #[test]
    fn wrap_and_unwrap_share_accounts() {
        assert_eq!(WRAP_SCHEMA.accounts, UNWRAP_SCHEMA.accounts);
        assert_ne!(WRAP_SCHEMA.discriminator, UNWRAP_SCHEMA.discriminator);
    }

    #[test]
    fn schema_for_is_exhaustive() {
        for op in Operation::ALL {
            assert_eq!(schema_for(op).operation, op);
        }
    }

    #[test]
    fn payer_is_the_only_initialize_signer() {
        let signers: Vec<_> = INITIALIZE_SCHEMA
            .accounts
            .iter()
            .filter(|a| a.is_signer)
            .map(|a| a.name)
            .collect();
        assert_eq!(signers, vec!["payer"]);
    }

    #[test]
    fn wrap_signers_are_authority_and_payer() {
        let signers: Vec<_> = WRAP_SCHEMA
            .accounts
            .iter()
            .filter(|a| a.is_signer)
            .map(|a| a.name)
            .collect();
        assert_eq!(signers, vec!["authority", "payer"]);
    }

    fn wrap_metas() -> Vec<AccountMeta> {
        let accounts = WrapAccounts::resolve(
            Address::new_from_array([0x10; 32]),
            Address::new_from_array([0x44; 32]),
            Address::new_from_array([0x20; 32]),
        )
        .unwrap();
        WRAP_SCHEMA.account_metas(&accounts.addresses()).unwrap()
    }

    #[test]
    fn account_metas_copy_declared_flags() {
        let addresses: Vec<Address> = (0..10u8).map(|i| Address::new_from_array([i; 32])).collect();
        let metas = WRAP_SCHEMA.account_metas(&addresses).unwrap();

        for ((spec, meta), address) in WRAP_SCHEMA.accounts.iter().zip(&metas).zip(&addresses) {
            assert_eq!(meta.pubkey, *address);
            assert_eq!(meta.is_signer, spec.is_signer);
            assert_eq!(meta.is_writable, spec.is_writable);
        }
    }

    #[test]
    fn resolved_accounts_pass() {
        assert!(WRAP_SCHEMA.check_accounts(&wrap_metas()).is_ok());
    }

    #[test]
    fn rules_point_at_the_base_mint() {
        for schema in [&INITIALIZE_SCHEMA, &WRAP_SCHEMA, &UNWRAP_SCHEMA] {
            assert_eq!(schema.accounts[TOKEN_MINT_SLOT].name, "token_mint");
            for spec in schema.accounts {
                if let AccountRule::ConfidentialMintOf(slot) | AccountRule::TokenVaultOf(slot) =
                    spec.rule
                {
                    assert_eq!(slot, TOKEN_MINT_SLOT, "{}: {}", schema.name, spec.name);
                }
            }
        }
    }

    #[test]
    fn pinned_slots_are_never_signers() {
        for schema in [&INITIALIZE_SCHEMA, &WRAP_SCHEMA] {
            for spec in schema.accounts {
                if spec.rule != AccountRule::Any {
                    assert!(!spec.is_signer, "{}: {}", schema.name, spec.name);
                }
            }
        }
    }

    #[test]
    fn swapped_program_ids_are_rejected() {
        let mut metas = wrap_metas();
        metas.swap(8, 9);

        let err = WRAP_SCHEMA.check_accounts(&metas).unwrap_err();
        assert_eq!(
            err,
            CtwError::AccountSchemaMismatch(format!(
                "wrap: account 8 (token_program) expected {TOKEN_PROGRAM_ID}, got {TOKEN_2022_PROGRAM_ID}"
            ))
        );
    }

    #[test]
    fn foreign_vault_is_rejected() {
        let mut metas = wrap_metas();
        metas[2].pubkey = Address::new_from_array([0x77; 32]);

        let err = WRAP_SCHEMA.check_accounts(&metas).unwrap_err();
        assert!(
            err.to_string().contains("account 2 (token_vault)"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn vault_is_checked_against_the_listed_mint() {
        // Replacing only the base mint leaves a vault derived for another mint.
        let mut metas = wrap_metas();
        metas[0].pubkey = Address::new_from_array([0x11; 32]);

        let err = WRAP_SCHEMA.check_accounts(&metas).unwrap_err();
        assert!(matches!(err, CtwError::AccountSchemaMismatch(_)));
    }

    #[test]
    fn short_account_list_is_rejected() {
        let addresses = vec![Address::default(); 8];
        let err = INITIALIZE_SCHEMA.account_metas(&addresses).unwrap_err();
        assert_eq!(
            err,
            CtwError::AccountSchemaMismatch("initialize: expected 9 accounts, got 8".into())
        );
    }

    #[test]
    fn flipped_signer_flag_is_rejected() {
        let addresses = vec![Address::default(); 10];
        let mut metas = UNWRAP_SCHEMA.account_metas(&addresses).unwrap();
        metas[6].is_signer = false;

        let err = UNWRAP_SCHEMA.check_accounts(&metas).unwrap_err();
        assert_eq!(
            err,
            CtwError::AccountSchemaMismatch(
                "unwrap: account 6 (authority) expected signer=true writable=false, \
                 got signer=false writable=false"
                    .into()
            )
        );
    }
}
