//! Instruction and account-meta types.
//!
//! An [`Instruction`] is the unit handed to a signing/submission layer: the
//! program to invoke, the ordered accounts it touches, and opaque data. The
//! accounts' order and flags are part of the target program's interface, so
//! nothing here reorders or deduplicates them. Compiling instructions into a
//! transaction message is left to the caller.

use crate::address::Address;

/// A single account reference in a Solana instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AccountMeta {
    pub pubkey: Address,
    pub is_signer: bool,
    pub is_writable: bool,
}

impl AccountMeta {
    /// A writable account.
    pub const fn new(pubkey: Address, is_signer: bool) -> Self {
        Self {
            pubkey,
            is_signer,
            is_writable: true,
        }
    }

    /// A read-only account.
    pub const fn new_readonly(pubkey: Address, is_signer: bool) -> Self {
        Self {
            pubkey,
            is_signer,
            is_writable: false,
        }
    }
}

/// A Solana instruction (before it is compiled into a transaction).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Instruction {
    pub program_id: Address,
    pub accounts: Vec<AccountMeta>,
    pub data: Vec<u8>,
}

impl Instruction {
    /// Accounts that must sign the enclosing transaction, in instruction order.
    pub fn signers(&self) -> impl Iterator<Item = &Address> {
        self.accounts
            .iter()
            .filter(|meta| meta.is_signer)
            .map(|meta| &meta.pubkey)
    }
}
