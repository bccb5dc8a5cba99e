//! Solana primitives for building instructions off-chain.
//!
//! This crate handles address encoding, program-derived address search and
//! the instruction/account-meta types, without pulling in `solana-sdk`.
//! Hashing uses `sha2`, the off-curve check uses `curve25519-dalek`, and
//! addresses are rendered with `bs58`.

pub mod address;
pub mod error;
pub mod instruction;
pub mod pda;
pub mod program_ids;

// Re-export key public types for ergonomic imports.
pub use address::{Address, ADDRESS_BYTES};
pub use error::PrimitivesError;
pub use instruction::{AccountMeta, Instruction};
pub use pda::{create_program_address, find_program_address, is_on_curve};
pub use program_ids::{
    derive_associated_token_address, derive_associated_token_address_with_program_id,
    ASSOCIATED_TOKEN_PROGRAM_ID, SYSTEM_PROGRAM_ID, TOKEN_2022_PROGRAM_ID, TOKEN_PROGRAM_ID,
};
