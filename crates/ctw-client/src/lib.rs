//! Instruction builder for the Confidential Transfer Wrapped Token program.
//!
//! The program mirrors an existing SPL Token mint 1:1 with a Token Extensions
//! mint that has confidential transfers enabled. This crate produces the
//! three instructions it understands (`initialize`, `wrap`, `unwrap`) as
//! ready-to-sign [`Instruction`] values. Signing, submission and the
//! confidential-transfer proofs that surround a wrap or unwrap are left to
//! the caller.
//!
//! Every builder is a pure function of its inputs and the compiled-in
//! constants below, so builders can be called from any thread without
//! coordination.

pub mod data;
pub mod error;
pub mod instructions;
pub mod pda;
pub mod schema;

pub use ctw_primitives::{AccountMeta, Address, Instruction};

pub use data::{AuditorPubkey, CtwInstructionData};
pub use error::CtwError;
pub use instructions::{
    initialize::{build_initialize, InitializeAccounts},
    parse_instruction,
    unwrap::{build_unwrap, UnwrapAccounts},
    wrap::{build_wrap, WrapAccounts},
};
pub use pda::{
    derive_confidential_mint, derive_confidential_token_account, derive_program_authority,
    derive_token_account, derive_token_vault,
};
pub use schema::{schema_for, AccountRule, Operation, OperationSchema};

/// The wrap program: `cwTokjpVjxBeytEXomNe5B38EesYsNsXCm3JZC6tmvB`
pub const PROGRAM_ID: Address = Address::new_from_array([
    0x09, 0x34, 0xe8, 0xad, 0x4c, 0xd3, 0xc3, 0x6e, 0x48, 0xbc, 0x38, 0x51, 0xdd, 0xad, 0x03,
    0xde, 0xea, 0xf3, 0x34, 0xde, 0xa0, 0x44, 0x17, 0xbc, 0x19, 0x7f, 0x91, 0x41, 0x9e, 0xf7,
    0x23, 0xe4,
]);

/// The program authority PDA, `["AUTHORITY"]` under [`PROGRAM_ID`]:
/// `5txHjtUXKw716ZY4M5uCU7MG51htjMewqWr91uR8jyBz`
pub const PROGRAM_AUTHORITY: Address = Address::new_from_array([
    0x48, 0xbd, 0xe2, 0x4d, 0xd3, 0x5d, 0x2d, 0x7a, 0x90, 0x7b, 0x61, 0xd1, 0x57, 0xb0, 0x2e,
    0xc1, 0xd5, 0x04, 0x1b, 0x77, 0xef, 0x03, 0x91, 0x19, 0x4a, 0x4f, 0xc0, 0xc1, 0x39, 0xa5,
    0x6a, 0x5d,
]);

/// Bump of [`PROGRAM_AUTHORITY`].
pub const PROGRAM_AUTHORITY_BUMP: u8 = 255;

/// Seed tag of the confidential mint PDA, after the base mint address.
/// Changing it breaks every already-initialized confidential mint.
pub const MINT_SEED: &[u8] = b"MINT";

/// Seed of the program authority PDA.
pub const AUTHORITY_SEED: &[u8] = b"AUTHORITY";
