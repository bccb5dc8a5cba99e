//! Well-known program IDs and associated token account (ATA) derivation.

use crate::address::Address;
use crate::error::PrimitivesError;
use crate::pda::find_program_address;

// ---------------------------------------------------------------------------
// Well-known program IDs
// ---------------------------------------------------------------------------

/// The Solana System Program: 32 zero bytes.
/// Base58: `11111111111111111111111111111111`
pub const SYSTEM_PROGRAM_ID: Address = Address::new_from_array([0u8; 32]);

/// SPL Token Program ID: `TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA`
pub const TOKEN_PROGRAM_ID: Address = Address::new_from_array([
    0x06, 0xdd, 0xf6, 0xe1, 0xd7, 0x65, 0xa1, 0x93, 0xd9, 0xcb, 0xe1, 0x46, 0xce, 0xeb, 0x79,
    0xac, 0x1c, 0xb4, 0x85, 0xed, 0x5f, 0x5b, 0x37, 0x91, 0x3a, 0x8c, 0xf5, 0x85, 0x7e, 0xff,
    0x00, 0xa9,
]);

/// Token Extensions (Token-2022) Program ID:
/// `TokenzQdBNbLqP5VEhdkAS6EPFLC1PHnBqCXEpPxuEb`
pub const TOKEN_2022_PROGRAM_ID: Address = Address::new_from_array([
    0x06, 0xdd, 0xf6, 0xe1, 0xee, 0x75, 0x8f, 0xde, 0x18, 0x42, 0x5d, 0xbc, 0xe4, 0x6c, 0xcd,
    0xda, 0xb6, 0x1a, 0xfc, 0x4d, 0x83, 0xb9, 0x0d, 0x27, 0xfe, 0xbd, 0xf9, 0x28, 0xd8, 0xa1,
    0x8b, 0xfc,
]);

/// Associated Token Account Program ID: `ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL`
pub const ASSOCIATED_TOKEN_PROGRAM_ID: Address = Address::new_from_array([
    0x8c, 0x97, 0x25, 0x8f, 0x4e, 0x24, 0x89, 0xf1, 0xbb, 0x3d, 0x10, 0x29, 0x14, 0x8e, 0x0d,
    0x83, 0x0b, 0x5a, 0x13, 0x99, 0xda, 0xff, 0x10, 0x84, 0x04, 0x8e, 0x7b, 0xd8, 0xdb, 0xe9,
    0xf8, 0x59,
]);

// ---------------------------------------------------------------------------
// Associated Token Account (PDA) derivation
// ---------------------------------------------------------------------------

/// Derive the associated token account address for a wallet + mint pair
/// under the given token program.
///
/// The ATA is a PDA of the Associated Token Account program with seeds
/// `[wallet, token_program_id, mint]`.
pub fn derive_associated_token_address_with_program_id(
    wallet: &Address,
    mint: &Address,
    token_program_id: &Address,
) -> Result<Address, PrimitivesError> {
    find_program_address(
        &[wallet.as_ref(), token_program_id.as_ref(), mint.as_ref()],
        &ASSOCIATED_TOKEN_PROGRAM_ID,
    )
    .map(|(address, _bump)| address)
}

/// Derive the associated token account under the legacy SPL Token program.
pub fn derive_associated_token_address(
    wallet: &Address,
    mint: &Address,
) -> Result<Address, PrimitivesError> {
    derive_associated_token_address_with_program_id(wallet, mint, &TOKEN_PROGRAM_ID)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pda::is_on_curve;

    #[test]
    fn program_ids_match_their_base58_names() {
        let cases = [
            (SYSTEM_PROGRAM_ID, "11111111111111111111111111111111"),
            (TOKEN_PROGRAM_ID, "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA"),
            (TOKEN_2022_PROGRAM_ID, "TokenzQdBNbLqP5VEhdkAS6EPFLC1PHnBqCXEpPxuEb"),
            (
                ASSOCIATED_TOKEN_PROGRAM_ID,
                "ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL",
            ),
        ];
        for (id, name) in cases {
            assert_eq!(id.to_string(), name);
        }
    }

    #[test]
    fn token_2022_prefix_is_hex_stable() {
        // Both token programs share the "Token" vanity prefix bytes.
        assert_eq!(hex::encode(&TOKEN_PROGRAM_ID.as_ref()[..4]), "06ddf6e1");
        assert_eq!(hex::encode(&TOKEN_2022_PROGRAM_ID.as_ref()[..4]), "06ddf6e1");
    }

    #[test]
    fn ata_is_not_on_curve() {
        let wallet = Address::new_from_array([0xAA; 32]);
        let mint = Address::new_from_array([0xBB; 32]);

        let ata = derive_associated_token_address(&wallet, &mint).unwrap();
        assert!(!is_on_curve(ata.as_array()));
    }

    #[test]
    fn ata_depends_on_token_program() {
        let wallet = Address::new_from_array([0x11; 32]);
        let mint = Address::new_from_array([0x22; 32]);

        let legacy = derive_associated_token_address(&wallet, &mint).unwrap();
        let extensions =
            derive_associated_token_address_with_program_id(&wallet, &mint, &TOKEN_2022_PROGRAM_ID)
                .unwrap();
        assert_ne!(legacy, extensions);
    }

    #[test]
    fn different_wallets_give_different_atas() {
        let mint = Address::new_from_array([0xFF; 32]);

        let a = derive_associated_token_address(&Address::new_from_array([1; 32]), &mint).unwrap();
        let b = derive_associated_token_address(&Address::new_from_array([2; 32]), &mint).unwrap();
        assert_ne!(a, b);
    }
}
