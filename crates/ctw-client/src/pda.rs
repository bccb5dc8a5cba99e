//! Addresses owned by, or associated with, the wrap program.

use ctw_primitives::{
    derive_associated_token_address, derive_associated_token_address_with_program_id,
    find_program_address, Address, TOKEN_2022_PROGRAM_ID,
};

use crate::error::CtwError;
use crate::{AUTHORITY_SEED, MINT_SEED, PROGRAM_AUTHORITY, PROGRAM_ID};

/// Derive the confidential mint that mirrors `token_mint`.
///
/// Seeds: `[token_mint, "MINT"]` under [`PROGRAM_ID`].
pub fn derive_confidential_mint(token_mint: &Address) -> Result<(Address, u8), CtwError> {
    Ok(find_program_address(
        &[token_mint.as_ref(), MINT_SEED],
        &PROGRAM_ID,
    )?)
}

/// Derive the program authority PDA. Always equals [`PROGRAM_AUTHORITY`];
/// use the constant unless the derivation itself is under test.
pub fn derive_program_authority() -> Result<(Address, u8), CtwError> {
    Ok(find_program_address(&[AUTHORITY_SEED], &PROGRAM_ID)?)
}

/// The vault holding wrapped base tokens: the program authority's associated
/// token account for `token_mint` under the legacy SPL Token program.
pub fn derive_token_vault(token_mint: &Address) -> Result<Address, CtwError> {
    Ok(derive_associated_token_address(
        &PROGRAM_AUTHORITY,
        token_mint,
    )?)
}

/// The owner's associated base-token account.
pub fn derive_token_account(owner: &Address, token_mint: &Address) -> Result<Address, CtwError> {
    Ok(derive_associated_token_address(owner, token_mint)?)
}

/// The owner's associated account for the confidential mint. Lives under
/// Token Extensions, not the legacy program.
pub fn derive_confidential_token_account(
    owner: &Address,
    confidential_mint: &Address,
) -> Result<Address, CtwError> {
    Ok(derive_associated_token_address_with_program_id(
        owner,
        confidential_mint,
        &TOKEN_2022_PROGRAM_ID,
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PROGRAM_AUTHORITY_BUMP;
    use ctw_primitives::is_on_curve;

    fn usdc() -> Address {
        "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v".parse().unwrap()
    }

    #[test]
    fn program_authority_constant_is_derived() {
        let (authority, bump) = derive_program_authority().unwrap();
        assert_eq!(authority, PROGRAM_AUTHORITY);
        assert_eq!(bump, PROGRAM_AUTHORITY_BUMP);
    }

    #[test]
    fn confidential_mint_for_usdc() {
        let (mint, bump) = derive_confidential_mint(&usdc()).unwrap();
        assert_eq!(mint.to_string(), "G65QTDDwFaFE4dK7ZD7sMUc42rtfvVgWRoqxsShREbck");
        assert_eq!(bump, 254);
    }

    #[test]
    fn confidential_mint_is_stable_per_mint() {
        let first = derive_confidential_mint(&usdc()).unwrap();
        let second = derive_confidential_mint(&usdc()).unwrap();
        assert_eq!(first, second);

        let other = derive_confidential_mint(&Address::new_from_array([0x11; 32])).unwrap();
        assert_ne!(first.0, other.0);
    }

    #[test]
    fn confidential_mint_never_equals_authority() {
        let (mint, _) = derive_confidential_mint(&Address::default()).unwrap();
        assert_ne!(mint, PROGRAM_AUTHORITY);
        assert!(!is_on_curve(mint.as_array()));
    }

    #[test]
    fn token_vault_for_usdc() {
        let vault = derive_token_vault(&usdc()).unwrap();
        assert_eq!(vault.to_string(), "4G5sJm1fJKPMFHvMjUt9xwChgPY12o7sQHJGBkCh2SeZ");
    }

    #[test]
    fn confidential_account_differs_from_base_account() {
        let owner = Address::new_from_array([0x33; 32]);
        let (confidential_mint, _) = derive_confidential_mint(&usdc()).unwrap();

        let base = derive_token_account(&owner, &usdc()).unwrap();
        let confidential = derive_confidential_token_account(&owner, &confidential_mint).unwrap();
        assert_ne!(base, confidential);
    }
}
