//! Program Derived Address (PDA) derivation.
//!
//! A PDA is `SHA-256(seed_0 || ... || seed_n || bump || program_id ||
//! "ProgramDerivedAddress")` where the bump is the largest value in 255..=0
//! for which the digest is NOT a valid compressed Ed25519 point. Being off
//! the curve guarantees no private key exists for the address, so only the
//! owning program can sign for it.

use sha2::{Digest, Sha256};

use crate::address::Address;
use crate::error::PrimitivesError;

/// Maximum number of seeds, including the bump.
pub const MAX_SEEDS: usize = 16;

/// Maximum length of a single seed in bytes.
pub const MAX_SEED_LEN: usize = 32;

/// The string appended to PDA derivation: "ProgramDerivedAddress".
const PDA_MARKER: &[u8] = b"ProgramDerivedAddress";

/// Find the canonical PDA and bump for `seeds` under `program_id`.
///
/// Iterates bump seeds from 255 down to 0 and returns the first result that
/// is off the Ed25519 curve. The search is pure: identical inputs always
/// yield the identical `(address, bump)` pair.
pub fn find_program_address(
    seeds: &[&[u8]],
    program_id: &Address,
) -> Result<(Address, u8), PrimitivesError> {
    find_program_address_with(seeds, program_id, is_on_curve)
}

/// Create a PDA from seeds whose last element is already the bump.
///
/// Fails with `InvalidSeeds` if the digest lands on the curve, since that
/// bump does not produce a program address.
pub fn create_program_address(
    seeds: &[&[u8]],
    program_id: &Address,
) -> Result<Address, PrimitivesError> {
    check_seeds(seeds, MAX_SEEDS)?;

    let hash = hash_seeds(seeds, &[], program_id);
    if is_on_curve(&hash) {
        return Err(PrimitivesError::InvalidSeeds(
            "derived address lies on the ed25519 curve".into(),
        ));
    }
    Ok(Address::new_from_array(hash))
}

/// Check if 32 bytes represent a valid Ed25519 curve point.
///
/// Uses `curve25519-dalek` to attempt decompression. If it succeeds, the
/// point is on the curve.
pub fn is_on_curve(bytes: &[u8; 32]) -> bool {
    curve25519_dalek::edwards::CompressedEdwardsY(*bytes)
        .decompress()
        .is_some()
}

fn find_program_address_with(
    seeds: &[&[u8]],
    program_id: &Address,
    on_curve: impl Fn(&[u8; 32]) -> bool,
) -> Result<(Address, u8), PrimitivesError> {
    // One slot is reserved for the bump.
    check_seeds(seeds, MAX_SEEDS - 1)?;

    for bump in (0u8..=255).rev() {
        let hash = hash_seeds(seeds, &[bump], program_id);
        if !on_curve(&hash) {
            tracing::trace!(program_id = %program_id, bump, "found program address");
            return Ok((Address::new_from_array(hash), bump));
        }
    }

    Err(PrimitivesError::DerivationExhausted(format!(
        "no bump seed in 0..=255 yields an off-curve address for program {program_id}"
    )))
}

fn check_seeds(seeds: &[&[u8]], max_seeds: usize) -> Result<(), PrimitivesError> {
    if seeds.len() > max_seeds {
        return Err(PrimitivesError::InvalidSeeds(format!(
            "expected at most {max_seeds} seeds, got {}",
            seeds.len()
        )));
    }
    if let Some((i, seed)) = seeds
        .iter()
        .enumerate()
        .find(|(_, seed)| seed.len() > MAX_SEED_LEN)
    {
        return Err(PrimitivesError::InvalidSeeds(format!(
            "seed {i} is {} bytes, max is {MAX_SEED_LEN}",
            seed.len()
        )));
    }
    Ok(())
}

fn hash_seeds(seeds: &[&[u8]], bump_seed: &[u8], program_id: &Address) -> [u8; 32] {
    let mut hasher = Sha256::new();
    for seed in seeds {
        hasher.update(seed);
    }
    hasher.update(bump_seed);
    hasher.update(program_id);
    hasher.update(PDA_MARKER);
    hasher.finalize().into()
}
