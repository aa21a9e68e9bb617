//! Seed hashing.
//!
//! Every catalog selection starts from a 32-bit seed derived from a string.
//! The hash operates on UTF-16 code units. Seeds of already-deployed sites
//! were assigned over UTF-16, so hashing UTF-8 bytes would reassign them.
//!
//! # Algorithm
//!
//! 1. Start with `5381`.
//! 2. For each code unit: `acc = acc * 33 ^ unit` (wrapping, 32-bit).
//! 3. Avalanche: `acc ^= acc >> 16; acc *= 0x85ebca6b; acc ^= acc >> 13`.
//! 4. Reinterpret as signed and take the absolute value.
//!
//! The result is always in `0..=2^31`, so it is directly usable as an index
//! once reduced modulo a catalog length.
//!
//! # Example
//!
//! ```
//! use design_dna::hash::{hash_reversed, hash_str};
//!
//! assert_eq!(hash_str("example.com"), 1_119_674_576);
//! assert_eq!(hash_reversed("example.com"), hash_str("moc.elpmaxe"));
//! ```

/// Initial accumulator value.
pub const SEED_BASIS: u32 = 5381;

const AVALANCHE_MULTIPLIER: u32 = 0x85eb_ca6b;

/// Hashes a string by its UTF-16 code units.
pub fn hash_str(text: &str) -> u32 {
    hash_units(text.encode_utf16())
}

/// Hashes the concatenation of `parts` without allocating it.
pub fn hash_concat(parts: &[&str]) -> u32 {
    hash_units(parts.iter().flat_map(|part| part.encode_utf16()))
}

/// Hashes the code-unit reversal of `text`.
///
/// Reversal is per UTF-16 code unit, so surrogate pairs are split and
/// swapped. Deployed seeds depend on this.
pub fn hash_reversed(text: &str) -> u32 {
    hash_units(reversed_units(text))
}

/// Hashes an arbitrary sequence of UTF-16 code units.
pub fn hash_units(units: impl IntoIterator<Item = u16>) -> u32 {
    let mut acc = SEED_BASIS;
    for unit in units {
        acc = acc.wrapping_mul(33) ^ u32::from(unit);
    }

    acc ^= acc >> 16;
    acc = acc.wrapping_mul(AVALANCHE_MULTIPLIER);
    acc ^= acc >> 13;

    (acc as i32).unsigned_abs()
}

/// Returns the UTF-16 code units of `text` in reverse order.
pub fn reversed_units(text: &str) -> impl Iterator<Item = u16> {
    let units: Vec<u16> = text.encode_utf16().collect();
    units.into_iter().rev()
}
