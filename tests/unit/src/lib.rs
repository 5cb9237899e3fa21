//! Shared helpers for the unit tests.
use glyphpass_password::{NUMBERS, SYMBOLS};
use rand::{rngs::StdRng, SeedableRng};
use secrecy::ExposeSecret;

/// Seeds used by the property style tests.
pub const SEEDS: std::ops::Range<u64> = 0..200;

/// Deterministic RNG for a seed.
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Characters of a composed password.
pub fn chars(password: &secrecy::SecretString) -> Vec<char> {
    password.expose_secret().chars().collect()
}

/// Determine if a password contains a numeric digit.
pub fn has_number(password: &[char]) -> bool {
    password.iter().any(|c| NUMBERS.contains(*c))
}

/// Determine if a password contains a punctuation symbol.
pub fn has_symbol(password: &[char]) -> bool {
    password.iter().any(|c| SYMBOLS.contains(*c))
}
