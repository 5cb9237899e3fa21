#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![cfg_attr(all(doc, CHANNEL_NIGHTLY), feature(doc_auto_cfg))]
//! Compose passwords from a base word.
//!
//! The base word is run through a leetspeak style substitution
//! table and then extended to the requested length with random
//! characters drawn from the enabled character classes using
//! one of the insertion [patterns](Pattern).
//!
//! ```
//! use glyphpass_password::{CharacterClasses, PasswordRequest};
//! use secrecy::ExposeSecret;
//!
//! let request = PasswordRequest::new(12)
//!     .word("lobster")
//!     .classes(CharacterClasses::all());
//! let result = request.one().unwrap();
//! assert_eq!(12, result.password.expose_secret().chars().count());
//! ```

mod charset;
mod composer;
mod error;
mod transform;

pub use charset::{
    CharacterClasses, LOWERCASE, NUMBERS, STRATEGIC_SYMBOLS, SYMBOLS,
    UPPERCASE,
};
pub use composer::{
    compose, LengthBounds, PasswordRequest, PasswordResult, Pattern,
    PRESET_LENGTHS,
};
pub use error::Error;
pub use transform::transform_word;

pub use ::zxcvbn;

use ::zxcvbn::{zxcvbn, Entropy};

/// Default cryptographically secure RNG.
pub(crate) fn csprng() -> impl rand::CryptoRng + rand::Rng {
    rand::rngs::OsRng
}

/// Measure the entropy in a password.
pub fn measure_entropy(password: &str, user_inputs: &[&str]) -> Entropy {
    zxcvbn(password, user_inputs)
}

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;
