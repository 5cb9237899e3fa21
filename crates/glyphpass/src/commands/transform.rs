//! Print the transformed form of a base word.
use crate::Result;
use glyphpass_password::transform_word;

/// Print the leetspeak transformation of `word`.
pub fn run(word: &str) -> Result<()> {
    println!("{}", transform_word(word));
    Ok(())
}
