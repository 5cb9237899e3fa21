//! Leetspeak substitution for base words.

/// Substitution table keyed by lowercase letter.
const SUBSTITUTIONS: [(char, char); 5] =
    [('l', '1'), ('o', '0'), ('s', '5'), ('q', '9'), ('b', '8')];

/// Transform a base word by replacing every `l`, `o`, `s`, `q`
/// and `b` (in either case) with `1`, `0`, `5`, `9` and `8`.
///
/// All other characters pass through unchanged. Because none of
/// the replacement digits are keys in the table the transformation
/// is idempotent.
pub fn transform_word(word: &str) -> String {
    word.chars().map(substitute).collect()
}

fn substitute(c: char) -> char {
    let key = c.to_ascii_lowercase();
    SUBSTITUTIONS
        .iter()
        .find(|(from, _)| *from == key)
        .map(|(_, to)| *to)
        .unwrap_or(c)
}
