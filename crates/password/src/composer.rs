//! Compose passwords from a base word.
use crate::{
    charset::{CharacterClasses, LOWERCASE, NUMBERS, STRATEGIC_SYMBOLS, SYMBOLS},
    csprng, measure_entropy, transform_word, Error, Result,
};
use rand::Rng;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use zxcvbn::Entropy;

/// Preset password lengths.
pub const PRESET_LENGTHS: [usize; 4] = [8, 12, 16, 24];

/// Classes that composition tries to guarantee are present
/// when enabled.
const GUARANTEED: [(CharacterClasses, &str); 2] = [
    (CharacterClasses::NUMBERS, NUMBERS),
    (CharacterClasses::SYMBOLS, SYMBOLS),
];

/// Pattern used to extend the base word.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pattern {
    /// Transformed word followed by a random suffix.
    #[default]
    Append,
    /// Transformed word with one substitution and scattered
    /// random insertions.
    #[serde(alias = "alter-base", alias = "alterBase")]
    AlterBase,
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Append => "append",
                Self::AlterBase => "alter_base",
            }
        )
    }
}

impl FromStr for Pattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "append" => Ok(Self::Append),
            "alter_base" | "alter-base" | "alterBase" => Ok(Self::AlterBase),
            _ => Err(Error::UnknownPattern(s.to_owned())),
        }
    }
}

/// Inclusive bounds for the desired password length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBounds {
    /// Minimum length.
    pub min: usize,
    /// Maximum length.
    pub max: usize,
}

impl Default for LengthBounds {
    fn default() -> Self {
        Self { min: 1, max: 128 }
    }
}

impl LengthBounds {
    /// Determine if a length is inside the bounds.
    pub fn contains(&self, length: usize) -> bool {
        (self.min..=self.max).contains(&length)
    }

    fn check(&self, length: usize) -> Result<()> {
        if self.contains(length) {
            Ok(())
        } else {
            Err(Error::LengthOutOfBounds {
                length,
                min: self.min,
                max: self.max,
            })
        }
    }
}

/// Composed password.
#[derive(Debug)]
pub struct PasswordResult {
    /// The composed password.
    pub password: SecretString,
}

impl PasswordResult {
    fn new(password: String) -> Self {
        Self {
            password: password.into(),
        }
    }

    /// Number of characters in the password.
    pub fn len(&self) -> usize {
        self.password.expose_secret().chars().count()
    }

    /// Determine if the password is empty.
    pub fn is_empty(&self) -> bool {
        self.password.expose_secret().is_empty()
    }

    /// Compute the entropy for the password.
    pub fn entropy(&self) -> Entropy {
        measure_entropy(self.password.expose_secret(), &[])
    }
}

/// Options for password composition.
#[derive(Debug, Clone)]
pub struct PasswordRequest {
    base_word: String,
    length: usize,
    classes: CharacterClasses,
    pattern: Pattern,
    bounds: LengthBounds,
}

impl PasswordRequest {
    /// Create a request for a password of the given length
    /// with no base word and no character classes.
    pub fn new(length: usize) -> Self {
        Self {
            base_word: String::new(),
            length,
            classes: CharacterClasses::empty(),
            pattern: Pattern::default(),
            bounds: LengthBounds::default(),
        }
    }

    /// Set the base word.
    pub fn word(mut self, word: impl Into<String>) -> Self {
        self.base_word = word.into();
        self
    }

    /// Set the enabled character classes.
    pub fn classes(mut self, classes: CharacterClasses) -> Self {
        self.classes = classes;
        self
    }

    /// Use uppercase roman letters.
    pub fn upper(mut self) -> Self {
        self.classes |= CharacterClasses::UPPERCASE;
        self
    }

    /// Use lowercase roman letters.
    pub fn lower(mut self) -> Self {
        self.classes |= CharacterClasses::LOWERCASE;
        self
    }

    /// Use numeric digits.
    pub fn numeric(mut self) -> Self {
        self.classes |= CharacterClasses::NUMBERS;
        self
    }

    /// Use punctuation symbols.
    pub fn symbols(mut self) -> Self {
        self.classes |= CharacterClasses::SYMBOLS;
        self
    }

    /// Set the insertion pattern.
    pub fn pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = pattern;
        self
    }

    /// Set the accepted length bounds.
    pub fn bounds(mut self, bounds: LengthBounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Desired password length.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Determine if the desired length is zero.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Base word before transformation.
    pub fn base_word(&self) -> &str {
        &self.base_word
    }

    /// Enabled character classes.
    pub fn enabled_classes(&self) -> CharacterClasses {
        self.classes
    }

    /// Selected insertion pattern.
    pub fn selected_pattern(&self) -> Pattern {
        self.pattern
    }

    /// Compose a password using the system CSPRNG.
    pub fn one(&self) -> Result<PasswordResult> {
        compose(self, &mut csprng())
    }

    /// Compose multiple passwords.
    pub fn many(&self, count: usize) -> Result<Vec<PasswordResult>> {
        let mut results = Vec::with_capacity(count);
        for _ in 0..count {
            results.push(self.one()?);
        }
        Ok(results)
    }
}

/// Compose a password from a request using the given
/// source of randomness.
///
/// When the transformed base word is at least as long as the
/// desired length it is truncated and no randomness is used.
pub fn compose<R: Rng>(
    request: &PasswordRequest,
    rng: &mut R,
) -> Result<PasswordResult> {
    request.bounds.check(request.length)?;

    let word: Vec<char> = transform_word(&request.base_word).chars().collect();
    if word.len() >= request.length {
        tracing::debug!(length = request.length, "compose::truncate");
        return Ok(PasswordResult::new(
            word.into_iter().take(request.length).collect(),
        ));
    }

    let alphabet = request.classes.alphabet();
    tracing::debug!(
        pattern = %request.pattern,
        length = request.length,
        alphabet_len = alphabet.len(),
        "compose",
    );

    let password = match request.pattern {
        Pattern::Append => append(request, word, &alphabet, rng)?,
        Pattern::AlterBase => alter_base(request, word, &alphabet, rng)?,
    };
    Ok(PasswordResult::new(password.into_iter().collect()))
}

fn append<R: Rng>(
    request: &PasswordRequest,
    mut word: Vec<char>,
    alphabet: &str,
    rng: &mut R,
) -> Result<Vec<char>> {
    if request.classes.contains(CharacterClasses::SYMBOLS) && word.len() >= 3
    {
        let symbol = pick(STRATEGIC_SYMBOLS, rng);
        let position = rng.gen_range(1..word.len() - 1);
        word.insert(position, symbol);
    }

    let needed = request.length.saturating_sub(word.len());
    if needed > 0 {
        if alphabet.is_empty() {
            return Err(Error::NoCharacterClasses {
                pattern: Pattern::Append,
                partial: word.iter().collect::<String>().into(),
            });
        }
        let mut suffix = random_chars(alphabet, needed, rng);
        ensure_classes(request.classes, &mut word, &mut suffix, rng);
        word.extend(suffix);
    }

    Ok(fit(word, request.length, alphabet, rng))
}

fn alter_base<R: Rng>(
    request: &PasswordRequest,
    mut word: Vec<char>,
    alphabet: &str,
    rng: &mut R,
) -> Result<Vec<char>> {
    if alphabet.is_empty() {
        return Err(Error::NoCharacterClasses {
            pattern: Pattern::AlterBase,
            partial: word.iter().collect::<String>().into(),
        });
    }

    if !word.is_empty() {
        let index = rng.gen_range(0..word.len());
        word[index] = pick(alphabet, rng);
    }

    let needed = request.length.saturating_sub(word.len());
    let mut padding = random_chars(alphabet, needed, rng);
    ensure_classes(request.classes, &mut word, &mut padding, rng);

    for c in padding {
        let index = rng.gen_range(0..=word.len());
        word.insert(index, c);
    }

    Ok(fit(word, request.length, alphabet, rng))
}

/// Best effort guarantee that enabled numbers and symbols appear.
///
/// A missing class overwrites one random position of the
/// generated segment, or of the base segment when nothing was
/// generated. Later overwrites are not re-checked.
fn ensure_classes<R: Rng>(
    classes: CharacterClasses,
    base: &mut [char],
    generated: &mut [char],
    rng: &mut R,
) {
    for (class, chars) in GUARANTEED {
        if !classes.contains(class) {
            continue;
        }
        let present = base
            .iter()
            .chain(generated.iter())
            .any(|c| chars.contains(*c));
        if present {
            continue;
        }
        let target = if generated.is_empty() {
            &mut *base
        } else {
            &mut *generated
        };
        if !target.is_empty() {
            let index = rng.gen_range(0..target.len());
            target[index] = pick(chars, rng);
        }
    }
}

/// Truncate or pad to exactly `length` characters.
fn fit<R: Rng>(
    mut password: Vec<char>,
    length: usize,
    alphabet: &str,
    rng: &mut R,
) -> Vec<char> {
    if password.len() > length {
        password.truncate(length);
    } else if password.len() < length {
        let source = if alphabet.is_empty() { LOWERCASE } else { alphabet };
        let needed = length - password.len();
        password.extend(random_chars(source, needed, rng));
    }
    password
}

fn random_chars<R: Rng>(chars: &str, count: usize, rng: &mut R) -> Vec<char> {
    (0..count).map(|_| pick(chars, rng)).collect()
}

/// Pick a random character from a non-empty ASCII set.
fn pick<R: Rng>(chars: &str, rng: &mut R) -> char {
    let bytes = chars.as_bytes();
    bytes[rng.gen_range(0..bytes.len())] as char
}
