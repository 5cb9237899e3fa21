//! Compose passwords from a base word.
use crate::{
    commands::copy,
    helpers::messages::{fail, info},
    Config, PasswordSettings, Result,
};
use clap::Args;
use glyphpass_password::{
    CharacterClasses, Error as PasswordError, PasswordRequest, Pattern,
    PRESET_LENGTHS,
};
use secrecy::ExposeSecret;

/// Parse a preset length.
pub fn parse_preset(value: &str) -> std::result::Result<usize, String> {
    let presets = PRESET_LENGTHS
        .iter()
        .map(|length| length.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    match value.parse::<usize>() {
        Ok(length) if PRESET_LENGTHS.contains(&length) => Ok(length),
        _ => Err(format!("expected one of {}", presets)),
    }
}

/// Options for the generate command.
#[derive(Args, Debug, Default)]
pub struct GenerateOptions {
    /// Password length, defaults to the configured length.
    #[clap(short, long)]
    pub length: Option<usize>,

    /// Preset password length: 8, 12, 16 or 24.
    #[clap(long, value_parser = parse_preset, conflicts_with = "length")]
    pub preset: Option<usize>,

    /// Base word to transform and extend.
    #[clap(short, long, default_value = "")]
    pub word: String,

    /// Pattern used to extend the word: append or alter_base.
    #[clap(short, long)]
    pub pattern: Option<Pattern>,

    /// Exclude uppercase letters.
    #[clap(long)]
    pub no_upper: bool,

    /// Exclude lowercase letters.
    #[clap(long)]
    pub no_lower: bool,

    /// Exclude numeric digits.
    #[clap(long)]
    pub no_numbers: bool,

    /// Exclude punctuation symbols.
    #[clap(long)]
    pub no_symbols: bool,

    /// Number of passwords to generate.
    #[clap(short, long, default_value_t = 1)]
    pub count: usize,

    /// Copy the first password to the clipboard.
    #[clap(long)]
    pub copy: bool,

    /// Print the strength estimate for each password.
    #[clap(short, long)]
    pub entropy: bool,
}

impl GenerateOptions {
    /// Character classes left enabled by the exclusion flags.
    pub fn classes(&self) -> CharacterClasses {
        let mut classes = CharacterClasses::all();
        classes.set(CharacterClasses::UPPERCASE, !self.no_upper);
        classes.set(CharacterClasses::LOWERCASE, !self.no_lower);
        classes.set(CharacterClasses::NUMBERS, !self.no_numbers);
        classes.set(CharacterClasses::SYMBOLS, !self.no_symbols);
        classes
    }

    /// Build the password request, falling back to the
    /// configured length and pattern.
    pub fn request(&self, settings: &PasswordSettings) -> PasswordRequest {
        let length = self
            .length
            .or(self.preset)
            .unwrap_or(settings.default_length);
        PasswordRequest::new(length)
            .word(self.word.clone())
            .classes(self.classes())
            .pattern(self.pattern.unwrap_or(settings.pattern))
            .bounds(settings.bounds())
    }
}

/// Compose and print passwords.
///
/// A length outside the configured bounds prints nothing;
/// a missing character class prints the partial password.
/// Both are reported as failures without aborting.
pub async fn run(options: GenerateOptions, config: &Config) -> Result<()> {
    let request = options.request(&config.password);
    let results = match request.many(options.count.max(1)) {
        Ok(results) => results,
        Err(e @ PasswordError::UnknownPattern(_)) => return Err(e.into()),
        Err(e) => {
            if let PasswordError::NoCharacterClasses { partial, .. } = &e {
                println!("{}", partial.expose_secret());
            }
            fail(e.to_string());
            return Ok(());
        }
    };

    for result in &results {
        println!("{}", result.password.expose_secret());
        if options.entropy {
            let entropy = result.entropy();
            info(format!(
                "strength {}/4, about 10^{:.1} guesses",
                entropy.score() as u8,
                entropy.guesses_log10(),
            ));
        }
    }

    if options.copy {
        if let Some(first) = results.first() {
            copy::run(first.password.expose_secret(), &config.clipboard)
                .await?;
        }
    }
    Ok(())
}
