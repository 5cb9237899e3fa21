use anyhow::Result;
use glyphpass_password::{
    compose, transform_word, CharacterClasses, Error, LengthBounds,
    PasswordRequest, Pattern, LOWERCASE, NUMBERS, STRATEGIC_SYMBOLS, SYMBOLS,
};
use glyphpass_unit_tests::{chars, has_number, has_symbol, seeded, SEEDS};
use secrecy::ExposeSecret;

const PATTERNS: [Pattern; 2] = [Pattern::Append, Pattern::AlterBase];

#[test]
fn compose_short_circuit_without_classes() -> Result<()> {
    for pattern in PATTERNS {
        let request = PasswordRequest::new(3).word("bob").pattern(pattern);
        let result = compose(&request, &mut seeded(0))?;
        assert_eq!("808", result.password.expose_secret());
    }
    Ok(())
}

#[test]
fn compose_truncates_long_word() -> Result<()> {
    for pattern in PATTERNS {
        let request = PasswordRequest::new(5)
            .word("lobsterlobster")
            .classes(CharacterClasses::all())
            .pattern(pattern);
        let result = compose(&request, &mut seeded(0))?;
        assert_eq!("1085t", result.password.expose_secret());
    }
    Ok(())
}

#[test]
fn compose_empty_word_append() -> Result<()> {
    let alphabet = format!("{}{}", LOWERCASE, NUMBERS);
    for seed in SEEDS {
        let request = PasswordRequest::new(8).lower().numeric();
        let result = compose(&request, &mut seeded(seed))?;
        let password = chars(&result.password);
        assert_eq!(8, password.len());
        assert!(password.iter().all(|c| alphabet.contains(*c)));
        assert!(has_number(&password));
    }
    Ok(())
}

#[test]
fn compose_exact_length() -> Result<()> {
    let words = ["", "a", "bob", "lobster", "日本語", "correct horse"];
    let classes = [
        CharacterClasses::LOWERCASE,
        CharacterClasses::NUMBERS,
        CharacterClasses::SYMBOLS,
        CharacterClasses::UPPERCASE | CharacterClasses::SYMBOLS,
        CharacterClasses::all(),
    ];
    for seed in 0..20 {
        let mut rng = seeded(seed);
        for pattern in PATTERNS {
            for word in words {
                for set in classes {
                    for length in [1, 4, 9, 16, 64, 128] {
                        let request = PasswordRequest::new(length)
                            .word(word)
                            .classes(set)
                            .pattern(pattern);
                        let result = compose(&request, &mut rng)?;
                        assert_eq!(length, result.len());
                    }
                }
            }
        }
    }
    Ok(())
}

#[test]
fn compose_length_out_of_bounds() {
    let bounds = LengthBounds { min: 4, max: 32 };
    for length in [0, 3, 33] {
        let request = PasswordRequest::new(length)
            .word("bob")
            .classes(CharacterClasses::all())
            .bounds(bounds);
        let result = compose(&request, &mut seeded(0));
        assert!(matches!(
            result,
            Err(Error::LengthOutOfBounds { min: 4, max: 32, .. })
        ));
    }
}

#[test]
fn compose_bounds_checked_before_truncation() {
    let request = PasswordRequest::new(3)
        .word("lobster")
        .bounds(LengthBounds { min: 8, max: 16 });
    assert!(matches!(
        compose(&request, &mut seeded(0)),
        Err(Error::LengthOutOfBounds { length: 3, .. })
    ));
}

#[test]
fn compose_no_classes_returns_partial() {
    for pattern in PATTERNS {
        let request = PasswordRequest::new(8).word("bob").pattern(pattern);
        match compose(&request, &mut seeded(0)) {
            Err(Error::NoCharacterClasses {
                pattern: failed,
                partial,
            }) => {
                assert_eq!(pattern, failed);
                assert_eq!("808", partial.expose_secret());
            }
            other => panic!("expected missing classes, got {:?}", other),
        }
    }
}

#[test]
fn append_keeps_word_prefix() -> Result<()> {
    for seed in SEEDS {
        let request = PasswordRequest::new(12)
            .word("lobster")
            .upper()
            .lower()
            .numeric();
        let result = compose(&request, &mut seeded(seed))?;
        let password = result.password.expose_secret();
        assert!(password.starts_with("1085ter"));
        assert_eq!(12, password.chars().count());
    }
    Ok(())
}

#[test]
fn append_strategic_symbol_inside_word() -> Result<()> {
    for seed in SEEDS {
        let request = PasswordRequest::new(12).word("password").symbols();
        let result = compose(&request, &mut seeded(seed))?;
        let password = chars(&result.password);
        assert_eq!(12, password.len());

        let position = password
            .iter()
            .position(|c| SYMBOLS.contains(*c))
            .expect("strategic symbol");
        assert!((1..=6).contains(&position));
        assert!(STRATEGIC_SYMBOLS.contains(password[position]));

        let mut word = password[..9].to_vec();
        word.remove(position);
        assert_eq!("pa55w0rd", word.iter().collect::<String>());
        assert!(password[9..].iter().all(|c| SYMBOLS.contains(*c)));
    }
    Ok(())
}

#[test]
fn append_short_word_has_no_strategic_symbol() -> Result<()> {
    for seed in SEEDS {
        let request = PasswordRequest::new(6).word("ab").lower().symbols();
        let result = compose(&request, &mut seeded(seed))?;
        let password = result.password.expose_secret();
        assert!(password.starts_with("a8"));
        assert!(has_symbol(&chars(&result.password)[2..]));
    }
    Ok(())
}

#[test]
fn alter_base_scatters_extension() -> Result<()> {
    let word: Vec<char> = transform_word("lobster").chars().collect();
    for seed in SEEDS {
        let request = PasswordRequest::new(16)
            .word("lobster")
            .classes(CharacterClasses::all())
            .pattern(Pattern::AlterBase);
        let result = compose(&request, &mut seeded(seed))?;
        let mut remaining = chars(&result.password);
        assert_eq!(16, remaining.len());

        let mut kept = 0;
        for c in &word {
            if let Some(index) = remaining.iter().position(|r| r == c) {
                remaining.remove(index);
                kept += 1;
            }
        }
        assert!(kept >= word.len() - 1);
    }
    Ok(())
}

#[test]
fn alter_base_guarantees_single_class() -> Result<()> {
    for seed in SEEDS {
        let numbers = PasswordRequest::new(10)
            .word("bob")
            .lower()
            .numeric()
            .pattern(Pattern::AlterBase);
        let result = compose(&numbers, &mut seeded(seed))?;
        assert!(has_number(&chars(&result.password)));

        let symbols = PasswordRequest::new(10)
            .word("word")
            .upper()
            .symbols()
            .pattern(Pattern::AlterBase);
        let result = compose(&symbols, &mut seeded(seed))?;
        assert!(has_symbol(&chars(&result.password)));
    }
    Ok(())
}

#[test]
fn compose_is_deterministic_for_seed() -> Result<()> {
    for pattern in PATTERNS {
        let request = PasswordRequest::new(20)
            .word("lobster")
            .classes(CharacterClasses::all())
            .pattern(pattern);
        let first = compose(&request, &mut seeded(42))?;
        let second = compose(&request, &mut seeded(42))?;
        assert_eq!(
            first.password.expose_secret(),
            second.password.expose_secret()
        );
    }
    Ok(())
}

#[test]
fn compose_many_secure() -> Result<()> {
    let request = PasswordRequest::new(24)
        .word("quiet")
        .classes(CharacterClasses::all());
    let passwords = request.many(5)?;
    assert_eq!(5, passwords.len());
    for result in passwords {
        assert_eq!(24, result.len());
    }
    Ok(())
}
