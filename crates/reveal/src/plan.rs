//! Reveal plans.
use crate::Stagger;
use std::time::Duration;

/// Single scheduled reveal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStep {
    /// Zero-based position of the character in the text.
    pub index: usize,
    /// Character to reveal.
    pub character: char,
    /// Cumulative delay in seconds from the start of the animation.
    pub delay_seconds: f64,
}

impl RevealStep {
    /// Delay before this character is revealed.
    pub fn delay(&self) -> Duration {
        Duration::try_from_secs_f64(self.delay_seconds)
            .unwrap_or(Duration::MAX)
    }
}

/// Ordered reveal steps for a text, one per character.
///
/// Steps are computed lazily by [RevealPlan::iter].
#[derive(Debug, Clone)]
pub struct RevealPlan {
    characters: Vec<char>,
    stagger: Stagger,
}

impl RevealPlan {
    /// Number of steps.
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    /// Determine if the plan has no steps.
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Stagger between steps.
    pub fn stagger(&self) -> Stagger {
        self.stagger
    }

    /// Delay of the last step, zero for an empty plan.
    pub fn total_delay(&self) -> Duration {
        self.iter().last().map(|s| s.delay()).unwrap_or_default()
    }

    /// Iterate the steps in index order.
    pub fn iter(&self) -> impl Iterator<Item = RevealStep> + '_ {
        let stagger = self.stagger.seconds();
        self.characters
            .iter()
            .enumerate()
            .map(move |(index, character)| RevealStep {
                index,
                character: *character,
                delay_seconds: index as f64 * stagger,
            })
    }
}

/// Plan the reveal of every character in `text`.
///
/// The character at index `i` is revealed after
/// `i * stagger` seconds.
pub fn plan(text: &str, stagger: Stagger) -> RevealPlan {
    RevealPlan {
        characters: text.chars().collect(),
        stagger,
    }
}
