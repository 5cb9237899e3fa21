//! Animate text one character at a time.
use crate::{helpers::terminal::TerminalLine, RevealSettings, Result};
use glyphpass_reveal::{plan, schedule, Stagger, StaggerProfile};
use std::{
    io::{stdout, IsTerminal},
    sync::Arc,
};

/// Resolve the stagger from the command line delay, then the
/// configured delay, then the profile fallback.
pub fn stagger(
    delay: Option<&str>,
    profile: Option<StaggerProfile>,
    settings: &RevealSettings,
) -> Stagger {
    let profile = profile.unwrap_or(settings.profile);
    profile.resolve(delay.or(settings.base_delay.as_deref()))
}

/// Reveal `text` on the terminal.
///
/// Blank text is left alone. When stdout is not a terminal the
/// text is printed without animation.
pub async fn run(
    text: &str,
    delay: Option<&str>,
    profile: Option<StaggerProfile>,
    settings: &RevealSettings,
) -> Result<()> {
    if text.trim().is_empty() {
        return Ok(());
    }

    if !stdout().is_terminal() {
        println!("{}", text);
        return Ok(());
    }

    let stagger = stagger(delay, profile, settings);
    let reveal_plan = plan(text, stagger);
    let line = Arc::new(TerminalLine::new(text)?);
    schedule(&reveal_plan, Arc::clone(&line)).join().await?;
    line.finish()?;
    Ok(())
}
