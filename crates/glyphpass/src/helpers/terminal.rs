//! Terminal adapters for reveals and transient messages.
use crate::Result;
use crossterm::{
    cursor::MoveToColumn,
    execute, queue,
    style::Print,
    terminal::{Clear, ClearType},
};
use glyphpass_cli_helpers::messages::{success, success_line};
use glyphpass_reveal::{RevealStep, RevealTarget};
use parking_lot::Mutex;
use std::io::{self, IsTerminal, Stdout, Write};
use tokio::time::{sleep, Duration};
use unicode_width::UnicodeWidthChar;

/// Display column of every character in a text.
///
/// Wide characters take two columns and control characters none.
pub(crate) fn columns(text: &str) -> Vec<u16> {
    let mut offset: u16 = 0;
    text.chars()
        .map(|c| {
            let column = offset;
            offset = offset.saturating_add(c.width().unwrap_or(0) as u16);
            column
        })
        .collect()
}

/// Single terminal line that starts blank and has characters
/// printed into their columns as they are revealed.
pub(crate) struct TerminalLine {
    columns: Vec<u16>,
    out: Mutex<Stdout>,
}

impl TerminalLine {
    /// Reserve a blank line wide enough for `text`.
    pub fn new(text: &str) -> Result<Self> {
        let columns = columns(text);
        let width: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
        let mut out = io::stdout();
        execute!(out, Print(" ".repeat(width)), MoveToColumn(0))?;
        Ok(Self {
            columns,
            out: Mutex::new(out),
        })
    }

    /// Move past the animated line.
    pub fn finish(&self) -> Result<()> {
        let mut out = self.out.lock();
        writeln!(out)?;
        out.flush()?;
        Ok(())
    }
}

impl RevealTarget for TerminalLine {
    fn reveal(&self, step: &RevealStep) {
        if step.character.is_control() {
            return;
        }
        let Some(column) = self.columns.get(step.index) else {
            return;
        };
        let mut out = self.out.lock();
        let printed = queue!(out, MoveToColumn(*column), Print(step.character))
            .and_then(|_| out.flush());
        if let Err(e) = printed {
            tracing::debug!(error = ?e, index = step.index, "reveal::print");
        }
    }
}

/// Show a success message for `duration` then erase it.
///
/// When stdout is not a terminal the message is printed and kept.
pub(crate) async fn transient_success(
    msg: &str,
    duration: Duration,
) -> Result<()> {
    let mut out = io::stdout();
    if !out.is_terminal() {
        success(msg);
        return Ok(());
    }
    execute!(out, Print(success_line(msg)))?;
    sleep(duration).await;
    execute!(out, MoveToColumn(0), Clear(ClearType::CurrentLine))?;
    Ok(())
}
