//! Copy text to the system clipboard.
use crate::{
    helpers::{
        messages::{fail, info},
        terminal::transient_success,
    },
    ClipboardSettings, Result,
};
use glyphpass_clipboard::{Clipboard, TextClipboard, DEFAULT_TIMEOUT_SECONDS};
use tokio::time::Duration;

const NOTHING_TO_COPY: &str = "nothing to copy";
const COPY_FAILED: &str = "failed to copy to the clipboard";
const COPIED: &str = "Copied!";

/// Seconds copied text stays on the clipboard.
///
/// The configured clear timeout, otherwise the clipboard default.
pub fn hold_seconds(settings: &ClipboardSettings) -> u16 {
    settings
        .clear_after_seconds
        .unwrap_or(DEFAULT_TIMEOUT_SECONDS)
}

/// Copy text to the system clipboard and show a confirmation.
///
/// When a clear timeout is configured the text is cleared once it
/// elapses. Where the clipboard is served by this process the
/// command keeps serving it until the hold time passes or another
/// program copies something. Failures are reported and never
/// retried.
pub async fn run(text: &str, settings: &ClipboardSettings) -> Result<()> {
    if text.is_empty() {
        fail(NOTHING_TO_COPY);
        return Ok(());
    }

    let hold = hold_seconds(settings);
    let deadline =
        std::time::Instant::now() + Duration::from_secs(hold.into());

    let mut clipboard = match Clipboard::new_timeout(hold) {
        Ok(clipboard) => clipboard,
        Err(e) => {
            tracing::warn!(error = ?e, "clipboard::new");
            fail(format!("{}: {}", COPY_FAILED, e));
            return Ok(());
        }
    };

    let placed = match settings.clear_after_seconds {
        Some(_) => clipboard.set_text_timeout(text).map(Some),
        None => clipboard.write_text(text).map(|_| None),
    };
    let clear = match placed {
        Ok(clear) => clear,
        Err(e) => {
            tracing::warn!(error = ?e, "clipboard::write");
            fail(format!("{}: {}", COPY_FAILED, e));
            return Ok(());
        }
    };

    transient_success(
        COPIED,
        Duration::from_secs(settings.confirmation_seconds),
    )
    .await?;

    if clear.is_some() {
        info(format!("clipboard clears in {} seconds", hold));
    } else if Clipboard::SERVES_CONTENTS {
        info(format!("clipboard is kept for {} seconds", hold));
    }

    if Clipboard::SERVES_CONTENTS {
        let text = text.to_owned();
        let served = tokio::task::block_in_place(|| {
            clipboard.serve_text_until(text, deadline)
        });
        if let Err(e) = served {
            tracing::warn!(error = ?e, "clipboard::serve");
        }
    }

    if let Some(handle) = clear {
        if let Err(e) = handle.await {
            tracing::warn!(error = ?e, "clipboard::clear_after");
        }
    }
    Ok(())
}
