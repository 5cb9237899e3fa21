#![deny(missing_docs)]
#![forbid(unsafe_code)]
//! Access to the native system clipboard.
//!
//! Text can be placed with a timeout after which it is cleared,
//! but only when the clipboard still holds that text so a later
//! copy made elsewhere is left alone.
use thiserror::Error;
use tokio::{
    task::JoinHandle,
    time::{sleep, Duration},
};
use zeroize::Zeroize;

/// Seconds before copied text is cleared when no timeout
/// is configured.
pub const DEFAULT_TIMEOUT_SECONDS: u16 = 90;

/// Errors generated by the clipboard library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error generated by the native clipboard.
    #[error(transparent)]
    Clipboard(#[from] arboard::Error),
}

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Text operations on a clipboard.
pub trait TextClipboard {
    /// Replace the contents with `text`.
    fn write_text(&mut self, text: &str) -> Result<()>;

    /// Current text contents.
    fn read_text(&mut self) -> Result<String>;

    /// Remove the contents.
    fn clear_text(&mut self) -> Result<()>;
}

/// Clear the clipboard when it still holds `source`.
///
/// Returns whether the clipboard was cleared. The text read
/// back for the comparison is zeroized.
pub fn clear_if_unchanged<C: TextClipboard>(
    clipboard: &mut C,
    source: &str,
) -> Result<bool> {
    let mut current = clipboard.read_text()?;
    let unchanged = current == source;
    current.zeroize();
    if unchanged {
        clipboard.clear_text()?;
    }
    Ok(unchanged)
}

/// Spawn a task that waits for `timeout` then opens a clipboard
/// with `open` and clears it when it still holds `source`.
///
/// The task resolves to whether the clipboard was cleared;
/// failures are logged and resolve to `false`. The retained
/// copy of `source` is zeroized. Must be called from within a
/// tokio runtime.
pub fn clear_after<C, F>(
    timeout: Duration,
    mut source: String,
    open: F,
) -> JoinHandle<bool>
where
    C: TextClipboard,
    F: FnOnce() -> Result<C> + Send + 'static,
{
    tokio::task::spawn(async move {
        sleep(timeout).await;
        let cleared = match open().and_then(|mut clipboard| {
            clear_if_unchanged(&mut clipboard, &source)
        }) {
            Ok(cleared) => {
                tracing::info!(
                    timeout = timeout.as_secs(),
                    cleared,
                    "clipboard::clear"
                );
                cleared
            }
            Err(e) => {
                tracing::warn!(error = ?e, "clipboard::clear");
                false
            }
        };
        source.zeroize();
        cleared
    })
}

/// Native system clipboard.
///
/// Wraps [arboard::Clipboard] and adds setting text with a
/// timeout that clears the clipboard content.
pub struct Clipboard {
    clipboard: arboard::Clipboard,
    timeout_seconds: u16,
}

impl Clipboard {
    /// Whether copied text is only available while this process
    /// holds the clipboard.
    pub const SERVES_CONTENTS: bool = cfg!(linux_selection);

    /// Create a native clipboard using the default timeout.
    pub fn new() -> Result<Self> {
        Self::new_timeout(DEFAULT_TIMEOUT_SECONDS)
    }

    /// Create a native clipboard with a timeout.
    pub fn new_timeout(timeout_seconds: u16) -> Result<Self> {
        Ok(Self {
            clipboard: arboard::Clipboard::new()?,
            timeout_seconds,
        })
    }

    /// Places text on to the clipboard and spawns a task that
    /// clears it after the timeout.
    ///
    /// Must be called from within a tokio runtime.
    pub fn set_text_timeout(
        &mut self,
        text: &str,
    ) -> Result<JoinHandle<bool>> {
        self.write_text(text)?;
        Ok(clear_after(
            Duration::from_secs(self.timeout_seconds.into()),
            text.to_owned(),
            Clipboard::new,
        ))
    }

    /// Places text on to the clipboard and keeps serving it until
    /// `deadline` or until another program takes ownership of
    /// the clipboard.
    ///
    /// X11 and Wayland clipboards are served by the process that
    /// set them, so a short lived process must block here before
    /// exiting; see [Clipboard::SERVES_CONTENTS]. Elsewhere the
    /// text is placed and the call returns at once. The text is
    /// zeroized once the clipboard is released.
    pub fn serve_text_until(
        &mut self,
        mut text: String,
        deadline: std::time::Instant,
    ) -> Result<()> {
        let served = self.serve(&text, deadline);
        text.zeroize();
        served
    }

    #[cfg(linux_selection)]
    fn serve(
        &mut self,
        text: &str,
        deadline: std::time::Instant,
    ) -> Result<()> {
        use arboard::SetExtLinux;
        Ok(self.clipboard.set().wait_until(deadline).text(text)?)
    }

    #[cfg(not(linux_selection))]
    fn serve(
        &mut self,
        text: &str,
        _deadline: std::time::Instant,
    ) -> Result<()> {
        self.write_text(text)
    }
}

impl TextClipboard for Clipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        Ok(self.clipboard.set_text(text)?)
    }

    fn read_text(&mut self) -> Result<String> {
        Ok(self.clipboard.get_text()?)
    }

    fn clear_text(&mut self) -> Result<()> {
        Ok(self.clipboard.clear()?)
    }
}
