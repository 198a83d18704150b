//! Cross-platform clipboard helper.
//!
//! The write itself goes through the [`ClipboardWrite`] trait so the
//! success/failure contract can be tested without a real clipboard.

/// A destination that can receive clipboard text.
pub trait ClipboardWrite {
    /// Replace the destination's contents with `text`.
    fn write_text(&mut self, text: &str) -> Result<(), String>;
}

/// The system clipboard, backed by the `arboard` crate. On some platforms or
/// in headless CI environments initialization may fail — callers should treat
/// errors as non-fatal (the CLI prints a warning on failure).
pub struct SystemClipboard;

impl ClipboardWrite for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), String> {
        let mut ctx = arboard::Clipboard::new().map_err(|e| format!("clipboard init: {}", e))?;
        ctx.set_text(text.to_owned())
            .map_err(|e| format!("clipboard set: {}", e))
    }
}

/// Copy `s` to the system clipboard.
///
/// Returns `Ok(())` on success or `Err(String)` describing the failure.
pub fn try_copy_to_clipboard(s: &str) -> Result<(), String> {
    SystemClipboard.write_text(s)
}

/// Copy `s` to the system clipboard, reporting only success or failure.
///
/// Total from the caller's perspective: every underlying failure (missing
/// clipboard capability, permission denial, transient host error) collapses
/// into `false`. Never panics.
pub fn copy_to_clipboard(s: &str) -> bool {
    copy_with(&mut SystemClipboard, s)
}

/// Like [`copy_to_clipboard`], but against any [`ClipboardWrite`] destination.
pub fn copy_with<W: ClipboardWrite>(writer: &mut W, s: &str) -> bool {
    writer.write_text(s).is_ok()
}
