//! Clipboard access for pasting item lists and copying the picked item

use arboard::Clipboard;

use crate::error::Result;

/// Content read from the clipboard
#[derive(Debug, Clone, PartialEq)]
pub enum ClipboardContent {
    /// Plain text content
    Text(String),
    /// Nothing usable (empty, or non-text content such as an image)
    None,
}

/// Read text from the system clipboard
pub fn read_clipboard() -> Result<ClipboardContent> {
    let mut clipboard = Clipboard::new()?;

    match clipboard.get_text() {
        Ok(text) => Ok(content_from_text(text)),
        Err(arboard::Error::ContentNotAvailable) => Ok(ClipboardContent::None),
        Err(e) => Err(e.into()),
    }
}

/// Put text on the system clipboard
pub fn write_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text.to_string())?;
    Ok(())
}

fn content_from_text(text: String) -> ClipboardContent {
    if text.trim().is_empty() {
        ClipboardContent::None
    } else {
        ClipboardContent::Text(text)
    }
}
