// src/cli/clipboard.rs
use anyhow::{anyhow, Result};

/// Copy the password to the system clipboard. The value itself is never
/// logged.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| anyhow!("Failed to access clipboard: {e}"))?;

    clipboard
        .set_text(text.to_owned())
        .map_err(|e| anyhow!("Failed to copy to clipboard: {e}"))?;

    log::debug!("Copied generated password to clipboard");
    Ok(())
}
