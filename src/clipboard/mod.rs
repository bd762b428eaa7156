use anyhow::{Context, Result};
use arboard::Clipboard;

/// Maximum clipboard payload (10MB)
const MAX_CLIPBOARD_SIZE: usize = 10 * 1024 * 1024;

/// Clipboard sink (allows substituting the system clipboard in tests)
trait ClipboardProvider {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

struct SystemClipboard {
    clipboard: Clipboard,
}

impl SystemClipboard {
    fn new() -> Result<Self> {
        let clipboard = Clipboard::new().context("Failed to initialize clipboard")?;
        Ok(Self { clipboard })
    }
}

impl ClipboardProvider for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.clipboard.set_text(text).context("Failed to set clipboard contents")?;
        Ok(())
    }
}

fn validate_clipboard_text(text: &str) -> Result<()> {
    if text.is_empty() {
        anyhow::bail!("Cannot copy empty text to clipboard");
    }

    if text.len() > MAX_CLIPBOARD_SIZE {
        anyhow::bail!(
            "Text too large for clipboard ({} bytes, max {})",
            text.len(),
            MAX_CLIPBOARD_SIZE
        );
    }

    Ok(())
}

/// Hand already validated text to `provider`
fn copy_with_provider(
    label: &str,
    text: &str,
    provider: &mut dyn ClipboardProvider,
) -> Result<String> {
    provider.set_text(text)?;
    Ok(format!("Copied {}", label))
}

/// Copy text to the system clipboard.
///
/// # Errors
/// Returns error if the text is empty or larger than 10MB (checked before the
/// clipboard is touched), or if the system clipboard is unavailable.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    copy_labeled(text, "text").map(|_| ())
}

/// Copy text and return a confirmation such as "Copied resume command"
pub fn copy_labeled(text: &str, label: &str) -> Result<String> {
    validate_clipboard_text(text)?;
    let mut clipboard = SystemClipboard::new()?;
    copy_with_provider(label, text, &mut clipboard)
}
