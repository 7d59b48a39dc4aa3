use catvisit::clipboard::Clipboard;
use catvisit::error::ClipboardResult;

/// In-memory clipboard double for headless test runs.
pub struct MockClipboard {
    contents: String,
}

impl Default for MockClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl MockClipboard {
    pub fn new() -> Self {
        Self {
            contents: String::new(),
        }
    }
}

impl Clipboard for MockClipboard {
    fn set_text(&mut self, text: &str) -> ClipboardResult<()> {
        self.contents = text.to_string();
        Ok(())
    }

    fn get_text(&mut self) -> ClipboardResult<String> {
        Ok(self.contents.clone())
    }
}
