use crate::contact::trim;

/// State of the click-to-copy email element.
///
/// The address is captured once, when the element is found, so a click during
/// the confirmation still copies the real address and the revert always
/// restores the original text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailCopy {
    original_text: String,
    address: String,
    confirming: bool,
}

/// Hover title set on the email element
pub const COPY_TITLE: &str = "Click to copy email";

impl EmailCopy {
    /// Recognise an email element by its text; `None` when it has no `@`
    pub fn detect(text: &str) -> Option<Self> {
        if !text.contains('@') {
            return None;
        }
        Some(Self {
            original_text: text.to_string(),
            address: trim(text).to_string(),
            confirming: false,
        })
    }

    /// Trimmed text written to the clipboard
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Untrimmed text restored after the confirmation
    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    /// Mark the confirmation as shown. Returns true when a previous
    /// confirmation was still pending and its revert must be cancelled.
    pub fn confirm(&mut self) -> bool {
        std::mem::replace(&mut self.confirming, true)
    }

    pub fn revert(&mut self) {
        self.confirming = false;
    }
}
