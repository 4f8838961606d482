/// Class that opens the mobile menu
pub const MENU_OPEN_CLASS: &str = "open";
/// Class marking the nav link of the section in view
pub const ACTIVE_CLASS: &str = "active";

/// Open/closed state of the mobile navigation menu
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn new(open: bool) -> Self {
        Self { open }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the state and return the new one
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

/// What a click on an in-page anchor should do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorClick<'a> {
    /// Leave the browser's default navigation alone
    PassThrough,
    /// Suppress navigation and smooth-scroll to the element matching this selector
    ScrollTo(&'a str),
}

/// Decide how to handle a click on an anchor with the given `href`
pub fn anchor_click(href: &str) -> AnchorClick<'_> {
    if href == "#" || !href.starts_with('#') {
        AnchorClick::PassThrough
    } else {
        AnchorClick::ScrollTo(href)
    }
}
