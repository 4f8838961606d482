use crate::config::SiteConfig;
use std::fmt;

/// A page behaviour the web layer knows how to install
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    YearStamp,
    MenuToggle,
    MenuLinkClose,
    SmoothScroll,
    Reveal,
    EmailCopy,
    ContactForm,
    ActiveNav,
    ScrollTop,
    Parallax,
    CardHover,
}

impl fmt::Display for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Behavior::YearStamp => write!(f, "year stamp"),
            Behavior::MenuToggle => write!(f, "menu toggle"),
            Behavior::MenuLinkClose => write!(f, "menu link close"),
            Behavior::SmoothScroll => write!(f, "smooth scroll"),
            Behavior::Reveal => write!(f, "fade-in reveal"),
            Behavior::EmailCopy => write!(f, "email copy"),
            Behavior::ContactForm => write!(f, "contact form"),
            Behavior::ActiveNav => write!(f, "active nav"),
            Behavior::ScrollTop => write!(f, "scroll to top"),
            Behavior::Parallax => write!(f, "hero parallax"),
            Behavior::CardHover => write!(f, "card hover"),
        }
    }
}

/// One row of the binding table: which elements a behaviour attaches to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub behavior: Behavior,
    /// Elements the behaviour listens on
    pub selector: String,
    /// A second element the behaviour mutates, when it differs from the first
    pub related: Option<String>,
}

impl Binding {
    fn new(behavior: Behavior, selector: &str) -> Self {
        Self {
            behavior,
            selector: selector.to_string(),
            related: None,
        }
    }

    fn with_related(mut self, related: &str) -> Self {
        self.related = Some(related.to_string());
        self
    }
}

/// Selector for the body, which hosts the created scroll-to-top button
pub const BODY_SELECTOR: &str = "body";

/// Build the binding table in setup order
pub fn bindings(config: &SiteConfig) -> Vec<Binding> {
    let s = &config.selectors;
    vec![
        Binding::new(Behavior::YearStamp, &s.year),
        Binding::new(Behavior::MenuToggle, &s.mobile_toggle).with_related(&s.mobile_menu),
        Binding::new(Behavior::MenuLinkClose, &s.mobile_links).with_related(&s.mobile_menu),
        Binding::new(Behavior::SmoothScroll, &s.anchors),
        Binding::new(Behavior::Reveal, &s.reveal_targets),
        Binding::new(Behavior::EmailCopy, &s.email),
        Binding::new(Behavior::ContactForm, &s.contact_form),
        Binding::new(Behavior::ActiveNav, &s.sections).with_related(&s.nav_links),
        Binding::new(Behavior::ScrollTop, BODY_SELECTOR),
        Binding::new(Behavior::Parallax, &s.hero),
        Binding::new(Behavior::CardHover, &s.project_cards),
    ]
}
