//! Host-independent behaviour for the folio portfolio page.
//!
//! Nothing here touches the DOM. The `folio-web` crate reads layout and input
//! from the document, asks this crate what to do, and applies the answer.

pub mod bindings;
pub mod config;
pub mod contact;
pub mod email;
pub mod nav;
pub mod reveal;
pub mod scroll;

pub use bindings::{Behavior, Binding, bindings};
pub use config::{ConfigError, SiteConfig};
pub use contact::{ContactError, ContactForm, ContactSubmission, Notice, NoticeKind};
pub use scroll::{SectionBounds, TopButton};
