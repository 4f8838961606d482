use std::cell::RefCell;
use std::rc::{Rc, Weak};

use anyhow::{Result, bail};
use folio_core::Binding;
use folio_core::config::ContactConfig;
use folio_core::email::{COPY_TITLE, EmailCopy};
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Clipboard, HtmlElement};

use crate::page::{JsResultExt, Page, set_style};

/// The click-to-copy email element and its pending revert
struct EmailTarget {
    element: HtmlElement,
    state: RefCell<EmailCopy>,
    revert: RefCell<Option<Timeout>>,
    confirmation: String,
    accent_color: String,
    revert_ms: u32,
}

impl EmailTarget {
    fn show_confirmation(self: &Rc<Self>) {
        if self.state.borrow_mut().confirm() {
            tracing::debug!("restarting email copy confirmation");
        }
        self.element.set_text_content(Some(&self.confirmation));
        set_style(&self.element, "color", &self.accent_color);

        let weak: Weak<Self> = Rc::downgrade(self);
        let timeout = Timeout::new(self.revert_ms, move || {
            if let Some(target) = weak.upgrade() {
                target.restore();
            }
        });
        // Replacing the handle drops, and so cancels, any earlier revert
        self.revert.replace(Some(timeout));
    }

    fn restore(&self) {
        let mut state = self.state.borrow_mut();
        state.revert();
        self.element.set_text_content(Some(state.original_text()));
        set_style(&self.element, "color", "");
    }
}

pub fn install(
    page: &Page,
    binding: &Binding,
    contact: &ContactConfig,
    revert_ms: u32,
) -> Vec<EventListener> {
    let Some(element) = page.html(&binding.selector) else {
        tracing::debug!(selector = %binding.selector, "no email element");
        return Vec::new();
    };
    let text = element.text_content().unwrap_or_default();
    let Some(copy) = EmailCopy::detect(&text) else {
        tracing::debug!("contact value is not an email address");
        return Vec::new();
    };

    set_style(&element, "cursor", "pointer");
    element.set_title(COPY_TITLE);

    let target = Rc::new(EmailTarget {
        element: element.clone(),
        state: RefCell::new(copy),
        revert: RefCell::new(None),
        confirmation: contact.copy_confirmation.clone(),
        accent_color: contact.accent_color.clone(),
        revert_ms,
    });

    let page = page.clone();
    vec![EventListener::new(&element, "click", move |_| {
        let target = Rc::clone(&target);
        let page = page.clone();
        spawn_local(async move {
            let address = target.state.borrow().address().to_string();
            match write_clipboard(&page, &address).await {
                Ok(()) => target.show_confirmation(),
                Err(err) => tracing::error!("Failed to copy: {err:#}"),
            }
        });
    })]
}

async fn write_clipboard(page: &Page, text: &str) -> Result<()> {
    let navigator = page.window().navigator();
    let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .js_context("reading navigator.clipboard")?;
    if clipboard.is_undefined() || clipboard.is_null() {
        bail!("clipboard API unavailable");
    }

    let clipboard: Clipboard = clipboard.unchecked_into();
    JsFuture::from(clipboard.write_text(text))
        .await
        .js_context("clipboard write rejected")?;
    Ok(())
}
