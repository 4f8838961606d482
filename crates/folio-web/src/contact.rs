use std::cell::RefCell;
use std::rc::{Rc, Weak};

use anyhow::{Context, Result, anyhow};
use folio_core::Binding;
use folio_core::config::{ContactConfig, Timing};
use folio_core::contact::{self, ContactForm, NOTICE_CLASS, Notice};
use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement, HtmlTextAreaElement};

use crate::page::{JsResultExt, Page, set_style};

/// Owner of the single status message under the contact form.
///
/// Showing a notice removes the previous node and cancels its timers before
/// the new node goes in.
pub struct NoticeSlot {
    page: Page,
    form: HtmlElement,
    visible_ms: u32,
    fade_ms: u32,
    fade: RefCell<Option<Timeout>>,
    removal: RefCell<Option<Timeout>>,
}

impl NoticeSlot {
    pub fn new(page: Page, form: HtmlElement, timing: &Timing) -> Rc<Self> {
        Rc::new(Self {
            page,
            form,
            visible_ms: timing.notice_visible_ms,
            fade_ms: timing.notice_fade_ms,
            fade: RefCell::new(None),
            removal: RefCell::new(None),
        })
    }

    pub fn show(self: &Rc<Self>, notice: &Notice) -> Result<()> {
        self.fade.take();
        self.removal.take();
        if let Some(existing) = self.page.element(&format!(".{NOTICE_CLASS}")) {
            existing.remove();
        }

        let node = self.page.create_html("div")?;
        node.set_class_name(&notice.class_name());
        node.set_text_content(Some(&notice.text));
        self.form
            .append_child(&node)
            .js_context("appending form message")?;

        let weak: Weak<Self> = Rc::downgrade(self);
        let timeout = Timeout::new(self.visible_ms, move || {
            set_style(&node, "opacity", "0");
            if let Some(slot) = weak.upgrade() {
                let removal = Timeout::new(slot.fade_ms, move || node.remove());
                slot.removal.replace(Some(removal));
            }
        });
        self.fade.replace(Some(timeout));
        Ok(())
    }
}

/// Read and return the three contact fields from the form
pub fn read_fields(form: &HtmlElement) -> Result<ContactForm> {
    let name = form_input(form, "input[name=\"name\"]")?;
    let email = form_input(form, "input[name=\"email\"]")?;
    let message = form
        .query_selector("textarea[name=\"message\"]")
        .js_context("looking up message field")?
        .and_then(|element| element.dyn_into::<HtmlTextAreaElement>().ok())
        .context("contact form has no message textarea")?
        .value();
    Ok(ContactForm::new(name, email, message))
}

fn form_input(form: &HtmlElement, selector: &str) -> Result<String> {
    form.query_selector(selector)
        .js_context("looking up form field")?
        .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .ok_or_else(|| anyhow!("contact form has no {selector}"))
}

pub fn install(
    page: &Page,
    binding: &Binding,
    contact: &ContactConfig,
    timing: &Timing,
) -> Vec<EventListener> {
    let Some(form) = page.html(&binding.selector) else {
        tracing::debug!(selector = %binding.selector, "no contact form");
        return Vec::new();
    };

    let notices = NoticeSlot::new(page.clone(), form.clone(), timing);
    let page = page.clone();
    let address = contact.address.clone();
    let target = form.clone();
    let options = EventListenerOptions::enable_prevent_default();

    vec![EventListener::new_with_options(&target, "submit", options, move |event| {
        event.prevent_default();

        let fields = match read_fields(&form) {
            Ok(fields) => fields,
            Err(err) => {
                tracing::error!("{err:#}");
                return;
            }
        };

        let outcome = contact::submit(&fields, &address);
        if let Some(uri) = &outcome.navigate_to {
            tracing::info!("handing contact message to the mail client");
            if let Err(err) = page.navigate(uri) {
                tracing::error!("{err:#}");
            }
        }
        if let Err(err) = notices.show(&outcome.notice) {
            tracing::warn!("could not show form message: {err:#}");
        }
    })]
}
