use std::rc::Rc;

use anyhow::Result;
use folio_core::{Behavior, Binding, SiteConfig, bindings};
use gloo::events::EventListener;
use web_sys::HtmlElement;

use crate::nav::Menu;
use crate::page::Page;
use crate::reveal::RevealObserver;
use crate::{contact, decor, email, nav, reveal, scroll};

/// Every behaviour attached to the page, kept alive for as long as this lives.
///
/// Built once at start from the binding table. Dropping it removes all of its
/// listeners, disconnects the reveal observer and takes the scroll-to-top
/// button back out of the document.
pub struct Portfolio {
    page: Page,
    config: SiteConfig,
    listeners: Vec<EventListener>,
    reveal: Option<RevealObserver>,
    menu: Option<Rc<Menu>>,
    top_button: Option<HtmlElement>,
}

impl Portfolio {
    pub fn mount(page: Page, config: SiteConfig) -> Self {
        let mut portfolio = Self {
            page,
            config,
            listeners: Vec::new(),
            reveal: None,
            menu: None,
            top_button: None,
        };

        for binding in bindings(&portfolio.config) {
            match portfolio.install(&binding) {
                Ok(listeners) => {
                    tracing::debug!(
                        behavior = %binding.behavior,
                        listeners = listeners.len(),
                        "installed"
                    );
                    portfolio.listeners.extend(listeners);
                }
                Err(err) => tracing::warn!(behavior = %binding.behavior, "skipped: {err:#}"),
            }
        }
        tracing::info!(listeners = portfolio.listeners.len(), "portfolio behaviours ready");
        portfolio
    }

    fn install(&mut self, binding: &Binding) -> Result<Vec<EventListener>> {
        let menu = match binding.behavior {
            Behavior::MenuToggle | Behavior::MenuLinkClose => self.menu_for(binding),
            _ => None,
        };
        let page = &self.page;
        let config = &self.config;
        let listeners = match binding.behavior {
            Behavior::YearStamp => {
                stamp_year(page, binding);
                Vec::new()
            }
            Behavior::MenuToggle => nav::install_toggle(page, binding, menu),
            Behavior::MenuLinkClose => nav::install_link_close(page, binding, menu),
            Behavior::SmoothScroll => nav::install_smooth_scroll(page, binding),
            Behavior::Reveal => {
                self.reveal = reveal::install(page, binding, &config.reveal)?;
                Vec::new()
            }
            Behavior::EmailCopy => {
                email::install(page, binding, &config.contact, config.timing.copy_revert_ms)
            }
            Behavior::ContactForm => {
                contact::install(page, binding, &config.contact, &config.timing)
            }
            Behavior::ActiveNav => scroll::install_active_nav(page, binding, &config.scroll),
            Behavior::ScrollTop => {
                let (button, listeners) = scroll::install_scroll_top(page, &config.scroll)?;
                self.top_button = Some(button);
                listeners
            }
            Behavior::Parallax => decor::install_parallax(page, binding, &config.scroll),
            Behavior::CardHover => decor::install_card_hover(page, binding),
        };
        Ok(listeners)
    }

    /// The shared mobile menu, looked up on first use
    fn menu_for(&mut self, binding: &Binding) -> Option<Rc<Menu>> {
        if self.menu.is_none() {
            let selector = binding.related.as_deref()?;
            self.menu = self.page.element(selector).map(|element| Rc::new(Menu::new(element)));
        }
        self.menu.clone()
    }

    /// Observed elements that have not faded in yet
    pub fn pending_reveals(&self) -> usize {
        self.reveal.as_ref().map_or(0, RevealObserver::pending)
    }

    pub fn menu_open(&self) -> Option<bool> {
        self.menu.as_ref().map(|menu| menu.is_open())
    }
}

impl Drop for Portfolio {
    fn drop(&mut self) {
        if let Some(button) = self.top_button.take() {
            button.remove();
        }
    }
}

fn stamp_year(page: &Page, binding: &Binding) {
    let Some(year) = page.element(&binding.selector) else {
        tracing::debug!(selector = %binding.selector, "no year placeholder");
        return;
    };
    let current = js_sys::Date::new_0().get_full_year();
    year.set_text_content(Some(&current.to_string()));
}
