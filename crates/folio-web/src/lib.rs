mod app;
mod contact;
mod decor;
mod email;
pub mod logging;
mod nav;
pub mod page;
mod reveal;
mod scroll;

use std::cell::RefCell;

use folio_core::SiteConfig;
use gloo::events::EventListener;
use wasm_bindgen::prelude::*;

pub use app::Portfolio;
pub use contact::read_fields;
pub use page::Page;

thread_local! {
    static PORTFOLIO: RefCell<Option<Portfolio>> = const { RefCell::new(None) };
}

/// Entry point for the WASM module.
///
/// Called automatically when the module loads. Installs the panic hook, then
/// attaches every page behaviour once the document has been parsed.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let page = match Page::current() {
        Ok(page) => page,
        Err(err) => {
            web_sys::console::error_1(&format!("folio: {err:#}").into());
            return;
        }
    };

    if still_parsing(&page.document().ready_state()) {
        let document = page.document().clone();
        EventListener::once(&document, "DOMContentLoaded", move |_| boot(page)).forget();
    } else {
        boot(page);
    }
}

/// `document.readyState` reports `"loading"` until the parser reaches the end
fn still_parsing(ready_state: &str) -> bool {
    ready_state == "loading"
}

/// Read configuration, start logging and mount the behaviours
fn boot(page: Page) {
    let block = page.config_block();
    let (config, config_err) = SiteConfig::load(block.as_deref());
    logging::init(&config.log_level);
    if let Some(err) = config_err {
        tracing::warn!("{err}; using default site config");
    }

    let portfolio = Portfolio::mount(page, config);
    PORTFOLIO.with(|slot| *slot.borrow_mut() = Some(portfolio));
}
