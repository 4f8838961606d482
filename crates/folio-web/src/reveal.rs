use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use folio_core::Binding;
use folio_core::config::RevealConfig;
use folio_core::reveal::RevealTracker;
use js_sys::Array;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::page::{JsResultExt, Page, add_class};

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Live fade-in observer. Dropping it disconnects the observer.
pub struct RevealObserver {
    observer: IntersectionObserver,
    tracker: Rc<RefCell<RevealTracker>>,
    _callback: EntriesCallback,
}

impl RevealObserver {
    /// Elements still waiting for their first intersection
    pub fn pending(&self) -> usize {
        self.tracker.borrow().pending()
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub fn install(
    page: &Page,
    binding: &Binding,
    config: &RevealConfig,
) -> Result<Option<RevealObserver>> {
    let targets: Vec<Element> = page
        .html_all(&binding.selector)
        .into_iter()
        .map(Element::from)
        .collect();
    if targets.is_empty() {
        return Ok(None);
    }

    let tracker = Rc::new(RefCell::new(RevealTracker::new()));
    for target in &targets {
        add_class(target, &config.hidden_class);
        tracker.borrow_mut().observe();
    }

    let callback: EntriesCallback = {
        let tracker = Rc::clone(&tracker);
        let targets = targets.clone();
        let visible_class = config.visible_class.clone();
        Closure::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let target = entry.target();
                let Some(key) = targets.iter().position(|candidate| *candidate == target) else {
                    continue;
                };
                if tracker.borrow_mut().intersect(key, entry.is_intersecting()) {
                    add_class(&target, &visible_class);
                    observer.unobserve(&target);
                }
            }
        })
    };

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.threshold));
    options.set_root_margin(&config.root_margin);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .js_context("IntersectionObserver rejected its options")?;
    for target in &targets {
        observer.observe(target);
    }
    tracing::debug!(count = targets.len(), "observing fade-in targets");

    Ok(Some(RevealObserver {
        observer,
        tracker,
        _callback: callback,
    }))
}
