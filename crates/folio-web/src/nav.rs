use std::cell::Cell;
use std::rc::Rc;

use folio_core::Binding;
use folio_core::nav::{AnchorClick, MENU_OPEN_CLASS, MenuState, anchor_click};
use gloo::events::{EventListener, EventListenerOptions};
use web_sys::{Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::page::{Page, describe};

/// The mobile menu container and its open/closed state
pub struct Menu {
    element: Element,
    state: Cell<MenuState>,
}

impl Menu {
    pub fn new(element: Element) -> Self {
        let open = element.class_list().contains(MENU_OPEN_CLASS);
        Self {
            element,
            state: Cell::new(MenuState::new(open)),
        }
    }

    pub fn is_open(&self) -> bool {
        self.state.get().is_open()
    }

    pub fn toggle(&self) {
        let mut state = self.state.get();
        state.toggle();
        self.apply(state);
    }

    pub fn close(&self) {
        let mut state = self.state.get();
        state.close();
        self.apply(state);
    }

    fn apply(&self, state: MenuState) {
        self.state.set(state);
        if let Err(err) = self
            .element
            .class_list()
            .toggle_with_force(MENU_OPEN_CLASS, state.is_open())
        {
            tracing::debug!("menu class update rejected: {}", describe(&err));
        }
    }
}

pub fn install_toggle(
    page: &Page,
    binding: &Binding,
    menu: Option<Rc<Menu>>,
) -> Vec<EventListener> {
    let Some(toggle) = page.element(&binding.selector) else {
        tracing::debug!(selector = %binding.selector, "no menu toggle");
        return Vec::new();
    };
    let Some(menu) = menu else {
        tracing::debug!("menu toggle without a menu");
        return Vec::new();
    };

    vec![EventListener::new(&toggle, "click", move |_| menu.toggle())]
}

pub fn install_link_close(
    page: &Page,
    binding: &Binding,
    menu: Option<Rc<Menu>>,
) -> Vec<EventListener> {
    let Some(menu) = menu else {
        return Vec::new();
    };

    page.html_all(&binding.selector)
        .iter()
        .map(|link| {
            let menu = Rc::clone(&menu);
            EventListener::new(link, "click", move |_| menu.close())
        })
        .collect()
}

pub fn install_smooth_scroll(page: &Page, binding: &Binding) -> Vec<EventListener> {
    page.html_all(&binding.selector)
        .into_iter()
        .map(|anchor| smooth_scroll_listener(page.clone(), anchor))
        .collect()
}

fn smooth_scroll_listener(page: Page, anchor: HtmlElement) -> EventListener {
    let options = EventListenerOptions::enable_prevent_default();
    let target = anchor.clone();
    EventListener::new_with_options(&target, "click", options, move |event| {
        let Some(href) = anchor.get_attribute("href") else {
            return;
        };
        let AnchorClick::ScrollTo(selector) = anchor_click(&href) else {
            return;
        };

        event.prevent_default();
        match page.element(selector) {
            Some(section) => {
                let scroll = ScrollIntoViewOptions::new();
                scroll.set_behavior(ScrollBehavior::Smooth);
                scroll.set_block(ScrollLogicalPosition::Start);
                section.scroll_into_view_with_scroll_into_view_options(&scroll);
            }
            None => tracing::debug!(href = %href, "anchor target missing"),
        }
    })
}
