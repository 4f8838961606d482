use folio_core::Binding;
use folio_core::config::ScrollConfig;
use folio_core::scroll::{parallax_offset, translate_y};
use gloo::events::EventListener;

use crate::page::{Page, set_style};

const CARD_LIFT_PX: f64 = -4.0;

pub fn install_parallax(
    page: &Page,
    binding: &Binding,
    config: &ScrollConfig,
) -> Vec<EventListener> {
    let Some(hero) = page.html(&binding.selector) else {
        tracing::debug!(selector = %binding.selector, "no hero card");
        return Vec::new();
    };

    let config = config.clone();
    let page = page.clone();
    let window = page.window().clone();
    vec![EventListener::new(&window, "scroll", move |_| {
        if let Some(offset) = parallax_offset(page.viewport_width(), page.scroll_y(), &config) {
            set_style(&hero, "transform", &translate_y(offset));
        }
    })]
}

pub fn install_card_hover(page: &Page, binding: &Binding) -> Vec<EventListener> {
    let lifted = translate_y(CARD_LIFT_PX);
    let resting = translate_y(0.0);

    page.html_all(&binding.selector)
        .into_iter()
        .flat_map(|card| {
            let enter = {
                let target = card.clone();
                let lifted = lifted.clone();
                EventListener::new(&card, "mouseenter", move |_| {
                    set_style(&target, "transform", &lifted)
                })
            };
            let leave = {
                let target = card.clone();
                let resting = resting.clone();
                EventListener::new(&card, "mouseleave", move |_| {
                    set_style(&target, "transform", &resting)
                })
            };
            [enter, leave]
        })
        .collect()
}
