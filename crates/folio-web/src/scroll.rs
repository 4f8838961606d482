use anyhow::{Context, Result};
use folio_core::Binding;
use folio_core::config::ScrollConfig;
use folio_core::nav::ACTIVE_CLASS;
use folio_core::scroll::{SectionBounds, TopButton, active_section, section_href};
use gloo::events::EventListener;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::page::{JsResultExt, Page, add_class, remove_class, set_style};

const TOP_BUTTON_CLASS: &str = "scroll-top-btn";
const TOP_BUTTON_LABEL: &str = "Scroll to top";
const TOP_BUTTON_CSS: &str = "\
    position: fixed; \
    bottom: 24px; \
    right: 24px; \
    width: 44px; \
    height: 44px; \
    border-radius: 50%; \
    background: linear-gradient(135deg, #0ea5e9, #6366f1); \
    border: 1px solid rgba(56, 189, 248, 0.5); \
    color: white; \
    font-size: 1.2rem; \
    cursor: pointer; \
    opacity: 0; \
    visibility: hidden; \
    transition: opacity 0.3s ease, visibility 0.3s ease, transform 0.2s ease; \
    z-index: 100; \
    box-shadow: 0 8px 24px rgba(37, 99, 235, 0.4);";
const LIFT: &str = "translateY(-2px) scale(1.05)";
const REST: &str = "translateY(0) scale(1)";

/// Section and nav link elements captured once for the active-link highlighter
struct NavSections {
    sections: Vec<HtmlElement>,
    links: Vec<HtmlElement>,
    offset: f64,
}

impl NavSections {
    fn bounds(&self) -> Vec<SectionBounds> {
        self.sections
            .iter()
            .map(|section| {
                SectionBounds::new(
                    section.id(),
                    f64::from(section.offset_top()),
                    f64::from(section.offset_height()),
                )
            })
            .collect()
    }

    fn highlight(&self, scroll_y: f64) {
        let bounds = self.bounds();
        let Some(active) = active_section(&bounds, scroll_y, self.offset) else {
            return;
        };
        let href = section_href(active);
        for link in &self.links {
            if link.get_attribute("href").as_deref() == Some(href.as_str()) {
                add_class(link, ACTIVE_CLASS);
            } else {
                remove_class(link, ACTIVE_CLASS);
            }
        }
    }
}

pub fn install_active_nav(
    page: &Page,
    binding: &Binding,
    config: &ScrollConfig,
) -> Vec<EventListener> {
    let nav = NavSections {
        sections: page.html_all(&binding.selector),
        links: binding
            .related
            .as_deref()
            .map(|selector| page.html_all(selector))
            .unwrap_or_default(),
        offset: config.active_offset,
    };
    if nav.sections.is_empty() || nav.links.is_empty() {
        tracing::debug!("no sections or nav links to highlight");
        return Vec::new();
    }

    nav.highlight(page.scroll_y());

    let page = page.clone();
    let window = page.window().clone();
    vec![EventListener::new(&window, "scroll", move |_| {
        nav.highlight(page.scroll_y())
    })]
}

fn apply_visibility(button: &HtmlElement, state: TopButton) {
    set_style(button, "opacity", state.opacity());
    set_style(button, "visibility", state.visibility());
}

/// Create the scroll-to-top button and return it with its listeners
pub fn install_scroll_top(
    page: &Page,
    config: &ScrollConfig,
) -> Result<(HtmlElement, Vec<EventListener>)> {
    let body = page.body().context("document has no body")?;
    let button = page.create_html("button")?;
    button.set_inner_html("↑");
    button.set_class_name(TOP_BUTTON_CLASS);
    button
        .set_attribute("aria-label", TOP_BUTTON_LABEL)
        .js_context("labelling scroll-to-top button")?;
    button.style().set_css_text(TOP_BUTTON_CSS);
    body.append_child(&button)
        .js_context("appending scroll-to-top button")?;

    let threshold = config.top_button_threshold;
    apply_visibility(&button, TopButton::for_offset(page.scroll_y(), threshold));

    let click = {
        let page = page.clone();
        EventListener::new(&button, "click", move |_| {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            page.window().scroll_to_with_scroll_to_options(&options);
        })
    };
    let scroll = {
        let page = page.clone();
        let window = page.window().clone();
        let button = button.clone();
        EventListener::new(&window, "scroll", move |_| {
            apply_visibility(&button, TopButton::for_offset(page.scroll_y(), threshold));
        })
    };
    let enter = {
        let target = button.clone();
        EventListener::new(&button, "mouseenter", move |_| set_style(&target, "transform", LIFT))
    };
    let leave = {
        let target = button.clone();
        EventListener::new(&button, "mouseleave", move |_| set_style(&target, "transform", REST))
    };

    Ok((button, vec![click, scroll, enter, leave]))
}
