use anyhow::{Context, Result, anyhow};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

/// Id of the optional `<script type="application/toml">` configuration block
pub const CONFIG_BLOCK_ID: &str = "folio-config";

/// Attach context to a failed DOM call
pub trait JsResultExt<T> {
    fn js_context(self, context: &str) -> Result<T>;
}

impl<T> JsResultExt<T> for std::result::Result<T, JsValue> {
    fn js_context(self, context: &str) -> Result<T> {
        self.map_err(|err| anyhow!("{context}: {}", describe(&err)))
    }
}

/// Render a thrown JS value for logs
pub fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Accessor for the hosting document.
///
/// Every behaviour looks elements up through this instead of reaching for
/// globals, so tests can mount against any window and document pair.
#[derive(Debug, Clone)]
pub struct Page {
    window: Window,
    document: Document,
}

impl Page {
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }

    /// The page the module was loaded into
    pub fn current() -> Result<Self> {
        let window = web_sys::window().context("no global window")?;
        let document = window.document().context("window has no document")?;
        Ok(Self::new(window, document))
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// First element matching `selector`. An invalid selector matches nothing.
    pub fn element(&self, selector: &str) -> Option<Element> {
        match self.document.query_selector(selector) {
            Ok(found) => found,
            Err(err) => {
                tracing::warn!(selector, "invalid selector: {}", describe(&err));
                None
            }
        }
    }

    pub fn html(&self, selector: &str) -> Option<HtmlElement> {
        self.element(selector)
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    }

    /// Every HTML element matching `selector`, in document order
    pub fn html_all(&self, selector: &str) -> Vec<HtmlElement> {
        let list = match self.document.query_selector_all(selector) {
            Ok(list) => list,
            Err(err) => {
                tracing::warn!(selector, "invalid selector: {}", describe(&err));
                return Vec::new();
            }
        };

        (0..list.length())
            .filter_map(|index| list.get(index))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect()
    }

    pub fn body(&self) -> Option<HtmlElement> {
        self.document.body()
    }

    pub fn create_html(&self, tag: &str) -> Result<HtmlElement> {
        let element = self
            .document
            .create_element(tag)
            .js_context("createElement failed")?;
        element
            .dyn_into::<HtmlElement>()
            .map_err(|_| anyhow!("<{tag}> is not an HTML element"))
    }

    /// Current vertical scroll offset, zero when the window cannot report one
    pub fn scroll_y(&self) -> f64 {
        self.window.page_y_offset().unwrap_or(0.0)
    }

    pub fn viewport_width(&self) -> f64 {
        self.window
            .inner_width()
            .ok()
            .and_then(|width| width.as_f64())
            .unwrap_or(0.0)
    }

    pub fn navigate(&self, href: &str) -> Result<()> {
        self.window
            .location()
            .set_href(href)
            .js_context("navigation failed")
    }

    /// Text of the inline configuration block, if the page carries one
    pub fn config_block(&self) -> Option<String> {
        self.document
            .get_element_by_id(CONFIG_BLOCK_ID)
            .and_then(|element| element.text_content())
    }
}

/// Set one inline style property, logging instead of failing
pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = element.style().set_property(property, value) {
        tracing::debug!(property, "style update rejected: {}", describe(&err));
    }
}

pub fn add_class(element: &Element, class: &str) {
    if let Err(err) = element.class_list().add_1(class) {
        tracing::debug!(class, "class add rejected: {}", describe(&err));
    }
}

pub fn remove_class(element: &Element, class: &str) {
    if let Err(err) = element.class_list().remove_1(class) {
        tracing::debug!(class, "class remove rejected: {}", describe(&err));
    }
}
