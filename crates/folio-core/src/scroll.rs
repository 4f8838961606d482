use crate::config::ScrollConfig;

/// Snapshot of a section's layout box, in document coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    /// Whether `scroll_y` falls in this section once its top is pulled up by `offset`
    pub fn contains(&self, scroll_y: f64, offset: f64) -> bool {
        let top = self.top - offset;
        scroll_y > top && scroll_y <= top + self.height
    }
}

/// Id of the section whose nav link should be active.
///
/// Sections are checked in document order and the last match wins, so at a
/// boundary where two ranges overlap the later section is chosen.
pub fn active_section(sections: &[SectionBounds], scroll_y: f64, offset: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|section| section.contains(scroll_y, offset))
        .map(|section| section.id.as_str())
}

/// Fragment a nav link must carry to match a section id
pub fn section_href(id: &str) -> String {
    format!("#{id}")
}

/// Visibility state of the scroll-to-top control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopButton {
    Hidden,
    Visible,
}

impl TopButton {
    pub fn for_offset(scroll_y: f64, threshold: f64) -> Self {
        if scroll_y > threshold {
            TopButton::Visible
        } else {
            TopButton::Hidden
        }
    }

    pub fn opacity(&self) -> &'static str {
        match self {
            TopButton::Hidden => "0",
            TopButton::Visible => "1",
        }
    }

    pub fn visibility(&self) -> &'static str {
        match self {
            TopButton::Hidden => "hidden",
            TopButton::Visible => "visible",
        }
    }
}

/// Vertical translation for the hero card, or `None` to leave it as is
pub fn parallax_offset(viewport_width: f64, scroll_y: f64, config: &ScrollConfig) -> Option<f64> {
    if viewport_width > config.parallax_min_width && scroll_y < config.parallax_max_offset {
        Some(scroll_y * config.parallax_rate)
    } else {
        None
    }
}

/// CSS `transform` value for a vertical translation in pixels
pub fn translate_y(px: f64) -> String {
    format!("translateY({px}px)")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new("home", 0.0, 600.0),
            SectionBounds::new("about", 600.0, 800.0),
            SectionBounds::new("projects", 1400.0, 1000.0),
            SectionBounds::new("contact", 2400.0, 500.0),
        ]
    }

    #[test]
    fn test_active_section_at_load() {
        assert_eq!(active_section(&page(), 0.0, 100.0), Some("home"));
    }

    #[test]
    fn test_active_section_pulls_tops_up() {
        // about spans (500, 1300] once pulled up by 100
        assert_eq!(active_section(&page(), 501.0, 100.0), Some("about"));
        assert_eq!(active_section(&page(), 1300.0, 100.0), Some("about"));
        assert_eq!(active_section(&page(), 1301.0, 100.0), Some("projects"));
    }

    #[test]
    fn test_lower_bound_is_exclusive() {
        // 500 is the end of home and the excluded start of about
        assert_eq!(active_section(&page(), 500.0, 100.0), Some("home"));
    }

    #[test]
    fn test_no_section_below_page() {
        assert_eq!(active_section(&page(), 5000.0, 100.0), None);
        assert_eq!(active_section(&[], 10.0, 100.0), None);
    }

    #[test]
    fn test_overlap_last_in_document_order_wins() {
        let sections = vec![
            SectionBounds::new("outer", 0.0, 2000.0),
            SectionBounds::new("inner", 500.0, 300.0),
        ];
        assert_eq!(active_section(&sections, 600.0, 100.0), Some("inner"));
        assert_eq!(active_section(&sections, 1000.0, 100.0), Some("outer"));
    }

    #[test]
    fn test_section_href() {
        assert_eq!(section_href("about"), "#about");
    }

    #[test]
    fn test_top_button_threshold() {
        assert_eq!(TopButton::for_offset(350.0, 300.0), TopButton::Visible);
        assert_eq!(TopButton::for_offset(300.0, 300.0), TopButton::Hidden);
        assert_eq!(TopButton::for_offset(120.0, 300.0), TopButton::Hidden);
        assert_eq!(TopButton::Visible.opacity(), "1");
        assert_eq!(TopButton::Hidden.visibility(), "hidden");
    }

    #[test]
    fn test_parallax_desktop_only() {
        let config = ScrollConfig::default();
        assert_eq!(parallax_offset(1200.0, 200.0, &config), Some(10.0));
        assert_eq!(parallax_offset(900.0, 200.0, &config), None);
        assert_eq!(parallax_offset(1200.0, 500.0, &config), None);
        assert_eq!(parallax_offset(1200.0, 0.0, &config), Some(0.0));
    }

    #[test]
    fn test_translate_y_formatting() {
        assert_eq!(translate_y(10.0), "translateY(10px)");
        assert_eq!(translate_y(-4.0), "translateY(-4px)");
        assert_eq!(translate_y(12.5), "translateY(12.5px)");
    }
}
