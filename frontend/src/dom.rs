use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{
    HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions,
};

/// `"#services"` -> `Some("services")`. Bare `"#"` and external links give `None`.
pub fn anchor_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Smoothly scrolls the element named by an in-page href into view. Returns
/// false when the href is not an anchor or nothing on the page matches it.
pub fn smooth_scroll_to(href: &str) -> bool {
    let Some(id) = anchor_id(href) else {
        return false;
    };
    let Some(target) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        debug!("No scroll target for {}", href);
        return false;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Width taken by a classic scrollbar, if any.
pub fn scrollbar_width(inner_width: f64, client_width: f64) -> Option<f64> {
    let width = inner_width - client_width;
    (width > 0.0).then_some(width)
}

/// Pads the body by the scrollbar width so content does not shift when the
/// scrollbar appears or disappears.
pub fn compensate_scrollbar() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let inner_width = window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or_default();
    let client_width = document
        .document_element()
        .map(|el| f64::from(el.client_width()))
        .unwrap_or(inner_width);

    if let (Some(width), Some(body)) = (scrollbar_width(inner_width, client_width), document.body()) {
        set_style(&body, "padding-right", &format!("{}px", width));
    }
}

pub fn play_page_load_animation() {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        set_style(&body, "animation", "fadeIn 0.6s ease-out");
    }
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    let _ = element.style().set_property(property, value);
}

#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn contains(&self, y: f64) -> bool {
        self.top <= y && self.top + self.height > y
    }
}

/// Document-relative bounds of every `<section>` with an id.
pub fn section_bounds() -> Vec<SectionBounds> {
    let Some(sections) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector_all("section[id]").ok())
    else {
        return Vec::new();
    };

    (0..sections.length())
        .filter_map(|i| sections.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|el| SectionBounds {
            id: el.id(),
            top: f64::from(el.offset_top()),
            height: f64::from(el.offset_height()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_ids() {
        assert_eq!(anchor_id("#services"), Some("services"));
        assert_eq!(anchor_id("#"), None);
        assert_eq!(anchor_id("https://t.me/socialunlock"), None);
        assert_eq!(anchor_id(""), None);
    }

    #[test]
    fn scrollbar_width_only_when_positive() {
        assert_eq!(scrollbar_width(1280.0, 1265.0), Some(15.0));
        assert_eq!(scrollbar_width(1280.0, 1280.0), None);
        assert_eq!(scrollbar_width(0.0, 1280.0), None);
    }

    #[test]
    fn section_contains_is_half_open() {
        let section = SectionBounds {
            id: "why".to_string(),
            top: 800.0,
            height: 600.0,
        };
        assert!(!section.contains(799.0));
        assert!(section.contains(800.0));
        assert!(section.contains(1399.0));
        assert!(!section.contains(1400.0));
    }

    #[test]
    fn non_anchor_scroll_is_a_no_op() {
        assert!(!smooth_scroll_to("/pricing"));
        assert!(!smooth_scroll_to("#"));
    }
}
