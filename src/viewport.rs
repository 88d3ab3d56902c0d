use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, HtmlImageElement, ScrollBehavior, ScrollToOptions, Window,
};

use crate::common::observer::IntersectionWatcher;

const SCROLL_TOP_THRESHOLD_PX: f64 = 500.0;
const LAZY_SELECTOR: &str = "img[data-src]";
const LAZY_CLASS: &str = "lazy-load";

const SCROLL_TOP_CLASSES: &str = "fixed bottom-8 right-8 w-12 h-12 bg-indigo-600 text-white \
     rounded-full shadow-lg opacity-0 transition-all duration-300 hover:bg-indigo-700 z-40 \
     flex items-center justify-center";
const PROGRESS_CLASSES: &str = "fixed top-0 left-0 w-0 h-1 bg-gradient-to-r from-indigo-600 \
     to-purple-600 z-50 transition-all duration-200";

pub struct ViewportAffordances {
    _listeners: Vec<EventListener>,
    _lazy: Option<IntersectionWatcher>,
}

/// Three independent scroll-position reactors: the scroll-to-top control,
/// the scroll progress bar, and the lazy image loader. None share state.
pub fn init(window: &Window, document: &Document) -> ViewportAffordances {
    let mut listeners = Vec::new();
    scroll_top_button(window, document, &mut listeners);
    progress_bar(window, document, &mut listeners);

    ViewportAffordances {
        _listeners: listeners,
        _lazy: lazy_images(document),
    }
}

fn scroll_top_button(window: &Window, document: &Document, listeners: &mut Vec<EventListener>) {
    let Some(body) = document.body() else {
        return;
    };
    let Ok(button) = document.create_element("button") else {
        return;
    };
    let Ok(button) = button.dyn_into::<HtmlElement>() else {
        return;
    };
    button.set_inner_html(r#"<i class="fas fa-chevron-up"></i>"#);
    button.set_class_name(SCROLL_TOP_CLASSES);
    let _ = button.set_attribute("aria-label", "Scroll to top");
    let _ = button.style().set_property("transform", "translateY(20px)");
    if body.append_child(&button).is_err() {
        return;
    }

    {
        let window = window.clone();
        listeners.push(EventListener::new(&button, "click", move |_| {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }));
    }

    let tracked = window.clone();
    listeners.push(EventListener::new(window, "scroll", move |_| {
        let style = button.style();
        if shows_scroll_top(tracked.scroll_y().unwrap_or(0.0)) {
            let _ = style.set_property("opacity", "1");
            let _ = style.set_property("transform", "translateY(0)");
        } else {
            let _ = style.set_property("opacity", "0");
            let _ = style.set_property("transform", "translateY(20px)");
        }
    }));
}

/// The control stays hidden at exactly 500 px; a strictly greater offset
/// shows it.
pub(crate) fn shows_scroll_top(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TOP_THRESHOLD_PX
}

fn progress_bar(window: &Window, document: &Document, listeners: &mut Vec<EventListener>) {
    let Some(body) = document.body() else {
        return;
    };
    let Ok(bar) = document.create_element("div") else {
        return;
    };
    let Ok(bar) = bar.dyn_into::<HtmlElement>() else {
        return;
    };
    bar.set_class_name(PROGRESS_CLASSES);
    let _ = bar.style().set_property("height", "2px");
    if body.append_child(&bar).is_err() {
        return;
    }

    let tracked = window.clone();
    let document = document.clone();
    listeners.push(EventListener::new(window, "scroll", move |_| {
        let Some(root) = document.document_element() else {
            return;
        };
        let scroll_top = tracked.page_y_offset().unwrap_or(0.0);
        let viewport = tracked
            .inner_height()
            .ok()
            .and_then(|height| height.as_f64())
            .unwrap_or(0.0);
        let percent = progress_percent(scroll_top, f64::from(root.scroll_height()), viewport);
        let _ = bar.style().set_property("width", &format!("{percent}%"));
    }));
}

/// Pages with no scrollable height report zero progress instead of
/// dividing by zero; the result is clamped to [0, 100].
pub(crate) fn progress_percent(scroll_top: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

fn lazy_images(document: &Document) -> Option<IntersectionWatcher> {
    // without IntersectionObserver the markup's default sources stand
    if !IntersectionWatcher::supported() {
        return None;
    }

    let watcher = IntersectionWatcher::new(None, |entry, observer| {
        if !entry.is_intersecting() {
            return;
        }
        let target = entry.target();
        if let Some(image) = target.dyn_ref::<HtmlImageElement>() {
            if let Some(src) = image.get_attribute("data-src") {
                image.set_src(&src);
            }
            let _ = image.class_list().remove_1(LAZY_CLASS);
        }
        observer.unobserve(&target);
    })?;

    if let Ok(images) = document.query_selector_all(LAZY_SELECTOR) {
        for index in 0..images.length() {
            if let Some(image) = images
                .get(index)
                .and_then(|node| node.dyn_into::<Element>().ok())
            {
                watcher.observe(&image);
            }
        }
    }

    Some(watcher)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_top_boundary_is_exclusive() {
        assert!(!shows_scroll_top(0.0));
        assert!(!shows_scroll_top(499.9));
        assert!(!shows_scroll_top(500.0));
        assert!(shows_scroll_top(500.1));
        assert!(shows_scroll_top(2_000.0));
    }

    #[test]
    fn progress_tracks_scroll_position() {
        assert_eq!(progress_percent(0.0, 2_000.0, 1_000.0), 0.0);
        assert_eq!(progress_percent(500.0, 2_000.0, 1_000.0), 50.0);
        assert_eq!(progress_percent(1_000.0, 2_000.0, 1_000.0), 100.0);
    }

    #[test]
    fn progress_is_zero_without_scrollable_height() {
        assert_eq!(progress_percent(0.0, 1_000.0, 1_000.0), 0.0);
        assert_eq!(progress_percent(100.0, 800.0, 1_000.0), 0.0);
    }

    #[test]
    fn progress_is_clamped_at_the_bottom() {
        // rubber-band overscroll can report more than the scrollable height
        assert_eq!(progress_percent(1_200.0, 2_000.0, 1_000.0), 100.0);
        assert_eq!(progress_percent(-50.0, 2_000.0, 1_000.0), 0.0);
    }
}
