use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

pub struct ScrollLinks {
    _listeners: Vec<EventListener>,
}

/// Intercepts clicks on in-page fragment links and replaces the jump with
/// an animated scroll to the target's top edge. The bare `#` href and
/// external hrefs keep their default navigation, and so does a fragment
/// whose target element does not exist in the document.
pub fn init(document: &Document) -> ScrollLinks {
    let mut listeners = Vec::new();

    if let Ok(anchors) = document.query_selector_all(r##"a[href^="#"]"##) {
        for index in 0..anchors.length() {
            let Some(anchor) = anchors
                .get(index)
                .and_then(|node| node.dyn_into::<Element>().ok())
            else {
                continue;
            };

            let document = document.clone();
            let clicked = anchor.clone();
            // non-passive: the handler has to be able to cancel navigation
            let options = EventListenerOptions::enable_prevent_default();
            listeners.push(EventListener::new_with_options(
                &anchor,
                "click",
                options,
                move |event| {
                    let Some(href) = clicked.get_attribute("href") else {
                        return;
                    };
                    if !intercepts(&href) {
                        return;
                    }
                    if let Ok(Some(target)) = document.query_selector(&href) {
                        event.prevent_default();
                        let options = ScrollIntoViewOptions::new();
                        options.set_behavior(ScrollBehavior::Smooth);
                        options.set_block(ScrollLogicalPosition::Start);
                        target.scroll_into_view_with_scroll_into_view_options(&options);
                    }
                },
            ));
        }
    }

    ScrollLinks {
        _listeners: listeners,
    }
}

pub(crate) fn intercepts(href: &str) -> bool {
    href != "#" && !href.starts_with("http")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_fragment_keeps_default_navigation() {
        assert!(!intercepts("#"));
    }

    #[test]
    fn external_links_keep_default_navigation() {
        assert!(!intercepts("http://example.com/#section"));
        assert!(!intercepts("https://example.com"));
    }

    #[test]
    fn in_page_fragments_are_intercepted() {
        assert!(intercepts("#about"));
        assert!(intercepts("#contact"));
    }
}
