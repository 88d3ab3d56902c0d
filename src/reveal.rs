use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::common::observer::IntersectionWatcher;
use crate::theme::THEME_CHANGED_EVENT;

const REVEAL_SELECTOR: &str = ".card-hover, .glass-effect, .gradient-text";
const REVEALED_CLASS: &str = "animate-fade-in-up";
const REVEAL_THRESHOLD: f64 = 0.1;

pub struct RevealAnimator {
    _rescan: Option<EventListener>,
    _watcher: Rc<RefCell<Option<IntersectionWatcher>>>,
}

/// Marks elements of the reveal set with a one-time visual flag as each
/// first crosses the visibility threshold. A theme change re-scans the
/// document for anything added since, or not yet revealed.
pub fn init(document: &Document) -> RevealAnimator {
    let watcher = Rc::new(RefCell::new(None));
    scan(document, &watcher);

    let rescan = document.body().map(|body| {
        let document = document.clone();
        let watcher = Rc::clone(&watcher);
        EventListener::new(&body, THEME_CHANGED_EVENT, move |_| {
            scan(&document, &watcher);
        })
    });

    RevealAnimator {
        _rescan: rescan,
        _watcher: watcher,
    }
}

/// Re-queries the document and observes anything not yet revealed. The
/// revealed class is monotonic: once applied it is never removed, and a
/// revealed element is never observed again.
fn scan(document: &Document, slot: &Rc<RefCell<Option<IntersectionWatcher>>>) {
    let Some(watcher) = IntersectionWatcher::new(Some(REVEAL_THRESHOLD), |entry, observer| {
        if !entry.is_intersecting() {
            return;
        }
        let target = entry.target();
        let _ = target.class_list().add_1(REVEALED_CLASS);
        observer.unobserve(&target);
    }) else {
        return;
    };

    let Ok(elements) = document.query_selector_all(REVEAL_SELECTOR) else {
        return;
    };
    for index in 0..elements.length() {
        let Some(element) = elements
            .get(index)
            .and_then(|node| node.dyn_into::<Element>().ok())
        else {
            continue;
        };
        if !element.class_list().contains(REVEALED_CLASS) {
            watcher.observe(&element);
        }
    }

    // replacing the slot disconnects the previous observer
    *slot.borrow_mut() = Some(watcher);
}
