use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

const OPEN_BUTTON_ID: &str = "mobile-menu-button";
const MENU_ID: &str = "mobile-menu";
const CLOSE_BUTTON_ID: &str = "close-menu";
const OFFSCREEN_CLASS: &str = "translate-x-full";
const OPEN_CLASS: &str = "mobile-menu-open";

pub struct MenuToggles {
    _listeners: Vec<EventListener>,
}

/// Wires the off-canvas panel. The only operation is toggle, triggered by
/// the open button, the close button, and every link inside the panel (so
/// navigating closes it). Skips registration entirely when the trigger or
/// the panel is missing.
pub fn init(document: &Document) -> Option<MenuToggles> {
    let button = document.get_element_by_id(OPEN_BUTTON_ID)?;
    let menu = document.get_element_by_id(MENU_ID)?;

    let mut listeners = Vec::new();
    {
        let menu = menu.clone();
        listeners.push(EventListener::new(&button, "click", move |_| toggle(&menu)));
    }

    if let Some(close) = document.get_element_by_id(CLOSE_BUTTON_ID) {
        let menu = menu.clone();
        listeners.push(EventListener::new(&close, "click", move |_| toggle(&menu)));
    }

    if let Ok(links) = document.query_selector_all("#mobile-menu a") {
        for index in 0..links.length() {
            let Some(link) = links
                .get(index)
                .and_then(|node| node.dyn_into::<Element>().ok())
            else {
                continue;
            };
            let menu = menu.clone();
            listeners.push(EventListener::new(&link, "click", move |_| toggle(&menu)));
        }
    }

    Some(MenuToggles {
        _listeners: listeners,
    })
}

fn toggle(menu: &Element) {
    let classes = menu.class_list();
    let _ = classes.toggle(OFFSCREEN_CLASS);
    let _ = classes.toggle(OPEN_CLASS);
}
