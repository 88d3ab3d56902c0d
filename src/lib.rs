//! Client-side behavior layer for a static portfolio page: theme toggling,
//! off-canvas menu, smooth scrolling, contact-form validation, scroll-
//! triggered reveals, viewport affordances, and transient toasts. The HTML
//! document, CSS, and the `/contact` endpoint are external collaborators;
//! this crate only attaches behavior to them.

use std::cell::RefCell;

use gloo_events::EventListener;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{Document, Window};

pub mod common;
pub mod form;
pub mod menu;
pub mod notify;
pub mod reveal;
pub mod scroll;
pub mod theme;
pub mod viewport;

/// Aggregated listener and observer guards for every wired component.
/// Dropping it detaches the whole behavior layer.
pub struct Behaviors {
    _theme: theme::ThemeToggles,
    _menu: Option<menu::MenuToggles>,
    _scroll: scroll::ScrollLinks,
    _form: Option<form::FormGuards>,
    _reveal: reveal::RevealAnimator,
    _viewport: viewport::ViewportAffordances,
}

/// Wires every component against the given document, one sequential pass.
/// Components whose expected elements are missing skip registration
/// individually; nothing here fails.
pub fn attach(window: &Window, document: &Document) -> Behaviors {
    Behaviors {
        _theme: theme::init(window, document),
        _menu: menu::init(document),
        _scroll: scroll::init(document),
        _form: form::init(document),
        _reveal: reveal::init(document),
        _viewport: viewport::init(window, document),
    }
}

thread_local! {
    static BEHAVIORS: RefCell<Option<Behaviors>> = const { RefCell::new(None) };
}

/// Drops every listener and observer registered by the start shim.
pub fn detach() {
    BEHAVIORS.with(|behaviors| behaviors.borrow_mut().take());
}

fn attach_from_env() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let behaviors = attach(&window, &document);
    BEHAVIORS.with(|slot| *slot.borrow_mut() = Some(behaviors));
}

#[wasm_bindgen(start)]
fn start() {
    console_error_panic_hook::set_once();

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", |_| attach_from_env()).forget();
    } else {
        attach_from_env();
    }
}
