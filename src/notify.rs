use std::cell::RefCell;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

/// Class shared by every toast node, so a new toast can be recognized as
/// superseding the old one.
pub const TOAST_CLASS: &str = "custom-notification";

const ENTER_DELAY_MS: u32 = 10;
const VISIBLE_MS: u32 = 5_000;
const EXIT_MS: u32 = 300;
const OFFSCREEN: &str = "translateX(100%)";
const ONSCREEN: &str = "translateX(0)";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Severity {
    fn container_classes(self) -> &'static str {
        match self {
            Self::Error => "bg-red-100 text-red-700 border border-red-200",
            Self::Success => "bg-green-100 text-green-700 border border-green-200",
            Self::Info => "bg-blue-100 text-blue-700 border border-blue-200",
        }
    }

    fn icon_class(self) -> &'static str {
        match self {
            Self::Error => "fa-exclamation-circle",
            Self::Success => "fa-check-circle",
            Self::Info => "fa-info-circle",
        }
    }
}

struct Toast {
    element: HtmlElement,
    timers: Vec<Timeout>,
}

impl Drop for Toast {
    // A superseded toast disappears at once; its pending timers are
    // cancelled when the handles drop.
    fn drop(&mut self) {
        self.element.remove();
    }
}

thread_local! {
    static ACTIVE: RefCell<Option<Toast>> = const { RefCell::new(None) };
}

/// Shows a transient toast. At most one is ever on screen: any current
/// instance is removed synchronously before the new one is inserted.
/// Lifecycle: slide in after a near-zero delay, slide out after 5 s,
/// remove the node 300 ms later.
pub fn show(message: &str, severity: Severity) {
    ACTIVE.with(|active| active.borrow_mut().take());

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    let Some(element) = build_toast(&document, message, severity) else {
        return;
    };
    if body.append_child(&element).is_err() {
        return;
    }

    let mut timers = Vec::with_capacity(3);

    let enter = {
        let element = element.clone();
        Timeout::new(ENTER_DELAY_MS, move || {
            let _ = element.style().set_property("transform", ONSCREEN);
        })
    };
    timers.push(enter);

    let dismiss = {
        let element = element.clone();
        Timeout::new(VISIBLE_MS, move || {
            let _ = element.style().set_property("transform", OFFSCREEN);
            let removed = element.clone();
            let remove = Timeout::new(EXIT_MS, move || removed.remove());
            ACTIVE.with(|active| match active.borrow_mut().as_mut() {
                Some(toast) if toast.element == element => toast.timers.push(remove),
                _ => {
                    remove.forget();
                }
            });
        })
    };
    timers.push(dismiss);

    ACTIVE.with(|active| {
        *active.borrow_mut() = Some(Toast { element, timers });
    });
}

fn build_toast(document: &Document, message: &str, severity: Severity) -> Option<HtmlElement> {
    let element: HtmlElement = document.create_element("div").ok()?.dyn_into().ok()?;
    element.set_class_name(&format!(
        "fixed top-4 right-4 p-4 rounded-xl z-50 {TOAST_CLASS} transform transition-all duration-300 {}",
        severity.container_classes()
    ));
    let _ = element.style().set_property("transform", OFFSCREEN);

    let row = document.create_element("div").ok()?;
    row.set_class_name("flex items-center");

    let icon = document.create_element("i").ok()?;
    icon.set_class_name(&format!("fas {} mr-2", severity.icon_class()));

    // text node, not markup: the message must never be parsed as HTML
    let text = document.create_element("span").ok()?;
    text.set_text_content(Some(message));

    row.append_child(&icon).ok()?;
    row.append_child(&text).ok()?;
    element.append_child(&row).ok()?;

    Some(element)
}
