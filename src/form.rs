use gloo_events::{EventListener, EventListenerOptions};
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

use crate::notify::{self, Severity};

const FORM_SELECTOR: &str = r#"form[action="/contact"]"#;
const REQUIRED_SELECTOR: &str = "input[required], textarea[required]";
const FIELD_SELECTOR: &str = "input, textarea";
const INVALID_BORDER: &str = "#ef4444";
const SHAKE_CLASS: &str = "animate-shake";
const SHAKE_MS: u32 = 500;
const VALIDATION_MESSAGE: &str = "Please fill in all required fields.";

pub struct FormGuards {
    _listeners: Vec<EventListener>,
}

/// Gates submission of the contact form. On submit every required field is
/// checked in document order; if any is blank the submission is cancelled,
/// the offenders are highlighted and shaken, the first one is focused, and
/// a single error toast is raised. A valid form submits untouched.
pub fn init(document: &Document) -> Option<FormGuards> {
    let form = document.query_selector(FORM_SELECTOR).ok().flatten()?;

    let mut listeners = Vec::new();

    {
        let form = form.clone();
        let target = form.clone();
        // non-passive: the handler has to be able to cancel submission
        let options = EventListenerOptions::enable_prevent_default();
        listeners.push(EventListener::new_with_options(
            &target,
            "submit",
            options,
            move |event| {
                let Ok(fields) = form.query_selector_all(REQUIRED_SELECTOR) else {
                    return;
                };

                let mut first_invalid: Option<HtmlElement> = None;
                for index in 0..fields.length() {
                    let Some(field) = fields
                        .get(index)
                        .and_then(|node| node.dyn_into::<HtmlElement>().ok())
                    else {
                        continue;
                    };
                    if is_blank(&field_value(&field)) {
                        mark_invalid(&field);
                        if first_invalid.is_none() {
                            first_invalid = Some(field);
                        }
                    } else {
                        clear_invalid(&field);
                    }
                }

                if let Some(field) = first_invalid {
                    event.prevent_default();
                    let _ = field.focus();
                    notify::show(VALIDATION_MESSAGE, Severity::Error);
                }
            },
        ));
    }

    // live revalidation: a field recovers as soon as it has content,
    // without waiting for another submit attempt
    if let Ok(fields) = form.query_selector_all(FIELD_SELECTOR) {
        for index in 0..fields.length() {
            let Some(field) = fields
                .get(index)
                .and_then(|node| node.dyn_into::<HtmlElement>().ok())
            else {
                continue;
            };
            let watched = field.clone();
            listeners.push(EventListener::new(&field, "input", move |_| {
                if !is_blank(&field_value(&watched)) {
                    clear_invalid(&watched);
                }
            }));
        }
    }

    Some(FormGuards {
        _listeners: listeners,
    })
}

fn field_value(field: &HtmlElement) -> String {
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = field.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn mark_invalid(field: &HtmlElement) {
    let _ = field.style().set_property("border-color", INVALID_BORDER);

    // one-shot shake, cleared by its own timer
    let _ = field.class_list().add_1(SHAKE_CLASS);
    let shaken = field.clone();
    Timeout::new(SHAKE_MS, move || {
        let _ = shaken.class_list().remove_1(SHAKE_CLASS);
    })
    .forget();
}

fn clear_invalid(field: &HtmlElement) {
    let _ = field.style().remove_property("border-color");
}
