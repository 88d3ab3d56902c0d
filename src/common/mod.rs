pub mod observer;
pub mod storage;

use std::cell::RefCell;
use std::rc::Rc;

use chrono::NaiveDate;
use gloo_console::error as console_error;
use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::JsFuture;

use crate::notify::{self, Severity};

/// Debounced wrapper around a callback: each `call` supersedes any pending
/// run and reschedules it `wait_ms` later with the latest argument, so the
/// callback fires at most once per quiet period.
pub struct Debounced<A> {
    wait_ms: u32,
    func: Rc<dyn Fn(A)>,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl<A> Clone for Debounced<A> {
    fn clone(&self) -> Self {
        Self {
            wait_ms: self.wait_ms,
            func: Rc::clone(&self.func),
            pending: Rc::clone(&self.pending),
        }
    }
}

impl<A: 'static> Debounced<A> {
    pub fn new(wait_ms: u32, func: impl Fn(A) + 'static) -> Self {
        Self {
            wait_ms,
            func: Rc::new(func),
            pending: Rc::new(RefCell::new(None)),
        }
    }

    pub fn call(&self, arg: A) {
        let func = Rc::clone(&self.func);
        let pending = Rc::clone(&self.pending);
        let timeout = Timeout::new(self.wait_ms, move || {
            pending.borrow_mut().take();
            func(arg);
        });
        // replacing the handle cancels any run still pending
        self.pending.borrow_mut().replace(timeout);
    }
}

/// Long en-US month/day/year form, e.g. "January 5, 2024".
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Writes `text` to the system clipboard. Either outcome is reported as a
/// toast and as the returned boolean; nothing propagates to the caller.
pub async fn copy_to_clipboard(text: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };

    let promise = window.navigator().clipboard().write_text(text);
    match JsFuture::from(promise).await {
        Ok(_) => {
            notify::show("Copied to clipboard!", Severity::Success);
            true
        }
        Err(err) => {
            console_error!("Clipboard write failed", err);
            notify::show("Failed to copy", Severity::Error);
            false
        }
    }
}
