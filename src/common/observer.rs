use js_sys::Reflect;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Owns an `IntersectionObserver` together with its wasm callback.
/// Dropping the watcher disconnects the observer and releases the closure.
pub struct IntersectionWatcher {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl IntersectionWatcher {
    /// Whether the runtime exposes `IntersectionObserver` at all.
    pub fn supported() -> bool {
        web_sys::window()
            .map(|window| {
                Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
            })
            .unwrap_or(false)
    }

    /// Builds an observer that feeds each entry to `handler`. Returns
    /// `None` when the runtime lacks the capability.
    pub fn new(
        threshold: Option<f64>,
        mut handler: impl FnMut(IntersectionObserverEntry, &IntersectionObserver) + 'static,
    ) -> Option<Self> {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                        handler(entry, &observer);
                    }
                }
            },
        );

        let observer = match threshold {
            Some(ratio) => {
                let options = IntersectionObserverInit::new();
                options.set_threshold(&JsValue::from_f64(ratio));
                IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            }
            None => IntersectionObserver::new(callback.as_ref().unchecked_ref()),
        }
        .ok()?;

        Some(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }
}

impl Drop for IntersectionWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
