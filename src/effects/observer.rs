use js_sys::{Array, Reflect};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    Window,
};

use crate::error::EffectError;
use crate::watch::{dispatch, Observe, WatchOptions};

impl Observe<Element> for IntersectionObserver {
    fn observe(&self, target: &Element) {
        IntersectionObserver::observe(self, target);
    }

    fn unobserve(&self, target: &Element) {
        IntersectionObserver::unobserve(self, target);
    }
}

pub fn intersection_observer_supported(window: &Window) -> bool {
    Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

/// An `IntersectionObserver` together with the closure it calls back into.
/// Dropping the watcher disconnects every target.
pub struct VisibilityWatcher {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl VisibilityWatcher {
    /// `Ok(None)` when the browser has no `IntersectionObserver`.
    pub fn new<F>(
        window: &Window,
        options: &WatchOptions,
        mut on_visible: F,
    ) -> Result<Option<Self>, EffectError>
    where
        F: FnMut(&HtmlElement) + 'static,
    {
        if !intersection_observer_supported(window) {
            return Ok(None);
        }

        let mode = options.mode;
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    dispatch(&observer, mode, &target, entry.is_intersecting(), |target| {
                        if let Some(element) = target.dyn_ref::<HtmlElement>() {
                            on_visible(element);
                        }
                    });
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        if let Some(root_margin) = options.root_margin {
            init.set_root_margin(root_margin);
        }

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|err| EffectError::js("IntersectionObserver", err))?;

        Ok(Some(Self {
            observer,
            _callback: callback,
        }))
    }

    pub fn watch(&self, target: &Element) {
        Observe::observe(&self.observer, target);
    }
}

impl Drop for VisibilityWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
