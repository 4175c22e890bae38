//! One-shot `IntersectionObserver` wrapper
//!
//! Each element fires its callback once, the first time it is visible enough,
//! and is unobserved right after. When the browser cannot construct an
//! `IntersectionObserver`, every element counts as visible immediately.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::logging::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::core::reveal::{Intersection, OnceTracker, RootMargin};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

struct Watched<F> {
    elements: Vec<Element>,
    tracker: OnceTracker<usize>,
    on_visible: F,
}

/// Live observer; dropping it disconnects every remaining element
pub struct ViewportObserver {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl ViewportObserver {
    /// Watch `elements`, calling `on_visible` once per element.
    ///
    /// Returns `None` when there is nothing left to observe: no elements, or
    /// the fallback already fired every callback.
    pub fn observe_once<F>(
        elements: Vec<Element>,
        threshold: f64,
        root_margin: &RootMargin,
        on_visible: F,
    ) -> Option<Self>
    where
        F: FnMut(&Element) + 'static,
    {
        if elements.is_empty() {
            return None;
        }

        let tracker = OnceTracker::new(threshold, 0..elements.len());
        let state = Rc::new(RefCell::new(Watched {
            elements,
            tracker,
            on_visible,
        }));

        let callback_state = state.clone();
        let callback: ObserverCallback = Closure::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let mut guard = callback_state.borrow_mut();
                let Watched {
                    elements,
                    tracker,
                    on_visible,
                } = &mut *guard;

                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    let Some(index) = elements.iter().position(|el| *el == target) else {
                        continue;
                    };
                    let intersection = Intersection {
                        is_intersecting: entry.is_intersecting(),
                        ratio: entry.intersection_ratio(),
                    };
                    if tracker.report(&index, intersection) {
                        observer.unobserve(&target);
                        on_visible(&target);
                    }
                }

                if tracker.is_done() {
                    observer.disconnect();
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        options.set_root_margin(&root_margin.to_css());

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => {
                for element in &state.borrow().elements {
                    observer.observe(element);
                }
                Some(Self {
                    observer,
                    _callback: callback,
                })
            }
            Err(err) => {
                warn!("IntersectionObserver unavailable, showing elements immediately: {:?}", err);
                let mut guard = state.borrow_mut();
                let Watched {
                    elements,
                    tracker,
                    on_visible,
                } = &mut *guard;
                let mut keys = tracker.fire_all();
                keys.sort_unstable();
                for index in keys {
                    if let Some(element) = elements.get(index) {
                        on_visible(element);
                    }
                }
                None
            }
        }
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
