//! Pointer-driven effects: custom cursor, 3D tilt cards and magnetic buttons
//!
//! Callers check `Environment::allows_pointer_effects` before installing; all
//! three are desktop-only and skipped under reduced motion.

use std::cell::Cell;
use std::rc::Rc;

use gloo_events::EventListener;
use web_sys::{Document, Element};

use crate::core::motion::{Follower, Point, Tilt, magnetic_offset, tilt_for, translate_css};
use crate::ui::dom::{BehaviorError, pointer_of, query_all, rect_of, set_transform, toggle_class};
use crate::ui::tasks::FrameLoop;

const CURSOR_CLASS: &str = "custom-cursor";
const CURSOR_ACTIVE_BODY_CLASS: &str = "has-custom-cursor";
const HOVERING_CLASS: &str = "hovering";

/// Trailing dot that follows the pointer with lerp smoothing
pub struct CustomCursor {
    element: Element,
    body: Element,
    _frames: FrameLoop,
    _listeners: Vec<EventListener>,
}

impl CustomCursor {
    pub fn install(document: &Document, smoothing: f64, hover_targets: &str) -> Result<Self, BehaviorError> {
        let body: Element = document.body().ok_or(BehaviorError::MissingElement("body"))?.into();

        let element = document.create_element("div")?;
        element.set_class_name(CURSOR_CLASS);
        let dot = document.create_element("div")?;
        dot.set_class_name("cursor-dot");
        element.append_child(&dot)?;
        body.append_child(&element)?;
        toggle_class(&body, CURSOR_ACTIVE_BODY_CLASS, true);

        // Raw pointer: written on every move, read once per frame
        let pointer = Rc::new(Cell::new(Point::default()));
        let mut listeners = Vec::new();

        let move_target = pointer.clone();
        listeners.push(EventListener::new(document, "mousemove", move |event| {
            if let Some(point) = pointer_of(event) {
                move_target.set(point);
            }
        }));

        for target in query_all(document, hover_targets) {
            let cursor = element.clone();
            listeners.push(EventListener::new(&target, "mouseenter", move |_| {
                toggle_class(&cursor, HOVERING_CLASS, true);
            }));
            let cursor = element.clone();
            listeners.push(EventListener::new(&target, "mouseleave", move |_| {
                toggle_class(&cursor, HOVERING_CLASS, false);
            }));
        }

        let mut follower = Follower::new(smoothing);
        let cursor = element.clone();
        let frames = FrameLoop::start(move |_| {
            follower.set_target(pointer.get());
            set_transform(&cursor, &translate_css(follower.step()));
            true
        });

        Ok(Self {
            element,
            body,
            _frames: frames,
            _listeners: listeners,
        })
    }
}

impl Drop for CustomCursor {
    fn drop(&mut self) {
        self.element.remove();
        toggle_class(&self.body, CURSOR_ACTIVE_BODY_CLASS, false);
    }
}

/// Move/leave listeners for a set of tilt cards or magnetic buttons
pub struct PointerEffects {
    _listeners: Vec<EventListener>,
}

impl PointerEffects {
    /// Rotate each card toward the pointer, neutral on leave
    pub fn tilt(document: &Document, selector: &str, max_deg: f64) -> Option<Self> {
        Self::install(
            document,
            selector,
            move |pointer, card| tilt_for(pointer, rect_of(card), max_deg).to_css(),
            Tilt::NEUTRAL.to_css(),
        )
    }

    /// Pull each button toward the pointer, back to rest on leave
    pub fn magnetic(document: &Document, selector: &str, strength: f64) -> Option<Self> {
        Self::install(
            document,
            selector,
            move |pointer, button| translate_css(magnetic_offset(pointer, rect_of(button), strength)),
            translate_css(Point::default()),
        )
    }

    fn install(
        document: &Document,
        selector: &str,
        transform: impl Fn(Point, &Element) -> String + Clone + 'static,
        rest: String,
    ) -> Option<Self> {
        let elements = query_all(document, selector);
        if elements.is_empty() {
            return None;
        }

        let mut listeners = Vec::with_capacity(elements.len() * 2);
        for element in elements {
            let target = element.clone();
            let transform = transform.clone();
            listeners.push(EventListener::new(&element, "mousemove", move |event| {
                if let Some(pointer) = pointer_of(event) {
                    set_transform(&target, &transform(pointer, &target));
                }
            }));

            let target = element.clone();
            let rest = rest.clone();
            listeners.push(EventListener::new(&element, "mouseleave", move |_| {
                set_transform(&target, &rest);
            }));
        }

        Some(Self {
            _listeners: listeners,
        })
    }
}
