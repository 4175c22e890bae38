//! Cancellable frame tasks
//!
//! Both task types own their pending `AnimationFrame`; dropping the task
//! cancels the next frame, so a behavior is torn down by dropping it.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_render::{AnimationFrame, request_animation_frame};

use crate::core::throttle::FrameGate;

type FrameSlot = Rc<RefCell<Option<AnimationFrame>>>;

/// Self-rescheduling per-frame callback.
///
/// `tick` receives the frame timestamp and returns whether to keep running.
pub struct FrameLoop {
    slot: FrameSlot,
}

impl FrameLoop {
    pub fn start(tick: impl FnMut(f64) -> bool + 'static) -> Self {
        let slot: FrameSlot = Rc::new(RefCell::new(None));
        schedule_loop(Rc::downgrade(&slot), Rc::new(RefCell::new(tick)));
        Self { slot }
    }

    pub fn is_running(&self) -> bool {
        self.slot.borrow().is_some()
    }
}

fn schedule_loop<F>(slot: Weak<RefCell<Option<AnimationFrame>>>, tick: Rc<RefCell<F>>)
where
    F: FnMut(f64) -> bool + 'static,
{
    let Some(strong) = slot.upgrade() else {
        return;
    };
    let next_slot = slot.clone();
    let frame = request_animation_frame(move |timestamp| {
        let Some(strong) = next_slot.upgrade() else {
            return;
        };
        strong.borrow_mut().take();
        let keep_going = (tick.borrow_mut())(timestamp);
        if keep_going {
            schedule_loop(next_slot, tick);
        }
    });
    *strong.borrow_mut() = Some(frame);
}

struct SchedulerInner {
    gate: FrameGate,
    frame: RefCell<Option<AnimationFrame>>,
    update: Box<dyn Fn()>,
}

/// Runs `update` at most once per frame no matter how often it is requested
#[derive(Clone)]
pub struct FrameScheduler {
    inner: Rc<SchedulerInner>,
}

impl FrameScheduler {
    pub fn new(update: impl Fn() + 'static) -> Self {
        Self {
            inner: Rc::new(SchedulerInner {
                gate: FrameGate::new(),
                frame: RefCell::new(None),
                update: Box::new(update),
            }),
        }
    }

    /// Queue an update for the next frame unless one is already pending
    pub fn request(&self) {
        if !self.inner.gate.request() {
            return;
        }
        let inner = Rc::downgrade(&self.inner);
        let frame = request_animation_frame(move |_| {
            if let Some(inner) = inner.upgrade() {
                inner.frame.borrow_mut().take();
                (inner.update)();
                inner.gate.release();
            }
        });
        *self.inner.frame.borrow_mut() = Some(frame);
    }

    /// Run the update synchronously (initial state at install)
    pub fn run_now(&self) {
        (self.inner.update)();
    }
}
