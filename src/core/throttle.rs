//! Frame-aligned throttling for scroll and pointer updates
//!
//! Input events arrive far more often than the browser paints. Handlers only
//! record the latest input and ask a [`FrameGate`] whether a frame callback
//! needs to be scheduled; the gate stays closed until that callback runs, so a
//! burst of events never queues more than one update per frame.
//!
//! # Usage Example
//!
//! ```rust
//! use muse::core::throttle::FrameGate;
//!
//! let gate = FrameGate::new();
//!
//! // First scroll event schedules a frame
//! assert!(gate.request());
//! // Further events in the same frame are coalesced
//! assert!(!gate.request());
//!
//! // The frame callback writes to the DOM, then reopens the gate
//! gate.release();
//! assert!(gate.request());
//! ```

use std::cell::Cell;

/// Pending-update flag shared between an event handler and its frame callback
#[derive(Debug, Default)]
pub struct FrameGate {
    pending: Cell<bool>,
    coalesced: Cell<u64>,
}

impl FrameGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask to schedule a frame update
    ///
    /// Returns `true` if the caller must schedule the frame callback, `false`
    /// if one is already pending.
    pub fn request(&self) -> bool {
        if self.pending.replace(true) {
            self.coalesced.set(self.coalesced.get() + 1);
            false
        } else {
            true
        }
    }

    /// Mark the pending update as done; called at the end of the frame callback
    pub fn release(&self) {
        self.pending.set(false);
    }

    /// Check whether a frame update is currently queued
    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }

    /// Number of requests absorbed by an already pending frame
    pub fn coalesced(&self) -> u64 {
        self.coalesced.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let gate = FrameGate::new();
        assert!(!gate.is_pending());
        assert_eq!(gate.coalesced(), 0);
    }

    #[test]
    fn test_burst_schedules_once() {
        let gate = FrameGate::new();
        let scheduled = (0..25).filter(|_| gate.request()).count();
        assert_eq!(scheduled, 1);
        assert_eq!(gate.coalesced(), 24);
        assert!(gate.is_pending());
    }

    #[test]
    fn test_release_reopens() {
        let gate = FrameGate::new();
        assert!(gate.request());
        gate.release();
        assert!(!gate.is_pending());
        assert!(gate.request());
    }

    #[test]
    fn test_frames_over_time() {
        // Three frames, each receiving a burst of four events
        let gate = FrameGate::new();
        let mut frames = 0;
        for _ in 0..3 {
            for _ in 0..4 {
                if gate.request() {
                    frames += 1;
                }
            }
            gate.release();
        }
        assert_eq!(frames, 3);
        assert_eq!(gate.coalesced(), 9);
    }
}
