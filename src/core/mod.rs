//! Core behavior models for the landing pages
//!
//! Pure, DOM-free logic: configuration, motion math, one-shot visibility
//! tracking, carousel and counter state, and the waitlist form. The browser
//! layer in `crate::ui` samples the DOM and drives these types.

pub mod carousel;
pub mod config;
pub mod counter;
pub mod environment;
pub mod interactions;
pub mod motion;
pub mod reveal;
#[cfg(test)]
mod tests;
pub mod throttle;
pub mod waitlist;

pub use config::{PageConfig, PageVariant, SiteConfig};
pub use environment::Environment;
