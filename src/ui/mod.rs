//! User interface: page components and the browser-side behaviors that
//! attach to them after hydration.

pub mod pages;
pub mod styles;

#[cfg(feature = "hydrate")]
pub mod behaviors;
#[cfg(feature = "hydrate")]
pub mod carousel_timer;
#[cfg(feature = "hydrate")]
pub mod counter;
#[cfg(feature = "hydrate")]
pub mod dom;
#[cfg(feature = "hydrate")]
pub mod environment;
#[cfg(feature = "hydrate")]
pub mod interactions;
#[cfg(feature = "hydrate")]
pub mod pointer_tracker;
#[cfg(feature = "hydrate")]
pub mod scroll_tracker;
#[cfg(feature = "hydrate")]
pub mod tasks;
#[cfg(feature = "hydrate")]
pub mod viewport_observer;
#[cfg(feature = "hydrate")]
pub mod waitlist_form;

pub use pages::{AtelierPage, ClassicPage, EditorialPage, NotFoundPage};
pub use styles::PageStyles;
