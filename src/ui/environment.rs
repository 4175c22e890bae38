//! Read the motion preference and viewport width from the browser

use web_sys::Window;

use crate::core::environment::{Environment, REDUCED_MOTION_QUERY};
use crate::ui::dom::viewport_width;

/// Detect `prefers-reduced-motion: reduce`
fn detect_reduced_motion(window: &Window) -> bool {
    if let Ok(Some(media_query)) = window.match_media(REDUCED_MOTION_QUERY) {
        return media_query.matches();
    }
    false
}

/// Snapshot taken once per page install
pub fn read_environment(window: &Window) -> Environment {
    Environment::new(detect_reduced_motion(window), viewport_width(window))
}
