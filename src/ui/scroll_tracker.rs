//! Scroll-driven nav state and parallax
//!
//! Scroll events only request a frame; the DOM write happens in the frame
//! callback, so bursts of events cost one write per rendered frame.

use gloo_events::EventListener;
use web_sys::{Document, Element, Window};

use crate::core::config::{NavConfig, ParallaxMode};
use crate::core::environment::Environment;
use crate::core::motion::{
    centered_parallax, footer_parallax, footer_wordmark_css, is_scrolled, speed_parallax,
    translate_y_css,
};
use crate::ui::dom::{query, query_all, rect_of, scroll_y, set_transform, toggle_class, viewport_height};
use crate::ui::tasks::FrameScheduler;

/// Passive scroll listener feeding a [`FrameScheduler`]
pub struct ScrollTracker {
    _listener: EventListener,
}

impl ScrollTracker {
    /// Apply `update` now, then once per frame while the page scrolls
    pub fn install(window: &Window, update: impl Fn() + 'static) -> Self {
        let scheduler = FrameScheduler::new(update);
        scheduler.run_now();
        let listener = EventListener::new(window, "scroll", move |_| scheduler.request());
        Self {
            _listener: listener,
        }
    }
}

/// Toggle the nav's scrolled class past the configured offset
pub fn install_nav(window: &Window, document: &Document, config: &NavConfig) -> Option<ScrollTracker> {
    let nav = query(document, config.selector)?;
    let threshold = config.scroll_threshold;
    let class = config.scrolled_class;
    let sampler = window.clone();
    Some(ScrollTracker::install(window, move || {
        toggle_class(&nav, class, is_scrolled(scroll_y(&sampler), threshold));
    }))
}

/// Install the parallax flavour selected by `mode`.
///
/// Skipped under reduced motion and when no target element exists.
pub fn install_parallax(
    window: &Window,
    document: &Document,
    mode: &ParallaxMode,
    env: &Environment,
) -> Option<ScrollTracker> {
    if !env.allows_motion() {
        return None;
    }
    let sampler = window.clone();

    match *mode {
        ParallaxMode::Speed { attribute } => {
            let layers = speed_layers(window, document, attribute);
            if layers.is_empty() {
                return None;
            }
            Some(ScrollTracker::install(window, move || {
                let y = scroll_y(&sampler);
                for layer in &layers {
                    let offset = speed_parallax(y, layer.document_top, layer.speed);
                    set_transform(&layer.element, &translate_y_css(offset));
                }
            }))
        }
        ParallaxMode::HeroCenter { selector, factor } => {
            let images = query_all(document, selector);
            if images.is_empty() {
                return None;
            }
            Some(ScrollTracker::install(window, move || {
                let height = viewport_height(&sampler);
                for image in &images {
                    let offset = centered_parallax(rect_of(image), height, factor);
                    set_transform(image, &translate_y_css(offset));
                }
            }))
        }
        ParallaxMode::Footer {
            footer,
            wordmark,
            scale,
            max_offset,
        } => {
            let footer = query(document, footer)?;
            let wordmark = query(document, wordmark)?;
            Some(ScrollTracker::install(window, move || {
                let height = viewport_height(&sampler);
                if let Some(offset) = footer_parallax(rect_of(&footer), height, scale, max_offset) {
                    set_transform(&wordmark, &footer_wordmark_css(offset));
                }
            }))
        }
    }
}

struct SpeedLayer {
    element: Element,
    speed: f64,
    document_top: f64,
}

/// Elements with a numeric speed attribute, document offsets sampled once
fn speed_layers(window: &Window, document: &Document, attribute: &str) -> Vec<SpeedLayer> {
    let y = scroll_y(window);
    query_all(document, &format!("[{attribute}]"))
        .into_iter()
        .filter_map(|element| {
            let speed = element
                .get_attribute(attribute)?
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|s| s.is_finite())?;
            let document_top = rect_of(&element).top + y;
            Some(SpeedLayer {
                element,
                speed,
                document_top,
            })
        })
        .collect()
}
