//! Background slide rotation on a fixed interval

use gloo_timers::callback::Interval;
use web_sys::{Document, Element};

use crate::core::carousel::Carousel;
use crate::core::config::CarouselConfig;
use crate::core::environment::Environment;
use crate::ui::dom::{query, query_all_within, toggle_class};

/// Running carousel; dropping it stops the rotation
pub struct CarouselTimer {
    _interval: Interval,
}

impl CarouselTimer {
    /// Start rotating the slides of `config.container`.
    ///
    /// Returns `None` under reduced motion, without a container, or with
    /// fewer than two slides.
    pub fn install(document: &Document, config: &CarouselConfig, env: &Environment) -> Option<Self> {
        if !env.allows_motion() {
            return None;
        }
        let container = query(document, config.container)?;
        let slides = query_all_within(&container, config.slide);
        let mut carousel = Carousel::new(slides.len())?;

        let class = config.active_class;
        show(&slides, &carousel, class);

        let interval = Interval::new(config.interval_ms, move || {
            carousel.advance();
            show(&slides, &carousel, class);
        });

        Some(Self {
            _interval: interval,
        })
    }
}

fn show(slides: &[Element], carousel: &Carousel, class: &str) {
    for (slide, active) in slides.iter().zip(carousel.active_flags()) {
        toggle_class(slide, class, active);
    }
}
