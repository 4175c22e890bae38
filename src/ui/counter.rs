//! Count-up statistics triggered on first half-visibility

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::Document;

use crate::core::config::CounterConfig;
use crate::core::counter::{CounterAnimation, format_grouped, parse_count};
use crate::core::environment::Environment;
use crate::core::reveal::RootMargin;
use crate::ui::dom::query_all;
use crate::ui::tasks::FrameLoop;
use crate::ui::viewport_observer::ViewportObserver;

pub struct CounterWidgets {
    _observer: Option<ViewportObserver>,
    _animations: Rc<RefCell<Vec<FrameLoop>>>,
}

impl CounterWidgets {
    pub fn install(document: &Document, config: &CounterConfig, env: &Environment) -> Option<Self> {
        let elements: Vec<_> = query_all(document, config.selector)
            .into_iter()
            .filter(|el| {
                el.get_attribute(config.target_attribute)
                    .as_deref()
                    .and_then(parse_count)
                    .is_some()
            })
            .collect();
        if elements.is_empty() {
            return None;
        }

        let animations = Rc::new(RefCell::new(Vec::new()));
        let running = animations.clone();
        let attribute = config.target_attribute;
        let duration_ms = config.duration_ms;
        let animate = env.allows_motion();

        let observer = ViewportObserver::observe_once(
            elements,
            config.threshold,
            &RootMargin::default(),
            move |element| {
                let Some(target) = element.get_attribute(attribute).as_deref().and_then(parse_count)
                else {
                    return;
                };
                if !animate {
                    element.set_text_content(Some(&format_grouped(target)));
                    return;
                }

                let counter = CounterAnimation::new(target, duration_ms);
                let element = element.clone();
                let mut started_at = None;
                let frames = FrameLoop::start(move |timestamp| {
                    let start = *started_at.get_or_insert(timestamp);
                    let elapsed = timestamp - start;
                    element.set_text_content(Some(&format_grouped(counter.value_at(elapsed))));
                    !counter.is_complete(elapsed)
                });
                running.borrow_mut().push(frames);
            },
        );

        Some(Self {
            _observer: observer,
            _animations: animations,
        })
    }
}
