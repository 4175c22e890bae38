//! Click-driven page interactions and lazy image loading

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::core::config::{AnchorConfig, AnchorOffset, CardsConfig, LazyImageConfig};
use crate::core::environment::{Environment, ScrollStyle};
use crate::core::interactions::{Accordion, anchor_target, scroll_destination};
use crate::core::reveal::RootMargin;
use crate::ui::dom::{query, query_all, query_within, rect_of, scroll_y, toggle_class};
use crate::ui::viewport_observer::ViewportObserver;

/// Expandable cards where at most one is open
pub struct CardAccordion {
    _listeners: Vec<EventListener>,
}

impl CardAccordion {
    pub fn install(document: &Document, config: &CardsConfig) -> Option<Self> {
        let cards = query_all(document, config.selector);
        if cards.is_empty() {
            return None;
        }

        let cards = Rc::new(cards);
        let state = Rc::new(RefCell::new(Accordion::new()));
        let open_class = config.open_class;
        let toggle = config.toggle;

        let listeners = cards
            .iter()
            .enumerate()
            .map(|(index, card)| {
                let cards = cards.clone();
                let state = state.clone();
                EventListener::new(card, "click", move |_| {
                    let mut accordion = state.borrow_mut();
                    accordion.toggle(index);
                    for (i, card) in cards.iter().enumerate() {
                        let open = accordion.is_open(i);
                        toggle_class(card, open_class, open);
                        if let Some(button) = query_within(card, toggle) {
                            let _ = button.set_attribute("aria-expanded", if open { "true" } else { "false" });
                        }
                    }
                })
            })
            .collect();

        Some(Self {
            _listeners: listeners,
        })
    }
}

/// In-page links that scroll to their target below the fixed nav
pub struct SmoothAnchors {
    _listeners: Vec<EventListener>,
}

impl SmoothAnchors {
    pub fn install(window: &Window, document: &Document, config: &AnchorConfig, env: &Environment) -> Option<Self> {
        let links = query_all(document, config.selector);
        if links.is_empty() {
            return None;
        }

        let behavior = match env.scroll_style() {
            ScrollStyle::Smooth => ScrollBehavior::Smooth,
            ScrollStyle::Instant => ScrollBehavior::Auto,
        };
        let offset = config.offset;

        let listeners = links
            .into_iter()
            .map(|link| {
                let window = window.clone();
                let document = document.clone();
                let href = link.get_attribute("href").unwrap_or_default();
                EventListener::new_with_options(
                    &link,
                    "click",
                    EventListenerOptions::enable_prevent_default(),
                    move |event| {
                        let Some(target) = anchor_target(&href).and_then(|sel| query(&document, sel)) else {
                            return;
                        };
                        event.prevent_default();

                        let top = scroll_destination(
                            rect_of(&target).top,
                            scroll_y(&window),
                            offset_px(&document, offset),
                        );
                        let options = ScrollToOptions::new();
                        options.set_top(top);
                        options.set_behavior(behavior);
                        window.scroll_to_with_scroll_to_options(&options);
                    },
                )
            })
            .collect();

        Some(Self {
            _listeners: listeners,
        })
    }
}

fn offset_px(document: &Document, offset: AnchorOffset) -> f64 {
    match offset {
        AnchorOffset::Fixed(px) => px,
        AnchorOffset::NavHeight(selector) => query(document, selector)
            .and_then(|nav| nav.dyn_into::<HtmlElement>().ok())
            .map(|nav| f64::from(nav.offset_height()))
            .unwrap_or(0.0),
    }
}

/// Swap `data-src` into `src` shortly before each image scrolls into view
pub fn install_lazy_images(document: &Document, config: &LazyImageConfig) -> Option<ViewportObserver> {
    let images = query_all(document, config.selector);
    let margin = RootMargin::parse(config.root_margin).unwrap_or_default();
    let attribute = config.source_attribute;

    ViewportObserver::observe_once(images, 0.0, &margin, move |image: &Element| {
        if let Some(source) = image.get_attribute(attribute) {
            let _ = image.set_attribute("src", &source);
            let _ = image.remove_attribute(attribute);
        }
    })
}
