//! Per-page behavior registry
//!
//! `PageBehaviors` installs every component a `PageConfig` asks for and owns
//! the resulting handles. Each handle cancels its listeners, timers and frames
//! on drop, so dropping the registry tears the whole page down.
//!
//! Pages mount through [`mount`] with an id from [`next_page_id`] and unmount
//! through [`teardown`] with the same id. The id check keeps a late cleanup of
//! the previous route from dropping the behaviors of the page that replaced it.

use std::any::Any;
use std::cell::RefCell;
use std::sync::atomic::{AtomicU64, Ordering};

use leptos::logging::{log, warn};
use web_sys::{Document, Element, Window};

use crate::core::config::{PageConfig, PageVariant, RevealConfig};
use crate::core::environment::Environment;
use crate::core::reveal::{RootMargin, parse_delay_ms};
use crate::ui::carousel_timer::CarouselTimer;
use crate::ui::counter::CounterWidgets;
use crate::ui::dom::{self, BehaviorError, query_all, set_style, toggle_class};
use crate::ui::environment::read_environment;
use crate::ui::interactions::{CardAccordion, SmoothAnchors, install_lazy_images};
use crate::ui::pointer_tracker::{CustomCursor, PointerEffects};
use crate::ui::scroll_tracker::{install_nav, install_parallax};
use crate::ui::viewport_observer::ViewportObserver;
use crate::ui::waitlist_form::WaitlistForm;

static NEXT_PAGE_ID: AtomicU64 = AtomicU64::new(1);

thread_local! {
    static ACTIVE: RefCell<Option<(u64, PageBehaviors)>> = const { RefCell::new(None) };
}

/// Allocate an id for a page component instance
pub fn next_page_id() -> u64 {
    NEXT_PAGE_ID.fetch_add(1, Ordering::Relaxed)
}

/// Everything installed for one page
pub struct PageBehaviors {
    variant: PageVariant,
    installed: Vec<&'static str>,
    loaded: Option<(Element, &'static str)>,
    handles: Vec<Box<dyn Any>>,
}

impl PageBehaviors {
    /// Install every behavior `config` enables.
    ///
    /// Components whose elements are missing are skipped. A component that
    /// fails to wire up is logged and skipped; only a missing window or
    /// document is an error.
    pub fn install(config: &PageConfig) -> Result<Self, BehaviorError> {
        let window = dom::window()?;
        let document = dom::document(&window)?;
        let env = read_environment(&window);

        let mut page = Self {
            variant: config.variant,
            installed: Vec::new(),
            loaded: None,
            handles: Vec::new(),
        };

        if let Some(nav) = &config.nav {
            page.keep("nav", install_nav(&window, &document, nav));
        }
        if let Some(reveal) = &config.reveal {
            page.keep("reveal", install_reveal(&document, reveal));
        }
        if let Some(images) = &config.lazy_images {
            page.keep("lazy-images", install_lazy_images(&document, images));
        }
        if let Some(counter) = &config.counter {
            page.keep("counter", CounterWidgets::install(&document, counter, &env));
        }
        for carousel in &config.carousels {
            page.keep(carousel.name, CarouselTimer::install(&document, carousel, &env));
        }
        if let Some(mode) = &config.parallax {
            page.keep("parallax", install_parallax(&window, &document, mode, &env));
        }
        page.install_pointer(&document, config, &env);

        match WaitlistForm::install(&document, &config.form) {
            Ok(form) => page.keep("waitlist", form),
            Err(err) => warn!("Waitlist form not installed: {}", err),
        }
        page.keep(
            "anchors",
            SmoothAnchors::install(&window, &document, &config.anchors, &env),
        );
        if let Some(cards) = &config.cards {
            page.keep("cards", CardAccordion::install(&document, cards));
        }

        if let Some(class) = config.loaded_class {
            if let Some(body) = document.body() {
                let body: Element = body.into();
                toggle_class(&body, class, true);
                page.loaded = Some((body, class));
            }
        }

        log!(
            "{} page behaviors installed: {}",
            page.variant,
            page.installed.join(", ")
        );
        Ok(page)
    }

    fn install_pointer(&mut self, document: &Document, config: &PageConfig, env: &Environment) {
        let pointer = &config.pointer;
        if !env.allows_pointer_effects(pointer.desktop_breakpoint) {
            return;
        }

        if pointer.cursor_enabled {
            match CustomCursor::install(document, pointer.cursor_smoothing, pointer.hover_targets) {
                Ok(cursor) => self.keep("cursor", Some(cursor)),
                Err(err) => warn!("Custom cursor not installed: {}", err),
            }
        }
        if let Some(selector) = pointer.tilt_selector {
            self.keep("tilt", PointerEffects::tilt(document, selector, pointer.max_tilt_deg));
        }
        if let Some(selector) = pointer.magnetic_selector {
            self.keep(
                "magnetic",
                PointerEffects::magnetic(document, selector, pointer.magnetic_strength),
            );
        }
    }

    fn keep<T: 'static>(&mut self, name: &'static str, handle: Option<T>) {
        if let Some(handle) = handle {
            self.installed.push(name);
            self.handles.push(Box::new(handle));
        }
    }

    pub fn variant(&self) -> PageVariant {
        self.variant
    }

    /// Names of the components that found their elements and are running
    pub fn installed(&self) -> &[&'static str] {
        &self.installed
    }
}

impl Drop for PageBehaviors {
    fn drop(&mut self) {
        if let Some((body, class)) = &self.loaded {
            toggle_class(body, class, false);
        }
    }
}

/// Reveal elements once they scroll into view, honoring per-element delays
fn install_reveal(document: &Document, config: &RevealConfig) -> Option<ViewportObserver> {
    let elements = query_all(document, config.selector);
    let margin = match RootMargin::parse(config.root_margin) {
        Ok(margin) => margin,
        Err(err) => {
            warn!("Invalid reveal root margin {:?}: {}", config.root_margin, err);
            RootMargin::default()
        }
    };
    let class = config.active_class;
    let delay_attribute = config.delay_attribute;

    ViewportObserver::observe_once(elements, config.threshold, &margin, move |element| {
        let delay = parse_delay_ms(element.get_attribute(delay_attribute).as_deref());
        if delay > 0 {
            set_style(element, "transition-delay", &format!("{delay}ms"));
        }
        toggle_class(element, class, true);
    })
}

/// Body dataset lookup for [`PageConfig::with_overrides`]
fn body_overrides(window: &Window) -> impl Fn(&str) -> Option<String> {
    let dataset = window
        .document()
        .and_then(|document| document.body())
        .map(|body| body.dataset());
    move |key| dataset.as_ref().and_then(|map| map.get(key))
}

/// Install the behaviors for `variant`, replacing whatever page was active
pub fn mount(id: u64, variant: PageVariant) {
    let Ok(window) = dom::window() else {
        return;
    };
    let config = variant.config().with_overrides(body_overrides(&window));

    // Drop the previous page before the new one touches the DOM
    let previous = ACTIVE.with(|active| active.borrow_mut().take());
    drop(previous);

    match PageBehaviors::install(&config) {
        Ok(page) => ACTIVE.with(|active| *active.borrow_mut() = Some((id, page))),
        Err(err) => warn!("Page behaviors not installed: {}", err),
    }
}

/// Drop the behaviors installed by page `id`, if they are still active
pub fn teardown(id: u64) {
    let removed = ACTIVE.with(|active| {
        let mut active = active.borrow_mut();
        match active.as_ref() {
            Some((current, _)) if *current == id => active.take(),
            _ => None,
        }
    });
    if let Some((_, page)) = removed {
        log!("{} page behaviors removed", page.variant());
    }
}
