//! Page behavior configuration.
//!
//! Every landing page variant is described by one [`PageConfig`]: selectors,
//! thresholds, intervals and feature toggles. The browser layer never hardcodes
//! any of these values, so the three pages share a single implementation.
//!
//! [`SiteConfig`] is the server-side counterpart loaded from environment
//! variables. It reaches the client as `data-*` attributes on `<body>` and is
//! applied with [`PageConfig::with_overrides`].

use derive_more::Display;

/// Scroll offset (px) past which the nav bar is marked as scrolled
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;

/// Fraction of a reveal target that must be visible before it animates in
pub const REVEAL_THRESHOLD: f64 = 0.15;

/// Root margin for reveal targets: trigger 50px before the bottom edge
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Root margin for lazy images: start loading 50px ahead of the viewport
pub const LAZY_IMAGE_ROOT_MARGIN: &str = "50px 0px";

/// Counters start once half of the element is visible
pub const COUNTER_THRESHOLD: f64 = 0.5;

/// Counter animation length in milliseconds
pub const COUNTER_DURATION_MS: f64 = 2000.0;

/// Simulated network round trip for the waitlist form
pub const FORM_SUBMIT_DELAY_MS: u32 = 1500;

/// Length of the invalid-input shake animation
pub const SHAKE_DURATION_MS: u32 = 500;

/// localStorage key holding the JSON list of waitlist emails
pub const WAITLIST_STORAGE_KEY: &str = "muse_waitlist";

/// Lerp factor used by the custom cursor each frame
pub const CURSOR_SMOOTHING: f64 = 0.15;

/// Fraction of the pointer offset applied to magnetic buttons
pub const MAGNETIC_STRENGTH: f64 = 0.15;

/// Maximum card tilt in degrees
pub const MAX_TILT_DEG: f64 = 10.0;

/// Pointer effects only run on viewports wider than this
pub const DESKTOP_BREAKPOINT_PX: f64 = 1024.0;

/// Hero background carousel interval
pub const HERO_CAROUSEL_INTERVAL_MS: u32 = 5000;

/// CTA background carousel interval
pub const CTA_CAROUSEL_INTERVAL_MS: u32 = 6000;

/// Fixed nav allowance for anchor scrolling on the editorial pages
pub const ANCHOR_FIXED_OFFSET_PX: f64 = 100.0;

/// Landing page variants served by the site
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum PageVariant {
    #[display("classic")]
    Classic,
    #[display("editorial")]
    Editorial,
    #[display("atelier")]
    Atelier,
}

impl PageVariant {
    pub const ALL: [PageVariant; 3] = [
        PageVariant::Classic,
        PageVariant::Editorial,
        PageVariant::Atelier,
    ];

    /// Route the variant is served under
    pub fn path(&self) -> &'static str {
        match self {
            PageVariant::Classic => "/",
            PageVariant::Editorial => "/v2",
            PageVariant::Atelier => "/atelier",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        Self::ALL
            .into_iter()
            .find(|variant| variant.path().trim_end_matches('/') == trimmed)
    }

    /// Full behavior configuration for this variant
    pub fn config(&self) -> PageConfig {
        match self {
            PageVariant::Classic => PageConfig::classic(),
            PageVariant::Editorial => PageConfig::editorial(),
            PageVariant::Atelier => PageConfig::atelier(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavConfig {
    pub selector: &'static str,
    pub scroll_threshold: f64,
    pub scrolled_class: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RevealConfig {
    pub selector: &'static str,
    pub threshold: f64,
    pub root_margin: &'static str,
    pub active_class: &'static str,
    /// Attribute carrying an optional stagger delay in milliseconds
    pub delay_attribute: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LazyImageConfig {
    pub selector: &'static str,
    pub source_attribute: &'static str,
    pub root_margin: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CounterConfig {
    pub selector: &'static str,
    pub target_attribute: &'static str,
    pub threshold: f64,
    pub duration_ms: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CarouselConfig {
    pub name: &'static str,
    pub container: &'static str,
    pub slide: &'static str,
    pub interval_ms: u32,
    pub active_class: &'static str,
}

/// How scroll position is turned into a vertical offset
#[derive(Clone, Debug, PartialEq)]
pub enum ParallaxMode {
    /// `(scrollY - documentTop) * speed` for every element carrying `attribute`
    Speed { attribute: &'static str },
    /// Offset by the element center's distance from the viewport center
    HeroCenter {
        selector: &'static str,
        factor: f64,
    },
    /// Footer wordmark that sinks in as the footer scrolls into view
    Footer {
        footer: &'static str,
        wordmark: &'static str,
        scale: f64,
        max_offset: f64,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct PointerConfig {
    pub cursor_enabled: bool,
    pub cursor_smoothing: f64,
    pub hover_targets: &'static str,
    pub tilt_selector: Option<&'static str>,
    pub max_tilt_deg: f64,
    pub magnetic_selector: Option<&'static str>,
    pub magnetic_strength: f64,
    pub desktop_breakpoint: f64,
}

/// Visual feedback for a rejected email
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InvalidFeedback {
    Shake { duration_ms: u32 },
    Focus,
}

/// Where the busy state of a submitting form is shown
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BusyIndicator {
    FormClass(&'static str),
    /// Class on the submit button, which is also disabled
    Button {
        selector: &'static str,
        class: &'static str,
    },
}

/// How the success panel is revealed once the submit completes
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SuccessDisplay {
    Classes {
        form_class: &'static str,
        panel_selector: &'static str,
        panel_class: &'static str,
    },
    /// Hide the form and unhide the panel
    Unhide { panel_selector: &'static str },
}

#[derive(Clone, Debug, PartialEq)]
pub struct FormConfig {
    pub form_selector: &'static str,
    pub input_selector: &'static str,
    pub submit_delay_ms: u32,
    pub storage_key: &'static str,
    pub invalid: InvalidFeedback,
    pub busy: BusyIndicator,
    pub success: SuccessDisplay,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnchorOffset {
    /// Subtract the rendered height of the nav element
    NavHeight(&'static str),
    Fixed(f64),
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnchorConfig {
    pub selector: &'static str,
    pub offset: AnchorOffset,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CardsConfig {
    pub selector: &'static str,
    pub toggle: &'static str,
    pub open_class: &'static str,
}

/// Complete behavior configuration for one page
#[derive(Clone, Debug, PartialEq)]
pub struct PageConfig {
    pub variant: PageVariant,
    pub nav: Option<NavConfig>,
    pub reveal: Option<RevealConfig>,
    pub lazy_images: Option<LazyImageConfig>,
    pub counter: Option<CounterConfig>,
    pub carousels: Vec<CarouselConfig>,
    pub parallax: Option<ParallaxMode>,
    pub pointer: PointerConfig,
    pub form: FormConfig,
    pub anchors: AnchorConfig,
    pub cards: Option<CardsConfig>,
    /// Class added to `<body>` once behaviors are installed
    pub loaded_class: Option<&'static str>,
}

fn reveal_defaults() -> RevealConfig {
    RevealConfig {
        selector: ".reveal",
        threshold: REVEAL_THRESHOLD,
        root_margin: REVEAL_ROOT_MARGIN,
        active_class: "active",
        delay_attribute: "data-delay",
    }
}

fn pointer_defaults() -> PointerConfig {
    PointerConfig {
        cursor_enabled: false,
        cursor_smoothing: CURSOR_SMOOTHING,
        hover_targets: "a, button, input, .product-card",
        tilt_selector: None,
        max_tilt_deg: MAX_TILT_DEG,
        magnetic_selector: None,
        magnetic_strength: MAGNETIC_STRENGTH,
        desktop_breakpoint: DESKTOP_BREAKPOINT_PX,
    }
}

fn classic_form() -> FormConfig {
    FormConfig {
        form_selector: "#waitlist-form",
        input_selector: "input[type=\"email\"]",
        submit_delay_ms: FORM_SUBMIT_DELAY_MS,
        storage_key: WAITLIST_STORAGE_KEY,
        invalid: InvalidFeedback::Shake {
            duration_ms: SHAKE_DURATION_MS,
        },
        busy: BusyIndicator::FormClass("loading"),
        success: SuccessDisplay::Classes {
            form_class: "submitted",
            panel_selector: "#waitlist-success",
            panel_class: "active",
        },
    }
}

impl PageConfig {
    /// Classic waitlist page: nav, reveals, hero parallax, lazy images
    pub fn classic() -> Self {
        Self {
            variant: PageVariant::Classic,
            nav: Some(NavConfig {
                selector: "#nav",
                scroll_threshold: NAV_SCROLL_THRESHOLD,
                scrolled_class: "scrolled",
            }),
            reveal: Some(reveal_defaults()),
            lazy_images: Some(LazyImageConfig {
                selector: "img[data-src]",
                source_attribute: "data-src",
                root_margin: LAZY_IMAGE_ROOT_MARGIN,
            }),
            counter: None,
            carousels: Vec::new(),
            parallax: Some(ParallaxMode::HeroCenter {
                selector: ".hero-image img",
                factor: 0.05,
            }),
            pointer: pointer_defaults(),
            form: classic_form(),
            anchors: AnchorConfig {
                selector: "a[href^=\"#\"]",
                offset: AnchorOffset::NavHeight("#nav"),
            },
            cards: None,
            loaded_class: Some("loaded"),
        }
    }

    /// Editorial page: carousels, counter, expandable cards, footer parallax
    pub fn editorial() -> Self {
        Self {
            variant: PageVariant::Editorial,
            nav: None,
            reveal: None,
            lazy_images: None,
            counter: Some(CounterConfig {
                selector: "[data-count]",
                target_attribute: "data-count",
                threshold: COUNTER_THRESHOLD,
                duration_ms: COUNTER_DURATION_MS,
            }),
            carousels: vec![
                CarouselConfig {
                    name: "hero",
                    container: ".c-hero__bg-carousel",
                    slide: ".c-hero__bg-slide",
                    interval_ms: HERO_CAROUSEL_INTERVAL_MS,
                    active_class: "active",
                },
                CarouselConfig {
                    name: "cta",
                    container: ".c-cta__bg-carousel",
                    slide: ".c-cta__bg-slide",
                    interval_ms: CTA_CAROUSEL_INTERVAL_MS,
                    active_class: "active",
                },
            ],
            parallax: Some(ParallaxMode::Footer {
                footer: ".c-footer",
                wordmark: ".c-footer__wordmark",
                scale: 80.0,
                max_offset: 60.0,
            }),
            pointer: pointer_defaults(),
            form: FormConfig {
                form_selector: "#waitlist-form",
                input_selector: ".c-cta__input",
                submit_delay_ms: FORM_SUBMIT_DELAY_MS,
                storage_key: WAITLIST_STORAGE_KEY,
                invalid: InvalidFeedback::Focus,
                busy: BusyIndicator::Button {
                    selector: ".c-button",
                    class: "is-loading",
                },
                success: SuccessDisplay::Unhide {
                    panel_selector: ".c-cta__success",
                },
            },
            anchors: AnchorConfig {
                selector: "a[href^=\"#\"]",
                offset: AnchorOffset::Fixed(ANCHOR_FIXED_OFFSET_PX),
            },
            cards: Some(CardsConfig {
                selector: "[data-card]",
                toggle: ".c-item-card__toggle",
                open_class: "is-open",
            }),
            loaded_class: None,
        }
    }

    /// Atelier page: custom cursor, tilt cards, magnetic buttons, layered parallax
    pub fn atelier() -> Self {
        Self {
            variant: PageVariant::Atelier,
            nav: Some(NavConfig {
                selector: "#nav",
                scroll_threshold: NAV_SCROLL_THRESHOLD,
                scrolled_class: "scrolled",
            }),
            reveal: Some(reveal_defaults()),
            lazy_images: None,
            counter: Some(CounterConfig {
                selector: "[data-count]",
                target_attribute: "data-count",
                threshold: COUNTER_THRESHOLD,
                duration_ms: COUNTER_DURATION_MS,
            }),
            carousels: Vec::new(),
            parallax: Some(ParallaxMode::Speed {
                attribute: "data-parallax-speed",
            }),
            pointer: PointerConfig {
                cursor_enabled: true,
                tilt_selector: Some("[data-tilt]"),
                magnetic_selector: Some("[data-magnetic]"),
                ..pointer_defaults()
            },
            form: classic_form(),
            anchors: AnchorConfig {
                selector: "a[href^=\"#\"]",
                offset: AnchorOffset::Fixed(ANCHOR_FIXED_OFFSET_PX),
            },
            cards: None,
            loaded_class: Some("loaded"),
        }
    }

    /// Apply overrides read from the `<body>` dataset.
    ///
    /// `lookup` receives camelCase dataset keys (`customCursor`, `submitDelay`,
    /// `navThreshold`). Missing or unparsable values leave the config unchanged.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(enabled) = lookup("customCursor").as_deref().and_then(parse_flag) {
            self.pointer.cursor_enabled = enabled;
        }
        if let Some(delay) = lookup("submitDelay").and_then(|v| v.trim().parse::<u32>().ok()) {
            self.form.submit_delay_ms = delay;
        }
        if let Some(threshold) = lookup("navThreshold").and_then(|v| parse_non_negative(&v)) {
            if let Some(nav) = self.nav.as_mut() {
                nav.scroll_threshold = threshold;
            }
        }
        self
    }
}

/// Parse a boolean-ish flag (`true/false`, `1/0`, `yes/no`, `on/off`)
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_non_negative(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

/// Site configuration loaded from environment variables.
///
/// Load with `SiteConfig::from_env()` after calling `dotenvy::dotenv()`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteConfig {
    /// `MUSE_CUSTOM_CURSOR`: force the custom cursor on or off
    pub custom_cursor: Option<bool>,
    /// `MUSE_SUBMIT_DELAY_MS`: simulated waitlist round trip
    pub submit_delay_ms: Option<u32>,
    /// `MUSE_NAV_THRESHOLD`: nav scroll threshold in px
    pub nav_threshold: Option<f64>,
    /// Variables that were set but could not be parsed
    pub rejected: Vec<&'static str>,
}

impl SiteConfig {
    /// Load configuration from environment variables.
    #[cfg(feature = "ssr")]
    pub fn from_env() -> Self {
        let config = Self::from_lookup(|key| std::env::var(key).ok());
        for key in &config.rejected {
            tracing::warn!("Ignoring invalid value for {}", key);
        }
        config
    }

    /// Build the configuration from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup("MUSE_CUSTOM_CURSOR") {
            match parse_flag(&raw) {
                Some(value) => config.custom_cursor = Some(value),
                None => config.rejected.push("MUSE_CUSTOM_CURSOR"),
            }
        }
        if let Some(raw) = lookup("MUSE_SUBMIT_DELAY_MS") {
            match raw.trim().parse::<u32>() {
                Ok(value) => config.submit_delay_ms = Some(value),
                Err(_) => config.rejected.push("MUSE_SUBMIT_DELAY_MS"),
            }
        }
        if let Some(raw) = lookup("MUSE_NAV_THRESHOLD") {
            match parse_non_negative(&raw) {
                Some(value) => config.nav_threshold = Some(value),
                None => config.rejected.push("MUSE_NAV_THRESHOLD"),
            }
        }

        config
    }

    /// Check if any override will be sent to the client
    pub fn has_overrides(&self) -> bool {
        self.custom_cursor.is_some() || self.submit_delay_ms.is_some() || self.nav_threshold.is_some()
    }

    /// Values for the `data-*` attributes rendered on `<body>`
    pub fn body_attributes(&self) -> BodyAttributes {
        BodyAttributes {
            custom_cursor: self.custom_cursor.map(|v| v.to_string()),
            submit_delay: self.submit_delay_ms.map(|v| v.to_string()),
            nav_threshold: self.nav_threshold.map(|v| v.to_string()),
        }
    }
}

/// Rendered form of [`SiteConfig`], one optional value per body attribute
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BodyAttributes {
    pub custom_cursor: Option<String>,
    pub submit_delay: Option<String>,
    pub nav_threshold: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    // ========================================================================
    // Variants
    // ========================================================================

    #[test]
    fn test_variant_paths_round_trip() {
        for variant in PageVariant::ALL {
            assert_eq!(PageVariant::from_path(variant.path()), Some(variant));
            assert_eq!(variant.config().variant, variant);
        }
        assert_eq!(PageVariant::from_path("/v2/"), Some(PageVariant::Editorial));
        assert_eq!(PageVariant::from_path("/nope"), None);
    }

    #[test]
    fn test_variant_display() {
        assert_eq!(PageVariant::Classic.to_string(), "classic");
        assert_eq!(PageVariant::Atelier.to_string(), "atelier");
    }

    #[test]
    fn test_classic_defaults() {
        let config = PageConfig::classic();
        let nav = config.nav.expect("classic page has a nav");
        assert_eq!(nav.scroll_threshold, 50.0);
        let reveal = config.reveal.expect("classic page reveals");
        assert_eq!(reveal.threshold, 0.15);
        assert_eq!(reveal.root_margin, "0px 0px -50px 0px");
        assert!(!config.pointer.cursor_enabled);
        assert_eq!(config.form.submit_delay_ms, 1500);
        assert_eq!(config.form.storage_key, "muse_waitlist");
    }

    #[test]
    fn test_editorial_carousel_intervals() {
        let config = PageConfig::editorial();
        let intervals: Vec<u32> = config.carousels.iter().map(|c| c.interval_ms).collect();
        assert_eq!(intervals, vec![5000, 6000]);
        assert_eq!(config.counter.map(|c| c.threshold), Some(0.5));
        assert_eq!(config.form.invalid, InvalidFeedback::Focus);
    }

    #[test]
    fn test_atelier_enables_pointer_effects() {
        let config = PageConfig::atelier();
        assert!(config.pointer.cursor_enabled);
        assert!(config.pointer.tilt_selector.is_some());
        assert!(config.pointer.magnetic_selector.is_some());
        assert_eq!(config.pointer.desktop_breakpoint, 1024.0);
    }

    // ========================================================================
    // Overrides
    // ========================================================================

    #[test]
    fn test_overrides_applied() {
        let config = PageConfig::classic().with_overrides(lookup_from(&[
            ("customCursor", "true"),
            ("submitDelay", "250"),
            ("navThreshold", "80"),
        ]));
        assert!(config.pointer.cursor_enabled);
        assert_eq!(config.form.submit_delay_ms, 250);
        assert_eq!(config.nav.map(|n| n.scroll_threshold), Some(80.0));
    }

    #[test]
    fn test_invalid_overrides_ignored() {
        let config = PageConfig::atelier().with_overrides(lookup_from(&[
            ("customCursor", "maybe"),
            ("submitDelay", "-3"),
            ("navThreshold", "NaN"),
        ]));
        assert_eq!(config, PageConfig::atelier());
    }

    #[test]
    fn test_nav_override_without_nav_is_noop() {
        let config = PageConfig::editorial().with_overrides(lookup_from(&[("navThreshold", "10")]));
        assert!(config.nav.is_none());
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" off "), Some(false));
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag(""), None);
    }

    // ========================================================================
    // Site config
    // ========================================================================

    #[test]
    fn test_site_config_empty() {
        let config = SiteConfig::from_lookup(|_| None);
        assert!(!config.has_overrides());
        assert_eq!(config.body_attributes(), BodyAttributes::default());
    }

    #[test]
    fn test_site_config_parses_values() {
        let config = SiteConfig::from_lookup(lookup_from(&[
            ("MUSE_CUSTOM_CURSOR", "yes"),
            ("MUSE_SUBMIT_DELAY_MS", "900"),
        ]));
        assert_eq!(config.custom_cursor, Some(true));
        assert_eq!(config.submit_delay_ms, Some(900));
        assert!(config.rejected.is_empty());

        let attrs = config.body_attributes();
        assert_eq!(attrs.custom_cursor.as_deref(), Some("true"));
        assert_eq!(attrs.submit_delay.as_deref(), Some("900"));
        assert_eq!(attrs.nav_threshold, None);
    }

    #[test]
    fn test_site_config_rejects_garbage() {
        let config = SiteConfig::from_lookup(lookup_from(&[
            ("MUSE_SUBMIT_DELAY_MS", "soon"),
            ("MUSE_NAV_THRESHOLD", "-1"),
        ]));
        assert_eq!(config.submit_delay_ms, None);
        assert_eq!(config.nav_threshold, None);
        assert_eq!(config.rejected, vec!["MUSE_SUBMIT_DELAY_MS", "MUSE_NAV_THRESHOLD"]);
    }

    #[test]
    fn test_body_attributes_feed_page_overrides() {
        let site = SiteConfig::from_lookup(lookup_from(&[("MUSE_CUSTOM_CURSOR", "on")]));
        let attrs = site.body_attributes();
        let config = PageConfig::classic().with_overrides(|key| match key {
            "customCursor" => attrs.custom_cursor.clone(),
            _ => None,
        });
        assert!(config.pointer.cursor_enabled);
    }
}
