#[cfg(test)]
mod tests {
    use crate::core::carousel::Carousel;
    use crate::core::config::{InvalidFeedback, PageConfig, PageVariant, SuccessDisplay};
    use crate::core::counter::{CounterAnimation, format_grouped};
    use crate::core::environment::Environment;
    use crate::core::reveal::{Intersection, OnceTracker, RootMargin};
    use crate::core::waitlist::{
        FormMachine, FormState, MemoryStore, SubmitDecision, Waitlist, WaitlistError,
    };

    // ========================================================================
    // Waitlist scenarios
    // ========================================================================

    #[test]
    fn test_vip_signup_scenario() {
        let config = PageConfig::classic();
        let waitlist = Waitlist::new(MemoryStore::new());
        let mut machine = FormMachine::new();

        let email = match machine.submit("vip@muse.com") {
            SubmitDecision::Accepted(email) => email,
            other => panic!("expected acceptance, got {other:?}"),
        };
        assert_eq!(machine.state(), FormState::Submitting);

        // ... simulated delay elapses ...
        assert_eq!(config.form.submit_delay_ms, 1500);
        let completion = machine.complete(&waitlist, &email).unwrap();
        assert!(completion.persisted.unwrap());
        assert_eq!(machine.state(), FormState::Success);
        assert_eq!(waitlist.entries().unwrap(), vec!["vip@muse.com".to_string()]);

        // A fresh page load submitting the same address appends nothing
        let mut reloaded = FormMachine::new();
        let email = match reloaded.submit("vip@muse.com") {
            SubmitDecision::Accepted(email) => email,
            other => panic!("expected acceptance, got {other:?}"),
        };
        let completion = reloaded.complete(&waitlist, &email).unwrap();
        assert!(!completion.persisted.unwrap());
        assert_eq!(waitlist.entries().unwrap(), vec!["vip@muse.com".to_string()]);
    }

    #[test]
    fn test_invalid_signup_scenario() {
        let waitlist = Waitlist::new(MemoryStore::new());
        let mut machine = FormMachine::new();

        assert_eq!(machine.submit("not-an-email"), SubmitDecision::Rejected);
        assert_eq!(machine.state(), FormState::Idle);
        assert!(waitlist.store().raw().is_none());

        // Classic pages shake the input, editorial pages focus it
        assert!(matches!(
            PageConfig::classic().form.invalid,
            InvalidFeedback::Shake { duration_ms: 500 }
        ));
        assert_eq!(PageConfig::editorial().form.invalid, InvalidFeedback::Focus);

        // The form is still usable afterwards
        assert!(matches!(machine.submit("a@b.co"), SubmitDecision::Accepted(_)));
    }

    #[test]
    fn test_storage_failure_still_succeeds() {
        let waitlist = Waitlist::new(MemoryStore::failing());
        let mut machine = FormMachine::new();
        machine.submit("vip@muse.com");

        let completion = machine.complete(&waitlist, "vip@muse.com").unwrap();
        assert!(matches!(completion.persisted, Err(WaitlistError::Write(_))));
        assert_eq!(machine.state(), FormState::Success);
    }

    #[test]
    fn test_corrupted_storage_still_succeeds() {
        let waitlist = Waitlist::new(MemoryStore::with_raw("42"));
        let mut machine = FormMachine::new();
        machine.submit("vip@muse.com");

        let completion = machine.complete(&waitlist, "vip@muse.com").unwrap();
        assert!(matches!(completion.persisted, Err(WaitlistError::Corrupt(_))));
        assert_eq!(machine.state(), FormState::Success);
    }

    #[test]
    fn test_success_display_per_variant() {
        assert!(matches!(
            PageConfig::classic().form.success,
            SuccessDisplay::Classes { panel_selector: "#waitlist-success", .. }
        ));
        assert!(matches!(
            PageConfig::editorial().form.success,
            SuccessDisplay::Unhide { panel_selector: ".c-cta__success" }
        ));
    }

    // ========================================================================
    // Reveal / counter / carousel
    // ========================================================================

    #[test]
    fn test_reveal_fires_once_across_scrolls() {
        let reveal = PageConfig::classic().reveal.unwrap();
        RootMargin::parse(reveal.root_margin).unwrap();
        let mut tracker = OnceTracker::new(reveal.threshold, 0..4usize);

        let mut fired = 0;
        for _ in 0..5 {
            // Element 2 scrolls in and out repeatedly
            if tracker.report(&2, Intersection::visible(0.6)) {
                fired += 1;
            }
            tracker.report(&2, Intersection::hidden());
        }
        assert_eq!(fired, 1);
        assert!(tracker.is_watching(&0));
    }

    #[test]
    fn test_all_root_margins_parse() {
        for variant in PageVariant::ALL {
            let config = variant.config();
            if let Some(reveal) = config.reveal {
                assert!(RootMargin::parse(reveal.root_margin).is_ok());
            }
            if let Some(lazy) = config.lazy_images {
                assert!(RootMargin::parse(lazy.root_margin).is_ok());
            }
        }
    }

    #[test]
    fn test_counter_with_page_settings() {
        let settings = PageConfig::editorial().counter.unwrap();
        let counter = CounterAnimation::new(12_500, settings.duration_ms);

        let mut previous = 0;
        let mut elapsed = 0.0;
        while !counter.is_complete(elapsed) {
            let value = counter.value_at(elapsed);
            assert!(value >= previous);
            previous = value;
            elapsed += 16.7;
        }
        assert_eq!(counter.value_at(elapsed), 12_500);
        assert_eq!(format_grouped(counter.value_at(elapsed)), "12,500");
    }

    #[test]
    fn test_carousel_abc() {
        let slides = ["A", "B", "C"];
        let mut carousel = Carousel::new(slides.len()).unwrap();
        let mut seen = vec![slides[carousel.index()]];
        for _ in 0..3 {
            seen.push(slides[carousel.advance()]);
            assert_eq!(carousel.active_flags().filter(|a| *a).count(), 1);
        }
        assert_eq!(seen, vec!["A", "B", "C", "A"]);
    }

    #[test]
    fn test_reduced_motion_gates() {
        let env = Environment::new(true, 1440.0);
        let config = PageConfig::atelier();
        assert!(!env.allows_motion());
        assert!(!env.allows_pointer_effects(config.pointer.desktop_breakpoint));

        let tablet = Environment::new(false, 900.0);
        assert!(tablet.allows_motion());
        assert!(!tablet.allows_pointer_effects(config.pointer.desktop_breakpoint));
    }
}
