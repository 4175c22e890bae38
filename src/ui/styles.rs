//! Inline stylesheet shared by every page variant
//!
//! Class names here are the ones the behavior components toggle.

use leptos::prelude::*;

#[component]
pub fn PageStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            :root {
                --muse-ink: #141414;
                --muse-paper: #f6f3ee;
                --muse-accent: #b4553a;
                --muse-muted: #77716a;
            }
            * { box-sizing: border-box; }
            body {
                margin: 0;
                font-family: "Helvetica Neue", Arial, sans-serif;
                color: var(--muse-ink);
                background: var(--muse-paper);
            }
            body.has-custom-cursor, body.has-custom-cursor a, body.has-custom-cursor button { cursor: none; }
            img { max-width: 100%; display: block; }
            a { color: inherit; }

            /* Navigation */
            .nav {
                position: fixed;
                inset: 0 0 auto 0;
                display: flex;
                justify-content: space-between;
                align-items: center;
                padding: 1.5rem 3rem;
                z-index: 50;
                transition: background-color 0.3s, padding 0.3s, box-shadow 0.3s;
            }
            .nav.scrolled {
                padding: 1rem 3rem;
                background: rgba(246, 243, 238, 0.92);
                box-shadow: 0 1px 0 rgba(0, 0, 0, 0.08);
            }
            .nav__links { display: flex; gap: 2rem; list-style: none; margin: 0; padding: 0; }

            /* Reveal on scroll */
            .reveal {
                opacity: 0;
                transform: translateY(40px);
                transition: opacity 0.8s ease, transform 0.8s ease;
            }
            .reveal.active { opacity: 1; transform: translateY(0); }

            /* Sections */
            .section { padding: 8rem 3rem; max-width: 1200px; margin: 0 auto; }
            .hero { min-height: 100vh; display: grid; grid-template-columns: 1fr 1fr; align-items: center; gap: 4rem; padding: 8rem 3rem 4rem; }
            .hero > * { opacity: 0; transition: opacity 0.8s ease; }
            body.loaded .hero > * { opacity: 1; }
            .hero-image { overflow: hidden; border-radius: 4px; }
            .hero-image img { will-change: transform; }
            .product-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 2rem; }
            .product-card { background: white; padding: 1.5rem; border-radius: 4px; transition: transform 0.3s ease; }
            .stat { font-size: 3rem; font-weight: 300; }

            /* Waitlist */
            .waitlist-form { display: flex; gap: 0.75rem; max-width: 480px; }
            .waitlist-form input {
                flex: 1;
                padding: 1rem 1.25rem;
                border: 1px solid var(--muse-ink);
                background: transparent;
                font-size: 1rem;
            }
            .waitlist-form button, .c-button {
                padding: 1rem 2rem;
                border: none;
                background: var(--muse-ink);
                color: var(--muse-paper);
                font-size: 1rem;
                cursor: pointer;
                transition: opacity 0.2s;
            }
            .waitlist-form.loading button, .c-button.is-loading { opacity: 0.5; pointer-events: none; }
            .waitlist-form.submitted { display: none; }
            .waitlist-success { display: none; }
            .waitlist-success.active { display: block; }
            @keyframes shake {
                0%, 100% { transform: translateX(0); }
                20%, 60% { transform: translateX(-8px); }
                40%, 80% { transform: translateX(8px); }
            }

            /* Custom cursor */
            .custom-cursor {
                position: fixed;
                top: 0;
                left: 0;
                pointer-events: none;
                z-index: 1000;
            }
            .cursor-dot {
                width: 12px;
                height: 12px;
                margin: -6px 0 0 -6px;
                border-radius: 50%;
                background: var(--muse-accent);
                transition: transform 0.2s ease;
            }
            .custom-cursor.hovering .cursor-dot { transform: scale(3); opacity: 0.5; }

            /* Tilt and magnetic */
            [data-tilt] { transition: transform 0.15s ease-out; transform-style: preserve-3d; }
            [data-magnetic] { transition: transform 0.2s ease-out; }
            [data-parallax-speed] { will-change: transform; }
            .atelier-hero { position: relative; overflow: hidden; }
            .atelier-layers { position: absolute; inset: 0; z-index: -1; }
            .atelier-layer { position: absolute; border-radius: 50%; opacity: 0.35; }
            .atelier-layer--back { width: 60vw; height: 60vw; top: -20vw; right: -20vw; background: #d9cfc1; }
            .atelier-layer--mid { width: 30vw; height: 30vw; bottom: 5vh; left: 10vw; background: #c7a48e; }
            .atelier-layer--front { width: 12vw; height: 12vw; top: 30vh; left: 45vw; background: var(--muse-accent); }
            .variant-links { display: flex; gap: 1.5rem; text-transform: capitalize; }
            .not-found { min-height: 100vh; display: flex; flex-direction: column; justify-content: center; }

            /* Editorial */
            .c-hero { position: relative; min-height: 100vh; display: flex; align-items: flex-end; padding: 4rem 3rem; color: white; overflow: hidden; }
            .c-hero__bg-carousel, .c-cta__bg-carousel { position: absolute; inset: 0; z-index: -1; }
            .c-hero__bg-slide, .c-cta__bg-slide {
                position: absolute;
                inset: 0;
                background-size: cover;
                background-position: center;
                opacity: 0;
                transition: opacity 1.5s ease;
            }
            .c-hero__bg-slide.active, .c-cta__bg-slide.active { opacity: 1; }
            .c-stat__value { font-size: 4rem; font-weight: 300; }
            .c-item-card { border-top: 1px solid var(--muse-ink); padding: 1.5rem 0; cursor: pointer; }
            .c-item-card__body { max-height: 0; overflow: hidden; transition: max-height 0.4s ease; }
            .c-item-card.is-open .c-item-card__body { max-height: 20rem; }
            .c-item-card__toggle { background: none; border: none; font-size: 1.5rem; cursor: pointer; }
            .c-cta { position: relative; padding: 8rem 3rem; color: white; overflow: hidden; }
            .c-cta__input { padding: 1rem 1.25rem; min-width: 280px; border: 1px solid white; background: transparent; color: white; }
            .c-footer { position: relative; height: 60vh; overflow: hidden; background: var(--muse-ink); color: var(--muse-paper); }
            .c-footer__wordmark {
                position: absolute;
                top: 50%;
                left: 50%;
                transform: translate(-50%, -50%);
                font-size: 18vw;
                font-weight: 700;
                letter-spacing: -0.04em;
            }

            @media (prefers-reduced-motion: reduce) {
                .reveal { opacity: 1; transform: none; transition: none; }
                .hero > * { transition: none; }
            }
            @media (max-width: 1024px) {
                .hero { grid-template-columns: 1fr; }
                .nav__links { display: none; }
            }
            "#
        </style>
    }
}
