//! Editorial page (`/v2`)

use leptos::prelude::*;

use super::{PageMeta, VariantLinks, use_page_behaviors};
use crate::core::config::PageVariant;

const HERO_SLIDES: [&str; 3] = [
    "/images/editorial-1.jpg",
    "/images/editorial-2.jpg",
    "/images/editorial-3.jpg",
];

const CTA_SLIDES: [&str; 2] = ["/images/atelier-1.jpg", "/images/atelier-2.jpg"];

const PIECES: [(&str, &str); 3] = [
    (
        "The Overshirt",
        "Heavy cotton twill, garment dyed twice for depth. Horn buttons, single chest pocket.",
    ),
    (
        "The Trouser",
        "High rise, wide leg, pressed crease. Cut from a wool and linen blend that softens with wear.",
    ),
    (
        "The Knit",
        "Undyed alpaca from a single cooperative in Arequipa, hand finished at the collar.",
    ),
];

fn slide_style(image: &str) -> String {
    format!("background-image: url('{image}')")
}

#[component]
pub fn EditorialPage() -> impl IntoView {
    use_page_behaviors(PageVariant::Editorial);

    view! {
        <PageMeta
            title="MUSE - Editorial"
            description="Season one, in pictures. Three pieces, made slowly."
        />

        <nav class="c-nav nav">
            <a href="/v2" class="c-nav__logo">"MUSE"</a>
            <ul class="nav__links">
                <li><a href="#pieces">"Pieces"</a></li>
                <li><a href="#join">"Join"</a></li>
            </ul>
        </nav>

        <header class="c-hero">
            <div class="c-hero__bg-carousel" aria-hidden="true">
                {HERO_SLIDES
                    .into_iter()
                    .enumerate()
                    .map(|(i, image)| {
                        view! {
                            <div
                                class={if i == 0 { "c-hero__bg-slide active" } else { "c-hero__bg-slide" }}
                                style={slide_style(image)}
                            ></div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="c-hero__content">
                <h1>"Season One"</h1>
                <p>"Three pieces. Two mills. One workshop."</p>
            </div>
        </header>

        <section class="section c-stats">
            <div class="c-stat">
                <span class="c-stat__value" data-count="12500">"0"</span>
                <span class="c-stat__label">"people waiting"</span>
            </div>
            <div class="c-stat">
                <span class="c-stat__value" data-count="340">"0"</span>
                <span class="c-stat__label">"hours per piece"</span>
            </div>
        </section>

        <section id="pieces" class="section">
            {PIECES
                .into_iter()
                .map(|(title, body)| {
                    view! {
                        <article class="c-item-card" data-card="">
                            <header class="c-item-card__header">
                                <h3>{title}</h3>
                                <button class="c-item-card__toggle" aria-expanded="false" aria-label="Show details">
                                    "+"
                                </button>
                            </header>
                            <div class="c-item-card__body">
                                <p>{body}</p>
                            </div>
                        </article>
                    }
                })
                .collect_view()}
        </section>

        <section id="join" class="c-cta">
            <div class="c-cta__bg-carousel" aria-hidden="true">
                {CTA_SLIDES
                    .into_iter()
                    .enumerate()
                    .map(|(i, image)| {
                        view! {
                            <div
                                class={if i == 0 { "c-cta__bg-slide active" } else { "c-cta__bg-slide" }}
                                style={slide_style(image)}
                            ></div>
                        }
                    })
                    .collect_view()}
            </div>
            <h2>"Be first in line"</h2>
            <form id="waitlist-form" class="c-cta__form" novalidate=true>
                <input type="email" class="c-cta__input" placeholder="your@email.com" aria-label="Email address" />
                <button type="submit" class="c-button">"Join"</button>
            </form>
            <div class="c-cta__success" role="status" hidden=true>
                <p>"Thank you. You're on the list."</p>
            </div>
        </section>

        <footer class="c-footer">
            <VariantLinks />
            <span class="c-footer__wordmark" aria-hidden="true">"MUSE"</span>
        </footer>
    }
}
