//! Atelier page: the interactive variant with a custom cursor, tilting product
//! cards, magnetic buttons and layered parallax.

use leptos::prelude::*;

use super::{PageMeta, VariantLinks, WaitlistSignup, use_page_behaviors};
use crate::core::config::PageVariant;

/// Hero layers and their parallax speed
const LAYERS: [(&str, &str); 3] = [
    ("atelier-layer atelier-layer--back", "0.1"),
    ("atelier-layer atelier-layer--mid", "0.25"),
    ("atelier-layer atelier-layer--front", "0.4"),
];

const PRODUCTS: [(&str, &str, &str); 4] = [
    ("No. 01", "Field Jacket", "/images/field-jacket.jpg"),
    ("No. 02", "Pleated Trouser", "/images/pleated-trouser.jpg"),
    ("No. 03", "Poplin Shirt", "/images/poplin-shirt.jpg"),
    ("No. 04", "Boiled Wool Vest", "/images/wool-vest.jpg"),
];

#[component]
pub fn AtelierPage() -> impl IntoView {
    use_page_behaviors(PageVariant::Atelier);

    view! {
        <PageMeta
            title="MUSE - Atelier"
            description="Inside the MUSE atelier. Four pieces, cut and finished by hand."
        />

        <nav id="nav" class="nav">
            <a href="/atelier" class="nav__logo">"MUSE / Atelier"</a>
            <ul class="nav__links">
                <li><a href="#pieces">"Pieces"</a></li>
                <li><a href="#numbers">"Numbers"</a></li>
                <li><a href="#waitlist" data-magnetic="">"Waitlist"</a></li>
            </ul>
        </nav>

        <header class="hero atelier-hero">
            <div class="atelier-layers" aria-hidden="true">
                {LAYERS
                    .into_iter()
                    .map(|(class, speed)| view! { <div class=class data-parallax-speed=speed></div> })
                    .collect_view()}
            </div>
            <div class="hero-copy">
                <h1>"The atelier"</h1>
                <p>"Where every pattern is drafted, cut and finished by the same four hands."</p>
                <a href="#pieces" class="hero-cta" data-magnetic="">"See the pieces"</a>
            </div>
        </header>

        <section id="pieces" class="section">
            <h2 class="reveal">"Pieces"</h2>
            <div class="product-grid">
                {PRODUCTS
                    .into_iter()
                    .enumerate()
                    .map(|(i, (number, name, image))| {
                        view! {
                            <article class="product-card reveal" data-tilt="" data-delay={(i * 120).to_string()}>
                                <img src=image alt=name />
                                <span class="product-card__number">{number}</span>
                                <h3>{name}</h3>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <section id="numbers" class="section">
            <div class="stat reveal">
                <span data-count="4">"0"</span>
                <p>"pairs of hands"</p>
            </div>
            <div class="stat reveal" data-delay="150">
                <span data-count="1200">"0"</span>
                <p>"stitches in a collar"</p>
            </div>
        </section>

        <WaitlistSignup />

        <footer class="section">
            <p>"MUSE Studio"</p>
            <VariantLinks />
        </footer>
    }
}
