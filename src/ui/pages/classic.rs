//! Classic waitlist page
//!
//! Fixed nav that condenses on scroll, hero image parallax, staggered reveals,
//! lazily loaded collection images and the waitlist form.

use leptos::prelude::*;

use super::{PageMeta, VariantLinks, WaitlistSignup, use_page_behaviors};
use crate::core::config::PageVariant;

const COLLECTION: [(&str, &str, &str); 3] = [
    ("Linen Shirt", "Washed Belgian linen", "/images/linen-shirt.jpg"),
    ("Wool Coat", "Double-faced merino", "/images/wool-coat.jpg"),
    ("Canvas Tote", "Waxed cotton canvas", "/images/canvas-tote.jpg"),
];

#[component]
pub fn ClassicPage() -> impl IntoView {
    use_page_behaviors(PageVariant::Classic);

    view! {
        <PageMeta
            title="MUSE - Join the waitlist"
            description="Considered clothing, made slowly. Join the MUSE waitlist."
        />

        <nav id="nav" class="nav">
            <a href="/" class="nav__logo">"MUSE"</a>
            <ul class="nav__links">
                <li><a href="#collection">"Collection"</a></li>
                <li><a href="#story">"Story"</a></li>
                <li><a href="#waitlist">"Waitlist"</a></li>
            </ul>
        </nav>

        <header class="hero">
            <div class="hero-copy">
                <h1>"Made slowly. Worn for years."</h1>
                <p>"A small collection of garments cut from natural fibres, released in limited runs."</p>
                <a href="#waitlist" class="hero-cta">"Join the waitlist"</a>
            </div>
            <div class="hero-image">
                <img src="/images/hero.jpg" alt="Folded linen shirts on a wooden table" />
            </div>
        </header>

        <section id="collection" class="section">
            <h2 class="reveal">"The first collection"</h2>
            <div class="product-grid">
                {COLLECTION
                    .into_iter()
                    .enumerate()
                    .map(|(i, (name, material, image))| {
                        view! {
                            <article class="product-card reveal" data-delay={(i * 100).to_string()}>
                                <img data-src=image alt=name />
                                <h3>{name}</h3>
                                <p>{material}</p>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <section id="story" class="section">
            <h2 class="reveal">"Our story"</h2>
            <p class="reveal" data-delay="100">
                "We work with three family mills and one workshop. Every piece is finished by hand."
            </p>
            <img data-src="/images/workshop.jpg" alt="The workshop" class="reveal" data-delay="200" />
        </section>

        <WaitlistSignup />

        <footer class="section">
            <p>"MUSE Studio"</p>
            <VariantLinks />
        </footer>
    }
}
