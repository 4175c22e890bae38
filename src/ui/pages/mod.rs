//! Page components
//!
//! - Classic waitlist page (`/`)
//! - Editorial page (`/v2`)
//! - Atelier page (`/atelier`)
//! - Not found page
//!
//! Pages only render markup. The behaviors attach to it after hydration
//! through [`use_page_behaviors`].

mod atelier;
mod classic;
mod editorial;
mod not_found;

pub use atelier::AtelierPage;
pub use classic::ClassicPage;
pub use editorial::EditorialPage;
pub use not_found::NotFoundPage;

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::core::config::PageVariant;

/// Install the variant's behaviors once the page is in the DOM and drop
/// them when the page unmounts.
pub fn use_page_behaviors(variant: PageVariant) {
    #[cfg(feature = "hydrate")]
    {
        use crate::ui::behaviors::{mount, next_page_id, teardown};

        let id = next_page_id();
        Effect::new(move |_| mount(id, variant));
        on_cleanup(move || teardown(id));
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = variant;
}

#[component]
fn PageMeta(title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <Title text=title />
        <Meta name="description" content=description />
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content=title />
        <Meta property="og:description" content=description />
    }
}

/// Email signup used by the classic and atelier pages
#[component]
fn WaitlistSignup() -> impl IntoView {
    view! {
        <section id="waitlist" class="section reveal">
            <h2>"Join the waitlist"</h2>
            <p>"Be the first to know when the collection opens. No spam, one email."</p>
            <form id="waitlist-form" class="waitlist-form" novalidate=true>
                <input type="email" name="email" placeholder="your@email.com" aria-label="Email address" />
                <button type="submit" data-magnetic="">"Notify me"</button>
            </form>
            <div id="waitlist-success" class="waitlist-success" role="status">
                <h3>"You're on the list."</h3>
                <p>"We'll write as soon as the doors open."</p>
            </div>
        </section>
    }
}

/// Links between the three variants
#[component]
fn VariantLinks() -> impl IntoView {
    view! {
        <nav class="variant-links" aria-label="Page variants">
            {PageVariant::ALL
                .into_iter()
                .map(|variant| view! { <a href={variant.path()}>{variant.to_string()}</a> })
                .collect_view()}
        </nav>
    }
}
