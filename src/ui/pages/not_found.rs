//! Not found page component

use leptos::prelude::*;
use leptos_meta::Title;

use crate::core::config::PageVariant;

/// 404 page with links back to every variant
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(axum::http::StatusCode::NOT_FOUND);
    }

    view! {
        <Title text="MUSE - Page not found" />

        <main class="section not-found">
            <h1>"404"</h1>
            <p>"The page you're looking for doesn't exist or has been moved."</p>
            <ul>
                {PageVariant::ALL
                    .into_iter()
                    .map(|variant| {
                        view! {
                            <li>
                                <a href={variant.path()}>"Go to the " {variant.to_string()} " page"</a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </main>
    }
}
