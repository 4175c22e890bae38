use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::core::config::BodyAttributes;
use crate::ui::{AtelierPage, ClassicPage, EditorialPage, NotFoundPage, PageStyles};

/// Attributes for `<body>` carrying the server's overrides to the client
fn body_attributes() -> BodyAttributes {
    #[cfg(feature = "ssr")]
    {
        use_context::<crate::core::SiteConfig>()
            .map(|config| config.body_attributes())
            .unwrap_or_default()
    }

    #[cfg(not(feature = "ssr"))]
    {
        BodyAttributes::default()
    }
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    let BodyAttributes {
        custom_cursor,
        submit_delay,
        nav_threshold,
    } = body_attributes();

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body
                data-custom-cursor=custom_cursor
                data-submit-delay=submit_delay
                data-nav-threshold=nav_threshold
            >
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title text="MUSE"/>
        <PageStyles/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=path!("/") view=ClassicPage/>
                <Route path=path!("/v2") view=EditorialPage/>
                <Route path=path!("/atelier") view=AtelierPage/>
            </Routes>
        </Router>
    }
}
