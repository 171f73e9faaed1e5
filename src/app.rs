use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::core::content::{self, DEFAULT_SITE_URL};
use crate::ui::{LandingPage, NotFoundPage};

/// Public base URL, provided by the server for the document head
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteUrl(pub String);

impl Default for SiteUrl {
    fn default() -> Self {
        Self(DEFAULT_SITE_URL.to_string())
    }
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <SiteHeadTags/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Head tags that depend on the configured public URL.
///
/// Only rendered by the server inside [`shell`], so the browser never
/// re-renders them with a default URL.
#[component]
fn SiteHeadTags() -> impl IntoView {
    let SiteUrl(url) = use_context::<SiteUrl>().unwrap_or_default();

    let og_url = leptos::html::meta()
        .attr("property", "og:url")
        .content(url.clone());

    view! {
        <link rel="icon" type="image/svg+xml" href="/favicon.svg"/>
        <link rel="canonical" href=url.clone()/>
        {og_url}
        <script type="application/ld+json" inner_html=content::structured_data(&url)></script>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/safeoil.css"/>

        <Router>
            <main>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=path!("/") view=LandingPage/>
                </Routes>
            </main>
        </Router>
    }
}
