//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::core::content::BRAND;
use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    // Let the server answer with a real 404 status
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text=format!("Page Not Found - {}", BRAND) />

        <div class="min-h-screen bg-gradient-to-br from-indigo-600 via-purple-700 to-indigo-800 text-white
                    flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <div class="w-24 h-24 mx-auto mb-6 bg-white/10 rounded-full flex items-center justify-center">
                    <Icon name=icons::ALERT_CIRCLE class="w-12 h-12 text-white/80" />
                </div>

                <h1 class="text-6xl font-bold mb-4">"404"</h1>

                <h2 class="text-2xl font-semibold mb-2">"Page Not Found"</h2>

                <p class="opacity-90 mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <a
                    href="/"
                    class="inline-block bg-red-500 hover:bg-red-600 px-8 py-4 rounded-full font-semibold transition-colors"
                >
                    "Back to SafeOil"
                </a>
            </div>

            <div class="absolute bottom-8 text-center">
                <p class="text-sm opacity-70">"© 2025 SafeOil"</p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links_back_to_landing() {
        let html = Owner::new().with(|| {
            leptos_meta::provide_meta_context();
            view! { <NotFoundPage /> }.to_html()
        });

        assert!(html.contains(">404<"));
        assert!(html.contains("href=\"/\""));
        assert!(html.contains("Back to SafeOil"));
    }
}
