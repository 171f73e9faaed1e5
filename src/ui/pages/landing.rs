//! Landing page component
//!
//! The SafeOil marketing page:
//! - SEO meta tags for search engine optimization
//! - Hero section with a call-to-action scrolling to the sign-up form
//! - Crisis section with scroll-revealed statistics
//! - Solution section with feature cards
//! - How It Works section with numbered steps
//! - Scanner demo with a mock verification result
//! - Early-access sign-up and footer

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::core::content::{
    self, BRAND, CRISIS_SUMMARY, DEMO_SCAN, FEATURES, HERO_CTA, PAGE_TITLE, PILOT_NOTE, STATS,
    STEPS, TAGLINE, sections,
};
use crate::ui::cards::{FeatureCard, StatCard, StepIndicator};
use crate::ui::icon::{Icon, icons};
use crate::ui::scroll::scroll_to_section;
use crate::ui::signup::SignupSection;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <SeoMeta />

        <div class="min-h-screen bg-white overflow-x-hidden">
            <HeroSection />
            <CrisisSection />
            <SolutionSection />
            <HowItWorksSection />
            <ScannerDemoSection />
            <SignupSection />
            <Footer />

            <LandingStyles />
        </div>
    }
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text=PAGE_TITLE />

        <Meta name="description" content=TAGLINE />
        <Meta name="keywords" content="cooking oil, food safety, adulterated oil, blockchain traceability, QR verification, Vietnam" />

        // Open Graph / Facebook
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content=PAGE_TITLE />
        <Meta property="og:description" content=TAGLINE />

        // Twitter
        <Meta name="twitter:card" content="summary" />
        <Meta name="twitter:title" content=PAGE_TITLE />
        <Meta name="twitter:description" content=TAGLINE />
    }
}

#[component]
fn HeroSection() -> impl IntoView {
    view! {
        <section class="relative bg-gradient-to-br from-indigo-600 via-purple-700 to-indigo-800 text-white py-20 overflow-hidden">
            // Background blobs
            <div class="absolute inset-0 opacity-30" aria-hidden="true">
                <div class="absolute top-0 -left-4 w-72 h-72 bg-purple-300 rounded-full mix-blend-multiply filter blur-xl animate-pulse"></div>
                <div class="absolute top-0 -right-4 w-72 h-72 bg-yellow-300 rounded-full mix-blend-multiply filter blur-xl animate-pulse animation-delay-2000"></div>
                <div class="absolute -bottom-8 left-20 w-72 h-72 bg-pink-300 rounded-full mix-blend-multiply filter blur-xl animate-pulse animation-delay-4000"></div>
            </div>

            <div class="relative max-w-6xl mx-auto px-6 text-center">
                <h1 class="text-6xl md:text-7xl font-bold mb-6 animate-fade-in-down">{BRAND}</h1>
                <p class="text-xl md:text-2xl mb-8 opacity-90 animate-fade-in-up">{TAGLINE}</p>
                // Plain anchors still jump without scripting
                <a
                    href=sections::SIGNUP.href()
                    class="inline-block bg-red-500 hover:bg-red-600 px-8 py-4 rounded-full font-semibold text-lg transition-all
                           duration-300 transform hover:-translate-y-1 hover:shadow-2xl animate-pulse"
                    on:click=move |ev| {
                        ev.prevent_default();
                        scroll_to_section(sections::SIGNUP);
                    }
                >
                    {HERO_CTA}
                </a>

                <div class="mt-12">
                    <a
                        href=sections::CRISIS.href()
                        class="inline-block text-white/70 hover:text-white transition-colors animate-bounce"
                        on:click=move |ev| {
                            ev.prevent_default();
                            scroll_to_section(sections::CRISIS);
                        }
                        aria-label="Scroll to the problem"
                    >
                        <Icon name=icons::CHEVRON_DOWN class="w-8 h-8" />
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn CrisisSection() -> impl IntoView {
    view! {
        <section id=sections::CRISIS.as_str() class="py-20 bg-gradient-to-b from-gray-50 to-white">
            <div class="max-w-7xl mx-auto px-6">
                <h2 class="text-5xl font-bold text-center mb-12 text-slate-800">
                    "The Crisis We're Solving"
                </h2>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-[1fr_2fr_1fr_1fr] gap-8 mb-12">
                    {STATS
                        .iter()
                        .map(|stat| view! {
                            <StatCard number=stat.number label=stat.label delay_ms=stat.delay_ms />
                        })
                        .collect_view()}
                </div>

                <div class="max-w-4xl mx-auto text-center">
                    <p class="text-xl text-gray-600 leading-relaxed">{CRISIS_SUMMARY}</p>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SolutionSection() -> impl IntoView {
    view! {
        <section id=sections::SOLUTION.as_str() class="py-20 bg-slate-800 text-white">
            <div class="max-w-6xl mx-auto px-6">
                <h2 class="text-5xl font-bold text-center mb-16">"Our Smart Solution"</h2>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8">
                    {FEATURES
                        .iter()
                        .map(|feature| view! {
                            <FeatureCard
                                icon=feature.icon
                                title=feature.title
                                description=feature.description
                            />
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn HowItWorksSection() -> impl IntoView {
    view! {
        <section id=sections::HOW_IT_WORKS.as_str() class="py-20 bg-white">
            <div class="max-w-6xl mx-auto px-6">
                <h2 class="text-5xl font-bold text-center mb-16 text-slate-800">"How It Works"</h2>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-12">
                    {STEPS
                        .iter()
                        .map(|step| view! {
                            <StepIndicator
                                number=step.number
                                title=step.title
                                description=step.description
                            />
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Mock phone showing what a successful scan looks like
#[component]
fn ScannerDemoSection() -> impl IntoView {
    view! {
        <section id=sections::DEMO.as_str() class="py-20 bg-gradient-to-br from-indigo-600 to-purple-700 text-white text-center">
            <div class="max-w-4xl mx-auto px-6">
                <h2 class="text-5xl font-bold mb-6">"Experience SafeOil"</h2>
                <p class="text-xl mb-12 opacity-90">"See how our app protects you and your family"</p>

                <div class="max-w-sm mx-auto bg-gray-900 rounded-3xl p-6 shadow-2xl">
                    <div class="bg-white rounded-2xl p-8 text-gray-800 min-h-[500px] flex flex-col items-center justify-center">
                        <h3 class="text-2xl font-bold mb-6 text-slate-800">"SafeOil Scanner"</h3>

                        <div class="w-32 h-32 bg-gray-800 rounded-xl mb-6 flex flex-col items-center justify-center gap-2 text-white text-sm">
                            <Icon name=icons::QR_CODE class="w-10 h-10" />
                            "QR Scanner View"
                        </div>

                        <div class="w-full space-y-4">
                            <div class="bg-green-500 text-white p-3 rounded-xl font-semibold">
                                {DEMO_SCAN.status}
                            </div>
                            <div class="text-left space-y-1 text-sm text-gray-600">
                                {DEMO_SCAN
                                    .details()
                                    .into_iter()
                                    .map(|(label, value)| view! {
                                        <div><strong>{label}</strong>" "{value}</div>
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </div>

                <p class="mt-8 text-lg opacity-90 max-w-2xl mx-auto">{PILOT_NOTE}</p>
            </div>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-slate-800 text-white py-12 text-center">
            <div class="max-w-4xl mx-auto px-6">
                <div class="flex items-center justify-center gap-2 mb-4 opacity-90">
                    <Icon name=icons::SHIELD_CHECK class="w-6 h-6" />
                    <span class="font-semibold">{BRAND}</span>
                </div>
                <p class="text-lg mb-3">{content::COPYRIGHT}</p>
                <p class="opacity-80">
                    "Contact: "
                    <a href=format!("mailto:{}", content::CONTACT_EMAIL) class="hover:underline">
                        {content::CONTACT_EMAIL}
                    </a>
                    " | "
                    <a href=format!("tel:{}", content::CONTACT_PHONE.replace(' ', "")) class="hover:underline">
                        {content::CONTACT_PHONE}
                    </a>
                </p>
            </div>
        </footer>
    }
}

/// Keyframes the utility classes above rely on
#[component]
fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            html {
                scroll-behavior: smooth;
            }

            @keyframes safeoil-fade-in-down {
                from { opacity: 0; transform: translateY(-20px); }
                to { opacity: 1; transform: translateY(0); }
            }

            @keyframes safeoil-fade-in-up {
                from { opacity: 0; transform: translateY(20px); }
                to { opacity: 1; transform: translateY(0); }
            }

            .animate-fade-in-down {
                animation: safeoil-fade-in-down 0.8s ease-out both;
            }

            .animate-fade-in-up {
                animation: safeoil-fade-in-up 0.8s ease-out 0.2s both;
            }

            .animation-delay-2000 {
                animation-delay: 2s;
            }

            .animation-delay-4000 {
                animation-delay: 4s;
            }

            @media (prefers-reduced-motion: reduce) {
                .animate-fade-in-down,
                .animate-fade-in-up,
                .animate-pulse,
                .animate-bounce {
                    animation: none;
                }
            }
            "#
        </style>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_page() -> String {
        Owner::new().with(|| {
            leptos_meta::provide_meta_context();
            view! { <LandingPage /> }.to_html()
        })
    }

    fn position(html: &str, needle: &str) -> usize {
        html.find(needle)
            .unwrap_or_else(|| panic!("missing {needle:?} in rendered page"))
    }

    #[test]
    fn test_sections_render_in_page_order() {
        let html = render_page();

        let order = [
            position(&html, TAGLINE),
            position(&html, "id=\"crisis\""),
            position(&html, "id=\"solution\""),
            position(&html, "id=\"how-it-works\""),
            position(&html, "id=\"demo\""),
            position(&html, "id=\"signup\""),
            position(&html, "<footer"),
        ];

        assert!(order.windows(2).all(|w| w[0] < w[1]), "{order:?}");
    }

    #[test]
    fn test_hero_cta_targets_signup() {
        let html = render_page();

        let cta = position(&html, HERO_CTA);
        let link = html[..cta]
            .rfind("<a ")
            .expect("call to action is not a link");
        assert!(html[link..cta].contains("href=\"#signup\""));
        assert!(html.contains("href=\"#crisis\""));
    }

    #[test]
    fn test_every_card_is_rendered() {
        let html = render_page();

        for stat in STATS {
            assert!(html.contains(stat.label));
        }
        for feature in FEATURES {
            assert!(html.contains(feature.title));
        }
        for step in STEPS {
            assert!(html.contains(step.title));
        }
        assert!(html.contains(DEMO_SCAN.status));
    }
}
