//! Presentational cards used across the landing sections

use leptos::html;
use leptos::prelude::*;

use crate::ui::reveal::use_reveal_on_scroll;

/// Headline number with caption, fades in the first time it is scrolled to
#[component]
pub fn StatCard(
    number: &'static str,
    label: &'static str,
    /// Stagger before fading in once seen
    #[prop(default = 0)]
    delay_ms: u32,
) -> impl IntoView {
    let card_ref = NodeRef::<html::Div>::new();
    let is_visible = use_reveal_on_scroll(card_ref, delay_ms);

    view! {
        <div
            node_ref=card_ref
            class="bg-white p-8 rounded-3xl text-center shadow-xl hover:shadow-2xl transition-all duration-500 transform
                   hover:-translate-y-3 relative overflow-hidden group flex flex-col items-center justify-center"
            class:translate-y-0=move || is_visible.get()
            class:opacity-100=move || is_visible.get()
            class:translate-y-8=move || !is_visible.get()
            class:opacity-0=move || !is_visible.get()
            data-visible=move || is_visible.get().to_string()
        >
            // Shine sweep on hover
            <div
                class="absolute inset-0 bg-gradient-to-r from-transparent via-white/20 to-transparent -translate-x-full
                       group-hover:translate-x-full transition-transform duration-700"
                aria-hidden="true"
            ></div>
            <div class="text-5xl font-bold text-red-500 mb-4 text-center break-words">{number}</div>
            <div class="text-lg text-gray-600 text-center">{label}</div>
        </div>
    }
}

/// Feature card component
#[component]
pub fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-white/10 backdrop-blur-lg p-10 rounded-3xl border border-white/20 hover:bg-white/15
                    transition-all duration-300 transform hover:-translate-y-2">
            <div class="text-5xl mb-6 opacity-80" aria-hidden="true">{icon}</div>
            <h3 class="text-2xl font-semibold mb-4">{title}</h3>
            <p class="opacity-90">{description}</p>
        </div>
    }
}

/// Numbered step with title and explanation
#[component]
pub fn StepIndicator(number: u8, title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="text-center">
            <div class="inline-block w-16 h-16 bg-gradient-to-br from-indigo-500 to-purple-600 text-white rounded-full
                        leading-[4rem] text-2xl font-bold mb-6">
                {number}
            </div>
            <h3 class="text-xl font-semibold mb-4 text-slate-800">{title}</h3>
            <p class="text-gray-600">{description}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_card_renders_hidden_on_server() {
        let html = Owner::new().with(|| {
            view! { <StatCard number="Zero" label="Consumer Protection" delay_ms=600 /> }.to_html()
        });

        assert!(html.contains("Zero"));
        assert!(html.contains("Consumer Protection"));
        assert!(html.contains("opacity-0"));
        assert!(html.contains("data-visible=\"false\""));
    }

    #[test]
    fn test_feature_card_renders_content() {
        let html = Owner::new().with(|| {
            view! {
                <FeatureCard icon="🔗" title="Blockchain Traceability" description="Tracked from source to shelf" />
            }
            .to_html()
        });

        assert!(html.contains("🔗"));
        assert!(html.contains("Blockchain Traceability"));
        assert!(html.contains("Tracked from source to shelf"));
    }

    #[test]
    fn test_step_indicator_renders_ordinal() {
        let html = Owner::new().with(|| {
            view! {
                <StepIndicator number=3 title="Consumer Verification" description="Scan to verify" />
            }
            .to_html()
        });

        assert!(html.contains(">3"));
        assert!(html.contains("Consumer Verification"));
    }
}
