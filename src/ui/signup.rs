//! Early-access sign-up section
//!
//! The form is handled entirely in the browser: a valid address shows a
//! temporary confirmation on the button, an invalid one opens a blocking alert.

use leptos::prelude::*;

use crate::core::content::{SIGNUP_NOTE, sections};
use crate::core::{SignupForm, SubmissionTicket, SubmitError};
use crate::ui::common::AlertDialog;

#[component]
pub fn SignupSection() -> impl IntoView {
    let form = RwSignal::new(SignupForm::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        match form.try_update(|f| f.submit()) {
            Some(Ok(ticket)) => {
                leptos::logging::log!("Early access request accepted ({})", ticket);
                schedule_confirmation_reset(form, ticket);
            }
            // Enter pressed again behind the open warning
            Some(Err(SubmitError::WarningOpen)) => {}
            Some(Err(e)) => {
                leptos::logging::warn!("Early access request rejected: {}", e);
            }
            None => {}
        }
    };

    let alert_open = Signal::derive(move || form.with(|f| f.rejection().is_some()));
    let alert_message = Signal::derive(move || {
        form.with(|f| f.rejection())
            .map(|e| e.user_message().to_string())
            .unwrap_or_default()
    });

    view! {
        <section id=sections::SIGNUP.as_str() class="py-20 bg-red-500 text-white text-center">
            <div class="max-w-4xl mx-auto px-6">
                <h2 class="text-5xl font-bold mb-6">"Ready to Make a Difference?"</h2>
                <p class="text-xl mb-8">"Join thousands of consumers taking control of their food safety"</p>

                // novalidate: the address check below decides, not the browser
                <form
                    class="max-w-lg mx-auto flex flex-col md:flex-row gap-4"
                    novalidate=true
                    on:submit=on_submit
                >
                    <input
                        type="email"
                        name="email"
                        class="flex-1 px-6 py-4 rounded-full text-gray-800 text-lg focus:outline-none focus:ring-4 focus:ring-white/50"
                        placeholder="Enter your email address"
                        aria-label="Email address"
                        prop:value=move || form.with(|f| f.email().to_string())
                        on:input=move |ev| form.update(|f| f.set_email(event_target_value(&ev)))
                    />
                    <button
                        type="submit"
                        class="bg-slate-800 hover:bg-slate-900 px-8 py-4 rounded-full font-semibold transition-all duration-300
                               transform hover:-translate-y-1"
                    >
                        {move || form.with(|f| f.button_label())}
                    </button>
                </form>

                <p class="mt-8 opacity-90">{SIGNUP_NOTE}</p>
            </div>

            <AlertDialog
                title="Invalid email".to_string()
                message=alert_message
                is_open=alert_open
                on_close=Callback::new(move |_| form.update(|f| f.dismiss_rejection()))
            />
        </section>
    }
}

/// Hide the confirmation once [`crate::core::CONFIRMATION_RESET`] has passed
fn schedule_confirmation_reset(form: RwSignal<SignupForm>, ticket: SubmissionTicket) {
    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::CONFIRMATION_RESET;
        use gloo_timers::future::TimeoutFuture;
        use wasm_bindgen_futures::spawn_local;

        spawn_local(async move {
            TimeoutFuture::new(CONFIRMATION_RESET.as_millis() as u32).await;
            // A newer submission keeps its own confirmation
            form.try_update(|f| f.expire_confirmation(ticket));
        });
    }

    #[cfg(feature = "ssr")]
    {
        let _ = (form, ticket);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_section() -> String {
        Owner::new().with(|| view! { <SignupSection /> }.to_html())
    }

    #[test]
    fn test_renders_idle_form_with_anchor() {
        let html = render_section();

        assert!(html.contains("id=\"signup\""));
        assert!(html.contains("Enter your email address"));
        assert!(html.contains("Get Early Access"));
        assert!(!html.contains("Submitted!"));
    }

    #[test]
    fn test_alert_starts_closed() {
        let html = render_section();

        assert!(html.contains("role=\"alertdialog\""));
        assert!(html.contains("pointer-events-none"));
        assert!(html.contains("aria-hidden=\"true\""));
    }
}
