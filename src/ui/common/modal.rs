use crate::ui::icon::{Icon, icons};
use leptos::html;
use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::wasm_bindgen::JsCast;

/// Marker class used to detect clicks on the backdrop itself
#[cfg(not(feature = "ssr"))]
const BACKDROP_CLASS: &str = "modal-backdrop";

/// Blocking overlay with a titled panel
#[component]
pub fn BaseModal(
    /// Modal title
    title: String,
    /// Whether modal is open
    is_open: Signal<bool>,
    /// Callback to close modal
    on_close: Callback<()>,
    /// Modal content
    children: Children,
) -> impl IntoView {
    // Close on Escape key
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::keydown;

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" && is_open.with_untracked(|v| *v) {
                on_close.run(());
            }
        });

        // The handle has no Drop; the listener must be detached explicitly
        on_cleanup(move || handle_keydown.remove());
    }

    view! {
        <div
            class=move || {
                if is_open.get() {
                    "modal-backdrop fixed inset-0 z-50 flex items-center justify-center bg-slate-900/60 px-4 transition-all duration-300"
                } else {
                    "modal-backdrop fixed inset-0 z-50 flex items-center justify-center bg-slate-900/60 px-4 opacity-0 pointer-events-none transition-all duration-300"
                }
            }
            role="alertdialog"
            aria-modal="true"
            aria-hidden=move || (!is_open.get()).to_string()
            on:click=move |e| {
                #[cfg(not(feature = "ssr"))]
                {
                    if let Some(target) = e.target() {
                        if let Some(element) = target.dyn_ref::<web_sys::Element>() {
                            if element.class_list().contains(BACKDROP_CLASS) {
                                on_close.run(());
                            }
                        }
                    }
                }
                #[cfg(feature = "ssr")]
                {
                    let _ = e;
                }
            }
        >
            <div class="w-full max-w-md bg-white text-slate-800 rounded-3xl shadow-2xl">
                <div class="flex items-center justify-between px-6 pt-6">
                    <h3 class="text-xl font-semibold">{title}</h3>
                    <button
                        class="text-gray-400 hover:text-slate-800 transition-colors"
                        on:click=move |_| on_close.run(())
                        title="Close"
                        aria-label="Close dialog"
                    >
                        <Icon name=icons::X class="w-5 h-5"/>
                    </button>
                </div>

                <div class="p-6">
                    {children()}
                </div>
            </div>
        </div>
    }
}

/// Simple alert modal with a single acknowledge button.
///
/// Focus moves to the button when the alert opens, so keys typed afterwards
/// do not reach the page behind it.
#[component]
pub fn AlertDialog(
    /// Dialog title
    title: String,
    /// Dialog message
    message: Signal<String>,
    /// Whether dialog is open
    is_open: Signal<bool>,
    /// Callback when closed
    on_close: Callback<()>,
    /// Close button text
    #[prop(default = "OK".to_string())]
    button_text: String,
) -> impl IntoView {
    let button_ref = NodeRef::<html::Button>::new();

    Effect::new(move |_| {
        if !is_open.get() {
            return;
        }
        if let Some(button) = button_ref.get() {
            if let Err(e) = button.focus() {
                leptos::logging::warn!("Could not focus alert button: {:?}", e);
            }
        }
    });

    view! {
        <BaseModal
            title=title
            is_open=is_open
            on_close=on_close
        >
            <div class="space-y-6">
                <div class="flex items-start gap-3">
                    <Icon name=icons::ALERT_CIRCLE class="w-6 h-6 text-red-500 shrink-0"/>
                    <p class="text-gray-600">{move || message.get()}</p>
                </div>

                <div class="flex justify-end">
                    <button
                        node_ref=button_ref
                        class="bg-slate-800 hover:bg-slate-900 text-white px-6 py-2 rounded-full font-semibold transition-colors"
                        on:click=move |_| on_close.run(())
                    >
                        {button_text.clone()}
                    </button>
                </div>
            </div>
        </BaseModal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_alert(open: bool) -> String {
        Owner::new().with(|| {
            let is_open = RwSignal::new(open);
            view! {
                <AlertDialog
                    title="Invalid email".to_string()
                    message=Signal::derive(|| "Please enter a valid email address.".to_string())
                    is_open=is_open.into()
                    on_close=Callback::new(move |_| is_open.set(false))
                />
            }
            .to_html()
        })
    }

    #[test]
    fn test_open_alert_is_interactive() {
        let html = render_alert(true);

        assert!(html.contains("Please enter a valid email address."));
        assert!(html.contains("aria-hidden=\"false\""));
        assert!(!html.contains("pointer-events-none"));
    }

    #[test]
    fn test_closed_alert_is_inert() {
        let html = render_alert(false);

        assert!(html.contains("aria-hidden=\"true\""));
        assert!(html.contains("pointer-events-none"));
    }
}
