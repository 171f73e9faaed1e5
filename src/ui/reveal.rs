//! Scroll-triggered reveal for individual cards
//!
//! Each card owns an `IntersectionObserver`. The first time at least
//! [`REVEAL_THRESHOLD`] of the card is on screen, its visibility flag is
//! scheduled to flip after the card's stagger delay. The flag never goes back.

use leptos::html;
use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use crate::core::REVEAL_THRESHOLD;
use crate::core::RevealState;

/// Observe `node_ref` and return its one-shot visibility flag
pub fn use_reveal_on_scroll(node_ref: NodeRef<html::Div>, delay_ms: u32) -> Signal<bool> {
    let state = RwSignal::new(RevealState::with_delay_ms(delay_ms));

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::wasm_bindgen::JsCast;
        use leptos::wasm_bindgen::JsValue;
        use leptos::wasm_bindgen::closure::Closure;
        use leptos::web_sys;

        type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>;

        let observer = StoredValue::new_local(None::<web_sys::IntersectionObserver>);
        let callback_slot = StoredValue::new_local(None::<ObserverCallback>);

        Effect::new(move |_| {
            let Some(element) = node_ref.get() else {
                return;
            };
            if state.with_untracked(|s| s.is_visible()) {
                return;
            }

            // Re-attached node: drop the old observer first
            observer.update_value(|o| {
                if let Some(o) = o.take() {
                    o.disconnect();
                }
            });

            let callback = ObserverCallback::new(
                move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                    for entry in entries.iter() {
                        let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                        let scheduled = state
                            .try_update(|s| s.on_intersection(entry.is_intersecting()))
                            .flatten();
                        if let Some(delay) = scheduled {
                            observer.unobserve(&entry.target());
                            schedule_reveal(state, delay);
                        }
                    }
                },
            );

            let options = web_sys::IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));

            match web_sys::IntersectionObserver::new_with_options(
                callback.as_ref().unchecked_ref(),
                &options,
            ) {
                Ok(created) => {
                    created.observe(&element);
                    observer.set_value(Some(created));
                    callback_slot.set_value(Some(callback));
                }
                Err(e) => {
                    leptos::logging::warn!("IntersectionObserver unavailable: {:?}", e);
                    // Without an observer the card would stay hidden forever
                    state.update(|s| {
                        s.mark_visible();
                    });
                }
            }
        });

        on_cleanup(move || {
            observer.try_update_value(|o| {
                if let Some(o) = o.take() {
                    o.disconnect();
                }
            });
        });
    }

    // Rendered hidden on the server; the browser observer takes over after hydration
    #[cfg(feature = "ssr")]
    let _ = node_ref;

    Signal::derive(move || state.with(|s| s.is_visible()))
}

#[cfg(not(feature = "ssr"))]
fn schedule_reveal(state: RwSignal<RevealState>, delay: std::time::Duration) {
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_futures::spawn_local;

    spawn_local(async move {
        TimeoutFuture::new(delay.as_millis() as u32).await;
        // The card may have been unmounted while waiting
        if state.try_update(|s| s.mark_visible()).unwrap_or(false) {
            leptos::logging::log!("Revealed card after {}ms", delay.as_millis());
        }
    });
}
