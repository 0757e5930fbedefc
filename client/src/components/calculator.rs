//! Four-function calculator with on-screen keypad and keyboard input.

use leptos::prelude::*;
use tools::keys::{KEYPAD, KeyRole};

use crate::context::ToolSignals;

#[component]
pub fn Calculator() -> impl IntoView {
    let calc = expect_context::<ToolSignals>().calculator;

    // Listening on the window means no element has to hold focus. The
    // listener lives only while this tab is mounted.
    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
                return;
            }
            if let Some(input) = tools::keys::parse_key(&ev.key()) {
                ev.prevent_default();
                calc.update(|c| c.dispatch(input));
            }
        });
        on_cleanup(move || handle.remove());
    }

    let keys = KEYPAD
        .iter()
        .map(|key| {
            let input = key.input;
            let class = match key.role {
                KeyRole::Number => "calc__key calc__key--number",
                KeyRole::Operator => "calc__key calc__key--operator",
                KeyRole::Equals => "calc__key calc__key--equals",
                KeyRole::Clear => "calc__key calc__key--clear",
            };
            view! {
                <button
                    class=class
                    style=format!("grid-column: span {}", key.span)
                    on:click=move |_| calc.update(|c| c.dispatch(input))
                >
                    {key.label}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section class="tool calc">
            <h2 class="tool__title">"Calculator"</h2>
            <div class="calc__screen">
                <div class="calc__pending">{move || calc.with(|c| c.pending_label()).unwrap_or_default()}</div>
                <div class="calc__display" aria-live="polite">{move || calc.with(|c| c.display.clone())}</div>
            </div>
            <div class="calc__keypad">{keys}</div>
            <p class="tool__hint">"Type digits, + - * / Enter, Backspace, or Esc."</p>
        </section>
    }
}
