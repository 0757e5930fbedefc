//! Wheel of names: edit the entries, spin, reveal a winner.

use leptos::prelude::*;
use tools::wheel::{self, SPIN_DURATION_MS};

use crate::context::ToolSignals;
use crate::state::ui::NoticeKind;
use crate::state::wheel::MAX_NAME_LEN;
use crate::util::rng::browser_rng;

const SEGMENT_COLORS: &[&str] = &["#f94144", "#f3722c", "#f9c74f", "#90be6d", "#43aa8b", "#577590", "#9b5de5", "#f15bb5"];

/// CSS `conic-gradient` painting `count` equal segments clockwise from the top.
fn wheel_background(count: usize) -> String {
    if count == 0 {
        return "background: #ddd".to_owned();
    }
    let segment = wheel::segment_angle(count);
    let stops = (0..count)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let start = i as f64 * segment;
            let color = SEGMENT_COLORS[i % SEGMENT_COLORS.len()];
            format!("{color} {start}deg {}deg", start + segment)
        })
        .collect::<Vec<_>>()
        .join(", ");
    format!("background: conic-gradient({stops})")
}

#[component]
pub fn WheelOfNames() -> impl IntoView {
    let tools = expect_context::<ToolSignals>();
    let state = tools.wheel;
    let ui = tools.ui;
    let bulk = RwSignal::new(String::new());

    let on_spin = move |_| {
        if state.with_untracked(|w| w.spinning) {
            return;
        }
        let mut rng = browser_rng();
        match state.try_update(|w| w.begin_spin(&mut rng)) {
            Some(Ok(_)) => {
                #[cfg(feature = "hydrate")]
                gloo_timers::callback::Timeout::new(SPIN_DURATION_MS, move || {
                    state.update(|w| w.finish_spin());
                })
                .forget();
                #[cfg(not(feature = "hydrate"))]
                state.update(|w| w.finish_spin());
            }
            Some(Err(e)) => {
                ui.update(|u| {
                    u.notify(NoticeKind::Error, format!("Cannot spin: {e}. Add a name first."));
                });
            }
            None => {}
        }
    };

    let wheel_style = move || {
        let (count, rotation) = state.with(|w| (w.names.len(), w.rotation));
        format!(
            "{}; transform: rotate({rotation}deg); transition: transform {SPIN_DURATION_MS}ms cubic-bezier(0.17, 0.67, 0.21, 1)",
            wheel_background(count)
        )
    };

    let labels = move || {
        let names = state.with(|w| w.names.clone());
        let segment = wheel::segment_angle(names.len());
        names
            .into_iter()
            .enumerate()
            .map(|(i, name)| {
                #[allow(clippy::cast_precision_loss)]
                let angle = (i as f64 + 0.5) * segment;
                view! {
                    <span class="wheel__label" style=format!("transform: rotate({angle}deg) translateY(-38%)")>
                        {name}
                    </span>
                }
            })
            .collect::<Vec<_>>()
    };

    let entries = move || {
        state
            .with(|w| w.names.clone())
            .into_iter()
            .enumerate()
            .map(|(i, name)| {
                view! {
                    <li class="wheel__entry">
                        <span>{name}</span>
                        <button
                            class="wheel__remove"
                            title="Remove"
                            disabled=move || state.with(|w| w.spinning)
                            on:click=move |_| state.update(|w| w.remove(i))
                        >
                            "\u{00D7}"
                        </button>
                    </li>
                }
            })
            .collect::<Vec<_>>()
    };

    let add = move || {
        state.update(|w| {
            w.add_draft();
        });
    };

    view! {
        <section class="tool wheel">
            <h2 class="tool__title">"Wheel of Names"</h2>
            <div class="wheel__stage">
                <div class="wheel__pointer">"\u{25BC}"</div>
                <div class="wheel__disc" style=wheel_style>{labels}</div>
            </div>
            <div class="wheel__winner" aria-live="polite">
                {move || state.with(|w| w.revealed_winner().map(|n| format!("\u{1F389} {n}!")))}
            </div>
            <div class="wheel__actions">
                <button class="wheel__spin" disabled=move || state.with(|w| w.spinning) on:click=on_spin>
                    "Spin"
                </button>
                <button on:click=move |_| state.update(|w| w.shuffle(&mut browser_rng()))>"Shuffle"</button>
                <Show when=move || state.with(|w| w.revealed_winner().is_some())>
                    <button on:click=move |_| state.update(|w| w.remove_winner())>"Remove winner"</button>
                </Show>
            </div>
            <div class="wheel__add">
                <input
                    type="text"
                    placeholder="Add a name"
                    maxlength=MAX_NAME_LEN.to_string()
                    prop:value=move || state.with(|w| w.draft.clone())
                    on:input=move |ev| state.update(|w| w.draft = event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            add();
                        }
                    }
                />
                <button on:click=move |_| add()>"Add"</button>
            </div>
            <ul class="wheel__entries">{entries}</ul>
            <details class="wheel__bulk">
                <summary>"Paste a list"</summary>
                <textarea
                    rows="6"
                    placeholder="One name per line"
                    prop:value=move || bulk.get()
                    on:input=move |ev| bulk.set(event_target_value(&ev))
                ></textarea>
                <button on:click=move |_| {
                    state.update(|w| w.replace_from_text(&bulk.get_untracked()));
                    bulk.set(String::new());
                }>"Replace names"</button>
            </details>
        </section>
    }
}
