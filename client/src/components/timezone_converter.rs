//! Clock-time converter between fixed-offset zones.

use leptos::prelude::*;
use tools::convert::timezone::{self, ZONES};

use crate::context::ToolSignals;

fn zone_options(selected: impl Fn() -> String + Copy + Send + Sync + 'static) -> impl IntoView {
    ZONES
        .iter()
        .map(|zone| {
            let label = format!("{} ({})", zone.label, zone.offset_label());
            let id = zone.id;
            view! {
                <option value=id selected=move || selected() == id>
                    {label}
                </option>
            }
        })
        .collect::<Vec<_>>()
}

#[component]
pub fn TimeZoneConverter() -> impl IntoView {
    let form = expect_context::<ToolSignals>().timezone;

    view! {
        <section class="tool converter">
            <h2 class="tool__title">"Time Zone Converter"</h2>
            <label class="converter__field">
                "Time"
                <input
                    type="time"
                    prop:value=move || form.with(|f| timezone::format_clock(f.time))
                    on:change=move |ev| form.update(|f| f.set_time_text(&event_target_value(&ev)))
                />
            </label>
            <div class="converter__pair">
                <select on:change=move |ev| form.update(|f| f.from = event_target_value(&ev))>
                    {zone_options(move || form.with(|f| f.from.clone()))}
                </select>
                <button class="converter__swap" title="Swap" on:click=move |_| form.update(|f| f.swap())>
                    "\u{21C4}"
                </button>
                <select on:change=move |ev| form.update(|f| f.to = event_target_value(&ev))>
                    {zone_options(move || form.with(|f| f.to.clone()))}
                </select>
            </div>
            <div class="converter__result">{move || form.with(|f| f.result_text())}</div>
            <p class="tool__hint">"Standard offsets; daylight saving is not applied."</p>
        </section>
    }
}
