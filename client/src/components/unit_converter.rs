//! Unit converter across the six measurement categories.

use leptos::prelude::*;
use tools::convert::units::UnitCategory;

use crate::context::ToolSignals;

#[component]
pub fn UnitConverter() -> impl IntoView {
    let form = expect_context::<ToolSignals>().units;

    let categories = UnitCategory::ALL
        .into_iter()
        .map(|category| {
            view! {
                <option value=category.id() selected=move || form.with(|f| f.category == category)>
                    {category.label()}
                </option>
            }
        })
        .collect::<Vec<_>>();

    // Rebuilt when the category changes so both selects list its units.
    let unit_options = move |pick_from: bool| {
        let (category, selected) = form.with(|f| (f.category, if pick_from { f.from.clone() } else { f.to.clone() }));
        category
            .units()
            .iter()
            .map(|unit| {
                let label = format!("{} ({})", unit.label, unit.symbol);
                view! {
                    <option value=unit.id selected=selected == unit.id>
                        {label}
                    </option>
                }
            })
            .collect::<Vec<_>>()
    };

    let on_category = move |ev: leptos::ev::Event| {
        if let Some(category) = UnitCategory::from_id(&event_target_value(&ev)) {
            form.update(|f| f.set_category(category));
        }
    };

    view! {
        <section class="tool converter">
            <h2 class="tool__title">"Unit Converter"</h2>
            <label class="converter__field">
                "Category"
                <select on:change=on_category>{categories}</select>
            </label>
            <label class="converter__field">
                "Value"
                <input
                    type="number"
                    inputmode="decimal"
                    prop:value=move || form.with(|f| f.value.clone())
                    on:input=move |ev| form.update(|f| f.value = event_target_value(&ev))
                />
            </label>
            <div class="converter__pair">
                <select on:change=move |ev| form.update(|f| f.from = event_target_value(&ev))>
                    {move || unit_options(true)}
                </select>
                <button class="converter__swap" title="Swap" on:click=move |_| form.update(|f| f.swap())>
                    "\u{21C4}"
                </button>
                <select on:change=move |ev| form.update(|f| f.to = event_target_value(&ev))>
                    {move || unit_options(false)}
                </select>
            </div>
            <div class="converter__result">{move || form.with(|f| f.result_text())}</div>
        </section>
    }
}
