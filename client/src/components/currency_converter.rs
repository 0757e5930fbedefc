//! Currency converter over the bundled rate table.

use leptos::prelude::*;
use tools::convert::currency;

use crate::context::ToolSignals;

/// `<option>` list for every code in the rate table, marking `selected`.
fn code_options(codes: Vec<String>, selected: impl Fn() -> String + Copy + Send + Sync + 'static) -> impl IntoView {
    codes
        .into_iter()
        .map(|code| {
            let label = currency::currency_info(&code)
                .map_or_else(|| code.clone(), |info| format!("{} - {}", info.code, info.name));
            let value = code.clone();
            view! {
                <option value=value selected=move || selected() == code>
                    {label}
                </option>
            }
        })
        .collect::<Vec<_>>()
}

#[component]
pub fn CurrencyConverter() -> impl IntoView {
    let tools = expect_context::<ToolSignals>();
    let form = tools.currency;
    let rates = tools.rates;
    let codes: Vec<String> = rates.with_value(|t| t.codes().map(str::to_owned).collect());

    let result = move || rates.with_value(|t| form.with(|f| f.result_text(t)));
    let rate_line = move || rates.with_value(|t| form.with(|f| f.rate_line(t))).unwrap_or_default();

    view! {
        <section class="tool converter">
            <h2 class="tool__title">"Currency Converter"</h2>
            <label class="converter__field">
                "Amount"
                <input
                    type="number"
                    inputmode="decimal"
                    prop:value=move || form.with(|f| f.amount.clone())
                    on:input=move |ev| form.update(|f| f.amount = event_target_value(&ev))
                />
            </label>
            <div class="converter__pair">
                <select on:change=move |ev| form.update(|f| f.from = event_target_value(&ev))>
                    {code_options(codes.clone(), move || form.with(|f| f.from.clone()))}
                </select>
                <button class="converter__swap" title="Swap" on:click=move |_| form.update(|f| f.swap())>
                    "\u{21C4}"
                </button>
                <select on:change=move |ev| form.update(|f| f.to = event_target_value(&ev))>
                    {code_options(codes, move || form.with(|f| f.to.clone()))}
                </select>
            </div>
            <div class="converter__result">{result}</div>
            <div class="converter__rate">{rate_line}</div>
            <p class="tool__hint">"Rates are bundled reference values, not live quotes."</p>
        </section>
    }
}
