//! Horizontal strip of tool tabs.

use leptos::prelude::*;
use tools::router::ToolId;

use crate::context::ToolSignals;

/// Tab strip. Highlights the active tool and switches on click.
#[component]
pub fn TabNav() -> impl IntoView {
    let ui = expect_context::<ToolSignals>().ui;

    let tabs = ToolId::ALL
        .into_iter()
        .map(|tool| {
            let is_active = move || ui.with(|u| u.active() == tool);
            view! {
                <button
                    class="tab-nav__tab"
                    class:tab-nav__tab--active=is_active
                    role="tab"
                    aria-selected=move || is_active().to_string()
                    on:click=move |_| ui.update(|u| u.select(tool))
                >
                    {tool.tab_label()}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! { <nav class="tab-nav" role="tablist">{tabs}</nav> }
}
