//! The single page hosting every tool behind a tab strip.

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use tools::convert::currency::CurrencyTable;
use tools::router::ToolId;
use tools::share::decode;

use crate::components::{
    calculator::Calculator, currency_converter::CurrencyConverter, notice_bar::NoticeBar,
    share_button::ShareButton, tab_nav::TabNav, timezone_converter::TimeZoneConverter,
    unit_converter::UnitConverter, wheel_of_names::WheelOfNames,
};
use crate::context::ToolSignals;
use crate::state::link::ToolStates;
use crate::state::ui::NoticeKind;

/// Tool page. A shared link in the query string seeds the initial state;
/// it is read once and never written back.
#[component]
pub fn HomePage() -> impl IntoView {
    let location = use_location();
    let params = decode(&location.search.get_untracked());

    let rates = CurrencyTable::reference();
    let mut states = ToolStates::default();
    let outcome = states.apply_link(&params, &rates);
    if let Some(text) = outcome.notice() {
        states.ui.notify(NoticeKind::Success, text);
    }

    let tools = ToolSignals::new(states, rates);
    provide_context(tools);

    // Notices also live in `ui`; only a tab change should remount the tool.
    let active = Memo::new(move |_| tools.ui.with(|u| u.active()));
    let active_tool = move || match active.get() {
        ToolId::Currency => view! { <CurrencyConverter/> }.into_any(),
        ToolId::Units => view! { <UnitConverter/> }.into_any(),
        ToolId::TimeZone => view! { <TimeZoneConverter/> }.into_any(),
        ToolId::Calculator => view! { <Calculator/> }.into_any(),
        ToolId::Wheel => view! { <WheelOfNames/> }.into_any(),
    };

    view! {
        <div class="page">
            <header class="page__header">
                <h1>"I have Tools"</h1>
                <ShareButton/>
            </header>
            <TabNav/>
            <NoticeBar/>
            <main class="page__main">{active_tool}</main>
            <footer class="page__footer">"Everything runs in your browser. Nothing is stored."</footer>
        </div>
    }
}
