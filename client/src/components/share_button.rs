//! Copies a link that reopens the active tool in its current state.

use leptos::prelude::*;
use tools::share::share_url;

use crate::context::ToolSignals;
use crate::state::ui::NoticeKind;
use crate::util::browser;

#[component]
pub fn ShareButton() -> impl IntoView {
    let tools = expect_context::<ToolSignals>();

    let on_click = move |_| {
        let tool = tools.ui.with_untracked(|u| u.active());
        let url = share_url(&browser::current_base_url(), &tools.snapshot(tool));
        leptos::task::spawn_local(async move {
            match browser::copy_text(url).await {
                Ok(()) => {
                    tools.ui.update(|u| {
                        u.notify(NoticeKind::Success, "Link copied to clipboard!");
                    });
                }
                Err(e) => {
                    leptos::logging::warn!("clipboard write failed: {e}");
                    tools.ui.update(|u| {
                        u.notify(NoticeKind::Error, "Could not copy the link.");
                    });
                }
            }
        });
    };

    view! {
        <button class="share-button" title="Copy a link to this tool" on:click=on_click>
            "Share"
        </button>
    }
}
