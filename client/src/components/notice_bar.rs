//! Transient banner for link and clipboard feedback.

use leptos::prelude::*;

use crate::context::ToolSignals;
use crate::state::ui::NoticeKind;

/// How long a notice stays up.
#[cfg(feature = "hydrate")]
const NOTICE_MS: u32 = 3_000;

/// Banner under the tab strip. Each notice hides itself after a few seconds
/// unless a newer one has replaced it.
#[component]
pub fn NoticeBar() -> impl IntoView {
    let ui = expect_context::<ToolSignals>().ui;

    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        if let Some(seq) = ui.with(|u| u.notice.as_ref().map(|n| n.seq)) {
            gloo_timers::callback::Timeout::new(NOTICE_MS, move || {
                ui.update(|u| u.dismiss(seq));
            })
            .forget();
        }
    });

    move || {
        ui.with(|u| u.notice.clone()).map(|notice| {
            let class = match notice.kind {
                NoticeKind::Success => "notice notice--success",
                NoticeKind::Error => "notice notice--error",
            };
            let seq = notice.seq;
            view! {
                <div class=class role="status">
                    <span class="notice__text">{notice.text}</span>
                    <button class="notice__close" title="Dismiss" on:click=move |_| ui.update(|u| u.dismiss(seq))>
                        "\u{00D7}"
                    </button>
                </div>
            }
        })
    }
}
