//! Page chrome state: active tab and transient notices.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use tools::router::{TabRouter, ToolId};

/// Severity of a notice banner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NoticeKind {
    #[default]
    Success,
    Error,
}

/// Short-lived banner shown under the tab strip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    /// Identifies this notice so a stale dismiss timer leaves newer ones alone.
    pub seq: u64,
}

/// UI state for the tab strip and notice banner.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub tabs: TabRouter,
    pub notice: Option<Notice>,
    notice_seq: u64,
}

impl UiState {
    #[must_use]
    pub fn active(&self) -> ToolId {
        self.tabs.active
    }

    pub fn select(&mut self, tool: ToolId) {
        self.tabs.select(tool);
    }

    /// Show a notice, replacing any current one. Returns its sequence number.
    pub fn notify(&mut self, kind: NoticeKind, text: impl Into<String>) -> u64 {
        self.notice_seq += 1;
        self.notice = Some(Notice { kind, text: text.into(), seq: self.notice_seq });
        self.notice_seq
    }

    /// Hide the notice if it is still the one identified by `seq`.
    pub fn dismiss(&mut self, seq: u64) {
        if self.notice.as_ref().is_some_and(|n| n.seq == seq) {
            self.notice = None;
        }
    }
}
