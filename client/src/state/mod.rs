//! Client-side state modules.
//!
//! DESIGN
//! ======
//! Each tool owns one state value, held in its own `RwSignal` so a change in
//! one widget never re-renders another. Page chrome (active tab, notices)
//! lives in `ui`. The engines themselves come from the `tools` crate; the
//! types here only add form-level concerns such as text drafts.

pub mod forms;
pub mod link;
pub mod ui;
pub mod wheel;
