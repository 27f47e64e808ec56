//! Pane state management for the quill editor.
//!
//! This crate owns the ordered list of open editor panes (tabs) and the
//! transitions the UI dispatches against it. It is intentionally
//! independent of the rendering layer so that it can be tested in
//! isolation.

pub mod config;
pub mod effect;
pub mod error;
pub mod event;
pub mod pane;
pub mod registry;
