//! File access utilities for the quill editor.
//!
//! Thin asynchronous wrappers around the OS filesystem, plus the
//! synchronous JSON settings reads and tracked temporary files the
//! editor needs. No caching and no retries; callers needing atomic
//! read-modify-write sequences coordinate on their own.

pub mod error;
pub mod fs;
pub mod json;
pub mod temp;
