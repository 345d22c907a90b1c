//! Rendering and writing the contributor report.

pub mod markdown;

pub use markdown::{format_contributors, join_conjunction, write_report};
