//! CLI handlers for the report run.
//!
//! - [`report`]: Validates configuration, collects contributors, and writes
//!   the report
//! - [`progress`]: Console rendering of run progress
//!
//! Output formatting utilities are in [`output`].

pub mod output;
pub mod progress;
pub mod report;

#[cfg(test)]
pub mod test_utils;
