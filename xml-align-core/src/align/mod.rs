//! Core template-driven tree alignment.

pub mod engine;
pub mod report;

pub use engine::{align, align_with_report};
pub use report::AlignReport;
