//! Template-driven XML tree alignment.
//!
//! Reorders one XML tree ("unsorted") so its elements appear in the same
//! relative order as a structurally similar reference tree ("template"),
//! recursively at every level. Two versions of a document whose
//! serialization order drifted become comparable with a plain line diff.

pub mod align;
pub mod format;
pub mod parser;
pub mod score;
pub mod select;
pub mod tree;
pub mod writer;

pub use align::{align, align_with_report, AlignReport};
pub use format::{format_json, format_summary, format_text};
pub use parser::{parse, parse_file, ParseError};
pub use score::score;
pub use tree::XmlNode;
pub use writer::{write, write_file, WriteError};
