//! Tolerant HTML table parser for READER station pages
//!
//! The READER station index is malformed HTML: rows routinely omit their
//! closing tags. This module reconstructs a valid tabular structure from
//! that markup instead of failing outright.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`tokenizer`] - Raw markup text to start/end/text event stream
//! - [`tree`] - Arena-backed node tree with a closed tag set
//! - [`builder`] - Tag-stack tree construction with the missing-row repair rule
//! - [`grid`] - Table extraction into a two-dimensional cell grid
//!
//! ## Usage
//!
//! ```rust
//! use scar_processor::app::services::html_table_parser::{parse_document, TableGrid};
//!
//! # fn example() -> scar_processor::Result<()> {
//! let doc = parse_document("<table><tr><th>ID</th><tr><td>89009</td></tr></table>");
//! let grid = TableGrid::from_document(&doc)?;
//! let id_col = grid.find_column("ID")?;
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod grid;
pub mod tokenizer;
pub mod tree;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use builder::{TreeBuilder, parse_document};
pub use grid::{CellValue, TableGrid, link_target};
pub use tokenizer::{Event, Tokenizer};
pub use tree::{Child, Document, Node, NodeId, Tag};
