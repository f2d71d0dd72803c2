//! Table extraction from a repaired markup tree
//!
//! Walks the first table under the document root and produces a
//! two-dimensional grid of cell contents. Row 0 is always the header row;
//! data rows are keyed against it by positional index.

use super::tree::{Child, Document, NodeId, Tag};
use crate::constants::ALL_LINK_MARKER;
use crate::{Error, Result};

/// One extracted cell: a plain text value, or the cell's raw child-node
/// list when it holds nested structure such as an embedded link
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Nested(Vec<Child>),
}

impl CellValue {
    /// The plain text value, if this cell holds one
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(text) => Some(text),
            CellValue::Nested(_) => None,
        }
    }
}

/// A two-dimensional grid of extracted cell contents
#[derive(Debug, Clone)]
pub struct TableGrid {
    pub rows: Vec<Vec<CellValue>>,
}

impl TableGrid {
    /// Extract the first table under the document root.
    ///
    /// A document without a completed table is a hard error: nothing
    /// downstream can proceed without the grid.
    pub fn from_document(doc: &Document) -> Result<Self> {
        let table = doc
            .element_children(doc.root())
            .find(|&id| doc.node(id).tag == Tag::Table)
            .ok_or_else(|| Error::no_table("document root has no table child"))?;

        let mut rows = Vec::new();
        for row_id in doc.element_children(table) {
            if doc.node(row_id).tag != Tag::Row {
                continue;
            }
            let mut cells = Vec::new();
            for cell_id in doc.element_children(row_id) {
                let tag = doc.node(cell_id).tag;
                if tag == Tag::Cell || tag == Tag::HeaderCell {
                    cells.push(extract_cell(doc, cell_id));
                }
            }
            rows.push(cells);
        }
        Ok(Self { rows })
    }

    /// The header row, when the table has any rows
    pub fn header(&self) -> Option<&[CellValue]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// Locate a column by its exact header text.
    ///
    /// Absence of an expected header is fatal to the whole extraction.
    pub fn find_column(&self, name: &str) -> Result<usize> {
        self.header()
            .and_then(|header| {
                header
                    .iter()
                    .position(|cell| cell.as_text().map(str::trim) == Some(name))
            })
            .ok_or_else(|| Error::missing_column(name))
    }

    /// Data rows, i.e. every row after the header
    pub fn data_rows(&self) -> &[Vec<CellValue>] {
        self.rows.get(1..).unwrap_or(&[])
    }
}

/// Extract one cell: a single text child collapses to its text value,
/// anything else keeps the raw child-node list
fn extract_cell(doc: &Document, cell_id: NodeId) -> CellValue {
    let children = &doc.node(cell_id).children;
    match children.as_slice() {
        [Child::Text(text)] => CellValue::Text(text.clone()),
        _ => CellValue::Nested(children.clone()),
    }
}

/// Resolve the data-file link in a cell holding nested nodes.
///
/// The READER table marks a station's complete data file with an anchor
/// whose text is exactly "All". Some stations legitimately lack the link;
/// zero or several matching anchors yield `None` and callers skip the row
/// rather than erroring.
pub fn link_target(doc: &Document, cell: &CellValue) -> Option<String> {
    let CellValue::Nested(children) = cell else {
        return None;
    };

    let mut matches = children.iter().filter_map(|child| match child {
        Child::Element(id)
            if doc.node(*id).tag == Tag::Anchor
                && doc.text_content(*id).trim() == ALL_LINK_MARKER =>
        {
            Some(*id)
        }
        _ => None,
    });

    let first = matches.next()?;
    if matches.next().is_some() {
        return None;
    }
    doc.node(first).attr("href").map(str::to_string)
}
