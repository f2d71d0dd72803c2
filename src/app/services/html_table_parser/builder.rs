//! Tolerant tag-stack tree builder
//!
//! Consumes markup events and produces a [`Document`] rooted at a synthetic
//! root node. The READER station index omits most `</tr>` tags, so the
//! builder carries one repair rule: a new row start while another row is
//! still open synthetically closes the stack down to and including that
//! open row before the new row is processed.
//!
//! The builder never fails on malformed input. The only observable
//! failure mode is a logged warning when an end tag does not match the
//! top of the open stack, in which case the event is dropped and the
//! stack left unchanged.

use super::tokenizer::Event;
use super::tree::{Child, Document, Node, NodeId, Tag};
use tracing::{debug, warn};

/// Incremental tree builder over one event stream
pub struct TreeBuilder {
    doc: Document,
    /// Currently-open nodes, root at the bottom
    stack: Vec<NodeId>,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        let doc = Document::new();
        let root = doc.root();
        Self {
            doc,
            stack: vec![root],
        }
    }

    /// Feed one event to the builder
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Start { name, attrs } => self.handle_start(&name, attrs),
            Event::End { name } => self.handle_end(&name),
            Event::Text(text) => self.handle_text(text),
        }
    }

    /// Finish building and hand the tree to the caller.
    ///
    /// Nodes still open at end of input stay unattached; extraction only
    /// walks completed descendants of the root.
    pub fn finish(self) -> Document {
        if self.stack.len() > 1 {
            debug!(
                open_nodes = self.stack.len() - 1,
                "input ended with unclosed tags"
            );
        }
        self.doc
    }

    fn top(&self) -> NodeId {
        *self.stack.last().expect("root never leaves the stack")
    }

    /// Stack position of the nearest open row, if any
    fn open_row_depth(&self) -> Option<usize> {
        self.stack
            .iter()
            .rposition(|&id| self.doc.node(id).tag == Tag::Row)
    }

    fn handle_start(&mut self, name: &str, attrs: Vec<(String, String)>) {
        // Untracked tags neither push nor affect the stack.
        let Some(tag) = Tag::from_name(name) else {
            return;
        };

        // Repair rule: a previous row was never closed. Synthetically
        // close nodes from the top down, through ordinary end-tag
        // handling, until that row is off the stack. Closes exactly down
        // to and including the nearest open row, never further.
        if tag == Tag::Row {
            if let Some(depth) = self.open_row_depth() {
                while self.stack.len() > depth {
                    let top_tag = self.doc.node(self.top()).tag;
                    self.handle_end(top_tag.name());
                }
            }
        }

        let parent = self.top();
        let id = self.doc.push_node(Node::new(tag, attrs, Some(parent)));
        self.stack.push(id);
    }

    fn handle_end(&mut self, name: &str) {
        let Some(tag) = Tag::from_name(name) else {
            return;
        };

        let top = self.top();
        if self.stack.len() > 1 && self.doc.node(top).tag == tag {
            self.stack.pop();
            let parent = self.top();
            self.doc.node_mut(parent).children.push(Child::Element(top));
        } else {
            warn!(
                end_tag = name,
                open_tag = self.doc.node(top).tag.name(),
                "dropping mismatched end tag"
            );
        }
    }

    fn handle_text(&mut self, text: String) {
        if text.is_empty() {
            return;
        }
        let top = self.top();
        // Text is only meaningful inside cells and anchors; whitespace
        // between structural tags is expected and ignorable.
        match self.doc.node(top).tag {
            Tag::Cell | Tag::HeaderCell | Tag::Anchor => {
                let children = &mut self.doc.node_mut(top).children;
                match children.last_mut() {
                    Some(Child::Text(existing)) => existing.push_str(&text),
                    _ => children.push(Child::Text(text)),
                }
            }
            _ => {}
        }
    }
}

/// Parse one markup document into a tree
pub fn parse_document(input: &str) -> Document {
    let mut builder = TreeBuilder::new();
    for event in super::tokenizer::Tokenizer::new(input) {
        builder.handle_event(event);
    }
    builder.finish()
}
