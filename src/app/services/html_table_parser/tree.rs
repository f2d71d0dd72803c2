//! Arena-backed markup tree
//!
//! Nodes are owned by a [`Document`] arena and referenced by index, so the
//! parent back-reference used during construction is a plain `Option<NodeId>`
//! with no shared ownership. A finished `Document` is returned by value from
//! one parse call; there is no global parser state.

/// Index of a node within its [`Document`] arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// The closed set of tags the parser tracks.
///
/// Anything outside this set is ignored by the tree builder, which bounds
/// the tree to exactly the structure table extraction needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    /// Synthetic document root
    Root,
    /// `<table>`
    Table,
    /// `<tr>`
    Row,
    /// `<td>`
    Cell,
    /// `<th>`
    HeaderCell,
    /// `<a>`
    Anchor,
}

impl Tag {
    /// Map a tag name to a tracked tag, ASCII case-insensitively.
    ///
    /// Returns `None` for every untracked tag; `Root` is synthetic and
    /// never produced from input.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "table" => Some(Tag::Table),
            "tr" => Some(Tag::Row),
            "td" => Some(Tag::Cell),
            "th" => Some(Tag::HeaderCell),
            "a" => Some(Tag::Anchor),
            _ => None,
        }
    }

    /// Canonical lowercase name of the tag
    pub fn name(&self) -> &'static str {
        match self {
            Tag::Root => "#root",
            Tag::Table => "table",
            Tag::Row => "tr",
            Tag::Cell => "td",
            Tag::HeaderCell => "th",
            Tag::Anchor => "a",
        }
    }
}

/// One ordered child of a node: literal text or a nested element
#[derive(Debug, Clone, PartialEq)]
pub enum Child {
    Text(String),
    Element(NodeId),
}

/// A tracked element node
#[derive(Debug, Clone)]
pub struct Node {
    pub tag: Tag,
    /// Attributes in document order, names lowercased
    pub attrs: Vec<(String, String)>,
    /// Children in document order
    pub children: Vec<Child>,
    /// Parent at creation time; used only during tree construction
    pub(crate) parent: Option<NodeId>,
}

impl Node {
    pub(crate) fn new(tag: Tag, attrs: Vec<(String, String)>, parent: Option<NodeId>) -> Self {
        Self {
            tag,
            attrs,
            children: Vec::new(),
            parent,
        }
    }

    /// Value of the first attribute with the given name, if any
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// A completed markup tree rooted at a synthetic root node
#[derive(Debug)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Document {
    pub(crate) fn new() -> Self {
        let root = Node::new(Tag::Root, Vec::new(), None);
        Self {
            nodes: vec![root],
            root: NodeId(0),
        }
    }

    /// Identifier of the synthetic root node
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Borrow a node by identifier
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    pub(crate) fn push_node(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Element children of a node, in document order
    pub fn element_children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.node(id).children.iter().filter_map(|c| match c {
            Child::Element(id) => Some(*id),
            Child::Text(_) => None,
        })
    }

    /// Concatenated text content of a node's direct text children
    pub fn text_content(&self, id: NodeId) -> String {
        self.node(id)
            .children
            .iter()
            .filter_map(|c| match c {
                Child::Text(t) => Some(t.as_str()),
                Child::Element(_) => None,
            })
            .collect()
    }
}
