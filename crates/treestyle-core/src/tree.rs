//! Tree access layer: a positioned, typed syntax tree.
//!
//! The tree is built once by a host adapter (via [`TreeBuilder`]) and never
//! mutated by checks; checks hold only shared references while processing one
//! tree. Every accessor that can miss returns an `Option` rather than failing,
//! so callers chain lookups without special-casing absent nodes.

use crate::token::TokenKind;
use thiserror::Error;

/// Handle to a node inside a [`SyntaxTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone)]
struct Node {
    kind: TokenKind,
    /// 1-based source line.
    line: u32,
    /// 0-based source column.
    column: u32,
    /// Literal source text; empty for virtual tokens.
    text: String,
    parent: Option<NodeId>,
    first_child: Option<NodeId>,
    next_sibling: Option<NodeId>,
}

/// A positioned, typed syntax tree owned by the host side of the engine.
///
/// Lines are 1-based, columns are 0-based. The tree may additionally carry the
/// source lines of the file it was parsed from; the wrap checker uses them to
/// determine the indentation of a physical line.
#[derive(Debug, Clone, Default)]
pub struct SyntaxTree {
    nodes: Vec<Node>,
    root: Option<NodeId>,
    lines: Vec<String>,
}

impl SyntaxTree {
    /// The root node, if the tree is non-empty.
    #[must_use]
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// The kind of `id`.
    #[must_use]
    pub fn kind(&self, id: NodeId) -> TokenKind {
        self.node(id).kind
    }

    /// The 1-based source line of `id`.
    #[must_use]
    pub fn line(&self, id: NodeId) -> u32 {
        self.node(id).line
    }

    /// The 0-based source column of `id`.
    #[must_use]
    pub fn column(&self, id: NodeId) -> u32 {
        self.node(id).column
    }

    /// The literal source text of `id`; empty for virtual tokens.
    #[must_use]
    pub fn text(&self, id: NodeId) -> &str {
        &self.node(id).text
    }

    /// The parent of `id`.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// The first child of `id`.
    #[must_use]
    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).first_child
    }

    /// The next sibling of `id`.
    #[must_use]
    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).next_sibling
    }

    /// The previous sibling of `id`, by forward scan from the parent.
    #[must_use]
    pub fn previous_sibling(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.parent(id)?;
        let mut candidate = self.first_child(parent)?;
        if candidate == id {
            return None;
        }
        while let Some(next) = self.next_sibling(candidate) {
            if next == id {
                return Some(candidate);
            }
            candidate = next;
        }
        None
    }

    /// The last child of `id`. O(children).
    #[must_use]
    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        let mut child = self.first_child(id)?;
        while let Some(next) = self.next_sibling(child) {
            child = next;
        }
        Some(child)
    }

    /// Iterates over the direct children of `id`.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let mut next = self.first_child(id);
        std::iter::from_fn(move || {
            let current = next?;
            next = self.next_sibling(current);
            Some(current)
        })
    }

    /// Number of direct children of `id`.
    #[must_use]
    pub fn child_count(&self, id: NodeId) -> usize {
        self.children(id).count()
    }

    /// Number of direct children of `id` with the given kind.
    #[must_use]
    pub fn child_count_of(&self, id: NodeId, kind: TokenKind) -> usize {
        self.children(id).filter(|&c| self.kind(c) == kind).count()
    }

    /// The first direct child of `id` with the given kind.
    #[must_use]
    pub fn find_first_child(&self, id: NodeId, kind: TokenKind) -> Option<NodeId> {
        self.children(id).find(|&c| self.kind(c) == kind)
    }

    /// Iterates over the whole tree in preorder (parents before children,
    /// siblings left to right), the order in which checks are invoked.
    pub fn preorder(&self) -> impl Iterator<Item = NodeId> + '_ {
        let mut stack: Vec<NodeId> = self.root.into_iter().collect();
        std::iter::from_fn(move || {
            let current = stack.pop()?;
            let mut children: Vec<NodeId> = self.children(current).collect();
            children.reverse();
            stack.extend(children);
            Some(current)
        })
    }

    /// Source text of the given 1-based line, if the tree carries source lines.
    #[must_use]
    pub fn line_text(&self, line: u32) -> Option<&str> {
        let index = usize::try_from(line.checked_sub(1)?).ok()?;
        self.lines.get(index).map(String::as_str)
    }

    /// Column of the first non-blank character of the given line.
    ///
    /// Falls back to `None` when the tree carries no source lines or the line
    /// is blank.
    #[must_use]
    pub fn line_indentation(&self, line: u32) -> Option<u32> {
        let text = self.line_text(line)?;
        let column = text.find(|c: char| !c.is_whitespace())?;
        u32::try_from(column).ok()
    }

    /// Total number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Builds a [`SyntaxTree`] node by node.
///
/// Host adapters translate the parser's tree into this builder; tests build
/// small shapes directly.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    tree: SyntaxTree,
    last_child: Vec<Option<NodeId>>,
}

impl TreeBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, parent: Option<NodeId>, kind: TokenKind, line: u32, column: u32, text: &str) -> NodeId {
        let id = NodeId(u32::try_from(self.tree.nodes.len()).unwrap_or(u32::MAX));
        self.tree.nodes.push(Node {
            kind,
            line,
            column,
            text: text.to_owned(),
            parent,
            first_child: None,
            next_sibling: None,
        });
        self.last_child.push(None);
        if let Some(parent) = parent {
            match self.last_child[parent.index()] {
                Some(previous) => self.tree.nodes[previous.index()].next_sibling = Some(id),
                None => self.tree.nodes[parent.index()].first_child = Some(id),
            }
            self.last_child[parent.index()] = Some(id);
        }
        id
    }

    /// Adds the root node. Later roots are ignored in favor of the first.
    pub fn root(&mut self, kind: TokenKind, line: u32, column: u32, text: &str) -> NodeId {
        let id = self.push(None, kind, line, column, text);
        if self.tree.root.is_none() {
            self.tree.root = Some(id);
        }
        id
    }

    /// Adds a child of `parent`, after any existing children.
    pub fn child(&mut self, parent: NodeId, kind: TokenKind, line: u32, column: u32, text: &str) -> NodeId {
        self.push(Some(parent), kind, line, column, text)
    }

    /// Attaches the source lines of the file the tree was parsed from.
    #[must_use]
    pub fn source_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tree.lines = lines.into_iter().map(Into::into).collect();
        self
    }

    /// Finishes the tree.
    #[must_use]
    pub fn build(self) -> SyntaxTree {
        self.tree
    }
}

/// The tree violates a grammar invariant this engine assumes.
///
/// This is not a user-facing finding: it signals a mismatch between the
/// engine's assumed grammar and the actual parser version, aborts processing
/// of the current tree and must never be silently swallowed.
#[derive(Debug, Clone, Error)]
#[error(
    "inconsistent tree shape at {line}:{column}: {kind:?} (text {text:?}) under parent \
     {parent:?}, grandparent {grandparent:?}: {detail}"
)]
pub struct ConsistencyError {
    /// 1-based line of the offending node.
    pub line: u32,
    /// 0-based column of the offending node.
    pub column: u32,
    /// Kind of the offending node.
    pub kind: TokenKind,
    /// Text of the offending node.
    pub text: String,
    /// Kind of its parent, if any.
    pub parent: Option<TokenKind>,
    /// Kind of its grandparent, if any.
    pub grandparent: Option<TokenKind>,
    /// What was expected instead.
    pub detail: String,
}

impl ConsistencyError {
    /// Captures diagnostic context for `node` with the given detail.
    #[must_use]
    pub fn new(tree: &SyntaxTree, node: NodeId, detail: impl Into<String>) -> Self {
        let parent = tree.parent(node);
        Self {
            line: tree.line(node),
            column: tree.column(node),
            kind: tree.kind(node),
            text: tree.text(node).to_owned(),
            parent: parent.map(|p| tree.kind(p)),
            grandparent: parent.and_then(|p| tree.parent(p)).map(|g| tree.kind(g)),
            detail: detail.into(),
        }
    }
}
