//! Structural predicates: composable boolean queries over a node's
//! ancestors and siblings.
//!
//! All of these are pure functions over the tree access layer; absent
//! relatives make the predicate false rather than an error.

use crate::token::TokenKind;
use crate::tree::{NodeId, SyntaxTree};

/// Whether the parent of `node` has the given kind.
#[must_use]
pub fn parent_is(tree: &SyntaxTree, node: NodeId, kind: TokenKind) -> bool {
    tree.parent(node).is_some_and(|p| tree.kind(p) == kind)
}

/// Whether the grandparent of `node` has one of the given kinds.
#[must_use]
pub fn grandparent_is_any(tree: &SyntaxTree, node: NodeId, kinds: &[TokenKind]) -> bool {
    tree.parent(node)
        .and_then(|p| tree.parent(p))
        .is_some_and(|g| kinds.contains(&tree.kind(g)))
}

/// Whether the great-grandparent of `node` has the given kind.
#[must_use]
pub fn grandgrandparent_is(tree: &SyntaxTree, node: NodeId, kind: TokenKind) -> bool {
    tree.parent(node)
        .and_then(|p| tree.parent(p))
        .and_then(|g| tree.parent(g))
        .is_some_and(|gg| tree.kind(gg) == kind)
}

/// Whether the previous sibling of `node` has the given kind.
#[must_use]
pub fn previous_sibling_is(tree: &SyntaxTree, node: NodeId, kind: TokenKind) -> bool {
    tree.previous_sibling(node)
        .is_some_and(|s| tree.kind(s) == kind)
}

/// Whether the next sibling of `node` has the given kind.
#[must_use]
pub fn next_sibling_is(tree: &SyntaxTree, node: NodeId, kind: TokenKind) -> bool {
    tree.next_sibling(node).is_some_and(|s| tree.kind(s) == kind)
}

/// Whether the first child of `node` has the given kind.
#[must_use]
pub fn first_child_is(tree: &SyntaxTree, node: NodeId, kind: TokenKind) -> bool {
    tree.first_child(node).is_some_and(|c| tree.kind(c) == kind)
}

/// Whether the parent of `node` has a previous sibling of the given kind.
#[must_use]
pub fn previous_uncle_is(tree: &SyntaxTree, node: NodeId, kind: TokenKind) -> bool {
    tree.parent(node)
        .and_then(|p| tree.previous_sibling(p))
        .is_some_and(|u| tree.kind(u) == kind)
}

/// The kind of the closest ancestor whose kind is not in `excluded`.
///
/// Walks ancestors skipping the excluded set; used to find the real structural
/// context past chains of qualifier nodes, e.g. walking past chained DOT nodes
/// to find the enclosing package, import or type declaration.
#[must_use]
pub fn ancestor_not(tree: &SyntaxTree, node: NodeId, excluded: &[TokenKind]) -> Option<TokenKind> {
    let mut current = tree.parent(node);
    while let Some(ancestor) = current {
        let kind = tree.kind(ancestor);
        if !excluded.contains(&kind) {
            return Some(kind);
        }
        current = tree.parent(ancestor);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::TreeBuilder;

    // package a.b.c; as PACKAGE_DEF > DOT > DOT > (IDENT a, IDENT b), IDENT c
    fn package_tree() -> (SyntaxTree, NodeId, NodeId) {
        let mut b = TreeBuilder::new();
        let pkg = b.root(TokenKind::PackageDef, 1, 0, "package");
        let outer = b.child(pkg, TokenKind::Dot, 1, 11, ".");
        let inner = b.child(outer, TokenKind::Dot, 1, 9, ".");
        let a = b.child(inner, TokenKind::Ident, 1, 8, "a");
        b.child(inner, TokenKind::Ident, 1, 10, "b");
        b.child(outer, TokenKind::Ident, 1, 12, "c");
        b.child(pkg, TokenKind::Semi, 1, 14, ";");
        (b.build(), a, outer)
    }

    #[test]
    fn parent_and_grandparent() {
        let (tree, a, _) = package_tree();
        assert!(parent_is(&tree, a, TokenKind::Dot));
        assert!(grandparent_is_any(&tree, a, &[TokenKind::Dot, TokenKind::Import]));
        assert!(!grandparent_is_any(&tree, a, &[TokenKind::Import]));
        assert!(grandgrandparent_is(&tree, a, TokenKind::PackageDef));
    }

    #[test]
    fn sibling_queries() {
        let (tree, a, outer) = package_tree();
        assert!(next_sibling_is(&tree, a, TokenKind::Ident));
        assert!(!previous_sibling_is(&tree, a, TokenKind::Ident));
        assert!(next_sibling_is(&tree, outer, TokenKind::Semi));
        assert!(first_child_is(&tree, outer, TokenKind::Dot));
    }

    #[test]
    fn previous_uncle() {
        let (tree, _, outer) = package_tree();
        // SEMI's parent is PACKAGE_DEF, which has no previous sibling.
        let semi = tree.next_sibling(outer).unwrap();
        assert!(!previous_uncle_is(&tree, semi, TokenKind::Rparen));
    }

    #[test]
    fn ancestor_skip_chain() {
        let (tree, a, _) = package_tree();
        assert_eq!(
            ancestor_not(&tree, a, &[TokenKind::Dot]),
            Some(TokenKind::PackageDef)
        );
        assert_eq!(ancestor_not(&tree, a, &[]), Some(TokenKind::Dot));
        let root = tree.root().unwrap();
        assert_eq!(
            ancestor_not(&tree, root, &[TokenKind::Dot]),
            None
        );
    }
}
