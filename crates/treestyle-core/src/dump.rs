//! Textual tree dump for debugging host adapters and failing checks.

use crate::element::classify;
use crate::tree::{NodeId, SyntaxTree};

use std::fmt::Write;

/// Renders the tree as indented text, one node per line.
///
/// Each line shows the node kind, its position and its text; physical tokens
/// additionally show their element category. Classification failures are
/// rendered inline rather than aborting, so a dump is always available for a
/// malformed tree.
#[must_use]
pub fn dump(tree: &SyntaxTree) -> String {
    let mut out = String::new();
    if let Some(root) = tree.root() {
        dump_node(tree, root, 0, &mut out);
    }
    out
}

fn dump_node(tree: &SyntaxTree, node: NodeId, depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str("  ");
    }
    let _ = write!(
        out,
        "{:?} [{}:{}]",
        tree.kind(node),
        tree.line(node),
        tree.column(node)
    );
    if !tree.text(node).is_empty() {
        let _ = write!(out, " {:?}", tree.text(node));
    }
    match classify(tree, node) {
        Ok(Some(element)) => {
            let _ = write!(out, " -> {element:?}");
        }
        Ok(None) => {}
        Err(error) => {
            let _ = write!(out, " -> !{}", error.detail);
        }
    }
    out.push('\n');
    for child in tree.children(node) {
        dump_node(tree, child, depth + 1, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenKind;
    use crate::tree::TreeBuilder;

    #[test]
    fn dump_shows_structure_and_categories() {
        let mut b = TreeBuilder::new();
        let pkg = b.root(TokenKind::PackageDef, 1, 0, "package");
        b.child(pkg, TokenKind::Ident, 1, 8, "demo");
        b.child(pkg, TokenKind::Semi, 1, 12, ";");
        let text = dump(&b.build());

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("PackageDef [1:0]"));
        assert!(lines[1].contains("\"demo\""));
        assert!(lines[1].contains("NamePackageDecl"));
        assert!(lines[2].contains("SemiPackageDecl"));
    }

    #[test]
    fn dump_of_empty_tree_is_empty() {
        assert_eq!(dump(&TreeBuilder::new().build()), "");
    }
}
