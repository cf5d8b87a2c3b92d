//! Inner assignment check.

use treestyle_core::predicates::{
    grandgrandparent_is, grandparent_is_any, parent_is, previous_sibling_is, previous_uncle_is,
};
use treestyle_core::{Check, ConsistencyError, NodeId, Report, SyntaxTree, TokenKind};

/// Flags assignments embedded in expressions unless they are parenthesized.
///
/// `a = b = c;` hides the inner assignment in what reads like a comparison
/// context; `a = (b = c);` states it explicitly and is accepted. Assignments
/// in declarations, statement position, resource clauses, `for` headers and
/// annotation member values are regular and not reported.
pub struct InnerAssignment;

impl InnerAssignment {
    /// Creates the check.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for InnerAssignment {
    fn default() -> Self {
        Self::new()
    }
}

impl Check for InnerAssignment {
    fn name(&self) -> &'static str {
        "inner-assignment"
    }

    fn code(&self) -> &'static str {
        "TS004"
    }

    fn description(&self) -> &'static str {
        "Assignments embedded in expressions must be parenthesized"
    }

    fn tokens(&self) -> &'static [TokenKind] {
        TokenKind::ASSIGNMENT_OPERATORS
    }

    fn visit(
        &mut self,
        tree: &SyntaxTree,
        node: NodeId,
        report: &mut Report,
    ) -> Result<(), ConsistencyError> {
        // Initializer of a declaration.
        if parent_is(tree, node, TokenKind::VariableDef) {
            return Ok(());
        }
        // Resource of a try-with-resources.
        if parent_is(tree, node, TokenKind::Resource) {
            return Ok(());
        }
        // Statement position: expression statements, statement headers and
        // for-loop init and iterator clauses.
        if parent_is(tree, node, TokenKind::Expr)
            && (grandparent_is_any(tree, node, &[TokenKind::Slist])
                || previous_uncle_is(tree, node, TokenKind::Rparen)
                || grandparent_is_any(tree, node, &[TokenKind::LiteralElse])
                || (grandparent_is_any(tree, node, &[TokenKind::Elist])
                    && (grandgrandparent_is(tree, node, TokenKind::ForIterator)
                        || grandgrandparent_is(tree, node, TokenKind::ForInit))))
        {
            return Ok(());
        }
        // Parenthesized.
        if previous_sibling_is(tree, node, TokenKind::Lparen) {
            return Ok(());
        }
        // Annotation member value.
        if parent_is(tree, node, TokenKind::AnnotationMemberValuePair) {
            return Ok(());
        }

        report.log(
            tree,
            node,
            "inner-assignment.must-parenthesize",
            vec![tree.text(node).to_owned()],
            "assignments in expressions must be parenthesized".to_owned(),
        );
        Ok(())
    }
}
