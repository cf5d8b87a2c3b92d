//! Zero parameter superconstructor check.

use treestyle_core::{Check, ConsistencyError, NodeId, Report, SyntaxTree, TokenKind};

/// Flags explicit `super()` calls without arguments.
///
/// The compiler inserts this invocation when no other constructor call is
/// written, so spelling it out adds nothing. Qualified invocations
/// (`outer.super()`) select an enclosing instance and stay untouched.
pub struct ZeroParameterSuperconstructor;

impl ZeroParameterSuperconstructor {
    /// Creates the check.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for ZeroParameterSuperconstructor {
    fn default() -> Self {
        Self::new()
    }
}

impl Check for ZeroParameterSuperconstructor {
    fn name(&self) -> &'static str {
        "zero-parameter-superconstructor"
    }

    fn code(&self) -> &'static str {
        "TS005"
    }

    fn description(&self) -> &'static str {
        "Explicit invocations of the zero-parameter superconstructor are redundant"
    }

    fn tokens(&self) -> &'static [TokenKind] {
        &[TokenKind::CtorDef]
    }

    fn visit(
        &mut self,
        tree: &SyntaxTree,
        node: NodeId,
        report: &mut Report,
    ) -> Result<(), ConsistencyError> {
        let Some(body) = tree.find_first_child(node, TokenKind::Slist) else {
            return Ok(());
        };
        let Some(call) = tree.find_first_child(body, TokenKind::SuperCtorCall) else {
            return Ok(());
        };
        // A qualified invocation starts with the enclosing instance
        // expression instead of the opening parenthesis.
        let Some(lparen) = tree.first_child(call).filter(|&c| tree.kind(c) == TokenKind::Lparen)
        else {
            return Ok(());
        };
        let Some(arguments) = tree.next_sibling(lparen) else {
            return Err(ConsistencyError::new(tree, call, "argument list missing"));
        };
        if tree.child_count_of(arguments, TokenKind::Expr) == 0 {
            report.log(
                tree,
                call,
                "zero-parameter-superconstructor.redundant",
                vec![],
                "redundant invocation of zero-parameter superconstructor".to_owned(),
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use treestyle_core::{TreeBuilder, Walker};

    fn constructor(arguments: &[&str], qualified: bool) -> SyntaxTree {
        let mut b = TreeBuilder::new();
        let ctor = b.root(TokenKind::CtorDef, 2, 4, "");
        b.child(ctor, TokenKind::Modifiers, 2, 4, "");
        b.child(ctor, TokenKind::Ident, 2, 11, "Foo");
        b.child(ctor, TokenKind::Lparen, 2, 14, "(");
        b.child(ctor, TokenKind::Parameters, 2, 15, "");
        b.child(ctor, TokenKind::Rparen, 2, 15, ")");
        let body = b.child(ctor, TokenKind::Slist, 2, 17, "{");
        let call = b.child(body, TokenKind::SuperCtorCall, 3, 8, "super");
        if qualified {
            b.child(call, TokenKind::Ident, 3, 8, "outer");
            b.child(call, TokenKind::Dot, 3, 13, ".");
        }
        b.child(call, TokenKind::Lparen, 3, 13, "(");
        let elist = b.child(call, TokenKind::Elist, 3, 14, "");
        let mut column = 14;
        for argument in arguments {
            let expr = b.child(elist, TokenKind::Expr, 3, column, "");
            b.child(expr, TokenKind::Ident, 3, column, argument);
            column += 3;
        }
        b.child(call, TokenKind::Rparen, 3, column, ")");
        b.child(call, TokenKind::Semi, 3, column + 1, ";");
        b.child(body, TokenKind::Rcurly, 4, 4, "}");
        b.build()
    }

    fn walk(tree: &SyntaxTree) -> Vec<treestyle_core::Violation> {
        let mut walker = Walker::builder()
            .check(ZeroParameterSuperconstructor::new())
            .build();
        walker.walk(tree).unwrap().violations
    }

    #[test]
    fn super_without_arguments_is_flagged() {
        let violations = walk(&constructor(&[], false));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].line, 3);
        assert_eq!(violations[0].column, 8);
        assert_eq!(violations[0].message_key, "zero-parameter-superconstructor.redundant");
    }

    #[test]
    fn super_with_arguments_is_clean() {
        assert!(walk(&constructor(&["a"], false)).is_empty());
    }

    #[test]
    fn qualified_super_is_skipped() {
        assert!(walk(&constructor(&[], true)).is_empty());
    }

    #[test]
    fn constructor_without_super_call_is_clean() {
        let mut b = TreeBuilder::new();
        let ctor = b.root(TokenKind::CtorDef, 1, 0, "");
        b.child(ctor, TokenKind::Modifiers, 1, 0, "");
        b.child(ctor, TokenKind::Ident, 1, 7, "Foo");
        b.child(ctor, TokenKind::Lparen, 1, 10, "(");
        b.child(ctor, TokenKind::Parameters, 1, 11, "");
        b.child(ctor, TokenKind::Rparen, 1, 11, ")");
        let body = b.child(ctor, TokenKind::Slist, 1, 13, "{");
        b.child(body, TokenKind::Rcurly, 2, 0, "}");
        let tree = b.build();
        assert!(walk(&tree).is_empty());
    }
}
