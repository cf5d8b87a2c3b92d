//! Binary operator wrap check.

use crate::wrap::{
    check_aligned, check_indented, check_same_line, check_unindented, leftmost_token,
    log_must_wrap, rightmost_token, WrapPolicy,
};
use treestyle_core::{
    Check, ConsistencyError, NodeId, Report, SyntaxTree, TokenKind, WrapBinaryOperatorConfig,
};

/// Binary operation kinds whose operand layout this check verifies.
const BINARY_OPERATORS: &[TokenKind] = &[
    TokenKind::Assign,
    TokenKind::Band,
    TokenKind::BandAssign,
    TokenKind::Bor,
    TokenKind::BorAssign,
    TokenKind::Bsr,
    TokenKind::BsrAssign,
    TokenKind::Bxor,
    TokenKind::BxorAssign,
    TokenKind::Div,
    TokenKind::DivAssign,
    TokenKind::Dot,
    TokenKind::Equal,
    TokenKind::Ge,
    TokenKind::Gt,
    TokenKind::Land,
    TokenKind::LiteralInstanceof,
    TokenKind::Lor,
    TokenKind::Le,
    TokenKind::Lt,
    TokenKind::Minus,
    TokenKind::MinusAssign,
    TokenKind::Mod,
    TokenKind::ModAssign,
    TokenKind::NotEqual,
    TokenKind::Plus,
    TokenKind::PlusAssign,
    TokenKind::Sl,
    TokenKind::SlAssign,
    TokenKind::Sr,
    TokenKind::SrAssign,
    TokenKind::Star,
    TokenKind::StarAssign,
];

const UNARY_OPERATORS: &[TokenKind] = &[
    TokenKind::Bnot,
    TokenKind::Dec,
    TokenKind::Expr,
    TokenKind::Inc,
    TokenKind::Lnot,
    TokenKind::PostDec,
    TokenKind::PostInc,
    TokenKind::UnaryMinus,
    TokenKind::UnaryPlus,
];

const LEAVES: &[TokenKind] = &[
    TokenKind::CharLiteral,
    TokenKind::Ident,
    TokenKind::LiteralClass,
    TokenKind::LiteralFalse,
    TokenKind::LiteralNull,
    TokenKind::LiteralSuper,
    TokenKind::LiteralThis,
    TokenKind::LiteralTrue,
    TokenKind::NumDouble,
    TokenKind::NumFloat,
    TokenKind::NumInt,
    TokenKind::NumLong,
    TokenKind::StringLiteral,
    TokenKind::LiteralBoolean,
    TokenKind::LiteralByte,
    TokenKind::LiteralShort,
    TokenKind::LiteralInt,
    TokenKind::LiteralLong,
    TokenKind::LiteralChar,
    TokenKind::LiteralFloat,
    TokenKind::LiteralDouble,
    TokenKind::LiteralVoid,
];

/// Verifies that binary operations are uniformly wrapped before and/or after
/// the operator.
///
/// "Wrap before the operator" means the operator starts a new line and is
/// vertically aligned with the first token of the expression:
///
/// ```java
/// a
/// + b
/// + c
/// ```
///
/// Expressions in positions that must stay on one line (statement
/// expressions, case labels, annotation values, multi-argument lists) are
/// checked in inline mode, which forces same-line layout regardless of the
/// configured wrap modes. A single call argument is the prominent position
/// where the modes apply unrestricted.
pub struct WrapBinaryOperator {
    before_operator: WrapPolicy,
    after_operator: WrapPolicy,
}

impl WrapBinaryOperator {
    /// Creates the check with default modes (`optional` before the operator,
    /// `never` after it).
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(&WrapBinaryOperatorConfig::default())
    }

    /// Creates the check from configuration.
    #[must_use]
    pub fn from_config(config: &WrapBinaryOperatorConfig) -> Self {
        Self {
            before_operator: config.before_operator.into(),
            after_operator: config.after_operator.into(),
        }
    }

    /// Checks an optionally parenthesized expression starting at `first`.
    ///
    /// Returns the node after the expression.
    fn check_parenthesized_expression(
        &self,
        tree: &SyntaxTree,
        first: NodeId,
        inline: bool,
        report: &mut Report,
    ) -> Result<Option<NodeId>, ConsistencyError> {
        if tree.kind(first) != TokenKind::Lparen {
            self.check_expression(tree, first, inline, report)?;
            return Ok(tree.next_sibling(first));
        }

        let mut previous = first;
        let mut next = tree
            .next_sibling(previous)
            .ok_or_else(|| ConsistencyError::new(tree, previous, "unclosed parenthesis"))?;
        while tree.kind(next) == TokenKind::Lparen {
            check_same_line(tree, previous, next, report);
            previous = next;
            next = tree
                .next_sibling(next)
                .ok_or_else(|| ConsistencyError::new(tree, next, "unclosed parenthesis"))?;
        }
        let open = previous;

        if tree.line(open) == tree.line(leftmost_token(tree, next)) {
            self.check_expression(tree, next, true, report)?;
            previous = next;
            next = tree
                .next_sibling(previous)
                .ok_or_else(|| ConsistencyError::new(tree, previous, "unclosed parenthesis"))?;
            check_same_line(tree, rightmost_token(tree, previous), next, report);
        } else {
            check_indented(tree, open, open, leftmost_token(tree, next), report);
            self.check_expression(tree, next, false, report)?;
            previous = next;
            next = tree
                .next_sibling(previous)
                .ok_or_else(|| ConsistencyError::new(tree, previous, "unclosed parenthesis"))?;
            check_unindented(tree, open, rightmost_token(tree, previous), next, report);
        }

        if tree.kind(next) != TokenKind::Rparen {
            return Err(ConsistencyError::new(tree, next, "expected closing parenthesis"));
        }
        Ok(tree.next_sibling(next))
    }

    /// Checks one expression node. Iff `inline`, the entire expression must
    /// appear on one line.
    #[allow(clippy::too_many_lines)]
    fn check_expression(
        &self,
        tree: &SyntaxTree,
        expression: NodeId,
        inline: bool,
        report: &mut Report,
    ) -> Result<(), ConsistencyError> {
        let kind = tree.kind(expression);

        if kind == TokenKind::Question {
            // Ternary operation.
            let first = tree
                .first_child(expression)
                .ok_or_else(|| ConsistencyError::new(tree, expression, "ternary without operands"))?;
            let c = self.check_parenthesized_expression(tree, first, inline, report)?;
            let c = c.ok_or_else(|| {
                ConsistencyError::new(tree, expression, "ternary middle operand missing")
            })?;
            let c = self.check_parenthesized_expression(tree, c, inline, report)?;
            let c = c.ok_or_else(|| ConsistencyError::new(tree, expression, "ternary colon missing"))?;
            if tree.kind(c) != TokenKind::Colon {
                return Err(ConsistencyError::new(tree, c, "expected ternary colon"));
            }
            let c = tree
                .next_sibling(c)
                .ok_or_else(|| ConsistencyError::new(tree, c, "ternary third operand missing"))?;
            let c = self.check_parenthesized_expression(tree, c, inline, report)?;
            if c.is_some() {
                return Err(ConsistencyError::new(tree, expression, "unexpected ternary operand"));
            }
            return Ok(());
        }

        if kind == TokenKind::IndexOp {
            let first = tree
                .first_child(expression)
                .ok_or_else(|| ConsistencyError::new(tree, expression, "index without operand"))?;
            let c = self.check_parenthesized_expression(tree, first, inline, report)?;
            let c = c.ok_or_else(|| ConsistencyError::new(tree, expression, "index expression missing"))?;
            check_same_line(tree, rightmost_token(tree, first), expression, report);
            check_same_line(tree, expression, leftmost_token(tree, c), report);
            let c = self.check_parenthesized_expression(tree, c, inline, report)?;
            let c = c.ok_or_else(|| ConsistencyError::new(tree, expression, "index bracket missing"))?;
            if tree.kind(c) != TokenKind::Rbrack {
                return Err(ConsistencyError::new(tree, c, "expected closing bracket"));
            }
            check_same_line(tree, expression, c, report);
            return Ok(());
        }

        if BINARY_OPERATORS.contains(&kind) {
            let first = tree
                .first_child(expression)
                .ok_or_else(|| ConsistencyError::new(tree, expression, "operand missing"))?;
            let mut c = self.check_parenthesized_expression(tree, first, inline, report)?;
            if let Some(n) = c {
                if tree.kind(n) == TokenKind::TypeArguments {
                    // Explicit type arguments of a method reference; their
                    // layout is checked at their own expression node.
                    c = tree.next_sibling(n);
                }
            }
            let c = c.ok_or_else(|| ConsistencyError::new(tree, expression, "second operand missing"))?;

            // Wrapping and alignment of LHS and operator.
            let lhs_end = tree
                .previous_sibling(c)
                .map(|n| rightmost_token(tree, n))
                .ok_or_else(|| ConsistencyError::new(tree, expression, "first operand missing"))?;
            match if inline { WrapPolicy::NoWrap } else { self.before_operator } {
                WrapPolicy::NoWrap => check_same_line(tree, lhs_end, expression, report),
                WrapPolicy::MayWrap => {
                    if tree.line(lhs_end) == tree.line(expression) {
                        check_same_line(tree, lhs_end, expression, report);
                    } else {
                        check_aligned(tree, leftmost_token(tree, first), expression, report);
                    }
                }
                WrapPolicy::MustWrap => {
                    if tree.line(lhs_end) == tree.line(expression) {
                        log_must_wrap(tree, lhs_end, expression, report);
                    } else {
                        check_aligned(tree, leftmost_token(tree, first), expression, report);
                    }
                }
            }

            // Wrapping and alignment of operator and RHS.
            let rhs_start = leftmost_token(tree, c);
            match if inline { WrapPolicy::NoWrap } else { self.after_operator } {
                WrapPolicy::NoWrap => check_same_line(tree, expression, rhs_start, report),
                WrapPolicy::MayWrap => {
                    if tree.line(expression) == tree.line(rhs_start) {
                        check_same_line(tree, expression, rhs_start, report);
                    } else {
                        check_aligned(tree, leftmost_token(tree, first), rhs_start, report);
                    }
                }
                WrapPolicy::MustWrap => {
                    if tree.line(expression) == tree.line(rhs_start) {
                        log_must_wrap(tree, expression, rhs_start, report);
                    } else {
                        check_aligned(tree, leftmost_token(tree, first), rhs_start, report);
                    }
                }
            }

            let c = self.check_parenthesized_expression(tree, c, inline, report)?;
            if c.is_some() {
                return Err(ConsistencyError::new(tree, expression, "unexpected third operand"));
            }
            return Ok(());
        }

        if UNARY_OPERATORS.contains(&kind) {
            let first = tree
                .first_child(expression)
                .ok_or_else(|| ConsistencyError::new(tree, expression, "operand missing"))?;
            let c = self.check_parenthesized_expression(tree, first, inline, report)?;
            if c.is_some() {
                return Err(ConsistencyError::new(tree, expression, "unexpected second operand"));
            }
            return Ok(());
        }

        if kind == TokenKind::ArrayDeclarator {
            let first = tree
                .first_child(expression)
                .ok_or_else(|| ConsistencyError::new(tree, expression, "array length missing"))?;
            let c = self.check_parenthesized_expression(tree, first, inline, report)?;
            match c {
                Some(n) if tree.kind(n) == TokenKind::Rbrack => return Ok(()),
                _ => {
                    return Err(ConsistencyError::new(tree, expression, "expected closing bracket"));
                }
            }
        }

        if LEAVES.contains(&kind) {
            if tree.first_child(expression).is_some() {
                return Err(ConsistencyError::new(tree, expression, "unexpected operand of leaf"));
            }
            return Ok(());
        }

        if kind == TokenKind::MethodCall {
            // Everything up to and including the method name.
            let method = tree
                .first_child(expression)
                .ok_or_else(|| ConsistencyError::new(tree, expression, "callee missing"))?;
            self.check_expression(tree, method, inline, report)?;
            check_same_line(tree, rightmost_token(tree, method), expression, report);

            let arguments = tree
                .next_sibling(method)
                .ok_or_else(|| ConsistencyError::new(tree, expression, "argument list missing"))?;
            let rparen = tree
                .next_sibling(arguments)
                .ok_or_else(|| ConsistencyError::new(tree, expression, "closing parenthesis missing"))?;
            if tree.kind(rparen) != TokenKind::Rparen || tree.next_sibling(rparen).is_some() {
                return Err(ConsistencyError::new(tree, rparen, "malformed call"));
            }

            let same_line = tree.first_child(arguments).map_or(true, |first_argument| {
                tree.line(leftmost_token(tree, first_argument)) == tree.line(expression)
            });
            if same_line {
                check_same_line(tree, rightmost_token(tree, arguments), rparen, report);
            } else {
                check_aligned(tree, leftmost_token(tree, expression), rparen, report);
            }
            return Ok(());
        }

        if matches!(
            kind,
            TokenKind::Type | TokenKind::LiteralNew | TokenKind::ArrayInit | TokenKind::Typecast
        ) {
            // Checked at their own visited nodes.
            return Ok(());
        }

        report.log(
            tree,
            expression,
            "wrap.uncheckable",
            vec![format!("{kind:?}")],
            format!("uncheckable expression element {kind:?}"),
        );
        Ok(())
    }
}

impl Default for WrapBinaryOperator {
    fn default() -> Self {
        Self::new()
    }
}

impl Check for WrapBinaryOperator {
    fn name(&self) -> &'static str {
        "wrap-binary-operator"
    }

    fn code(&self) -> &'static str {
        "TS002"
    }

    fn description(&self) -> &'static str {
        "Binary operations must be uniformly wrapped before and/or after the operator"
    }

    fn tokens(&self) -> &'static [TokenKind] {
        &[TokenKind::Expr]
    }

    fn visit(
        &mut self,
        tree: &SyntaxTree,
        node: NodeId,
        report: &mut Report,
    ) -> Result<(), ConsistencyError> {
        let Some(child) = tree.first_child(node) else {
            return Ok(());
        };

        if tree.kind(child) == TokenKind::Lparen {
            let rest = self.check_parenthesized_expression(tree, child, false, report)?;
            if rest.is_some() {
                return Err(ConsistencyError::new(tree, node, "trailing tokens after expression"));
            }
            return Ok(());
        }

        let parent_kind = tree.parent(node).map(|p| tree.kind(p));
        let inline = match parent_kind {
            Some(
                TokenKind::IndexOp                     // a[#]
                | TokenKind::Annotation                // @SuppressWarnings(#)
                | TokenKind::AnnotationArrayInit
                | TokenKind::AnnotationMemberValuePair
                | TokenKind::Assign                    // a = #
                | TokenKind::ForCondition
                | TokenKind::ForEachClause
                | TokenKind::LiteralAssert
                | TokenKind::LiteralCase
                | TokenKind::LiteralDefault
                | TokenKind::LiteralElse
                | TokenKind::LiteralFor
                | TokenKind::LiteralReturn
                | TokenKind::LiteralThrow
                | TokenKind::Slist,                    // #;
            ) => true,

            Some(
                TokenKind::ArrayDeclarator             // new String[#]
                | TokenKind::ArrayInit
                | TokenKind::LiteralDo
                | TokenKind::LiteralIf
                | TokenKind::LiteralSwitch
                | TokenKind::LiteralSynchronized
                | TokenKind::LiteralWhile,
            ) => {
                let parent = tree.parent(node).ok_or_else(|| {
                    ConsistencyError::new(tree, node, "expression without parent")
                })?;
                tree.line(parent) == tree.line(node)
            }

            Some(TokenKind::Elist) => {
                let parent = tree.parent(node).ok_or_else(|| {
                    ConsistencyError::new(tree, node, "expression without parent")
                })?;
                tree.child_count(parent) != 1
            }

            _ => {
                return Err(ConsistencyError::new(tree, node, "expression has unexpected parent"));
            }
        };

        self.check_expression(tree, child, inline, report)
    }
}
