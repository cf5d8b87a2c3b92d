//! Anonymous class wrap check.

use crate::wrap::{check_children, Instr, WrapPolicy};
use treestyle_core::{
    Check, ConsistencyError, NodeId, Report, SyntaxTree, TokenKind, WrapAnonymousClassConfig,
};

/// Verifies the layout of `new` expressions, in particular whether the body
/// of an anonymous class may, must or must not start on the line of the
/// closing parenthesis of the constructor arguments.
pub struct WrapAnonymousClass {
    before_class_body: WrapPolicy,
}

impl WrapAnonymousClass {
    /// Creates the check with the default mode (`never` before the body).
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(&WrapAnonymousClassConfig::default())
    }

    /// Creates the check from configuration.
    #[must_use]
    pub fn from_config(config: &WrapAnonymousClassConfig) -> Self {
        Self {
            before_class_body: config.before_class_body.into(),
        }
    }
}

impl Default for WrapAnonymousClass {
    fn default() -> Self {
        Self::new()
    }
}

impl Check for WrapAnonymousClass {
    fn name(&self) -> &'static str {
        "wrap-anonymous-class"
    }

    fn code(&self) -> &'static str {
        "TS003"
    }

    fn description(&self) -> &'static str {
        "The body of an anonymous class must be consistently wrapped"
    }

    fn tokens(&self) -> &'static [TokenKind] {
        &[TokenKind::LiteralNew]
    }

    fn visit(
        &mut self,
        tree: &SyntaxTree,
        node: NodeId,
        report: &mut Report,
    ) -> Result<(), ConsistencyError> {
        // new Type(...) { ... }, new Type[...] or new Type[] { ... }.
        let program = [
            Instr::Any,
            Instr::Fork(1),
            Instr::Expect(TokenKind::TypeArguments),
            Instr::Label(1),
            Instr::Fork(3),
            Instr::Expect(TokenKind::ArrayDeclarator),
            Instr::Fork(2),
            Instr::Wrap(WrapPolicy::MayWrap),
            Instr::Expect(TokenKind::ArrayInit),
            Instr::Label(2),
            Instr::End,
            Instr::Label(3),
            Instr::Expect(TokenKind::Lparen),
            Instr::IndentIfChildren,
            Instr::Expect(TokenKind::Elist),
            Instr::Unindent,
            Instr::Expect(TokenKind::Rparen),
            Instr::Optional,
            Instr::Wrap(self.before_class_body),
            Instr::Expect(TokenKind::Objblock),
            Instr::End,
        ];
        check_children(tree, node, &program, report)
    }
}
