//! Check trait for defining structural style checks.

use crate::token::TokenKind;
use crate::tree::{ConsistencyError, NodeId, SyntaxTree};
use crate::types::{Severity, Violation};

/// A structural style check over positioned syntax trees.
///
/// A check declares the token kinds it wants to see; the walker performs one
/// preorder traversal per tree and calls [`Check::visit`] for every node whose
/// kind is in that set. Checks may keep per-tree state (pointer stacks, seen
/// markers); [`Check::begin_tree`] resets it before each tree.
///
/// # Example
///
/// ```ignore
/// use treestyle_core::{Check, Report, SyntaxTree, NodeId, TokenKind, ConsistencyError};
///
/// pub struct NoEmptyBlocks;
///
/// impl Check for NoEmptyBlocks {
///     fn name(&self) -> &'static str { "no-empty-blocks" }
///     fn code(&self) -> &'static str { "TS900" }
///     fn tokens(&self) -> &'static [TokenKind] { &[TokenKind::Slist] }
///
///     fn visit(
///         &mut self,
///         tree: &SyntaxTree,
///         node: NodeId,
///         report: &mut Report,
///     ) -> Result<(), ConsistencyError> {
///         if tree.first_child(node).is_none() {
///             report.log(tree, node, "block.empty", vec![], "empty block");
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Check: Send {
    /// Returns the kebab-case name of this check (e.g. "inner-assignment").
    fn name(&self) -> &'static str;

    /// Returns the check code (e.g. "TS004").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this check enforces.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for findings from this check.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// The token kinds this check wants to visit.
    fn tokens(&self) -> &'static [TokenKind];

    /// Resets per-tree state before a tree is walked.
    fn begin_tree(&mut self, _tree: &SyntaxTree) {}

    /// Visits one node whose kind is in [`Check::tokens`].
    ///
    /// # Errors
    ///
    /// [`ConsistencyError`] when the tree shape around `node` violates the
    /// grammar this check assumes; the walker aborts the current tree.
    fn visit(
        &mut self,
        tree: &SyntaxTree,
        node: NodeId,
        report: &mut Report,
    ) -> Result<(), ConsistencyError>;
}

/// Type alias for boxed Check trait objects.
pub type CheckBox = Box<dyn Check>;

/// Finding sink handed to a check during traversal.
///
/// Carries the identity of the check currently visiting so findings do not
/// repeat it at every call site.
#[derive(Debug)]
pub struct Report {
    code: &'static str,
    check: &'static str,
    severity: Severity,
    violations: Vec<Violation>,
}

impl Report {
    /// Creates a sink bound to one check's identity.
    #[must_use]
    pub fn for_check(check: &dyn Check) -> Self {
        Self {
            code: check.code(),
            check: check.name(),
            severity: check.default_severity(),
            violations: Vec::new(),
        }
    }

    /// Records a finding at the position of `node`.
    pub fn log(
        &mut self,
        tree: &SyntaxTree,
        node: NodeId,
        message_key: impl Into<String>,
        args: Vec<String>,
        message: impl Into<String>,
    ) {
        self.log_at(tree.line(node), tree.column(node), message_key, args, message);
    }

    /// Records a finding at an explicit position.
    pub fn log_at(
        &mut self,
        line: u32,
        column: u32,
        message_key: impl Into<String>,
        args: Vec<String>,
        message: impl Into<String>,
    ) {
        self.violations.push(Violation::new(
            self.code,
            self.check,
            self.severity,
            line,
            column,
            message_key,
            args,
            message,
        ));
    }

    /// Consumes the sink, yielding the findings recorded so far.
    #[must_use]
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }

    /// Number of findings recorded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Whether no findings were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::TreeBuilder;

    struct TestCheck;

    impl Check for TestCheck {
        fn name(&self) -> &'static str {
            "test-check"
        }
        fn code(&self) -> &'static str {
            "TEST001"
        }
        fn description(&self) -> &'static str {
            "A test check"
        }
        fn tokens(&self) -> &'static [TokenKind] {
            &[TokenKind::Ident]
        }

        fn visit(
            &mut self,
            tree: &SyntaxTree,
            node: NodeId,
            report: &mut Report,
        ) -> Result<(), ConsistencyError> {
            report.log(tree, node, "test.finding", vec![], "test finding");
            Ok(())
        }
    }

    #[test]
    fn check_trait_defaults() {
        let check = TestCheck;
        assert_eq!(check.name(), "test-check");
        assert_eq!(check.code(), "TEST001");
        assert_eq!(check.default_severity(), Severity::Error);
    }

    #[test]
    fn report_carries_check_identity() {
        let mut check = TestCheck;
        let mut b = TreeBuilder::new();
        let root = b.root(TokenKind::Slist, 1, 0, "{");
        let ident = b.child(root, TokenKind::Ident, 2, 4, "x");
        let tree = b.build();

        let mut report = Report::for_check(&check);
        check.visit(&tree, ident, &mut report).unwrap();

        let violations = report.into_violations();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].code, "TEST001");
        assert_eq!(violations[0].check, "test-check");
        assert_eq!(violations[0].line, 2);
        assert_eq!(violations[0].column, 4);
    }
}
