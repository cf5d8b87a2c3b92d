//! Walker for orchestrating check execution over trees.

use crate::check::{Check, CheckBox, Report};
use crate::config::Config;
use crate::tree::{ConsistencyError, SyntaxTree};
use crate::types::LintResult;

use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while walking trees.
#[derive(Debug, Error)]
pub enum WalkError {
    /// A check found the tree shape inconsistent with its assumed grammar.
    #[error("check {check} aborted: {source}")]
    Consistency {
        /// Name of the check that detected the inconsistency.
        check: &'static str,
        /// The underlying shape mismatch.
        source: ConsistencyError,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

/// Builder for configuring a [`Walker`].
#[derive(Default)]
pub struct WalkerBuilder {
    checks: Vec<CheckBox>,
    config: Option<Config>,
}

impl WalkerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a check to the walker.
    #[must_use]
    pub fn check<C: Check + 'static>(mut self, check: C) -> Self {
        self.checks.push(Box::new(check));
        self
    }

    /// Adds a boxed check to the walker.
    #[must_use]
    pub fn check_box(mut self, check: CheckBox) -> Self {
        self.checks.push(check);
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the walker, dropping checks the configuration disables.
    #[must_use]
    pub fn build(self) -> Walker {
        let config = self.config.unwrap_or_default();
        let checks = self
            .checks
            .into_iter()
            .filter(|check| {
                let enabled = config.is_check_enabled(check.name());
                if !enabled {
                    debug!("Skipping disabled check: {}", check.name());
                }
                enabled
            })
            .collect();
        Walker { checks }
    }
}

/// Walks trees in preorder and dispatches nodes to registered checks.
///
/// Each tree is traversed once; a node is handed to every check whose token
/// set contains the node's kind. Use [`Walker::builder()`] to construct an
/// instance.
pub struct Walker {
    checks: Vec<CheckBox>,
}

impl Walker {
    /// Creates a new builder for configuring a walker.
    #[must_use]
    pub fn builder() -> WalkerBuilder {
        WalkerBuilder::new()
    }

    /// Returns the number of registered checks.
    #[must_use]
    pub fn check_count(&self) -> usize {
        self.checks.len()
    }

    /// Runs all checks over one tree.
    ///
    /// Findings are sorted by line, column, then code.
    ///
    /// # Errors
    ///
    /// [`WalkError::Consistency`] when a check detects a tree shape it cannot
    /// interpret; processing of the tree stops at that point.
    pub fn walk(&mut self, tree: &SyntaxTree) -> Result<LintResult, WalkError> {
        debug!("Walking tree with {} nodes", tree.len());

        let mut result = LintResult::new();

        for check in &mut self.checks {
            check.begin_tree(tree);
            let mut report = Report::for_check(check.as_ref());
            let wanted = check.tokens();

            for node in tree.preorder() {
                if !wanted.contains(&tree.kind(node)) {
                    continue;
                }
                check.visit(tree, node, &mut report).map_err(|source| {
                    warn!("Check {} aborted at {}:{}", check.name(), source.line, source.column);
                    WalkError::Consistency {
                        check: check.name(),
                        source,
                    }
                })?;
            }

            result.violations.extend(report.into_violations());
        }

        result.trees_checked = 1;
        result.violations.sort_by(|a, b| {
            a.line
                .cmp(&b.line)
                .then(a.column.cmp(&b.column))
                .then(a.code.cmp(&b.code))
        });

        Ok(result)
    }

    /// Runs all checks over a set of trees, accumulating findings.
    ///
    /// A consistency failure aborts only the tree it occurred in; remaining
    /// trees are still processed. The failures are logged and returned
    /// alongside the accumulated result.
    pub fn walk_all<'a, I>(&mut self, trees: I) -> (LintResult, Vec<WalkError>)
    where
        I: IntoIterator<Item = &'a SyntaxTree>,
    {
        let mut result = LintResult::new();
        let mut failures = Vec::new();

        for tree in trees {
            match self.walk(tree) {
                Ok(tree_result) => result.extend(tree_result),
                Err(error) => {
                    warn!("Tree skipped: {error}");
                    result.trees_checked += 1;
                    failures.push(error);
                }
            }
        }

        info!(
            "Walk complete: {} violations in {} trees ({} failed)",
            result.violations.len(),
            result.trees_checked,
            failures.len()
        );

        (result, failures)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::Report;
    use crate::token::TokenKind;
    use crate::tree::{NodeId, TreeBuilder};
    use crate::types::Severity;

    struct CountIdents {
        seen: usize,
    }

    impl Check for CountIdents {
        fn name(&self) -> &'static str {
            "count-idents"
        }
        fn code(&self) -> &'static str {
            "TEST001"
        }
        fn tokens(&self) -> &'static [TokenKind] {
            &[TokenKind::Ident]
        }
        fn begin_tree(&mut self, _tree: &SyntaxTree) {
            self.seen = 0;
        }

        fn visit(
            &mut self,
            tree: &SyntaxTree,
            node: NodeId,
            report: &mut Report,
        ) -> Result<(), ConsistencyError> {
            self.seen += 1;
            report.log(tree, node, "test.ident", vec![], "identifier seen");
            Ok(())
        }
    }

    struct AlwaysInconsistent;

    impl Check for AlwaysInconsistent {
        fn name(&self) -> &'static str {
            "always-inconsistent"
        }
        fn code(&self) -> &'static str {
            "TEST002"
        }
        fn tokens(&self) -> &'static [TokenKind] {
            &[TokenKind::Ident]
        }

        fn visit(
            &mut self,
            tree: &SyntaxTree,
            node: NodeId,
            _report: &mut Report,
        ) -> Result<(), ConsistencyError> {
            Err(ConsistencyError::new(tree, node, "always fails"))
        }
    }

    fn two_ident_tree() -> SyntaxTree {
        let mut b = TreeBuilder::new();
        let root = b.root(TokenKind::Slist, 1, 0, "{");
        b.child(root, TokenKind::Ident, 3, 4, "b");
        b.child(root, TokenKind::Ident, 2, 4, "a");
        b.build()
    }

    #[test]
    fn dispatches_only_requested_kinds() {
        let tree = two_ident_tree();
        let mut walker = Walker::builder().check(CountIdents { seen: 0 }).build();
        let result = walker.walk(&tree).unwrap();
        assert_eq!(result.violations.len(), 2);
        assert_eq!(result.trees_checked, 1);
    }

    #[test]
    fn violations_sorted_by_position() {
        let tree = two_ident_tree();
        let mut walker = Walker::builder().check(CountIdents { seen: 0 }).build();
        let result = walker.walk(&tree).unwrap();
        assert_eq!(result.violations[0].line, 2);
        assert_eq!(result.violations[1].line, 3);
    }

    #[test]
    fn consistency_error_aborts_tree() {
        let tree = two_ident_tree();
        let mut walker = Walker::builder().check(AlwaysInconsistent).build();
        let error = walker.walk(&tree).unwrap_err();
        assert!(matches!(
            error,
            WalkError::Consistency {
                check: "always-inconsistent",
                ..
            }
        ));
    }

    #[test]
    fn walk_all_continues_past_failures() {
        let bad = two_ident_tree();
        let good = TreeBuilder::new().build();
        let mut walker = Walker::builder().check(AlwaysInconsistent).build();
        let (result, failures) = walker.walk_all([&bad, &good]);
        assert_eq!(result.trees_checked, 2);
        assert_eq!(failures.len(), 1);
    }

    #[test]
    fn disabled_check_is_dropped() {
        let mut config = Config::default();
        config.checks.insert(
            "count-idents".to_owned(),
            crate::config::CheckToggle { enabled: false },
        );
        let walker = Walker::builder()
            .check(CountIdents { seen: 0 })
            .config(config)
            .build();
        assert_eq!(walker.check_count(), 0);
    }

    #[test]
    fn severity_comes_from_check_default() {
        let tree = two_ident_tree();
        let mut walker = Walker::builder().check(CountIdents { seen: 0 }).build();
        let result = walker.walk(&tree).unwrap();
        assert_eq!(result.violations[0].severity, Severity::Error);
    }
}
