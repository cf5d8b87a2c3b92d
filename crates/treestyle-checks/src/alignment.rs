//! Alignment check: vertical alignment in immediately consecutive lines.

use treestyle_core::predicates::{grandparent_is_any, parent_is, previous_sibling_is};
use treestyle_core::{
    AlignmentConfig, Check, ConsistencyError, NodeId, Report, SyntaxTree, TokenKind,
};

/// Verifies that declarations and statements in immediately consecutive lines
/// (and only there) have their key sub-tokens vertically aligned.
///
/// ```java
/// int    x   = 7;
/// double xxx = 7.0;   // aligned names and initializers
/// ```
///
/// Six categories are tracked independently: field declarations, parameter
/// declarations, local variable declarations, method and constructor
/// declarations, switch case groups and assignment statements. Alignment is
/// only enforced between a pair whose lines are exactly one apart; any larger
/// gap exempts the pair.
pub struct Alignment {
    config: AlignmentConfig,
    previous_field: Option<NodeId>,
    previous_parameter: Option<NodeId>,
    previous_local_variable: Option<NodeId>,
    previous_method: Option<NodeId>,
    previous_case_group: Option<NodeId>,
    previous_assignment: Option<NodeId>,
}

impl Alignment {
    /// Creates the check with all categories enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(AlignmentConfig::default())
    }

    /// Creates the check with the given category toggles.
    #[must_use]
    pub fn from_config(config: AlignmentConfig) -> Self {
        Self {
            config,
            previous_field: None,
            previous_parameter: None,
            previous_local_variable: None,
            previous_method: None,
            previous_case_group: None,
            previous_assignment: None,
        }
    }

    /// Compares the first declarator name (and initializer `=`) of two
    /// declarations. Only the first declarator of a multi-declarator statement
    /// participates; same-line pairs are exempt.
    fn check_declaration_alignment(
        &self,
        tree: &SyntaxTree,
        previous: Option<NodeId>,
        current: NodeId,
        apply_to_name: bool,
        apply_to_initializer: bool,
        report: &mut Report,
    ) {
        let Some(previous) = previous else { return };

        if tree.parent(previous) != tree.parent(current) {
            return;
        }
        if tree.line(previous) == tree.line(current) {
            return;
        }

        if apply_to_name {
            Self::check_token_alignment(
                tree,
                tree.find_first_child(previous, TokenKind::Ident),
                tree.find_first_child(current, TokenKind::Ident),
                report,
            );
        }
        if apply_to_initializer {
            Self::check_token_alignment(
                tree,
                tree.find_first_child(previous, TokenKind::Assign),
                tree.find_first_child(current, TokenKind::Assign),
                report,
            );
        }
    }

    /// Compares names and body braces of two method or constructor
    /// declarations.
    fn check_method_definition_alignment(
        &self,
        tree: &SyntaxTree,
        previous: Option<NodeId>,
        current: NodeId,
        report: &mut Report,
    ) {
        let Some(previous) = previous else { return };

        if self.config.method_names {
            Self::check_token_alignment(
                tree,
                tree.find_first_child(previous, TokenKind::Ident),
                tree.find_first_child(current, TokenKind::Ident),
                report,
            );
        }

        if self.config.method_bodies {
            let previous_body = tree.find_first_child(previous, TokenKind::Slist);
            let current_body = tree.find_first_child(current, TokenKind::Slist);

            // Opening braces.
            Self::check_token_alignment(tree, previous_body, current_body, report);

            // Closing braces.
            if let (Some(previous_body), Some(current_body)) = (previous_body, current_body) {
                Self::check_token_alignment(
                    tree,
                    tree.last_child(previous_body),
                    tree.last_child(current_body),
                    report,
                );
            }
        }
    }

    /// Compares the leftmost token of the first statement of two non-empty
    /// case groups.
    fn check_case_group_alignment(
        tree: &SyntaxTree,
        previous: Option<NodeId>,
        current: NodeId,
        report: &mut Report,
    ) {
        let Some(previous) = previous else { return };

        let Some(case_or_default) = tree.first_child(current) else {
            return;
        };
        let Some(slist) = tree.next_sibling(case_or_default) else {
            return;
        };
        if tree.kind(slist) != TokenKind::Slist || tree.first_child(slist).is_none() {
            return;
        }

        let previous_statement = tree
            .first_child(previous)
            .and_then(|label| tree.next_sibling(label));
        let current_statement = tree.first_child(slist);

        Self::check_token_alignment(
            tree,
            previous_statement.map(|n| Self::leftmost_descendant(tree, n)),
            current_statement.map(|n| Self::leftmost_descendant(tree, n)),
            report,
        );
    }

    /// Reports a finding iff the two tokens are exactly one line apart and in
    /// different columns.
    fn check_token_alignment(
        tree: &SyntaxTree,
        previous: Option<NodeId>,
        current: Option<NodeId>,
        report: &mut Report,
    ) {
        let (Some(previous), Some(current)) = (previous, current) else {
            return;
        };

        if tree.line(previous) + 1 == tree.line(current)
            && tree.column(previous) != tree.column(current)
        {
            report.log(
                tree,
                current,
                "alignment.misaligned",
                vec![
                    tree.text(current).to_owned(),
                    tree.text(previous).to_owned(),
                    tree.line(previous).to_string(),
                ],
                format!(
                    "'{}' should be aligned with '{}' in line {}",
                    tree.text(current),
                    tree.text(previous),
                    tree.line(previous)
                ),
            );
        }
    }

    fn leftmost_descendant(tree: &SyntaxTree, node: NodeId) -> NodeId {
        let mut current = node;
        loop {
            let mut next = tree.first_child(current);

            // An empty modifier list carries no position of its own.
            if next.is_none() && tree.kind(current) == TokenKind::Modifiers {
                next = tree.next_sibling(current);
            }

            match next {
                Some(n)
                    if tree.line(n) < tree.line(current)
                        || (tree.line(n) == tree.line(current)
                            && tree.column(n) <= tree.column(current)) =>
                {
                    current = n;
                }
                _ => return current,
            }
        }
    }
}

impl Default for Alignment {
    fn default() -> Self {
        Self::new()
    }
}

impl Check for Alignment {
    fn name(&self) -> &'static str {
        "alignment"
    }

    fn code(&self) -> &'static str {
        "TS001"
    }

    fn description(&self) -> &'static str {
        "Key sub-tokens of declarations in immediately consecutive lines must be vertically aligned"
    }

    fn tokens(&self) -> &'static [TokenKind] {
        &[
            TokenKind::CaseGroup,
            TokenKind::CtorDef,
            TokenKind::Expr,
            TokenKind::MethodDef,
            TokenKind::ParameterDef,
            TokenKind::VariableDef,
        ]
    }

    fn begin_tree(&mut self, _tree: &SyntaxTree) {
        self.previous_field = None;
        self.previous_parameter = None;
        self.previous_local_variable = None;
        self.previous_method = None;
        self.previous_case_group = None;
        self.previous_assignment = None;
    }

    fn visit(
        &mut self,
        tree: &SyntaxTree,
        node: NodeId,
        report: &mut Report,
    ) -> Result<(), ConsistencyError> {
        match tree.kind(node) {
            TokenKind::VariableDef => {
                if !previous_sibling_is(tree, node, TokenKind::Comma)
                    && grandparent_is_any(
                        tree,
                        node,
                        &[TokenKind::ClassDef, TokenKind::InterfaceDef, TokenKind::EnumDef],
                    )
                {
                    // First declarator of a field declaration.
                    self.check_declaration_alignment(
                        tree,
                        self.previous_field,
                        node,
                        self.config.field_names,
                        self.config.field_initializers,
                        report,
                    );
                    self.previous_field = Some(node);
                    return Ok(());
                }

                if !previous_sibling_is(tree, node, TokenKind::Comma)
                    && parent_is(tree, node, TokenKind::Slist)
                {
                    // First declarator of a local variable declaration in a
                    // block (not in a FOR initializer).
                    self.check_declaration_alignment(
                        tree,
                        self.previous_local_variable,
                        node,
                        self.config.local_variable_names,
                        self.config.local_variable_initializers,
                        report,
                    );
                    self.previous_local_variable = Some(node);
                }
            }

            TokenKind::ParameterDef => {
                self.check_declaration_alignment(
                    tree,
                    self.previous_parameter,
                    node,
                    self.config.parameter_names,
                    false,
                    report,
                );
                self.previous_parameter = Some(node);
            }

            TokenKind::MethodDef | TokenKind::CtorDef => {
                self.check_method_definition_alignment(tree, self.previous_method, node, report);
                self.previous_method = Some(node);
            }

            TokenKind::CaseGroup => {
                if self.config.case_group_statements {
                    Self::check_case_group_alignment(tree, self.previous_case_group, node, report);
                    self.previous_case_group = Some(node);
                }
            }

            TokenKind::Expr => {
                if self.config.assignments && parent_is(tree, node, TokenKind::Slist) {
                    if let Some(operator) = tree.first_child(node) {
                        if tree.kind(operator).is_assignment_operator() {
                            Self::check_token_alignment(
                                tree,
                                self.previous_assignment,
                                Some(operator),
                                report,
                            );
                            self.previous_assignment = Some(operator);
                        }
                    }
                }
            }

            _ => return Err(ConsistencyError::new(tree, node, "unexpected kind dispatched")),
        }
        Ok(())
    }
}
