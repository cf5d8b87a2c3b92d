//! Shared machinery of the wrap checks.
//!
//! A wrap check describes the expected child shape of a construct as a short
//! instruction sequence and lets [`check_children`] interpret it against the
//! actual children. The interpreter verifies token order, takes optional
//! branches based on which token is actually present, and applies wrap and
//! indentation policy at the points the sequence marks.
//!
//! "Wrap before X" means a line break appears right before X, such that X is
//! vertically aligned with the first token of the line the construct starts
//! on; continuation lines inside a bracketed region are indented one step
//! further.

use tracing::trace;
use treestyle_core::{ConsistencyError, NodeId, Report, SyntaxTree, TokenKind, WrapMode};

/// Indentation step of a wrapped bracketed region, in columns.
pub const INDENT_STEP: u32 = 4;

/// Wrap policy at one wrap point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapPolicy {
    /// The successor token must stay on the line of its predecessor.
    NoWrap,
    /// The successor may move to a new line; if it does, its column is checked.
    MayWrap,
    /// The successor must move to a new line, column checked.
    MustWrap,
}

impl From<WrapMode> for WrapPolicy {
    fn from(mode: WrapMode) -> Self {
        match mode {
            WrapMode::Never => Self::NoWrap,
            WrapMode::Optional => Self::MayWrap,
            WrapMode::Always => Self::MustWrap,
        }
    }
}

/// One instruction of a wrap control sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instr {
    /// The current child must have this kind.
    Expect(TokenKind),
    /// The current child may have any kind.
    Any,
    /// The next `Expect` is skipped instead of failing when its kind is absent.
    Optional,
    /// Applies this policy between the previous matched token and the next.
    Wrap(WrapPolicy),
    /// Opens an indented region before the next matched token.
    Indent,
    /// Like `Indent`, but only when the next matched node has children.
    IndentIfChildren,
    /// Closes the innermost indented region before the next matched token.
    Unindent,
    /// If the next `Expect` fails, continue behind `Label(n)` instead.
    Fork(u8),
    /// Jump target for `Fork(n)`.
    Label(u8),
    /// All children must be consumed at this point.
    End,
}

enum IndentOp {
    Indent,
    IndentIfChildren,
    Unindent,
}

/// Interprets `program` against the children of `parent`.
///
/// # Errors
///
/// [`ConsistencyError`] when the children do not fit any branch of the
/// sequence; this means the construct's shape differs from the grammar the
/// calling check was written against.
#[allow(clippy::too_many_lines)]
pub fn check_children(
    tree: &SyntaxTree,
    parent: NodeId,
    program: &[Instr],
    report: &mut Report,
) -> Result<(), ConsistencyError> {
    let anchor_indent = tree
        .line_indentation(tree.line(parent))
        .unwrap_or_else(|| tree.column(parent));

    let mut pc = 0;
    let mut cursor = tree.first_child(parent);
    let mut previous = parent;
    let mut indent_stack: Vec<u32> = Vec::new();
    let mut pending_wrap: Option<WrapPolicy> = None;
    let mut pending_indent: Option<IndentOp> = None;
    let mut optional = false;
    let mut fork: Option<u8> = None;

    while let Some(&instr) = program.get(pc) {
        match instr {
            Instr::Label(_) => {}
            Instr::Fork(target) => fork = Some(target),
            Instr::Optional => optional = true,
            Instr::Wrap(policy) => pending_wrap = Some(policy),
            Instr::Indent => pending_indent = Some(IndentOp::Indent),
            Instr::IndentIfChildren => pending_indent = Some(IndentOp::IndentIfChildren),
            Instr::Unindent => pending_indent = Some(IndentOp::Unindent),

            Instr::Any => {
                let Some(node) = cursor else {
                    return Err(ConsistencyError::new(tree, parent, "construct ended early"));
                };
                apply_pending(
                    tree,
                    node,
                    previous,
                    anchor_indent,
                    &mut indent_stack,
                    pending_wrap.take(),
                    pending_indent.take(),
                    report,
                );
                previous = node;
                cursor = tree.next_sibling(node);
                optional = false;
                fork = None;
            }

            Instr::Expect(kind) => match cursor {
                Some(node) if tree.kind(node) == kind => {
                    apply_pending(
                        tree,
                        node,
                        previous,
                        anchor_indent,
                        &mut indent_stack,
                        pending_wrap.take(),
                        pending_indent.take(),
                        report,
                    );
                    previous = node;
                    cursor = tree.next_sibling(node);
                    optional = false;
                    fork = None;
                }
                _ => {
                    pending_wrap = None;
                    pending_indent = None;
                    if let Some(target) = fork.take() {
                        trace!("no {kind:?}, taking branch {target}");
                        pc = label_position(tree, parent, program, target)?;
                        optional = false;
                        continue;
                    }
                    if optional {
                        optional = false;
                    } else {
                        return match cursor {
                            Some(node) => Err(ConsistencyError::new(
                                tree,
                                node,
                                format!("expected {kind:?} here"),
                            )),
                            None => Err(ConsistencyError::new(
                                tree,
                                parent,
                                format!("expected {kind:?} after last child"),
                            )),
                        };
                    }
                }
            },

            Instr::End => {
                return match cursor {
                    Some(node) => {
                        Err(ConsistencyError::new(tree, node, "unexpected trailing child"))
                    }
                    None => Ok(()),
                };
            }
        }
        pc += 1;
    }
    Ok(())
}

fn label_position(
    tree: &SyntaxTree,
    parent: NodeId,
    program: &[Instr],
    target: u8,
) -> Result<usize, ConsistencyError> {
    program
        .iter()
        .position(|&i| i == Instr::Label(target))
        .ok_or_else(|| ConsistencyError::new(tree, parent, "wrap sequence has no such label"))
}

#[allow(clippy::too_many_arguments)]
fn apply_pending(
    tree: &SyntaxTree,
    node: NodeId,
    previous: NodeId,
    anchor_indent: u32,
    indent_stack: &mut Vec<u32>,
    wrap: Option<WrapPolicy>,
    indent: Option<IndentOp>,
    report: &mut Report,
) {
    let left = rightmost_token(tree, previous);
    let right = leftmost_token(tree, node);

    if let Some(op) = indent {
        match op {
            IndentOp::Indent => indent_stack.push(1),
            IndentOp::IndentIfChildren => {
                indent_stack.push(u32::from(tree.first_child(node).is_some()));
            }
            IndentOp::Unindent => {
                indent_stack.pop();
            }
        }
        if tree.line(right) != tree.line(left) {
            let expected = anchor_indent + INDENT_STEP * indent_stack.iter().sum::<u32>();
            check_column(tree, right, expected, report);
        }
    }

    if let Some(policy) = wrap {
        let expected = anchor_indent + INDENT_STEP * indent_stack.iter().sum::<u32>();
        match policy {
            WrapPolicy::NoWrap => check_same_line(tree, left, right, report),
            WrapPolicy::MayWrap => {
                if tree.line(right) != tree.line(left) {
                    check_column(tree, right, expected, report);
                }
            }
            WrapPolicy::MustWrap => {
                if tree.line(right) == tree.line(left) {
                    log_must_wrap(tree, left, right, report);
                } else {
                    check_column(tree, right, expected, report);
                }
            }
        }
    }
}

/// The leftmost physical descendant of `node`.
///
/// Descends first children as long as their position does not lie behind the
/// current node's position; an empty modifier list is skipped sideways because
/// it carries no position of its own.
#[must_use]
pub fn leftmost_token(tree: &SyntaxTree, node: NodeId) -> NodeId {
    let mut current = node;
    loop {
        let mut next = tree.first_child(current);
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

/// The rightmost physical descendant of `node`.
#[must_use]
pub fn rightmost_token(tree: &SyntaxTree, node: NodeId) -> NodeId {
    let mut current = node;
    loop {
        match tree.last_child(current) {
            Some(n)
                if tree.line(n) > tree.line(current)
                    || (tree.line(n) == tree.line(current)
                        && tree.column(n) >= tree.column(current)) =>
            {
                current = n;
            }
            _ => return current,
        }
    }
}

/// Reports a finding when `right` does not sit on the line of `left`.
pub fn check_same_line(tree: &SyntaxTree, left: NodeId, right: NodeId, report: &mut Report) {
    if tree.line(left) != tree.line(right) {
        report.log(
            tree,
            right,
            "wrap.must-join",
            vec![tree.text(right).to_owned(), tree.text(left).to_owned()],
            format!(
                "'{}' must appear on the same line as '{}'",
                tree.text(right),
                tree.text(left)
            ),
        );
    }
}

/// Reports a finding when `current` is on a different line than `anchor` but
/// not in the same column.
pub fn check_aligned(tree: &SyntaxTree, anchor: NodeId, current: NodeId, report: &mut Report) {
    if tree.line(current) != tree.line(anchor) {
        check_column(tree, current, tree.column(anchor), report);
    }
}

/// Reports a finding when `current`, wrapped after `previous`, is not indented
/// one step beyond the line `anchor` starts on.
pub fn check_indented(
    tree: &SyntaxTree,
    anchor: NodeId,
    previous: NodeId,
    current: NodeId,
    report: &mut Report,
) {
    if tree.line(current) != tree.line(previous) {
        let base = tree
            .line_indentation(tree.line(anchor))
            .unwrap_or_else(|| tree.column(anchor));
        check_column(tree, current, base + INDENT_STEP, report);
    }
}

/// Reports a finding when `current`, wrapped after `previous`, does not return
/// to the indentation of the line `anchor` starts on.
pub fn check_unindented(
    tree: &SyntaxTree,
    anchor: NodeId,
    previous: NodeId,
    current: NodeId,
    report: &mut Report,
) {
    if tree.line(current) != tree.line(previous) {
        let base = tree
            .line_indentation(tree.line(anchor))
            .unwrap_or_else(|| tree.column(anchor));
        check_column(tree, current, base, report);
    }
}

/// Reports a must-wrap finding at `right`.
pub fn log_must_wrap(tree: &SyntaxTree, left: NodeId, right: NodeId, report: &mut Report) {
    report.log(
        tree,
        right,
        "wrap.must-wrap",
        vec![tree.text(left).to_owned(), tree.text(right).to_owned()],
        format!(
            "'{}' must appear on a new line after '{}'",
            tree.text(right),
            tree.text(left)
        ),
    );
}

fn check_column(tree: &SyntaxTree, current: NodeId, expected: u32, report: &mut Report) {
    let actual = tree.column(current);
    if actual != expected {
        report.log(
            tree,
            current,
            "wrap.wrong-column",
            vec![
                tree.text(current).to_owned(),
                expected.to_string(),
                actual.to_string(),
            ],
            format!(
                "'{}' must appear in column {expected}, not {actual}",
                tree.text(current)
            ),
        );
    }
}
