// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! The classified node wrapper.
//!
//! [`Node`] pairs a borrowed [`SyntaxNode`] with its [`Role`]. It is `Copy`
//! and allocates nothing; the lifetime ties every node to the tree the caller
//! owns. [`classify_tree`] is the totality gate: it walks the whole tree once
//! and fails on the first tag outside the closed role set, so navigation
//! after the gate cannot encounter an unclassifiable child.

use crate::role::Role;
use snag_core::{Element, SnagError, SyntaxNode};

#[derive(Debug, Clone, Copy)]
pub struct Node<'t> {
    raw: &'t SyntaxNode,
    role: Role,
}

/// Classify every node of the tree, returning the classified root.
///
/// Fails with [`SnagError::UnknownNodeRole`] on the first unrecognized tag.
pub fn classify_tree(raw: &SyntaxNode) -> Result<Node<'_>, SnagError> {
    let root = Node::classify(raw)?;
    let mut stack: Vec<&SyntaxNode> = vec![raw];
    while let Some(node) = stack.pop() {
        for child in node.node_children() {
            if Role::from_tag(&child.tag).is_none() {
                return Err(SnagError::UnknownNodeRole {
                    tag: child.tag.clone(),
                    line: child.line,
                });
            }
            stack.push(child);
        }
    }
    Ok(root)
}

impl<'t> Node<'t> {
    /// Wrap one raw node. Prefer [`classify_tree`] for whole-tree input.
    pub fn classify(raw: &'t SyntaxNode) -> Result<Self, SnagError> {
        let role = Role::from_tag(&raw.tag).ok_or_else(|| SnagError::UnknownNodeRole {
            tag: raw.tag.clone(),
            line: raw.line,
        })?;
        Ok(Self { raw, role })
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn raw(&self) -> &'t SyntaxNode {
        self.raw
    }

    pub fn line(&self) -> Option<usize> {
        self.raw.line
    }

    pub fn leading_comment(&self) -> Option<&'t str> {
        self.raw.leading_comment.as_deref()
    }

    pub fn elements(&self) -> &'t [Element] {
        &self.raw.children
    }

    /// Classified node children, in order. Scalar atoms are skipped.
    ///
    /// Behind the [`classify_tree`] gate every child classifies; the
    /// debug assertion guards misuse on unvalidated trees.
    pub fn children(self) -> impl Iterator<Item = Node<'t>> {
        self.raw.node_children().filter_map(|raw| {
            let role = Role::from_tag(&raw.tag);
            debug_assert!(role.is_some(), "unclassified child `{}`", raw.tag);
            role.map(|role| Node { raw, role })
        })
    }

    /// The child element at `index` when it is a classifiable node.
    pub fn child_node(&self, index: usize) -> Option<Node<'t>> {
        let raw = self.raw.child_node(index)?;
        let role = Role::from_tag(&raw.tag)?;
        Some(Node { raw, role })
    }

    pub fn child_sym(&self, index: usize) -> Option<&'t str> {
        self.raw.child_sym(index)
    }

    /// Depth-first pre-order traversal, including `self`.
    pub fn dfs(self) -> impl Iterator<Item = Node<'t>> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            let children: Vec<_> = node.children().collect();
            stack.extend(children.into_iter().rev());
            Some(node)
        })
    }

    /// Pointer identity within one tree.
    pub fn same_node(&self, other: &Node<'t>) -> bool {
        std::ptr::eq(self.raw, other.raw)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use snag_core::parse_sexp;

    #[test]
    fn classify_tree_accepts_known_roles() {
        let raw = parse_sexp("(def :foo (args (arg :x)) (lvar :x))").unwrap();
        let root = classify_tree(&raw).unwrap();
        assert_eq!(root.role(), Role::Def);
    }

    #[test]
    fn classify_tree_reports_unknown_tag_with_line() {
        let raw = parse_sexp("(begin\n  (int 1)\n  (wibble))").unwrap();
        let err = classify_tree(&raw).unwrap_err();
        match err {
            SnagError::UnknownNodeRole { tag, line } => {
                assert_eq!(tag, "wibble");
                assert_eq!(line, Some(3));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn dfs_is_preorder_left_to_right() {
        let raw = parse_sexp("(begin (send nil :a) (send nil :b (int 1)))").unwrap();
        let root = classify_tree(&raw).unwrap();
        let tags: Vec<_> = root.dfs().map(|n| n.role().as_tag()).collect();
        assert_eq!(tags, vec!["begin", "send", "send", "int"]);
    }

    #[test]
    fn children_skip_scalar_atoms() {
        let raw = parse_sexp("(send nil :puts (str \"x\"))").unwrap();
        let root = classify_tree(&raw).unwrap();
        let kinds: Vec<_> = root.children().map(|n| n.role()).collect();
        assert_eq!(kinds, vec![Role::Str]);
    }
}
