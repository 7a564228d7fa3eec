// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Accessors for conditionals, loops, and blocks.

use crate::node::Node;
use crate::role::Role;

impl<'t> Node<'t> {
    /// The controlling condition of a conditional or loop.
    pub fn condition(&self) -> Option<Node<'t>> {
        match self.role() {
            Role::If | Role::Case | Role::While | Role::Until | Role::WhilePost
            | Role::UntilPost => self.child_node(0),
            _ => None,
        }
    }

    /// The then/else branch bodies of an `if`, skipping absent branches.
    pub fn if_branches(&self) -> Vec<Node<'t>> {
        if self.role() != Role::If {
            return Vec::new();
        }
        [1, 2].iter().filter_map(|&i| self.child_node(i)).collect()
    }

    /// The `when` clauses of a `case`.
    pub fn case_whens(&self) -> Vec<Node<'t>> {
        if self.role() != Role::Case {
            return Vec::new();
        }
        self.children().filter(|c| c.role() == Role::When).collect()
    }

    /// The trailing `else` body of a `case`, when present.
    pub fn case_else(&self) -> Option<Node<'t>> {
        if self.role() != Role::Case {
            return None;
        }
        let last = self.elements().len().checked_sub(1)?;
        self.child_node(last).filter(|n| n.role() != Role::When)
    }

    /// The tested values of a `when` clause.
    pub fn when_condition_list(&self) -> Vec<Node<'t>> {
        if self.role() != Role::When {
            return Vec::new();
        }
        let last = self.elements().len().saturating_sub(1);
        (0..last).filter_map(|i| self.child_node(i)).collect()
    }

    /// The body of a `when` clause.
    pub fn when_body(&self) -> Option<Node<'t>> {
        if self.role() != Role::When {
            return None;
        }
        let last = self.elements().len().checked_sub(1)?;
        self.child_node(last)
    }

    /// Both operands of an `and`/`or`.
    pub fn boolean_operands(&self) -> Vec<Node<'t>> {
        match self.role() {
            Role::And | Role::Or => self.children().collect(),
            _ => Vec::new(),
        }
    }

    /// The call a block is attached to.
    pub fn block_call(&self) -> Option<Node<'t>> {
        match self.role() {
            Role::Block | Role::NumBlock => self.child_node(0),
            _ => None,
        }
    }

    /// The block's formal argument list.
    pub fn block_args(&self) -> Option<Node<'t>> {
        if self.role() == Role::Block {
            self.child_node(1).filter(|n| n.role() == Role::Args)
        } else {
            None
        }
    }

    /// The block body expression.
    pub fn block_body(&self) -> Option<Node<'t>> {
        match self.role() {
            Role::Block | Role::NumBlock => self.child_node(2),
            _ => None,
        }
    }

    /// Names of the block's formal parameters, flattened.
    pub fn block_parameter_names(&self) -> Vec<&'t str> {
        match self.block_args() {
            Some(args) => args
                .components()
                .iter()
                .filter_map(Node::argument_name)
                .collect(),
            None => Vec::new(),
        }
    }

    /// Whether the block declares no formal arguments. Numbered-parameter
    /// blocks (`_1`) always declare implicitly.
    pub fn is_without_block_arguments(&self) -> bool {
        match self.role() {
            Role::Block => self
                .block_args()
                .is_none_or(|args| args.components().is_empty()),
            Role::NumBlock => false,
            _ => false,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::node::classify_tree;
    use snag_core::parse_sexp;

    #[test]
    fn if_condition_and_branches() {
        let raw = parse_sexp("(if (lvar :ok) (send nil :go) (send nil :stop))").unwrap();
        let node = classify_tree(&raw).unwrap();
        assert_eq!(node.condition().unwrap().variable_name(), Some("ok"));
        assert_eq!(node.if_branches().len(), 2);

        let raw = parse_sexp("(if (lvar :ok) (send nil :go) nil)").unwrap();
        let node = classify_tree(&raw).unwrap();
        assert_eq!(node.if_branches().len(), 1);
    }

    #[test]
    fn case_structure() {
        let raw = parse_sexp(
            "(case (lvar :x) (when (int 1) (sym :one)) (when (int 2) (int 3) (sym :few)) (sym :many))",
        )
        .unwrap();
        let case = classify_tree(&raw).unwrap();
        assert_eq!(case.condition().unwrap().role(), Role::LVar);
        let whens = case.case_whens();
        assert_eq!(whens.len(), 2);
        assert_eq!(whens[0].when_condition_list().len(), 1);
        assert_eq!(whens[1].when_condition_list().len(), 2);
        assert_eq!(whens[1].when_body().unwrap().role(), Role::Sym);
        assert_eq!(case.case_else().unwrap().role(), Role::Sym);
    }

    #[test]
    fn case_without_else() {
        let raw = parse_sexp("(case (lvar :x) (when (int 1) (sym :one)) nil)").unwrap();
        let case = classify_tree(&raw).unwrap();
        assert!(case.case_else().is_none());
    }

    #[test]
    fn block_surface() {
        let raw =
            parse_sexp("(block (send (lvar :list) :map) (args (procarg0 (arg :x))) (lvar :x))")
                .unwrap();
        let block = classify_tree(&raw).unwrap();
        assert_eq!(block.block_call().unwrap().method_name(), Some("map"));
        assert_eq!(block.block_parameter_names(), vec!["x"]);
        assert!(!block.is_without_block_arguments());
        assert_eq!(block.block_body().unwrap().role(), Role::LVar);
    }

    #[test]
    fn argless_block() {
        let raw = parse_sexp("(block (send (int 3) :times) (args) (send nil :tick))").unwrap();
        let block = classify_tree(&raw).unwrap();
        assert!(block.is_without_block_arguments());
        assert!(block.block_parameter_names().is_empty());
    }

    #[test]
    fn boolean_operands() {
        let raw = parse_sexp("(and (lvar :a) (or (lvar :b) (lvar :c)))").unwrap();
        let node = classify_tree(&raw).unwrap();
        let ops = node.boolean_operands();
        assert_eq!(ops.len(), 2);
        assert_eq!(ops[1].boolean_operands().len(), 2);
    }
}
