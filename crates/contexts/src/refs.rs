// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! The reference collector.
//!
//! Counts syntactic references inside a method body that imply dependence on
//! instance state: explicit `self`, instance-variable reads and writes,
//! sends with no explicit receiver, and `super`. Visibility modifiers and
//! attribute-writer macros address the open module, not the instance, so
//! they are not counted. Nested scopes (methods, modules, singleton-class
//! openers) own their references and contribute nothing to the enclosing
//! method.

use snag_ast::{Node, Role};

pub fn count_self_refs<'t>(body: impl IntoIterator<Item = Node<'t>>) -> usize {
    let mut count = 0;
    let mut stack: Vec<Node<'t>> = body.into_iter().collect();
    while let Some(node) = stack.pop() {
        if node.role().is_scope_boundary() {
            continue;
        }
        match node.role() {
            Role::Self_ | Role::Super | Role::ZSuper => count += 1,
            Role::IVar | Role::IVAsgn => count += 1,
            Role::Send
                if node.receiver().is_none()
                    && !node.is_visibility_modifier()
                    && !node.is_attribute_writer() =>
            {
                count += 1;
            }
            _ => {}
        }
        stack.extend(node.children());
    }
    count
}

#[cfg(test)]
mod test {
    use super::*;
    use snag_ast::classify_tree;
    use snag_core::parse_sexp;

    fn refs_in(src: &str) -> usize {
        let raw = parse_sexp(src).unwrap();
        let node = classify_tree(&raw).unwrap();
        count_self_refs([node])
    }

    #[test]
    fn instance_variable_write_counts() {
        assert_eq!(refs_in("(ivasgn :@x (int 1))"), 1);
        assert_eq!(refs_in("(ivar :@x)"), 1);
    }

    #[test]
    fn implicit_receiver_send_counts() {
        assert_eq!(refs_in("(send nil :helper)"), 1);
        // explicit receiver does not
        assert_eq!(refs_in("(send (lvar :other) :helper)"), 0);
        // explicit self receiver counts once, through the self node
        assert_eq!(refs_in("(send (self) :helper)"), 1);
    }

    #[test]
    fn super_counts() {
        assert_eq!(refs_in("(zsuper)"), 1);
        assert_eq!(refs_in("(super (lvar :x))"), 1);
    }

    #[test]
    fn visibility_and_attribute_macros_do_not_count() {
        assert_eq!(refs_in("(send nil :private)"), 0);
        assert_eq!(refs_in("(send nil :attr_writer (sym :x))"), 0);
        // attr_reader is an ordinary implicit-receiver send
        assert_eq!(refs_in("(send nil :do_work)"), 1);
    }

    #[test]
    fn references_nest_through_expressions() {
        // @a + @b via an operator send with explicit receiver
        assert_eq!(refs_in("(send (ivar :@a) :+ (ivar :@b))"), 2);
        // implicit send whose argument reads an ivar
        assert_eq!(refs_in("(send nil :log (ivar :@state))"), 2);
        // op-assignment on an ivar counts the target write
        assert_eq!(refs_in("(op-asgn (ivasgn :@x) :+ (int 1))"), 1);
    }

    #[test]
    fn nested_scopes_do_not_leak() {
        assert_eq!(refs_in("(def :inner (args) (ivar :@x))"), 0);
        assert_eq!(refs_in("(defs (self) :inner (args) (ivar :@x))"), 0);
        assert_eq!(refs_in("(class (const nil :C) nil (ivar :@x))"), 0);
        // blocks are not scope boundaries: the ivar belongs to the method
        assert_eq!(
            refs_in("(block (send (lvar :xs) :each) (args (procarg0 (arg :x))) (ivar :@sum))"),
            1
        );
    }
}
