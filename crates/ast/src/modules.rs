// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Accessors for module and class definitions, constants, and
//! module-defining constant assignments (`Widget = Struct.new(:a)`).

use crate::node::Node;
use crate::role::Role;

impl<'t> Node<'t> {
    /// The dotted path of a constant reference: `A::B`, `::C` when rooted.
    pub fn const_name(&self) -> Option<String> {
        if self.role() != Role::Const {
            return None;
        }
        let simple = self.const_simple_name()?;
        match self.child_node(0) {
            None => Some(simple.to_string()),
            Some(scope) if scope.role() == Role::Cbase => Some(format!("::{simple}")),
            Some(scope) => {
                let outer = scope.const_name()?;
                Some(format!("{outer}::{simple}"))
            }
        }
    }

    /// The last segment of a constant reference.
    pub fn const_simple_name(&self) -> Option<&'t str> {
        if self.role() == Role::Const {
            self.child_sym(1)
        } else {
            None
        }
    }

    /// The declared name of a module, class, or module-defining constant
    /// assignment.
    pub fn module_name(&self) -> Option<String> {
        match self.role() {
            Role::Module | Role::Class => self.child_node(0)?.const_name(),
            Role::CAsgn => self.casgn_name().map(str::to_string),
            _ => None,
        }
    }

    /// The last segment of the declared name.
    pub fn module_simple_name(&self) -> Option<&'t str> {
        match self.role() {
            Role::Module | Role::Class => self.child_node(0)?.const_simple_name(),
            Role::CAsgn => self.casgn_name(),
            _ => None,
        }
    }

    /// Qualified module name: `outer::name`.
    pub fn module_full_name(&self, outer: &str) -> Option<String> {
        let name = self.module_name()?;
        if outer.is_empty() {
            Some(name)
        } else {
            Some(format!("{outer}::{name}"))
        }
    }

    /// The superclass expression of a class definition.
    pub fn superclass(&self) -> Option<Node<'t>> {
        if self.role() == Role::Class {
            self.child_node(1)
        } else {
            None
        }
    }

    /// The assigned constant's name.
    pub fn casgn_name(&self) -> Option<&'t str> {
        if self.role() == Role::CAsgn {
            self.child_sym(1)
        } else {
            None
        }
    }

    /// The assigned value expression.
    pub fn casgn_value(&self) -> Option<Node<'t>> {
        if self.role() == Role::CAsgn {
            self.child_node(2)
        } else {
            None
        }
    }

    /// Body statements of a module-like opener, with any grouping `begin`
    /// unwrapped. For a module-defining constant assignment this is the body
    /// of the attached block, when there is one.
    pub fn module_body_nodes(&self) -> Vec<Node<'t>> {
        let body = match self.role() {
            Role::Module | Role::SClass => self.child_node(1),
            Role::Class => self.child_node(2),
            Role::CAsgn => self.casgn_value().and_then(|value| value.block_body()),
            _ => None,
        };
        match body {
            None => Vec::new(),
            Some(body) if matches!(body.role(), Role::Begin | Role::KwBegin) => {
                body.children().collect()
            }
            Some(body) => vec![body],
        }
    }

    /// Whether a constant assignment defines a module-like thing: its value
    /// is a class-constructor call, directly or through a block whose call
    /// is one (`C = Class.new { ... }`).
    pub fn defines_module(&self) -> bool {
        let Some(value) = self.casgn_value() else {
            return false;
        };
        if value.is_module_creation_call() {
            return true;
        }
        value.role() == Role::Block
            && value
                .block_call()
                .is_some_and(|call| call.is_module_creation_call())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::node::classify_tree;
    use snag_core::parse_sexp;

    #[test]
    fn const_paths() {
        let raw = parse_sexp("(const (const nil :A) :B)").unwrap();
        let node = classify_tree(&raw).unwrap();
        assert_eq!(node.const_name(), Some("A::B".into()));
        assert_eq!(node.const_simple_name(), Some("B"));

        let raw = parse_sexp("(const (cbase) :Top)").unwrap();
        let node = classify_tree(&raw).unwrap();
        assert_eq!(node.const_name(), Some("::Top".into()));
    }

    #[test]
    fn module_and_class_names() {
        let raw = parse_sexp("(module (const nil :M) nil)").unwrap();
        let module = classify_tree(&raw).unwrap();
        assert_eq!(module.module_name(), Some("M".into()));
        assert_eq!(module.module_full_name(""), Some("M".into()));

        let raw = parse_sexp("(class (const (const nil :A) :C) (const nil :Base) nil)").unwrap();
        let class = classify_tree(&raw).unwrap();
        assert_eq!(class.module_name(), Some("A::C".into()));
        assert_eq!(class.module_simple_name(), Some("C"));
        assert_eq!(class.module_full_name("Outer"), Some("Outer::A::C".into()));
        assert_eq!(
            class.superclass().and_then(|s| s.const_name()),
            Some("Base".into())
        );
    }

    #[test]
    fn struct_assignment_defines_module() {
        let raw = parse_sexp("(casgn nil :Widget (send (const nil :Struct) :new (sym :a)))")
            .unwrap();
        let casgn = classify_tree(&raw).unwrap();
        assert!(casgn.defines_module());
        assert_eq!(casgn.module_name(), Some("Widget".into()));
    }

    #[test]
    fn class_new_with_block_defines_module() {
        let raw = parse_sexp(
            "(casgn nil :C (block (send (const nil :Class) :new) (args) (def :go (args) nil)))",
        )
        .unwrap();
        let casgn = classify_tree(&raw).unwrap();
        assert!(casgn.defines_module());
    }

    #[test]
    fn module_body_nodes_unwrap_begin() {
        let raw = parse_sexp(
            "(class (const nil :C) nil (begin (send nil :attr_reader (sym :a)) (def :go (args) nil)))",
        )
        .unwrap();
        let class = classify_tree(&raw).unwrap();
        assert_eq!(class.module_body_nodes().len(), 2);

        let raw = parse_sexp("(module (const nil :M) (def :go (args) nil))").unwrap();
        let module = classify_tree(&raw).unwrap();
        assert_eq!(module.module_body_nodes().len(), 1);

        let raw = parse_sexp("(module (const nil :M) nil)").unwrap();
        let module = classify_tree(&raw).unwrap();
        assert!(module.module_body_nodes().is_empty());
    }

    #[test]
    fn ordinary_assignment_does_not() {
        let raw = parse_sexp("(casgn nil :LIMIT (int 3))").unwrap();
        assert!(!classify_tree(&raw).unwrap().defines_module());

        let raw = parse_sexp("(casgn nil :W (send (const nil :Widget) :new))").unwrap();
        assert!(!classify_tree(&raw).unwrap().defines_module());
    }
}
