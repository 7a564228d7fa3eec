// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Accessors for variables, symbols, and assignment forms.

use crate::node::Node;
use crate::role::Role;

impl<'t> Node<'t> {
    /// The name of a variable reference or assignment target, with its sigil
    /// (`@x`, `@@count`, `$stderr`), or of a symbol literal.
    pub fn variable_name(&self) -> Option<&'t str> {
        match self.role() {
            Role::IVar
            | Role::IVAsgn
            | Role::CVar
            | Role::CVAsgn
            | Role::GVar
            | Role::GVAsgn
            | Role::LVar
            | Role::LVAsgn
            | Role::Sym
            | Role::BackRef
            | Role::ShadowArg => self.child_sym(0),
            _ => None,
        }
    }

    pub fn is_variable_assignment(&self) -> bool {
        matches!(
            self.role(),
            Role::IVAsgn | Role::CVAsgn | Role::GVAsgn | Role::LVAsgn
        )
    }

    /// The assigned expression. Absent for the bare-target form that appears
    /// inside op-assignments and destructuring.
    pub fn assigned_value(&self) -> Option<Node<'t>> {
        if self.is_variable_assignment() {
            self.child_node(1)
        } else {
            None
        }
    }

    /// Instance-state references: `@x` reads and writes.
    pub fn is_instance_variable(&self) -> bool {
        matches!(self.role(), Role::IVar | Role::IVAsgn)
    }

    /// Class-state references: `@@x` reads and writes.
    pub fn is_class_variable(&self) -> bool {
        matches!(self.role(), Role::CVar | Role::CVAsgn)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::node::classify_tree;
    use snag_core::parse_sexp;

    #[test]
    fn names_keep_sigils() {
        for (src, name) in [
            ("(ivar :@x)", "@x"),
            ("(ivasgn :@x (int 1))", "@x"),
            ("(cvar :@@count)", "@@count"),
            ("(gvar :$stderr)", "$stderr"),
            ("(lvar :x)", "x"),
            ("(sym :flag)", "flag"),
        ] {
            let raw = parse_sexp(src).unwrap();
            assert_eq!(classify_tree(&raw).unwrap().variable_name(), Some(name));
        }
    }

    #[test]
    fn assignment_value() {
        let raw = parse_sexp("(lvasgn :x (int 3))").unwrap();
        let asgn = classify_tree(&raw).unwrap();
        assert!(asgn.is_variable_assignment());
        assert_eq!(asgn.assigned_value().unwrap().role(), Role::Int);

        // bare target inside op-assignment has no value child
        let raw = parse_sexp("(ivasgn :@x)").unwrap();
        assert!(classify_tree(&raw).unwrap().assigned_value().is_none());
    }

    #[test]
    fn state_queries() {
        let ivar = parse_sexp("(ivasgn :@x (int 1))").unwrap();
        assert!(classify_tree(&ivar).unwrap().is_instance_variable());
        let cvar = parse_sexp("(cvar :@@x)").unwrap();
        assert!(classify_tree(&cvar).unwrap().is_class_variable());
        let lvar = parse_sexp("(lvar :x)").unwrap();
        assert!(!classify_tree(&lvar).unwrap().is_instance_variable());
    }
}
