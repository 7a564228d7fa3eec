// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Accessors for method definitions (`def`, `defs`).

use crate::args::Components;
use crate::node::Node;
use crate::role::Role;

impl<'t> Node<'t> {
    /// The defined method's name.
    pub fn def_name(&self) -> Option<&'t str> {
        match self.role() {
            Role::Def => self.child_sym(0),
            Role::Defs => self.child_sym(1),
            _ => None,
        }
    }

    /// The singleton receiver of a `defs` node.
    pub fn def_receiver(&self) -> Option<Node<'t>> {
        if self.role() == Role::Defs {
            self.child_node(0)
        } else {
            None
        }
    }

    /// Printable name of the singleton receiver: `self` or a constant.
    pub fn def_receiver_name(&self) -> Option<&'t str> {
        let receiver = self.def_receiver()?;
        match receiver.role() {
            Role::Self_ => Some("self"),
            Role::Const => receiver.const_simple_name(),
            _ => None,
        }
    }

    /// The formal argument list node.
    pub fn def_args(&self) -> Option<Node<'t>> {
        match self.role() {
            Role::Def => self.child_node(1),
            Role::Defs => self.child_node(2),
            _ => None,
        }
    }

    /// Formal parameters as a flat sequence of argument leaves. Block
    /// arguments are filtered out, so this is also the method's argument
    /// list for arity purposes.
    pub fn parameters(&self) -> Components<'t> {
        let mut components = match self.def_args() {
            Some(args) => args.components(),
            None => Components::new(),
        };
        components.retain(|leaf| !leaf.is_block_argument());
        components
    }

    /// The body expression; `None` for an empty method.
    pub fn def_body(&self) -> Option<Node<'t>> {
        match self.role() {
            Role::Def => self.child_node(2),
            Role::Defs => self.child_node(3),
            _ => None,
        }
    }

    /// Body statements with any grouping `begin` unwrapped.
    pub fn body_nodes(&self) -> Vec<Node<'t>> {
        match self.def_body() {
            None => Vec::new(),
            Some(body) if matches!(body.role(), Role::Begin | Role::KwBegin) => {
                body.children().collect()
            }
            Some(body) => vec![body],
        }
    }

    /// Qualified method name: `outer#name` for instance methods,
    /// `outer#receiver.name` for singleton definitions.
    pub fn method_full_name(&self, outer: &str) -> Option<String> {
        let name = self.def_name()?;
        let local = match self.role() {
            Role::Def => name.to_string(),
            Role::Defs => {
                let receiver = self.def_receiver_name().unwrap_or("self");
                format!("{receiver}.{name}")
            }
            _ => return None,
        };
        if outer.is_empty() {
            Some(local)
        } else {
            Some(format!("{outer}#{local}"))
        }
    }
}
