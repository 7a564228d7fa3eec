// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Accessors for message sends and the call-like roles.
//!
//! `yield` and `super` share the argument surface with ordinary sends, so
//! detectors can ask one question about any call-like node. Op-assignment
//! roles answer with absent values; their children are not send-shaped.

use crate::node::Node;
use crate::role::Role;

/// Class-constructor receivers whose `new` defines a module-like thing.
const MODULE_CREATORS: &[&str] = &["Class", "Module", "Struct"];

/// Bare sends that alter method visibility rather than doing work.
const VISIBILITY_MODIFIERS: &[&str] = &[
    "public",
    "private",
    "protected",
    "private_class_method",
    "public_class_method",
    "module_function",
];

/// Macros that declare attribute readers and writers.
const ATTRIBUTE_MACROS: &[&str] = &["attr", "attr_reader", "attr_writer", "attr_accessor"];

impl<'t> Node<'t> {
    /// The explicit receiver of a send, if any.
    pub fn receiver(&self) -> Option<Node<'t>> {
        if self.role().is_send() {
            self.child_node(0)
        } else {
            None
        }
    }

    /// The message name. `super` and `zsuper` answer the literal sentinel
    /// `super`.
    pub fn method_name(&self) -> Option<&'t str> {
        match self.role() {
            Role::Send | Role::CSend => self.child_sym(1),
            Role::Super | Role::ZSuper => Some("super"),
            _ => None,
        }
    }

    /// Actual arguments of a call-like node, in order.
    ///
    /// `children()` yields node children only; the message symbol is an atom,
    /// so the receiver (when present) is the single node to drop.
    pub fn call_arguments(&self) -> Vec<Node<'t>> {
        match self.role() {
            Role::Send | Role::CSend => {
                let receiver_nodes = usize::from(self.receiver().is_some());
                self.children().skip(receiver_nodes).collect()
            }
            Role::Super | Role::Yield => self.children().collect(),
            _ => Vec::new(),
        }
    }

    /// Names of the named actual arguments (variables, symbols, constants).
    /// Literals and compound expressions contribute nothing.
    pub fn call_argument_names(&self) -> Vec<&'t str> {
        self.call_arguments()
            .into_iter()
            .filter_map(|arg| arg.variable_name().or_else(|| arg.const_simple_name()))
            .collect()
    }

    /// Whether this send constructs an object (`anything.new`).
    pub fn is_object_creation_call(&self) -> bool {
        self.role().is_send() && self.method_name() == Some("new")
    }

    /// An object creation whose receiver is one of the built-in
    /// class constructors (`Class.new`, `Struct.new`, `Module.new`).
    pub fn is_module_creation_call(&self) -> bool {
        self.is_object_creation_call()
            && self.receiver().is_some_and(|recv| {
                recv.const_simple_name()
                    .is_some_and(|name| MODULE_CREATORS.contains(&name))
            })
    }

    /// A bare visibility modifier (`private`, `module_function`, ...).
    pub fn is_visibility_modifier(&self) -> bool {
        self.role() == Role::Send
            && self.receiver().is_none()
            && self
                .method_name()
                .is_some_and(|name| VISIBILITY_MODIFIERS.contains(&name))
    }

    /// An attribute declaration that creates a writer: `attr_writer`,
    /// `attr_accessor`, or the archaic `attr :name, true` form.
    pub fn is_attribute_writer(&self) -> bool {
        if self.role() != Role::Send || !self.has_macro_receiver() {
            return false;
        }
        match self.method_name() {
            Some("attr_writer" | "attr_accessor") => true,
            Some("attr") => self
                .call_arguments()
                .last()
                .is_some_and(|last| last.role() == Role::True),
            _ => false,
        }
    }

    /// Any of the attribute macros, reader or writer.
    pub fn is_attribute_declaration(&self) -> bool {
        self.role() == Role::Send
            && self.has_macro_receiver()
            && self
                .method_name()
                .is_some_and(|name| ATTRIBUTE_MACROS.contains(&name))
    }

    /// Macros address the open module: no receiver, or an explicit `self`.
    fn has_macro_receiver(&self) -> bool {
        match self.receiver() {
            None => true,
            Some(recv) => recv.role() == Role::Self_,
        }
    }
}
