// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Accessors for argument leaves and argument containers.

use crate::node::Node;
use crate::role::Role;
use smallvec::SmallVec;

pub type Components<'t> = SmallVec<[Node<'t>; 8]>;

impl<'t> Node<'t> {
    /// The declared name of an argument leaf. Anonymous splats (`*`, `**`)
    /// and `**nil` have none.
    pub fn argument_name(&self) -> Option<&'t str> {
        if self.role().is_argument_leaf() {
            self.child_sym(0)
        } else {
            None
        }
    }

    /// Whether the author marked the argument as deliberately unused by
    /// prefixing its name with `_`.
    pub fn is_marked_unused(&self) -> bool {
        self.argument_name().is_some_and(|name| name.starts_with('_'))
    }

    pub fn is_optional_argument(&self) -> bool {
        matches!(self.role(), Role::OptArg | Role::KwOptArg)
    }

    pub fn is_block_argument(&self) -> bool {
        self.role() == Role::BlockArg
    }

    /// A rest or keyword-rest argument declared without a name.
    pub fn is_anonymous_splat(&self) -> bool {
        matches!(self.role(), Role::RestArg | Role::KwRestArg) && self.child_sym(0).is_none()
    }

    /// The default expression of an optional argument.
    pub fn default_value(&self) -> Option<Node<'t>> {
        if self.is_optional_argument() {
            self.child_node(1)
        } else {
            None
        }
    }

    /// Flatten an argument container into its argument leaves, regardless of
    /// destructuring depth. Nested `mlhs` groups and `procarg0` wrappers
    /// contribute their leaves in declaration order; the result never
    /// contains a container.
    pub fn components(&self) -> Components<'t> {
        let mut out = Components::new();
        if self.role().is_arguments_container() {
            collect(*self, &mut out);
        }
        out
    }
}

fn collect<'t>(container: Node<'t>, out: &mut Components<'t>) {
    for child in container.children() {
        if child.role().is_arguments_container() {
            collect(child, out);
        } else if child.role().is_argument_leaf() {
            out.push(child);
        }
    }
}
