// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! A single code context.

use crate::arena::ContextId;
use snag_ast::Node;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextKind {
    Root,
    Module,
    Class,
    Method,
    Block,
}

impl ContextKind {
    /// Stable bit index for kind sets (detector pre-filtering).
    pub fn bit(self) -> usize {
        match self {
            ContextKind::Root => 0,
            ContextKind::Module => 1,
            ContextKind::Class => 2,
            ContextKind::Method => 3,
            ContextKind::Block => 4,
        }
    }
}

/// Method visibility within its defining module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Public,
    Private,
    Protected,
}

/// A node of the context tree.
///
/// The defining syntax node is kept so detectors can inspect bodies; the
/// summary fields (`self_refs`, `singleton`, `visibility`) are computed once
/// at build time.
#[derive(Debug, Clone)]
pub struct Context<'t> {
    pub(crate) kind: ContextKind,
    pub(crate) name: String,
    pub(crate) full_name: String,
    pub(crate) parent: Option<ContextId>,
    pub(crate) children: Vec<ContextId>,
    pub(crate) defining: Option<Node<'t>>,
    pub(crate) singleton: bool,
    pub(crate) self_refs: usize,
    pub(crate) visibility: Visibility,
}

impl<'t> Context<'t> {
    pub(crate) fn root() -> Self {
        Self {
            kind: ContextKind::Root,
            name: String::new(),
            full_name: String::new(),
            parent: None,
            children: Vec::new(),
            defining: None,
            singleton: false,
            self_refs: 0,
            visibility: Visibility::Public,
        }
    }

    pub fn kind(&self) -> ContextKind {
        self.kind
    }

    /// The context's own name: `C` for a class, `foo` or `self.foo` for a
    /// method. Empty for Root and for blocks.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The qualified name from Root: `M::C#foo`. Blocks answer with their
    /// enclosing context's qualified name.
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn parent(&self) -> Option<ContextId> {
        self.parent
    }

    pub fn children(&self) -> &[ContextId] {
        &self.children
    }

    /// The syntax node that opened this context. Absent for Root.
    pub fn defining_node(&self) -> Option<Node<'t>> {
        self.defining
    }

    pub fn line(&self) -> Option<usize> {
        self.defining.and_then(|node| node.line())
    }

    pub fn leading_comment(&self) -> Option<&'t str> {
        self.defining.and_then(|node| node.leading_comment())
    }

    /// Whether a method context is defined on the singleton (`def self.x`,
    /// or `def x` inside `class << self`).
    pub fn is_singleton(&self) -> bool {
        self.singleton
    }

    /// Syntactic references implying dependence on instance state. Fixed at
    /// zero for singleton methods.
    pub fn self_refs(&self) -> usize {
        self.self_refs
    }

    pub fn depends_on_instance(&self) -> bool {
        self.self_refs > 0
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_non_public(&self) -> bool {
        self.visibility != Visibility::Public
    }
}
