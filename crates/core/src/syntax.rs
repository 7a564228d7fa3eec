// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! The parsed-syntax interchange surface.
//!
//! The parser collaborator produces whitequark-parser style trees: every node
//! carries a tag naming its syntactic shape and an ordered sequence of
//! children, where a child is either another node or a scalar atom (symbol,
//! string, integer, float, or nil). The engine consumes these trees as-is;
//! classification into semantic roles happens downstream in `snag-ast`.

/// A single tagged node in the parsed tree.
///
/// `line` is the 1-based source line of the construct when the producer knows
/// it. `leading_comment` is the comment block immediately preceding the
/// construct; it feeds comment-directive configuration and the
/// documentation-related detectors.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxNode {
    pub tag: String,
    pub children: Vec<Element>,
    pub line: Option<usize>,
    pub leading_comment: Option<String>,
}

/// A child slot of a [`SyntaxNode`].
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Node(SyntaxNode),
    Sym(String),
    Str(String),
    Int(i64),
    Float(f64),
    Nil,
}

impl SyntaxNode {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            children: Vec::new(),
            line: None,
            leading_comment: None,
        }
    }

    /// The child at `index`, if present.
    pub fn child(&self, index: usize) -> Option<&Element> {
        self.children.get(index)
    }

    /// The child at `index` when it is a node.
    pub fn child_node(&self, index: usize) -> Option<&SyntaxNode> {
        self.child(index).and_then(Element::as_node)
    }

    /// The child at `index` when it is a symbol atom.
    pub fn child_sym(&self, index: usize) -> Option<&str> {
        self.child(index).and_then(Element::as_sym)
    }

    /// All node children, skipping scalar atoms.
    pub fn node_children(&self) -> impl Iterator<Item = &SyntaxNode> {
        self.children.iter().filter_map(Element::as_node)
    }
}

impl Element {
    pub fn as_node(&self) -> Option<&SyntaxNode> {
        match self {
            Element::Node(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_sym(&self) -> Option<&str> {
        match self {
            Element::Sym(name) => Some(name),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Element::Str(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Element::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Element::Nil)
    }
}
