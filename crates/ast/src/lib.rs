// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Role classification and navigation over parsed Ruby syntax.
//!
//! A raw [`SyntaxNode`](snag_core::SyntaxNode) carries only a tag and
//! children; this crate attaches a [`Role`] drawn from a closed set and
//! exposes the semantic accessors each role defines (method names,
//! parameters, receivers, bodies). Classification is a cheap borrow wrapper:
//! nothing is copied out of the tree.
//!
//! The accessors are total over [`Node`]: asked of a node whose role does not
//! define them, they answer `None` or an empty sequence. Op-assignment roles
//! in particular answer the send surface with absent values rather than
//! mis-reading their differently shaped children.

mod args;
mod control;
mod definitions;
mod modules;
mod node;
mod role;
mod send;
mod variables;
mod walk;

pub use args::Components;
pub use node::{Node, classify_tree};
pub use role::Role;
pub use walk::{Event, Walker};
