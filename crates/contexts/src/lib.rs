// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! The code-context tree.
//!
//! An analysis reasons about *contexts*, not raw nodes: the Root of a source,
//! the modules and classes it opens, the methods they define, and the blocks
//! inside those methods. Contexts live in an arena ([`ContextArena`]) and
//! refer to each other by [`ContextId`], so the tree has parent and child
//! links without ownership cycles. Arena order is pre-order, which is the
//! order detectors visit.

mod arena;
mod builder;
mod context;
mod refs;

pub use arena::{ContextArena, ContextId};
pub use builder::build_contexts;
pub use context::{Context, ContextKind, Visibility};
pub use refs::count_self_refs;
