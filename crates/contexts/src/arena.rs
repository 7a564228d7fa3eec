// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Flat storage for the context tree.

use crate::context::{Context, ContextKind};

/// Index of a context within its arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContextId(pub(crate) usize);

impl ContextId {
    pub const ROOT: ContextId = ContextId(0);

    pub fn index(self) -> usize {
        self.0
    }
}

/// Owns every context of one analysis. Contexts are appended as the builder
/// enters them, so iteration order is tree pre-order; exactly one Root exists
/// at index zero.
#[derive(Debug)]
pub struct ContextArena<'t> {
    contexts: Vec<Context<'t>>,
}

impl<'t> ContextArena<'t> {
    pub(crate) fn new() -> Self {
        Self {
            contexts: vec![Context::root()],
        }
    }

    pub(crate) fn push(&mut self, parent: ContextId, mut context: Context<'t>) -> ContextId {
        let id = ContextId(self.contexts.len());
        context.parent = Some(parent);
        self.contexts.push(context);
        self.contexts[parent.0].children.push(id);
        id
    }

    pub(crate) fn get_mut(&mut self, id: ContextId) -> &mut Context<'t> {
        &mut self.contexts[id.0]
    }

    pub fn get(&self, id: ContextId) -> &Context<'t> {
        &self.contexts[id.0]
    }

    pub fn root(&self) -> &Context<'t> {
        self.get(ContextId::ROOT)
    }

    pub fn len(&self) -> usize {
        self.contexts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }

    /// All contexts in pre-order.
    pub fn iter(&self) -> impl Iterator<Item = (ContextId, &Context<'t>)> {
        self.contexts
            .iter()
            .enumerate()
            .map(|(index, context)| (ContextId(index), context))
    }

    /// Child contexts of `id` having `kind`.
    pub fn children_of_kind(
        &self,
        id: ContextId,
        kind: ContextKind,
    ) -> impl Iterator<Item = &Context<'t>> {
        self.get(id)
            .children()
            .iter()
            .map(|&child| self.get(child))
            .filter(move |context| context.kind() == kind)
    }
}
