// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Builds the context tree from the walker's event stream.
//!
//! A stack of open scopes mirrors lexical nesting: module and class openers
//! push Module/Class contexts, method definitions push Method contexts,
//! blocks push Block contexts, and each is popped when its node is left.
//! Singleton-class openers (`class << self`) push a marker frame only; a
//! `def` whose nearest open scope is such a marker becomes a singleton
//! method. Bare visibility modifiers flip the default visibility for
//! methods defined later in the same module body; the argument form
//! (`private :helper`) retro-tags the named methods when the module closes.

use crate::arena::{ContextArena, ContextId};
use crate::context::{Context, ContextKind, Visibility};
use crate::refs::count_self_refs;
use snag_ast::{Event, Node, Role, Walker};

/// Build the context arena for one classified tree.
pub fn build_contexts(root: Node<'_>) -> ContextArena<'_> {
    let mut arena = ContextArena::new();
    let mut frames: Vec<Open<'_>> = Vec::new();

    for event in Walker::new(root) {
        match event {
            Event::Enter(node) => enter(node, &mut arena, &mut frames),
            Event::Leave(node) => {
                if frames.last().is_some_and(|frame| frame.node.same_node(&node)) {
                    if let Some(frame) = frames.pop() {
                        finalize(frame, &mut arena);
                    }
                }
            }
        }
    }
    arena
}

struct Open<'t> {
    node: Node<'t>,
    ctx: Option<ContextId>,
    /// Whether this frame is a module or class body, where visibility
    /// modifiers apply.
    module_scope: bool,
    default_visibility: Visibility,
    pending_visibility: Vec<(String, Visibility)>,
}

impl<'t> Open<'t> {
    fn new(node: Node<'t>, ctx: Option<ContextId>, module_scope: bool) -> Self {
        Self {
            node,
            ctx,
            module_scope,
            default_visibility: Visibility::Public,
            pending_visibility: Vec::new(),
        }
    }
}

fn current_ctx(frames: &[Open<'_>]) -> ContextId {
    frames
        .iter()
        .rev()
        .find_map(|frame| frame.ctx)
        .unwrap_or(ContextId::ROOT)
}

fn enter<'t>(node: Node<'t>, arena: &mut ContextArena<'t>, frames: &mut Vec<Open<'t>>) {
    let parent = current_ctx(frames);
    let outer = arena.get(parent).full_name().to_string();

    match node.role() {
        Role::Module | Role::Class => {
            let kind = if node.role() == Role::Module {
                ContextKind::Module
            } else {
                ContextKind::Class
            };
            let name = node.module_name().unwrap_or_default();
            let full_name = node.module_full_name(&outer).unwrap_or_else(|| outer.clone());
            let id = push_context(arena, parent, kind, name, full_name, node);
            frames.push(Open::new(node, Some(id), true));
        }
        Role::CAsgn if node.defines_module() => {
            let name = node.casgn_name().unwrap_or_default().to_string();
            let full_name = join_module(&outer, &name);
            let id = push_context(arena, parent, ContextKind::Module, name, full_name, node);
            frames.push(Open::new(node, Some(id), true));
        }
        Role::SClass => {
            frames.push(Open::new(node, None, false));
        }
        Role::Def => {
            let singleton = frames
                .last()
                .is_some_and(|frame| frame.node.role() == Role::SClass);
            let name = node.def_name().unwrap_or_default().to_string();
            let full_name = node
                .method_full_name(&outer)
                .unwrap_or_else(|| outer.clone());
            let self_refs = if singleton {
                0
            } else {
                count_self_refs(node.body_nodes())
            };
            let visibility = if singleton {
                Visibility::Public
            } else {
                frames
                    .last()
                    .filter(|frame| frame.module_scope)
                    .map_or(Visibility::Public, |frame| frame.default_visibility)
            };
            let id = arena.push(
                parent,
                Context {
                    kind: ContextKind::Method,
                    name,
                    full_name,
                    parent: None,
                    children: Vec::new(),
                    defining: Some(node),
                    singleton,
                    self_refs,
                    visibility,
                },
            );
            frames.push(Open::new(node, Some(id), false));
        }
        Role::Defs => {
            let receiver = node.def_receiver_name().unwrap_or("self");
            let name = format!("{receiver}.{}", node.def_name().unwrap_or_default());
            let full_name = node
                .method_full_name(&outer)
                .unwrap_or_else(|| outer.clone());
            let id = arena.push(
                parent,
                Context {
                    kind: ContextKind::Method,
                    name,
                    full_name,
                    parent: None,
                    children: Vec::new(),
                    defining: Some(node),
                    singleton: true,
                    self_refs: 0,
                    visibility: Visibility::Public,
                },
            );
            frames.push(Open::new(node, Some(id), false));
        }
        Role::Block | Role::NumBlock => {
            let id = push_context(
                arena,
                parent,
                ContextKind::Block,
                String::new(),
                outer,
                node,
            );
            frames.push(Open::new(node, Some(id), false));
        }
        Role::Send if node.is_visibility_modifier() => {
            record_visibility(node, frames);
        }
        _ => {}
    }
}

fn push_context<'t>(
    arena: &mut ContextArena<'t>,
    parent: ContextId,
    kind: ContextKind,
    name: String,
    full_name: String,
    node: Node<'t>,
) -> ContextId {
    arena.push(
        parent,
        Context {
            kind,
            name,
            full_name,
            parent: None,
            children: Vec::new(),
            defining: Some(node),
            singleton: false,
            self_refs: 0,
            visibility: Visibility::Public,
        },
    )
}

fn join_module(outer: &str, name: &str) -> String {
    if outer.is_empty() {
        name.to_string()
    } else {
        format!("{outer}::{name}")
    }
}

fn record_visibility(node: Node<'_>, frames: &mut [Open<'_>]) {
    let visibility = match node.method_name() {
        Some("private") => Visibility::Private,
        Some("protected") => Visibility::Protected,
        Some("public") => Visibility::Public,
        _ => return,
    };
    let Some(frame) = frames.last_mut() else {
        return;
    };
    if !frame.module_scope {
        return;
    }
    let named: Vec<String> = node
        .call_arguments()
        .into_iter()
        .filter(|arg| arg.role() == Role::Sym)
        .filter_map(|arg| arg.variable_name().map(str::to_string))
        .collect();
    if named.is_empty() {
        frame.default_visibility = visibility;
    } else {
        frame
            .pending_visibility
            .extend(named.into_iter().map(|name| (name, visibility)));
    }
}

fn finalize(frame: Open<'_>, arena: &mut ContextArena<'_>) {
    let Some(ctx) = frame.ctx else {
        return;
    };
    if frame.pending_visibility.is_empty() {
        return;
    }
    let children = arena.get(ctx).children().to_vec();
    for (name, visibility) in frame.pending_visibility {
        for &child in &children {
            let context = arena.get_mut(child);
            if context.kind == ContextKind::Method && !context.singleton && context.name == name {
                context.visibility = visibility;
            }
        }
    }
}
