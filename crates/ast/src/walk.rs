// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Depth-first traversal as an enter/leave event stream.
//!
//! The context builder consumes these events to open and close code contexts
//! in step with lexical nesting. Enter events arrive in pre-order; every
//! Enter is matched by exactly one Leave once the node's subtree is done.

use crate::node::Node;

#[derive(Debug, Clone, Copy)]
pub enum Event<'t> {
    Enter(Node<'t>),
    Leave(Node<'t>),
}

pub struct Walker<'t> {
    pending_root: Option<Node<'t>>,
    stack: Vec<Frame<'t>>,
}

struct Frame<'t> {
    node: Node<'t>,
    children: Vec<Node<'t>>,
    next: usize,
}

impl<'t> Walker<'t> {
    pub fn new(root: Node<'t>) -> Self {
        Self {
            pending_root: Some(root),
            stack: Vec::new(),
        }
    }
}

impl<'t> Frame<'t> {
    fn open(node: Node<'t>) -> Self {
        Self {
            node,
            children: node.children().collect(),
            next: 0,
        }
    }
}

impl<'t> Iterator for Walker<'t> {
    type Item = Event<'t>;

    fn next(&mut self) -> Option<Event<'t>> {
        if let Some(root) = self.pending_root.take() {
            self.stack.push(Frame::open(root));
            return Some(Event::Enter(root));
        }
        let top = self.stack.last_mut()?;
        if top.next < top.children.len() {
            let child = top.children[top.next];
            top.next += 1;
            self.stack.push(Frame::open(child));
            Some(Event::Enter(child))
        } else {
            let frame = self.stack.pop()?;
            Some(Event::Leave(frame.node))
        }
    }
}
