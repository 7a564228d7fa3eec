// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Body scans shared by the detector battery.

use snag_ast::{Node, Role};

/// Pre-order collection of a body's nodes, pruning subtrees whose root role
/// the predicate rejects. A pruned node is neither yielded nor descended.
pub(crate) fn collect_nodes<'t>(
    roots: impl IntoIterator<Item = Node<'t>>,
    prune: impl Fn(Role) -> bool,
) -> Vec<Node<'t>> {
    let mut out = Vec::new();
    let mut stack: Vec<Node<'t>> = roots.into_iter().collect();
    stack.reverse();
    while let Some(node) = stack.pop() {
        if prune(node.role()) {
            continue;
        }
        out.push(node);
        let children: Vec<_> = node.children().collect();
        stack.extend(children.into_iter().rev());
    }
    out
}

/// Method-local scan: nested methods, modules, and singleton-class openers
/// own their contents; blocks stay in.
pub(crate) fn method_local<'t>(roots: impl IntoIterator<Item = Node<'t>>) -> Vec<Node<'t>> {
    collect_nodes(roots, Role::is_scope_boundary)
}

/// Module-level scan: everything inside the module including its methods,
/// but not nested modules or classes.
pub(crate) fn module_wide<'t>(roots: impl IntoIterator<Item = Node<'t>>) -> Vec<Node<'t>> {
    collect_nodes(roots, |role| {
        matches!(role, Role::Module | Role::Class | Role::SClass)
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use snag_ast::classify_tree;
    use snag_core::parse_sexp;

    #[test]
    fn method_local_prunes_nested_def() {
        let raw = parse_sexp("(begin (ivar :@a) (def :inner (args) (ivar :@b)))").unwrap();
        let root = classify_tree(&raw).unwrap();
        let nodes = method_local(root.children());
        let ivars: Vec<_> = nodes
            .iter()
            .filter_map(Node::variable_name)
            .collect();
        assert_eq!(ivars, vec!["@a"]);
    }

    #[test]
    fn module_wide_keeps_methods_but_not_nested_classes() {
        let raw = parse_sexp(
            "(begin (def :go (args) (cvar :@@a)) (class (const nil :Inner) nil (cvar :@@b)))",
        )
        .unwrap();
        let root = classify_tree(&raw).unwrap();
        let nodes = module_wide(root.children());
        let cvars: Vec<_> = nodes.iter().filter_map(Node::variable_name).collect();
        assert_eq!(cvars, vec!["@@a"]);
    }

    #[test]
    fn order_is_pre_order() {
        let raw = parse_sexp("(begin (send nil :a (int 1)) (send nil :b))").unwrap();
        let root = classify_tree(&raw).unwrap();
        let tags: Vec<_> = collect_nodes(root.children(), |_| false)
            .iter()
            .map(|n| n.role().as_tag().to_string())
            .collect();
        assert_eq!(tags, vec!["send", "int", "send"]);
    }
}
