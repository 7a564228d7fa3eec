// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Iterators inside iterators: each level multiplies the reader's working
//! set. Blocks without arguments don't count (they are grouping, not
//! iteration), and calls named in `ignore_iterators` are transparent.

use crate::detector::{DetectorContext, SmellDetector, context_kinds};
use crate::smells::name_checks::value_list;
use bit_set::BitSet;
use serde_yaml::Value;
use snag_ast::{Node, Role};
use snag_config::ConfigMap;
use snag_contexts::ContextKind;
use snag_core::Warning;

pub struct NestedIterators;

const MAX_NESTING_KEY: &str = "max_allowed_nesting";
const IGNORE_KEY: &str = "ignore_iterators";
const DEFAULT_MAX_NESTING: usize = 1;

impl SmellDetector for NestedIterators {
    fn smell_class(&self) -> &'static str {
        "Complexity"
    }

    fn smell_subclass(&self) -> &'static str {
        "NestedIterators"
    }

    fn defaults(&self) -> ConfigMap {
        let mut map = ConfigMap::default();
        map.insert(MAX_NESTING_KEY.into(), Value::from(DEFAULT_MAX_NESTING as u64));
        map.insert(IGNORE_KEY.into(), value_list(&["tap"]));
        map
    }

    fn potential_contexts(&self) -> BitSet {
        context_kinds(&[ContextKind::Method])
    }

    fn examine(&self, ctx: &DetectorContext<'_, '_>) -> anyhow::Result<Vec<Warning>> {
        let Some(def) = ctx.context.defining_node() else {
            return Ok(Vec::new());
        };
        let max_nesting = ctx.config.usize_param(MAX_NESTING_KEY, DEFAULT_MAX_NESTING);
        let ignored = ignored_iterators(ctx);
        let mut deepest = Deepest::default();
        for node in def.body_nodes() {
            descend(node, 0, &ignored, &mut deepest);
        }
        if deepest.depth <= max_nesting {
            return Ok(Vec::new());
        }
        let mut warning = self
            .smell(
                ctx,
                format!("contains iterators nested {} deep", deepest.depth),
            )
            .with_parameter("depth", deepest.depth as u64);
        if let Some(line) = deepest.line {
            warning = warning.with_lines([line]);
        }
        Ok(vec![warning])
    }
}

#[derive(Default)]
struct Deepest {
    depth: usize,
    line: Option<usize>,
}

fn ignored_iterators(ctx: &DetectorContext<'_, '_>) -> Vec<String> {
    ctx.config
        .param(IGNORE_KEY)
        .and_then(Value::as_sequence)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn counts_as_iterator(node: Node<'_>, ignored: &[String]) -> bool {
    if node.is_without_block_arguments() {
        return false;
    }
    let name = node.block_call().and_then(|call| call.method_name());
    !name.is_some_and(|name| ignored.iter().any(|ignored| ignored == name))
}

fn descend(node: Node<'_>, depth: usize, ignored: &[String], deepest: &mut Deepest) {
    if node.role().is_scope_boundary() {
        return;
    }
    let mut next = depth;
    if matches!(node.role(), Role::Block | Role::NumBlock) && counts_as_iterator(node, ignored) {
        next += 1;
        if next > deepest.depth {
            deepest.depth = next;
            deepest.line = node.line();
        }
    }
    for child in node.children() {
        descend(child, next, ignored, deepest);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::examine;

    const NESTED: &str = "(def :go (args) (block (send (lvar :rows) :each) (args (procarg0 (arg :row))) (block (send (lvar :row) :each) (args (procarg0 (arg :cell))) (send nil :use (lvar :cell)))))";

    #[test]
    fn two_deep_smells() {
        let warnings = examine(Box::new(NestedIterators), NESTED);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].message(), "contains iterators nested 2 deep");
        assert_eq!(warnings[0].parameters()["depth"].as_u64(), Some(2));
    }

    #[test]
    fn single_iterator_is_fine() {
        let warnings = examine(
            Box::new(NestedIterators),
            "(def :go (args) (block (send (lvar :xs) :each) (args (procarg0 (arg :x))) (send nil :use (lvar :x))))",
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn argless_blocks_do_not_nest() {
        // xs.each { |x| lock.synchronize { use(x) } }
        let warnings = examine(
            Box::new(NestedIterators),
            "(def :go (args) (block (send (lvar :xs) :each) (args (procarg0 (arg :x))) (block (send (lvar :lock) :synchronize) (args) (send nil :use (lvar :x)))))",
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn ignored_iterators_are_transparent() {
        // xs.each { |x| x.tap { |y| use(y) } } -- tap is ignored
        let warnings = examine(
            Box::new(NestedIterators),
            "(def :go (args) (block (send (lvar :xs) :each) (args (procarg0 (arg :x))) (block (send (lvar :x) :tap) (args (procarg0 (arg :y))) (send nil :use (lvar :y)))))",
        );
        assert!(warnings.is_empty());
    }
}
