// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Statement counting for method length.
//!
//! A control structure is itself one statement, and each statement of each
//! of its branch bodies counts on top of that. Nested definitions count as
//! a single statement; their insides belong to their own context.

use crate::detector::{DetectorContext, SmellDetector, context_kinds};
use bit_set::BitSet;
use serde_yaml::Value;
use snag_ast::{Node, Role};
use snag_config::ConfigMap;
use snag_contexts::ContextKind;
use snag_core::Warning;

pub struct TooManyStatements;

const MAX_STATEMENTS_KEY: &str = "max_statements";
const DEFAULT_MAX_STATEMENTS: usize = 5;

impl SmellDetector for TooManyStatements {
    fn smell_class(&self) -> &'static str {
        "LongMethod"
    }

    fn smell_subclass(&self) -> &'static str {
        "TooManyStatements"
    }

    fn defaults(&self) -> ConfigMap {
        let mut map = ConfigMap::default();
        map.insert(
            MAX_STATEMENTS_KEY.into(),
            Value::from(DEFAULT_MAX_STATEMENTS as u64),
        );
        map
    }

    fn potential_contexts(&self) -> BitSet {
        context_kinds(&[ContextKind::Method])
    }

    fn examine(&self, ctx: &DetectorContext<'_, '_>) -> anyhow::Result<Vec<Warning>> {
        let Some(def) = ctx.context.defining_node() else {
            return Ok(Vec::new());
        };
        let max_statements = ctx
            .config
            .usize_param(MAX_STATEMENTS_KEY, DEFAULT_MAX_STATEMENTS);
        let count = count_statements(&def.body_nodes());
        if count <= max_statements {
            return Ok(Vec::new());
        }
        Ok(vec![
            self.smell(ctx, format!("has approx {count} statements"))
                .with_parameter("count", count as u64),
        ])
    }
}

fn count_statements(nodes: &[Node<'_>]) -> usize {
    nodes.iter().map(|node| statement(*node)).sum()
}

/// One statement plus the statements of any branch bodies it carries.
fn statement(node: Node<'_>) -> usize {
    match node.role() {
        Role::Begin | Role::KwBegin => {
            let children: Vec<_> = node.children().collect();
            count_statements(&children)
        }
        Role::If => 1 + node.if_branches().iter().map(|branch| group(*branch)).sum::<usize>(),
        Role::Case => {
            let whens: usize = node
                .case_whens()
                .iter()
                .filter_map(|when| when.when_body())
                .map(group)
                .sum();
            let tail = node.case_else().map_or(0, group);
            1 + whens + tail
        }
        Role::While | Role::Until | Role::WhilePost | Role::UntilPost => {
            1 + node.child_node(1).map_or(0, group)
        }
        Role::For => 1 + node.child_node(2).map_or(0, group),
        Role::Block | Role::NumBlock => 1 + node.block_body().map_or(0, group),
        Role::Rescue => {
            let body = node.child_node(0).map_or(0, group);
            let handlers: usize = node
                .children()
                .filter(|child| child.role() == Role::Resbody)
                .filter_map(|resbody| resbody.child_node(2))
                .map(group)
                .sum();
            body + handlers
        }
        Role::Ensure => {
            node.child_node(0).map_or(0, group) + node.child_node(1).map_or(0, group)
        }
        _ => 1,
    }
}

/// A branch body treated as a statement list.
fn group(node: Node<'_>) -> usize {
    match node.role() {
        Role::Begin | Role::KwBegin => {
            let children: Vec<_> = node.children().collect();
            count_statements(&children)
        }
        _ => statement(node),
    }
}
