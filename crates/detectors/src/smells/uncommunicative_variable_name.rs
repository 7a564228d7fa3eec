// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::detector::{DetectorContext, SmellDetector, context_kinds};
use crate::scan::method_local;
use crate::smells::name_checks::{ACCEPT_KEY, NameChecker, REJECT_KEY, value_list};
use bit_set::BitSet;
use indexmap::IndexMap;
use snag_config::ConfigMap;
use snag_contexts::ContextKind;
use snag_core::Warning;

/// Local and instance variable names that say nothing. Sigils are stripped
/// before judging, so `@x` is as bad as `x`.
///
/// Method contexts judge the assignments in their bodies; module and class
/// contexts judge assignments at their own level only, so nothing is
/// reported twice.
pub struct UncommunicativeVariableName;

impl SmellDetector for UncommunicativeVariableName {
    fn smell_class(&self) -> &'static str {
        "UncommunicativeName"
    }

    fn smell_subclass(&self) -> &'static str {
        "UncommunicativeVariableName"
    }

    fn defaults(&self) -> ConfigMap {
        let mut map = ConfigMap::default();
        map.insert(REJECT_KEY.into(), value_list(&["/^.$/", "/[0-9]$/", "/[A-Z]/"]));
        map.insert(ACCEPT_KEY.into(), value_list(&["/^_/"]));
        map
    }

    fn potential_contexts(&self) -> BitSet {
        context_kinds(&[ContextKind::Method, ContextKind::Module, ContextKind::Class])
    }

    fn examine(&self, ctx: &DetectorContext<'_, '_>) -> anyhow::Result<Vec<Warning>> {
        let Some(node) = ctx.context.defining_node() else {
            return Ok(Vec::new());
        };
        let checker = NameChecker::from_config(ctx.config)?;
        let roots = if ctx.context.kind() == ContextKind::Method {
            node.body_nodes()
        } else {
            node.module_body_nodes()
        };
        let mut flagged: IndexMap<&str, Vec<usize>> = IndexMap::new();
        for node in method_local(roots) {
            if !node.is_variable_assignment() {
                continue;
            }
            let Some(name) = node.variable_name() else {
                continue;
            };
            if checker.bad_name(name.trim_start_matches('@')) {
                flagged.entry(name).or_default().extend(node.line());
            }
        }
        let warnings = flagged
            .into_iter()
            .map(|(name, lines)| {
                self.smell(ctx, format!("has the variable name '{name}'"))
                    .with_parameter("name", name)
                    .with_lines(lines)
            })
            .collect();
        Ok(warnings)
    }
}
