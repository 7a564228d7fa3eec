// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! A parameter that steers a conditional couples the caller to the method's
//! internal paths.

use crate::detector::{DetectorContext, SmellDetector, context_kinds};
use crate::scan::method_local;
use bit_set::BitSet;
use indexmap::IndexMap;
use snag_ast::{Node, Role};
use snag_contexts::ContextKind;
use snag_core::Warning;

pub struct ControlParameter;

impl SmellDetector for ControlParameter {
    fn smell_class(&self) -> &'static str {
        "ControlCouple"
    }

    fn smell_subclass(&self) -> &'static str {
        "ControlParameter"
    }

    fn potential_contexts(&self) -> BitSet {
        context_kinds(&[ContextKind::Method])
    }

    fn examine(&self, ctx: &DetectorContext<'_, '_>) -> anyhow::Result<Vec<Warning>> {
        let Some(def) = ctx.context.defining_node() else {
            return Ok(Vec::new());
        };
        let params: Vec<&str> = def
            .parameters()
            .iter()
            .filter_map(Node::argument_name)
            .collect();
        if params.is_empty() {
            return Ok(Vec::new());
        }
        let mut hits: IndexMap<&str, Vec<usize>> = IndexMap::new();
        for node in method_local(def.body_nodes()) {
            if !matches!(node.role(), Role::If | Role::Case) {
                continue;
            }
            let Some(condition) = node.condition() else {
                continue;
            };
            for tested in method_local([condition]) {
                if tested.role() != Role::LVar {
                    continue;
                }
                let Some(name) = tested.variable_name() else {
                    continue;
                };
                if let Some(&param) = params.iter().find(|&&param| param == name) {
                    hits.entry(param)
                        .or_default()
                        .extend(tested.line());
                }
            }
        }
        let warnings = hits
            .into_iter()
            .map(|(name, lines)| {
                self.smell(ctx, format!("is controlled by argument '{name}'"))
                    .with_parameter("parameter", name)
                    .with_lines(lines)
            })
            .collect();
        Ok(warnings)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::examine;

    #[test]
    fn parameter_in_if_condition() {
        // def go(flag); if flag then a else b end; end
        let warnings = examine(
            Box::new(ControlParameter),
            "(def :go (args (arg :flag)) (if (lvar :flag) (send nil :a) (send nil :b)))",
        );
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].message(), "is controlled by argument 'flag'");
    }

    #[test]
    fn parameter_in_case_condition() {
        let warnings = examine(
            Box::new(ControlParameter),
            "(def :go (args (arg :mode)) (case (lvar :mode) (when (sym :fast) (send nil :run)) nil))",
        );
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn ordinary_use_is_fine() {
        let warnings = examine(
            Box::new(ControlParameter),
            "(def :go (args (arg :flag)) (send nil :use (lvar :flag)))",
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn local_variable_conditions_are_fine() {
        let warnings = examine(
            Box::new(ControlParameter),
            "(def :go (args (arg :x)) (begin (lvasgn :ready (send nil :check)) (if (lvar :ready) (send nil :a) nil)))",
        );
        assert!(warnings.is_empty());
    }
}
