// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! A boolean default on a parameter invites two-mode methods: callers pass a
//! flag to select behaviour the method should have been split over.

use crate::detector::{DetectorContext, SmellDetector, context_kinds};
use bit_set::BitSet;
use snag_ast::Role;
use snag_contexts::ContextKind;
use snag_core::Warning;

pub struct BooleanParameter;

impl SmellDetector for BooleanParameter {
    fn smell_class(&self) -> &'static str {
        "ControlCouple"
    }

    fn smell_subclass(&self) -> &'static str {
        "BooleanParameter"
    }

    fn potential_contexts(&self) -> BitSet {
        context_kinds(&[ContextKind::Method])
    }

    fn examine(&self, ctx: &DetectorContext<'_, '_>) -> anyhow::Result<Vec<Warning>> {
        let Some(def) = ctx.context.defining_node() else {
            return Ok(Vec::new());
        };
        let warnings = def
            .parameters()
            .iter()
            .filter(|param| {
                param
                    .default_value()
                    .is_some_and(|value| matches!(value.role(), Role::True | Role::False))
            })
            .filter_map(|param| param.argument_name())
            .map(|name| {
                self.smell(ctx, format!("has boolean parameter '{name}'"))
                    .with_parameter("parameter", name)
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
    fn flags_boolean_defaults() {
        // def go(depth, verbose = true, color: false)
        let warnings = examine(
            Box::new(BooleanParameter),
            "(def :go (args (arg :depth) (optarg :verbose (true)) (kwoptarg :color (false))) nil)",
        );
        let params: Vec<_> = warnings
            .iter()
            .map(|w| w.parameters()["parameter"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(params, vec!["verbose", "color"]);
    }

    #[test]
    fn other_defaults_are_fine() {
        let warnings = examine(
            Box::new(BooleanParameter),
            "(def :go (args (optarg :depth (int 1)) (optarg :label (nil))) nil)",
        );
        assert!(warnings.is_empty());
    }
}
