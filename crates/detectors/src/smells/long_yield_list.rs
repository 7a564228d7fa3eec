// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! A yield handing over too many values burdens every block the caller
//! writes.

use crate::detector::{DetectorContext, SmellDetector, context_kinds};
use crate::scan::method_local;
use bit_set::BitSet;
use serde_yaml::Value;
use snag_ast::Role;
use snag_config::ConfigMap;
use snag_contexts::ContextKind;
use snag_core::Warning;

pub struct LongYieldList;

const MAX_PARAMS_KEY: &str = "max_params";
const DEFAULT_MAX_PARAMS: usize = 3;

impl SmellDetector for LongYieldList {
    fn smell_class(&self) -> &'static str {
        "LongParameterList"
    }

    fn smell_subclass(&self) -> &'static str {
        "LongYieldList"
    }

    fn defaults(&self) -> ConfigMap {
        let mut map = ConfigMap::default();
        map.insert(MAX_PARAMS_KEY.into(), Value::from(DEFAULT_MAX_PARAMS as u64));
        map
    }

    fn potential_contexts(&self) -> BitSet {
        context_kinds(&[ContextKind::Method])
    }

    fn examine(&self, ctx: &DetectorContext<'_, '_>) -> anyhow::Result<Vec<Warning>> {
        let Some(def) = ctx.context.defining_node() else {
            return Ok(Vec::new());
        };
        let max_params = ctx.config.usize_param(MAX_PARAMS_KEY, DEFAULT_MAX_PARAMS);
        let mut warnings = Vec::new();
        for node in method_local(def.body_nodes()) {
            if node.role() != Role::Yield {
                continue;
            }
            let count = node.call_arguments().len();
            if count <= max_params {
                continue;
            }
            let mut warning = self
                .smell(ctx, format!("yields {count} parameters"))
                .with_parameter("count", count as u64);
            if let Some(line) = node.line() {
                warning = warning.with_lines([line]);
            }
            warnings.push(warning);
        }
        Ok(warnings)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::examine;

    #[test]
    fn wide_yield_smells() {
        let warnings = examine(
            Box::new(LongYieldList),
            "(def :each_row (args) (yield (lvar :a) (lvar :b) (lvar :c) (lvar :d)))",
        );
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].message(), "yields 4 parameters");
    }

    #[test]
    fn narrow_yield_is_fine() {
        let warnings = examine(
            Box::new(LongYieldList),
            "(def :each (args) (yield (lvar :item)))",
        );
        assert!(warnings.is_empty());
    }
}
