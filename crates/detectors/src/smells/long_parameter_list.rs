// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Long parameter lists suggest a missing parameter object.

use crate::detector::{DetectorContext, SmellDetector, context_kinds};
use bit_set::BitSet;
use serde_yaml::Value;
use snag_config::ConfigMap;
use snag_contexts::ContextKind;
use snag_core::Warning;

pub struct LongParameterList;

const MAX_PARAMS_KEY: &str = "max_params";
const DEFAULT_MAX_PARAMS: usize = 3;

impl SmellDetector for LongParameterList {
    fn smell_class(&self) -> &'static str {
        "LongParameterList"
    }

    fn smell_subclass(&self) -> &'static str {
        "LongParameterList"
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
        let count = def.parameters().len();
        if count <= max_params {
            return Ok(Vec::new());
        }
        Ok(vec![
            self.smell(ctx, format!("has {count} parameters"))
                .with_parameter("count", count as u64),
        ])
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::{examine, examine_with};
    use snag_config::{ConfigResolver, SmellsConfiguration};

    #[test]
    fn four_parameters_smell() {
        let warnings = examine(
            Box::new(LongParameterList),
            "(def :go (args (arg :a) (arg :b) (arg :c) (arg :d)) nil)",
        );
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].message(), "has 4 parameters");
        assert_eq!(warnings[0].parameters()["count"].as_u64(), Some(4));
    }

    #[test]
    fn three_parameters_do_not() {
        let warnings = examine(
            Box::new(LongParameterList),
            "(def :go (args (arg :a) (arg :b) (arg :c)) nil)",
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn block_argument_is_not_counted() {
        let warnings = examine(
            Box::new(LongParameterList),
            "(def :go (args (arg :a) (arg :b) (arg :c) (blockarg :blk)) nil)",
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn threshold_is_configurable() {
        let resolver = ConfigResolver::new(vec![SmellsConfiguration::from_yaml_str(
            "LongParameterList:\n  LongParameterList:\n    max_params: 1\n",
        )
        .unwrap()]);
        let warnings = examine_with(
            Box::new(LongParameterList),
            "(def :go (args (arg :a) (arg :b)) nil)",
            &resolver,
        );
        assert_eq!(warnings.len(), 1);
    }
}
