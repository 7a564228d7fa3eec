// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Classes with many instance methods have collected more than one
//! responsibility.

use crate::detector::{DetectorContext, SmellDetector, context_kinds};
use bit_set::BitSet;
use serde_yaml::Value;
use snag_config::ConfigMap;
use snag_contexts::ContextKind;
use snag_core::Warning;

pub struct TooManyMethods;

const MAX_METHODS_KEY: &str = "max_methods";
const DEFAULT_MAX_METHODS: usize = 15;

impl SmellDetector for TooManyMethods {
    fn smell_class(&self) -> &'static str {
        "LargeClass"
    }

    fn smell_subclass(&self) -> &'static str {
        "TooManyMethods"
    }

    fn defaults(&self) -> ConfigMap {
        let mut map = ConfigMap::default();
        map.insert(MAX_METHODS_KEY.into(), Value::from(DEFAULT_MAX_METHODS as u64));
        map
    }

    fn potential_contexts(&self) -> BitSet {
        context_kinds(&[ContextKind::Class])
    }

    fn examine(&self, ctx: &DetectorContext<'_, '_>) -> anyhow::Result<Vec<Warning>> {
        let max_methods = ctx.config.usize_param(MAX_METHODS_KEY, DEFAULT_MAX_METHODS);
        let count = ctx
            .arena
            .children_of_kind(ctx.id, ContextKind::Method)
            .filter(|method| !method.is_singleton())
            .count();
        if count <= max_methods {
            return Ok(Vec::new());
        }
        Ok(vec![
            self.smell(ctx, format!("has at least {count} methods"))
                .with_parameter("count", count as u64),
        ])
    }
}
