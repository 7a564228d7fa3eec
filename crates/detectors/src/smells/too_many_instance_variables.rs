// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! A class juggling many instance variables is holding several objects'
//! worth of state.

use crate::detector::{DetectorContext, SmellDetector, context_kinds};
use crate::scan::module_wide;
use bit_set::BitSet;
use indexmap::IndexSet;
use serde_yaml::Value;
use snag_config::ConfigMap;
use snag_contexts::ContextKind;
use snag_core::Warning;

pub struct TooManyInstanceVariables;

const MAX_IVARS_KEY: &str = "max_instance_variables";
const DEFAULT_MAX_IVARS: usize = 9;

impl SmellDetector for TooManyInstanceVariables {
    fn smell_class(&self) -> &'static str {
        "LargeClass"
    }

    fn smell_subclass(&self) -> &'static str {
        "TooManyInstanceVariables"
    }

    fn defaults(&self) -> ConfigMap {
        let mut map = ConfigMap::default();
        map.insert(MAX_IVARS_KEY.into(), Value::from(DEFAULT_MAX_IVARS as u64));
        map
    }

    fn potential_contexts(&self) -> BitSet {
        context_kinds(&[ContextKind::Class])
    }

    fn examine(&self, ctx: &DetectorContext<'_, '_>) -> anyhow::Result<Vec<Warning>> {
        let Some(node) = ctx.context.defining_node() else {
            return Ok(Vec::new());
        };
        let max_ivars = ctx.config.usize_param(MAX_IVARS_KEY, DEFAULT_MAX_IVARS);
        let mut names: IndexSet<&str> = IndexSet::new();
        for node in module_wide(node.module_body_nodes()) {
            if node.is_instance_variable() {
                if let Some(name) = node.variable_name() {
                    names.insert(name);
                }
            }
        }
        let count = names.len();
        if count <= max_ivars {
            return Ok(Vec::new());
        }
        Ok(vec![
            self.smell(ctx, format!("has at least {count} instance variables"))
                .with_parameter("count", count as u64),
        ])
    }
}
