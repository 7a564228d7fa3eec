// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! An instance method that never touches instance state and spends its time
//! sending messages to other objects belongs somewhere else.

use crate::detector::{DetectorContext, SmellDetector, context_kinds};
use crate::scan::method_local;
use bit_set::BitSet;
use snag_contexts::ContextKind;
use snag_core::Warning;

pub struct UtilityFunction;

impl SmellDetector for UtilityFunction {
    fn smell_class(&self) -> &'static str {
        "LowCohesion"
    }

    fn smell_subclass(&self) -> &'static str {
        "UtilityFunction"
    }

    fn potential_contexts(&self) -> BitSet {
        context_kinds(&[ContextKind::Method])
    }

    fn examine(&self, ctx: &DetectorContext<'_, '_>) -> anyhow::Result<Vec<Warning>> {
        if ctx.context.is_singleton() || ctx.context.depends_on_instance() {
            return Ok(Vec::new());
        }
        let Some(def) = ctx.context.defining_node() else {
            return Ok(Vec::new());
        };
        let body = def.body_nodes();
        if body.is_empty() {
            return Ok(Vec::new());
        }
        let sends_elsewhere = method_local(body)
            .iter()
            .any(|node| node.role().is_send() && node.receiver().is_some());
        if !sends_elsewhere {
            return Ok(Vec::new());
        }
        Ok(vec![self.smell(ctx, "doesn't depend on instance state")])
    }
}
