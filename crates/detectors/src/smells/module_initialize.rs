// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! `initialize` in a mixin collides with the including class's constructor.

use crate::detector::{DetectorContext, SmellDetector, context_kinds};
use bit_set::BitSet;
use snag_contexts::ContextKind;
use snag_core::Warning;

pub struct ModuleInitialize;

impl SmellDetector for ModuleInitialize {
    fn smell_class(&self) -> &'static str {
        "Design"
    }

    fn smell_subclass(&self) -> &'static str {
        "ModuleInitialize"
    }

    fn potential_contexts(&self) -> BitSet {
        context_kinds(&[ContextKind::Module])
    }

    fn examine(&self, ctx: &DetectorContext<'_, '_>) -> anyhow::Result<Vec<Warning>> {
        let offender = ctx
            .arena
            .children_of_kind(ctx.id, ContextKind::Method)
            .find(|method| method.name() == "initialize" && !method.is_singleton());
        let Some(method) = offender else {
            return Ok(Vec::new());
        };
        let mut warning = self.smell(ctx, "has initialize method");
        if let Some(line) = method.line() {
            warning = warning.with_lines([line]);
        }
        Ok(vec![warning])
    }
}
