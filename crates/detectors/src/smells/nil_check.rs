// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Explicit nil-checks (`x.nil?`, safe navigation) are type checks in
//! disguise.

use crate::detector::{DetectorContext, SmellDetector, context_kinds};
use crate::scan::method_local;
use bit_set::BitSet;
use snag_ast::Role;
use snag_contexts::ContextKind;
use snag_core::Warning;

pub struct NilCheck;

impl SmellDetector for NilCheck {
    fn smell_class(&self) -> &'static str {
        "ControlCouple"
    }

    fn smell_subclass(&self) -> &'static str {
        "NilCheck"
    }

    fn potential_contexts(&self) -> BitSet {
        context_kinds(&[ContextKind::Method])
    }

    fn examine(&self, ctx: &DetectorContext<'_, '_>) -> anyhow::Result<Vec<Warning>> {
        let Some(def) = ctx.context.defining_node() else {
            return Ok(Vec::new());
        };
        let mut lines = Vec::new();
        let mut found = false;
        for node in method_local(def.body_nodes()) {
            let checks = match node.role() {
                Role::CSend => true,
                Role::Send => node.method_name() == Some("nil?"),
                _ => false,
            };
            if checks {
                found = true;
                lines.extend(node.line());
            }
        }
        if !found {
            return Ok(Vec::new());
        }
        Ok(vec![self.smell(ctx, "performs a nil-check").with_lines(lines)])
    }
}
