// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Every module owes its readers one sentence about itself.
//!
//! Directive-only comments do not count as documentation.

use crate::detector::{DetectorContext, SmellDetector, context_kinds};
use bit_set::BitSet;
use snag_contexts::ContextKind;
use snag_core::Warning;

pub struct IrresponsibleModule;

impl SmellDetector for IrresponsibleModule {
    fn smell_class(&self) -> &'static str {
        "Design"
    }

    fn smell_subclass(&self) -> &'static str {
        "IrresponsibleModule"
    }

    fn potential_contexts(&self) -> BitSet {
        context_kinds(&[ContextKind::Module, ContextKind::Class])
    }

    fn examine(&self, ctx: &DetectorContext<'_, '_>) -> anyhow::Result<Vec<Warning>> {
        let documented = ctx.context.leading_comment().is_some_and(|comment| {
            comment
                .lines()
                .filter(|line| !line.contains(":snag:"))
                .any(|line| !line.trim().is_empty())
        });
        if documented {
            Ok(Vec::new())
        } else {
            Ok(vec![self.smell(ctx, "has no descriptive comment")])
        }
    }
}
