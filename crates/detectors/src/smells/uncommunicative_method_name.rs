// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::detector::{DetectorContext, SmellDetector, context_kinds};
use crate::smells::name_checks::{ACCEPT_KEY, NameChecker, REJECT_KEY, value_list};
use bit_set::BitSet;
use snag_config::ConfigMap;
use snag_contexts::ContextKind;
use snag_core::Warning;

/// One-letter, numbered, and camelCase method names say nothing about what
/// the method does.
pub struct UncommunicativeMethodName;

impl SmellDetector for UncommunicativeMethodName {
    fn smell_class(&self) -> &'static str {
        "UncommunicativeName"
    }

    fn smell_subclass(&self) -> &'static str {
        "UncommunicativeMethodName"
    }

    fn defaults(&self) -> ConfigMap {
        let mut map = ConfigMap::default();
        map.insert(REJECT_KEY.into(), value_list(&["/^[a-z]$/", "/[0-9]$/", "/[A-Z]/"]));
        map.insert(ACCEPT_KEY.into(), value_list(&[]));
        map
    }

    fn potential_contexts(&self) -> BitSet {
        context_kinds(&[ContextKind::Method])
    }

    fn examine(&self, ctx: &DetectorContext<'_, '_>) -> anyhow::Result<Vec<Warning>> {
        let checker = NameChecker::from_config(ctx.config)?;
        // singleton methods carry a `receiver.` prefix in their context name
        let name = ctx
            .context
            .name()
            .rsplit('.')
            .next()
            .unwrap_or_default();
        if name.is_empty() || !checker.bad_name(name) {
            return Ok(Vec::new());
        }
        Ok(vec![
            self.smell(ctx, format!("has the name '{name}'"))
                .with_parameter("name", name),
        ])
    }
}
