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

/// Single-letter and numbered module names.
pub struct UncommunicativeModuleName;

impl SmellDetector for UncommunicativeModuleName {
    fn smell_class(&self) -> &'static str {
        "UncommunicativeName"
    }

    fn smell_subclass(&self) -> &'static str {
        "UncommunicativeModuleName"
    }

    fn defaults(&self) -> ConfigMap {
        let mut map = ConfigMap::default();
        map.insert(REJECT_KEY.into(), value_list(&["/^.$/", "/[0-9]$/"]));
        map.insert(ACCEPT_KEY.into(), value_list(&[]));
        map
    }

    fn potential_contexts(&self) -> BitSet {
        context_kinds(&[ContextKind::Module, ContextKind::Class])
    }

    fn examine(&self, ctx: &DetectorContext<'_, '_>) -> anyhow::Result<Vec<Warning>> {
        let checker = NameChecker::from_config(ctx.config)?;
        let name = ctx
            .context
            .name()
            .rsplit("::")
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

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::examine;

    #[test]
    fn numbered_class_smells() {
        let warnings = examine(
            Box::new(UncommunicativeModuleName),
            "(class (const nil :Widget2) nil nil)",
        );
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].message(), "has the name 'Widget2'");
    }

    #[test]
    fn descriptive_name_is_fine() {
        let warnings = examine(
            Box::new(UncommunicativeModuleName),
            "(module (const nil :Assembly) nil)",
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn only_the_last_segment_is_judged() {
        // class A::Widget judged as Widget
        let warnings = examine(
            Box::new(UncommunicativeModuleName),
            "(class (const (const nil :A) :Widget) nil nil)",
        );
        assert!(warnings.is_empty());
    }
}
