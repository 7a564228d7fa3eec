// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::detector::{DetectorContext, SmellDetector, context_kinds};
use crate::smells::name_checks::{ACCEPT_KEY, NameChecker, REJECT_KEY, value_list};
use bit_set::BitSet;
use snag_ast::Node;
use snag_config::ConfigMap;
use snag_contexts::ContextKind;
use snag_core::Warning;

/// Parameter names that tell the caller nothing. A leading underscore marks
/// a deliberately unused parameter and is accepted.
pub struct UncommunicativeParameterName;

impl SmellDetector for UncommunicativeParameterName {
    fn smell_class(&self) -> &'static str {
        "UncommunicativeName"
    }

    fn smell_subclass(&self) -> &'static str {
        "UncommunicativeParameterName"
    }

    fn defaults(&self) -> ConfigMap {
        let mut map = ConfigMap::default();
        map.insert(REJECT_KEY.into(), value_list(&["/^.$/", "/[0-9]$/", "/[A-Z]/"]));
        map.insert(ACCEPT_KEY.into(), value_list(&["/^_/"]));
        map
    }

    fn potential_contexts(&self) -> BitSet {
        context_kinds(&[ContextKind::Method])
    }

    fn examine(&self, ctx: &DetectorContext<'_, '_>) -> anyhow::Result<Vec<Warning>> {
        let Some(def) = ctx.context.defining_node() else {
            return Ok(Vec::new());
        };
        let checker = NameChecker::from_config(ctx.config)?;
        let warnings = def
            .parameters()
            .iter()
            .filter_map(Node::argument_name)
            .filter(|name| checker.bad_name(name))
            .map(|name| {
                self.smell(ctx, format!("has the parameter name '{name}'"))
                    .with_parameter("name", name)
            })
            .collect();
        Ok(warnings)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::examine;

    #[test]
    fn one_letter_parameter_smells() {
        let warnings = examine(
            Box::new(UncommunicativeParameterName),
            "(def :go (args (arg :x) (arg :total)) nil)",
        );
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].message(), "has the parameter name 'x'");
    }

    #[test]
    fn underscore_prefix_is_accepted() {
        let warnings = examine(
            Box::new(UncommunicativeParameterName),
            "(def :go (args (arg :_unused) (arg :_)) nil)",
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn anonymous_splat_is_ignored() {
        let warnings = examine(
            Box::new(UncommunicativeParameterName),
            "(def :go (args (restarg)) nil)",
        );
        assert!(warnings.is_empty());
    }
}
