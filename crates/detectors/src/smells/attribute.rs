// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! A writable attribute opens an object's state to the world.

use crate::detector::{DetectorContext, SmellDetector, context_kinds};
use crate::scan::module_wide;
use bit_set::BitSet;
use snag_ast::Role;
use snag_contexts::ContextKind;
use snag_core::Warning;

pub struct Attribute;

impl SmellDetector for Attribute {
    fn smell_class(&self) -> &'static str {
        "Design"
    }

    fn smell_subclass(&self) -> &'static str {
        "Attribute"
    }

    fn potential_contexts(&self) -> BitSet {
        context_kinds(&[ContextKind::Module, ContextKind::Class])
    }

    fn examine(&self, ctx: &DetectorContext<'_, '_>) -> anyhow::Result<Vec<Warning>> {
        let Some(node) = ctx.context.defining_node() else {
            return Ok(Vec::new());
        };
        let mut warnings = Vec::new();
        for send in module_wide(node.module_body_nodes()) {
            if !send.is_attribute_writer() {
                continue;
            }
            for arg in send.call_arguments() {
                if arg.role() != Role::Sym {
                    continue;
                }
                let Some(name) = arg.variable_name() else {
                    continue;
                };
                let mut warning = self
                    .smell(ctx, format!("declares the writable attribute {name}"))
                    .with_parameter("attribute", name);
                if let Some(line) = send.line() {
                    warning = warning.with_lines([line]);
                }
                warnings.push(warning);
            }
        }
        Ok(warnings)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::examine;

    #[test]
    fn reports_attr_writer_and_accessor() {
        let warnings = examine(
            Box::new(Attribute),
            "(class (const nil :C) nil (begin (send nil :attr_writer (sym :a)) (send nil :attr_accessor (sym :b) (sym :c))))",
        );
        let attrs: Vec<_> = warnings
            .iter()
            .map(|w| w.parameters()["attribute"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(attrs, vec!["a", "b", "c"]);
        assert!(warnings.iter().all(|w| w.context() == "C"));
    }

    #[test]
    fn archaic_attr_with_true_is_a_writer() {
        let warnings = examine(
            Box::new(Attribute),
            "(class (const nil :C) nil (send nil :attr (sym :x) (true)))",
        );
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message().contains("writable attribute x"));
    }

    #[test]
    fn readers_are_fine() {
        let warnings = examine(
            Box::new(Attribute),
            "(class (const nil :C) nil (begin (send nil :attr_reader (sym :a)) (send nil :attr (sym :b))))",
        );
        assert!(warnings.is_empty());
    }
}
