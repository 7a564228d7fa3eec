// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Class variables are global state shared down the inheritance tree.

use crate::detector::{DetectorContext, SmellDetector, context_kinds};
use crate::scan::module_wide;
use bit_set::BitSet;
use indexmap::IndexMap;
use snag_contexts::ContextKind;
use snag_core::Warning;

pub struct ClassVariable;

impl SmellDetector for ClassVariable {
    fn smell_class(&self) -> &'static str {
        "Design"
    }

    fn smell_subclass(&self) -> &'static str {
        "ClassVariable"
    }

    fn potential_contexts(&self) -> BitSet {
        context_kinds(&[ContextKind::Module, ContextKind::Class])
    }

    fn examine(&self, ctx: &DetectorContext<'_, '_>) -> anyhow::Result<Vec<Warning>> {
        let Some(node) = ctx.context.defining_node() else {
            return Ok(Vec::new());
        };
        // first-seen order, first line of mention
        let mut seen: IndexMap<&str, Option<usize>> = IndexMap::new();
        for node in module_wide(node.module_body_nodes()) {
            if node.is_class_variable() {
                if let Some(name) = node.variable_name() {
                    seen.entry(name).or_insert_with(|| node.line());
                }
            }
        }
        let warnings = seen
            .into_iter()
            .map(|(name, line)| {
                let warning = self
                    .smell(ctx, format!("declares the class variable {name}"))
                    .with_parameter("variable", name);
                match line {
                    Some(line) => warning.with_lines([line]),
                    None => warning,
                }
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
    fn reports_each_distinct_class_variable_once() {
        let warnings = examine(
            Box::new(ClassVariable),
            "(class (const nil :C) nil (begin (cvasgn :@@count (int 0)) (def :bump (args) (cvasgn :@@count (send (cvar :@@count) :+ (int 1))))))",
        );
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].message(), "declares the class variable @@count");
        assert_eq!(warnings[0].context(), "C");
    }

    #[test]
    fn nested_classes_keep_their_own() {
        let warnings = examine(
            Box::new(ClassVariable),
            "(class (const nil :Outer) nil (class (const nil :Inner) nil (cvar :@@x)))",
        );
        // reported once, attributed to Inner
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].context(), "Outer::Inner");
    }

    #[test]
    fn instance_variables_are_not_class_variables() {
        let warnings = examine(
            Box::new(ClassVariable),
            "(class (const nil :C) nil (def :go (args) (ivasgn :@x (int 1))))",
        );
        assert!(warnings.is_empty());
    }
}
