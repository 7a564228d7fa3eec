// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! A parameter nobody reads is a lie in the signature.
//!
//! Underscore-prefixed and anonymous parameters are deliberate and pass. A
//! body containing bare `super` passes everything implicitly, so such
//! methods are never reported.

use crate::detector::{DetectorContext, SmellDetector, context_kinds};
use crate::scan::method_local;
use bit_set::BitSet;
use snag_ast::{Node, Role};
use snag_contexts::ContextKind;
use snag_core::Warning;
use snag_utils::FastSet;

pub struct UnusedParameters;

impl SmellDetector for UnusedParameters {
    fn smell_class(&self) -> &'static str {
        "UnusedCode"
    }

    fn smell_subclass(&self) -> &'static str {
        "UnusedParameters"
    }

    fn potential_contexts(&self) -> BitSet {
        context_kinds(&[ContextKind::Method])
    }

    fn examine(&self, ctx: &DetectorContext<'_, '_>) -> anyhow::Result<Vec<Warning>> {
        let Some(def) = ctx.context.defining_node() else {
            return Ok(Vec::new());
        };
        let body = method_local(def.body_nodes());
        if body.iter().any(|node| node.role() == Role::ZSuper) {
            return Ok(Vec::new());
        }
        let mut used: FastSet<&str> = FastSet::default();
        for node in &body {
            if node.role() == Role::LVar {
                if let Some(name) = node.variable_name() {
                    used.insert(name);
                }
            }
        }
        let warnings = def
            .parameters()
            .iter()
            .filter(|param| !param.is_marked_unused() && !param.is_anonymous_splat())
            .filter_map(Node::argument_name)
            .filter(|name| !used.contains(name))
            .map(|name| {
                self.smell(ctx, format!("has unused parameter '{name}'"))
                    .with_parameter("parameter", name)
            })
            .collect();
        Ok(warnings)
    }
}
