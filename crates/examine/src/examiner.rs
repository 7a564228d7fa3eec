// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Examine one source and hold its results.

use crate::trace::ScanTrace;
use snag_ast::classify_tree;
use snag_config::ConfigResolver;
use snag_contexts::build_contexts;
use snag_core::{SnagError, SyntaxNode, Warning, parse_sexp};
use snag_detectors::{DetectorRegistry, Strategy, dispatch};

/// The result of one examination: an immutable warning sequence.
///
/// Examiners share nothing mutable; the same configuration and registry may
/// back any number of them, on any number of threads the caller chooses.
#[derive(Debug)]
pub struct Examiner {
    description: String,
    smells: Vec<Warning>,
    trace: ScanTrace,
}

impl Examiner {
    /// Run the pipeline over an already-parsed tree.
    ///
    /// An unknown node role aborts this source with a pseudo-warning. A
    /// `BadConfiguration` is fatal to the run and comes back as an error.
    pub fn examine(
        source_name: &str,
        ast: &SyntaxNode,
        resolver: &ConfigResolver,
        strategy: Strategy,
        registry: &DetectorRegistry,
    ) -> Result<Self, SnagError> {
        let root = match classify_tree(ast) {
            Ok(root) => root,
            Err(SnagError::UnknownNodeRole { tag, line }) => {
                return Ok(Self::aborted(
                    source_name,
                    Warning::unknown_role(source_name, tag, line),
                ));
            }
            Err(other) => return Err(other),
        };
        let arena = build_contexts(root);
        let (smells, dispatched) = dispatch(source_name, &arena, registry, resolver, strategy)?;
        let trace = ScanTrace::from_dispatch(dispatched, smells.len());
        Ok(Self {
            description: source_name.to_string(),
            smells,
            trace,
        })
    }

    /// Run the pipeline over s-expression text. A reader error becomes a
    /// `SyntaxError` pseudo-warning rather than aborting the run.
    pub fn examine_source(
        source_name: &str,
        sexp_text: &str,
        resolver: &ConfigResolver,
        strategy: Strategy,
        registry: &DetectorRegistry,
    ) -> Result<Self, SnagError> {
        match parse_sexp(sexp_text) {
            Ok(ast) => Self::examine(source_name, &ast, resolver, strategy, registry),
            Err(err) => Ok(Self::aborted(
                source_name,
                Warning::syntax_error(source_name, err.to_string()),
            )),
        }
    }

    fn aborted(source_name: &str, warning: Warning) -> Self {
        Self {
            description: source_name.to_string(),
            smells: vec![warning],
            trace: ScanTrace {
                warnings: 1,
                ..ScanTrace::default()
            },
        }
    }

    /// The source name this examiner analysed.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The ordered warning sequence.
    pub fn smells(&self) -> &[Warning] {
        &self.smells
    }

    pub fn smelly(&self) -> bool {
        !self.smells.is_empty()
    }

    pub fn trace(&self) -> &ScanTrace {
        &self.trace
    }
}
