// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! The dispatch loop.
//!
//! Contexts are visited in tree pre-order; detectors apply in registration
//! order. For each pair: a disabled detector is skipped (unless the strategy
//! is [`Strategy::ShowAll`]), a non-applicable kind is skipped, an excluded
//! context is skipped, and warnings from matching exception patterns are
//! dropped after examination. A detector error becomes a `DetectorError`
//! pseudo-warning; remaining detectors continue.

use crate::detector::{DetectorContext, SmellDetector};
use crate::registry::DetectorRegistry;
use snag_config::{ConfigResolver, Directives, parse_directives};
use snag_contexts::ContextArena;
use snag_core::{SnagError, Warning};

/// Which detectors take part in a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Honour the `enabled` flag.
    #[default]
    ActiveSmellsOnly,
    /// Run every detector regardless of `enabled`; exceptions still apply.
    ShowAll,
}

/// Per-run counters, returned as data alongside the warnings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchTrace {
    pub contexts: usize,
    pub detectors: usize,
    pub examined: usize,
    pub skipped_disabled: usize,
    pub skipped_excluded: usize,
    pub suppressed: usize,
    pub failures: usize,
}

/// Run every applicable detector over every context.
///
/// `BadConfiguration` (malformed layers or directives) is fatal to the run
/// and propagates; everything else is captured in the warning stream.
pub fn dispatch(
    source: &str,
    arena: &ContextArena<'_>,
    registry: &DetectorRegistry,
    resolver: &ConfigResolver,
    strategy: Strategy,
) -> Result<(Vec<Warning>, DispatchTrace), SnagError> {
    let mut warnings = Vec::new();
    let mut trace = DispatchTrace {
        contexts: arena.len(),
        detectors: registry.len(),
        ..DispatchTrace::default()
    };

    for (id, context) in arena.iter() {
        let directives = match context.leading_comment() {
            Some(comment) => parse_directives(comment)?,
            None => Directives::default(),
        };
        for detector in registry.detectors() {
            let local = directives.get(detector.smell_subclass());
            let config = resolver.resolve(
                detector.smell_class(),
                detector.smell_subclass(),
                &detector.defaults(),
                local,
            )?;
            if strategy == Strategy::ActiveSmellsOnly && !config.enabled() {
                trace.skipped_disabled += 1;
                continue;
            }
            if !detector.applies_to(context.kind()) {
                continue;
            }
            if config.excluded(context.full_name()) {
                trace.skipped_excluded += 1;
                continue;
            }
            let detector_ctx = DetectorContext {
                source,
                id,
                context,
                arena,
                config: &config,
            };
            trace.examined += 1;
            match detector.examine(&detector_ctx) {
                Ok(found) => {
                    for warning in found {
                        if config.exception(context.full_name()) {
                            trace.suppressed += 1;
                        } else {
                            warnings.push(warning);
                        }
                    }
                }
                Err(cause) => {
                    trace.failures += 1;
                    warnings.push(Warning::detector_error(
                        source,
                        detector.smell_subclass(),
                        context.full_name(),
                        format!("{cause:#}"),
                    ));
                }
            }
        }
    }
    Ok((warnings, trace))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::detector::{DetectorContext, context_kinds};
    use bit_set::BitSet;
    use snag_ast::classify_tree;
    use snag_config::SmellsConfiguration;
    use snag_contexts::{ContextKind, build_contexts};
    use snag_core::parse_sexp;

    struct AlwaysWarn;

    impl SmellDetector for AlwaysWarn {
        fn smell_class(&self) -> &'static str {
            "Testing"
        }
        fn smell_subclass(&self) -> &'static str {
            "AlwaysWarn"
        }
        fn potential_contexts(&self) -> BitSet {
            context_kinds(&[ContextKind::Method])
        }
        fn examine(&self, ctx: &DetectorContext<'_, '_>) -> anyhow::Result<Vec<Warning>> {
            Ok(vec![self.smell(ctx, "always fires")])
        }
    }

    struct AlwaysFail;

    impl SmellDetector for AlwaysFail {
        fn smell_class(&self) -> &'static str {
            "Testing"
        }
        fn smell_subclass(&self) -> &'static str {
            "AlwaysFail"
        }
        fn potential_contexts(&self) -> BitSet {
            context_kinds(&[ContextKind::Method])
        }
        fn examine(&self, _ctx: &DetectorContext<'_, '_>) -> anyhow::Result<Vec<Warning>> {
            anyhow::bail!("boom")
        }
    }

    const SRC: &str = "(class (const nil :C) nil (def :go (args) nil))";

    fn run(resolver: &ConfigResolver, strategy: Strategy) -> (Vec<Warning>, DispatchTrace) {
        let raw = parse_sexp(SRC).unwrap();
        let root = classify_tree(&raw).unwrap();
        let arena = build_contexts(root);
        let mut registry = DetectorRegistry::empty();
        registry.register(Box::new(AlwaysWarn));
        dispatch("test.rb", &arena, &registry, resolver, strategy).unwrap()
    }

    #[test]
    fn emits_in_context_order() {
        let (warnings, trace) = run(&ConfigResolver::default(), Strategy::ActiveSmellsOnly);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].context(), "C#go");
        assert_eq!(trace.examined, 1);
    }

    #[test]
    fn disabled_is_silent() {
        let resolver = ConfigResolver::new(vec![
            SmellsConfiguration::from_yaml_str("Testing:\n  AlwaysWarn:\n    enabled: false\n")
                .unwrap(),
        ]);
        let (warnings, trace) = run(&resolver, Strategy::ActiveSmellsOnly);
        assert!(warnings.is_empty());
        assert!(trace.skipped_disabled > 0);
    }

    #[test]
    fn show_all_ignores_disabled_but_honours_exceptions() {
        let resolver = ConfigResolver::new(vec![SmellsConfiguration::from_yaml_str(
            "Testing:\n  AlwaysWarn:\n    enabled: false\n    exceptions: ['C#go']\n",
        )
        .unwrap()]);
        let (warnings, trace) = run(&resolver, Strategy::ShowAll);
        assert!(warnings.is_empty());
        assert_eq!(trace.suppressed, 1);
    }

    #[test]
    fn exceptions_suppress_warnings() {
        let resolver = ConfigResolver::new(vec![SmellsConfiguration::from_yaml_str(
            "Testing:\n  AlwaysWarn:\n    exceptions: ['/#go$/']\n",
        )
        .unwrap()]);
        let (warnings, trace) = run(&resolver, Strategy::ActiveSmellsOnly);
        assert!(warnings.is_empty());
        assert_eq!(trace.suppressed, 1);
    }

    #[test]
    fn exclude_skips_before_examination() {
        let resolver = ConfigResolver::new(vec![SmellsConfiguration::from_yaml_str(
            "Testing:\n  AlwaysWarn:\n    exclude: ['/#go$/']\n",
        )
        .unwrap()]);
        let (warnings, trace) = run(&resolver, Strategy::ActiveSmellsOnly);
        assert!(warnings.is_empty());
        assert_eq!(trace.skipped_excluded, 1);
        assert_eq!(trace.examined, 0);
    }

    #[test]
    fn detector_failure_becomes_pseudo_warning_and_others_continue() {
        let raw = parse_sexp(SRC).unwrap();
        let root = classify_tree(&raw).unwrap();
        let arena = build_contexts(root);
        let mut registry = DetectorRegistry::empty();
        registry.register(Box::new(AlwaysFail));
        registry.register(Box::new(AlwaysWarn));
        let (warnings, trace) = dispatch(
            "test.rb",
            &arena,
            &registry,
            &ConfigResolver::default(),
            Strategy::ActiveSmellsOnly,
        )
        .unwrap();
        assert_eq!(trace.failures, 1);
        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[0].smell_class(), "DetectorError");
        assert_eq!(warnings[0].smell_subclass(), "AlwaysFail");
        assert!(warnings[0].message().contains("boom"));
        assert_eq!(warnings[1].smell_subclass(), "AlwaysWarn");
    }

    #[test]
    fn directive_disables_locally() {
        let src = "(class (const nil :C) nil\n  ; :snag:AlwaysWarn\n  (def :go (args) nil))";
        let raw = parse_sexp(src).unwrap();
        let root = classify_tree(&raw).unwrap();
        let arena = build_contexts(root);
        let mut registry = DetectorRegistry::empty();
        registry.register(Box::new(AlwaysWarn));
        let (warnings, _) = dispatch(
            "test.rb",
            &arena,
            &registry,
            &ConfigResolver::default(),
            Strategy::ActiveSmellsOnly,
        )
        .unwrap();
        assert!(warnings.is_empty());
    }
}
