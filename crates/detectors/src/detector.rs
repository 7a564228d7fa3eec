// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! The detector contract.

use bit_set::BitSet;
use snag_config::{ConfigMap, ResolvedDetectorConfig};
use snag_contexts::{Context, ContextArena, ContextId, ContextKind};
use snag_core::Warning;

/// Everything a detector sees while examining one context.
pub struct DetectorContext<'a, 't> {
    pub source: &'a str,
    pub id: ContextId,
    pub context: &'a Context<'t>,
    pub arena: &'a ContextArena<'t>,
    pub config: &'a ResolvedDetectorConfig,
}

/// One smell heuristic.
///
/// Implementations are pure queries over the context tree: `examine` must
/// not retain state between calls. An error return is converted by the
/// dispatcher into a `DetectorError` pseudo-warning; other detectors
/// continue.
pub trait SmellDetector: Send + Sync {
    /// Stable smell category identifier.
    fn smell_class(&self) -> &'static str;

    /// Stable detector identifier, used in configuration and directives.
    fn smell_subclass(&self) -> &'static str;

    /// Ship-with-code default settings.
    fn defaults(&self) -> ConfigMap {
        ConfigMap::default()
    }

    /// The context kinds this detector can apply to.
    fn potential_contexts(&self) -> BitSet;

    fn examine(&self, ctx: &DetectorContext<'_, '_>) -> anyhow::Result<Vec<Warning>>;

    fn applies_to(&self, kind: ContextKind) -> bool {
        self.potential_contexts().contains(kind.bit())
    }

    /// Start a warning attributed to the examined context, carrying the
    /// context's definition line when known.
    fn smell(&self, ctx: &DetectorContext<'_, '_>, message: impl Into<String>) -> Warning
    where
        Self: Sized,
    {
        let warning = Warning::new(
            ctx.source,
            self.smell_class(),
            self.smell_subclass(),
            ctx.context.full_name(),
            message,
        );
        match ctx.context.line() {
            Some(line) => warning.with_lines([line]),
            None => warning,
        }
    }
}

/// Build the kind set a detector advertises.
pub fn context_kinds(kinds: &[ContextKind]) -> BitSet {
    let mut set = BitSet::new();
    for kind in kinds {
        set.insert(kind.bit());
    }
    set
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn kind_sets() {
        let set = context_kinds(&[ContextKind::Method, ContextKind::Class]);
        assert!(set.contains(ContextKind::Method.bit()));
        assert!(set.contains(ContextKind::Class.bit()));
        assert!(!set.contains(ContextKind::Module.bit()));
        assert!(!set.contains(ContextKind::Root.bit()));
    }
}
