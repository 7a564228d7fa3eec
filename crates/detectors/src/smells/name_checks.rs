// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Shared machinery for the name-quality detectors.
//!
//! Each carries `reject` and `accept` pattern lists in its defaults, so
//! configuration layers can extend either list through the ordinary sequence
//! merge. A name smells when it matches a reject pattern and no accept
//! pattern.

use snag_config::{ContextPattern, ResolvedDetectorConfig};
use serde_yaml::Value;

pub(crate) const REJECT_KEY: &str = "reject";
pub(crate) const ACCEPT_KEY: &str = "accept";

pub(crate) struct NameChecker {
    rejects: Vec<ContextPattern>,
    accepts: Vec<ContextPattern>,
}

impl NameChecker {
    pub(crate) fn from_config(config: &ResolvedDetectorConfig) -> anyhow::Result<Self> {
        Ok(Self {
            rejects: config.pattern_params(REJECT_KEY)?.unwrap_or_default(),
            accepts: config.pattern_params(ACCEPT_KEY)?.unwrap_or_default(),
        })
    }

    pub(crate) fn bad_name(&self, name: &str) -> bool {
        if self.accepts.iter().any(|pattern| pattern.matches(name)) {
            return false;
        }
        self.rejects.iter().any(|pattern| pattern.matches(name))
    }
}

/// A sequence-of-strings configuration value.
pub(crate) fn value_list(items: &[&str]) -> Value {
    Value::Sequence(items.iter().map(|item| Value::from(*item)).collect())
}
