// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! The configuration resolver.
//!
//! Folds the configuration layers into one effective answer per (detector,
//! context) pair. Layers are ordered by increasing precedence: detector
//! defaults, then project-wide, then per-directory, then the context's own
//! comment directives.

use crate::configuration::{
    ConfigMap, ENABLED_KEY, EXCEPTIONS_KEY, EXCLUDE_KEY, SmellsConfiguration,
};
use crate::merge::merge_into;
use crate::patterns::ContextPattern;
use serde_yaml::Value;
use snag_core::SnagError;

/// An ordered stack of configuration layers, shared read-only across
/// examinations.
#[derive(Debug, Clone, Default)]
pub struct ConfigResolver {
    layers: Vec<SmellsConfiguration>,
}

impl ConfigResolver {
    /// `layers` in increasing precedence.
    pub fn new(layers: Vec<SmellsConfiguration>) -> Self {
        Self { layers }
    }

    /// The effective configuration for one detector at one context.
    ///
    /// `defaults` are the detector's ship-with-code settings; `local` is the
    /// context's own directive layer, which outranks everything.
    pub fn resolve(
        &self,
        smell_class: &str,
        smell_subclass: &str,
        defaults: &ConfigMap,
        local: Option<&ConfigMap>,
    ) -> Result<ResolvedDetectorConfig, SnagError> {
        let mut merged = defaults.clone();
        for layer in &self.layers {
            if let Some(settings) = layer.detector_settings(smell_class, smell_subclass) {
                merge_into(&mut merged, settings);
            }
        }
        if let Some(overrides) = local {
            merge_into(&mut merged, overrides);
        }
        ResolvedDetectorConfig::from_merged(merged)
    }
}

/// The effective answer for one (detector, context) pair.
#[derive(Debug, Clone)]
pub struct ResolvedDetectorConfig {
    enabled: bool,
    exclude: Vec<ContextPattern>,
    exceptions: Vec<ContextPattern>,
    params: ConfigMap,
}

impl ResolvedDetectorConfig {
    fn from_merged(params: ConfigMap) -> Result<Self, SnagError> {
        let enabled = match params.get(ENABLED_KEY) {
            None => true,
            Some(value) => value.as_bool().ok_or_else(|| {
                SnagError::BadConfiguration(format!("`{ENABLED_KEY}` must be a boolean"))
            })?,
        };
        let exclude = match params.get(EXCLUDE_KEY) {
            None => Vec::new(),
            Some(value) => ContextPattern::list_from_value(value)?,
        };
        let exceptions = match params.get(EXCEPTIONS_KEY) {
            None => Vec::new(),
            Some(value) => ContextPattern::list_from_value(value)?,
        };
        Ok(Self {
            enabled,
            exclude,
            exceptions,
            params,
        })
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Whether the detector skips this context entirely.
    pub fn excluded(&self, full_name: &str) -> bool {
        self.exclude.iter().any(|pattern| pattern.matches(full_name))
    }

    /// Whether the context is exempt from this detector's report.
    pub fn exception(&self, full_name: &str) -> bool {
        self.exceptions
            .iter()
            .any(|pattern| pattern.matches(full_name))
    }

    pub fn param(&self, key: &str) -> Option<&Value> {
        self.params.get(key)
    }

    /// A numeric threshold, falling back to the given default when the key
    /// is absent or not a number.
    pub fn usize_param(&self, key: &str, default: usize) -> usize {
        self.param(key)
            .and_then(Value::as_u64)
            .map_or(default, |value| value as usize)
    }

    /// A pattern list parameter (for name-quality reject/accept lists).
    pub fn pattern_params(&self, key: &str) -> Result<Option<Vec<ContextPattern>>, SnagError> {
        match self.param(key) {
            None => Ok(None),
            Some(value) => ContextPattern::list_from_value(value).map(Some),
        }
    }
}
