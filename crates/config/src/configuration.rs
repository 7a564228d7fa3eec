// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! The serializable configuration surface.
//!
//! One layer is a hierarchical mapping `smell_class -> smell_subclass ->
//! settings`. The reserved keys `enabled`, `exclude`, and `exceptions` are
//! recognized by every detector; the rest are detector-specific thresholds
//! and lists.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use snag_core::SnagError;

/// Settings for one detector: key to YAML value, first-seen ordered.
pub type ConfigMap = IndexMap<String, Value>;

pub const ENABLED_KEY: &str = "enabled";
pub const EXCLUDE_KEY: &str = "exclude";
pub const EXCEPTIONS_KEY: &str = "exceptions";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SmellsConfiguration(IndexMap<String, IndexMap<String, ConfigMap>>);

impl SmellsConfiguration {
    /// Interpret an already-parsed YAML value as one configuration layer.
    pub fn from_value(value: Value) -> Result<Self, SnagError> {
        serde_yaml::from_value(value)
            .map_err(|err| SnagError::BadConfiguration(err.to_string()))
    }

    /// Parse one layer from YAML text.
    pub fn from_yaml_str(text: &str) -> Result<Self, SnagError> {
        serde_yaml::from_str(text).map_err(|err| SnagError::BadConfiguration(err.to_string()))
    }

    /// The settings for one detector, when this layer mentions it.
    pub fn detector_settings(&self, smell_class: &str, smell_subclass: &str) -> Option<&ConfigMap> {
        self.0.get(smell_class)?.get(smell_subclass)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
