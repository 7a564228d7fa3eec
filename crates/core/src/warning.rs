// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! The immutable smell warning record.
//!
//! Two warnings are equal iff all fields are equal. The record serializes to
//! a flat map with fields `source`, `smell_class`, `smell_subclass`,
//! `context`, `message`, `lines`, `parameters`.

use indexmap::IndexMap;
use serde::Serialize;
use serde_yaml::Value;

/// Warning parameters keep first-seen insertion order so reports are stable.
pub type ParamMap = IndexMap<String, Value>;

pub const SYNTAX_ERROR_CLASS: &str = "SyntaxError";
pub const DETECTOR_ERROR_CLASS: &str = "DetectorError";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Warning {
    source: String,
    smell_class: String,
    smell_subclass: String,
    context: String,
    message: String,
    lines: Vec<usize>,
    parameters: ParamMap,
}

impl Warning {
    pub fn new(
        source: impl Into<String>,
        smell_class: impl Into<String>,
        smell_subclass: impl Into<String>,
        context: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            smell_class: smell_class.into(),
            smell_subclass: smell_subclass.into(),
            context: context.into(),
            message: message.into(),
            lines: Vec::new(),
            parameters: ParamMap::default(),
        }
    }

    pub fn with_lines(mut self, lines: impl IntoIterator<Item = usize>) -> Self {
        self.lines = lines.into_iter().collect();
        self
    }

    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }

    /// Pseudo-warning for a source that failed to parse.
    pub fn syntax_error(source: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            source,
            SYNTAX_ERROR_CLASS,
            SYNTAX_ERROR_CLASS,
            "",
            message,
        )
    }

    /// Pseudo-warning for a node tag outside the closed role set.
    pub fn unknown_role(
        source: impl Into<String>,
        tag: impl Into<String>,
        line: Option<usize>,
    ) -> Self {
        let tag = tag.into();
        let warning = Self::new(
            source,
            SYNTAX_ERROR_CLASS,
            "UnknownNodeRole",
            "",
            format!("unknown node role `{tag}`"),
        )
        .with_parameter("tag", tag);
        match line {
            Some(line) => warning.with_lines([line]),
            None => warning,
        }
    }

    /// Pseudo-warning for a detector that raised while examining a context.
    pub fn detector_error(
        source: impl Into<String>,
        detector: impl Into<String>,
        context: impl Into<String>,
        cause: impl Into<String>,
    ) -> Self {
        let detector = detector.into();
        Self::new(
            source,
            DETECTOR_ERROR_CLASS,
            detector.clone(),
            context,
            cause,
        )
        .with_parameter("detector", detector)
    }

    /// Whether this record reports an engine failure rather than a smell.
    pub fn is_pseudo(&self) -> bool {
        self.smell_class == SYNTAX_ERROR_CLASS || self.smell_class == DETECTOR_ERROR_CLASS
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn smell_class(&self) -> &str {
        &self.smell_class
    }

    pub fn smell_subclass(&self) -> &str {
        &self.smell_subclass
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn lines(&self) -> &[usize] {
        &self.lines
    }

    pub fn parameters(&self) -> &ParamMap {
        &self.parameters
    }
}
