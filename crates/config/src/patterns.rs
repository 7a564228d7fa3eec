// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Patterns over context and identifier names.
//!
//! Configuration entries for `exclude`, `exceptions`, and the name-quality
//! lists are either `/regex/` (slash-delimited, full regex syntax) or bare
//! strings matched as substrings.

use regex::Regex;
use serde_yaml::Value;
use snag_core::SnagError;

#[derive(Debug, Clone)]
pub enum ContextPattern {
    Substring(String),
    Regexp(Regex),
}

impl ContextPattern {
    pub fn parse(text: &str) -> Result<Self, SnagError> {
        if text.len() >= 2 && text.starts_with('/') && text.ends_with('/') {
            let body = &text[1..text.len() - 1];
            let regex = Regex::new(body).map_err(|err| {
                SnagError::BadConfiguration(format!("bad pattern `{text}`: {err}"))
            })?;
            Ok(ContextPattern::Regexp(regex))
        } else {
            Ok(ContextPattern::Substring(text.to_string()))
        }
    }

    pub fn matches(&self, name: &str) -> bool {
        match self {
            ContextPattern::Substring(text) => name.contains(text.as_str()),
            ContextPattern::Regexp(regex) => regex.is_match(name),
        }
    }

    /// Interpret a configuration value as a pattern list: a string, or a
    /// sequence of strings. Anything else is a configuration error.
    pub fn list_from_value(value: &Value) -> Result<Vec<ContextPattern>, SnagError> {
        match value {
            Value::String(text) => Ok(vec![ContextPattern::parse(text)?]),
            Value::Sequence(items) => items
                .iter()
                .map(|item| match item {
                    Value::String(text) => ContextPattern::parse(text),
                    other => Err(SnagError::BadConfiguration(format!(
                        "pattern entries must be strings, got `{other:?}`"
                    ))),
                })
                .collect(),
            other => Err(SnagError::BadConfiguration(format!(
                "pattern lists must be strings or sequences, got `{other:?}`"
            ))),
        }
    }
}
