// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Comment directives: the context-local configuration layer.
//!
//! A context's leading comment may carry `:snag:` markers naming a detector
//! subclass. The bare form exempts the context from that detector; a YAML
//! payload in braces overrides its parameters there:
//!
//! ```text
//! # :snag:TooManyStatements
//! # :snag:LongParameterList { max_params: 5 }
//! ```

use crate::configuration::{ConfigMap, ENABLED_KEY};
use crate::merge::merge_into;
use indexmap::IndexMap;
use regex::Regex;
use serde_yaml::Value;
use snag_core::SnagError;
use std::sync::LazyLock;

static DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r":snag:(\w+)[ \t]*(\{.*\})?").expect("directive pattern is valid")
});

/// Per-detector overrides harvested from one comment block.
#[derive(Debug, Clone, Default)]
pub struct Directives(IndexMap<String, ConfigMap>);

impl Directives {
    pub fn get(&self, smell_subclass: &str) -> Option<&ConfigMap> {
        self.0.get(smell_subclass)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Harvest all `:snag:` markers from a comment block.
pub fn parse_directives(comment: &str) -> Result<Directives, SnagError> {
    let mut directives = Directives::default();
    for line in comment.lines() {
        let Some(captures) = DIRECTIVE.captures(line) else {
            continue;
        };
        let detector = captures[1].to_string();
        let overrides = match captures.get(2) {
            Some(payload) => serde_yaml::from_str::<ConfigMap>(payload.as_str()).map_err(|err| {
                SnagError::BadConfiguration(format!(
                    "bad `:snag:{detector}` payload: {err}"
                ))
            })?,
            None => {
                let mut map = ConfigMap::default();
                map.insert(ENABLED_KEY.to_string(), Value::from(false));
                map
            }
        };
        match directives.0.get_mut(&detector) {
            Some(existing) => merge_into(existing, &overrides),
            None => {
                directives.0.insert(detector, overrides);
            }
        }
    }
    Ok(directives)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn bare_directive_disables() {
        let directives = parse_directives("Widget factory.\n:snag:TooManyStatements").unwrap();
        let overrides = directives.get("TooManyStatements").unwrap();
        assert_eq!(overrides.get(ENABLED_KEY).and_then(Value::as_bool), Some(false));
    }

    #[test]
    fn payload_overrides_parameters() {
        let directives =
            parse_directives(":snag:LongParameterList { max_params: 5 }").unwrap();
        let overrides = directives.get("LongParameterList").unwrap();
        assert_eq!(overrides.get("max_params").and_then(Value::as_u64), Some(5));
        assert!(overrides.get(ENABLED_KEY).is_none());
    }

    #[test]
    fn several_directives_accumulate() {
        let directives = parse_directives(
            ":snag:NestedIterators\n:snag:TooManyStatements { max_statements: 9 }",
        )
        .unwrap();
        assert!(directives.get("NestedIterators").is_some());
        assert!(directives.get("TooManyStatements").is_some());
    }

    #[test]
    fn plain_comment_has_none() {
        let directives = parse_directives("Just documentation.").unwrap();
        assert!(directives.is_empty());
    }

    #[test]
    fn malformed_payload_is_bad_configuration() {
        let err = parse_directives(":snag:NilCheck { not yaml: [ }").unwrap_err();
        assert!(matches!(err, SnagError::BadConfiguration(_)));
    }
}
