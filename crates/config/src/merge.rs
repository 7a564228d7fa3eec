// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! The layer-merging rule.
//!
//! Scalars from the higher-precedence layer overwrite; sequences concatenate
//! and deduplicate preserving first-seen order. A higher-precedence layer may
//! therefore disable a detector a lower layer enabled, but never the other
//! way round.

use crate::configuration::ConfigMap;
use serde_yaml::Value;

pub fn merge_into(base: &mut ConfigMap, layer: &ConfigMap) {
    for (key, incoming) in layer {
        if let Value::Sequence(additions) = incoming {
            if let Some(Value::Sequence(existing)) = base.get_mut(key) {
                for item in additions {
                    if !existing.contains(item) {
                        existing.push(item.clone());
                    }
                }
                continue;
            }
        }
        base.insert(key.clone(), incoming.clone());
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn map(yaml: &str) -> ConfigMap {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn scalars_overwrite() {
        let mut base = map("max_statements: 5\nenabled: true\n");
        merge_into(&mut base, &map("max_statements: 9\n"));
        assert_eq!(base.get("max_statements").and_then(Value::as_u64), Some(9));
        assert_eq!(base.get("enabled").and_then(Value::as_bool), Some(true));
    }

    #[test]
    fn sequences_concat_and_dedup_first_seen() {
        let mut base = map("exceptions: [one, two]\n");
        merge_into(&mut base, &map("exceptions: [two, three]\n"));
        let merged: Vec<_> = base
            .get("exceptions")
            .and_then(Value::as_sequence)
            .unwrap()
            .iter()
            .filter_map(Value::as_str)
            .collect();
        assert_eq!(merged, vec!["one", "two", "three"]);
    }

    #[test]
    fn scalar_replaces_sequence_and_vice_versa() {
        let mut base = map("exclude: [a]\n");
        merge_into(&mut base, &map("exclude: b\n"));
        assert_eq!(base.get("exclude").and_then(Value::as_str), Some("b"));

        let mut base = map("exclude: b\n");
        merge_into(&mut base, &map("exclude: [a]\n"));
        assert!(base.get("exclude").unwrap().is_sequence());
    }

    #[test]
    fn later_layer_can_disable() {
        let mut base = map("enabled: true\n");
        merge_into(&mut base, &map("enabled: false\n"));
        assert_eq!(base.get("enabled").and_then(Value::as_bool), Some(false));
    }
}
