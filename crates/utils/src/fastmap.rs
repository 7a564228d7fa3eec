// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! FastMap and FastSet types for efficient key-value storage.
//!
//! Both are the std collections backed by the rapidhash algorithm. The engine
//! is single-threaded by contract, so there is no concurrent-map variant; use
//! `FastMap::default()` to construct (the custom hasher rules out `new()`).

pub type FastMap<K, T> = rapidhash::RapidHashMap<K, T>;
pub type FastSet<T> = rapidhash::RapidHashSet<T>;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn map_roundtrip() {
        let mut map = FastMap::default();
        map.insert("max_statements", 5);
        assert_eq!(map.get("max_statements"), Some(&5));
    }

    #[test]
    fn set_dedup() {
        let mut set = FastSet::default();
        set.insert("@x");
        set.insert("@x");
        assert_eq!(set.len(), 1);
    }
}
