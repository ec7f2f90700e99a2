//! Options fetched per depth of the selection path.
//!
//! An entry at level `i` stays valid only while the path prefix of length `i`
//! that produced it is unchanged. Callers evict with [`LevelCache::evict_after`]
//! whenever they edit the path.

use crate::core::response::OptionsLevel;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelCache {
    levels: BTreeMap<usize, OptionsLevel>,
}

impl LevelCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, level: usize) -> Option<&OptionsLevel> {
        self.levels.get(&level)
    }

    pub fn contains(&self, level: usize) -> bool {
        self.levels.contains_key(&level)
    }

    /// Store `options` at `level` unless an entry is already there.
    ///
    /// Returns whether anything was stored.
    pub fn insert_if_absent(&mut self, level: usize, options: OptionsLevel) -> bool {
        if self.levels.contains_key(&level) {
            return false;
        }
        self.levels.insert(level, options);
        true
    }

    /// Remove every entry deeper than `level`.
    pub fn evict_after(&mut self, level: usize) {
        let evicted = self.levels.split_off(&(level + 1));
        if !evicted.is_empty() {
            log::debug!(
                "Evicted cached levels {:?}",
                evicted.keys().collect::<Vec<_>>()
            );
        }
    }

    pub fn options(&self, level: usize) -> &[String] {
        self.levels
            .get(&level)
            .map(|l| l.options.as_slice())
            .unwrap_or(&[])
    }

    pub fn message(&self, level: usize) -> &str {
        self.levels
            .get(&level)
            .map(|l| l.message.as_str())
            .unwrap_or("")
    }

    pub fn levels(&self) -> impl Iterator<Item = usize> + '_ {
        self.levels.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(message: &str, options: &[&str]) -> OptionsLevel {
        OptionsLevel {
            message: message.to_string(),
            options: options.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn populated() -> LevelCache {
        let mut cache = LevelCache::new();
        for i in 0..4 {
            cache.insert_if_absent(i, level(&format!("level {i}"), &["x"]));
        }
        cache
    }

    #[test]
    fn test_insert_if_absent_does_not_overwrite() {
        let mut cache = LevelCache::new();
        assert!(cache.insert_if_absent(0, level("first", &["a"])));
        assert!(!cache.insert_if_absent(0, level("second", &["b"])));
        assert_eq!(cache.message(0), "first");
        assert_eq!(cache.options(0), &["a".to_string()]);
    }

    #[test]
    fn test_evict_after_keeps_prefix() {
        let mut cache = populated();
        cache.evict_after(1);
        assert_eq!(cache.levels().collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn test_evict_after_last_level_is_noop() {
        let mut cache = populated();
        cache.evict_after(3);
        assert_eq!(cache.len(), 4);
    }

    #[test]
    fn test_missing_level_helpers() {
        let cache = LevelCache::new();
        assert!(cache.options(2).is_empty());
        assert_eq!(cache.message(2), "");
        assert!(cache.is_empty());
    }
}
