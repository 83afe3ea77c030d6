//! Prototype registry: exemplar instances answering clone requests
//!
//! The registry owns its exemplars for its whole lifetime; every clone it
//! hands out is an independent deep copy owned by the caller. Mutating a
//! clone never touches the exemplar or any other clone.

use crate::error::{CreationError, CreationResult};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// Store of exemplar products usable as clone sources
#[derive(Debug, Clone)]
pub struct PrototypeRegistry<K, P> {
    exemplars: HashMap<K, P>,
}

impl<K, P> Default for PrototypeRegistry<K, P> {
    fn default() -> Self {
        Self {
            exemplars: HashMap::new(),
        }
    }
}

impl<K, P> PrototypeRegistry<K, P>
where
    K: Eq + Hash + fmt::Display,
    P: Clone,
{
    /// Create an empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            exemplars: HashMap::new(),
        }
    }

    /// Store an exemplar under `tag`, returning any displaced exemplar
    ///
    /// Last write wins: a second registration for the same tag replaces the
    /// first.
    pub fn register(&mut self, tag: K, exemplar: P) -> Option<P> {
        self.exemplars.insert(tag, exemplar)
    }

    /// Hand out an independent copy of the exemplar registered under `tag`
    ///
    /// Ownership of the copy transfers fully to the caller; the exemplar
    /// stays behind, untouched.
    ///
    /// # Errors
    /// [`CreationError::UnknownVariant`] when nothing is registered for `tag`.
    pub fn clone_of(&self, tag: &K) -> CreationResult<P> {
        self.exemplars
            .get(tag)
            .cloned()
            .ok_or_else(|| CreationError::unknown(tag))
    }

    /// Remove and return the exemplar registered under `tag`
    pub fn remove(&mut self, tag: &K) -> Option<P> {
        self.exemplars.remove(tag)
    }

    /// Check whether an exemplar exists for `tag`
    #[inline]
    #[must_use]
    pub fn contains(&self, tag: &K) -> bool {
        self.exemplars.contains_key(tag)
    }

    /// Get the number of registered exemplars
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.exemplars.len()
    }

    /// Check if the registry is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exemplars.is_empty()
    }

    /// List all registered tags
    #[must_use]
    pub fn tags(&self) -> Vec<&K> {
        self.exemplars.keys().collect()
    }
}

/// A [`PrototypeRegistry`] behind a mutex for callers that share one
/// registry across threads
///
/// Registration and cloning mutate or read shared state; this wrapper is the
/// external mutual exclusion around them. Single-threaded callers should use
/// [`PrototypeRegistry`] directly.
#[derive(Debug, Default)]
pub struct SharedPrototypeRegistry<K, P> {
    inner: Mutex<PrototypeRegistry<K, P>>,
}

impl<K, P> SharedPrototypeRegistry<K, P>
where
    K: Eq + Hash + fmt::Display,
    P: Clone,
{
    /// Wrap an existing registry
    #[must_use]
    pub fn new(registry: PrototypeRegistry<K, P>) -> Self {
        Self {
            inner: Mutex::new(registry),
        }
    }

    /// Store an exemplar under `tag`, returning any displaced exemplar
    pub fn register(&self, tag: K, exemplar: P) -> Option<P> {
        self.inner.lock().register(tag, exemplar)
    }

    /// Hand out an independent copy of the exemplar registered under `tag`
    ///
    /// # Errors
    /// [`CreationError::UnknownVariant`] when nothing is registered for `tag`.
    pub fn clone_of(&self, tag: &K) -> CreationResult<P> {
        self.inner.lock().clone_of(tag)
    }

    /// Check whether an exemplar exists for `tag`
    #[must_use]
    pub fn contains(&self, tag: &K) -> bool {
        self.inner.lock().contains(tag)
    }

    /// Get the number of registered exemplars
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Check if the registry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PrototypeRegistry<&'static str, Vec<u32>> {
        let mut registry = PrototypeRegistry::new();
        registry.register("primes", vec![2, 3, 5]);
        registry
    }

    #[test]
    fn clone_of_registered_tag() {
        let registry = sample();
        assert_eq!(registry.clone_of(&"primes").unwrap(), vec![2, 3, 5]);
    }

    #[test]
    fn clone_of_unregistered_tag_fails() {
        let registry = sample();
        let err = registry.clone_of(&"evens").unwrap_err();
        assert_eq!(err, CreationError::UnknownVariant("evens".to_string()));
    }

    #[test]
    fn clones_are_independent() {
        let registry = sample();
        let mut first = registry.clone_of(&"primes").unwrap();
        let second = registry.clone_of(&"primes").unwrap();

        first.push(7);

        assert_eq!(first, vec![2, 3, 5, 7]);
        assert_eq!(second, vec![2, 3, 5]);
        assert_eq!(registry.clone_of(&"primes").unwrap(), vec![2, 3, 5]);
    }

    #[test]
    fn register_overwrites_and_returns_displaced() {
        let mut registry = sample();
        let displaced = registry.register("primes", vec![2]);
        assert_eq!(displaced, Some(vec![2, 3, 5]));
        assert_eq!(registry.clone_of(&"primes").unwrap(), vec![2]);
    }

    #[test]
    fn remove_releases_exemplar() {
        let mut registry = sample();
        assert_eq!(registry.remove(&"primes"), Some(vec![2, 3, 5]));
        assert!(registry.is_empty());
        assert!(registry.clone_of(&"primes").is_err());
    }

    #[test]
    fn shared_registry_round_trip() {
        let shared = SharedPrototypeRegistry::new(sample());
        assert!(shared.contains(&"primes"));
        assert_eq!(shared.clone_of(&"primes").unwrap(), vec![2, 3, 5]);

        shared.register("evens", vec![2, 4]);
        assert_eq!(shared.len(), 2);
    }
}
