//! Variant registry for tag-driven construction
//!
//! Provides [`VariantRegistry`] mapping a closed discriminator to a
//! constructor, and the [`Creator`] seam implemented by anything that can
//! turn a tag into a product.

use crate::error::{CreationError, CreationResult};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// Anything that maps a discriminator to a constructed product
///
/// The caller supplies a tag and receives an owned product; concrete-type
/// selection stays behind this seam. Construction has no side effects and
/// always succeeds once the tag resolves.
pub trait Creator {
    /// Discriminator type (a closed enumeration)
    type Tag;

    /// Product type handed back to the caller
    type Output;

    /// Construct the variant selected by `tag`
    ///
    /// # Errors
    /// [`CreationError::UnknownVariant`] when no rule is registered for `tag`.
    fn create(&self, tag: &Self::Tag) -> CreationResult<Self::Output>;
}

type BoxedCtor<P> = Box<dyn Fn() -> P + Send + Sync>;

/// Registry of construction rules keyed by variant tag
///
/// Each tag maps to exactly one rule; registering a tag twice replaces the
/// earlier rule (last write wins). Unknown tags fail with
/// [`CreationError::UnknownVariant`] rather than falling back to a default.
pub struct VariantRegistry<K, P> {
    constructors: HashMap<K, BoxedCtor<P>>,
}

impl<K, P> Default for VariantRegistry<K, P> {
    fn default() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }
}

impl<K, P> fmt::Debug for VariantRegistry<K, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariantRegistry")
            .field("variant_count", &self.constructors.len())
            .finish()
    }
}

impl<K, P> VariantRegistry<K, P>
where
    K: Eq + Hash + fmt::Display,
{
    /// Create an empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    /// Register a construction rule for `tag`
    ///
    /// Returns `true` when an earlier rule for the same tag was displaced.
    pub fn register<F>(&mut self, tag: K, ctor: F) -> bool
    where
        F: Fn() -> P + Send + Sync + 'static,
    {
        self.constructors.insert(tag, Box::new(ctor)).is_some()
    }

    /// Check whether a rule exists for `tag`
    #[inline]
    #[must_use]
    pub fn contains(&self, tag: &K) -> bool {
        self.constructors.contains_key(tag)
    }

    /// Get the number of registered variants
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    /// Check if the registry is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }

    /// List all registered tags
    #[must_use]
    pub fn tags(&self) -> Vec<&K> {
        self.constructors.keys().collect()
    }
}

impl<K, P> Creator for VariantRegistry<K, P>
where
    K: Eq + Hash + fmt::Display,
{
    type Tag = K;
    type Output = P;

    fn create(&self, tag: &K) -> CreationResult<P> {
        self.constructors
            .get(tag)
            .map(|ctor| ctor())
            .ok_or_else(|| CreationError::unknown(tag))
    }
}
