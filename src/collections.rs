//! Collection aliases shared by the editor and wire models.

use indexmap::IndexMap;

/// An insertion-ordered map. Every map that ends up in a compiled document
/// must iterate in a stable order, so plain hash maps are never used there.
pub type OrderedMap<K, V> = IndexMap<K, V, ahash::RandomState>;
