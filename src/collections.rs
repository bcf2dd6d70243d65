use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;


/// Insertion-ordered map with Fx hashing.
/// Node ids throughout the crate are indices into one of these.
pub type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;
