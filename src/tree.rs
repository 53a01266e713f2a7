//! Core tree transformations: deep merge, key pruning and dot-path
//! flattening.

/// Dot-path flattening
mod flatten;
/// Deep merge
mod merge;
/// Translation tree representation
mod node;
/// Key pruning
mod prune;

pub use flatten::flatten_tree;
pub use merge::merge_deep;
pub use node::TranslationTree;
pub use prune::prune_keys;
