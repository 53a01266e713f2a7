//! Key pruning against a reference tree.

use indexmap::IndexMap;

use super::TranslationTree;

/// Remove from `tree` every key that does not exist at the corresponding
/// path in `reference`.
///
/// Kept internal nodes are pruned recursively; a key missing from the
/// reference is dropped along with its entire subtree. The reference's shape
/// decides inclusion: a leaf whose reference value is a mapping is dropped,
/// and a mapping whose reference value is a leaf keeps the key but none of
/// its children.
///
/// Combined with [`merge_deep`], this guarantees that the result has exactly
/// the reference's set of key paths.
///
/// A non-mapping root is returned as-is; there are no keys to filter on.
///
/// [`merge_deep`]: super::merge_deep
#[must_use]
pub fn prune_keys(tree: &TranslationTree, reference: &TranslationTree) -> TranslationTree {
    match (tree, reference) {
        (TranslationTree::Node(children), TranslationTree::Node(reference_children)) => {
            let mut kept = IndexMap::new();
            for (key, child) in children {
                let Some(reference_child) = reference_children.get(key) else {
                    continue;
                };
                match (child, reference_child) {
                    // The reference expects a subtree here; a bare leaf cannot satisfy it.
                    (TranslationTree::Leaf(_), TranslationTree::Node(_)) => {}
                    _ => {
                        kept.insert(key.clone(), prune_keys(child, reference_child));
                    }
                }
            }
            TranslationTree::Node(kept)
        }
        // The reference holds no keys at this level.
        (TranslationTree::Node(_), TranslationTree::Leaf(_)) => {
            TranslationTree::Node(IndexMap::new())
        }
        (TranslationTree::Leaf(value), _) => TranslationTree::Leaf(value.clone()),
    }
}
