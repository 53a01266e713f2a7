//! Deep merge of a subordinate tree with its master.

use indexmap::IndexMap;

use super::TranslationTree;

/// Merge `subordinate` over `master`.
///
/// The master provides the key shape and default values; any leaf the
/// subordinate already has wins over the master's. Keys only the subordinate
/// has are carried through unchanged — removing them is [`prune_keys`]'s job,
/// not this function's.
///
/// When one side holds a leaf and the other a mapping at the same key, the
/// subordinate's value stands as given; a leaf cannot be recursively merged
/// with a mapping.
///
/// Key order in the result: the master's keys first, in the master's order,
/// then subordinate-only keys in the subordinate's order.
///
/// [`prune_keys`]: super::prune_keys
///
/// # Examples
/// ```
/// use i18n_locale_sync::tree::{TranslationTree, merge_deep};
/// use serde_json::json;
///
/// let subordinate: TranslationTree =
///     serde_json::from_value(json!({"a": {"b": "X"}, "z": "stray"})).unwrap();
/// let master: TranslationTree =
///     serde_json::from_value(json!({"a": {"b": "1", "c": "2"}})).unwrap();
///
/// let merged = merge_deep(&subordinate, &master);
///
/// let expected: TranslationTree =
///     serde_json::from_value(json!({"a": {"b": "X", "c": "2"}, "z": "stray"})).unwrap();
/// assert_eq!(merged, expected);
/// ```
#[must_use]
pub fn merge_deep(subordinate: &TranslationTree, master: &TranslationTree) -> TranslationTree {
    match (subordinate, master) {
        (TranslationTree::Node(sub_children), TranslationTree::Node(master_children)) => {
            let mut merged = IndexMap::with_capacity(master_children.len());
            for (key, master_child) in master_children {
                let child = match sub_children.get(key) {
                    Some(sub_child) => merge_deep(sub_child, master_child),
                    None => master_child.clone(),
                };
                merged.insert(key.clone(), child);
            }
            for (key, sub_child) in sub_children {
                if !master_children.contains_key(key) {
                    merged.insert(key.clone(), sub_child.clone());
                }
            }
            TranslationTree::Node(merged)
        }
        // Leaf on either side: the subordinate's value takes precedence.
        (subordinate, _) => subordinate.clone(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    fn tree(value: serde_json::Value) -> TranslationTree {
        serde_json::from_value(value).unwrap()
    }

    #[rstest]
    fn subordinate_leaf_overrides_master() {
        let subordinate = tree(json!({"greeting": "Hallo"}));
        let master = tree(json!({"greeting": "Hello"}));

        let merged = merge_deep(&subordinate, &master);

        assert_that!(merged, eq(&tree(json!({"greeting": "Hallo"}))));
    }

    #[rstest]
    fn missing_subtree_is_copied_from_master() {
        let subordinate = tree(json!({}));
        let master = tree(json!({"menu": {"open": "Open", "close": "Close"}}));

        let merged = merge_deep(&subordinate, &master);

        assert_that!(merged, eq(&master));
    }

    #[rstest]
    fn subordinate_only_keys_are_carried_through() {
        let subordinate = tree(json!({"stale": "value"}));
        let master = tree(json!({"fresh": "value"}));

        let merged = merge_deep(&subordinate, &master);

        assert_that!(merged, eq(&tree(json!({"fresh": "value", "stale": "value"}))));
    }

    #[rstest]
    #[case::sub_leaf_master_node(
        json!({"a": "leaf"}),
        json!({"a": {"b": "1"}}),
        json!({"a": "leaf"})
    )]
    #[case::sub_node_master_leaf(
        json!({"a": {"b": "1"}}),
        json!({"a": "leaf"}),
        json!({"a": {"b": "1"}})
    )]
    fn shape_mismatch_resolves_to_subordinate(
        #[case] subordinate: serde_json::Value,
        #[case] master: serde_json::Value,
        #[case] expected: serde_json::Value,
    ) {
        let merged = merge_deep(&tree(subordinate), &tree(master));

        assert_that!(merged, eq(&tree(expected)));
    }

    #[rstest]
    fn master_key_order_wins() {
        let subordinate = tree(json!({"c": "3", "a": "1"}));
        let master = tree(json!({"a": "m", "b": "m", "c": "m"}));

        let merged = merge_deep(&subordinate, &master);

        let TranslationTree::Node(children) = merged else {
            unreachable!("merge of two nodes yields a node");
        };
        assert_that!(
            children.keys().collect::<Vec<_>>(),
            elements_are![eq(&"a"), eq(&"b"), eq(&"c")]
        );
    }

    #[rstest]
    fn inputs_are_not_mutated() {
        let subordinate = tree(json!({"a": {"b": "X"}}));
        let master = tree(json!({"a": {"b": "1", "c": "2"}}));
        let (sub_before, master_before) = (subordinate.clone(), master.clone());

        let _ = merge_deep(&subordinate, &master);

        assert_that!(subordinate, eq(&sub_before));
        assert_that!(master, eq(&master_before));
    }

    #[rstest]
    fn arrays_are_opaque_leaves() {
        let subordinate = tree(json!({"items": ["eins", "zwei"]}));
        let master = tree(json!({"items": ["one", "two", "three"]}));

        let merged = merge_deep(&subordinate, &master);

        assert_that!(merged, eq(&tree(json!({"items": ["eins", "zwei"]}))));
    }
}
