//! Dot-path flattening of a translation tree.

use indexmap::IndexMap;
use serde_json::Value;

use super::TranslationTree;

/// Flatten a tree into one entry per leaf, keyed by the leaf's full path
/// with ancestor keys joined by `separator`.
///
/// Entry order is depth-first traversal order, i.e. document order. An empty
/// node contributes no entries. String leaves render verbatim; every other
/// leaf (numbers, booleans, null, opaque arrays) renders as compact JSON.
///
/// Degenerate case: a leaf at the root yields a single entry whose path is
/// `prefix`, or the empty string when no prefix is given.
///
/// # Examples
/// ```
/// use i18n_locale_sync::tree::{TranslationTree, flatten_tree};
/// use serde_json::json;
///
/// let tree: TranslationTree = serde_json::from_value(json!({
///     "common": {
///         "hello": "Hello",
///         "goodbye": "Goodbye"
///     }
/// }))
/// .unwrap();
///
/// let flattened = flatten_tree(&tree, ".", None);
/// assert_eq!(flattened.get("common.hello"), Some(&"Hello".to_string()));
/// assert_eq!(flattened.get("common.goodbye"), Some(&"Goodbye".to_string()));
/// ```
#[must_use]
pub fn flatten_tree(
    tree: &TranslationTree,
    separator: &str,
    prefix: Option<&str>,
) -> IndexMap<String, String> {
    let mut entries = IndexMap::new();
    flatten_into(tree, separator, prefix, &mut entries);
    entries
}

fn flatten_into(
    tree: &TranslationTree,
    separator: &str,
    prefix: Option<&str>,
    entries: &mut IndexMap<String, String>,
) {
    match tree {
        TranslationTree::Node(children) => {
            for (key, child) in children {
                let full_key =
                    prefix.map_or_else(|| key.clone(), |p| format!("{p}{separator}{key}"));
                flatten_into(child, separator, Some(&full_key), entries);
            }
        }
        TranslationTree::Leaf(Value::String(s)) => {
            entries.insert(prefix.unwrap_or_default().to_string(), s.clone());
        }
        TranslationTree::Leaf(value) => {
            entries.insert(prefix.unwrap_or_default().to_string(), value.to_string());
        }
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
    fn entries_follow_traversal_order() {
        let flattened = flatten_tree(&tree(json!({"a": {"b": 1, "c": {"d": 2}}})), ".", None);

        let entries: Vec<(&str, &str)> =
            flattened.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        assert_that!(entries, elements_are![eq(&("a.b", "1")), eq(&("a.c.d", "2"))]);
    }

    #[rstest]
    fn prefix_is_prepended() {
        let flattened = flatten_tree(&tree(json!({"hello": "Hello"})), ".", Some("common"));

        assert_that!(flattened.get("common.hello"), some(eq(&"Hello".to_string())));
    }

    #[rstest]
    fn custom_separator_is_used() {
        let flattened = flatten_tree(&tree(json!({"common": {"hello": "Hello"}})), "_", None);

        assert_that!(flattened.get("common_hello"), some(eq(&"Hello".to_string())));
    }

    #[rstest]
    fn empty_node_contributes_nothing() {
        let flattened = flatten_tree(&tree(json!({"a": {}, "b": "1"})), ".", None);

        assert_that!(flattened.len(), eq(1));
        assert_that!(flattened.get("b"), some(eq(&"1".to_string())));
    }

    #[rstest]
    fn non_string_leaves_render_as_json() {
        let flattened = flatten_tree(
            &tree(json!({"number": 42, "boolean": true, "nothing": null, "list": ["a", "b"]})),
            ".",
            None,
        );

        assert_that!(flattened.get("number"), some(eq(&"42".to_string())));
        assert_that!(flattened.get("boolean"), some(eq(&"true".to_string())));
        assert_that!(flattened.get("nothing"), some(eq(&"null".to_string())));
        assert_that!(flattened.get("list"), some(eq(&"[\"a\",\"b\"]".to_string())));
    }

    #[rstest]
    #[case::without_prefix(None, "")]
    #[case::with_prefix(Some("root"), "root")]
    fn leaf_at_root_yields_single_entry(#[case] prefix: Option<&str>, #[case] expected_key: &str) {
        let flattened = flatten_tree(&tree(json!("bare value")), ".", prefix);

        assert_that!(flattened.len(), eq(1));
        assert_that!(flattened.get(expected_key), some(eq(&"bare value".to_string())));
    }
}
