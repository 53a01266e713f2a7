//! Translation tree representation.

use indexmap::IndexMap;
use serde::{
    Deserialize,
    Serialize,
};
use serde_json::Value;

/// A parsed translation document.
///
/// Every JSON object becomes a [`TranslationTree::Node`]; strings, numbers,
/// booleans, null and arrays become [`TranslationTree::Leaf`]s. Arrays are
/// opaque leaf values and are never recursed into.
///
/// Key order within a node is document order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TranslationTree {
    /// Internal node: ordered mapping from key to subtree.
    Node(IndexMap<String, TranslationTree>),
    /// Leaf value, kept verbatim from the source document.
    Leaf(Value),
}

impl Default for TranslationTree {
    fn default() -> Self {
        Self::Node(IndexMap::new())
    }
}

impl TranslationTree {
    /// Whether this is an internal node.
    #[must_use]
    pub const fn is_node(&self) -> bool {
        matches!(self, Self::Node(_))
    }

    /// Serialize with tab indentation, the layout translation files are
    /// conventionally committed with.
    ///
    /// # Errors
    /// Returns the underlying serializer error.
    pub fn to_tab_indented_json(&self) -> Result<String, serde_json::Error> {
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
        let mut buf = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        // serde_json only emits valid UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
