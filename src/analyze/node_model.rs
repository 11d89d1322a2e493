use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ============================================================================
// Element node model — one record per element, in traversal order
// ============================================================================

/// One element from the UI-hierarchy dump.
///
/// Built by the tree walker; `locator` stays `None` until the selector runs
/// after the global uniqueness pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiNode {
    /// 1-based pre-order rank, display only
    pub index: usize,

    /// Namespace-stripped element name
    pub tag: String,

    /// Namespace-stripped attribute map; a later duplicate key overwrites
    /// an earlier one, in document order
    pub attributes: BTreeMap<String, String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_desc: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<TextValue>,

    /// Fully-qualified positional path from the document root
    pub xpath: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub locator: Option<LocatorSuggestion>,
}

/// A node's text and where it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextValue {
    pub value: String,
    pub source: TextSource,
}

/// An explicit `text` attribute always wins over the node's own character
/// content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextSource {
    Attribute,
    Content,
}

// ============================================================================
// Locator suggestion
// ============================================================================

/// Strategy ranking, most to least stable across app builds: resource id,
/// accessibility label, visible text, structural position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocatorStrategy {
    #[serde(rename = "id")]
    Id,
    #[serde(rename = "accessibility-id")]
    AccessibilityId,
    #[serde(rename = "xpath-text")]
    XpathText,
    #[serde(rename = "xpath-positional")]
    XpathPositional,
}

impl LocatorStrategy {
    /// Display name, matching the serialized form.
    pub fn name(&self) -> &'static str {
        match self {
            LocatorStrategy::Id => "id",
            LocatorStrategy::AccessibilityId => "accessibility-id",
            LocatorStrategy::XpathText => "xpath-text",
            LocatorStrategy::XpathPositional => "xpath-positional",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocatorSuggestion {
    pub strategy: LocatorStrategy,
    pub value: String,
    pub reason: String,
}
