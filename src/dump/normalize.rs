// ============================================================================
// Attribute normalization — namespace stripping and alias resolution
// ============================================================================

use std::collections::BTreeMap;

/// Aliases for the platform resource identifier, highest priority first.
pub const RESOURCE_ID_ALIASES: &[&str] = &["resource-id", "resourceId", "id"];

/// Aliases for the accessibility label, highest priority first.
pub const CONTENT_DESC_ALIASES: &[&str] = &[
    "content-desc",
    "contentDescription",
    "description",
    "name",
    "label",
];

/// Aliases for the widget class name, highest priority first.
pub const CLASS_NAME_ALIASES: &[&str] = &["class", "className"];

/// Strip any namespace qualifier from a tag or attribute name.
///
/// Handles both the Clark notation `{uri}local` emitted by some dump tools
/// and the prefixed form `prefix:local`. Names without a qualifier pass
/// through unchanged.
pub fn local_name(raw: &str) -> &str {
    let unqualified = match raw.rfind('}') {
        Some(pos) => &raw[pos + 1..],
        None => raw,
    };
    match unqualified.rfind(':') {
        Some(pos) => &unqualified[pos + 1..],
        None => unqualified,
    }
}

/// Resolve an attribute through a fixed alias priority list.
///
/// The first alias carrying a non-empty, non-whitespace-only value wins.
/// Returns `None` when no alias is present, which is not an error.
pub fn resolve_alias(attributes: &BTreeMap<String, String>, aliases: &[&str]) -> Option<String> {
    for alias in aliases {
        if let Some(value) = attributes.get(*alias) {
            if !value.trim().is_empty() {
                return Some(value.clone());
            }
        }
    }
    None
}

/// Collapse internal whitespace runs to single spaces and trim the ends,
/// matching what XPath `normalize-space(.)` sees at match time.
pub fn collapse_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
