use std::collections::BTreeMap;

use locator_advisor::dump::normalize::{
    CONTENT_DESC_ALIASES, RESOURCE_ID_ALIASES, collapse_whitespace, local_name, resolve_alias,
};

// =========================================================================
// Namespace stripping
// =========================================================================

#[test]
fn local_name_strips_qualifiers() {
    assert_eq!(local_name("resource-id"), "resource-id", "Plain name untouched");
    assert_eq!(local_name("android:id"), "id", "Prefix form stripped");
    assert_eq!(
        local_name("{http://schemas.android.com/apk/res/android}id"),
        "id",
        "Clark notation stripped"
    );
    assert_eq!(
        local_name("{urn:example:ns}prefix:name"),
        "name",
        "Clark plus prefix strips to local name"
    );
    assert_eq!(local_name(""), "", "Empty name passes through");
}

// =========================================================================
// Alias resolution priority
// =========================================================================

fn attrs(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn alias_priority_first_non_empty_wins() {
    let a = attrs(&[("resource-id", "com.app:id/login"), ("id", "other")]);
    assert_eq!(
        resolve_alias(&a, RESOURCE_ID_ALIASES),
        Some("com.app:id/login".to_string()),
        "resource-id outranks id"
    );

    let a = attrs(&[("resource-id", "   "), ("id", "fallback")]);
    assert_eq!(
        resolve_alias(&a, RESOURCE_ID_ALIASES),
        Some("fallback".to_string()),
        "Whitespace-only value skipped in favor of next alias"
    );

    let a = attrs(&[("bounds", "[0,0][10,10]")]);
    assert_eq!(
        resolve_alias(&a, RESOURCE_ID_ALIASES),
        None,
        "No alias present is not an error"
    );
}

#[test]
fn content_desc_alias_chain() {
    let a = attrs(&[("label", "Close"), ("name", "CloseButton")]);
    assert_eq!(
        resolve_alias(&a, CONTENT_DESC_ALIASES),
        Some("CloseButton".to_string()),
        "name outranks label"
    );

    let a = attrs(&[("content-desc", "Back"), ("description", "Go back")]);
    assert_eq!(
        resolve_alias(&a, CONTENT_DESC_ALIASES),
        Some("Back".to_string()),
        "content-desc outranks description"
    );
}

// =========================================================================
// Whitespace collapsing
// =========================================================================

#[test]
fn collapse_whitespace_matches_normalize_space() {
    assert_eq!(collapse_whitespace("  Submit   order \n"), "Submit order");
    assert_eq!(collapse_whitespace("\t \n "), "", "Blank collapses to empty");
    assert_eq!(collapse_whitespace("one"), "one");
}
