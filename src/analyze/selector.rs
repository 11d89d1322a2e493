use crate::analyze::node_model::{
    LocatorStrategy, LocatorSuggestion, TextSource, TextValue, UiNode,
};
use crate::analyze::uniqueness::UniquenessTables;

// ============================================================================
// Locator selection — fixed-priority decision over uniqueness counts
// ============================================================================

/// Populate every node's `locator`. Must run after the uniqueness tables are
/// built: the choice for node N depends on counts that include nodes after N.
pub fn assign_locators(nodes: &mut [UiNode], tables: &UniquenessTables) {
    for node in nodes.iter_mut() {
        node.locator = Some(select_locator(node, tables));
    }
}

/// Choose a strategy for one node.
///
/// Candidates are tried in reliability order — resource id, accessibility
/// label, visible text — and the first unique one wins. A node with nothing
/// unique degrades to its full structural path; there is no error case.
pub fn select_locator(node: &UiNode, tables: &UniquenessTables) -> LocatorSuggestion {
    unique_resource_id(node, tables)
        .or_else(|| unique_content_desc(node, tables))
        .or_else(|| unique_text(node, tables))
        .unwrap_or_else(|| positional_fallback(node))
}

fn unique_resource_id(node: &UiNode, tables: &UniquenessTables) -> Option<LocatorSuggestion> {
    let id = node.resource_id.as_ref()?;
    if !tables.resource_id_unique(id) {
        return None;
    }
    Some(LocatorSuggestion {
        strategy: LocatorStrategy::Id,
        value: id.clone(),
        reason: "unique resource id".to_string(),
    })
}

fn unique_content_desc(node: &UiNode, tables: &UniquenessTables) -> Option<LocatorSuggestion> {
    let desc = node.content_desc.as_ref()?;
    if !tables.content_desc_unique(desc) {
        return None;
    }
    Some(LocatorSuggestion {
        strategy: LocatorStrategy::AccessibilityId,
        value: desc.clone(),
        reason: "unique content description".to_string(),
    })
}

fn unique_text(node: &UiNode, tables: &UniquenessTables) -> Option<LocatorSuggestion> {
    let text = node.text.as_ref()?;
    if !tables.text_unique(&text.value) {
        return None;
    }
    Some(LocatorSuggestion {
        strategy: LocatorStrategy::XpathText,
        value: text_predicate_xpath(&node.tag, text),
        reason: "unique text value".to_string(),
    })
}

fn positional_fallback(node: &UiNode) -> LocatorSuggestion {
    LocatorSuggestion {
        strategy: LocatorStrategy::XpathPositional,
        value: node.xpath.clone(),
        reason: "no unique attribute; fallback to full path".to_string(),
    }
}

// ============================================================================
// XPath text-predicate synthesis
// ============================================================================

/// Build a text-matching XPath for a node.
///
/// Attribute text matches exactly via `@text=`; content text goes through
/// `normalize-space(.)` so minor whitespace differences in the markup do not
/// break the match.
pub fn text_predicate_xpath(tag: &str, text: &TextValue) -> String {
    let literal = xpath_literal(&text.value);
    match text.source {
        TextSource::Attribute => format!("//{}[@text={}]", tag, literal),
        TextSource::Content => format!("//{}[normalize-space(.)={}]", tag, literal),
    }
}

/// Embed an arbitrary string as an XPath 1.0 literal.
///
/// Single quotes when the value has none; double quotes when it has single
/// quotes but no double quotes; otherwise a `concat(...)` of single-quoted
/// fragments with `"'"` re-inserting each embedded single quote. XPath 1.0
/// literals have no escape syntax, so this is the only general encoding.
pub fn xpath_literal(value: &str) -> String {
    if !value.contains('\'') {
        return format!("'{}'", value);
    }
    if !value.contains('"') {
        return format!("\"{}\"", value);
    }
    let fragments: Vec<String> = value
        .split('\'')
        .map(|fragment| format!("'{}'", fragment))
        .collect();
    format!("concat({})", fragments.join(", \"'\", "))
}
