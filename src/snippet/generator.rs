use std::collections::BTreeMap;

use crate::analyze::node_model::{LocatorStrategy, LocatorSuggestion, UiNode};
use crate::snippet::languages::{TargetLanguage, escape_literal};

// ============================================================================
// Snippet rendering — one call expression per (strategy, language)
// ============================================================================

/// Render the call expression for one suggestion in one language.
///
/// Pure formatting: both xpath strategies share the language's xpath
/// template, so the table is three templates per language.
pub fn render_snippet(lang: TargetLanguage, suggestion: &LocatorSuggestion) -> String {
    let value = escape_literal(&suggestion.value, lang.delimiter());
    match (lang, by_kind(suggestion.strategy)) {
        (TargetLanguage::Java, ByKind::Id) => {
            format!("driver.findElement(AppiumBy.id(\"{}\"))", value)
        }
        (TargetLanguage::Java, ByKind::AccessibilityId) => {
            format!("driver.findElement(AppiumBy.accessibilityId(\"{}\"))", value)
        }
        (TargetLanguage::Java, ByKind::Xpath) => {
            format!("driver.findElement(AppiumBy.xpath(\"{}\"))", value)
        }
        (TargetLanguage::Python, ByKind::Id) => {
            format!("driver.find_element(AppiumBy.ID, \"{}\")", value)
        }
        (TargetLanguage::Python, ByKind::AccessibilityId) => {
            format!("driver.find_element(AppiumBy.ACCESSIBILITY_ID, \"{}\")", value)
        }
        (TargetLanguage::Python, ByKind::Xpath) => {
            format!("driver.find_element(AppiumBy.XPATH, \"{}\")", value)
        }
        (TargetLanguage::JavaScript, ByKind::Id) => {
            format!("await driver.$('id={}')", value)
        }
        (TargetLanguage::JavaScript, ByKind::AccessibilityId) => {
            format!("await driver.$('~{}')", value)
        }
        (TargetLanguage::JavaScript, ByKind::Xpath) => {
            format!("await driver.$('{}')", value)
        }
        (TargetLanguage::Ruby, ByKind::Id) => {
            format!("driver.find_element(:id, '{}')", value)
        }
        (TargetLanguage::Ruby, ByKind::AccessibilityId) => {
            format!("driver.find_element(:accessibility_id, '{}')", value)
        }
        (TargetLanguage::Ruby, ByKind::Xpath) => {
            format!("driver.find_element(:xpath, '{}')", value)
        }
        (TargetLanguage::CSharp, ByKind::Id) => {
            format!("driver.FindElement(MobileBy.Id(\"{}\"))", value)
        }
        (TargetLanguage::CSharp, ByKind::AccessibilityId) => {
            format!("driver.FindElement(MobileBy.AccessibilityId(\"{}\"))", value)
        }
        (TargetLanguage::CSharp, ByKind::Xpath) => {
            format!("driver.FindElement(MobileBy.XPath(\"{}\"))", value)
        }
    }
}

/// Per-node snippet map, keyed by language name.
pub fn node_snippets(
    node: &UiNode,
    languages: &[TargetLanguage],
) -> BTreeMap<&'static str, String> {
    let mut out = BTreeMap::new();
    if let Some(suggestion) = &node.locator {
        for lang in languages {
            out.insert(lang.name(), render_snippet(*lang, suggestion));
        }
    }
    out
}

/// Assemble the full snippet file for one language: an annotation comment
/// per element followed by its call expression.
pub fn snippet_file(lang: TargetLanguage, source: &str, nodes: &[UiNode]) -> String {
    let comment = lang.comment_prefix();
    let mut out = String::new();
    out.push_str(&format!("{} Locator snippets for {}\n", comment, source));

    for node in nodes {
        let suggestion = match &node.locator {
            Some(s) => s,
            None => continue,
        };
        out.push_str(&format!(
            "\n{} [{}] {} ({})\n",
            comment,
            node.index,
            node.tag,
            suggestion.reason
        ));
        out.push_str(&render_snippet(lang, suggestion));
        out.push('\n');
    }

    out
}

/// Template selector: both xpath strategies use the xpath template.
enum ByKind {
    Id,
    AccessibilityId,
    Xpath,
}

fn by_kind(strategy: LocatorStrategy) -> ByKind {
    match strategy {
        LocatorStrategy::Id => ByKind::Id,
        LocatorStrategy::AccessibilityId => ByKind::AccessibilityId,
        LocatorStrategy::XpathText | LocatorStrategy::XpathPositional => ByKind::Xpath,
    }
}
