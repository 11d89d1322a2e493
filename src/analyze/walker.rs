use std::collections::{BTreeMap, HashMap};

use roxmltree::{Document, Node};

use crate::analyze::node_model::{TextSource, TextValue, UiNode};
use crate::dump::normalize::{
    CLASS_NAME_ALIASES, CONTENT_DESC_ALIASES, RESOURCE_ID_ALIASES, collapse_whitespace,
    local_name, resolve_alias,
};

/// Elements whose name strips to nothing still need a path segment.
const UNNAMED_TAG: &str = "node";

// ============================================================================
// Tree walker — pre-order traversal with positional XPath synthesis
// ============================================================================

/// Walk the document in pre-order (parent before children, siblings
/// left-to-right), producing one `UiNode` per element.
///
/// The root's path is `//<root-tag>`; each child appends `/<tag>` or, when
/// siblings share the tag, `/<tag>[n]` with a 1-based position in document
/// order. Traversal order and paths depend only on the document, so repeated
/// runs are byte-identical.
pub fn walk(doc: &Document) -> Vec<UiNode> {
    let root = doc.root_element();
    let tag = element_tag(&root);
    let path = format!("//{}", tag);
    let mut nodes = Vec::new();
    visit(root, tag, &path, &mut nodes);
    nodes
}

fn visit(el: Node, tag: String, path: &str, out: &mut Vec<UiNode>) {
    let index = out.len() + 1;
    out.push(build_node(&el, index, tag, path));

    let children: Vec<(Node, String)> = el
        .children()
        .filter(|c| c.is_element())
        .map(|c| {
            let tag = element_tag(&c);
            (c, tag)
        })
        .collect();

    // Total per tag decides whether a positional predicate is needed at all.
    let mut totals: HashMap<String, usize> = HashMap::new();
    for (_, tag) in &children {
        *totals.entry(tag.clone()).or_insert(0) += 1;
    }

    let mut seen: HashMap<String, usize> = HashMap::new();
    for (child, tag) in children {
        let segment = if totals[tag.as_str()] > 1 {
            let position = seen
                .entry(tag.clone())
                .and_modify(|n| *n += 1)
                .or_insert(1);
            format!("{}[{}]", tag, position)
        } else {
            tag.clone()
        };
        let child_path = format!("{}/{}", path, segment);
        visit(child, tag, &child_path, out);
    }
}

// ============================================================================
// Per-node construction
// ============================================================================

fn build_node(el: &Node, index: usize, tag: String, path: &str) -> UiNode {
    let mut attributes = BTreeMap::new();
    for attr in el.attributes() {
        // Later duplicate namespace variants overwrite earlier ones.
        attributes.insert(local_name(attr.name()).to_string(), attr.value().to_string());
    }

    let resource_id = resolve_alias(&attributes, RESOURCE_ID_ALIASES);
    let content_desc = resolve_alias(&attributes, CONTENT_DESC_ALIASES);
    let class_name = resolve_alias(&attributes, CLASS_NAME_ALIASES);
    let text = extract_text(&attributes, el);

    UiNode {
        index,
        tag,
        attributes,
        resource_id,
        content_desc,
        class_name,
        text,
        xpath: path.to_string(),
        locator: None,
    }
}

/// Resolve the node's text: an explicit `text` attribute wins over the
/// node's own character content.
///
/// Content text is whitespace-collapsed so it agrees with the
/// `normalize-space(.)` predicate it will be matched with; attribute text is
/// kept verbatim for an exact `@text=` match. Blank values count as absent
/// either way.
fn extract_text(attributes: &BTreeMap<String, String>, el: &Node) -> Option<TextValue> {
    if let Some(value) = attributes.get("text") {
        if !value.trim().is_empty() {
            return Some(TextValue {
                value: value.clone(),
                source: TextSource::Attribute,
            });
        }
    }

    let content: String = el
        .children()
        .filter(|c| c.is_text())
        .filter_map(|c| c.text())
        .collect();
    let collapsed = collapse_whitespace(&content);
    if collapsed.is_empty() {
        return None;
    }
    Some(TextValue {
        value: collapsed,
        source: TextSource::Content,
    })
}

fn element_tag(el: &Node) -> String {
    let name = local_name(el.tag_name().name());
    if name.is_empty() {
        UNNAMED_TAG.to_string()
    } else {
        name.to_string()
    }
}
