use std::collections::HashMap;

use crate::analyze::node_model::UiNode;

// ============================================================================
// Uniqueness tables — document-wide occurrence counts per candidate value
// ============================================================================

/// Occurrence counts for the three candidate identifying values across the
/// whole document.
///
/// Absent values are never counted, so an empty string can never register as
/// unique. The maps are only ever probed by value, never iterated into
/// output, so ordering does not matter.
#[derive(Debug, Default)]
pub struct UniquenessTables {
    pub resource_ids: HashMap<String, usize>,
    pub content_descs: HashMap<String, usize>,
    pub texts: HashMap<String, usize>,
}

impl UniquenessTables {
    /// Build all three tables in one linear scan over the node list.
    pub fn build(nodes: &[UiNode]) -> Self {
        let mut tables = UniquenessTables::default();
        for node in nodes {
            if let Some(id) = &node.resource_id {
                *tables.resource_ids.entry(id.clone()).or_insert(0) += 1;
            }
            if let Some(desc) = &node.content_desc {
                *tables.content_descs.entry(desc.clone()).or_insert(0) += 1;
            }
            if let Some(text) = &node.text {
                *tables.texts.entry(text.value.clone()).or_insert(0) += 1;
            }
        }
        tables
    }

    /// A value identifies a single node iff it occurs exactly once.
    pub fn resource_id_unique(&self, value: &str) -> bool {
        self.resource_ids.get(value) == Some(&1)
    }

    pub fn content_desc_unique(&self, value: &str) -> bool {
        self.content_descs.get(value) == Some(&1)
    }

    pub fn text_unique(&self, value: &str) -> bool {
        self.texts.get(value) == Some(&1)
    }
}
