use serde::{Deserialize, Serialize};

use crate::analyze::node_model::UiNode;

// ============================================================================
// Analysis report — aggregates the finalized node list for rendering
// ============================================================================

/// Aggregated result of one analysis run.
///
/// Built from the finalized node list via `from_nodes()`. Consumed by the
/// console reporter and serialized directly for the JSON format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Path of the analyzed dump
    pub source: String,

    /// Total number of elements analyzed
    pub element_count: usize,

    /// Per-element records, in traversal order, each with a resolved locator
    pub nodes: Vec<UiNode>,
}

impl AnalysisReport {
    pub fn from_nodes(source: &str, nodes: Vec<UiNode>) -> Self {
        Self {
            source: source.to_string(),
            element_count: nodes.len(),
            nodes,
        }
    }
}
