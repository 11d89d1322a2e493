use crate::analyze::{selector::assign_locators, uniqueness::UniquenessTables, walker::walk};
use crate::analyze::node_model::UiNode;
use crate::dump::parser::{parse_dump, read_dump};
use crate::error::AdvisorError;
use crate::report::report_model::AnalysisReport;

pub mod analyze;
pub mod cli;
pub mod dump;
pub mod error;
pub mod report;
pub mod snippet;

/// Run the full pipeline against a dump file on disk.
pub fn analyze_dump(path: &str) -> Result<AnalysisReport, AdvisorError> {
    let xml = read_dump(path)?;
    let doc = parse_dump(path, &xml)?;
    let nodes = analyze_document(&doc);
    Ok(AnalysisReport::from_nodes(path, nodes))
}

/// Run the core pipeline against an already-parsed document.
///
/// One forward pass plus one global aggregation: walk the tree, count every
/// candidate identifying value document-wide, then assign each node its
/// locator. The two phases must run in that order — a node's choice depends
/// on counts contributed by nodes after it.
pub fn analyze_document(doc: &roxmltree::Document) -> Vec<UiNode> {
    let mut nodes = walk(doc);
    let tables = UniquenessTables::build(&nodes);
    assign_locators(&mut nodes, &tables);
    nodes
}
