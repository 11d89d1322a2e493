use crate::report::report_model::AnalysisReport;

// ============================================================================
// Console reporter — formatted terminal output
// ============================================================================

/// Format an analysis report for terminal output.
///
/// Produces output like:
/// ```text
/// === Locator Analysis: dump.xml ===
///
/// [1] hierarchy
///     xpath-positional: //hierarchy
///     (no unique attribute; fallback to full path)
/// [2] Button  resource-id=login
///     id: login
///     (unique resource id)
///
/// === 2 elements analyzed ===
/// ```
pub fn format_console_report(report: &AnalysisReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== Locator Analysis: {} ===\n\n", report.source));

    for node in &report.nodes {
        out.push_str(&format!("[{}] {}", node.index, node.tag));
        if let Some(id) = &node.resource_id {
            out.push_str(&format!("  resource-id={}", id));
        }
        if let Some(desc) = &node.content_desc {
            out.push_str(&format!("  content-desc={}", desc));
        }
        if let Some(text) = &node.text {
            out.push_str(&format!("  text={:?}", text.value));
        }
        out.push('\n');

        match &node.locator {
            Some(suggestion) => {
                out.push_str(&format!(
                    "    {}: {}\n    ({})\n",
                    suggestion.strategy.name(),
                    suggestion.value,
                    suggestion.reason
                ));
            }
            None => {
                // Selector has not run; still show the structural path.
                out.push_str(&format!("    xpath: {}\n", node.xpath));
            }
        }
    }

    out.push_str(&format!(
        "\n=== {} elements analyzed ===\n",
        report.element_count
    ));

    out
}
