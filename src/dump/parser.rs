use roxmltree::{Document, ParsingOptions};

use crate::error::AdvisorError;

// ============================================================================
// Dump loading — file read + XML parse
// ============================================================================

/// Read a UI-hierarchy dump from disk.
pub fn read_dump(path: &str) -> Result<String, AdvisorError> {
    std::fs::read_to_string(path).map_err(|source| AdvisorError::DumpRead {
        path: path.to_string(),
        source,
    })
}

/// Parse dump text into an XML document.
///
/// The document borrows `xml`, so the caller keeps the text alive for as
/// long as the tree is walked. Parser warnings (recoverable oddities in the
/// dump) do not surface here; only a malformed document or a missing root
/// element fails.
pub fn parse_dump<'a>(path: &str, xml: &'a str) -> Result<Document<'a>, AdvisorError> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    Document::parse_with_options(xml, options).map_err(|source| AdvisorError::XmlParse {
        path: path.to_string(),
        source,
    })
}
