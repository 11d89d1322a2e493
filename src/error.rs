use std::fmt;

#[derive(Debug)]
pub enum AdvisorError {
    /// Dump file could not be read from disk
    DumpRead { path: String, source: std::io::Error },

    /// Dump file is not well-formed XML (or has no document element)
    XmlParse { path: String, source: roxmltree::Error },

    /// A requested snippet language is not in the supported set
    UnsupportedLanguage(String),

    /// Snippet languages were requested without a destination directory
    SnippetDirMissing,
}

impl fmt::Display for AdvisorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdvisorError::DumpRead { path, source } => {
                write!(f, "Failed to read dump '{}': {}", path, source)
            }
            AdvisorError::XmlParse { path, source } => {
                write!(f, "Failed to parse '{}' as XML: {}", path, source)
            }
            AdvisorError::UnsupportedLanguage(name) => {
                write!(f, "Unsupported snippet language '{}'", name)
            }
            AdvisorError::SnippetDirMissing => {
                write!(f, "--languages requires --snippet-dir to be set")
            }
        }
    }
}

impl std::error::Error for AdvisorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AdvisorError::DumpRead { source, .. } => Some(source),
            AdvisorError::XmlParse { source, .. } => Some(source),
            _ => None,
        }
    }
}
