use serde::{Deserialize, Serialize};

use crate::error::AdvisorError;

// ============================================================================
// Target languages — fixed supported set
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetLanguage {
    Java,
    Python,
    JavaScript,
    Ruby,
    CSharp,
}

impl TargetLanguage {
    /// All supported languages, in deterministic output order.
    pub fn all() -> &'static [TargetLanguage] {
        &[
            TargetLanguage::Java,
            TargetLanguage::Python,
            TargetLanguage::JavaScript,
            TargetLanguage::Ruby,
            TargetLanguage::CSharp,
        ]
    }

    /// Parse a user-supplied language name. Unknown names are a
    /// configuration error, raised before any analysis runs.
    pub fn parse(name: &str) -> Result<TargetLanguage, AdvisorError> {
        match name.trim().to_lowercase().as_str() {
            "java" => Ok(TargetLanguage::Java),
            "python" => Ok(TargetLanguage::Python),
            "javascript" | "js" => Ok(TargetLanguage::JavaScript),
            "ruby" => Ok(TargetLanguage::Ruby),
            "csharp" | "c#" => Ok(TargetLanguage::CSharp),
            other => Err(AdvisorError::UnsupportedLanguage(other.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TargetLanguage::Java => "java",
            TargetLanguage::Python => "python",
            TargetLanguage::JavaScript => "javascript",
            TargetLanguage::Ruby => "ruby",
            TargetLanguage::CSharp => "csharp",
        }
    }

    /// File extension for the exported snippet file.
    pub fn extension(&self) -> &'static str {
        match self {
            TargetLanguage::Java => "java",
            TargetLanguage::Python => "py",
            TargetLanguage::JavaScript => "js",
            TargetLanguage::Ruby => "rb",
            TargetLanguage::CSharp => "cs",
        }
    }

    /// Line-comment prefix, used for annotations in the snippet file.
    pub fn comment_prefix(&self) -> &'static str {
        match self {
            TargetLanguage::Python | TargetLanguage::Ruby => "#",
            _ => "//",
        }
    }

    /// String-literal delimiter used by this language's templates.
    pub fn delimiter(&self) -> char {
        match self {
            TargetLanguage::JavaScript | TargetLanguage::Ruby => '\'',
            _ => '"',
        }
    }
}

/// Escape a value for embedding in a string literal.
///
/// Backslashes are escaped before the delimiter so an already-escaped
/// delimiter is never double-escaped.
pub fn escape_literal(value: &str, delimiter: char) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if c == '\\' || c == delimiter {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
