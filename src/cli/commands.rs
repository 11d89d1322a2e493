use crate::analyze_dump;
use crate::error::AdvisorError;
use crate::report::console::format_console_report;
use crate::snippet::generator::snippet_file;
use crate::snippet::languages::TargetLanguage;

// ============================================================================
// analyze subcommand
// ============================================================================

pub fn cmd_analyze(
    dump_path: &str,
    format: &str,
    output: Option<&str>,
    languages: Option<&str>,
    snippet_dir: Option<&str>,
    verbose: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    // Configuration errors surface before any analysis begins.
    if languages.is_some() && snippet_dir.is_none() {
        return Err(Box::new(AdvisorError::SnippetDirMissing));
    }
    let languages = parse_languages(languages)?;

    if verbose > 0 {
        eprintln!("Analyzing {}...", dump_path);
    }

    let report = analyze_dump(dump_path)?;

    if verbose > 0 {
        eprintln!("  {} elements found", report.element_count);
    }

    // Format report
    let output_content = match format {
        "json" => serde_json::to_string_pretty(&report)? + "\n",
        _ => format_console_report(&report),
    };

    // Write or print
    match output {
        Some(path) => std::fs::write(path, &output_content)?,
        None => print!("{}", output_content),
    }

    // Snippet export: one file per language under a language-named subdir
    if let Some(dir) = snippet_dir {
        for lang in &languages {
            let lang_dir = std::path::Path::new(dir).join(lang.name());
            std::fs::create_dir_all(&lang_dir)?;
            let path = lang_dir.join(format!("snippets.{}", lang.extension()));
            let content = snippet_file(*lang, &report.source, &report.nodes);
            std::fs::write(&path, &content)?;
            if verbose > 0 {
                eprintln!("  Wrote: {}", path.display());
            }
        }
        println!(
            "Wrote snippets for {} languages under {}/",
            languages.len(),
            dir
        );
    }

    Ok(())
}

// ============================================================================
// languages subcommand
// ============================================================================

pub fn cmd_languages() {
    println!("Supported snippet languages:");
    for lang in TargetLanguage::all() {
        println!("  - {}", lang.name());
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Parse a comma-separated language list, defaulting to all supported.
///
/// Duplicates collapse to the first occurrence; an unknown name is a
/// configuration error.
pub fn parse_languages(csv: Option<&str>) -> Result<Vec<TargetLanguage>, AdvisorError> {
    let csv = match csv {
        Some(csv) => csv,
        None => return Ok(TargetLanguage::all().to_vec()),
    };

    let mut languages = Vec::new();
    for name in csv.split(',').filter(|n| !n.trim().is_empty()) {
        let lang = TargetLanguage::parse(name)?;
        if !languages.contains(&lang) {
            languages.push(lang);
        }
    }
    Ok(languages)
}
