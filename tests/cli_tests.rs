use locator_advisor::analyze_dump;
use locator_advisor::cli::commands::parse_languages;
use locator_advisor::cli::config::load_config;
use locator_advisor::error::AdvisorError;
use locator_advisor::snippet::languages::TargetLanguage;

// =========================================================================
// Language list parsing
// =========================================================================

#[test]
fn languages_default_to_all_supported() {
    let langs = parse_languages(None).expect("default parses");
    assert_eq!(langs, TargetLanguage::all().to_vec());
}

#[test]
fn language_csv_is_parsed_in_order() {
    let langs = parse_languages(Some("python, java")).expect("csv parses");
    assert_eq!(langs, vec![TargetLanguage::Python, TargetLanguage::Java]);
}

#[test]
fn language_aliases_and_duplicates() {
    let langs = parse_languages(Some("js,javascript,c#")).expect("aliases parse");
    assert_eq!(
        langs,
        vec![TargetLanguage::JavaScript, TargetLanguage::CSharp],
        "Aliases resolve and duplicates collapse"
    );
}

#[test]
fn unknown_language_is_a_config_error() {
    let err = parse_languages(Some("java,cobol")).expect_err("cobol rejected");
    match err {
        AdvisorError::UnsupportedLanguage(name) => assert_eq!(name, "cobol"),
        other => panic!("Expected UnsupportedLanguage, got: {}", other),
    }
}

// =========================================================================
// Input errors
// =========================================================================

#[test]
fn missing_dump_is_a_read_error() {
    let err = analyze_dump("/nonexistent/dump.xml").expect_err("missing file fails");
    match err {
        AdvisorError::DumpRead { path, .. } => assert_eq!(path, "/nonexistent/dump.xml"),
        other => panic!("Expected DumpRead, got: {}", other),
    }
}

#[test]
fn malformed_xml_is_a_parse_error() {
    let dir = std::env::temp_dir().join("locator-advisor-cli-tests");
    std::fs::create_dir_all(&dir).expect("temp dir");
    let path = dir.join("broken.xml");
    std::fs::write(&path, "<hierarchy><Button></hierarchy>").expect("write fixture");

    let err = analyze_dump(path.to_str().expect("utf8 path")).expect_err("bad xml fails");
    assert!(
        matches!(err, AdvisorError::XmlParse { .. }),
        "Expected XmlParse, got: {}",
        err
    );
}

// =========================================================================
// Config file defaulting
// =========================================================================

#[test]
fn missing_config_yields_defaults() {
    let config = load_config(Some("/nonexistent/locator-advisor.yaml"));
    assert_eq!(config.analyze.format, "console");
    assert!(config.analyze.languages.is_none());
    assert!(config.analyze.snippet_dir.is_none());
}

#[test]
fn config_file_supplies_analyze_defaults() {
    let dir = std::env::temp_dir().join("locator-advisor-cli-tests");
    std::fs::create_dir_all(&dir).expect("temp dir");
    let path = dir.join("config.yaml");
    std::fs::write(
        &path,
        "analyze:\n  format: json\n  languages: java,python\n",
    )
    .expect("write fixture");

    let config = load_config(path.to_str());
    assert_eq!(config.analyze.format, "json");
    assert_eq!(config.analyze.languages.as_deref(), Some("java,python"));
}
