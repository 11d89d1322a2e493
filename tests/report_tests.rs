use locator_advisor::analyze_document;
use locator_advisor::report::console::format_console_report;
use locator_advisor::report::report_model::AnalysisReport;
use roxmltree::Document;

fn report_for(xml: &str) -> AnalysisReport {
    let doc = Document::parse(xml).expect("test xml parses");
    AnalysisReport::from_nodes("dump.xml", analyze_document(&doc))
}

// =========================================================================
// Console formatting
// =========================================================================

#[test]
fn console_report_shows_every_element() {
    let report = report_for(
        r#"<hierarchy>
             <Button resource-id="login" text="Log in"/>
             <TextView content-desc="banner"/>
           </hierarchy>"#,
    );
    let out = format_console_report(&report);

    assert!(out.starts_with("=== Locator Analysis: dump.xml ===\n"));
    assert!(out.contains("[1] hierarchy"));
    assert!(out.contains("[2] Button  resource-id=login"));
    assert!(out.contains("    id: login"));
    assert!(out.contains("    (unique resource id)"));
    assert!(out.contains("[3] TextView  content-desc=banner"));
    assert!(out.contains("    accessibility-id: banner"));
    assert!(out.ends_with("=== 3 elements analyzed ===\n"));
}

#[test]
fn console_report_shows_fallback_paths() {
    let report = report_for(
        r#"<hierarchy>
             <View/>
             <View/>
           </hierarchy>"#,
    );
    let out = format_console_report(&report);

    assert!(out.contains("xpath-positional: //hierarchy/View[1]"));
    assert!(out.contains("xpath-positional: //hierarchy/View[2]"));
    assert!(out.contains("(no unique attribute; fallback to full path)"));
}

// =========================================================================
// JSON shape
// =========================================================================

#[test]
fn json_report_carries_counts_and_strategies() {
    let report = report_for(r#"<hierarchy><Button resource-id="ok"/></hierarchy>"#);
    let json = serde_json::to_value(&report).expect("serializes");

    assert_eq!(json["source"], "dump.xml");
    assert_eq!(json["element_count"], 2);
    assert_eq!(json["nodes"][1]["tag"], "Button");
    assert_eq!(json["nodes"][1]["resourceId"], "ok");
    assert_eq!(json["nodes"][1]["locator"]["strategy"], "id");
    assert_eq!(json["nodes"][1]["locator"]["value"], "ok");
    assert!(
        json["nodes"][0].get("resourceId").is_none(),
        "Absent fields are omitted, not null"
    );
}

#[test]
fn json_report_round_trips() {
    let report = report_for(
        r#"<hierarchy>
             <Button text="Go"/>
             <Button text="Go"/>
           </hierarchy>"#,
    );
    let json = serde_json::to_string(&report).expect("serializes");
    let back: AnalysisReport = serde_json::from_str(&json).expect("deserializes");

    assert_eq!(back.element_count, report.element_count);
    assert_eq!(back.nodes, report.nodes);
}
