// tests/extract.rs
//
// Dropdown extraction: filtering, ordering, and the fatal/non-fatal split
// between "control missing" and "control empty".
//
use tbs_scrape::error::ScrapeError;
use tbs_scrape::specs::pay_lists::extract;

const PREFIX: &str = "https://host/view.aspx";

fn option(label: Option<&str>, value: Option<&str>) -> String {
    let mut s = String::from("<option");
    if let Some(l) = label {
        s.push_str(&format!(r#" label="{l}""#));
    }
    if let Some(v) = value {
        s.push_str(&format!(r#" value="{v}""#));
    }
    s.push_str(">text</option>");
    s
}

fn page(options: &[String]) -> String {
    format!(
        "<html><body><form><select id=\"dropdown\" name=\"nav\">{}</select></form></body></html>",
        options.join("\n")
    )
}

#[test]
fn keeps_prefixed_options_in_document_order() {
    let doc = page(&[
        option(Some("B-01"), Some("https://host/view.aspx?id=2#t")),
        option(Some("A-01"), Some("https://host/view.aspx?id=1#t")),
        option(Some("C-01"), Some("https://host/view.aspx?id=3#t")),
    ]);
    let scan = extract(&doc, "dropdown", PREFIX).unwrap();
    let labels: Vec<&str> = scan.entries.iter().map(|e| e.label.as_str()).collect();
    // Source order, not alphabetical
    assert_eq!(labels, vec!["B-01", "A-01", "C-01"]);
    assert_eq!(scan.skipped, 0);
}

#[test]
fn skips_options_missing_label_value_or_prefix() {
    let doc = page(&[
        option(None, Some("https://host/view.aspx?id=1#t")), // no label
        option(Some("Prompt"), None),                        // no value
        option(Some("Elsewhere"), Some("https://other/e?id=9#t")), // wrong prefix
        option(Some("OK-01"), Some("https://host/view.aspx?id=4#t")),
    ]);
    let scan = extract(&doc, "dropdown", PREFIX).unwrap();
    assert_eq!(scan.entries.len(), 1);
    assert_eq!(scan.entries[0].label, "OK-01");
    assert_eq!(scan.skipped, 3);
}

#[test]
fn missing_control_is_structure_not_found() {
    let doc = "<html><body><select id=\"other\"></select></body></html>";
    let err = extract(doc, "dropdown", PREFIX).unwrap_err();
    assert!(matches!(err, ScrapeError::StructureNotFound(id) if id == "dropdown"));
}

#[test]
fn control_with_zero_usable_options_is_empty_success() {
    let doc = page(&[option(Some("— select —"), Some(""))]);
    let scan = extract(&doc, "dropdown", PREFIX).unwrap();
    assert!(scan.entries.is_empty());
    assert_eq!(scan.skipped, 1);
}

#[test]
fn tolerates_case_quoting_and_attribute_order() {
    let doc = concat!(
        "<SELECT name=nav ID='dropdown'>",
        "<OPTION value='https://host/view.aspx?id=7#x' label='Z-07'>",
        "</SELECT>"
    );
    let scan = extract(doc, "dropdown", PREFIX).unwrap();
    assert_eq!(scan.entries.len(), 1);
    assert_eq!(scan.entries[0].locator, "https://host/view.aspx?id=7#x");
}

#[test]
fn normalizes_entities_and_whitespace_in_labels() {
    let doc = page(&[option(
        Some("Ship&#39;s  Crews &amp;&nbsp;Officers"),
        Some("https://host/view.aspx?id=5#t"),
    )]);
    let scan = extract(&doc, "dropdown", PREFIX).unwrap();
    assert_eq!(scan.entries[0].label, "Ship's Crews & Officers");
}

#[test]
fn duplicate_labels_pass_through_unmodified() {
    // Dedup is the directory's job, not the extractor's.
    let doc = page(&[
        option(Some("A"), Some("https://host/view.aspx?id=1#t")),
        option(Some("A"), Some("https://host/view.aspx?id=2#t")),
    ]);
    let scan = extract(&doc, "dropdown", PREFIX).unwrap();
    assert_eq!(scan.entries.len(), 2);
}

#[test]
fn id_attribute_requires_word_boundary() {
    // data-id="dropdown" on a different select must not satisfy the lookup
    let doc = concat!(
        "<select data-id=\"dropdown\"><option label=\"X\" ",
        "value=\"https://host/view.aspx?id=1#t\"></select>"
    );
    let err = extract(doc, "dropdown", PREFIX).unwrap_err();
    assert!(matches!(err, ScrapeError::StructureNotFound(_)));
}
