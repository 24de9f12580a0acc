// tests/resolve.rs
//
// Locator grammar decomposition: `<base>?id=X#Y`, both parts required.
//
use tbs_scrape::directory::resolve;
use tbs_scrape::error::ScrapeError;

const BASE: &str = "https://host/view.aspx";

fn assert_malformed(locator: &str) {
    match resolve(locator) {
        Err(ScrapeError::MalformedLocator(raw)) => assert_eq!(raw, locator),
        other => panic!("expected MalformedLocator for {locator:?}, got {other:?}"),
    }
}

#[test]
fn decomposes_well_formed_locator() {
    let rec = resolve("https://host/view.aspx?id=42#tab1").unwrap();
    assert_eq!(rec.identifier, "42");
    assert_eq!(rec.anchor, "tab1");
}

#[test]
fn identifier_need_not_be_numeric() {
    let rec = resolve("https://host/view.aspx?id=ab-12#s").unwrap();
    assert_eq!(rec.identifier, "ab-12");
}

#[test]
fn missing_query_separator_fails() {
    assert_malformed("https://host/view.aspx#tab1");
}

#[test]
fn missing_fragment_fails() {
    assert_malformed("https://host/view.aspx?id=42");
}

#[test]
fn missing_parameter_fails() {
    assert_malformed("https://host/view.aspx?#tab1");
}

#[test]
fn wrong_parameter_name_fails() {
    assert_malformed("https://host/view.aspx?page=42#tab1");
}

#[test]
fn empty_identifier_fails() {
    assert_malformed("https://host/view.aspx?id=#tab1");
}

#[test]
fn empty_anchor_fails() {
    assert_malformed("https://host/view.aspx?id=42#");
}

#[test]
fn second_query_parameter_fails() {
    // The grammar is exactly one parameter; a second one means the site's
    // URL scheme changed.
    assert_malformed("https://host/view.aspx?id=42&lang=en#tab1");
}

#[test]
fn round_trips_to_an_equivalent_url() {
    let original = format!("{BASE}?id=42#tab1");
    let rec = resolve(&original).unwrap();
    assert_eq!(rec.url(BASE), original);
}
