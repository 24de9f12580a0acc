// tests/directory.rs
//
// Directory assembly: ordering, last-wins overwrite, and the one-bad-entry
// abort.
//
use tbs_scrape::directory::build;
use tbs_scrape::error::ScrapeError;
use tbs_scrape::specs::pay_lists::RawEntry;

fn raw(label: &str, locator: &str) -> RawEntry {
    RawEntry {
        label: label.to_string(),
        locator: locator.to_string(),
    }
}

#[test]
fn preserves_insertion_order() {
    let dir = build(vec![
        raw("C", "https://host/view.aspx?id=3#t"),
        raw("A", "https://host/view.aspx?id=1#t"),
        raw("B", "https://host/view.aspx?id=2#t"),
    ])
    .unwrap();
    assert_eq!(dir.labels(), ["C", "A", "B"]);
}

#[test]
fn duplicate_label_last_wins() {
    // Documented overwrite behavior; regression-pinned.
    let dir = build(vec![
        raw("A", "https://host/view.aspx?id=1#first"),
        raw("B", "https://host/view.aspx?id=2#t"),
        raw("A", "https://host/view.aspx?id=9#second"),
    ])
    .unwrap();

    assert_eq!(dir.len(), 2);
    let a = dir.get("A").unwrap();
    assert_eq!(a.record.identifier, "9");
    assert_eq!(a.record.anchor, "second");
    // Overwrite keeps the original position
    assert_eq!(dir.labels(), ["A", "B"]);
}

#[test]
fn one_malformed_locator_aborts_the_build() {
    let err = build(vec![
        raw("A", "https://host/view.aspx?id=1#t"),
        raw("B", "https://host/view.aspx?id=2"), // no fragment
    ])
    .unwrap_err();
    assert!(matches!(err, ScrapeError::MalformedLocator(raw) if raw.ends_with("id=2")));
}

#[test]
fn empty_input_builds_empty_directory() {
    let dir = build(Vec::new()).unwrap();
    assert!(dir.is_empty());
    assert_eq!(dir.labels().len(), 0);
}

#[test]
fn iter_follows_label_order() {
    let dir = build(vec![
        raw("B", "https://host/view.aspx?id=2#t"),
        raw("A", "https://host/view.aspx?id=1#t"),
    ])
    .unwrap();
    let ids: Vec<&str> = dir.iter().map(|e| e.record.identifier.as_str()).collect();
    assert_eq!(ids, ["2", "1"]);
}
