// src/specs/pay_lists.rs
//! Scraping spec for the collective-agreement pay-lists page.
//!
//! The page publishes every pay classification as an `<option>` inside one
//! `<select id="dropdown">`. Each usable option carries the classification
//! name in its `label` attribute and an agreement-view URL in its `value`
//! attribute. Decorative options (the "select one" prompt, section headers)
//! lack one of the two attributes or point somewhere else entirely; those
//! are expected input and are skipped without ceremony.

use crate::config::consts::{AGREEMENT_VIEW_PREFIX, DROPDOWN_ID, PAY_LISTS_URL};
use crate::core::html::{find_select_by_id, list_options};
use crate::core::sanitize::{normalize_entities, normalize_ws};
use crate::core::Session;
use crate::error::ScrapeError;

/// One usable dropdown entry, label and locator as published.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawEntry {
    pub label: String,
    pub locator: String,
}

/// Result of one pass over the control: usable entries in document order,
/// plus how many options the filter dropped.
#[derive(Debug)]
pub struct OptionScan {
    pub entries: Vec<RawEntry>,
    pub skipped: usize,
}

/// Fetch the pay-lists page through `session` and extract the dropdown.
pub fn fetch(session: &Session) -> Result<OptionScan, ScrapeError> {
    let doc = session.fetch(PAY_LISTS_URL)?;
    extract(&doc, DROPDOWN_ID, AGREEMENT_VIEW_PREFIX)
}

/// Extract `(label, locator)` pairs from the selection control `control_id`.
///
/// A missing control is fatal: an empty result would be indistinguishable
/// from a page that genuinely lists zero classifications, and silence here
/// would corrupt downstream state. A present control with zero usable
/// options is an empty success.
pub fn extract(
    doc: &str,
    control_id: &str,
    url_prefix: &str,
) -> Result<OptionScan, ScrapeError> {
    let select = find_select_by_id(doc, control_id)
        .ok_or_else(|| ScrapeError::StructureNotFound(control_id.to_string()))?;

    let mut entries = Vec::new();
    let mut skipped = 0usize;

    for (label, value) in list_options(select) {
        match (label, value) {
            (Some(label), Some(value)) if value.starts_with(url_prefix) => {
                let label = normalize_ws(&normalize_entities(&label));
                if label.is_empty() {
                    skipped += 1;
                    continue;
                }
                entries.push(RawEntry { label, locator: value });
            }
            _ => skipped += 1,
        }
    }

    Ok(OptionScan { entries, skipped })
}
