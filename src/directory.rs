// src/directory.rs
//! Locator resolution and directory assembly.
//!
//! Agreement-view locators follow one fixed grammar:
//!
//! ```text
//! <base-url>?id=<identifier>#<anchor>
//! ```
//!
//! exactly one query parameter, exactly one fragment, both required. The
//! grammar is decoded by hand, step by step, so a violation surfaces as a
//! `MalformedLocator` instead of being masked by a permissive URL library.

use std::collections::HashMap;

use crate::config::consts::ID_PARAM;
use crate::error::ScrapeError;
use crate::specs::pay_lists::RawEntry;

/// Decomposed locator: the agreement id bound to the `id` query parameter,
/// and the in-page bookmark from the URL fragment. Both non-empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocatorRecord {
    pub identifier: String,
    pub anchor: String,
}

impl LocatorRecord {
    /// Rebuild a navigable URL from the record. Inverse of [`resolve`] up
    /// to the base prefix.
    pub fn url(&self, prefix: &str) -> String {
        format!("{}?{}={}#{}", prefix, ID_PARAM, self.identifier, self.anchor)
    }
}

/// One finished directory row: label, the locator as published, and its
/// decomposed form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub label: String,
    pub locator: String,
    pub record: LocatorRecord,
}

/// Insertion-ordered mapping label → entry. Duplicate labels overwrite
/// (last wins) but keep their original position in the order.
#[derive(Debug, Default)]
pub struct Directory {
    labels: Vec<String>,
    entries: HashMap<String, DirectoryEntry>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entry: DirectoryEntry) {
        if !self.entries.contains_key(&entry.label) {
            self.labels.push(entry.label.clone());
        }
        self.entries.insert(entry.label.clone(), entry);
    }

    pub fn get(&self, label: &str) -> Option<&DirectoryEntry> {
        self.entries.get(label)
    }

    /// Labels in order of first appearance in the source control.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Entries in label order.
    pub fn iter(&self) -> impl Iterator<Item = &DirectoryEntry> {
        self.labels.iter().filter_map(|l| self.entries.get(l))
    }
}

/// `<base>?id=X#Y` → `{identifier: X, anchor: Y}`.
///
/// Every split step requires its component to exist; a scheme-matching
/// string that is internally malformed fails loudly. Partial records are a
/// worse failure mode than a hard stop: they propagate silently into
/// persisted data.
pub fn resolve(locator: &str) -> Result<LocatorRecord, ScrapeError> {
    let malformed = || ScrapeError::MalformedLocator(locator.to_string());

    let (_, tail) = locator.split_once('?').ok_or_else(malformed)?;
    let (query, anchor) = tail.split_once('#').ok_or_else(malformed)?;
    let (key, identifier) = query.split_once('=').ok_or_else(malformed)?;

    // The grammar allows exactly one parameter; a second one means the
    // site's URL scheme changed under us.
    if key != ID_PARAM
        || identifier.is_empty()
        || identifier.contains('&')
        || anchor.is_empty()
    {
        return Err(malformed());
    }

    Ok(LocatorRecord {
        identifier: identifier.to_string(),
        anchor: anchor.to_string(),
    })
}

/// Resolve every raw entry and assemble the canonical directory.
///
/// One malformed locator aborts the whole run. The classifications are few
/// and curated by the source site; a bad one signals a scheme change that
/// needs attention, not a row to skip.
pub fn build(raw_entries: Vec<RawEntry>) -> Result<Directory, ScrapeError> {
    let mut dir = Directory::new();
    for raw in raw_entries {
        let record = resolve(&raw.locator)?;
        dir.insert(DirectoryEntry {
            label: raw.label,
            locator: raw.locator,
            record,
        });
    }
    Ok(dir)
}
