// src/scrape.rs
//! Top-level pipeline: session → pay-lists page → dropdown extraction →
//! locator resolution → canonical directory. The core performs no I/O of
//! its own; the single network fetch happens inside `specs::pay_lists`.

use crate::core::Session;
use crate::directory::{self, Directory};
use crate::error::ScrapeError;
use crate::progress::Progress;
use crate::specs::pay_lists;

/// One full run against the live site. Creates a fresh session and hands it
/// down; the session dies with the run.
pub fn run(progress: Option<&mut dyn Progress>) -> Result<Directory, ScrapeError> {
    let session = Session::new();
    collect_directory(&session, progress)
}

/// Fetch, extract and assemble with an existing session. The caller owns
/// the session so a later multi-page stage can reuse it.
pub fn collect_directory(
    session: &Session,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Directory, ScrapeError> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(1);
        p.log("Fetching pay lists page...");
    }

    let scan = pay_lists::fetch(session)?;
    if scan.skipped > 0 {
        // Skips are expected (prompt rows, section headers); one aggregate
        // line, never per-occurrence noise.
        logd!("dropdown: skipped {} non-classification option(s)", scan.skipped);
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Skipped {} decorative option(s)", scan.skipped));
        }
    }

    let dir = directory::build(scan.entries)?;

    if let Some(p) = progress.as_deref_mut() {
        for label in dir.labels() {
            p.item_done(label);
        }
        p.finish();
    }
    logf!("directory assembled: {} classification(s)", dir.len());

    Ok(dir)
}
