// src/store.rs
//! Local persistence of the finished directory. The downstream per-category
//! stage (and `--cached` runs) read from here; the schema is four columns:
//! label, url, id, bookmark.

use std::fs;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use crate::config::consts::{DIRECTORY_FILE, STORE_DIR, STORE_SEP};
use crate::csv::{parse_rows, write_row};
use crate::directory::{Directory, DirectoryEntry, LocatorRecord};
use crate::error::ScrapeError;

pub fn default_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(DIRECTORY_FILE)
}

const HEADERS: [&str; 4] = ["label", "url", "id", "bookmark"];

/// Write the directory to `path` as CSV, headers first, label order
/// preserved. Parent directories are created as needed.
pub fn save_directory(path: &Path, dir: &Directory) -> Result<(), ScrapeError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = fs::File::create(path)?;
    let mut w = BufWriter::new(file);

    let headers: Vec<String> = HEADERS.iter().map(|s| s.to_string()).collect();
    write_row(&mut w, &headers, STORE_SEP)?;

    for entry in dir.iter() {
        let row = vec![
            entry.label.clone(),
            entry.locator.clone(),
            entry.record.identifier.clone(),
            entry.record.anchor.clone(),
        ];
        write_row(&mut w, &row, STORE_SEP)?;
    }

    Ok(())
}

/// Read a directory back from `path`. Rows that do not carry all four
/// columns are malformed store content, surfaced as an I/O error rather
/// than silently dropped.
pub fn load_directory(path: &Path) -> Result<Directory, ScrapeError> {
    let text = fs::read_to_string(path)?;
    let mut rows = parse_rows(&text, STORE_SEP).into_iter();

    // Header row is written unconditionally; tolerate its absence.
    let mut first = rows.next();
    if let Some(r) = &first {
        if r.first().map(|c| c.as_str()) == Some(HEADERS[0]) {
            first = None;
        }
    }

    let mut dir = Directory::new();
    for row in first.into_iter().chain(rows) {
        let [label, locator, identifier, anchor] = match <[String; 4]>::try_from(row) {
            Ok(cells) => cells,
            Err(bad) => {
                return Err(ScrapeError::Io(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("store row has {} column(s), expected 4", bad.len()),
                )));
            }
        };
        dir.insert(DirectoryEntry {
            label,
            locator,
            record: LocatorRecord { identifier, anchor },
        });
    }

    Ok(dir)
}
