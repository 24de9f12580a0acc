// src/config/options.rs
use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Params {
    pub labels_only: bool,      // print classification labels, nothing else
    pub out: Option<PathBuf>,   // export the directory as CSV to this path
    pub cached: bool,           // read from the local store, skip the network
    pub quiet: bool,            // suppress per-classification detail lines
}

impl Default for Params {
    fn default() -> Self {
        Self {
            labels_only: false,
            out: None,
            cached: false,
            quiet: false,
        }
    }
}
