// src/error.rs

use thiserror::Error;

/// Run-level failures. The pipeline either produces a complete directory or
/// aborts with one of these; there is no partial-success mode.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Fetch could not complete (network, TLS, non-2xx status).
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The expected selection control is absent from the document.
    /// Distinct from "control present but zero usable options", which is
    /// an empty success. This one means the page contract changed.
    #[error("expected <select id=\"{0}\"> not found in document")]
    StructureNotFound(String),

    /// A prefix-matching locator failed grammar decomposition. Carries the
    /// offending string; one of these invalidates the whole run.
    #[error("malformed locator: {0:?}")]
    MalformedLocator(String),

    #[error("store i/o: {0}")]
    Io(#[from] std::io::Error),
}
