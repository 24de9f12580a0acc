// src/specs/mod.rs
//! Page-specific scraping specs. Each spec encodes *where the ground truth
//! lives in the HTML* of one page and how to extract it robustly, using the
//! tolerant `core::html` scanners. No caching, no persistence, no output
//! formatting — other layers decide when to scrape and what to do with the
//! result.
//!
//! Specs are testable offline against captured or inline fixtures.

pub mod pay_lists;
