// src/config/consts.rs

// Net config
pub const PAY_LISTS_URL: &str =
    "https://www.tbs-sct.canada.ca/pubs_pol/hrpubs/coll_agre/rates-taux-eng.asp";
pub const AGREEMENT_VIEW_PREFIX: &str =
    "https://www.tbs-sct.gc.ca/agreements-conventions/view-visualiser-eng.aspx";
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Page contract
pub const DROPDOWN_ID: &str = "dropdown";
pub const ID_PARAM: &str = "id";

// Anti-blocking identification. Picked per session; FALLBACK is used when
// the picker itself cannot run (clock error).
pub const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0.0.0 Safari/537.36 Edg/126.0.0.0",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:127.0) Gecko/20100101 Firefox/127.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.5 Safari/605.1.15",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0.0.0 Safari/537.36",
];
pub const FALLBACK_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0.0.0 Safari/537.36";

// Local cache
pub const STORE_DIR: &str = ".store";
pub const DIRECTORY_FILE: &str = "classifications.csv";
pub const STORE_SEP: char = ',';
