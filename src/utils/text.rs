use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref ANSI_RE: Regex = Regex::new(r"\x1b\[[0-9;]*m").unwrap();
    static ref COMMITS_RE: Regex = Regex::new(r"(\d+)\s+commits\s+scanned").unwrap();
    static ref DATA_KB_RE: Regex =
        Regex::new(r"(?i)scanned\s+~[\d.]+\s+bytes\s+\(([\d.]+)\s*kb\)").unwrap();
}

/// Removes ANSI color escape sequences. Gitleaks colors its log output
/// even when piped.
pub fn strip_ansi(text: &str) -> String {
    ANSI_RE.replace_all(text, "").into_owned()
}

/// Extracts `<N> commits scanned` from detector log text.
pub fn commits_scanned(text: &str) -> Option<u64> {
    COMMITS_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Extracts the KB figure from `scanned ~<bytes> bytes (<kb> kb)`.
/// An unparseable capture stays absent rather than erroring.
pub fn data_scanned_kb(text: &str) -> Option<f64> {
    DATA_KB_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}
