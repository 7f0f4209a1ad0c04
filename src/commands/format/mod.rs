//! Shared output formatting helpers for commands
//!
//! Common patterns for JSON status messages, records lines and column
//! truncation across command modules.

pub mod status;

pub use status::{print_json, print_json_status, print_records_header, record_field};

/// First `max` characters of `s`
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
