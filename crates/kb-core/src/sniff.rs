//! Text detection for resources
//!
//! Search and edit only consider text resources. Detection sits behind
//! [`TextSniffer`] so callers can swap the heuristic.

use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Number of leading bytes inspected by the content probe
const PROBE_BYTES: usize = 8 * 1024;

/// Decides whether a file holds text
pub trait TextSniffer {
    fn is_text(&self, path: &Path) -> bool;
}

/// Extension guess first, content probe when the guess is inconclusive
#[derive(Debug, Clone, Copy, Default)]
pub struct MimeSniffer;

impl TextSniffer for MimeSniffer {
    fn is_text(&self, path: &Path) -> bool {
        if !path.is_file() {
            return false;
        }

        if let Some(mime) = mime_guess::from_path(path).first() {
            match mime.type_().as_str() {
                "text" => return true,
                "image" | "audio" | "video" | "font" => return false,
                _ => {}
            }
        }

        probe_content(path)
    }
}

fn probe_content(path: &Path) -> bool {
    let Ok(file) = File::open(path) else {
        return false;
    };

    let mut buf = Vec::with_capacity(PROBE_BYTES);
    if file.take(PROBE_BYTES as u64).read_to_end(&mut buf).is_err() {
        return false;
    }

    looks_like_text(&buf)
}

/// No NUL bytes and valid UTF-8, tolerating a character cut at the end
fn looks_like_text(buf: &[u8]) -> bool {
    if buf.contains(&0) {
        return false;
    }
    match std::str::from_utf8(buf) {
        Ok(_) => true,
        Err(e) => e.error_len().is_none(),
    }
}
