//! Benchmark case name decoding
//!
//! Harnesses emit one flat name string per case, built from a benchmark
//! namespace, a method (implementation under test), and an input size,
//! joined by an irregular mix of separators:
//!
//! ```text
//! BM_memcpy_bench::memcpy_rust/4096
//! BM_memcpy::dragons::method_a_4096
//! ```
//!
//! Names are canonicalized to a single delimiter and split into tokens,
//! then matched against a small table of known layouts. A name matching
//! no layout is rejected rather than guessed at.

use crate::error::{ReportError, Result};
use std::fmt;

/// Separator tokens canonicalized to `.` before splitting.
const SEPARATORS: [&str; 5] = ["::", "<", ">", "/", "_"];

/// Namespace token some harness configurations inject between the
/// benchmark namespace and the method name.
const NAMESPACE_MARKER: &str = "dragons";

/// Token position where method tokens begin for names without the marker
/// (three leading namespace tokens).
const FLAT_METHOD_START: usize = 3;

/// Decoded dimensions of one benchmark case.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CaseKey {
    /// Implementation under test, e.g. `memcpy_rust`
    pub method: String,
    /// Input size in bytes
    pub size: u64,
}

impl fmt::Display for CaseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.method, self.size)
    }
}

/// Known name layouts, tried in order. Each anchors the start of the
/// method tokens; everything before the anchor is namespace noise.
#[derive(Debug, Clone, Copy)]
enum Anchor {
    /// Method tokens start right after the first occurrence of a marker token
    AfterMarker(&'static str),
    /// Method tokens start at a fixed token index
    AtIndex(usize),
}

const FAMILIES: [Anchor; 2] = [
    Anchor::AfterMarker(NAMESPACE_MARKER),
    Anchor::AtIndex(FLAT_METHOD_START),
];

/// Decode a raw benchmark case name into its `(method, size)` key.
///
/// The size is the first token at or after the anchor that parses as a
/// positive integer; the method is the run of tokens between the anchor
/// and the size token, rejoined with `_`. A name no family can decode is
/// a [`ReportError::MalformedIdentifier`].
pub fn decode(name: &str) -> Result<CaseKey> {
    let tokens = tokenize(name);
    FAMILIES
        .iter()
        .find_map(|family| try_family(&tokens, *family))
        .ok_or_else(|| ReportError::MalformedIdentifier(name.to_string()))
}

fn tokenize(name: &str) -> Vec<String> {
    let mut canonical = name.to_string();
    for sep in SEPARATORS {
        canonical = canonical.replace(sep, ".");
    }
    canonical
        .split('.')
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

fn try_family(tokens: &[String], anchor: Anchor) -> Option<CaseKey> {
    let start = match anchor {
        Anchor::AfterMarker(marker) => tokens.iter().position(|t| t.as_str() == marker)? + 1,
        Anchor::AtIndex(index) => index,
    };
    if start >= tokens.len() {
        return None;
    }

    let rest = &tokens[start..];
    let (size_pos, size) = rest
        .iter()
        .enumerate()
        .find_map(|(i, t)| t.parse::<u64>().ok().map(|v| (i, v)))?;
    // A size with no method tokens in front, or a zero size, means this
    // layout does not apply.
    if size_pos == 0 || size == 0 {
        return None;
    }

    Some(CaseKey {
        method: rest[..size_pos].join("_"),
        size,
    })
}
