use std::collections::HashSet;

use memchr::{memchr, memchr2, memchr3};
use smallvec::SmallVec;
use smol_str::SmolStr;

use crate::text::unescape_literal;

/// Inline registry capacity; configuration documents rarely nest deeper.
const DEPTH_HINT: usize = 8;

type KeyRegistry = SmallVec<[HashSet<SmolStr>; DEPTH_HINT]>;

/// Report whether any object scope in `text` contains the same key twice.
///
/// Keys are compared after escape resolution, so `"\u0061"` and `"a"` name
/// the same member, which is exactly the case a standard decode silently
/// erases by keeping only the last occurrence. The scan never fails:
/// malformed input (unterminated strings, unbalanced braces, broken escapes)
/// degrades to `false`, leaving rejection of such input to an actual JSON
/// parse.
///
/// Scope is per-object: sibling objects may repeat each other's keys, and
/// array brackets do not open scopes of their own.
///
/// # Examples
/// ```
/// assert!(jsonvet::has_duplicate_keys(r#"{"a":1,"a":2}"#));
/// assert!(jsonvet::has_duplicate_keys(r#"{"\u0061":1,"a":2}"#));
/// assert!(!jsonvet::has_duplicate_keys(r#"{"x":{"a":1},"y":{"a":1}}"#));
/// ```
pub fn has_duplicate_keys(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut registry: KeyRegistry = SmallVec::new();
    // Unbalanced `}` may push depth negative; registry access below guards.
    let mut depth: isize = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        let Some(step) = memchr3(b'"', b'{', b'}', &bytes[pos..]) else {
            break;
        };
        pos += step;
        match bytes[pos] {
            b'{' => {
                depth += 1;
                if let Ok(d) = usize::try_from(depth) {
                    while registry.len() <= d {
                        registry.push(HashSet::new());
                    }
                    // A sibling object reuses the depth slot; its keys must
                    // not leak into this one.
                    registry[d].clear();
                }
                pos += 1;
            }
            b'}' => {
                depth -= 1;
                pos += 1;
            }
            _ => {
                let Some(end) = string_span_end(bytes, pos + 1) else {
                    // Unterminated literal: nothing past it can form a key.
                    break;
                };
                let raw = &text[pos + 1..end];
                pos = end + 1;
                if !colon_follows(bytes, pos) {
                    continue;
                }
                let key = decode_key(raw);
                let slot = usize::try_from(depth)
                    .ok()
                    .and_then(|d| registry.get_mut(d));
                if let Some(seen) = slot {
                    if !seen.insert(key) {
                        return true;
                    }
                }
            }
        }
    }

    false
}

/// Find the closing quote of a string body starting at `pos` (just past the
/// opening quote). A backslash consumes itself plus the next character
/// without interpretation, which keeps an escaped quote from terminating the
/// span.
fn string_span_end(bytes: &[u8], mut pos: usize) -> Option<usize> {
    while pos < bytes.len() {
        let step = memchr2(b'\\', b'"', &bytes[pos..])?;
        pos += step;
        if bytes[pos] == b'"' {
            return Some(pos);
        }
        pos += 2;
    }
    None
}

/// A string literal is a key candidate when the next non-whitespace byte
/// after its closing quote is a colon.
fn colon_follows(bytes: &[u8], mut pos: usize) -> bool {
    while let Some(byte) = bytes.get(pos) {
        match byte {
            b' ' | b'\t' | b'\n' | b'\r' => pos += 1,
            b':' => return true,
            _ => return false,
        }
    }
    false
}

/// Canonical key for comparison: the raw span with escapes resolved, or the
/// raw span itself when it does not decode.
fn decode_key(raw: &str) -> SmolStr {
    if memchr(b'\\', raw.as_bytes()).is_none() {
        return SmolStr::new(raw);
    }
    match unescape_literal(raw) {
        Some(decoded) => SmolStr::new(decoded),
        None => SmolStr::new(raw),
    }
}
