use std::collections::HashMap;

use memchr::memchr;

use crate::{Error, Result};

/// Parse a `key=value&...` query fragment into a map.
///
/// This is the shape a configuration console passes around in its location
/// hash: a single leading `/` is stripped, everything from the first `#` on
/// is an anchor and dropped, and values (not keys) are percent-decoded. A
/// parameter without `=` maps to the empty string.
///
/// # Examples
/// ```
/// let params = jsonvet::parse_params("/appid=demo&cluster=default#items").unwrap();
///
/// assert_eq!(params["appid"], "demo");
/// assert_eq!(params["cluster"], "default");
/// ```
pub fn parse_params(query: &str) -> Result<HashMap<String, String>> {
    let mut query = query.strip_prefix('/').unwrap_or(query);
    if let Some(anchor) = query.find('#') {
        query = &query[..anchor];
    }

    let mut params = HashMap::new();
    for param in query.split('&') {
        if param.is_empty() {
            continue;
        }
        let (key, value) = match param.split_once('=') {
            Some((key, value)) => (key, percent_decode(value)?),
            None => (param, String::new()),
        };
        params.insert(key.to_string(), value);
    }
    Ok(params)
}

/// `%XX` hex pairs become bytes and the decoded bytes must form valid UTF-8.
/// `+` stays a plus sign; only the percent form encodes.
fn percent_decode(value: &str) -> Result<String> {
    let bytes = value.as_bytes();
    if memchr(b'%', bytes).is_none() {
        return Ok(value.to_string());
    }

    let mut out = Vec::with_capacity(bytes.len());
    let mut pos = 0;
    while pos < bytes.len() {
        let byte = bytes[pos];
        if byte != b'%' {
            out.push(byte);
            pos += 1;
            continue;
        }
        let decoded = hex_pair(bytes, pos + 1).ok_or(Error::PercentEscape(pos))?;
        out.push(decoded);
        pos += 3;
    }
    Ok(String::from_utf8(out)?)
}

fn hex_pair(bytes: &[u8], pos: usize) -> Option<u8> {
    let hi = hex_value(*bytes.get(pos)?)?;
    let lo = hex_value(*bytes.get(pos + 1)?)?;
    Some(hi << 4 | lo)
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}
