/// Decode the body of a JSON string literal in isolation.
///
/// The body is re-wrapped in quotes and handed to the JSON decoder as a
/// standalone literal, so escape resolution (including `\uXXXX` and surrogate
/// pairs) matches what a full document decode would produce for the same
/// span, without ever decoding the surrounding document.
///
/// Returns `None` when the body is not a valid literal body (malformed
/// escape, raw control character).
///
/// # Examples
/// ```
/// use jsonvet::text::unescape_literal;
///
/// assert_eq!(unescape_literal(r"\u0061").as_deref(), Some("a"));
/// assert_eq!(unescape_literal(r"\u00"), None);
/// ```
pub fn unescape_literal(body: &str) -> Option<String> {
    let mut literal = String::with_capacity(body.len() + 2);
    literal.push('"');
    literal.push_str(body);
    literal.push('"');
    serde_json::from_str(&literal).ok()
}
