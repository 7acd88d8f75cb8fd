use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::LazyLock;

use regex::Regex;

/// Hostname labels start with a letter, end with a letter or digit, and may
/// carry hyphens in between; the pattern is anchored over the whole input.
static HOSTNAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(concat!(
        r"^(?:[A-Za-z](?:[A-Za-z0-9-]*[A-Za-z0-9])?\.)*", // leading labels
        r"[A-Za-z](?:[A-Za-z0-9-]*[A-Za-z0-9])?$",        // final label
    )) {
        Ok(regex) => regex,
        Err(err) => panic!("invalid hostname regex: {err}"),
    }
});

/// Validate a server address field: a dotted-quad IPv4 address, a DNS
/// hostname, or an IPv6 address with an optional `%zone` suffix.
///
/// # Examples
/// ```
/// assert!(jsonvet::is_valid_host("192.168.0.1"));
/// assert!(jsonvet::is_valid_host("config.example.com"));
/// assert!(jsonvet::is_valid_host("fe80::1%eth0"));
/// assert!(!jsonvet::is_valid_host("256.0.0.1"));
/// ```
pub fn is_valid_host(input: &str) -> bool {
    if input.parse::<Ipv4Addr>().is_ok() {
        return true;
    }
    if HOSTNAME_PATTERN.is_match(input) {
        return true;
    }
    is_ipv6_with_zone(input.trim())
}

// Only the IPv6 form tolerates surrounding whitespace and a scoped zone.
fn is_ipv6_with_zone(input: &str) -> bool {
    let addr = match input.split_once('%') {
        Some((addr, zone)) => {
            if zone.is_empty() {
                return false;
            }
            addr
        }
        None => input,
    };
    addr.parse::<Ipv6Addr>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest::rstest]
    fn test_ipv4_accepted() {
        assert!(is_valid_host("0.0.0.0"));
        assert!(is_valid_host("192.168.0.1"));
        assert!(is_valid_host("255.255.255.255"));
    }

    #[rstest::rstest]
    fn test_ipv4_rejected() {
        assert!(!is_valid_host("256.0.0.1"));
        assert!(!is_valid_host("1.2.3"));
        // Leading-zero octets are ambiguous (octal reading) and refused.
        assert!(!is_valid_host("01.2.3.4"));
        assert!(!is_valid_host("1.2.3.4.5"));
    }

    #[rstest::rstest]
    fn test_hostname_accepted() {
        assert!(is_valid_host("localhost"));
        assert!(is_valid_host("config.example.com"));
        assert!(is_valid_host("a"));
        assert!(is_valid_host("meta-server.internal"));
    }

    #[rstest::rstest]
    fn test_hostname_rejected() {
        assert!(!is_valid_host(""));
        assert!(!is_valid_host("-bad"));
        assert!(!is_valid_host("bad-"));
        assert!(!is_valid_host("a..b"));
        assert!(!is_valid_host("9to5"));
        assert!(!is_valid_host("under_score"));
    }

    #[rstest::rstest]
    fn test_ipv6_accepted() {
        assert!(is_valid_host("::1"));
        assert!(is_valid_host("2001:db8::8a2e:370:7334"));
        assert!(is_valid_host("::ffff:192.0.2.1"));
        assert!(is_valid_host("fe80::1%eth0"));
        assert!(is_valid_host("  ::1  "));
    }

    #[rstest::rstest]
    fn test_ipv6_rejected() {
        assert!(!is_valid_host("fe80::1%"));
        assert!(!is_valid_host("2001:::1"));
        // Whitespace tolerance belongs to the IPv6 form only.
        assert!(!is_valid_host(" example.com "));
    }
}
