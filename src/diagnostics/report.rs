//! Diagnostic report construction and forwarding-header parsing.

use axum::http::HeaderMap;
use serde::{Deserialize, Serialize};

/// Header under which proxies record the client/proxy address chain.
pub const X_FORWARDED_FOR: &str = "x-forwarded-for";

/// Snapshot of server and network identity for a single request.
///
/// Built fresh per request, serialized, and dropped once the response
/// body is written. Field order matches the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticReport {
    /// The machine's network host name, resolved at request time.
    pub hostname: String,

    /// Source address of the inbound connection (the immediate peer,
    /// which may itself be a proxy).
    pub client_ip: String,

    /// Parsed `X-Forwarded-For` chain, originating client first.
    pub forwarded_for: Vec<String>,
}

/// Parse an `X-Forwarded-For` value into the ordered address chain.
///
/// Splits on commas and trims surrounding whitespace from each segment.
/// Empty segments are kept, so `","` yields two empty entries. An empty
/// value yields an empty chain.
pub fn parse_forwarded_for(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(',').map(|s| s.trim().to_string()).collect()
}

/// Extract the forwarding chain from request headers.
///
/// Header name matching is case-insensitive. A missing header, or a
/// value that is not visible ASCII, is treated as an absent chain.
pub fn forwarded_chain(headers: &HeaderMap) -> Vec<String> {
    let raw = headers
        .get(X_FORWARDED_FOR)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    parse_forwarded_for(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_empty_value_yields_empty_chain() {
        assert!(parse_forwarded_for("").is_empty());
    }

    #[test]
    fn test_single_address() {
        assert_eq!(parse_forwarded_for("203.0.113.7"), vec!["203.0.113.7"]);
    }

    #[test]
    fn test_trims_whitespace_and_preserves_order() {
        assert_eq!(
            parse_forwarded_for("203.0.113.7,  198.51.100.2 ,10.0.0.1"),
            vec!["203.0.113.7", "198.51.100.2", "10.0.0.1"]
        );
    }

    #[test]
    fn test_keeps_empty_segments() {
        assert_eq!(
            parse_forwarded_for("203.0.113.7,,10.0.0.1"),
            vec!["203.0.113.7", "", "10.0.0.1"]
        );
        assert_eq!(parse_forwarded_for(","), vec!["", ""]);
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let mut headers = HeaderMap::new();
        headers.insert("X-Forwarded-For", HeaderValue::from_static("203.0.113.7"));
        assert_eq!(forwarded_chain(&headers), vec!["203.0.113.7"]);
    }

    #[test]
    fn test_missing_header_yields_empty_chain() {
        assert!(forwarded_chain(&HeaderMap::new()).is_empty());
    }

    #[test]
    fn test_serialized_key_order() {
        let report = DiagnosticReport {
            hostname: "backend-1".into(),
            client_ip: "198.51.100.9".into(),
            forwarded_for: vec!["203.0.113.7".into()],
        };
        let body = serde_json::to_string_pretty(&report).unwrap();

        let hostname = body.find("\"hostname\"").unwrap();
        let client_ip = body.find("\"client_ip\"").unwrap();
        let forwarded = body.find("\"forwarded_for\"").unwrap();
        assert!(hostname < client_ip && client_ip < forwarded);
        assert!(body.starts_with("{\n  \"hostname\"")); // 2-space indent
    }
}
