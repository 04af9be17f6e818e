//! Search-string matching and match provenance.

use serde::Serialize;
use std::fmt;

use crate::har::{Header, Transaction};

/// Field of a transaction in which the search string was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchSource {
    #[serde(rename = "Request Query Parameter")]
    RequestQuery,
    #[serde(rename = "Request Header")]
    RequestHeader,
    #[serde(rename = "Request Body")]
    RequestBody,
    #[serde(rename = "Response Header")]
    ResponseHeader,
    #[serde(rename = "Response Content")]
    ResponseContent,
    /// Admitted by the content-type filter alone (no search string).
    #[serde(rename = "Content Type Filter")]
    ContentTypeFilter,
}

impl MatchSource {
    pub fn label(self) -> &'static str {
        match self {
            Self::RequestQuery => "Request Query Parameter",
            Self::RequestHeader => "Request Header",
            Self::RequestBody => "Request Body",
            Self::ResponseHeader => "Response Header",
            Self::ResponseContent => "Response Content",
            Self::ContentTypeFilter => "Content Type Filter",
        }
    }
}

impl fmt::Display for MatchSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Every field of `tx` containing `needle`, in reporting order.
///
/// Response headers are only scanned with `include_response_headers`.
pub(crate) fn search_sources(
    tx: &Transaction,
    needle: &str,
    include_response_headers: bool,
) -> Vec<MatchSource> {
    let mut sources = Vec::new();
    if tx.query.contains(needle) {
        sources.push(MatchSource::RequestQuery);
    }
    if headers_contain(&tx.request_headers, needle) {
        sources.push(MatchSource::RequestHeader);
    }
    if tx.request_body.contains(needle) {
        sources.push(MatchSource::RequestBody);
    }
    if include_response_headers && headers_contain(&tx.response_headers, needle) {
        sources.push(MatchSource::ResponseHeader);
    }
    if tx.response_body.contains(needle) {
        sources.push(MatchSource::ResponseContent);
    }
    sources
}

fn headers_contain(headers: &[Header], needle: &str) -> bool {
    headers
        .iter()
        .any(|h| h.name.contains(needle) || h.value.contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx() -> Transaction {
        let mut tx = Transaction::new("https://api.example.com/search?q=token", "GET");
        tx.set_request_headers(vec![Header::new("Authorization", "Bearer token")]);
        tx.set_response_headers(vec![Header::new("X-Token", "abc")]);
        tx.request_body = "token=1".to_string();
        tx.response_body = "{\"token\":true}".to_string();
        tx
    }

    #[test]
    fn all_request_sources_and_response_content_in_order() {
        assert_eq!(
            search_sources(&tx(), "token", false),
            vec![
                MatchSource::RequestQuery,
                MatchSource::RequestHeader,
                MatchSource::RequestBody,
                MatchSource::ResponseContent,
            ]
        );
    }

    #[test]
    fn response_headers_only_when_widened() {
        assert!(search_sources(&tx(), "X-Token", false).is_empty());
        assert_eq!(
            search_sources(&tx(), "X-Token", true),
            vec![MatchSource::ResponseHeader]
        );
    }

    #[test]
    fn search_is_case_sensitive() {
        assert!(search_sources(&tx(), "TOKEN", true).is_empty());
    }

    #[test]
    fn path_is_not_searched() {
        assert!(search_sources(&tx(), "search", false).is_empty());
    }

    #[test]
    fn header_name_matches() {
        assert_eq!(
            search_sources(&tx(), "Authorization", false),
            vec![MatchSource::RequestHeader]
        );
    }
}
