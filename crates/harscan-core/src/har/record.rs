//! Normalized transaction record built once per HAR entry.

use super::parse::{RawEntry, RawHeader};

/// Placeholder for absent method, start time, or content type.
pub const UNKNOWN: &str = "UNKNOWN";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub name: String,
    pub value: String,
}

impl Header {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// One HTTP exchange with every optional field resolved to a concrete value.
///
/// `authority` and `query` are derived from `url` at construction so that
/// matching never re-parses the URL.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub url: String,
    pub method: String,
    pub status: Option<u16>,
    pub started_date_time: String,
    pub time: Option<f64>,
    pub request_headers: Vec<Header>,
    pub response_headers: Vec<Header>,
    pub request_body: String,
    pub response_body: String,
    pub request_content_type: String,
    pub response_content_type: String,
    pub authority: String,
    pub query: String,
}

impl Transaction {
    pub(crate) fn from_raw(raw: RawEntry) -> Self {
        let request = raw.request.unwrap_or_default();
        let response = raw.response.unwrap_or_default();

        let url = request.url.unwrap_or_default();
        let request_headers = normalize_headers(request.headers);
        let response_headers = normalize_headers(response.headers);
        let request_content_type = content_type_of(&request_headers);
        let response_content_type = content_type_of(&response_headers);
        let (authority, query) = split_url(&url);

        Self {
            method: request.method.unwrap_or_else(|| UNKNOWN.to_string()),
            status: response.status.and_then(status_code),
            started_date_time: raw
                .started_date_time
                .unwrap_or_else(|| UNKNOWN.to_string()),
            time: raw.time,
            request_body: request
                .post_data
                .and_then(|b| b.text)
                .unwrap_or_default(),
            response_body: response.content.and_then(|b| b.text).unwrap_or_default(),
            request_headers,
            response_headers,
            request_content_type,
            response_content_type,
            authority,
            query,
            url,
        }
    }

    /// Record with the given URL and method and nothing else; handy for building logs in code.
    pub fn new(url: impl Into<String>, method: impl Into<String>) -> Self {
        let mut tx = Self::from_raw(RawEntry::default());
        tx.set_url(url.into());
        tx.method = method.into();
        tx
    }

    /// Replace the URL and re-derive `authority` and `query`.
    pub fn set_url(&mut self, url: String) {
        let (authority, query) = split_url(&url);
        self.url = url;
        self.authority = authority;
        self.query = query;
    }

    /// Replace request headers and re-derive the request content type.
    pub fn set_request_headers(&mut self, headers: Vec<Header>) {
        self.request_content_type = content_type_of(&headers);
        self.request_headers = headers;
    }

    /// Replace response headers and re-derive the response content type.
    pub fn set_response_headers(&mut self, headers: Vec<Header>) {
        self.response_content_type = content_type_of(&headers);
        self.response_headers = headers;
    }
}

fn normalize_headers(raw: Option<Vec<RawHeader>>) -> Vec<Header> {
    raw.unwrap_or_default()
        .into_iter()
        .map(|h| Header {
            name: h.name.unwrap_or_default(),
            value: h.value.unwrap_or_default(),
        })
        .collect()
}

/// Value of the first `Content-Type` header, or [`UNKNOWN`] when there is none.
fn content_type_of(headers: &[Header]) -> String {
    headers
        .iter()
        .find(|h| h.name.eq_ignore_ascii_case("content-type"))
        .map(|h| h.value.clone())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

fn status_code(raw: f64) -> Option<u16> {
    if raw.is_finite() && (0.0..=f64::from(u16::MAX)).contains(&raw) {
        Some(raw as u16)
    } else {
        None
    }
}

/// Split a URL into `(authority, query)`.
///
/// Authority is `host[:port]`; it is empty when the URL does not parse or
/// has no host. The query is the raw text between the first `?` and any
/// `#`, exactly as recorded (no percent-encoding applied).
fn split_url(url: &str) -> (String, String) {
    let authority = match url::Url::parse(url) {
        Ok(parsed) => match (parsed.host_str(), parsed.port()) {
            (Some(host), Some(port)) => format!("{host}:{port}"),
            (Some(host), None) => host.to_string(),
            (None, _) => String::new(),
        },
        Err(_) => String::new(),
    };
    (authority, raw_query(url).to_string())
}

fn raw_query(url: &str) -> &str {
    let without_fragment = url.split('#').next().unwrap_or_default();
    without_fragment
        .split_once('?')
        .map(|(_, q)| q)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_url_host_and_query() {
        let (authority, query) = split_url("https://api.example.com/search?q=token#frag");
        assert_eq!(authority, "api.example.com");
        assert_eq!(query, "q=token");
    }

    #[test]
    fn split_url_keeps_explicit_port() {
        let (authority, query) = split_url("http://localhost:8080/x");
        assert_eq!(authority, "localhost:8080");
        assert!(query.is_empty());
    }

    #[test]
    fn split_url_query_is_not_percent_encoded() {
        let (authority, query) = split_url("https://api.example.com/s?q=café&msg=hello world&t=\"x\"");
        assert_eq!(authority, "api.example.com");
        assert_eq!(query, "q=café&msg=hello world&t=\"x\"");
    }

    #[test]
    fn split_url_keeps_existing_escapes() {
        let (_, query) = split_url("https://example.com/?a=%20b#c?d");
        assert_eq!(query, "a=%20b");
    }

    #[test]
    fn split_url_unparseable_falls_back_to_query_only() {
        let (authority, query) = split_url("/relative/path?a=1&b=2#top");
        assert!(authority.is_empty());
        assert_eq!(query, "a=1&b=2");
    }

    #[test]
    fn content_type_first_header_wins_case_insensitive() {
        let headers = vec![
            Header::new("Accept", "*/*"),
            Header::new("CONTENT-TYPE", "text/html"),
            Header::new("content-type", "application/json"),
        ];
        assert_eq!(content_type_of(&headers), "text/html");
    }

    #[test]
    fn content_type_missing_is_unknown_and_empty_stays_empty() {
        assert_eq!(content_type_of(&[]), UNKNOWN);
        assert_eq!(content_type_of(&[Header::new("Content-Type", "")]), "");
    }

    #[test]
    fn from_raw_defaults_everything() {
        let tx = Transaction::from_raw(RawEntry::default());
        assert_eq!(tx.url, "");
        assert_eq!(tx.method, UNKNOWN);
        assert_eq!(tx.status, None);
        assert_eq!(tx.started_date_time, UNKNOWN);
        assert_eq!(tx.time, None);
        assert!(tx.request_body.is_empty());
        assert!(tx.response_body.is_empty());
        assert_eq!(tx.request_content_type, UNKNOWN);
        assert_eq!(tx.response_content_type, UNKNOWN);
    }

    #[test]
    fn status_out_of_range_is_absent() {
        assert_eq!(status_code(200.0), Some(200));
        assert_eq!(status_code(-1.0), None);
        assert_eq!(status_code(70000.0), None);
    }

    #[test]
    fn set_headers_rederives_content_types() {
        let mut tx = Transaction::new("https://example.com/", "POST");
        tx.set_request_headers(vec![Header::new("Content-Type", "text/plain")]);
        tx.set_response_headers(vec![Header::new("content-type", "image/png")]);
        assert_eq!(tx.request_content_type, "text/plain");
        assert_eq!(tx.response_content_type, "image/png");
        assert_eq!(tx.authority, "example.com");
    }
}
