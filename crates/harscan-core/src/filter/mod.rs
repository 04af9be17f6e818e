//! Transaction filter: one pass over a loaded capture.
//!
//! Per entry, in order: method filter, ad-domain exclusion, content-type
//! filter, search-string match. Any failing step skips the entry. With a
//! search string an entry needs a search hit; without one it is admitted by
//! the content-type filter alone. With neither, nothing matches.

mod criteria;
mod denylist;
mod search;

pub use criteria::{ContentTypeLocation, FilterCriteria};
pub use denylist::{AdDenylist, DEFAULT_AD_DOMAINS};
pub use search::MatchSource;

use serde::Serialize;

use crate::har::{HarLog, Transaction};

/// Message shown when a scan matches nothing.
pub const NO_MATCHES_MESSAGE: &str = "No matching transactions found.";

/// Summary of one matching transaction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    /// 1-based index in the original log.
    pub position: usize,
    pub url: String,
    pub method: String,
    pub status: Option<u16>,
    pub started_date_time: String,
    pub time: Option<f64>,
    /// Response content type.
    pub transaction_type: String,
    /// Present only when match sources were requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_sources: Option<Vec<MatchSource>>,
}

/// Result of a scan. `NoMatches` is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterOutcome {
    Matches(Vec<MatchResult>),
    NoMatches,
}

impl FilterOutcome {
    fn from_results(results: Vec<MatchResult>) -> Self {
        if results.is_empty() {
            Self::NoMatches
        } else {
            Self::Matches(results)
        }
    }

    pub fn matches(&self) -> &[MatchResult] {
        match self {
            Self::Matches(results) => results,
            Self::NoMatches => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::NoMatches)
    }

    pub fn into_matches(self) -> Vec<MatchResult> {
        match self {
            Self::Matches(results) => results,
            Self::NoMatches => Vec::new(),
        }
    }
}

/// Run `criteria` over every entry of `log`, excluding `denylist` domains.
pub fn filter(log: &HarLog, criteria: &FilterCriteria, denylist: &AdDenylist) -> FilterOutcome {
    if criteria.is_inert() {
        tracing::debug!("no search string or content-type filter; nothing can match");
    }

    let results = log
        .entries
        .iter()
        .enumerate()
        .filter_map(|(idx, tx)| evaluate(idx + 1, tx, criteria, denylist))
        .collect();

    FilterOutcome::from_results(results)
}

fn evaluate(
    position: usize,
    tx: &Transaction,
    criteria: &FilterCriteria,
    denylist: &AdDenylist,
) -> Option<MatchResult> {
    tracing::trace!(
        "processing entry #{}, method={}, url={}",
        position,
        tx.method,
        tx.url
    );

    if let Some(method) = criteria.method() {
        if !tx.method.eq_ignore_ascii_case(method) {
            return None;
        }
    }

    if let Some(domain) = denylist.matching(&tx.authority) {
        tracing::debug!("skipping entry #{}: ad domain {}", position, domain);
        return None;
    }

    if let Some(wanted) = criteria.content_type() {
        if !content_type_matches(tx, wanted, criteria.location) {
            tracing::trace!(
                "skipping entry #{}: content type request={} response={} lacks {}",
                position,
                tx.request_content_type,
                tx.response_content_type,
                wanted
            );
            return None;
        }
    }

    let sources = match criteria.search() {
        Some(needle) => {
            let found = search::search_sources(tx, needle, criteria.search_response_headers);
            if found.is_empty() {
                return None;
            }
            tracing::debug!("entry #{} matched in {:?}", position, found);
            found
        }
        None if criteria.content_type().is_some() => vec![MatchSource::ContentTypeFilter],
        None => return None,
    };

    Some(MatchResult {
        position,
        url: tx.url.clone(),
        method: tx.method.clone(),
        status: tx.status,
        started_date_time: tx.started_date_time.clone(),
        time: tx.time,
        transaction_type: tx.response_content_type.clone(),
        match_sources: criteria.report_match_sources.then_some(sources),
    })
}

fn content_type_matches(tx: &Transaction, wanted: &str, location: ContentTypeLocation) -> bool {
    match location {
        ContentTypeLocation::Request => tx.request_content_type.contains(wanted),
        ContentTypeLocation::Response => tx.response_content_type.contains(wanted),
        ContentTypeLocation::Both => {
            tx.request_content_type.contains(wanted) || tx.response_content_type.contains(wanted)
        }
    }
}
