//! Caller-supplied filter settings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseLocationError;

/// Which content type(s) a content-type filter is tested against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentTypeLocation {
    Request,
    Response,
    #[default]
    Both,
}

impl FromStr for ContentTypeLocation {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "request" => Ok(Self::Request),
            "response" => Ok(Self::Response),
            "both" => Ok(Self::Both),
            _ => Err(ParseLocationError(s.to_string())),
        }
    }
}

impl fmt::Display for ContentTypeLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Request => "request",
            Self::Response => "response",
            Self::Both => "both",
        })
    }
}

/// Filter settings for one scan. Empty strings count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Substring searched in query, request headers, and bodies.
    pub search: Option<String>,
    /// Substring required in the selected content type(s).
    pub content_type: Option<String>,
    /// HTTP method, compared case-insensitively.
    pub method: Option<String>,
    pub location: ContentTypeLocation,
    /// Attach the list of fields the search string was found in.
    pub report_match_sources: bool,
    /// Also search response header names and values.
    pub search_response_headers: bool,
}

impl FilterCriteria {
    pub fn search(&self) -> Option<&str> {
        non_empty(&self.search)
    }

    pub fn content_type(&self) -> Option<&str> {
        non_empty(&self.content_type)
    }

    pub fn method(&self) -> Option<&str> {
        non_empty(&self.method)
    }

    /// True when neither a search string nor a content-type filter is set;
    /// such a scan can never match.
    pub fn is_inert(&self) -> bool {
        self.search().is_none() && self.content_type().is_none()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_from_str_is_case_insensitive() {
        assert_eq!("Request".parse(), Ok(ContentTypeLocation::Request));
        assert_eq!(" RESPONSE ".parse(), Ok(ContentTypeLocation::Response));
        assert_eq!("both".parse(), Ok(ContentTypeLocation::Both));
        assert_eq!(
            "headers".parse::<ContentTypeLocation>(),
            Err(ParseLocationError("headers".to_string()))
        );
    }

    #[test]
    fn empty_strings_are_unset() {
        let criteria = FilterCriteria {
            search: Some(String::new()),
            content_type: Some(String::new()),
            method: Some(String::new()),
            ..Default::default()
        };
        assert!(criteria.search().is_none());
        assert!(criteria.method().is_none());
        assert!(criteria.is_inert());
    }
}
