//! Advertising and tracking domains excluded from every scan.

/// Domains skipped when no list is configured.
pub const DEFAULT_AD_DOMAINS: &[&str] = &[
    "doubleclick.net",
    "googleads.g.doubleclick.net",
    "googleadservices.com",
    "googlesyndication.com",
    "google-analytics.com",
    "ads.linkedin.com",
    "facebook.com",
    "twitter.com",
];

/// Immutable set of domain fragments; an authority containing any of them is excluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdDenylist {
    domains: Vec<String>,
}

impl AdDenylist {
    /// Build a denylist. Fragments are lowercased (URL hosts are) and blanks dropped,
    /// since an empty fragment would match every authority.
    pub fn new<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let domains = domains
            .into_iter()
            .map(|d| d.as_ref().trim().to_ascii_lowercase())
            .filter(|d| !d.is_empty())
            .collect();
        Self { domains }
    }

    /// The first fragment contained in `authority`, if any.
    pub fn matching(&self, authority: &str) -> Option<&str> {
        if authority.is_empty() {
            return None;
        }
        let authority = authority.to_ascii_lowercase();
        self.domains
            .iter()
            .find(|d| authority.contains(d.as_str()))
            .map(String::as_str)
    }

    pub fn blocks(&self, authority: &str) -> bool {
        self.matching(authority).is_some()
    }

    pub fn domains(&self) -> &[String] {
        &self.domains
    }
}

impl Default for AdDenylist {
    fn default() -> Self {
        Self::new(DEFAULT_AD_DOMAINS)
    }
}
