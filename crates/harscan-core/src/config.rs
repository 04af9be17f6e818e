use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::filter::{AdDenylist, ContentTypeLocation, DEFAULT_AD_DOMAINS};

/// Global configuration loaded from `~/.config/harscan/config.toml`.
///
/// Every key is optional; missing keys take their default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarscanConfig {
    /// Domain fragments whose transactions are always excluded.
    pub ad_domains: Vec<String>,
    /// Directory searched for bare HAR names (`session` -> `<har_dir>/session.har`).
    pub har_dir: Option<PathBuf>,
    /// Content-type location used when `--location` is not given.
    pub default_location: ContentTypeLocation,
    /// Report which fields matched the search string.
    pub report_match_sources: bool,
    /// Search response headers as well as request headers.
    pub search_response_headers: bool,
}

impl Default for HarscanConfig {
    fn default() -> Self {
        Self {
            ad_domains: DEFAULT_AD_DOMAINS.iter().map(|d| d.to_string()).collect(),
            har_dir: None,
            default_location: ContentTypeLocation::Both,
            report_match_sources: false,
            search_response_headers: false,
        }
    }
}

impl HarscanConfig {
    pub fn denylist(&self) -> AdDenylist {
        AdDenylist::new(&self.ad_domains)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("harscan")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<HarscanConfig> {
    let path = config_path()?;
    load_or_init_at(&path)
}

/// Same as [`load_or_init`] with an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<HarscanConfig> {
    if !path.exists() {
        let default_cfg = HarscanConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write config {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: HarscanConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = HarscanConfig::default();
        assert_eq!(cfg.ad_domains.len(), DEFAULT_AD_DOMAINS.len());
        assert!(cfg.har_dir.is_none());
        assert_eq!(cfg.default_location, ContentTypeLocation::Both);
        assert!(!cfg.report_match_sources);
        assert!(!cfg.search_response_headers);
        assert_eq!(cfg.denylist(), AdDenylist::default());
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            ad_domains = ["ads.example.com"]
            har_dir = "/home/user/har_files"
            default_location = "response"
            report_match_sources = true
        "#;
        let cfg: HarscanConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.ad_domains, vec!["ads.example.com".to_string()]);
        assert_eq!(cfg.har_dir, Some(PathBuf::from("/home/user/har_files")));
        assert_eq!(cfg.default_location, ContentTypeLocation::Response);
        assert!(cfg.report_match_sources);
        assert!(!cfg.search_response_headers);
        assert!(cfg.denylist().blocks("ads.example.com"));
        assert!(!cfg.denylist().blocks("facebook.com"));
    }

    #[test]
    fn config_toml_empty_uses_defaults() {
        let cfg: HarscanConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, HarscanConfig::default());
    }

    #[test]
    fn config_toml_rejects_unknown_location() {
        assert!(toml::from_str::<HarscanConfig>(r#"default_location = "headers""#).is_err());
    }

    #[test]
    fn load_or_init_creates_then_reads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let created = load_or_init_at(&path).unwrap();
        assert!(path.exists());
        assert_eq!(created, HarscanConfig::default());

        fs::write(&path, "search_response_headers = true\n").unwrap();
        let loaded = load_or_init_at(&path).unwrap();
        assert!(loaded.search_response_headers);
        assert_eq!(loaded.ad_domains, HarscanConfig::default().ad_domains);
    }
}
