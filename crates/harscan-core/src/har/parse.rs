//! Lenient HAR 1.2 structures as they appear on disk.
//!
//! Every field is optional and tolerated on its own: a value of the wrong
//! type becomes `None` without affecting its siblings. Defaults are applied
//! in [`super::record`].

use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawEntry {
    #[serde(default, deserialize_with = "lenient")]
    pub request: Option<RawRequest>,
    #[serde(default, deserialize_with = "lenient")]
    pub response: Option<RawResponse>,
    #[serde(default, rename = "startedDateTime", deserialize_with = "lenient")]
    pub started_date_time: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub time: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawRequest {
    #[serde(default, deserialize_with = "lenient")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub method: Option<String>,
    #[serde(default, deserialize_with = "lenient_headers")]
    pub headers: Option<Vec<RawHeader>>,
    #[serde(default, rename = "postData", deserialize_with = "lenient")]
    pub post_data: Option<RawBody>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawResponse {
    #[serde(default, deserialize_with = "lenient_number")]
    pub status: Option<f64>,
    #[serde(default, deserialize_with = "lenient_headers")]
    pub headers: Option<Vec<RawHeader>>,
    #[serde(default, deserialize_with = "lenient")]
    pub content: Option<RawBody>,
}

/// Shared shape of `postData` and `content`: only the text is used.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawBody {
    #[serde(default, deserialize_with = "lenient")]
    pub text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawHeader {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub value: Option<String>,
}

/// `T` when the value has the right shape, otherwise `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// A JSON number, or a string holding one (`"200"`); anything else is `None`.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Header array with unusable elements dropped; a non-array is `None`.
fn lenient_headers<'de, D>(deserializer: D) -> Result<Option<Vec<RawHeader>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
        ),
        _ => None,
    })
}
