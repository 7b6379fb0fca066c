use crate::error::{LoaderError, RecordError, Result};
use changelog::{parse_release_notes, ChangelogEntry};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;

/// One element of the release-list payload, as far as the changelog cares
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawRelease {
    pub tag_name: String,
    pub published_at: String,
    pub html_url: String,
    /// GitHub sends `null` for releases without notes
    #[serde(default)]
    pub body: Option<String>,
}

/// Outcome of decoding a single array element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordDecode {
    Record(RawRelease),
    Invalid(RecordError),
}

/// Decodes the release-list body element by element.
///
/// Only a body that is not a JSON array fails as a whole; bad elements come
/// back as `RecordDecode::Invalid` next to the good ones.
pub fn decode_releases(body: &str) -> Result<Vec<RecordDecode>> {
    let value: Value = serde_json::from_str(body)?;
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(LoaderError::UnexpectedShape {
                found: json_kind(&other).to_string(),
            })
        }
    };

    Ok(items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match serde_json::from_value::<RawRelease>(item) {
            Ok(release) => RecordDecode::Record(release),
            Err(e) => RecordDecode::Invalid(RecordError::new(index, e.to_string())),
        })
        .collect())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Strips one leading `v` from a release tag
pub fn normalize_version(tag: &str) -> &str {
    tag.strip_prefix('v').unwrap_or(tag)
}

/// Takes the calendar date out of a timestamp such as `2026-01-15T00:00:00Z`
pub fn release_date(published_at: &str) -> std::result::Result<NaiveDate, String> {
    let date_part = published_at.split('T').next().unwrap_or_default();
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map_err(|e| format!("published_at '{published_at}' has no calendar date: {e}"))
}

impl RawRelease {
    /// Normalizes the record into a changelog entry
    pub fn into_entry(self, index: usize) -> std::result::Result<ChangelogEntry, RecordError> {
        let date = release_date(&self.published_at)
            .map_err(|reason| RecordError::new(index, reason))?;
        let changes = parse_release_notes(self.body.as_deref().unwrap_or_default());

        Ok(ChangelogEntry {
            version: normalize_version(&self.tag_name).to_string(),
            date,
            link: Some(self.html_url),
            changes,
        })
    }
}
