use crate::error::ChangelogError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};

/// Type alias for Result with `ChangelogError`
pub type Result<T> = std::result::Result<T, ChangelogError>;

/// The buckets release-note bullets are sorted into.
///
/// Variant order is the heading precedence order: when a line matches more
/// than one heading marker, the earliest variant wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeCategory {
    Added,
    Changed,
    Fixed,
    Performance,
    Documentation,
}

impl ChangeCategory {
    /// All categories in precedence order
    pub const ALL: [ChangeCategory; 5] = [
        ChangeCategory::Added,
        ChangeCategory::Changed,
        ChangeCategory::Fixed,
        ChangeCategory::Performance,
        ChangeCategory::Documentation,
    ];

    /// Lowercase key used in serialized output
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Changed => "changed",
            Self::Fixed => "fixed",
            Self::Performance => "performance",
            Self::Documentation => "documentation",
        }
    }

    /// Section title shown to readers
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Added => "Added",
            Self::Changed => "Changed",
            Self::Fixed => "Fixed",
            Self::Performance => "Performance",
            Self::Documentation => "Documentation",
        }
    }

    /// Word that follows the `## ` marker in a heading line.
    /// Documentation only needs the `doc` prefix so `## Docs` also counts.
    #[must_use]
    pub const fn heading_keyword(self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Changed => "changed",
            Self::Fixed => "fixed",
            Self::Performance => "performance",
            Self::Documentation => "doc",
        }
    }
}

impl Display for ChangeCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Categorized change lists of a single release.
///
/// A category that appeared as a heading is present even when no bullet
/// followed it. Iteration always follows category precedence order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Changes(BTreeMap<ChangeCategory, Vec<String>>);

impl Changes {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes sure a bucket exists for `category`, keeping any items it already holds
    pub fn ensure(&mut self, category: ChangeCategory) -> &mut Vec<String> {
        self.0.entry(category).or_default()
    }

    /// Starts `category` over with an empty bucket, dropping anything collected before
    pub fn reset(&mut self, category: ChangeCategory) {
        self.0.insert(category, Vec::new());
    }

    /// Appends an item to `category`, creating the bucket when needed
    pub fn push(&mut self, category: ChangeCategory, item: impl Into<String>) {
        self.ensure(category).push(item.into());
    }

    #[must_use]
    pub fn get(&self, category: ChangeCategory) -> Option<&[String]> {
        self.0.get(&category).map(Vec::as_slice)
    }

    #[must_use]
    pub fn contains(&self, category: ChangeCategory) -> bool {
        self.0.contains_key(&category)
    }

    /// Number of categories present, empty buckets included
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ChangeCategory, &[String])> {
        self.0.iter().map(|(category, items)| (*category, items.as_slice()))
    }
}

impl FromIterator<(ChangeCategory, Vec<String>)> for Changes {
    fn from_iter<I: IntoIterator<Item = (ChangeCategory, Vec<String>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// One release as shown in the changelog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangelogEntry {
    pub version: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default)]
    pub changes: Changes,
}

impl ChangelogEntry {
    /// Creates an entry, parsing `date` as `YYYY-MM-DD`
    ///
    /// # Errors
    /// Returns `ChangelogError::InvalidDate` when `date` is not a calendar date
    pub fn new(version: impl Into<String>, date: &str, changes: Changes) -> Result<Self> {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|e| ChangelogError::InvalidDate(date.to_string(), e.to_string()))?;

        Ok(Self {
            version: version.into(),
            date,
            link: None,
            changes,
        })
    }

    #[must_use]
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }
}
