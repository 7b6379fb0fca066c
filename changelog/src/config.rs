use chrono::NaiveDate;

use crate::types::ChangeCategory;

/// Configuration options for changelog rendering
#[derive(Debug, Clone)]
pub struct ChangelogConfig {
    /// Date format of markdown release headings
    pub date_format: String,
    /// Date format shown to readers on the terminal
    pub display_date_format: String,
    pub category_order: Vec<ChangeCategory>,
    pub show_links: bool,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            date_format: "%Y-%m-%d".to_string(),
            display_date_format: "%B %-d, %Y".to_string(),
            category_order: ChangeCategory::ALL.to_vec(),
            show_links: true,
        }
    }
}

impl ChangelogConfig {
    /// Formats a release date for readers, `November 1, 2025` by default
    #[must_use]
    pub fn display_date(&self, date: NaiveDate) -> String {
        date.format(&self.display_date_format).to_string()
    }
}
