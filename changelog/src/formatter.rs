use crate::config::ChangelogConfig;
use crate::types::{ChangeCategory, ChangelogEntry};

// --- Traits ---

pub trait EntryFormatter: Send + Sync {
    fn format_entry(&self, entry: &ChangelogEntry) -> String;

    fn format_entries(&self, entries: &[ChangelogEntry]) -> String {
        entries
            .iter()
            .map(|entry| self.format_entry(entry))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Items of `entry` grouped by the configured category order, skipping empty buckets
pub fn ordered_sections<'a>(
    entry: &'a ChangelogEntry,
    config: &'a ChangelogConfig,
) -> impl Iterator<Item = (ChangeCategory, &'a [String])> + 'a {
    config.category_order.iter().filter_map(move |category| {
        entry
            .changes
            .get(*category)
            .filter(|items| !items.is_empty())
            .map(|items| (*category, items))
    })
}

// Markdown Formatter
#[derive(Debug, Clone, Default)]
pub struct MarkdownFormatter {
    config: ChangelogConfig,
}

impl MarkdownFormatter {
    pub fn new(config: ChangelogConfig) -> Self {
        Self { config }
    }
}

impl EntryFormatter for MarkdownFormatter {
    fn format_entry(&self, entry: &ChangelogEntry) -> String {
        let mut formatted = String::with_capacity(512);
        formatted.push_str(&format!(
            "## [{}] - {}\n",
            entry.version,
            entry.date.format(&self.config.date_format)
        ));

        if self.config.show_links {
            if let Some(link) = &entry.link {
                formatted.push_str(&format!("[Release]({link})\n"));
            }
        }
        formatted.push('\n');

        for (category, items) in ordered_sections(entry, &self.config) {
            formatted.push_str("### ");
            formatted.push_str(category.label());
            formatted.push('\n');
            for item in items {
                formatted.push_str("- ");
                formatted.push_str(item);
                formatted.push('\n');
            }
            formatted.push('\n');
        }
        formatted
    }
}
