use crate::cli::OutputFormat;
use crate::error::Result;
use changelog::{
    ordered_sections, ChangeCategory, ChangelogConfig, ChangelogEntry, EntryFormatter,
    MarkdownFormatter,
};
use colored::{Color, Colorize};
use release_loader::LoadOutcome;

const SEPARATOR: &str = "────────────────────────────────────────";

/// Fixed display color of each category
pub fn category_color(category: ChangeCategory) -> Color {
    match category {
        ChangeCategory::Added => Color::Green,
        ChangeCategory::Changed => Color::Yellow,
        ChangeCategory::Fixed => Color::Blue,
        ChangeCategory::Performance => Color::Magenta,
        ChangeCategory::Documentation => Color::BrightBlack,
    }
}

fn render_entry(entry: &ChangelogEntry, config: &ChangelogConfig) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "{} {}\n",
        "🏷 ".cyan(),
        format!("Version {}", entry.version).bold()
    ));
    output.push_str(&format!("   {}\n", config.display_date(entry.date).dimmed()));
    if let Some(link) = entry.link.as_ref().filter(|_| config.show_links) {
        output.push_str(&format!("   Release: {}\n", link.underline()));
    }

    for (category, items) in ordered_sections(entry, config) {
        output.push('\n');
        output.push_str(&format!(
            "   {}\n",
            category.label().color(category_color(category)).bold()
        ));
        for item in items {
            output.push_str(&format!("     • {item}\n"));
        }
    }
    output
}

/// Colored terminal rendering of a changelog
pub fn render_text(
    entries: &[ChangelogEntry],
    releases_page: &str,
    config: &ChangelogConfig,
) -> String {
    let mut output = format!(
        "{}\n{}\n\n",
        "Changelog".bold(),
        "All notable changes to MXP Protocol are documented here.".dimmed()
    );

    for (index, entry) in entries.iter().enumerate() {
        output.push_str(&render_entry(entry, config));
        if index + 1 < entries.len() {
            output.push_str(&format!("\n{}\n\n", SEPARATOR.dimmed()));
        }
    }

    output.push_str(&format!(
        "\nView all releases on GitHub: {}\n",
        releases_page.underline()
    ));
    output
}

/// Renders a load outcome in the requested format
pub fn render(
    outcome: &LoadOutcome,
    format: OutputFormat,
    releases_page: &str,
    config: &ChangelogConfig,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(&outcome.entries, releases_page, config)),
        OutputFormat::Markdown => Ok(format!(
            "# Changelog\n\n{}",
            MarkdownFormatter::new(config.clone()).format_entries(&outcome.entries)
        )),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(outcome)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use changelog::parse_release_notes;
    use release_loader::EntrySource;

    fn entry(version: &str, body: &str) -> ChangelogEntry {
        ChangelogEntry::new(version, "2026-01-15", parse_release_notes(body))
            .unwrap()
            .with_link(format!("https://example.com/v{version}"))
    }

    #[test]
    fn test_text_shows_non_empty_categories_in_order() {
        colored::control::set_override(false);
        let output = render_text(
            &[entry("2.0.0", "### Fixed\n- leak\n### Changed\n### Added\n- streams")],
            "https://example.com/releases",
            &ChangelogConfig::default(),
        );

        let added = output.find("Added").unwrap();
        let fixed = output.find("Fixed").unwrap();
        assert!(added < fixed);
        assert!(!output.contains("Changed"));
        assert!(output.contains("Version 2.0.0"));
        assert!(output.contains("January 15, 2026"));
        assert!(output.contains("Release: https://example.com/v2.0.0"));
        assert!(output.contains("View all releases on GitHub: https://example.com/releases"));
    }

    #[test]
    fn test_text_separates_entries() {
        colored::control::set_override(false);
        let output = render_text(
            &[entry("2.0.0", "### Added\n- a"), entry("1.0.0", "### Added\n- b")],
            "https://example.com/releases",
            &ChangelogConfig::default(),
        );
        assert_eq!(output.matches(SEPARATOR).count(), 1);
    }

    #[test]
    fn test_text_follows_rendering_config() {
        colored::control::set_override(false);
        let config = ChangelogConfig {
            display_date_format: "%Y/%m/%d".to_string(),
            category_order: vec![ChangeCategory::Fixed, ChangeCategory::Added],
            show_links: false,
            ..ChangelogConfig::default()
        };
        let output = render_text(
            &[entry("2.0.0", "### Added\n- streams\n### Fixed\n- leak")],
            "https://example.com/releases",
            &config,
        );

        assert!(output.contains("2026/01/15"));
        assert!(!output.contains("Release: "));
        assert!(output.find("Fixed").unwrap() < output.find("Added").unwrap());
    }

    #[test]
    fn test_json_includes_source() {
        let outcome = LoadOutcome {
            source: EntrySource::Live,
            entries: vec![entry("2.0.0", "### Added\n- streams")],
            skipped: Vec::new(),
        };

        let output = render(
            &outcome,
            OutputFormat::Json,
            "https://example.com/releases",
            &ChangelogConfig::default(),
        )
        .unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["source"], "live");
        assert_eq!(json["entries"][0]["version"], "2.0.0");
        assert_eq!(json["entries"][0]["changes"]["added"][0], "streams");
    }

    #[test]
    fn test_markdown_has_title() {
        let config = ChangelogConfig::default();
        let output = render(&LoadOutcome::bundled(), OutputFormat::Markdown, "", &config).unwrap();
        assert!(output.starts_with("# Changelog\n\n## [0.1.0] - 2025-11-01\n"));
    }

    #[test]
    fn test_category_colors_are_distinct() {
        let mut colors: Vec<_> = ChangeCategory::ALL
            .into_iter()
            .map(|category| format!("{:?}", category_color(category)))
            .collect();
        colors.sort();
        colors.dedup();
        assert_eq!(colors.len(), ChangeCategory::ALL.len());
    }
}
