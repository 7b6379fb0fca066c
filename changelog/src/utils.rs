use crate::types::ChangeCategory;
use once_cell::sync::Lazy;
use regex::Regex;

/// Heading markers in precedence order. `## ` also matches inside `### `.
pub static HEADING_MARKER_PATTERNS: Lazy<Vec<(ChangeCategory, Regex)>> = Lazy::new(|| {
    ChangeCategory::ALL
        .into_iter()
        .map(|category| {
            let pattern = format!("(?i)## {}", regex::escape(category.heading_keyword()));
            let regex = Regex::new(&pattern).expect("Failed to compile heading marker regex");
            (category, regex)
        })
        .collect()
});

/// Returns the first category, in precedence order, whose heading marker occurs in `line`
pub fn heading_category(line: &str) -> Option<ChangeCategory> {
    HEADING_MARKER_PATTERNS
        .iter()
        .find(|(_, regex)| regex.is_match(line))
        .map(|(category, _)| *category)
}

/// Returns the text of a `-` bullet line with the marker and surrounding whitespace removed
pub fn bullet_text(line: &str) -> Option<&str> {
    line.trim().strip_prefix('-').map(str::trim)
}
