//! Changelog model for MXP release notes.
//!
//! Turns free-form release-note text into categorized change lists and ships
//! the bundled changelog shown when no live data is available.

pub mod bundled;
pub mod config;
pub mod error;
pub mod formatter;
pub mod parser;
pub mod types;
pub mod utils;

pub use bundled::{bundled_entries, RELEASES_PAGE_URL};
pub use config::ChangelogConfig;
pub use error::ChangelogError;
pub use formatter::{ordered_sections, EntryFormatter, MarkdownFormatter};
pub use parser::{parse_release_notes, ReleaseNotesParser};
pub use types::{ChangeCategory, ChangelogEntry, Changes, Result};
