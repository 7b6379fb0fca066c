use crate::types::{ChangeCategory, Changes};
use crate::utils::{bullet_text, heading_category};

#[derive(Debug, Clone, Default)]
struct ParserState {
    current_section: Option<ChangeCategory>,
}

/// Line-oriented parser turning release-note text into categorized changes.
///
/// Heading lines open a section, `-` bullets are collected into the open
/// section, everything else is ignored. Parsing never fails: text that does
/// not fit the expected shape simply contributes nothing.
#[derive(Debug, Clone, Default)]
pub struct ReleaseNotesParser;

impl ReleaseNotesParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, body: &str) -> Changes {
        let mut changes = Changes::new();
        let mut state = ParserState::default();

        for line in body.split('\n') {
            self.parse_line(line, &mut state, &mut changes);
        }

        changes
    }

    fn parse_line(&self, line: &str, state: &mut ParserState, changes: &mut Changes) {
        if let Some(category) = heading_category(line) {
            self.handle_heading(category, state, changes);
        } else if let Some(item) = bullet_text(line) {
            self.handle_bullet(item, state, changes);
        }
    }

    fn handle_heading(
        &self,
        category: ChangeCategory,
        state: &mut ParserState,
        changes: &mut Changes,
    ) {
        // A repeated heading starts its section over
        state.current_section = Some(category);
        changes.reset(category);
    }

    fn handle_bullet(&self, item: &str, state: &ParserState, changes: &mut Changes) {
        // Bullets before the first heading have nowhere to go
        if let Some(category) = state.current_section {
            if !item.is_empty() {
                changes.push(category, item);
            }
        }
    }
}

/// Parses a release body into categorized changes
pub fn parse_release_notes(body: &str) -> Changes {
    ReleaseNotesParser::new().parse(body)
}
