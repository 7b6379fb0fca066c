use crate::error::{CliError, Result};
use changelog::{parse_release_notes, Changes};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

pub fn execute(file: Option<PathBuf>) -> Result<()> {
    let body = match &file {
        Some(path) => read_notes(path)?,
        None => {
            let mut body = String::new();
            io::stdin()
                .read_to_string(&mut body)
                .map_err(|e| {
                    CliError::Io(e).with_context("Failed to read release notes from stdin")
                })?;
            body
        }
    };

    println!("{}", to_json(&parse_release_notes(&body))?);
    Ok(())
}

fn read_notes(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        CliError::Io(e).with_context(format!("Failed to read {}", path.display()))
    })
}

fn to_json(changes: &Changes) -> Result<String> {
    Ok(serde_json::to_string_pretty(changes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_file_to_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("notes.md");
        fs::write(&path, "### Changed\n### Fixed\n- bug squashed\n").unwrap();

        let changes = parse_release_notes(&read_notes(&path).unwrap());
        let json: serde_json::Value = serde_json::from_str(&to_json(&changes).unwrap()).unwrap();

        assert_eq!(json, serde_json::json!({ "changed": [], "fixed": ["bug squashed"] }));
    }

    #[test]
    fn test_missing_file_has_context() {
        let error = read_notes(Path::new("/definitely/not/here.md")).unwrap_err();
        assert!(error.user_message().starts_with("Failed to read /definitely/not/here.md"));
    }
}
