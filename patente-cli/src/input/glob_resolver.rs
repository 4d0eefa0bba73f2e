//! Deck path resolution using glob

use anyhow::{Context, Result};
use glob::glob;
use std::path::{Path, PathBuf};

use crate::error::CliError;

/// Resolve patterns to deck files.
///
/// A pattern may be a file, a directory (its `*.json` files are taken) or a
/// glob. Existing paths are taken literally even when their names contain
/// glob characters. A plain path that does not exist is an error.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_dir() {
            files.extend(json_files_in(path)?);
            continue;
        }
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        if !is_glob(pattern) && !path.exists() {
            return Err(CliError::FileNotFound(pattern.clone()).into());
        }

        let paths = glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;
        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {}", pattern))?;

            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        anyhow::bail!("No deck files found matching the provided patterns");
    }

    files.sort();
    files.dedup();

    log::debug!("Resolved {} deck files", files.len());
    Ok(files)
}

fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

fn json_files_in(dir: &Path) -> Result<Vec<PathBuf>> {
    let escaped = glob::Pattern::escape(&dir.to_string_lossy());
    let pattern = Path::new(&escaped).join("*.json");
    let pattern = pattern.to_string_lossy();
    let paths = glob(&pattern).map_err(|_| CliError::InvalidPattern(pattern.to_string()))?;

    let mut files = Vec::new();
    for path_result in paths {
        let path = path_result.with_context(|| format!("Error reading {}", dir.display()))?;
        if path.is_file() {
            files.push(path);
        }
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn deck_dir() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("02.json"), "[]").unwrap();
        fs::write(temp_dir.path().join("01.json"), "[]").unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "").unwrap();
        temp_dir
    }

    #[test]
    fn test_directory_expands_to_sorted_json_files() {
        let temp_dir = deck_dir();
        let files = resolve_patterns(&[temp_dir.path().to_string_lossy().to_string()]).unwrap();

        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["01.json", "02.json"]);
    }

    #[test]
    fn test_glob_and_duplicates() {
        let temp_dir = deck_dir();
        let glob_pattern = temp_dir.path().join("0*.json").to_string_lossy().to_string();
        let literal = temp_dir.path().join("01.json").to_string_lossy().to_string();

        let files = resolve_patterns(&[glob_pattern, literal]).unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_existing_file_with_glob_characters() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Lezione [1].json");
        fs::write(&path, "[]").unwrap();

        let files = resolve_patterns(&[path.to_string_lossy().to_string()]).unwrap();
        assert_eq!(files, vec![path]);
    }

    #[test]
    fn test_missing_literal_path() {
        let err = resolve_patterns(&["/nonexistent/deck.json".to_string()]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = resolve_patterns(&["[invalid".to_string()]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InvalidPattern(_))
        ));
    }

    #[test]
    fn test_glob_without_matches() {
        let temp_dir = TempDir::new().unwrap();
        let pattern = temp_dir.path().join("*.json").to_string_lossy().to_string();
        let err = resolve_patterns(&[pattern]).unwrap_err();
        assert!(err.to_string().contains("No deck files found"));
    }
}
