// Results export - save the current results to a plain-text file
//
// The file contains the results string verbatim, nothing more. Parent
// directories are created if the configured path points into one that
// doesn't exist yet.

use anyhow::{Context, Result};
use std::path::Path;

/// Write `results` to `path` verbatim, overwriting any previous export.
pub fn save_results(results: &str, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }

    std::fs::write(path, results)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::info!(path = %path.display(), bytes = results.len(), "results saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("promptpad-test-{}-{}", std::process::id(), name))
    }

    #[test]
    fn saved_file_matches_results_exactly() {
        let path = temp_path("exact.txt");
        let results = "Results for: \"hello\"\n\nbody text";

        save_results(results, &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), results);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn save_overwrites_previous_export() {
        let path = temp_path("overwrite.txt");

        save_results("first", &path).unwrap();
        save_results("second", &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn save_creates_missing_parent_dirs() {
        let dir = temp_path("nested");
        let path = dir.join("deep").join("out.txt");

        save_results("nested ok", &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "nested ok");

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
