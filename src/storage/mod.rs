// SPDX-License-Identifier: PMPL-1.0-or-later

//! Whole-artifact persistence
//!
//! Artifacts are written to a temporary file next to the destination and
//! renamed over it, so a failed run leaves the previous content in place.

use anyhow::{anyhow, Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

pub fn persist_artifact(path: &Path, contents: &[u8]) -> Result<()> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent)
        .with_context(|| format!("creating directory {}", parent.display()))?;

    let mut staged = NamedTempFile::new_in(parent)
        .with_context(|| format!("staging temporary file in {}", parent.display()))?;
    staged
        .write_all(contents)
        .and_then(|_| staged.flush())
        .with_context(|| format!("writing staged copy of {}", path.display()))?;
    staged
        .persist(path)
        .map_err(|err| anyhow!("replacing {}: {}", path.display(), err.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_persist_creates_missing_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/deeper/out.txt");
        persist_artifact(&path, b"hello").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn test_persist_overwrites_previous_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");
        fs::write(&path, "a much longer previous artifact body").unwrap();
        persist_artifact(&path, b"short").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "short");
    }

    #[test]
    fn test_persist_leaves_no_staging_files() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");
        persist_artifact(&path, b"x").unwrap();
        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().flatten().collect();
        assert_eq!(entries.len(), 1);
    }
}
