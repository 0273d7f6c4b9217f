// htmlmend/src/walk.rs
//! Recursive document discovery.
//!
//! Walks a directory tree collecting files with the configured extension,
//! skipping `node_modules`, `.git`, and other hidden directories. Results
//! are sorted so runs are deterministic.
//!
//! License: MIT OR Apache-2.0

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};
use log::warn;

/// Finds every file under `root` whose extension matches `ext`
/// (case-insensitive, leading dot optional).
pub fn find_documents(root: &Path, ext: &str) -> Result<Vec<PathBuf>> {
    ensure!(
        root.is_dir(),
        "Root {} is not a directory",
        root.display()
    );
    let ext = ext.trim_start_matches('.').to_ascii_lowercase();
    let mut files = Vec::new();
    collect(root, &ext, &mut files);
    files.sort();
    Ok(files)
}

fn collect(dir: &Path, ext: &str, files: &mut Vec<PathBuf>) {
    let entries = match fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory {}", dir.display()))
    {
        Ok(entries) => entries,
        Err(e) => {
            // An unreadable subtree must not abort the rest of the run.
            warn!("{e:#}");
            return;
        }
    };

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Failed to read an entry of {}: {e}", dir.display());
                continue;
            }
        };
        // The entry's own type, not the symlink target's: following
        // symlinked directories could loop forever on a cycle.
        let file_type = match entry.file_type() {
            Ok(file_type) => file_type,
            Err(e) => {
                warn!("Failed to stat an entry of {}: {e}", dir.display());
                continue;
            }
        };
        let path = entry.path();
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if file_type.is_dir() {
            if name == "node_modules" || name.starts_with('.') {
                continue;
            }
            collect(&path, ext, files);
        } else if file_type.is_file()
            && path
                .extension()
                .is_some_and(|e| e.eq_ignore_ascii_case(ext))
        {
            files.push(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        let _ = File::create(path).unwrap();
    }

    #[test]
    fn finds_matching_files_sorted() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("b.html"));
        touch(&dir.path().join("a.html"));
        touch(&dir.path().join("sub/c.HTML"));
        touch(&dir.path().join("notes.txt"));

        let found = find_documents(dir.path(), "html").unwrap();
        let names: Vec<_> = found
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.html", "b.html", "sub/c.HTML"]);
    }

    #[test]
    fn skips_node_modules_and_hidden_dirs() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("keep.html"));
        touch(&dir.path().join("node_modules/skip.html"));
        touch(&dir.path().join(".git/skip.html"));
        touch(&dir.path().join(".cache/skip.html"));

        let found = find_documents(dir.path(), "html").unwrap();
        assert_eq!(found.len(), 1);
        assert!(found[0].ends_with("keep.html"));
    }

    #[test]
    fn leading_dot_in_extension_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("page.htm"));
        let found = find_documents(dir.path(), ".htm").unwrap();
        assert_eq!(found.len(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_directory_cycle_terminates() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("sub/page.html"));
        std::os::unix::fs::symlink(dir.path(), dir.path().join("sub/loop")).unwrap();

        let found = find_documents(dir.path(), "html").unwrap();
        assert_eq!(found.len(), 1);
        assert!(found[0].ends_with("sub/page.html"));
    }

    #[test]
    fn missing_root_is_an_error() {
        assert!(find_documents(Path::new("/definitely/not/here"), "html").is_err());
    }
}
