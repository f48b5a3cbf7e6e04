use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Expand files and directories into the list of files to check.
///
/// Hidden entries below a directory root are skipped; missing paths are
/// logged and ignored.
pub fn collect_files(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_file() {
            files.push(path.clone());
        } else if path.is_dir() {
            files.extend(files_under(path));
        } else {
            log::warn!("Skipping missing path: {}", path.display());
        }
    }

    files
}

fn files_under(root: &Path) -> impl Iterator<Item = PathBuf> {
    WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                log::warn!("Skipping unreadable entry: {}", err);
                None
            }
        })
        .filter(|e| e.file_type().is_file())
        .map(DirEntry::into_path)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_collect_files() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("src/nested")).unwrap();
        fs::create_dir_all(dir.path().join(".git")).unwrap();
        fs::write(dir.path().join("src/a.rs"), "").unwrap();
        fs::write(dir.path().join("src/nested/b.rs"), "").unwrap();
        fs::write(dir.path().join(".git/config"), "").unwrap();
        fs::write(dir.path().join(".hidden.rs"), "").unwrap();
        let single = dir.path().join("single.txt");
        fs::write(&single, "").unwrap();

        let files = collect_files(&[
            dir.path().join("src"),
            single.clone(),
            dir.path().join("missing"),
        ]);

        assert_eq!(
            files,
            vec![
                dir.path().join("src/a.rs"),
                dir.path().join("src/nested/b.rs"),
                single,
            ]
        );
    }

    #[test]
    fn test_hidden_entries_are_skipped() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join(".cache")).unwrap();
        fs::write(dir.path().join(".cache/x.rs"), "").unwrap();
        fs::write(dir.path().join("y.rs"), "").unwrap();

        let files = collect_files(&[dir.path().to_path_buf()]);
        assert_eq!(files, vec![dir.path().join("y.rs")]);
    }
}
