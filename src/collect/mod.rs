//! Path collector - expands CLI arguments into candidate file paths

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Expand the input paths into a flat list of candidate file paths.
///
/// Directories are walked depth-first (following symlinks), preserving the
/// order of the input arguments. No extension filtering happens here; that
/// is the classifier's job. A non-directory input is yielded as-is even when
/// it no longer exists on disk, so a locally-deleted file passed explicitly
/// can still be classified as a remote delete.
pub fn collect_paths(inputs: &[PathBuf]) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    for input in inputs {
        if input.is_dir() {
            for entry in WalkDir::new(input)
                .follow_links(true)
                .into_iter()
                .filter_map(|e| e.ok())
            {
                if entry.file_type().is_file() {
                    paths.push(entry.path().to_path_buf());
                }
            }
        } else {
            paths.push(input.clone());
        }
    }

    paths
}

/// The normal (named) components of a path, as UTF-8 segments.
///
/// `./blog/a.md` and `blog/a.md` both yield `["blog", "a.md"]`.
pub fn segments(path: &Path) -> Vec<&str> {
    path.components()
        .filter_map(|c| match c {
            std::path::Component::Normal(s) => s.to_str(),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_collect_walks_directories() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("blog/tech/engineer")).unwrap();
        fs::write(dir.path().join("blog/tech/engineer/a.md"), "a").unwrap();
        fs::write(dir.path().join("blog/tech/engineer/b.md"), "b").unwrap();

        let paths = collect_paths(&[dir.path().to_path_buf()]);
        assert_eq!(paths.len(), 2);
        assert!(paths.iter().all(|p| p.extension().unwrap() == "md"));
    }

    #[test]
    fn test_collect_preserves_argument_order() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("z.md");
        let second = dir.path().join("a.md");
        fs::write(&first, "z").unwrap();
        fs::write(&second, "a").unwrap();

        let paths = collect_paths(&[first.clone(), second.clone()]);
        assert_eq!(paths, vec![first, second]);
    }

    #[test]
    fn test_collect_yields_missing_paths() {
        let missing = PathBuf::from("blog/tech/engineer/gone.md");
        let paths = collect_paths(&[missing.clone()]);
        assert_eq!(paths, vec![missing]);
    }

    #[test]
    fn test_segments_skips_current_dir() {
        let path = Path::new("./blog/tech/engineer/a.md");
        assert_eq!(segments(path), vec!["blog", "tech", "engineer", "a.md"]);
    }
}
