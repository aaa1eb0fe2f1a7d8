use log::debug;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Walks the tree under `root` and returns every regular file that does not
/// live under a directory whose basename is in `ignore_dirs`. Pruning happens
/// in `filter_entry`, before recursion, so an ignored directory's subtree is
/// never visited. The root itself is exempt from pruning.
pub fn walk_source_files(root: &Path, ignore_dirs: &HashSet<String>) -> Vec<PathBuf> {
    debug!("Walking {}", root.display());
    debug!("Pruned directory names: {:?}", ignore_dirs);

    let mut result = Vec::new();

    for entry in WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| {
            if e.depth() == 0 || !e.file_type().is_dir() {
                return true;
            }
            let name = e.file_name().to_string_lossy();
            !ignore_dirs.contains(name.as_ref())
        })
        .filter_map(Result::ok)
    {
        if entry.file_type().is_dir() || entry.file_type().is_symlink() {
            continue;
        }

        debug!("Candidate file: {}", entry.path().display());
        result.push(entry.into_path());
    }

    debug!("Walk yielded {} candidate files", result.len());
    result
}

/// Strict read: any failure (missing file, permissions, non-UTF-8 bytes)
/// propagates so the caller can warn and skip.
pub fn read_file_contents(path: &Path) -> anyhow::Result<String> {
    debug!("Reading file contents: {}", path.display());
    let contents = fs::read_to_string(path)?;
    debug!("Read {} bytes from file", contents.len());
    Ok(contents)
}

/// Path relative to `root`, with components joined by forward slashes
/// regardless of platform separator.
pub fn relative_display_path(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_walk_prunes_ignored_directories() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("src")).unwrap();
        fs::create_dir_all(temp_dir.path().join("src/target/debug")).unwrap();
        fs::write(temp_dir.path().join("src/main.rs"), "fn main() {}").unwrap();
        fs::write(temp_dir.path().join("src/target/debug/lib.o"), "obj").unwrap();

        let ignore_dirs: HashSet<String> = ["target".to_string()].into_iter().collect();
        let files = walk_source_files(temp_dir.path(), &ignore_dirs);

        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("src/main.rs"));
    }

    #[test]
    fn test_walk_prunes_transitively() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("node_modules/pkg/src")).unwrap();
        fs::write(temp_dir.path().join("node_modules/pkg/src/index.js"), "x").unwrap();
        fs::write(temp_dir.path().join("app.js"), "y").unwrap();

        let ignore_dirs: HashSet<String> = ["node_modules".to_string()].into_iter().collect();
        let files = walk_source_files(temp_dir.path(), &ignore_dirs);

        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("app.js"));
    }

    #[test]
    fn test_walk_root_is_not_pruned() {
        // A root whose own basename is in the ignore set is still walked.
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("build");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("script.sh"), "echo").unwrap();

        let ignore_dirs: HashSet<String> = ["build".to_string()].into_iter().collect();
        let files = walk_source_files(&root, &ignore_dirs);

        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_read_file_contents() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.txt");

        {
            let mut file = File::create(&file_path).unwrap();
            writeln!(file, "Test content").unwrap();
        }

        let contents = read_file_contents(&file_path).unwrap();
        assert_eq!(contents, "Test content\n");
    }

    #[test]
    fn test_read_undecodable_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("bad.rs");
        fs::write(&file_path, [0xff, 0xfe, 0x00, 0x80]).unwrap();

        assert!(read_file_contents(&file_path).is_err());
    }

    #[test]
    fn test_relative_display_path() {
        let root = Path::new("/project");
        let path = Path::new("/project/src/cli/commands.rs");
        assert_eq!(relative_display_path(root, path), "src/cli/commands.rs");
    }
}
