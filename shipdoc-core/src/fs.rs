//! Filesystem abstractions used by the page pipeline.

use std::path::Path;

use crate::error::Result;

/// Abstraction over filesystem access for testability.
#[cfg_attr(test, mockall::automock)]
pub trait FileSystem {
    /// Read a file into a string.
    fn read_to_string(&self, path: &Path) -> Result<String>;
    /// Create or truncate a file and write the given contents to it.
    fn write(&self, path: &Path, contents: &str) -> Result<()>;
}

/// Default filesystem implementation backed by `std::fs`.
#[derive(Debug, Default, Clone)]
pub struct StdFileSystem;

impl StdFileSystem {
    /// Create a new standard filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for StdFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        Ok(std::fs::read_to_string(path)?)
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        Ok(std::fs::write(path, contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::StdFileSystem;
    use crate::fs::FileSystem;
    use std::path::PathBuf;

    #[test]
    fn std_filesystem_writes_and_reads_files() {
        let root = std::env::temp_dir().join(unique_dir_name());
        std::fs::create_dir_all(&root).expect("create temp dir");
        let file_path = root.join("llama.md");

        let fs = StdFileSystem::new();
        fs.write(&file_path, "hello shipdoc").expect("write file");
        let contents = fs.read_to_string(&file_path).expect("read file");
        assert_eq!(contents, "hello shipdoc");

        fs.write(&file_path, "short").expect("overwrite file");
        let contents = fs.read_to_string(&file_path).expect("read file");
        assert_eq!(contents, "short");

        std::fs::remove_dir_all(&root).expect("cleanup temp dir");
    }

    #[test]
    fn std_filesystem_reports_missing_file() {
        let fs = StdFileSystem::new();
        let missing = std::env::temp_dir()
            .join(unique_dir_name())
            .join("missing.xml");
        assert!(fs.read_to_string(&missing).is_err());
    }

    fn unique_dir_name() -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("system time")
            .as_nanos();
        PathBuf::from(format!("shipdoc_core_test_{nanos}"))
    }
}
