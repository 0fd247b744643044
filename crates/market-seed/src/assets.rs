//! Image asset directory discovery.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::catalog::Category;
use crate::errors::SeedError;
use crate::generators::ImagePools;

/// A directory of pre-rendered images whose file names start with the
/// category they depict (e.g. `books_03.jpg`).
#[derive(Debug, Clone)]
pub struct ImageDirectory {
    root: PathBuf,
    url_prefix: String,
}

impl ImageDirectory {
    pub fn new(root: impl Into<PathBuf>, url_prefix: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            url_prefix: url_prefix.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Lists regular files in the directory, following symlinks, and groups
    /// them into pools. Dangling links are skipped.
    pub fn scan(&self) -> Result<ImagePools, SeedError> {
        let mut names = Vec::new();

        for entry in std::fs::read_dir(&self.root)? {
            let entry = entry?;
            let path = entry.path();
            match std::fs::metadata(&path) {
                Ok(meta) if meta.is_file() => {}
                Ok(_) => continue,
                Err(err) => {
                    warn!("Skipping unreadable entry {}: {}", path.display(), err);
                    continue;
                }
            }
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(name) => warn!("Skipping non UTF-8 file name {:?}", name),
            }
        }

        let pools = ImagePools::from_file_names(&names, &self.url_prefix);

        for category in Category::ALL {
            let count = pools.pool(category).len();
            if count == 0 {
                warn!(category = category.as_str(), "No images found for category");
            }
        }
        info!(
            "Found {} images in {} ({} files scanned)",
            pools.len(),
            self.root.display(),
            names.len()
        );

        Ok(pools)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_directory() {
        let dir = std::env::temp_dir().join(format!("market-seed-assets-{}", std::process::id()));
        std::fs::create_dir_all(dir.join("books_nested")).unwrap();
        for name in ["books_2.jpg", "books_1.jpg", "sports_1.png", "notes.txt"] {
            std::fs::write(dir.join(name), b"img").unwrap();
        }

        let pools = ImageDirectory::new(&dir, "/demo-assets/real").scan().unwrap();

        assert_eq!(
            pools.pool(Category::Books),
            &[
                "/demo-assets/real/books_1.jpg".to_string(),
                "/demo-assets/real/books_2.jpg".to_string(),
            ]
        );
        assert_eq!(pools.pool(Category::Sports).len(), 1);
        assert_eq!(pools.len(), 3);

        std::fs::remove_dir_all(dir).ok();
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_follows_symlinks() {
        let dir = std::env::temp_dir().join(format!("market-seed-links-{}", std::process::id()));
        let shared = dir.join("shared");
        std::fs::create_dir_all(&shared).unwrap();
        std::fs::write(shared.join("chair.jpg"), b"img").unwrap();
        std::os::unix::fs::symlink(shared.join("chair.jpg"), dir.join("furniture_1.jpg")).unwrap();
        std::os::unix::fs::symlink(shared.join("gone.jpg"), dir.join("furniture_2.jpg")).unwrap();

        let pools = ImageDirectory::new(&dir, "/demo-assets/real").scan().unwrap();

        assert_eq!(
            pools.pool(Category::Furniture),
            &["/demo-assets/real/furniture_1.jpg".to_string()]
        );

        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_missing_directory_is_io_error() {
        let dir = std::env::temp_dir().join("market-seed-assets-does-not-exist");
        let result = ImageDirectory::new(dir, "/x").scan();
        assert!(matches!(result, Err(SeedError::Io(_))));
    }
}
