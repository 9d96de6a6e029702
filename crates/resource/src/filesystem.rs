//! Reads assets (the quote logo) from a resource directory.
//!
//! Paths are always relative to the directory. Absolute paths and paths that
//! climb out of it with `..` are treated as missing.

use cotizador_traits::{ResourceError, ResourceProvider, SharedResourceData};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

#[derive(Debug)]
pub struct FilesystemResourceProvider {
    root: PathBuf,
    root_display: String,
}

impl FilesystemResourceProvider {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        let root = root.as_ref().to_path_buf();
        let root_display = root.display().to_string();
        Self { root, root_display }
    }

    /// Uses the directory holding the running executable as the resource
    /// directory, falling back to the working directory.
    pub fn beside_executable() -> Self {
        let dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."));
        log::debug!("Resolving assets relative to {}", dir.display());
        Self::new(dir)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> Option<PathBuf> {
        let relative = Path::new(path);
        let stays_inside = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        if !stays_inside {
            log::warn!("Refusing asset path outside resource directory: {}", path);
            return None;
        }

        let candidate = self.root.join(relative);
        // Symlinks may still point elsewhere; compare canonical forms when both exist.
        if let (Ok(root), Ok(resolved)) = (self.root.canonicalize(), candidate.canonicalize())
            && !resolved.starts_with(&root)
        {
            log::warn!("Asset '{}' resolves outside {}", path, root.display());
            return None;
        }
        Some(candidate)
    }
}

impl ResourceProvider for FilesystemResourceProvider {
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError> {
        let full_path = self
            .resolve(path)
            .ok_or_else(|| ResourceError::NotFound(format!("{} (outside resource directory)", path)))?;

        match std::fs::read(&full_path) {
            Ok(bytes) => {
                log::debug!("Loaded {} bytes from {}", bytes.len(), full_path.display());
                Ok(Arc::new(bytes))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(ResourceError::NotFound(path.to_string()))
            }
            Err(e) => Err(ResourceError::LoadFailed {
                path: path.to_string(),
                message: e.to_string(),
            }),
        }
    }

    fn exists(&self, path: &str) -> bool {
        self.resolve(path).is_some_and(|p| p.is_file())
    }

    fn base_path(&self) -> Option<&str> {
        Some(&self.root_display)
    }

    fn name(&self) -> &'static str {
        "FilesystemResourceProvider"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_loads_logo_from_resource_dir() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("logo.png"), b"png-bytes").unwrap();

        let provider = FilesystemResourceProvider::new(dir.path());
        assert!(provider.exists("logo.png"));
        assert_eq!(&*provider.load("logo.png").unwrap(), b"png-bytes");
    }

    #[test]
    fn test_missing_logo_is_not_found() {
        let dir = tempdir().unwrap();
        let provider = FilesystemResourceProvider::new(dir.path());

        assert!(!provider.exists("logo.png"));
        assert!(matches!(
            provider.load("logo.png"),
            Err(ResourceError::NotFound(_))
        ));
    }

    #[test]
    fn test_directory_is_not_an_asset() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("logo.png")).unwrap();

        let provider = FilesystemResourceProvider::new(dir.path());
        assert!(!provider.exists("logo.png"));
    }

    #[test]
    fn test_nested_paths_are_allowed() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("img")).unwrap();
        fs::write(dir.path().join("img").join("logo.jpg"), b"jpeg").unwrap();

        let provider = FilesystemResourceProvider::new(dir.path());
        assert!(provider.exists("img/logo.jpg"));
        assert!(provider.exists("./img/logo.jpg"));
    }

    #[test]
    fn test_blocks_escaping_paths() {
        let dir = tempdir().unwrap();
        let provider = FilesystemResourceProvider::new(dir.path());

        assert!(!provider.exists("../logo.png"));
        assert!(!provider.exists("img/../../logo.png"));
        assert!(!provider.exists("/etc/passwd"));
        assert!(provider.load("/etc/passwd").is_err());
    }

    #[test]
    fn test_base_path_reports_root() {
        let dir = tempdir().unwrap();
        let provider = FilesystemResourceProvider::new(dir.path());
        assert_eq!(provider.root(), dir.path());
        assert!(provider.base_path().is_some());
    }
}
