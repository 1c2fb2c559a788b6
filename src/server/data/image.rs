use std::path::{Component, Path, PathBuf};

use crate::server::error::{catalog::CatalogError, Error};

/// Filesystem directory holding catalog entry images.
#[derive(Debug, Clone)]
pub struct ImageStore {
    root: PathBuf,
}

impl ImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolves a stored image path against the store root
    ///
    /// Only plain relative paths are accepted. Absolute paths and paths containing
    /// `..` would escape the store and return [`CatalogError::InvalidImagePath`].
    pub fn resolve(&self, image_path: &str) -> Result<PathBuf, Error> {
        let path = Path::new(image_path);

        let is_plain = !image_path.is_empty()
            && path
                .components()
                .all(|component| matches!(component, Component::Normal(_) | Component::CurDir));

        if !is_plain {
            return Err(CatalogError::InvalidImagePath(image_path.to_string()).into());
        }

        Ok(self.root.join(path))
    }

    /// Removes an image from the store
    ///
    /// # Returns
    /// - `Ok(true)`: The image was removed
    /// - `Ok(false)`: No image exists at that path
    /// - `Err(Error)`: The path is invalid or the file could not be removed
    pub async fn remove(&self, image_path: &str) -> Result<bool, Error> {
        let path = self.resolve(image_path)?;

        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err.into()),
        }
    }
}
