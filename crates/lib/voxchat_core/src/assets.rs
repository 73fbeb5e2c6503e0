//! Static asset resolution for the bundled frontend.
//!
//! Request paths are checked lexically first (any `..`, absolute path,
//! backslash or NUL is refused), then resolved against each root in order.
//! A hit must canonicalise to a location inside its root, which also rules
//! out symlinks pointing elsewhere.

use std::path::{Component, Path, PathBuf};

use thiserror::Error;

/// File served for `/` and for directory requests.
pub const INDEX_FILE: &str = "index.html";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssetError {
    #[error("Access denied: {0}")]
    Forbidden(String),

    #[error("File not found: {0}")]
    NotFound(String),
}

/// Ordered set of directories assets are served from. Earlier roots shadow
/// later ones.
#[derive(Debug, Clone)]
pub struct AssetRoots {
    roots: Vec<PathBuf>,
}

impl AssetRoots {
    pub fn new(roots: impl IntoIterator<Item = PathBuf>) -> Self {
        Self {
            roots: roots.into_iter().collect(),
        }
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Map a request path (without leading `/`) to a file on disk.
    pub async fn resolve(&self, request_path: &str) -> Result<PathBuf, AssetError> {
        if is_traversal(request_path) {
            return Err(AssetError::Forbidden(request_path.to_string()));
        }

        let relative = if request_path.is_empty() {
            Path::new(INDEX_FILE)
        } else {
            Path::new(request_path)
        };

        for root in &self.roots {
            if let Some(found) = find_in_root(root, relative).await {
                return Ok(found);
            }
        }

        Err(AssetError::NotFound(request_path.to_string()))
    }
}

/// Content type for a resolved file.
pub fn content_type(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

fn is_traversal(request_path: &str) -> bool {
    request_path.contains("..")
        || request_path.contains('\\')
        || request_path.contains('\0')
        || request_path.starts_with('/')
        || Path::new(request_path)
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
}

async fn find_in_root(root: &Path, relative: &Path) -> Option<PathBuf> {
    let root = tokio::fs::canonicalize(root).await.ok()?;
    let mut candidate = tokio::fs::canonicalize(root.join(relative)).await.ok()?;
    if !candidate.starts_with(&root) {
        return None;
    }

    let mut meta = tokio::fs::metadata(&candidate).await.ok()?;
    if meta.is_dir() {
        candidate.push(INDEX_FILE);
        meta = tokio::fs::metadata(&candidate).await.ok()?;
    }

    meta.is_file().then_some(candidate)
}
