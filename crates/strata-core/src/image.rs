//! # Image References and Resolution
//!
//! Content entries reference images by path-like strings in frontmatter
//! (`./images/cover.png`). The framework that consumes the registry owns
//! optimization and transformation of those assets; this crate only models
//! the reference itself and the capability used to check it.
//!
//! `ImageResolver` is the capability handed to schema construction. Two
//! implementations ship:
//!
//! - [`PermissiveResolver`] — accepts any non-empty reference. The default
//!   when no asset tree is available (pure schema checks, CI without
//!   assets checked out).
//! - [`FsResolver`] — requires a recognized image extension and an
//!   existing file under an asset root.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// File extensions accepted as image assets.
pub const IMAGE_EXTENSIONS: &[&str] = &["avif", "gif", "jpeg", "jpg", "png", "svg", "webp"];

/// An opaque, resolved handle to an image asset.
///
/// Produced only by an [`ImageResolver`]; holding one means the reference
/// passed whatever policy the resolver enforces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef(String);

impl ImageRef {
    /// Access the original reference string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ImageRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Error resolving an image reference.
#[derive(Error, Debug)]
pub enum ImageError {
    /// The reference string is empty.
    #[error("image reference is empty")]
    EmptyReference,

    /// The reference does not end in a recognized image extension.
    #[error("{reference:?} does not have a recognized image extension")]
    UnsupportedExtension {
        /// The offending reference.
        reference: String,
    },

    /// No file exists at the referenced location under the asset root.
    #[error("image asset {reference:?} not found under {root}")]
    NotFound {
        /// The offending reference.
        reference: String,
        /// The asset root that was searched.
        root: String,
    },
}

/// Capability for resolving embedded image references.
///
/// Injected into schema construction so that validating an entry can check
/// image fields without the schema layer knowing where assets live.
pub trait ImageResolver: Send + Sync {
    /// Resolve a reference string to an image handle.
    ///
    /// # Errors
    ///
    /// Returns `ImageError` describing why the reference was rejected.
    fn resolve(&self, reference: &str) -> Result<ImageRef, ImageError>;
}

/// Resolver that accepts any non-empty reference.
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissiveResolver;

impl ImageResolver for PermissiveResolver {
    fn resolve(&self, reference: &str) -> Result<ImageRef, ImageError> {
        if reference.is_empty() {
            return Err(ImageError::EmptyReference);
        }
        Ok(ImageRef(reference.to_string()))
    }
}

/// Resolver that checks references against an asset directory on disk.
#[derive(Debug, Clone)]
pub struct FsResolver {
    root: PathBuf,
}

impl FsResolver {
    /// Create a resolver rooted at the given asset directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The asset root this resolver searches.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ImageResolver for FsResolver {
    fn resolve(&self, reference: &str) -> Result<ImageRef, ImageError> {
        if reference.is_empty() {
            return Err(ImageError::EmptyReference);
        }

        let has_image_extension = Path::new(reference)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| IMAGE_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
            .unwrap_or(false);
        if !has_image_extension {
            return Err(ImageError::UnsupportedExtension {
                reference: reference.to_string(),
            });
        }

        // References are written relative to the asset root; tolerate the
        // common `./` and `/` prefixes authors use.
        let relative = reference
            .trim_start_matches("./")
            .trim_start_matches('/');
        if !self.root.join(relative).is_file() {
            return Err(ImageError::NotFound {
                reference: reference.to_string(),
                root: self.root.display().to_string(),
            });
        }

        Ok(ImageRef(reference.to_string()))
    }
}
