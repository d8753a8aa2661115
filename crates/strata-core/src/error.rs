//! # Error Types — Core Error Hierarchy
//!
//! Errors produced by the foundational types. All errors use `thiserror`
//! for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Name validation errors carry the rejected input and the reason.
//! - Date errors distinguish "not a string we understand" from
//!   "not a real calendar date".
//! - Image and frontmatter errors are defined next to their modules and
//!   aggregated here via `#[from]`.

use thiserror::Error;

use crate::frontmatter::FrontmatterError;
use crate::image::ImageError;

/// Top-level error type for the core crate.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A collection name failed validation.
    #[error("invalid collection name {name:?}: {reason}")]
    InvalidCollectionName {
        /// The rejected name.
        name: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A publication date failed to parse.
    #[error("invalid publication date {input:?}: {reason}")]
    InvalidDate {
        /// The rejected input.
        input: String,
        /// Why it was rejected.
        reason: String,
    },

    /// An image reference failed to resolve.
    #[error("image error: {0}")]
    Image(#[from] ImageError),

    /// A frontmatter block failed to split or parse.
    #[error("frontmatter error: {0}")]
    Frontmatter(#[from] FrontmatterError),
}
