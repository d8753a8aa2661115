//! # Collection Naming
//!
//! Defines `CollectionName`, the validated identifier for a content
//! collection, and `ContentKind`, the tag describing what a collection
//! holds.
//!
//! ## Invariant
//!
//! A collection name doubles as the on-disk directory name the content
//! pipeline associates entries with. A name that cannot appear as a
//! directory (or that differs from the directory even by case) would
//! silently orphan every entry in it, so names are restricted to lowercase
//! ASCII alphanumerics plus `-` and `_`, and must start with an
//! alphanumeric.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The validated name of a content collection.
///
/// # Construction
///
/// - [`CollectionName::parse()`] — from a string, rejecting anything that
///   could not name a content directory.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CollectionName(String);

impl CollectionName {
    /// Parse and validate a collection name.
    ///
    /// Accepts non-empty lowercase ASCII alphanumerics plus `-` and `_`,
    /// starting with an alphanumeric.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidCollectionName` naming the input and the
    /// first rule it broke.
    pub fn parse(name: &str) -> Result<Self, CoreError> {
        if name.is_empty() {
            return Err(CoreError::InvalidCollectionName {
                name: name.to_string(),
                reason: "name is empty".to_string(),
            });
        }

        let first = name.chars().next().unwrap_or('_');
        if !first.is_ascii_lowercase() && !first.is_ascii_digit() {
            return Err(CoreError::InvalidCollectionName {
                name: name.to_string(),
                reason: format!("must start with a lowercase letter or digit, got {first:?}"),
            });
        }

        for c in name.chars() {
            if !c.is_ascii_lowercase() && !c.is_ascii_digit() && c != '-' && c != '_' {
                return Err(CoreError::InvalidCollectionName {
                    name: name.to_string(),
                    reason: format!("contains unsupported character {c:?}"),
                });
            }
        }

        Ok(Self(name.to_string()))
    }

    /// Access the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CollectionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// What kind of documents a collection holds.
///
/// Today every collection holds structured content entries (frontmatter
/// plus a body); the tag exists so the compiled descriptor can carry it to
/// the consuming pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// Structured content entries: frontmatter validated against the
    /// collection schema, body left to the rendering pipeline.
    Content,
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentKind::Content => f.write_str("content"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_name() {
        let name = CollectionName::parse("posts").unwrap();
        assert_eq!(name.as_str(), "posts");
    }

    #[test]
    fn parse_name_with_separators() {
        assert!(CollectionName::parse("blog-posts").is_ok());
        assert!(CollectionName::parse("case_studies").is_ok());
        assert!(CollectionName::parse("2024-notes").is_ok());
    }

    #[test]
    fn parse_empty_rejected() {
        let err = CollectionName::parse("").unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn parse_uppercase_rejected() {
        assert!(CollectionName::parse("Posts").is_err());
        assert!(CollectionName::parse("postsX").is_err());
    }

    #[test]
    fn parse_leading_separator_rejected() {
        let err = CollectionName::parse("-posts").unwrap_err();
        assert!(err.to_string().contains("must start"));
        assert!(CollectionName::parse("_posts").is_err());
    }

    #[test]
    fn parse_path_characters_rejected() {
        assert!(CollectionName::parse("posts/2024").is_err());
        assert!(CollectionName::parse("posts.bak").is_err());
        assert!(CollectionName::parse("po sts").is_err());
    }

    #[test]
    fn error_names_the_input() {
        let err = CollectionName::parse("Posts").unwrap_err();
        assert!(err.to_string().contains("Posts"));
    }

    #[test]
    fn display_matches_inner() {
        let name = CollectionName::parse("projects").unwrap();
        assert_eq!(format!("{name}"), "projects");
    }

    #[test]
    fn ordering_is_lexicographic() {
        let a = CollectionName::parse("posts").unwrap();
        let b = CollectionName::parse("projects").unwrap();
        assert!(a < b);
    }

    #[test]
    fn serde_roundtrip() {
        let name = CollectionName::parse("posts").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"posts\"");
        let parsed: CollectionName = serde_json::from_str(&json).unwrap();
        assert_eq!(name, parsed);
    }

    #[test]
    fn content_kind_display() {
        assert_eq!(ContentKind::Content.to_string(), "content");
    }

    #[test]
    fn content_kind_serde() {
        let json = serde_json::to_string(&ContentKind::Content).unwrap();
        assert_eq!(json, "\"content\"");
    }
}
