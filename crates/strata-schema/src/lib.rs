//! # strata-schema — Collection Schema Registry
//!
//! Declarative schemas for content collections, and the machinery to
//! enforce them. A collection is a named group of content entries sharing
//! one shape; this crate holds the shape descriptors, compiles each to a
//! JSON Schema document, and validates entry frontmatter against it.
//!
//! ## Registry (`registry`, `builtin`)
//!
//! The [`Registry`] maps collection names to descriptors. It is built once
//! at configuration-load time and never mutated afterwards. Duplicate
//! names and malformed descriptors are rejected at registration, with an
//! error naming the offending key. [`builtin::collections`] constructs the
//! registry the site ships with: `posts` and `projects`.
//!
//! ## Validation (`validate`)
//!
//! [`EntryValidator`] checks one collection's entries in two passes:
//! a structural pass through the `jsonschema` crate (every violation
//! collected, not just the first) and a semantic pass that parses date
//! fields and resolves image references through the configured
//! [`ImageResolver`](strata_core::ImageResolver) capability. Violations
//! carry the instance path, the schema path, and a message naming the
//! expected shape and the actual value.
//!
//! ## Crate Policy
//!
//! - Depends only on `strata-core` internally.
//! - Validation collects every violation for an entry; one bad entry never
//!   aborts validation of its neighbors.

pub mod builtin;
pub mod descriptor;
pub mod error;
pub mod field;
pub mod registry;
pub mod validate;

pub use builtin::collections;
pub use descriptor::{CollectionDescriptor, SchemaContext};
pub use error::SchemaError;
pub use field::{FieldSpec, FieldType, ObjectSchema};
pub use registry::Registry;
pub use validate::{EntryFailure, EntryValidator, ValidationReport, ValidationViolations, Violation};
