//! # Schema Errors
//!
//! Error types for the schema registry and entry validation.
//!
//! Two families, kept distinct because they fail at different times:
//! definition errors (duplicate collection, malformed descriptor) are
//! fatal at configuration-load time; entry errors surface per entry during
//! validation, carrying the full violation list.

use thiserror::Error;

use strata_core::CoreError;

use crate::validate::ValidationViolations;

/// Error from the schema registry or entry validation.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// A collection with this name is already registered.
    #[error("collection '{name}' is already registered")]
    DuplicateCollection {
        /// The duplicated collection name.
        name: String,
    },

    /// No collection with this name is registered.
    #[error("collection '{name}' is not registered")]
    UnknownCollection {
        /// The requested collection name.
        name: String,
    },

    /// The descriptor itself is broken (duplicate or empty field name).
    #[error("malformed schema for collection '{name}': {reason}")]
    MalformedDescriptor {
        /// The collection whose descriptor is broken.
        name: String,
        /// What is wrong with it.
        reason: String,
    },

    /// The compiled JSON Schema could not be built into a validator.
    #[error("validator build error for collection '{name}': {reason}")]
    ValidatorBuild {
        /// The collection whose schema failed to compile.
        name: String,
        /// Reason the validator could not be built.
        reason: String,
    },

    /// An entry did not conform to its collection's schema.
    #[error("entry rejected by collection '{name}':\n{violations}")]
    EntryRejected {
        /// The collection the entry was validated against.
        name: String,
        /// Structured list of individual violations.
        violations: ValidationViolations,
    },

    /// An entry file could not be loaded or parsed.
    #[error("entry load error for '{path}': {reason}")]
    EntryLoad {
        /// Path to the entry that failed to load.
        path: String,
        /// Reason it could not be loaded.
        reason: String,
    },

    /// A core type rejected its input.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// IO error reading an entry.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
