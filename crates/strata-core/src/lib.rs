//! # strata-core — Foundational Types for the Strata Content Toolchain
//!
//! This crate is the bedrock of strata. It defines the primitives that the
//! schema registry and the CLI build on. Every other crate in the workspace
//! depends on `strata-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `CollectionName`,
//!    `PubDate`, `ImageRef` are all newtypes with validated constructors.
//!    No bare strings for names that must match a directory on disk.
//!
//! 2. **Capabilities as traits.** Image resolution is a capability
//!    (`ImageResolver`) injected into schema construction, not a hardwired
//!    filesystem dependency. The permissive resolver keeps pure-schema use
//!    possible; the filesystem resolver checks real assets.
//!
//! 3. **Rejection at construction.** Invalid collection names and
//!    non-calendar dates are rejected when the value is built, with an
//!    error naming the offending input.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `strata-*` crates (this is the leaf).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug` and `Clone`.

pub mod collection;
pub mod error;
pub mod frontmatter;
pub mod image;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use collection::{CollectionName, ContentKind};
pub use error::CoreError;
pub use image::{FsResolver, ImageError, ImageRef, ImageResolver, PermissiveResolver};
pub use temporal::PubDate;
