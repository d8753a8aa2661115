//! # Collection Registry
//!
//! The static mapping from collection name to descriptor. Built once at
//! configuration-load time, read-only afterwards.
//!
//! Registration is where broken configurations die: a duplicate collection
//! name or a malformed descriptor is rejected immediately with an error
//! naming the offending key, instead of surfacing later as entries
//! validated against the wrong shape.

use std::collections::BTreeMap;

use strata_core::CollectionName;

use crate::descriptor::CollectionDescriptor;
use crate::error::SchemaError;

/// Registry of collection descriptors, keyed by name.
///
/// Iteration order is name order, so enumeration is deterministic
/// run-to-run.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    collections: BTreeMap<CollectionName, CollectionDescriptor>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a collection descriptor.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::DuplicateCollection` if a descriptor with the
    /// same name is already registered, or
    /// `SchemaError::MalformedDescriptor` if the descriptor's shape fails
    /// its definition check.
    pub fn register(&mut self, descriptor: CollectionDescriptor) -> Result<(), SchemaError> {
        descriptor
            .schema()
            .check()
            .map_err(|reason| SchemaError::MalformedDescriptor {
                name: descriptor.name().to_string(),
                reason,
            })?;

        if self.collections.contains_key(descriptor.name()) {
            return Err(SchemaError::DuplicateCollection {
                name: descriptor.name().to_string(),
            });
        }

        self.collections
            .insert(descriptor.name().clone(), descriptor);
        Ok(())
    }

    /// Look up a collection descriptor by name.
    pub fn get(&self, name: &str) -> Option<&CollectionDescriptor> {
        // BTreeMap<CollectionName, _> cannot be indexed by &str directly;
        // names are short, so a scan is fine at this scale.
        self.collections
            .iter()
            .find(|(key, _)| key.as_str() == name)
            .map(|(_, descriptor)| descriptor)
    }

    /// Names of all registered collections, in name order.
    pub fn names(&self) -> Vec<&str> {
        self.collections.keys().map(|k| k.as_str()).collect()
    }

    /// Iterate descriptors in name order.
    pub fn iter(&self) -> impl Iterator<Item = &CollectionDescriptor> {
        self.collections.values()
    }

    /// Number of registered collections.
    pub fn len(&self) -> usize {
        self.collections.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }
}
