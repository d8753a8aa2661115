//! # Collection Descriptors
//!
//! A [`CollectionDescriptor`] binds a validated collection name to a
//! content kind and a field schema. Descriptors are built once at
//! configuration-load time by pure builder functions receiving a
//! [`SchemaContext`], the capability bundle for schema construction
//! (today: image resolution).

use std::sync::Arc;

use serde_json::{json, Value};

use strata_core::{CollectionName, ContentKind, ImageResolver, PermissiveResolver};

use crate::field::{FieldType, ObjectSchema};

/// Capabilities available while constructing and enforcing schemas.
///
/// The context is handed to descriptor builder functions so image fields
/// can be declared without the schema layer knowing how references get
/// resolved, and to validators so the same capability checks entries.
#[derive(Clone)]
pub struct SchemaContext {
    resolver: Arc<dyn ImageResolver>,
}

impl SchemaContext {
    /// Create a context with the given image-resolution capability.
    pub fn new(resolver: Arc<dyn ImageResolver>) -> Self {
        Self { resolver }
    }

    /// Context with the permissive resolver: any non-empty image
    /// reference is accepted. The right default when no asset tree is
    /// available.
    pub fn permissive() -> Self {
        Self::new(Arc::new(PermissiveResolver))
    }

    /// Declare an image field.
    pub fn image(&self) -> FieldType {
        FieldType::Image
    }

    /// The image-resolution capability.
    pub fn resolver(&self) -> Arc<dyn ImageResolver> {
        Arc::clone(&self.resolver)
    }
}

impl std::fmt::Debug for SchemaContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaContext").finish_non_exhaustive()
    }
}

/// The declarative shape contract for one content collection.
#[derive(Debug, Clone)]
pub struct CollectionDescriptor {
    name: CollectionName,
    kind: ContentKind,
    schema: ObjectSchema,
}

impl CollectionDescriptor {
    /// Bind a name and kind to a field schema.
    pub fn new(name: CollectionName, kind: ContentKind, schema: ObjectSchema) -> Self {
        Self { name, kind, schema }
    }

    /// The collection's name. Must match the content directory exactly.
    pub fn name(&self) -> &CollectionName {
        &self.name
    }

    /// What kind of documents the collection holds.
    pub fn kind(&self) -> ContentKind {
        self.kind
    }

    /// The collection's field schema.
    pub fn schema(&self) -> &ObjectSchema {
        &self.schema
    }

    /// Compile the full JSON Schema document for this collection.
    ///
    /// Wraps the field schema with the draft marker and a title so the
    /// exported document stands alone.
    pub fn to_json_schema(&self) -> Value {
        let mut document = json!({
            "$schema": "https://json-schema.org/draft/2020-12/schema",
            "title": self.name.as_str(),
            "description": format!("{} collection ({} entries)", self.name, self.kind),
        });
        if let (Value::Object(doc), Value::Object(body)) =
            (&mut document, self.schema.to_json_schema())
        {
            doc.extend(body);
        }
        document
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_core::ImageError;

    fn descriptor() -> CollectionDescriptor {
        let ctx = SchemaContext::permissive();
        CollectionDescriptor::new(
            CollectionName::parse("gallery").unwrap(),
            ContentKind::Content,
            ObjectSchema::new()
                .required("caption", FieldType::String)
                .required("shot", ctx.image()),
        )
    }

    #[test]
    fn accessors() {
        let d = descriptor();
        assert_eq!(d.name().as_str(), "gallery");
        assert_eq!(d.kind(), ContentKind::Content);
        assert_eq!(d.schema().fields().len(), 2);
    }

    #[test]
    fn json_schema_document_is_self_contained() {
        let doc = descriptor().to_json_schema();
        assert_eq!(
            doc["$schema"],
            "https://json-schema.org/draft/2020-12/schema"
        );
        assert_eq!(doc["title"], "gallery");
        assert_eq!(doc["type"], "object");
        assert_eq!(doc["properties"]["caption"]["type"], "string");
    }

    #[test]
    fn context_image_declares_image_field() {
        let ctx = SchemaContext::permissive();
        assert_eq!(ctx.image(), FieldType::Image);
    }

    #[test]
    fn context_carries_custom_resolver() {
        struct RejectAll;
        impl ImageResolver for RejectAll {
            fn resolve(&self, _reference: &str) -> Result<strata_core::ImageRef, ImageError> {
                Err(ImageError::EmptyReference)
            }
        }

        let ctx = SchemaContext::new(Arc::new(RejectAll));
        assert!(ctx.resolver().resolve("anything.png").is_err());
    }

    #[test]
    fn permissive_context_resolves_nonempty() {
        let ctx = SchemaContext::permissive();
        assert!(ctx.resolver().resolve("a.png").is_ok());
    }
}
