//! # Built-in Collections
//!
//! The collection declarations this site ships with. This module is the
//! configuration surface: adding a collection means adding a builder
//! function here and registering it in [`collections`].
//!
//! Builders are pure functions from a [`SchemaContext`] to a descriptor,
//! evaluated once at configuration-load time.

use strata_core::{CollectionName, ContentKind};

use crate::descriptor::{CollectionDescriptor, SchemaContext};
use crate::error::SchemaError;
use crate::field::{FieldType, ObjectSchema};
use crate::registry::Registry;

/// Blog posts: title, publication date, description, optional cover image
/// with alt text, and a tag list (empty is fine).
pub fn posts(ctx: &SchemaContext) -> Result<CollectionDescriptor, SchemaError> {
    let schema = ObjectSchema::new()
        .required("title", FieldType::String)
        .required("pubDate", FieldType::Date)
        .required("description", FieldType::String)
        .optional(
            "cover",
            FieldType::Object(
                ObjectSchema::new()
                    .required("image", ctx.image())
                    .required("alt", FieldType::String),
            ),
        )
        .required("tags", FieldType::List(Box::new(FieldType::String)));

    Ok(CollectionDescriptor::new(
        CollectionName::parse("posts")?,
        ContentKind::Content,
        schema,
    ))
}

/// Project entries: name, description, a mandatory thumbnail with alt
/// text, and an optional external link.
pub fn projects(ctx: &SchemaContext) -> Result<CollectionDescriptor, SchemaError> {
    let schema = ObjectSchema::new()
        .required("name", FieldType::String)
        .required("description", FieldType::String)
        .required(
            "thumbnail",
            FieldType::Object(
                ObjectSchema::new()
                    .required("image", ctx.image())
                    .required("alt", FieldType::String),
            ),
        )
        .optional("link", FieldType::String);

    Ok(CollectionDescriptor::new(
        CollectionName::parse("projects")?,
        ContentKind::Content,
        schema,
    ))
}

/// Build the registry of all built-in collections.
///
/// # Errors
///
/// Returns `SchemaError` if any declaration is malformed; a broken
/// configuration must fail here, at load time, not during validation.
pub fn collections(ctx: &SchemaContext) -> Result<Registry, SchemaError> {
    let mut registry = Registry::new();
    registry.register(posts(ctx)?)?;
    registry.register(projects(ctx)?)?;
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_has_both_collections() {
        let registry = collections(&SchemaContext::permissive()).unwrap();
        assert_eq!(registry.names(), vec!["posts", "projects"]);
    }

    #[test]
    fn posts_shape() {
        let descriptor = posts(&SchemaContext::permissive()).unwrap();
        assert_eq!(descriptor.name().as_str(), "posts");
        assert_eq!(descriptor.kind(), ContentKind::Content);

        let fields = descriptor.schema().fields();
        let required: Vec<&str> = fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(required, vec!["title", "pubDate", "description", "tags"]);

        let cover = fields.iter().find(|f| f.name == "cover").unwrap();
        assert!(!cover.required);
        assert!(matches!(cover.ty, FieldType::Object(_)));
    }

    #[test]
    fn projects_shape() {
        let descriptor = projects(&SchemaContext::permissive()).unwrap();
        let fields = descriptor.schema().fields();

        let thumbnail = fields.iter().find(|f| f.name == "thumbnail").unwrap();
        assert!(thumbnail.required, "thumbnail must be mandatory");

        let link = fields.iter().find(|f| f.name == "link").unwrap();
        assert!(!link.required);
        assert_eq!(link.ty, FieldType::String);
    }

    #[test]
    fn posts_tags_is_a_string_list() {
        let descriptor = posts(&SchemaContext::permissive()).unwrap();
        let tags = descriptor
            .schema()
            .fields()
            .iter()
            .find(|f| f.name == "tags")
            .unwrap();
        assert_eq!(tags.ty, FieldType::List(Box::new(FieldType::String)));
    }

    #[test]
    fn compiled_posts_schema_marks_cover_optional() {
        let descriptor = posts(&SchemaContext::permissive()).unwrap();
        let doc = descriptor.to_json_schema();
        let required: Vec<&str> = doc["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        assert!(!required.contains(&"cover"));
        assert!(required.contains(&"tags"));
    }

    #[test]
    fn construction_is_deterministic() {
        let ctx = SchemaContext::permissive();
        let a = collections(&ctx).unwrap();
        let b = collections(&ctx).unwrap();
        for name in a.names() {
            let left = a.get(name).unwrap().to_json_schema();
            let right = b.get(name).unwrap().to_json_schema();
            assert_eq!(left, right, "schemas for '{name}' diverged");
        }
    }
}
