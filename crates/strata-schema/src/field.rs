//! # Field Model
//!
//! The declarative shape language for collection schemas: field types,
//! per-field required/optional flags, and nested object shapes.
//!
//! Shapes are plain data. [`ObjectSchema::to_json_schema`] compiles a
//! shape to a self-contained JSON Schema (Draft 2020-12) document, which
//! is what actually runs against entries; [`ObjectSchema::check`] rejects
//! malformed shapes (duplicate or empty field names) before a registry
//! will accept them.

use serde_json::{json, Map, Value};

/// The type of a single frontmatter field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    /// A plain string.
    String,
    /// A publication date: `YYYY-MM-DD` or an RFC 3339 datetime.
    /// Structurally a string; calendar validity is checked semantically so
    /// the violation can name the offending value.
    Date,
    /// A reference to an image asset, checked through the configured
    /// image-resolution capability.
    Image,
    /// An ordered sequence with a uniform element type.
    List(Box<FieldType>),
    /// A nested object with its own field schema.
    Object(ObjectSchema),
}

impl FieldType {
    /// Compile this type to its JSON Schema fragment.
    pub fn to_json_schema(&self) -> Value {
        match self {
            FieldType::String => json!({"type": "string"}),
            FieldType::Date => json!({"type": "string", "format": "date"}),
            FieldType::Image => json!({"type": "string", "minLength": 1}),
            FieldType::List(element) => json!({
                "type": "array",
                "items": element.to_json_schema(),
            }),
            FieldType::Object(schema) => schema.to_json_schema(),
        }
    }

    /// Human-readable name for error messages.
    pub fn name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Date => "date",
            FieldType::Image => "image",
            FieldType::List(_) => "list",
            FieldType::Object(_) => "object",
        }
    }
}

/// One named field in an object shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// The frontmatter key.
    pub name: String,
    /// The field's type.
    pub ty: FieldType,
    /// Whether an entry must carry the field.
    pub required: bool,
}

/// The shape of an object: an ordered list of field specs.
///
/// Field order is declaration order. Unknown keys in an entry are
/// permitted; the consuming pipeline strips them rather than rejecting
/// the entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ObjectSchema {
    fields: Vec<FieldSpec>,
}

impl ObjectSchema {
    /// Create an empty object shape.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a required field.
    pub fn required(mut self, name: &str, ty: FieldType) -> Self {
        self.fields.push(FieldSpec {
            name: name.to_string(),
            ty,
            required: true,
        });
        self
    }

    /// Add an optional field.
    pub fn optional(mut self, name: &str, ty: FieldType) -> Self {
        self.fields.push(FieldSpec {
            name: name.to_string(),
            ty,
            required: false,
        });
        self
    }

    /// The fields of this shape, in declaration order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Check the shape definition itself.
    ///
    /// Rejects empty field names and duplicate field names, recursing into
    /// nested objects and list elements. The returned reason names the
    /// offending key and where it sits.
    ///
    /// # Errors
    ///
    /// Returns a human-readable reason string; callers wrap it into
    /// `SchemaError::MalformedDescriptor` with the collection name.
    pub fn check(&self) -> Result<(), String> {
        self.check_at("")
    }

    fn check_at(&self, path: &str) -> Result<(), String> {
        let mut seen: Vec<&str> = Vec::new();
        for field in &self.fields {
            let here = format!("{path}/{}", field.name);
            if field.name.is_empty() {
                return Err(format!("empty field name at '{path}/'"));
            }
            if seen.contains(&field.name.as_str()) {
                return Err(format!("duplicate field '{}' at '{here}'", field.name));
            }
            seen.push(&field.name);
            check_type_at(&field.ty, &here)?;
        }
        Ok(())
    }

    /// Compile this shape to a JSON Schema object fragment.
    ///
    /// The `required` array preserves declaration order. Properties land
    /// in serde_json's map ordering; both are deterministic run-to-run.
    pub fn to_json_schema(&self) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();

        for field in &self.fields {
            properties.insert(field.name.clone(), field.ty.to_json_schema());
            if field.required {
                required.push(Value::String(field.name.clone()));
            }
        }

        let mut schema = Map::new();
        schema.insert("type".to_string(), Value::String("object".to_string()));
        schema.insert("properties".to_string(), Value::Object(properties));
        if !required.is_empty() {
            schema.insert("required".to_string(), Value::Array(required));
        }
        Value::Object(schema)
    }
}

fn check_type_at(ty: &FieldType, path: &str) -> Result<(), String> {
    match ty {
        FieldType::Object(schema) => schema.check_at(path),
        FieldType::List(element) => check_type_at(element, path),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cover_shape() -> ObjectSchema {
        ObjectSchema::new()
            .required("image", FieldType::Image)
            .required("alt", FieldType::String)
    }

    // ---- compilation ----

    #[test]
    fn string_field_compiles() {
        assert_eq!(FieldType::String.to_json_schema(), json!({"type": "string"}));
    }

    #[test]
    fn date_field_compiles_as_annotated_string() {
        let schema = FieldType::Date.to_json_schema();
        assert_eq!(schema["type"], "string");
        assert_eq!(schema["format"], "date");
    }

    #[test]
    fn image_field_compiles_as_nonempty_string() {
        let schema = FieldType::Image.to_json_schema();
        assert_eq!(schema["type"], "string");
        assert_eq!(schema["minLength"], 1);
    }

    #[test]
    fn list_field_compiles_with_items() {
        let schema = FieldType::List(Box::new(FieldType::String)).to_json_schema();
        assert_eq!(schema["type"], "array");
        assert_eq!(schema["items"]["type"], "string");
    }

    #[test]
    fn object_schema_compiles_required_in_declaration_order() {
        let schema = ObjectSchema::new()
            .required("title", FieldType::String)
            .optional("cover", FieldType::Object(cover_shape()))
            .required("tags", FieldType::List(Box::new(FieldType::String)))
            .to_json_schema();

        assert_eq!(schema["type"], "object");
        assert_eq!(schema["required"], json!(["title", "tags"]));
        assert_eq!(schema["properties"]["cover"]["required"], json!(["image", "alt"]));
    }

    #[test]
    fn all_optional_omits_required_array() {
        let schema = ObjectSchema::new()
            .optional("link", FieldType::String)
            .to_json_schema();
        assert!(schema.get("required").is_none());
    }

    #[test]
    fn no_additional_properties_restriction() {
        // Unknown frontmatter keys are stripped downstream, not rejected.
        let schema = ObjectSchema::new()
            .required("title", FieldType::String)
            .to_json_schema();
        assert!(schema.get("additionalProperties").is_none());
    }

    // ---- definition checks ----

    #[test]
    fn check_accepts_well_formed_shape() {
        let schema = ObjectSchema::new()
            .required("title", FieldType::String)
            .optional("cover", FieldType::Object(cover_shape()));
        assert!(schema.check().is_ok());
    }

    #[test]
    fn check_rejects_duplicate_field() {
        let schema = ObjectSchema::new()
            .required("title", FieldType::String)
            .optional("title", FieldType::String);
        let reason = schema.check().unwrap_err();
        assert!(reason.contains("duplicate field 'title'"));
    }

    #[test]
    fn check_rejects_duplicate_in_nested_object() {
        let nested = ObjectSchema::new()
            .required("alt", FieldType::String)
            .required("alt", FieldType::String);
        let schema = ObjectSchema::new().optional("cover", FieldType::Object(nested));
        let reason = schema.check().unwrap_err();
        assert!(reason.contains("/cover/alt"), "reason was: {reason}");
    }

    #[test]
    fn check_rejects_duplicate_inside_list_element() {
        let element = ObjectSchema::new()
            .required("x", FieldType::String)
            .required("x", FieldType::String);
        let schema = ObjectSchema::new()
            .required("items", FieldType::List(Box::new(FieldType::Object(element))));
        assert!(schema.check().is_err());
    }

    #[test]
    fn check_rejects_empty_field_name() {
        let schema = ObjectSchema::new().required("", FieldType::String);
        let reason = schema.check().unwrap_err();
        assert!(reason.contains("empty field name"));
    }

    #[test]
    fn field_type_names() {
        assert_eq!(FieldType::String.name(), "string");
        assert_eq!(FieldType::Date.name(), "date");
        assert_eq!(FieldType::Image.name(), "image");
        assert_eq!(FieldType::List(Box::new(FieldType::String)).name(), "list");
        assert_eq!(FieldType::Object(ObjectSchema::new()).name(), "object");
    }
}
