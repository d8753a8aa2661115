//! # Entry Validation
//!
//! Validates content entries against their collection's compiled schema.
//!
//! Validation runs in two passes and reports everything it finds:
//!
//! 1. **Structural** — the descriptor compiles to a JSON Schema
//!    (Draft 2020-12) document and the entry runs through the `jsonschema`
//!    crate. Every violation is collected, not just the first.
//! 2. **Semantic** — date fields must name a real calendar date and image
//!    fields must resolve through the configured capability. These checks
//!    need to read the value, which is why they are not encoded in the
//!    structural schema.
//!
//! A rejected entry carries the full violation list, each violation with
//! the instance path, the schema path, and a message naming the expected
//! shape and the actual value. One entry's failure never aborts
//! validation of its neighbors.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use jsonschema::Validator;
use serde::Serialize;
use serde_json::Value;

use strata_core::{frontmatter, CollectionName, ImageResolver, PubDate};

use crate::descriptor::SchemaContext;
use crate::error::SchemaError;
use crate::field::{FieldType, ObjectSchema};
use crate::registry::Registry;

/// File extensions recognized as content entries.
pub const ENTRY_EXTENSIONS: &[&str] = &["json", "markdown", "md", "yaml", "yml"];

/// A single validation violation with structured context.
#[derive(Debug, Clone, Serialize)]
pub struct Violation {
    /// JSON Pointer path to the violating field in the entry.
    pub instance_path: String,
    /// JSON Pointer path within the schema that triggered the violation.
    pub schema_path: String,
    /// Human-readable description naming expected vs actual.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "  (root): {}", self.message)
        } else {
            write!(f, "  {}: {}", self.instance_path, self.message)
        }
    }
}

/// Collection of validation violations for one entry.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct ValidationViolations {
    violations: Vec<Violation>,
}

impl ValidationViolations {
    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if there are no violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns a slice of all violations.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<Violation> {
        self.violations
    }
}

impl From<Vec<Violation>> for ValidationViolations {
    fn from(violations: Vec<Violation>) -> Self {
        Self { violations }
    }
}

impl fmt::Display for ValidationViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

/// Compiled validator for one collection.
///
/// Holds the compiled structural schema, the declarative shape for the
/// semantic pass, and the image-resolution capability. Construction
/// happens once per collection; the validator is `Send + Sync` and can be
/// shared across threads.
pub struct EntryValidator {
    name: CollectionName,
    shape: ObjectSchema,
    compiled: Validator,
    resolver: Arc<dyn ImageResolver>,
}

impl EntryValidator {
    /// Build the validator for a named collection in a registry.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::UnknownCollection` if the name is not
    /// registered, or `SchemaError::ValidatorBuild` if the compiled schema
    /// does not form a valid validator.
    pub fn for_collection(
        registry: &Registry,
        name: &str,
        ctx: &SchemaContext,
    ) -> Result<Self, SchemaError> {
        let descriptor = registry
            .get(name)
            .ok_or_else(|| SchemaError::UnknownCollection {
                name: name.to_string(),
            })?;

        let schema_document = descriptor.to_json_schema();
        let mut opts = jsonschema::options();
        opts.with_draft(jsonschema::Draft::Draft202012);
        let compiled = opts
            .build(&schema_document)
            .map_err(|e| SchemaError::ValidatorBuild {
                name: name.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            name: descriptor.name().clone(),
            shape: descriptor.schema().clone(),
            compiled,
            resolver: ctx.resolver(),
        })
    }

    /// The collection this validator enforces.
    pub fn collection(&self) -> &CollectionName {
        &self.name
    }

    /// Validate a parsed entry value.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::EntryRejected` with every structural and
    /// semantic violation found.
    pub fn validate(&self, entry: &Value) -> Result<(), SchemaError> {
        let mut violations: Vec<Violation> = self
            .compiled
            .iter_errors(entry)
            .map(|e| Violation {
                instance_path: e.instance_path.to_string(),
                schema_path: e.schema_path.to_string(),
                message: e.to_string(),
            })
            .collect();

        semantic_pass(&self.shape, entry, self.resolver.as_ref(), &mut violations);

        if violations.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::EntryRejected {
                name: self.name.to_string(),
                violations: violations.into(),
            })
        }
    }

    /// Load an entry file and validate its frontmatter.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::EntryLoad` if the file cannot be read or
    /// parsed, or `SchemaError::EntryRejected` if the frontmatter does not
    /// conform.
    pub fn validate_file(&self, path: &Path) -> Result<(), SchemaError> {
        let entry = load_entry(path)?;
        self.validate(&entry)
    }

    /// Validate every entry file under a directory.
    ///
    /// Walks the directory recursively, validates each file with a
    /// recognized entry extension, and reports all failures together.
    pub fn validate_dir(&self, dir: &Path) -> ValidationReport {
        let files = find_entry_files(dir);
        let mut report = ValidationReport {
            total: files.len(),
            passed: 0,
            failures: Vec::new(),
        };

        for path in files {
            match self.validate_file(&path) {
                Ok(()) => report.passed += 1,
                Err(e) => report.failures.push(EntryFailure {
                    path,
                    error: e.to_string(),
                }),
            }
        }

        report
    }
}

impl fmt::Debug for EntryValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntryValidator")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Aggregate result of validating a set of entries.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    /// Number of entries examined.
    pub total: usize,
    /// Number that passed.
    pub passed: usize,
    /// Every entry that failed, with its rendered error.
    pub failures: Vec<EntryFailure>,
}

impl ValidationReport {
    /// Number of entries that failed.
    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}

/// One failed entry in a [`ValidationReport`].
#[derive(Debug, Clone, Serialize)]
pub struct EntryFailure {
    /// Path to the offending entry file.
    pub path: PathBuf,
    /// Rendered validation or load error.
    pub error: String,
}

/// Load an entry file into the JSON value the validator consumes.
///
/// Markdown files contribute their frontmatter; YAML and JSON files are
/// taken whole.
///
/// # Errors
///
/// Returns `SchemaError::EntryLoad` naming the path and the reason.
pub fn load_entry(path: &Path) -> Result<Value, SchemaError> {
    let content = std::fs::read_to_string(path).map_err(|e| SchemaError::EntryLoad {
        path: path.display().to_string(),
        reason: format!("cannot read file: {e}"),
    })?;

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "md" | "markdown" => frontmatter::parse(&content)
            .map(|(value, _body)| value)
            .map_err(|e| SchemaError::EntryLoad {
                path: path.display().to_string(),
                reason: e.to_string(),
            }),
        "yaml" | "yml" => {
            let yaml: serde_yaml::Value =
                serde_yaml::from_str(&content).map_err(|e| SchemaError::EntryLoad {
                    path: path.display().to_string(),
                    reason: format!("invalid YAML: {e}"),
                })?;
            frontmatter::yaml_to_json(&yaml).map_err(|e| SchemaError::EntryLoad {
                path: path.display().to_string(),
                reason: e.to_string(),
            })
        }
        "json" => serde_json::from_str(&content).map_err(|e| SchemaError::EntryLoad {
            path: path.display().to_string(),
            reason: format!("invalid JSON: {e}"),
        }),
        other => Err(SchemaError::EntryLoad {
            path: path.display().to_string(),
            reason: format!("unsupported entry extension {other:?}"),
        }),
    }
}

/// Recursively collect entry files under a directory, sorted by path.
///
/// Unreadable directories are skipped; a missing directory yields an
/// empty list (callers decide whether that is worth a warning).
pub fn find_entry_files(dir: &Path) -> Vec<PathBuf> {
    let mut results = Vec::new();
    walk(dir, &mut results);
    results.sort();
    results
}

fn walk(dir: &Path, acc: &mut Vec<PathBuf>) {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return,
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            walk(&path, acc);
        } else if path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| ENTRY_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
            .unwrap_or(false)
        {
            acc.push(path);
        }
    }
}

/// Walk the declarative shape alongside the entry, collecting semantic
/// violations for date and image fields.
///
/// Fields whose value has the wrong structural type are skipped here; the
/// structural pass already reported them.
fn semantic_pass(
    shape: &ObjectSchema,
    entry: &Value,
    resolver: &dyn ImageResolver,
    acc: &mut Vec<Violation>,
) {
    if entry.is_object() {
        check_object(shape, entry, "", "", resolver, acc);
    }
}

fn check_object(
    shape: &ObjectSchema,
    value: &Value,
    instance_path: &str,
    schema_path: &str,
    resolver: &dyn ImageResolver,
    acc: &mut Vec<Violation>,
) {
    for field in shape.fields() {
        if let Some(v) = value.get(&field.name) {
            check_value(
                &field.ty,
                v,
                &format!("{instance_path}/{}", field.name),
                &format!("{schema_path}/properties/{}", field.name),
                resolver,
                acc,
            );
        }
    }
}

fn check_value(
    ty: &FieldType,
    value: &Value,
    instance_path: &str,
    schema_path: &str,
    resolver: &dyn ImageResolver,
    acc: &mut Vec<Violation>,
) {
    match ty {
        FieldType::Date => {
            if let Some(s) = value.as_str() {
                if let Err(e) = PubDate::parse(s) {
                    acc.push(Violation {
                        instance_path: instance_path.to_string(),
                        schema_path: format!("{schema_path}/format"),
                        message: e.to_string(),
                    });
                }
            }
        }
        FieldType::Image => {
            if let Some(s) = value.as_str() {
                if let Err(e) = resolver.resolve(s) {
                    acc.push(Violation {
                        instance_path: instance_path.to_string(),
                        schema_path: schema_path.to_string(),
                        message: e.to_string(),
                    });
                }
            }
        }
        FieldType::List(element) => {
            if let Some(items) = value.as_array() {
                for (i, item) in items.iter().enumerate() {
                    check_value(
                        element,
                        item,
                        &format!("{instance_path}/{i}"),
                        &format!("{schema_path}/items"),
                        resolver,
                        acc,
                    );
                }
            }
        }
        FieldType::Object(inner) => {
            if value.is_object() {
                check_object(inner, value, instance_path, schema_path, resolver, acc);
            }
        }
        FieldType::String => {}
    }
}
