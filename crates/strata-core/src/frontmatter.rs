//! # Frontmatter Handling
//!
//! Content entries are Markdown files opening with a YAML block fenced by
//! `---` lines. This module splits that block from the body and converts
//! the YAML into a `serde_json::Value` so one value representation flows
//! through schema validation regardless of the source format.
//!
//! Rendering the body is out of scope here; it belongs to the consuming
//! pipeline. This module never interprets Markdown.

use serde_json::Value;
use thiserror::Error;

/// The fence line delimiting a frontmatter block.
const FENCE: &str = "---";

/// Error splitting or parsing a frontmatter block.
#[derive(Error, Debug)]
pub enum FrontmatterError {
    /// The file does not open with a `---` fence.
    #[error("missing frontmatter block (expected a leading '---' fence)")]
    MissingBlock,

    /// The opening fence was never closed.
    #[error("unterminated frontmatter block (no closing '---' fence)")]
    Unterminated,

    /// The block is not valid YAML.
    #[error("invalid YAML in frontmatter: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    /// The YAML uses a construct JSON cannot represent.
    #[error("frontmatter cannot be represented as JSON: {0}")]
    Unrepresentable(String),
}

/// Split a source file into its raw frontmatter YAML and body.
///
/// The frontmatter must open on the first line with `---` and close with a
/// line containing only `---`. The returned body starts on the line after
/// the closing fence, untouched.
///
/// # Errors
///
/// Returns `FrontmatterError::MissingBlock` if the file does not start
/// with a fence, `FrontmatterError::Unterminated` if the fence is never
/// closed.
pub fn split(source: &str) -> Result<(&str, &str), FrontmatterError> {
    let rest = source
        .strip_prefix("\u{feff}")
        .unwrap_or(source);

    let after_fence = rest
        .strip_prefix(FENCE)
        .ok_or(FrontmatterError::MissingBlock)?;
    let after_open = after_fence
        .strip_prefix("\r\n")
        .or_else(|| after_fence.strip_prefix('\n'))
        .ok_or(FrontmatterError::MissingBlock)?;

    // Scan line by line for the closing fence.
    let mut offset = 0;
    for line in after_open.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == FENCE {
            let yaml = &after_open[..offset];
            let body = &after_open[offset + line.len()..];
            return Ok((yaml, body));
        }
        offset += line.len();
    }

    Err(FrontmatterError::Unterminated)
}

/// Parse a source file into its frontmatter (as JSON) and body.
///
/// # Errors
///
/// Returns `FrontmatterError` if the fence structure is broken, the YAML
/// is invalid, or the YAML uses constructs JSON cannot carry.
pub fn parse(source: &str) -> Result<(Value, String), FrontmatterError> {
    let (yaml_str, body) = split(source)?;
    let yaml: serde_yaml::Value = serde_yaml::from_str(yaml_str)?;
    let value = yaml_to_json(&yaml)?;
    Ok((value, body.to_string()))
}

/// Convert a `serde_yaml::Value` to a `serde_json::Value`.
///
/// YAML has a richer type system than JSON (tags, non-string keys), but
/// frontmatter uses only the JSON-compatible subset. Tags are ignored and
/// the inner value converted; non-string mapping keys are stringified
/// where unambiguous (numbers, booleans) and rejected otherwise.
pub fn yaml_to_json(yaml: &serde_yaml::Value) -> Result<Value, FrontmatterError> {
    match yaml {
        serde_yaml::Value::Null => Ok(Value::Null),
        serde_yaml::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Number(serde_json::Number::from(i)))
            } else if let Some(u) = n.as_u64() {
                Ok(Value::Number(serde_json::Number::from(u)))
            } else if let Some(f) = n.as_f64() {
                serde_json::Number::from_f64(f)
                    .map(Value::Number)
                    .ok_or_else(|| {
                        FrontmatterError::Unrepresentable(format!(
                            "float {f} has no JSON representation"
                        ))
                    })
            } else {
                Err(FrontmatterError::Unrepresentable(format!(
                    "unsupported YAML number: {n:?}"
                )))
            }
        }
        serde_yaml::Value::String(s) => Ok(Value::String(s.clone())),
        serde_yaml::Value::Sequence(seq) => {
            let items: Result<Vec<Value>, FrontmatterError> =
                seq.iter().map(yaml_to_json).collect();
            Ok(Value::Array(items?))
        }
        serde_yaml::Value::Mapping(map) => {
            let mut json_map = serde_json::Map::new();
            for (k, v) in map {
                let key = match k {
                    serde_yaml::Value::String(s) => s.clone(),
                    serde_yaml::Value::Number(n) => n.to_string(),
                    serde_yaml::Value::Bool(b) => b.to_string(),
                    other => {
                        return Err(FrontmatterError::Unrepresentable(format!(
                            "unsupported YAML map key: {other:?}"
                        )))
                    }
                };
                json_map.insert(key, yaml_to_json(v)?);
            }
            Ok(Value::Object(json_map))
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json(&tagged.value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "---\ntitle: Hello\ntags:\n  - rust\n  - web\n---\n\n# Heading\n\nBody text.\n";

    // ---- split ----

    #[test]
    fn split_separates_yaml_and_body() {
        let (yaml, body) = split(SAMPLE).unwrap();
        assert!(yaml.contains("title: Hello"));
        assert!(body.starts_with("\n# Heading"));
    }

    #[test]
    fn split_missing_fence() {
        assert!(matches!(
            split("title: Hello\n"),
            Err(FrontmatterError::MissingBlock)
        ));
    }

    #[test]
    fn split_fence_must_open_first_line() {
        assert!(matches!(
            split("\n---\ntitle: x\n---\n"),
            Err(FrontmatterError::MissingBlock)
        ));
    }

    #[test]
    fn split_unterminated_fence() {
        assert!(matches!(
            split("---\ntitle: Hello\n"),
            Err(FrontmatterError::Unterminated)
        ));
    }

    #[test]
    fn split_tolerates_bom() {
        let source = "\u{feff}---\ntitle: x\n---\nbody";
        let (yaml, body) = split(source).unwrap();
        assert_eq!(yaml, "title: x\n");
        assert_eq!(body, "body");
    }

    #[test]
    fn split_handles_crlf() {
        let source = "---\r\ntitle: x\r\n---\r\nbody";
        let (yaml, body) = split(source).unwrap();
        assert!(yaml.contains("title: x"));
        assert_eq!(body, "body");
    }

    #[test]
    fn split_empty_body() {
        let (yaml, body) = split("---\ntitle: x\n---\n").unwrap();
        assert_eq!(yaml, "title: x\n");
        assert_eq!(body, "");
    }

    #[test]
    fn split_dashes_inside_yaml_are_not_a_fence() {
        // A list item line starting with "- " is not the closing fence.
        let source = "---\ntags:\n  - a\n---\nbody";
        let (yaml, _) = split(source).unwrap();
        assert!(yaml.contains("- a"));
    }

    // ---- parse ----

    #[test]
    fn parse_returns_json_frontmatter() {
        let (value, body) = parse(SAMPLE).unwrap();
        assert_eq!(value["title"], "Hello");
        assert_eq!(value["tags"][0], "rust");
        assert!(body.contains("Body text."));
    }

    #[test]
    fn parse_invalid_yaml() {
        let source = "---\ntitle: [unclosed\n---\nbody";
        assert!(matches!(
            parse(source),
            Err(FrontmatterError::InvalidYaml(_))
        ));
    }

    // ---- yaml_to_json ----

    #[test]
    fn yaml_scalars_convert() {
        let yaml: serde_yaml::Value =
            serde_yaml::from_str("title: x\ncount: 42\nratio: 1.5\nenabled: true\nnothing: null")
                .unwrap();
        let json = yaml_to_json(&yaml).unwrap();
        assert_eq!(json["title"], "x");
        assert_eq!(json["count"], 42);
        assert_eq!(json["ratio"], 1.5);
        assert_eq!(json["enabled"], true);
        assert!(json["nothing"].is_null());
    }

    #[test]
    fn yaml_unquoted_date_stays_a_string() {
        // serde_yaml has no date type; `2024-01-01` arrives as a string,
        // which is what the schema layer expects for date fields.
        let yaml: serde_yaml::Value = serde_yaml::from_str("pubDate: 2024-01-01").unwrap();
        let json = yaml_to_json(&yaml).unwrap();
        assert_eq!(json["pubDate"], "2024-01-01");
    }

    #[test]
    fn yaml_numeric_keys_stringify() {
        let yaml: serde_yaml::Value = serde_yaml::from_str("2024: archive").unwrap();
        let json = yaml_to_json(&yaml).unwrap();
        assert_eq!(json["2024"], "archive");
    }

    #[test]
    fn yaml_tagged_values_unwrap() {
        let yaml: serde_yaml::Value = serde_yaml::from_str("val: !Custom inner").unwrap();
        let json = yaml_to_json(&yaml).unwrap();
        assert_eq!(json["val"], "inner");
    }

    #[test]
    fn yaml_nested_structures_convert() {
        let yaml: serde_yaml::Value =
            serde_yaml::from_str("cover:\n  image: ./a.png\n  alt: A cover").unwrap();
        let json = yaml_to_json(&yaml).unwrap();
        assert_eq!(json["cover"]["image"], "./a.png");
        assert_eq!(json["cover"]["alt"], "A cover");
    }
}
