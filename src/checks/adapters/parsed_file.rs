//! Structured data file checks.
//!
//! The file must exist and parse. The outcome counts the top-level entries
//! and names the first mapping key, which is usually enough to tell a real
//! task file from an empty stub.

use std::path::Path;

use super::CheckContext;
use crate::checks::check::DataFormat;
use crate::checks::error::{CheckError, Outcome};

/// Top-level shape of a parsed document.
#[derive(Debug, PartialEq, Eq)]
struct Shape {
    entries: usize,
    first_key: Option<String>,
}

/// Verify `path` exists and parses as `format`.
pub fn check(
    ctx: &CheckContext<'_>,
    path: &str,
    format: DataFormat,
) -> Result<Outcome, CheckError> {
    let full_path = ctx.resolve_path(path, None)?;

    if !full_path.exists() {
        return Err(CheckError::FileMissing { path: full_path });
    }

    let unparsable = |message: String| CheckError::FileUnparsable {
        path: full_path.clone(),
        format: format.to_string(),
        message,
    };

    let content = std::fs::read_to_string(&full_path).map_err(|e| unparsable(e.to_string()))?;
    let shape = parse_shape(&content, format).map_err(unparsable)?;

    let mut outcome = Outcome::new(format!(
        "{} parsed as {}",
        display_name(&full_path),
        format
    ))
    .with_count(shape.entries);
    if let Some(key) = shape.first_key {
        outcome = outcome.with_detail(format!("First entry: {}", key));
    }
    Ok(outcome)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

fn parse_shape(content: &str, format: DataFormat) -> Result<Shape, String> {
    if content.trim().is_empty() {
        return Ok(Shape {
            entries: 0,
            first_key: None,
        });
    }

    match format {
        DataFormat::Yaml => {
            let value: serde_yaml::Value =
                serde_yaml::from_str(content).map_err(|e| e.to_string())?;
            Ok(yaml_shape(&value))
        }
        DataFormat::Json => {
            let value: serde_json::Value =
                serde_json::from_str(content).map_err(|e| e.to_string())?;
            Ok(json_shape(&value))
        }
    }
}

fn yaml_shape(value: &serde_yaml::Value) -> Shape {
    use serde_yaml::Value;

    match value {
        Value::Mapping(map) => Shape {
            entries: map.len(),
            first_key: map.keys().next().map(yaml_key),
        },
        Value::Sequence(seq) => Shape {
            entries: seq.len(),
            first_key: None,
        },
        Value::Null => Shape {
            entries: 0,
            first_key: None,
        },
        Value::Tagged(tagged) => yaml_shape(&tagged.value),
        _ => Shape {
            entries: 1,
            first_key: None,
        },
    }
}

fn yaml_key(key: &serde_yaml::Value) -> String {
    match key {
        serde_yaml::Value::String(s) => s.clone(),
        serde_yaml::Value::Number(n) => n.to_string(),
        serde_yaml::Value::Bool(b) => b.to_string(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim().to_string())
            .unwrap_or_default(),
    }
}

fn json_shape(value: &serde_json::Value) -> Shape {
    use serde_json::Value;

    match value {
        Value::Object(map) => Shape {
            entries: map.len(),
            first_key: map.keys().next().cloned(),
        },
        Value::Array(items) => Shape {
            entries: items.len(),
            first_key: None,
        },
        Value::Null => Shape {
            entries: 0,
            first_key: None,
        },
        _ => Shape {
            entries: 1,
            first_key: None,
        },
    }
}
