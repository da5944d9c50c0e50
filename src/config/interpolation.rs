//! Variable interpolation for check paths.
//!
//! Paths in checks may reference environment variables with `${NAME}`.
//!
//! # Syntax
//!
//! - `${NAME}` - replaced with the variable's value
//! - `$${escaped}` - produces literal `${escaped}` in output
//! - any other `$` is kept as written
//!
//! # Example
//!
//! ```yaml
//! path: "${GAME_DIR}/shared_memory_10783.bin"
//! ```

use std::collections::BTreeSet;

/// A segment of an interpolated string.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Literal text
    Literal(String),
    /// Variable reference: ${name}
    Variable(String),
}

/// Parse a string containing `${var}` interpolations.
pub fn parse_interpolation(input: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut chars = input.chars().peekable();
    let mut current_literal = String::new();

    while let Some(c) = chars.next() {
        if c != '$' {
            current_literal.push(c);
            continue;
        }

        match chars.peek() {
            Some('$') => {
                chars.next();
                if chars.peek() == Some(&'{') {
                    // $${...} -> literal ${...}
                    chars.next();
                    current_literal.push_str("${");
                    for c in chars.by_ref() {
                        current_literal.push(c);
                        if c == '}' {
                            break;
                        }
                    }
                } else {
                    current_literal.push_str("$$");
                }
            }
            Some('{') => {
                chars.next();
                if !current_literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut current_literal)));
                }

                let mut var_name = String::new();
                for c in chars.by_ref() {
                    if c == '}' {
                        break;
                    }
                    var_name.push(c);
                }
                segments.push(Segment::Variable(var_name.trim().to_string()));
            }
            _ => current_literal.push(c),
        }
    }

    if !current_literal.is_empty() {
        segments.push(Segment::Literal(current_literal));
    }

    segments
}

/// Extract the unique variable names referenced by a string, sorted.
pub fn extract_variables(input: &str) -> BTreeSet<String> {
    parse_interpolation(input)
        .into_iter()
        .filter_map(|seg| match seg {
            Segment::Variable(name) => Some(name),
            Segment::Literal(_) => None,
        })
        .collect()
}

/// Resolve every `${NAME}` in `input` through `lookup`.
///
/// Returns the name of the first variable `lookup` could not resolve.
///
/// ```
/// use preflight::config::resolve_with;
///
/// let resolved = resolve_with("${HOME}/game", |name| {
///     (name == "HOME").then(|| "/home/farmer".to_string())
/// });
/// assert_eq!(resolved, Ok("/home/farmer/game".to_string()));
///
/// let missing = resolve_with("${NOPE}/x", |_| None);
/// assert_eq!(missing, Err("NOPE".to_string()));
/// ```
pub fn resolve_with<F>(input: &str, lookup: F) -> Result<String, String>
where
    F: Fn(&str) -> Option<String>,
{
    let mut result = String::new();

    for segment in parse_interpolation(input) {
        match segment {
            Segment::Literal(text) => result.push_str(&text),
            Segment::Variable(name) => match lookup(&name) {
                Some(value) => result.push_str(&value),
                None => return Err(name),
            },
        }
    }

    Ok(result)
}
