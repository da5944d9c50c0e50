//! .env file parsing.
//!
//! Parses environment variable files in the standard KEY=value format.
//! Lines that are not assignments are skipped rather than rejected, so a
//! slightly messy `.env` never stops a verification run.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;

/// Parses .env files into a map of environment variables.
///
/// # Supported Formats
///
/// - Simple: `KEY=value`
/// - Exported: `export KEY=value`
/// - Quoted: `KEY="value with spaces"` or `KEY='single quoted'`
/// - Empty: `KEY=`
/// - Comments: `# This is a comment`
/// - Values with equals signs: `URL=https://example.com?foo=bar`
///
/// # Example
///
/// ```
/// use preflight::config::EnvFileParser;
///
/// let content = r#"
/// # Game install
/// STARDEW_APP_PATH=~/Games/Stardew/StardewModdingAPI
/// OA_OPENAI_KEY="sk-test"
/// "#;
///
/// let vars = EnvFileParser::parse(content);
/// assert_eq!(vars.get("OA_OPENAI_KEY"), Some(&"sk-test".to_string()));
/// assert_eq!(vars.len(), 2);
/// ```
pub struct EnvFileParser;

impl EnvFileParser {
    /// Parse env file content into a map of variables.
    pub fn parse(content: &str) -> HashMap<String, String> {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(Self::parse_line)
            .collect()
    }

    fn parse_line(line: &str) -> Option<(String, String)> {
        let line = line.strip_prefix("export ").unwrap_or(line);
        let (key, value) = line.split_once('=')?;
        let key = key.trim();
        if key.is_empty() || key.contains(char::is_whitespace) {
            return None;
        }

        Some((key.to_string(), Self::unquote(value.trim())))
    }

    /// Remove surrounding quotes from a value.
    fn unquote(value: &str) -> String {
        let quoted = value.len() >= 2
            && ((value.starts_with('"') && value.ends_with('"'))
                || (value.starts_with('\'') && value.ends_with('\'')));
        if quoted {
            value[1..value.len() - 1].to_string()
        } else {
            value.to_string()
        }
    }

    /// Load and parse an env file from a path.
    pub fn load(path: &Path) -> Result<HashMap<String, String>> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Ok(Self::parse(&content))
    }

    /// Load an env file, returning `None` if it doesn't exist.
    pub fn load_optional(path: &Path) -> Result<Option<HashMap<String, String>>> {
        if path.exists() {
            Self::load(path).map(Some)
        } else {
            Ok(None)
        }
    }
}
