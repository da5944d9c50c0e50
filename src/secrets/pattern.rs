//! Secret pattern matching.
//!
//! Detects secret environment variables by matching their names against
//! patterns.

use regex::Regex;

/// A pattern that identifies secret values.
#[derive(Debug, Clone)]
pub struct SecretPattern {
    /// Name of this pattern (for debugging).
    pub name: String,
    /// Regex pattern to match environment variable names.
    pub env_pattern: Regex,
}

/// Built-in patterns for common secrets.
///
/// Each tuple contains (name, regex_pattern).
pub const BUILTIN_PATTERNS: &[(&str, &str)] = &[
    ("api_key", r"(?i)^.*_?(API_?KEY|APIKEY)$"),
    ("key", r"(?i)^.+_KEY$"),
    ("secret", r"(?i)^.*_?(SECRET|SECRET_KEY)$"),
    ("token", r"(?i)^.*_?(TOKEN|ACCESS_TOKEN|AUTH_TOKEN)$"),
    ("password", r"(?i)^.*_?(PASSWORD|PASSWD|PWD)$"),
    ("credential", r"(?i)^.*_?CREDENTIALS?$"),
    (
        "connection_string",
        r"(?i)^.*(CONNECTION_STRING|DATABASE_URL)$",
    ),
];

/// Matches environment variable names against secret patterns.
#[derive(Debug, Clone)]
pub struct SecretMatcher {
    patterns: Vec<SecretPattern>,
}

impl SecretMatcher {
    /// Create a matcher with built-in patterns.
    pub fn with_builtins() -> Self {
        let patterns = BUILTIN_PATTERNS
            .iter()
            .filter_map(|(name, pattern)| {
                Regex::new(pattern).ok().map(|env_pattern| SecretPattern {
                    name: name.to_string(),
                    env_pattern,
                })
            })
            .collect();

        Self { patterns }
    }

    /// Create a matcher with built-in patterns plus custom exact names.
    ///
    /// ```
    /// use preflight::secrets::SecretMatcher;
    ///
    /// let matcher = SecretMatcher::with_builtins_and_custom(&["GAME_SEED".to_string()]);
    /// assert!(matcher.is_secret("GAME_SEED"));
    /// assert!(matcher.is_secret("API_KEY"));
    /// ```
    pub fn with_builtins_and_custom(custom_names: &[String]) -> Self {
        let mut matcher = Self::with_builtins();

        for name in custom_names {
            if let Ok(pattern) = Regex::new(&format!("^{}$", regex::escape(name))) {
                matcher.patterns.push(SecretPattern {
                    name: format!("custom:{}", name),
                    env_pattern: pattern,
                });
            }
        }

        matcher
    }

    /// Check if an environment variable name matches any secret pattern.
    pub fn is_secret(&self, env_name: &str) -> bool {
        self.patterns
            .iter()
            .any(|p| p.env_pattern.is_match(env_name))
    }

    /// Get the number of patterns.
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }
}

impl Default for SecretMatcher {
    fn default() -> Self {
        Self::with_builtins()
    }
}

/// Describe a secret value without revealing it.
pub fn describe_secret(value: &str) -> String {
    format!("set (length: {})", value.chars().count())
}
