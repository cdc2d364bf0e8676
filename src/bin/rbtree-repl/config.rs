//! Configuration for the interactive driver.
//!
//! Defaults can be overridden through environment variables.

use std::num::ParseIntError;

use rbtree_set::{DEFAULT_INDENT, Direction};

/// Value that ends the input loop.
pub(crate) const SENTINEL_VAR: &str = "RBTREE_SENTINEL";
/// Spaces per depth level in the printed tree.
pub(crate) const INDENT_VAR: &str = "RBTREE_INDENT";
/// `descending` (right subtree on top) or `ascending`.
pub(crate) const ORDER_VAR: &str = "RBTREE_ORDER";
/// Text written before each line of input is read.
pub(crate) const PROMPT_VAR: &str = "RBTREE_PROMPT";

/// Largest accepted `RBTREE_INDENT`.
pub(crate) const MAX_INDENT: usize = 64;

/// Driver configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ReplConfig {
    pub(crate) sentinel: i64,
    pub(crate) indent: usize,
    pub(crate) order: Direction,
    pub(crate) prompt: String,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            sentinel: 0,
            indent: DEFAULT_INDENT,
            order: Direction::Descending,
            prompt: default_prompt(0),
        }
    }
}

impl ReplConfig {
    /// Load configuration from the process environment.
    pub(crate) fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from defaults plus whatever `lookup` returns for each variable.
    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(SENTINEL_VAR) {
            config.sentinel = parse_int(SENTINEL_VAR, &raw)?;
        }

        if let Some(raw) = lookup(INDENT_VAR) {
            let indent = parse_int(INDENT_VAR, &raw)?;
            if indent > MAX_INDENT {
                return Err(ConfigError::IndentTooLarge {
                    value: indent,
                    max: MAX_INDENT,
                });
            }
            config.indent = indent;
        }

        if let Some(raw) = lookup(ORDER_VAR) {
            config.order = match raw.trim().to_ascii_lowercase().as_str() {
                "descending" | "desc" => Direction::Descending,
                "ascending" | "asc" => Direction::Ascending,
                _ => return Err(ConfigError::InvalidOrder(raw)),
            };
        }

        config.prompt = lookup(PROMPT_VAR).unwrap_or_else(|| default_prompt(config.sentinel));

        Ok(config)
    }
}

fn default_prompt(sentinel: i64) -> String {
    format!("Enter a value ({sentinel} to stop): ")
}

fn parse_int<N>(var: &'static str, raw: &str) -> Result<N, ConfigError>
where
    N: std::str::FromStr<Err = ParseIntError>,
{
    raw.trim()
        .parse()
        .map_err(|source| ConfigError::InvalidNumber {
            var,
            value: raw.to_string(),
            source,
        })
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ConfigError {
    #[error("{var}={value:?} is not a valid number: {source}")]
    InvalidNumber {
        var: &'static str,
        value: String,
        source: ParseIntError,
    },

    #[error("RBTREE_ORDER={0:?} must be 'ascending' or 'descending'")]
    InvalidOrder(String),

    #[error("RBTREE_INDENT={value} exceeds the maximum of {max}")]
    IndentTooLarge { value: usize, max: usize },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_without_overrides() {
        let config = ReplConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, ReplConfig::default());
        assert_eq!(config.sentinel, 0);
        assert_eq!(config.indent, 4);
        assert_eq!(config.order, Direction::Descending);
        assert_eq!(config.prompt, "Enter a value (0 to stop): ");
    }

    #[test]
    fn test_overrides_applied() {
        let config = ReplConfig::from_lookup(lookup_from(&[
            (SENTINEL_VAR, "-1"),
            (INDENT_VAR, " 2 "),
            (ORDER_VAR, "Ascending"),
        ]))
        .unwrap();

        assert_eq!(config.sentinel, -1);
        assert_eq!(config.indent, 2);
        assert_eq!(config.order, Direction::Ascending);
        assert_eq!(config.prompt, "Enter a value (-1 to stop): ");
    }

    #[test]
    fn test_explicit_prompt_wins() {
        let config = ReplConfig::from_lookup(lookup_from(&[(PROMPT_VAR, "> ")])).unwrap();
        assert_eq!(config.prompt, "> ");
    }

    #[test]
    fn test_invalid_number_rejected() {
        let err = ReplConfig::from_lookup(lookup_from(&[(INDENT_VAR, "-3")])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidNumber { var: INDENT_VAR, .. }
        ));
        assert!(err.to_string().starts_with("RBTREE_INDENT=\"-3\""));
    }

    #[test]
    fn test_oversized_indent_rejected() {
        let huge = (usize::MAX / 2 + 1).to_string();
        let err = ReplConfig::from_lookup(lookup_from(&[(INDENT_VAR, huge.as_str())])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::IndentTooLarge { value, max: MAX_INDENT } if value == usize::MAX / 2 + 1
        ));

        let err = ReplConfig::from_lookup(lookup_from(&[(INDENT_VAR, "65")])).unwrap_err();
        assert_eq!(err.to_string(), "RBTREE_INDENT=65 exceeds the maximum of 64");

        let config = ReplConfig::from_lookup(lookup_from(&[(INDENT_VAR, "64")])).unwrap();
        assert_eq!(config.indent, MAX_INDENT);
    }

    #[test]
    fn test_invalid_order_rejected() {
        let err = ReplConfig::from_lookup(lookup_from(&[(ORDER_VAR, "sideways")])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "RBTREE_ORDER=\"sideways\" must be 'ascending' or 'descending'"
        );
    }
}
