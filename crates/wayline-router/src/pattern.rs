//! Path pattern compilation and matching.
//!
//! This module provides [`PathPattern`] for turning a route template such as
//! `/pages/:id` into an anchored regular expression with one named capture
//! group per `:name` placeholder. The placeholder names are kept in template
//! order, and the pattern also works in reverse: [`PathPattern::fill`]
//! substitutes placeholder values to produce a concrete path.

use std::collections::HashMap;
use std::fmt::Write as _;

use regex::Regex;

use wayline_core::{WaylineError, WaylineResult};

/// A compiled path pattern.
///
/// Placeholder names are one or more ASCII word characters after a `:`; a
/// `:` not followed by a word character is literal text. Each placeholder
/// matches exactly one path component (anything except `/`). Literal spans
/// match verbatim, with regex metacharacters escaped.
#[derive(Debug, Clone)]
pub struct PathPattern {
    /// The original template string (e.g. `"/pages/:id"`).
    template: String,
    /// The compiled anchored regex used for matching.
    regex: Regex,
    /// Placeholder names extracted from the template, in order.
    placeholders: Vec<String>,
}

impl PathPattern {
    /// Compiles a route template into a matcher.
    ///
    /// # Examples
    ///
    /// ```
    /// use wayline_router::pattern::PathPattern;
    ///
    /// let pattern = PathPattern::compile("/pages/:id").unwrap();
    /// let params = pattern.captures("/pages/42").unwrap();
    /// assert_eq!(params.get("id").unwrap(), "42");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`WaylineError::InvalidPattern`] if the template repeats a
    /// placeholder name or does not compile to a valid regex.
    pub fn compile(template: &str) -> WaylineResult<Self> {
        let (regex_str, placeholders) = build_regex(template)?;
        let regex = Regex::new(&regex_str).map_err(|e| WaylineError::InvalidPattern {
            pattern: template.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            template: template.to_string(),
            regex,
            placeholders,
        })
    }

    /// Returns the original template string.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// True if the template contains at least one placeholder.
    pub fn is_dynamic(&self) -> bool {
        !self.placeholders.is_empty()
    }

    /// Returns the placeholder names in template order.
    pub fn placeholders(&self) -> &[String] {
        &self.placeholders
    }

    /// Tests whether `path` matches this pattern in full.
    pub fn matches(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    /// Attempts to match `path`, extracting one value per placeholder.
    ///
    /// Returns `None` if the path does not match. For a literal pattern a
    /// successful match yields an empty map.
    pub fn captures(&self, path: &str) -> Option<HashMap<String, String>> {
        let caps = self.regex.captures(path)?;
        let mut params = HashMap::new();
        for name in &self.placeholders {
            if let Some(value) = caps.name(name) {
                params.insert(name.clone(), value.as_str().to_string());
            }
        }
        Some(params)
    }

    /// Produces a concrete path by substituting placeholder values.
    ///
    /// A placeholder with no entry in `params` is left as the literal
    /// `:name` text; surplus entries in `params` are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use wayline_router::pattern::PathPattern;
    ///
    /// let pattern = PathPattern::compile("/pages/:id").unwrap();
    /// let mut params = HashMap::new();
    /// params.insert("id".to_string(), "7".to_string());
    /// assert_eq!(pattern.fill(&params), "/pages/7");
    /// ```
    pub fn fill(&self, params: &HashMap<String, String>) -> String {
        let mut out = String::with_capacity(self.template.len());
        let mut remaining = self.template.as_str();

        while !remaining.is_empty() {
            let Some(start) = remaining.find(':') else {
                out.push_str(remaining);
                break;
            };
            out.push_str(&remaining[..start]);

            let after = &remaining[start + 1..];
            let name_len = placeholder_len(after);
            if name_len == 0 {
                out.push(':');
                remaining = after;
                continue;
            }

            let name = &after[..name_len];
            if let Some(value) = params.get(name) {
                out.push_str(value);
            } else {
                out.push(':');
                out.push_str(name);
            }
            remaining = &after[name_len..];
        }
        out
    }
}

/// Number of leading ASCII word characters, i.e. the length of a
/// placeholder name starting right after a `:`.
fn placeholder_len(after_colon: &str) -> usize {
    after_colon
        .bytes()
        .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
        .count()
}

/// Builds the anchored regex string and the ordered placeholder list for a
/// template.
fn build_regex(template: &str) -> WaylineResult<(String, Vec<String>)> {
    let mut regex_parts = String::from("^");
    let mut placeholders: Vec<String> = Vec::new();
    let mut remaining = template;

    while !remaining.is_empty() {
        let Some(start) = remaining.find(':') else {
            regex_parts.push_str(&regex::escape(remaining));
            break;
        };

        // Literal prefix up to the colon.
        regex_parts.push_str(&regex::escape(&remaining[..start]));

        let after = &remaining[start + 1..];
        let name_len = placeholder_len(after);
        if name_len == 0 {
            // A bare ':' with no name is literal text.
            regex_parts.push_str(&regex::escape(":"));
            remaining = after;
            continue;
        }

        let name = &after[..name_len];
        if placeholders.iter().any(|p| p == name) {
            return Err(WaylineError::InvalidPattern {
                pattern: template.to_string(),
                reason: format!("duplicate placeholder ':{name}'"),
            });
        }
        write!(regex_parts, "(?P<{name}>[^/]+)").ok();
        placeholders.push(name.to_string());
        remaining = &after[name_len..];
    }

    regex_parts.push('$');
    Ok((regex_parts, placeholders))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_pattern_matches_exactly() {
        let pattern = PathPattern::compile("/about").unwrap();
        assert!(pattern.matches("/about"));
        assert!(!pattern.matches("/about/us"));
        assert!(!pattern.matches("/abou"));
        assert!(!pattern.matches("x/about"));
        assert!(!pattern.is_dynamic());
    }

    #[test]
    fn test_dynamic_pattern_captures_value() {
        let pattern = PathPattern::compile("/pages/:id").unwrap();
        assert!(pattern.is_dynamic());

        let params = pattern.captures("/pages/42").unwrap();
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("id").unwrap(), "42");
    }

    #[test]
    fn test_multiple_placeholders_capture_in_order() {
        let pattern = PathPattern::compile("/users/:user/books/:book").unwrap();
        assert_eq!(pattern.placeholders(), ["user", "book"]);

        let params = pattern.captures("/users/alice/books/dune").unwrap();
        assert_eq!(params.get("user").unwrap(), "alice");
        assert_eq!(params.get("book").unwrap(), "dune");
    }

    #[test]
    fn test_placeholder_matches_single_component_only() {
        let pattern = PathPattern::compile("/pages/:id").unwrap();
        assert!(pattern.captures("/pages/a/b").is_none());
        assert!(pattern.captures("/pages/").is_none());
        assert!(pattern.captures("/pages").is_none());
    }

    #[test]
    fn test_literal_metacharacters_are_escaped() {
        let pattern = PathPattern::compile("/files/a.b").unwrap();
        assert!(pattern.matches("/files/a.b"));
        assert!(!pattern.matches("/files/axb"));
    }

    #[test]
    fn test_placeholder_with_literal_suffix() {
        let pattern = PathPattern::compile("/pages/:id.json").unwrap();
        let params = pattern.captures("/pages/42.json").unwrap();
        assert_eq!(params.get("id").unwrap(), "42");
        assert!(pattern.captures("/pages/42.xml").is_none());
    }

    #[test]
    fn test_bare_colon_is_literal() {
        let pattern = PathPattern::compile("/time/:").unwrap();
        assert!(!pattern.is_dynamic());
        assert!(pattern.matches("/time/:"));
        assert!(!pattern.matches("/time/now"));
    }

    #[test]
    fn test_duplicate_placeholder_rejected() {
        let err = PathPattern::compile("/x/:id/:id").unwrap_err();
        assert!(matches!(err, WaylineError::InvalidPattern { .. }));
        assert!(err.to_string().contains("duplicate placeholder"));
    }

    #[test]
    fn test_fill_substitutes_values() {
        let pattern = PathPattern::compile("/users/:user/books/:book").unwrap();
        let mut params = HashMap::new();
        params.insert("user".to_string(), "alice".to_string());
        params.insert("book".to_string(), "dune".to_string());
        assert_eq!(pattern.fill(&params), "/users/alice/books/dune");
    }

    #[test]
    fn test_fill_keeps_missing_placeholders_literal() {
        let pattern = PathPattern::compile("/users/:user/books/:book").unwrap();
        let mut params = HashMap::new();
        params.insert("user".to_string(), "alice".to_string());
        assert_eq!(pattern.fill(&params), "/users/alice/books/:book");
    }

    #[test]
    fn test_fill_with_empty_params_returns_template() {
        let pattern = PathPattern::compile("/pages/:id").unwrap();
        assert_eq!(pattern.fill(&HashMap::new()), "/pages/:id");
    }

    #[test]
    fn test_fill_ignores_surplus_params() {
        let pattern = PathPattern::compile("/about").unwrap();
        let mut params = HashMap::new();
        params.insert("junk".to_string(), "x".to_string());
        assert_eq!(pattern.fill(&params), "/about");
    }

    #[test]
    fn test_template_accessor() {
        let pattern = PathPattern::compile("/pages/:id").unwrap();
        assert_eq!(pattern.template(), "/pages/:id");
    }

    #[test]
    fn test_root_pattern() {
        let pattern = PathPattern::compile("/").unwrap();
        assert!(pattern.matches("/"));
        assert!(!pattern.matches(""));
        assert!(!pattern.matches("//"));
    }
}
