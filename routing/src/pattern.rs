//! Route pattern compiler.
//!
//! Patterns use the legacy route syntax: literal text, `:name` parameters and
//! `( ... )` optional groups, e.g. `api/events/:id(.:format)`. Each pattern is
//! compiled once into an anchored regular expression with one named capture
//! per parameter.

#[cfg(test)]
#[path = "pattern_test.rs"]
mod pattern_test;

use std::collections::BTreeMap;

use regex::Regex;

use crate::RouteError;

/// Constraint applied to parameters that have no explicit requirement.
pub const DEFAULT_SEGMENT: &str = "[^/.?]+";

/// A compiled route pattern.
#[derive(Clone, Debug)]
pub struct Pattern {
    source: String,
    regex: Regex,
    params: Vec<String>,
}

impl Pattern {
    /// Compile `source`, using `constraints` for the named parameters and
    /// [`DEFAULT_SEGMENT`] for the rest.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError`] for unbalanced groups, empty or duplicate
    /// parameter names, constraints naming unknown parameters, and
    /// constraints that are not valid regular expressions.
    pub fn compile(source: &str, constraints: &BTreeMap<String, String>) -> Result<Self, RouteError> {
        let mut expr = String::from("^");
        let mut params: Vec<String> = Vec::new();
        let mut depth = 0_usize;
        let mut chars = source.chars().peekable();

        while let Some(ch) = chars.next() {
            match ch {
                ':' => {
                    let mut name = String::new();
                    while let Some(&next) = chars.peek() {
                        if next.is_ascii_alphanumeric() || next == '_' {
                            name.push(next);
                            chars.next();
                        } else {
                            break;
                        }
                    }
                    if name.is_empty() {
                        return Err(RouteError::EmptyParameter { pattern: source.to_owned() });
                    }
                    if params.contains(&name) {
                        return Err(RouteError::DuplicateParameter { pattern: source.to_owned(), name });
                    }
                    let constraint = constraints.get(&name).map_or(DEFAULT_SEGMENT, String::as_str);
                    expr.push_str(&format!("(?P<{name}>{constraint})"));
                    params.push(name);
                }
                '(' => {
                    depth += 1;
                    expr.push_str("(?:");
                }
                ')' => {
                    if depth == 0 {
                        return Err(RouteError::UnbalancedGroup { pattern: source.to_owned() });
                    }
                    depth -= 1;
                    expr.push_str(")?");
                }
                literal => expr.push_str(&regex::escape(literal.encode_utf8(&mut [0; 4]))),
            }
        }
        if depth != 0 {
            return Err(RouteError::UnbalancedGroup { pattern: source.to_owned() });
        }
        if let Some(unknown) = constraints.keys().find(|name| !params.contains(name)) {
            return Err(RouteError::UnknownConstraint { pattern: source.to_owned(), name: unknown.clone() });
        }
        expr.push('$');

        let regex = Regex::new(&expr)?;
        Ok(Self { source: source.to_owned(), regex, params })
    }

    /// The pattern as written in the route table.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Parameter names in declaration order.
    #[must_use]
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// Match a normalized path, returning the parameters that participated
    /// in the match.
    #[must_use]
    pub fn captures(&self, path: &str) -> Option<BTreeMap<String, String>> {
        let caps = self.regex.captures(path)?;
        let values = self
            .params
            .iter()
            .filter_map(|name| caps.name(name).map(|m| (name.clone(), m.as_str().to_owned())))
            .collect();
        Some(values)
    }
}

/// Strip the query string and surrounding slashes from a request path.
#[must_use]
pub fn normalize_path(path: &str) -> &str {
    let path = path.split_once('?').map_or(path, |(before, _)| before);
    path.trim_matches('/')
}
