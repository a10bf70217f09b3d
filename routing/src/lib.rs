//! Legacy URL routing.
//!
//! Maps request paths to `controller#action` targets using an ordered table
//! of compiled patterns. The concrete table served by the web application
//! lives in [`legacy`]; [`RouteTable`] and its builder are usable on their own.

pub mod legacy;
pub mod pattern;
pub mod table;

pub use table::{Dispatch, ResourceAction, Route, RouteTable, RouteTableBuilder, Verb};

/// Error raised while building a route table or parsing request input.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    /// A `(` has no matching `)` or the other way round.
    #[error("unbalanced optional group in pattern `{pattern}`")]
    UnbalancedGroup { pattern: String },
    /// A `:` is not followed by a parameter name.
    #[error("empty parameter name in pattern `{pattern}`")]
    EmptyParameter { pattern: String },
    /// The same parameter appears twice in one pattern.
    #[error("parameter `{name}` declared twice in pattern `{pattern}`")]
    DuplicateParameter { pattern: String, name: String },
    /// A constraint names a parameter the pattern does not declare.
    #[error("constraint for unknown parameter `{name}` in pattern `{pattern}`")]
    UnknownConstraint { pattern: String, name: String },
    /// The route neither names a controller nor captures `:controller`.
    #[error("route `{pattern}` has no controller")]
    MissingController { pattern: String },
    /// A parameter constraint is not a valid regular expression.
    #[error("invalid constraint: {0}")]
    Regex(#[from] regex::Error),
    /// The request verb is not one the router understands.
    #[error("unknown HTTP verb `{0}`")]
    UnknownVerb(String),
}
