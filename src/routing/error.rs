//! Routing error types.

use std::fmt;

use thiserror::Error;

/// A malformed path pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("pattern '{0}' must not start with '/'")]
    LeadingSlash(String),
    #[error("pattern '{0}' has an unterminated parameter")]
    UnterminatedParameter(String),
    #[error("pattern '{pattern}' uses unknown converter '{converter}'")]
    UnknownConverter { pattern: String, converter: String },
    #[error("pattern '{pattern}' has invalid parameter name '{name}'")]
    InvalidParameterName { pattern: String, name: String },
    #[error("pattern '{pattern}' declares parameter '{name}' twice")]
    DuplicateParameter { pattern: String, name: String },
    #[error("pattern '{pattern}' mixes literal text and a parameter in segment '{segment}'")]
    MixedSegment { pattern: String, segment: String },
}

/// A single problem found while building a route table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteIssue {
    #[error("route #{index}: {source}")]
    InvalidPattern {
        index: usize,
        #[source]
        source: PatternError,
    },
    #[error("route #{index} has an empty name")]
    EmptyName { index: usize },
    #[error("route name '{name}' is declared by routes #{first} and #{second}")]
    DuplicateName {
        name: String,
        first: usize,
        second: usize,
    },
    #[error("pattern '{pattern}' (route #{second}) is shadowed by '{existing}' (route #{first})")]
    DuplicatePattern {
        pattern: String,
        existing: String,
        first: usize,
        second: usize,
    },
}

/// Route table construction failed. Holds every issue found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidRouteTable {
    pub issues: Vec<RouteIssue>,
}

impl fmt::Display for InvalidRouteTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid route table: ")?;
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", issue)?;
        }
        Ok(())
    }
}

impl std::error::Error for InvalidRouteTable {}

/// No route matched the requested path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no route matches path '{path}'")]
pub struct NotFound {
    pub path: String,
}

/// Reverse lookup failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReverseError {
    #[error("no route named '{0}'")]
    NoSuchName(String),
    #[error("route '{name}' requires parameter '{param}'")]
    MissingParameter { name: String, param: String },
    #[error("route '{name}' has no parameter '{param}'")]
    UnexpectedParameter { name: String, param: String },
    #[error("value '{value}' is not valid for parameter '{param}' of route '{name}'")]
    InvalidParameter {
        name: String,
        param: String,
        value: String,
    },
}
