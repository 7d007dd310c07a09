//! Route lookup and reverse resolution.
//!
//! # Responsibilities
//! - Store compiled routes in declaration order
//! - Look up the first route matching a normalized path
//! - Build paths from route names (reverse lookup)
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(1) name lookup via HashMap
//! - O(n) ordered pattern scan (acceptable for typical route counts)
//! - Explicit NotFound rather than silent default

use std::borrow::Cow;
use std::collections::HashMap;

use percent_encoding::percent_decode_str;

use crate::routing::error::{InvalidRouteTable, NotFound, ReverseError, RouteIssue};
use crate::routing::matcher::{PathParams, PathPattern};

/// A route declaration: pattern, handler and symbolic name.
#[derive(Debug, Clone)]
pub struct Route<H> {
    pattern: String,
    handler: H,
    name: String,
}

impl<H> Route<H> {
    pub fn new(pattern: impl Into<String>, handler: H, name: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            handler,
            name: name.into(),
        }
    }
}

/// Shorthand for [`Route::new`], mirroring a `urlpatterns` declaration.
pub fn path<H>(pattern: &str, handler: H, name: &str) -> Route<H> {
    Route::new(pattern, handler, name)
}

/// A compiled route held by the table.
#[derive(Debug)]
pub struct RouteEntry<H> {
    pattern: PathPattern,
    handler: H,
    name: String,
}

impl<H> RouteEntry<H> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }
}

/// Result of a successful lookup.
#[derive(Debug)]
pub struct RouteMatch<'a, H> {
    entry: &'a RouteEntry<H>,
    params: PathParams,
}

impl<'a, H> RouteMatch<'a, H> {
    pub fn handler(&self) -> &'a H {
        &self.entry.handler
    }

    pub fn name(&self) -> &'a str {
        &self.entry.name
    }

    pub fn pattern(&self) -> &'a PathPattern {
        &self.entry.pattern
    }

    pub fn params(&self) -> &PathParams {
        &self.params
    }
}

/// Immutable, ordered route table.
#[derive(Debug)]
pub struct RouteTable<H> {
    entries: Vec<RouteEntry<H>>,
    by_name: HashMap<String, usize>,
}

impl<H> RouteTable<H> {
    /// Compile and validate routes.
    ///
    /// Fails with every issue found: malformed patterns, empty names,
    /// duplicate names and duplicate (or shape-equivalent) patterns.
    pub fn new(routes: Vec<Route<H>>) -> Result<Self, InvalidRouteTable> {
        let mut issues = Vec::new();
        let mut entries = Vec::with_capacity(routes.len());
        let mut by_name: HashMap<String, usize> = HashMap::new();
        let mut by_shape: HashMap<String, (usize, String)> = HashMap::new();

        for (index, route) in routes.into_iter().enumerate() {
            if route.name.is_empty() {
                issues.push(RouteIssue::EmptyName { index });
            } else if let Some(&first) = by_name.get(&route.name) {
                issues.push(RouteIssue::DuplicateName {
                    name: route.name.clone(),
                    first,
                    second: index,
                });
            } else {
                by_name.insert(route.name.clone(), index);
            }

            let pattern = match PathPattern::parse(&route.pattern) {
                Ok(pattern) => pattern,
                Err(source) => {
                    issues.push(RouteIssue::InvalidPattern { index, source });
                    continue;
                }
            };

            match by_shape.get(&pattern.shape()) {
                Some((first, existing)) => issues.push(RouteIssue::DuplicatePattern {
                    pattern: route.pattern.clone(),
                    existing: existing.clone(),
                    first: *first,
                    second: index,
                }),
                None => {
                    by_shape.insert(pattern.shape(), (index, route.pattern.clone()));
                }
            }

            entries.push(RouteEntry {
                pattern,
                handler: route.handler,
                name: route.name,
            });
        }

        if !issues.is_empty() {
            return Err(InvalidRouteTable { issues });
        }

        Ok(Self { entries, by_name })
    }

    /// Find the first route matching a normalized path.
    pub fn resolve(&self, path: &str) -> Result<RouteMatch<'_, H>, NotFound> {
        self.entries
            .iter()
            .find_map(|entry| {
                entry
                    .pattern
                    .matches(path)
                    .map(|params| RouteMatch { entry, params })
            })
            .ok_or_else(|| NotFound {
                path: path.to_string(),
            })
    }

    /// Build the normalized path for a named route.
    ///
    /// The result is accepted by [`RouteTable::resolve`] as-is.
    pub fn reverse(&self, name: &str, params: &[(&str, &str)]) -> Result<String, ReverseError> {
        let entry = self
            .get(name)
            .ok_or_else(|| ReverseError::NoSuchName(name.to_string()))?;
        entry.pattern.build(name, params)
    }

    /// Absolute URL path for a named route, for use in links.
    pub fn url_for(&self, name: &str, params: &[(&str, &str)]) -> Result<String, ReverseError> {
        self.reverse(name, params).map(|path| format!("/{}", path))
    }

    pub fn get(&self, name: &str) -> Option<&RouteEntry<H>> {
        self.by_name.get(name).map(|&index| &self.entries[index])
    }

    /// Routes in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &RouteEntry<H>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Strip the leading `/` from a request path and percent-decode it.
///
/// A path that does not decode to UTF-8 cannot match any route.
pub fn normalize_path(request_path: &str) -> Result<Cow<'_, str>, NotFound> {
    let path = request_path.strip_prefix('/').unwrap_or(request_path);
    percent_decode_str(path).decode_utf8().map_err(|_| NotFound {
        path: path.to_string(),
    })
}
