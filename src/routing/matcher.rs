//! Path pattern parsing and matching.
//!
//! # Responsibilities
//! - Parse pattern strings (`"login"`, `"events/<int:id>"`) into segments
//! - Match a normalized request path against a compiled pattern
//! - Build a path back from a pattern and parameter values (reverse)
//!
//! # Design Decisions
//! - Patterns never start with `/`; request paths are normalized the same way
//! - Matching is segment-wise and exact: `"login"` does not match `"login/"`
//! - A parameter always spans one whole segment
//! - No regex: converters are plain character-class checks

use std::fmt;

use crate::routing::error::{PatternError, ReverseError};

/// Converter applied to a parameter segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Converter {
    /// Any non-empty segment.
    Str,
    /// ASCII digits.
    Int,
    /// ASCII letters, digits, hyphens and underscores.
    Slug,
}

impl Converter {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "str" => Some(Self::Str),
            "int" => Some(Self::Int),
            "slug" => Some(Self::Slug),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Str => "str",
            Self::Int => "int",
            Self::Slug => "slug",
        }
    }

    /// Returns true if `value` is a valid segment for this converter.
    pub fn accepts(self, value: &str) -> bool {
        if value.is_empty() || value.contains('/') {
            return false;
        }
        match self {
            Self::Str => true,
            Self::Int => value.bytes().all(|b| b.is_ascii_digit()),
            Self::Slug => value
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_'),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Segment {
    Literal(String),
    Param { name: String, converter: Converter },
}

/// Values captured from a matched path, in pattern order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParams {
    values: Vec<(String, String)>,
}

impl PathParams {
    /// Look up a captured value by parameter name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A compiled path pattern.
#[derive(Debug, Clone)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Parse a pattern string.
    pub fn parse(raw: &str) -> Result<Self, PatternError> {
        if raw.starts_with('/') {
            return Err(PatternError::LeadingSlash(raw.to_string()));
        }

        let mut segments = Vec::new();
        for part in raw.split('/') {
            segments.push(Self::parse_segment(raw, part)?);
        }

        let mut seen: Vec<&str> = Vec::new();
        for segment in &segments {
            if let Segment::Param { name, .. } = segment {
                if seen.contains(&name.as_str()) {
                    return Err(PatternError::DuplicateParameter {
                        pattern: raw.to_string(),
                        name: name.clone(),
                    });
                }
                seen.push(name);
            }
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    fn parse_segment(raw: &str, part: &str) -> Result<Segment, PatternError> {
        let Some(inner) = part.strip_prefix('<') else {
            if part.contains('<') || part.contains('>') {
                return Err(PatternError::MixedSegment {
                    pattern: raw.to_string(),
                    segment: part.to_string(),
                });
            }
            return Ok(Segment::Literal(part.to_string()));
        };

        let inner = inner
            .strip_suffix('>')
            .ok_or_else(|| PatternError::UnterminatedParameter(raw.to_string()))?;

        let (converter, name) = match inner.split_once(':') {
            Some((converter, name)) => {
                let converter =
                    Converter::from_name(converter).ok_or_else(|| PatternError::UnknownConverter {
                        pattern: raw.to_string(),
                        converter: converter.to_string(),
                    })?;
                (converter, name)
            }
            None => (Converter::Str, inner),
        };

        if !is_identifier(name) {
            return Err(PatternError::InvalidParameterName {
                pattern: raw.to_string(),
                name: name.to_string(),
            });
        }

        Ok(Segment::Param {
            name: name.to_string(),
            converter,
        })
    }

    /// The pattern as declared.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// True if the pattern has no parameter segments.
    pub fn is_literal(&self) -> bool {
        self.segments
            .iter()
            .all(|segment| matches!(segment, Segment::Literal(_)))
    }

    /// Parameter names in declaration order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Param { name, .. } => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Shape of the pattern with parameter names erased.
    ///
    /// Two patterns with the same shape match exactly the same paths.
    pub(crate) fn shape(&self) -> String {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Literal(text) => text.clone(),
                Segment::Param { converter, .. } => format!("<{}>", converter.name()),
            })
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Match a normalized path, returning captured parameters.
    pub fn matches(&self, path: &str) -> Option<PathParams> {
        if self.is_literal() {
            return (path == self.raw).then(PathParams::default);
        }

        let parts: Vec<&str> = path.split('/').collect();
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = PathParams::default();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Literal(text) if text == part => {}
                Segment::Literal(_) => return None,
                Segment::Param { name, converter } => {
                    if !converter.accepts(part) {
                        return None;
                    }
                    params.values.push((name.clone(), part.to_string()));
                }
            }
        }
        Some(params)
    }

    /// Build a normalized path from parameter values.
    ///
    /// Every pattern parameter must be supplied, no extra keys are allowed,
    /// and each value must satisfy its converter.
    pub fn build(&self, route: &str, params: &[(&str, &str)]) -> Result<String, ReverseError> {
        for (key, _) in params {
            if !self.param_names().any(|name| name == *key) {
                return Err(ReverseError::UnexpectedParameter {
                    name: route.to_string(),
                    param: key.to_string(),
                });
            }
        }

        let mut parts = Vec::with_capacity(self.segments.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => parts.push(text.as_str()),
                Segment::Param { name, converter } => {
                    let value = params
                        .iter()
                        .find(|(key, _)| key == name)
                        .map(|(_, value)| *value)
                        .ok_or_else(|| ReverseError::MissingParameter {
                            name: route.to_string(),
                            param: name.clone(),
                        })?;
                    if !converter.accepts(value) {
                        return Err(ReverseError::InvalidParameter {
                            name: route.to_string(),
                            param: name.clone(),
                            value: value.to_string(),
                        });
                    }
                    parts.push(value);
                }
            }
        }
        Ok(parts.join("/"))
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_pattern() {
        let pattern = PathPattern::parse("login").unwrap();
        assert!(pattern.is_literal());
        assert!(pattern.matches("login").is_some());
        assert!(pattern.matches("login/").is_none());
        assert!(pattern.matches("Login").is_none()); // Case sensitive
        assert!(pattern.matches("").is_none());
    }

    #[test]
    fn test_empty_pattern_matches_root_only() {
        let pattern = PathPattern::parse("").unwrap();
        assert!(pattern.matches("").unwrap().is_empty());
        assert!(pattern.matches("index").is_none());
    }

    #[test]
    fn test_param_capture() {
        let pattern = PathPattern::parse("events/<int:id>/tickets/<slug:tier>").unwrap();
        let params = pattern.matches("events/42/tickets/early-bird").unwrap();
        assert_eq!(params.get("id"), Some("42"));
        assert_eq!(params.get("tier"), Some("early-bird"));
        assert_eq!(params.len(), 2);

        assert!(pattern.matches("events/abc/tickets/vip").is_none());
        assert!(pattern.matches("events/42/tickets").is_none());
    }

    #[test]
    fn test_default_converter_is_str() {
        let pattern = PathPattern::parse("u/<name>").unwrap();
        assert_eq!(pattern.matches("u/ada lovelace").unwrap().get("name"), Some("ada lovelace"));
        assert!(pattern.matches("u/").is_none());
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            PathPattern::parse("/login"),
            Err(PatternError::LeadingSlash(_))
        ));
        assert!(matches!(
            PathPattern::parse("events/<int:id"),
            Err(PatternError::UnterminatedParameter(_))
        ));
        assert!(matches!(
            PathPattern::parse("events/<uuid:id>"),
            Err(PatternError::UnknownConverter { .. })
        ));
        assert!(matches!(
            PathPattern::parse("events/<int:1d>"),
            Err(PatternError::InvalidParameterName { .. })
        ));
        assert!(matches!(
            PathPattern::parse("<id>/<int:id>"),
            Err(PatternError::DuplicateParameter { .. })
        ));
        assert!(matches!(
            PathPattern::parse("event-<id>"),
            Err(PatternError::MixedSegment { .. })
        ));
    }

    #[test]
    fn test_shape_ignores_param_names() {
        let a = PathPattern::parse("events/<int:id>").unwrap();
        let b = PathPattern::parse("events/<int:pk>").unwrap();
        let c = PathPattern::parse("events/<slug:id>").unwrap();
        assert_eq!(a.shape(), b.shape());
        assert_ne!(a.shape(), c.shape());
    }

    #[test]
    fn test_build() {
        let pattern = PathPattern::parse("events/<int:id>").unwrap();
        assert_eq!(pattern.build("event", &[("id", "7")]).unwrap(), "events/7");

        assert!(matches!(
            pattern.build("event", &[]),
            Err(ReverseError::MissingParameter { .. })
        ));
        assert!(matches!(
            pattern.build("event", &[("id", "seven")]),
            Err(ReverseError::InvalidParameter { .. })
        ));
        assert!(matches!(
            pattern.build("event", &[("id", "7"), ("page", "2")]),
            Err(ReverseError::UnexpectedParameter { .. })
        ));
    }
}
