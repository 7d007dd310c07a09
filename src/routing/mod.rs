//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request path
//!     → normalize_path (strip leading '/', percent-decode)
//!     → router.rs (ordered scan, first match wins)
//!     → matcher.rs (segment-wise pattern match, parameter capture)
//!     → Return: RouteMatch or NotFound
//!
//! Route compilation (at startup):
//!     Route<H>[] (urlpatterns)
//!     → Parse patterns
//!     → Check name and pattern uniqueness
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - No regex in the hot path
//! - Deterministic: same input always matches same route
//! - Misconfiguration is fatal at construction, never at request time

pub mod error;
pub mod matcher;
pub mod router;

pub use error::{InvalidRouteTable, NotFound, PatternError, ReverseError, RouteIssue};
pub use matcher::{Converter, PathParams, PathPattern};
pub use router::{normalize_path, path, Route, RouteEntry, RouteMatch, RouteTable};
