//! # Domain Layer
//!
//! Pure policy logic: no I/O, no global state.
//!
//! ## Modules
//!
//! - `level` - The four-level lattice and name conversions
//! - `rules` - No-read-up and no-write-down predicates
//! - `subject` - Authenticated subject value
//! - `errors` - Domain error types

pub mod errors;
pub mod level;
pub mod rules;
pub mod subject;

pub use errors::{AuthError, UnknownLevel};
pub use level::{level_to_string, parse_level, try_parse_level, SecurityLevel};
pub use rules::{can_read, can_write, dominates};
pub use subject::Subject;
