//! # Dominance Rules
//!
//! The two Bell-LaPadula properties as pure functions of two levels.
//!
//! | Rule | Holds when |
//! |------|------------|
//! | Simple security (no read up) | `subject >= object` |
//! | *-property (no write down) | `subject <= object` |
//!
//! "Write" covers create, update, clear and remove: every mutation is a
//! write at the object's level, never at the subject's.

use super::level::SecurityLevel;

/// True if `high` dominates `low` in the lattice.
#[inline]
pub fn dominates(high: SecurityLevel, low: SecurityLevel) -> bool {
    high >= low
}

/// No read up: a subject may read an object at or below its clearance.
#[inline]
pub fn can_read(subject_level: SecurityLevel, object_level: SecurityLevel) -> bool {
    dominates(subject_level, object_level)
}

/// No write down: a subject may write an object at or above its clearance.
#[inline]
pub fn can_write(subject_level: SecurityLevel, object_level: SecurityLevel) -> bool {
    dominates(object_level, subject_level)
}
