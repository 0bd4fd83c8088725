//! Student Registry Module
//!
//! Read-only query service over students, groups and record books.
//! Exposes four lookup/aggregation operations: group-filtered listing,
//! rating-ordered paginated listing, best-rated students per group and
//! below-average-rating students per group.

// Public exports
pub mod contract;
pub use contract::{Group, RecordBook, Student, StudentsError};

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
