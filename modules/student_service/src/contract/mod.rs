//! Contract layer - public API of the student registry module
//!
//! This layer contains transport-agnostic models and errors.
//! NO serde derives on models - these are pure domain types.

pub mod error;
pub mod model;

pub use error::StudentsError;
pub use model::{Group, RecordBook, Student};
