//! Contract models for the student registry
//!
//! These models are transport-agnostic and used across the domain and API
//! layers. NO serde derives - these are pure domain types.

/// Administrative cohort of students
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// Surrogate id
    pub id: i32,
    /// Group title (2-20 chars, enforced at the boundary)
    pub title: String,
    /// Assigned room (>= 1)
    pub room: i32,
}

/// Per-student record holding a single performance rating
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordBook {
    /// Surrogate id
    pub id: i32,
    /// Performance rating (10-100, enforced at the boundary)
    pub rating: i32,
}

/// Student with its owned record book and optional group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    /// Surrogate id
    pub id: i32,
    /// Student name (2-50 chars, enforced at the boundary)
    pub name: String,
    /// Student age (16-62, enforced at the boundary)
    pub age: i32,
    /// Every student owns exactly one record book
    pub record_book: RecordBook,
    /// A student belongs to at most one group
    pub group: Option<Group>,
}
