//! Repository traits for data access
//!
//! These traits define the read-only query shapes the service is built on.
//! Implementations are in infra/storage/repositories.rs

use crate::contract::{Group, Student};
use anyhow::Result;
use async_trait::async_trait;

/// Repository for groups
#[async_trait]
pub trait GroupRepository: Send + Sync {
    /// Check whether a group with the given title exists (count > 0)
    async fn exists_by_title(&self, title: &str) -> Result<bool>;

    /// List all groups
    async fn list_all(&self) -> Result<Vec<Group>>;
}

/// Repository for students
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Students joined to their group by group title, in storage order
    async fn find_by_group_title(&self, title: &str) -> Result<Vec<Student>>;

    /// One window of all students ordered by record book rating descending.
    ///
    /// Students tied on rating come back in storage order; that order is
    /// not guaranteed.
    async fn list_by_rating_desc(&self, offset: u64, limit: u64) -> Result<Vec<Student>>;

    /// Top `limit` students of a group, ordered by rating descending
    async fn top_by_rating_in_group(&self, group_id: i32, limit: u64) -> Result<Vec<Student>>;

    /// Arithmetic mean rating of a group's students; `None` when the group
    /// has no students (SQL AVG over the empty set)
    async fn average_rating_in_group(&self, group_id: i32) -> Result<Option<f64>>;

    /// Students of a group rated strictly below `threshold`, unordered
    async fn students_below_rating_in_group(
        &self,
        group_id: i32,
        threshold: f64,
    ) -> Result<Vec<Student>>;
}
