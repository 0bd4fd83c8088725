//! Domain service - the four read-only query operations

use crate::contract::{Group, Student, StudentsError};
use super::repository::{GroupRepository, StudentRepository};
use std::sync::Arc;

/// Students returned per group by the best-rating operation
const BEST_PER_GROUP: u64 = 3;

/// Domain service for the student registry
pub struct Service {
    group_repo: Arc<dyn GroupRepository>,
    student_repo: Arc<dyn StudentRepository>,
}

impl Service {
    /// Create a new service instance
    pub fn new(
        group_repo: Arc<dyn GroupRepository>,
        student_repo: Arc<dyn StudentRepository>,
    ) -> Self {
        Self {
            group_repo,
            student_repo,
        }
    }

    // ===== Listing Operations =====

    /// All students of the group with the given title, in storage order.
    ///
    /// Fails with `GroupNotFound` when no such group exists, and with
    /// `EmptyResult` when the group exists but has no students.
    pub async fn students_by_group(
        &self,
        group_title: &str,
    ) -> Result<Vec<Student>, StudentsError> {
        let exists = self
            .group_repo
            .exists_by_title(group_title)
            .await
            .map_err(log_internal)?;
        if !exists {
            return Err(StudentsError::GroupNotFound {
                title: group_title.to_string(),
            });
        }

        let students = self
            .student_repo
            .find_by_group_title(group_title)
            .await
            .map_err(log_internal)?;
        if students.is_empty() {
            return Err(StudentsError::EmptyResult {
                detail: format!("no students in group '{}'", group_title),
            });
        }

        Ok(students)
    }

    /// One page of students ordered by rating descending.
    ///
    /// Pages past the data fail with `EmptyResult`: callers cannot page to
    /// exhaustion by watching for an empty page.
    pub async fn students_by_rating(
        &self,
        page_number: u64,
        page_size: u64,
    ) -> Result<Vec<Student>, StudentsError> {
        if page_size == 0 {
            return Err(StudentsError::Validation {
                message: "pageSize must be greater than zero".to_string(),
            });
        }
        let offset = page_number
            .checked_mul(page_size)
            .ok_or_else(|| StudentsError::Validation {
                message: "pageNumber times pageSize overflows".to_string(),
            })?;

        let students = self
            .student_repo
            .list_by_rating_desc(offset, page_size)
            .await
            .map_err(log_internal)?;
        if students.is_empty() {
            return Err(StudentsError::EmptyResult {
                detail: format!("no students on page {}", page_number),
            });
        }

        Ok(students)
    }

    // ===== Per-Group Aggregations =====

    /// Top three students by rating for every group, one query per group.
    ///
    /// Groups with fewer than three students return all of them, groups
    /// with none an empty list. Fails with `EmptyResult` only when there
    /// are no groups at all.
    pub async fn best_per_group(&self) -> Result<Vec<(Group, Vec<Student>)>, StudentsError> {
        let groups = self.group_repo.list_all().await.map_err(log_internal)?;
        if groups.is_empty() {
            return Err(StudentsError::EmptyResult {
                detail: "no groups in the registry".to_string(),
            });
        }

        let mut best = Vec::with_capacity(groups.len());
        for group in groups {
            let students = self
                .student_repo
                .top_by_rating_in_group(group.id, BEST_PER_GROUP)
                .await
                .map_err(log_internal)?;
            best.push((group, students));
        }

        Ok(best)
    }

    /// Students rated strictly below their group's mean, for every group
    /// that has students.
    ///
    /// The mean comes from an SQL aggregate; a group without students has
    /// no mean and is skipped. Fails with `EmptyResult` when the resulting
    /// mapping is empty (no groups, or no group has any students).
    pub async fn below_average_per_group(
        &self,
    ) -> Result<Vec<(Group, Vec<Student>)>, StudentsError> {
        let groups = self.group_repo.list_all().await.map_err(log_internal)?;

        let mut below = Vec::with_capacity(groups.len());
        for group in groups {
            let Some(average) = self
                .student_repo
                .average_rating_in_group(group.id)
                .await
                .map_err(log_internal)?
            else {
                continue;
            };

            let students = self
                .student_repo
                .students_below_rating_in_group(group.id, average)
                .await
                .map_err(log_internal)?;
            below.push((group, students));
        }
        if below.is_empty() {
            return Err(StudentsError::EmptyResult {
                detail: "no groups with students".to_string(),
            });
        }

        Ok(below)
    }
}

/// Log a data-access failure and surface it as `Internal`.
///
/// An infrastructure error must never degrade into an empty-result
/// response.
fn log_internal(error: anyhow::Error) -> StudentsError {
    tracing::error!(error = %error, "data access failed");
    StudentsError::Internal
}
