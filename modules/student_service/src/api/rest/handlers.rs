//! HTTP request handlers - thin layer that delegates to the domain service

use crate::domain::Service;
use super::{dto::*, error::{map_domain_error, Problem}};
use axum::{
    extract::{Path, Query},
    Extension, Json,
};
use serde::Deserialize;
use std::sync::Arc;

/// Query parameters for the rating-ordered listing
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingPageQuery {
    /// Zero-based page number
    #[serde(default)]
    pub page_number: u64,

    /// Page size, must be greater than zero
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

fn default_page_size() -> u64 {
    10
}

/// List students of a group by its title
pub async fn students_by_group(
    Extension(service): Extension<Arc<Service>>,
    Path(group_name): Path<String>,
) -> Result<Json<StudentsListResponse>, Problem> {
    let students = service
        .students_by_group(&group_name)
        .await
        .map_err(map_domain_error)?;

    tracing::info!(group = %group_name, count = students.len(), "students by group received");

    let items: Vec<StudentDto> = students.into_iter().map(|s| s.into()).collect();
    let total = items.len();

    Ok(Json(StudentsListResponse { items, total }))
}

/// One page of students ordered by rating descending
pub async fn students_by_rating(
    Extension(service): Extension<Arc<Service>>,
    Query(query): Query<RatingPageQuery>,
) -> Result<Json<StudentsListResponse>, Problem> {
    let students = service
        .students_by_rating(query.page_number, query.page_size)
        .await
        .map_err(map_domain_error)?;

    tracing::info!(
        page_number = query.page_number,
        page_size = query.page_size,
        count = students.len(),
        "students sorted by rating received"
    );

    let items: Vec<StudentDto> = students.into_iter().map(|s| s.into()).collect();
    let total = items.len();

    Ok(Json(StudentsListResponse { items, total }))
}

/// Top-rated students of every group
pub async fn best_per_group(
    Extension(service): Extension<Arc<Service>>,
) -> Result<Json<GroupStudentsResponse>, Problem> {
    let best = service.best_per_group().await.map_err(map_domain_error)?;

    tracing::info!(groups = best.len(), "best students per group received");

    let items: Vec<GroupStudentsDto> = best.into_iter().map(|entry| entry.into()).collect();
    let total = items.len();

    Ok(Json(GroupStudentsResponse { items, total }))
}

/// Students rated below their group's average
pub async fn below_average_per_group(
    Extension(service): Extension<Arc<Service>>,
) -> Result<Json<GroupStudentsResponse>, Problem> {
    let below = service
        .below_average_per_group()
        .await
        .map_err(map_domain_error)?;

    tracing::info!(groups = below.len(), "below-average students per group received");

    let items: Vec<GroupStudentsDto> = below.into_iter().map(|entry| entry.into()).collect();
    let total = items.len();

    Ok(Json(GroupStudentsResponse { items, total }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_page_query_defaults_to_first_page_of_ten() {
        let query: RatingPageQuery = serde_json::from_str("{}").unwrap();

        assert_eq!(query.page_number, 0);
        assert_eq!(query.page_size, 10);
    }

    #[test]
    fn rating_page_query_reads_camel_case_keys() {
        let query: RatingPageQuery =
            serde_json::from_str(r#"{"pageNumber": 2, "pageSize": 25}"#).unwrap();

        assert_eq!(query.page_number, 2);
        assert_eq!(query.page_size, 25);
    }
}
