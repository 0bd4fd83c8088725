//! REST DTOs with serde derives for HTTP API

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ===== Student DTOs =====

/// Student response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentDto {
    pub id: i32,

    /// Student name
    #[schema(example = "Alice Reynolds")]
    pub name: String,

    /// Student age
    #[schema(example = 19)]
    pub age: i32,

    /// Owned record book
    pub record_book: RecordBookDto,

    /// Owning group, `null` for unassigned students
    pub group: Option<GroupDto>,
}

/// Record book response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecordBookDto {
    pub id: i32,

    /// Performance rating
    #[schema(example = 87)]
    pub rating: i32,
}

/// Group response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GroupDto {
    pub id: i32,

    /// Group title
    #[schema(example = "CS-101")]
    pub title: String,

    /// Assigned room
    #[schema(example = 204)]
    pub room: i32,
}

// ===== List Response DTOs =====

/// List of students
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StudentsListResponse {
    /// List of students
    pub items: Vec<StudentDto>,

    /// Total count
    pub total: usize,
}

/// Students of a single group
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GroupStudentsDto {
    /// The group
    pub group: GroupDto,

    /// Its students
    pub students: Vec<StudentDto>,
}

/// Per-group student mapping
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GroupStudentsResponse {
    /// One entry per group
    pub items: Vec<GroupStudentsDto>,

    /// Total count of groups
    pub total: usize,
}

// Note: Conversion implementations live in mapper.rs
