//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models

use crate::contract::{Group, RecordBook, Student};
use super::entity;
use anyhow::{bail, Result};

// ===== Group Conversions =====

impl From<entity::grooup::Model> for Group {
    fn from(entity: entity::grooup::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            room: entity.room,
        }
    }
}

// ===== Record Book Conversions =====

impl From<entity::record_book::Model> for RecordBook {
    fn from(entity: entity::record_book::Model) -> Self {
        Self {
            id: entity.id,
            rating: entity.rating,
        }
    }
}

// ===== Student Assembly =====

/// Build a contract student from its row, the joined record book and the
/// resolved group.
///
/// Every student owns exactly one record book; a row without one is a data
/// integrity error, not an empty result.
pub(crate) fn student_from_parts(
    student: entity::Model,
    record_book: Option<entity::record_book::Model>,
    group: Option<Group>,
) -> Result<Student> {
    let Some(record_book) = record_book else {
        bail!("student {} has no record book", student.id);
    };

    Ok(Student {
        id: student.id,
        name: student.name,
        age: student.age,
        record_book: record_book.into(),
        group,
    })
}
