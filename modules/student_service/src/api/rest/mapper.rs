//! Mapper implementations for converting contract models to REST DTOs
//!
//! All conversions are flat copies; no fields are computed on the way out.

use super::dto::*;
use crate::contract;

// ===== Student conversions =====

impl From<contract::Student> for StudentDto {
    fn from(student: contract::Student) -> Self {
        Self {
            id: student.id,
            name: student.name,
            age: student.age,
            record_book: student.record_book.into(),
            group: student.group.map(|g| g.into()),
        }
    }
}

impl From<contract::RecordBook> for RecordBookDto {
    fn from(record_book: contract::RecordBook) -> Self {
        Self {
            id: record_book.id,
            rating: record_book.rating,
        }
    }
}

// ===== Group conversions =====

impl From<contract::Group> for GroupDto {
    fn from(group: contract::Group) -> Self {
        Self {
            id: group.id,
            title: group.title,
            room: group.room,
        }
    }
}

// ===== Per-group mapping conversions =====

impl From<(contract::Group, Vec<contract::Student>)> for GroupStudentsDto {
    fn from((group, students): (contract::Group, Vec<contract::Student>)) -> Self {
        Self {
            group: group.into(),
            students: students.into_iter().map(|s| s.into()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::{Group, RecordBook, Student};

    fn sample_student() -> Student {
        Student {
            id: 7,
            name: "Alice Reynolds".to_string(),
            age: 19,
            record_book: RecordBook { id: 107, rating: 87 },
            group: Some(Group {
                id: 1,
                title: "CS-101".to_string(),
                room: 204,
            }),
        }
    }

    #[test]
    fn student_dto_serializes_with_camel_case_record_book() {
        let dto: StudentDto = sample_student().into();
        let json = serde_json::to_value(&dto).unwrap();

        assert_eq!(json["id"], 7);
        assert_eq!(json["name"], "Alice Reynolds");
        assert_eq!(json["age"], 19);
        assert_eq!(json["recordBook"]["id"], 107);
        assert_eq!(json["recordBook"]["rating"], 87);
        assert_eq!(json["group"]["title"], "CS-101");
        assert_eq!(json["group"]["room"], 204);
    }

    #[test]
    fn student_dto_serializes_missing_group_as_null() {
        let mut student = sample_student();
        student.group = None;

        let dto: StudentDto = student.into();
        let json = serde_json::to_value(&dto).unwrap();

        assert!(json["group"].is_null());
    }

    #[test]
    fn group_students_dto_keeps_student_order() {
        let group = Group {
            id: 1,
            title: "CS-101".to_string(),
            room: 204,
        };
        let students: Vec<Student> = (0..3)
            .map(|i| {
                let mut student = sample_student();
                student.id = i;
                student.record_book.rating = 90 - i * 10;
                student
            })
            .collect();

        let dto: GroupStudentsDto = (group, students).into();

        let ids: Vec<i32> = dto.students.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }
}
