//! Common test utilities: a shared roster fixture and in-memory repositories

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;
use student_service::contract::{Group, RecordBook, Student};
use student_service::domain::{GroupRepository, StudentRepository};

/// Realistic roster for testing
/// CS-101 and MATH-202 have students, PHYS-303 is empty
#[derive(Debug, Clone)]
pub struct TestRoster {
    pub cs101: Group,
    pub math202: Group,
    pub phys303: Group,
    pub students: Vec<Student>,
}

impl TestRoster {
    /// Create the roster:
    /// CS-101 (room 204): Alice 90, Bob 70, Carol 50 - mean 70
    /// MATH-202 (room 101): Dana 88, Evan 76, Fiona 64, Gleb 52 - mean 70
    /// PHYS-303 (room 310): no students
    pub fn new() -> Self {
        let cs101 = Group {
            id: 1,
            title: "CS-101".to_string(),
            room: 204,
        };
        let math202 = Group {
            id: 2,
            title: "MATH-202".to_string(),
            room: 101,
        };
        let phys303 = Group {
            id: 3,
            title: "PHYS-303".to_string(),
            room: 310,
        };

        let students = vec![
            student(1, "Alice Reynolds", 19, 90, Some(&cs101)),
            student(2, "Bob Tanner", 20, 70, Some(&cs101)),
            student(3, "Carol Diaz", 18, 50, Some(&cs101)),
            student(4, "Dana Orlova", 21, 88, Some(&math202)),
            student(5, "Evan Moss", 22, 76, Some(&math202)),
            student(6, "Fiona Clarke", 19, 64, Some(&math202)),
            student(7, "Gleb Sorokin", 23, 52, Some(&math202)),
        ];

        Self {
            cs101,
            math202,
            phys303,
            students,
        }
    }

    /// Print the roster structure
    pub fn print_structure(&self) {
        println!("\n📊 Roster Structure:");
        for group in [&self.cs101, &self.math202, &self.phys303] {
            println!("   {} (room {}):", group.title, group.room);
            let mut empty = true;
            for member in self
                .students
                .iter()
                .filter(|s| s.group.as_ref() == Some(group))
            {
                println!("      {} (rating {})", member.name, member.record_book.rating);
                empty = false;
            }
            if empty {
                println!("      (no students)");
            }
        }
    }
}

impl Default for TestRoster {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a student with a fresh record book
pub fn student(id: i32, name: &str, age: i32, rating: i32, group: Option<&Group>) -> Student {
    Student {
        id,
        name: name.to_string(),
        age,
        record_book: RecordBook {
            id: 100 + id,
            rating,
        },
        group: group.cloned(),
    }
}

/// In-memory repositories over a roster, kept in storage (insertion) order.
/// Can be switched into a failing mode that simulates a lost connection.
#[derive(Clone, Default)]
pub struct MockRegistry {
    groups: Arc<RwLock<Vec<Group>>>,
    students: Arc<RwLock<Vec<Student>>>,
    failing: Arc<RwLock<bool>>,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_roster(roster: &TestRoster) -> Self {
        let registry = Self::new();
        for group in [&roster.cs101, &roster.math202, &roster.phys303] {
            registry.add_group(group.clone());
        }
        for member in &roster.students {
            registry.add_student(member.clone());
        }
        registry
    }

    pub fn add_group(&self, group: Group) {
        self.groups.write().push(group);
    }

    pub fn add_student(&self, student: Student) {
        self.students.write().push(student);
    }

    /// Switch the registry into (or out of) failing mode
    pub fn set_failing(&self, failing: bool) {
        *self.failing.write() = failing;
    }

    fn guard(&self) -> Result<()> {
        if *self.failing.read() {
            return Err(anyhow!("simulated connection loss"));
        }
        Ok(())
    }

    fn students_of_group(&self, group_id: i32) -> Vec<Student> {
        self.students
            .read()
            .iter()
            .filter(|s| s.group.as_ref().is_some_and(|g| g.id == group_id))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl GroupRepository for MockRegistry {
    async fn exists_by_title(&self, title: &str) -> Result<bool> {
        self.guard()?;
        Ok(self.groups.read().iter().any(|g| g.title == title))
    }

    async fn list_all(&self) -> Result<Vec<Group>> {
        self.guard()?;
        Ok(self.groups.read().clone())
    }
}

#[async_trait]
impl StudentRepository for MockRegistry {
    async fn find_by_group_title(&self, title: &str) -> Result<Vec<Student>> {
        self.guard()?;
        Ok(self
            .students
            .read()
            .iter()
            .filter(|s| s.group.as_ref().is_some_and(|g| g.title == title))
            .cloned()
            .collect())
    }

    async fn list_by_rating_desc(&self, offset: u64, limit: u64) -> Result<Vec<Student>> {
        self.guard()?;
        let mut students = self.students.read().clone();
        // Stable sort keeps rating ties in storage order
        students.sort_by(|a, b| b.record_book.rating.cmp(&a.record_book.rating));
        Ok(students
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn top_by_rating_in_group(&self, group_id: i32, limit: u64) -> Result<Vec<Student>> {
        self.guard()?;
        let mut students = self.students_of_group(group_id);
        students.sort_by(|a, b| b.record_book.rating.cmp(&a.record_book.rating));
        students.truncate(limit as usize);
        Ok(students)
    }

    async fn average_rating_in_group(&self, group_id: i32) -> Result<Option<f64>> {
        self.guard()?;
        let ratings: Vec<f64> = self
            .students_of_group(group_id)
            .iter()
            .map(|s| f64::from(s.record_book.rating))
            .collect();
        if ratings.is_empty() {
            return Ok(None);
        }
        Ok(Some(ratings.iter().sum::<f64>() / ratings.len() as f64))
    }

    async fn students_below_rating_in_group(
        &self,
        group_id: i32,
        threshold: f64,
    ) -> Result<Vec<Student>> {
        self.guard()?;
        Ok(self
            .students_of_group(group_id)
            .into_iter()
            .filter(|s| f64::from(s.record_book.rating) < threshold)
            .collect())
    }
}
