//! Read-only student storage injected into the router.
//!
//! The in-memory implementation is filled once at startup and never mutated,
//! so it needs no locking. Other backends only have to implement
//! [`StudentRepository`].

use async_trait::async_trait;
use roster_core::Student;

/// Read access to the student roster.
///
/// Implementations must be `Send + Sync` to allow use across async tasks.
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Return every student, in insertion order.
    async fn list(&self) -> Vec<Student>;

    /// Return the first student whose id equals `id`, if any.
    async fn get(&self, id: i64) -> Option<Student>;
}

/// Fixed, in-process roster.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStudentRepository {
    students: Vec<Student>,
}

impl InMemoryStudentRepository {
    /// Create a repository holding `students` in the given order.
    #[must_use]
    pub fn new(students: Vec<Student>) -> Self {
        Self { students }
    }

    /// Number of stored students.
    #[must_use]
    pub fn len(&self) -> usize {
        self.students.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

#[async_trait]
impl StudentRepository for InMemoryStudentRepository {
    async fn list(&self) -> Vec<Student> {
        self.students.clone()
    }

    async fn get(&self, id: i64) -> Option<Student> {
        // Linear scan: scan order decides between duplicate ids.
        self.students.iter().find(|s| s.id() == id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::{sample_students, Course};

    fn seeded() -> InMemoryStudentRepository {
        match sample_students() {
            Ok(s) => InMemoryStudentRepository::new(s),
            Err(e) => panic!("seed data invalid: {e}"),
        }
    }

    fn student(id: i64, name: &str) -> Student {
        match Student::new(id, name, 30, vec![Course::new(201, "Logic", 2)]) {
            Ok(s) => s,
            Err(e) => panic!("valid student rejected: {e}"),
        }
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let repo = seeded();
        let names: Vec<String> = repo.list().await.iter().map(|s| s.name().to_owned()).collect();
        assert_eq!(names, ["Alice", "Bob"]);
        assert_eq!(repo.len(), 2);
    }

    #[tokio::test]
    async fn get_unknown_id_returns_none() {
        let repo = seeded();
        assert!(repo.get(999).await.is_none(), "unknown id should not be found");
        assert!(InMemoryStudentRepository::default().get(1).await.is_none());
    }

    #[tokio::test]
    async fn get_returns_first_match_for_duplicate_ids() {
        let repo = InMemoryStudentRepository::new(vec![student(7, "First"), student(7, "Second")]);
        let found = repo.get(7).await.map(|s| s.name().to_owned());
        assert_eq!(found.as_deref(), Some("First"));
    }
}
