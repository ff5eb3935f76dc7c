//! In-memory grade store backing the professor demo endpoints.
//!
//! The store is an explicitly constructed value: callers create a
//! `Gradebook` (usually via `with_demo_data`) and pass it by reference to
//! whatever owns the request lifecycle. Grades use the Macedonian 5-10
//! scale, with 0 meaning "not graded yet".

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lowest passing grade on the 5-10 scale.
const MIN_GRADE: i32 = 5;

/// Highest grade on the 5-10 scale.
const MAX_GRADE: i32 = 10;

/// Sentinel grade meaning the student has not been graded yet.
const UNGRADED: i32 = 0;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GradebookError {
    #[error("Subject not found")]
    SubjectNotFound,

    #[error("Student not found in subject")]
    StudentNotFound,

    #[error("Grade must be between 5 and 10")]
    GradeOutOfRange,

    #[error("Grade already exists; use edit")]
    GradeAlreadySet,
}

/// A student enrolled in a subject, with their current grade.
///
/// Field names match the demo wire format; student ids travel as strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrolledStudent {
    #[serde(rename = "Id")]
    pub id: Option<String>,
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "Grade")]
    pub grade: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectRoster {
    #[serde(rename = "Id")]
    pub id: Option<i64>,
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "Users")]
    pub students: Vec<EnrolledStudent>,
}

/// A requested grade mutation, as posted by the professor UI.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GradeChange {
    #[serde(rename = "StudentId")]
    pub student_id: i64,
    #[serde(rename = "SubjectId")]
    pub subject_id: i64,
    pub grade: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeAction {
    Add,
    Edit,
    Remove,
}

/// Snapshot of the affected subject and student after a successful
/// mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeReceipt {
    pub subject_id: i64,
    pub subject_name: Option<String>,
    pub student_id: i64,
    pub student_name: Option<String>,
    pub grade: i32,
}

#[derive(Debug, Clone)]
pub struct Gradebook {
    subjects: Vec<SubjectRoster>,
}

fn parse_student_id(id: Option<&str>) -> Option<i64> {
    id?.trim().parse().ok()
}

impl Gradebook {
    pub fn new(subjects: Vec<SubjectRoster>) -> Self {
        Self { subjects }
    }

    /// The demo roster served to the professor pages.
    pub fn with_demo_data() -> Self {
        let subject = |id: i64, name: &str, students: Vec<(&str, &str, i32)>| SubjectRoster {
            id: Some(id),
            name: Some(name.to_string()),
            students: students
                .into_iter()
                .map(|(id, name, grade)| EnrolledStudent {
                    id: Some(id.to_string()),
                    name: Some(name.to_string()),
                    grade,
                })
                .collect(),
        };

        Self::new(vec![
            subject(
                101,
                "Web Programming",
                vec![
                    ("20001", "Ana Petrovska", 0),
                    ("20002", "Marko Trajkov", 8),
                    ("20003", "Elena Stojanova", 0),
                ],
            ),
            subject(
                102,
                "Databases",
                vec![
                    ("20001", "Ana Petrovska", 0),
                    ("20004", "Nikola Iliev", 9),
                    ("20005", "Sara Dimitrova", 7),
                ],
            ),
            subject(
                103,
                "Algorithms",
                vec![("20002", "Marko Trajkov", 0), ("20006", "Ivana Kostova", 10)],
            ),
        ])
    }

    pub fn subjects(&self) -> &[SubjectRoster] {
        &self.subjects
    }

    /// Apply a grade mutation.
    ///
    /// `Remove` resets the entry to ungraded without validating the posted
    /// grade value. `Add` and `Edit` both require a grade on the 5-10
    /// scale; `Add` additionally refuses to overwrite an existing grade.
    pub fn set_grade(
        &mut self,
        change: GradeChange,
        action: GradeAction,
    ) -> Result<GradeReceipt, GradebookError> {
        let subject = self
            .subjects
            .iter_mut()
            .find(|s| s.id == Some(change.subject_id))
            .ok_or(GradebookError::SubjectNotFound)?;
        let subject_name = subject.name.clone();

        let student = subject
            .students
            .iter_mut()
            .find(|u| parse_student_id(u.id.as_deref()) == Some(change.student_id))
            .ok_or(GradebookError::StudentNotFound)?;

        match action {
            GradeAction::Remove => student.grade = UNGRADED,
            GradeAction::Add | GradeAction::Edit => {
                if change.grade < MIN_GRADE || change.grade > MAX_GRADE {
                    return Err(GradebookError::GradeOutOfRange);
                }
                if action == GradeAction::Add && student.grade > UNGRADED {
                    return Err(GradebookError::GradeAlreadySet);
                }
                student.grade = change.grade;
            }
        }

        Ok(GradeReceipt {
            subject_id: change.subject_id,
            subject_name,
            student_id: change.student_id,
            student_name: student.name.clone(),
            grade: student.grade,
        })
    }
}

impl Default for Gradebook {
    fn default() -> Self {
        Self::with_demo_data()
    }
}

// ============================================================================
// Tests
// ============================================================================
