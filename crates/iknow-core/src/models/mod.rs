//! Data models for iKnow entities.
//!
//! This module contains the data structures returned by the API:
//!
//! - `UserProfile` and its sections: personal, birth, previous-education,
//!   enrollment, and contact data
//! - `PassedSubject`: a graded exam row, plus the derived `ExamSummary`

pub mod exams;
pub mod profile;

pub use exams::{ExamSummary, PassedSubject, PassedSubjectsResponse};
pub use profile::{
    BirthInfo, ContactInfo, EnrollmentInfo, PersonalInfo, PreviousEducation, UserProfile,
};
