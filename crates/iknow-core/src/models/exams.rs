// Allow dead code: API response structs have fields for completeness
#![allow(dead_code)]

use serde::{Deserialize, Serialize};

/// Total ECTS credits in a standard four-year programme.
const PROGRAMME_TOTAL_CREDITS: i32 = 240;

/// Total number of exams in a standard four-year programme.
const PROGRAMME_TOTAL_EXAMS: usize = 40;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassedSubjectsResponse {
    #[serde(rename = "passedSubjects", default)]
    pub passed_subjects: Vec<PassedSubject>,
}

/// One passed exam as returned by the `getPassedSubjects` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassedSubject {
    pub id: i64,
    #[serde(rename = "subjectId")]
    pub subject_id: i64,
    pub code: String,
    pub subject: String,
    pub credits: i32,
    pub grade: i32,
    #[serde(rename = "gradeText", default)]
    pub grade_text: Option<String>,
    /// Exam date as a display string, DD.MM.YYYY.
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub semester: Option<String>,
    #[serde(default)]
    pub professor: Option<String>,
}

/// Totals derived from the passed-subject list for the exam overview.
#[derive(Debug, Clone, PartialEq)]
pub struct ExamSummary {
    /// Mean grade rounded to two decimals; 0 when nothing is passed.
    pub average: f64,
    pub credits_earned: i32,
    pub passed: usize,
    pub remaining: usize,
}

impl ExamSummary {
    pub fn from_subjects(subjects: &[PassedSubject]) -> Self {
        let passed = subjects.len();
        let credits_earned = subjects.iter().map(|s| s.credits).sum();
        let average = if passed > 0 {
            let sum: i32 = subjects.iter().map(|s| s.grade).sum();
            let mean = f64::from(sum) / passed as f64;
            (mean * 100.0).round() / 100.0
        } else {
            0.0
        };

        Self {
            average,
            credits_earned,
            passed,
            remaining: PROGRAMME_TOTAL_EXAMS.saturating_sub(passed),
        }
    }

    pub const fn total_credits() -> i32 {
        PROGRAMME_TOTAL_CREDITS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn subject(grade: i32, credits: i32) -> PassedSubject {
        PassedSubject {
            id: 1,
            subject_id: 10,
            code: "F18L3W001".to_string(),
            subject: "Web Programming".to_string(),
            credits,
            grade,
            grade_text: None,
            date: Some("15.06.2024".to_string()),
            semester: Some("6".to_string()),
            professor: None,
        }
    }

    #[test]
    fn test_parse_passed_subjects_response() {
        let json = r#"{"passedSubjects":[{
            "id": 1,
            "subjectId": 301,
            "code": "F18L3W001",
            "subject": "Веб програмирање",
            "credits": 6,
            "grade": 9,
            "gradeText": "девет",
            "date": "15.06.2024",
            "semester": "6",
            "professor": "Иван Иванов"
        }]}"#;

        let parsed: PassedSubjectsResponse =
            serde_json::from_str(json).expect("Failed to parse passed subjects JSON");
        assert_eq!(parsed.passed_subjects.len(), 1);
        assert_eq!(parsed.passed_subjects[0].grade, 9);
        assert_eq!(parsed.passed_subjects[0].subject, "Веб програмирање");
    }

    #[test]
    fn test_parse_missing_list_defaults_to_empty() {
        let parsed: PassedSubjectsResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.passed_subjects.is_empty());
    }

    #[test]
    fn test_summary_totals() {
        let subjects = vec![subject(10, 6), subject(7, 6), subject(8, 5)];
        let summary = ExamSummary::from_subjects(&subjects);
        assert_eq!(summary.passed, 3);
        assert_eq!(summary.credits_earned, 17);
        assert_eq!(summary.average, 8.33);
        assert_eq!(summary.remaining, 37);
    }

    #[test]
    fn test_summary_of_empty_list() {
        let summary = ExamSummary::from_subjects(&[]);
        assert_eq!(summary.average, 0.0);
        assert_eq!(summary.credits_earned, 0);
        assert_eq!(summary.remaining, PROGRAMME_TOTAL_EXAMS);
    }
}
