// Allow dead code: API response structs have fields for completeness
#![allow(dead_code)]

use serde::{Deserialize, Serialize};

/// Profile payload returned by the `getUser` endpoint. Students and
/// professors share the same envelope; sections a deployment does not
/// populate simply come back absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "personalInfo")]
    pub personal_info: Option<PersonalInfo>,
    #[serde(rename = "birthInfo")]
    pub birth_info: Option<BirthInfo>,
    #[serde(rename = "previousEducation")]
    pub previous_education: Option<PreviousEducation>,
    #[serde(rename = "enrollmentInfo")]
    pub enrollment_info: Option<EnrollmentInfo>,
    pub contact: Option<ContactInfo>,
}

impl UserProfile {
    /// Display name assembled from the present name parts.
    pub fn full_name(&self) -> String {
        let Some(ref info) = self.personal_info else {
            return String::new();
        };
        [&info.first_name, &info.middle_name, &info.last_name]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalInfo {
    #[serde(rename = "firstName")]
    pub first_name: Option<String>,
    #[serde(rename = "middleName")]
    pub middle_name: Option<String>,
    #[serde(rename = "lastName")]
    pub last_name: Option<String>,
    #[serde(rename = "maidenName")]
    pub maiden_name: Option<String>,
    #[serde(rename = "dateOfBirth")]
    pub date_of_birth: Option<String>,
    pub gender: Option<String>,
    pub nationality: Option<String>,
    pub citizenship: Option<String>,
    pub scholarship: Option<String>,
    #[serde(rename = "currentPlan")]
    pub current_plan: Option<String>,
    #[serde(rename = "registryNumber")]
    pub registry_number: Option<String>,
    #[serde(rename = "studyGroup")]
    pub study_group: Option<String>,
    pub notes: Option<String>,
    /// Student index number, e.g. "201045".
    pub index: Option<String>,
    /// National identification number.
    pub embg: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BirthInfo {
    #[serde(rename = "placeOfBirth")]
    pub place_of_birth: Option<String>,
    #[serde(rename = "municipalityOfBirth")]
    pub municipality_of_birth: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviousEducation {
    #[serde(rename = "type")]
    pub education_type: Option<String>,
    pub profession: Option<String>,
    pub average: Option<serde_json::Value>,
    pub language: Option<String>,
    pub country: Option<String>,
    #[serde(rename = "previousUniversity")]
    pub previous_university: Option<String>,
    #[serde(rename = "previousFaculty")]
    pub previous_faculty: Option<String>,
    #[serde(rename = "previousStudyMode")]
    pub previous_study_mode: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrollmentInfo {
    /// The API sends this as either a string or a number.
    #[serde(rename = "enrollmentYear")]
    pub enrollment_year: Option<serde_json::Value>,
    pub status: Option<String>,
    pub cycle: Option<String>,
    pub program: Option<String>,
    pub quota: Option<String>,
    #[serde(rename = "secondaryEducationNumber")]
    pub secondary_education_number: Option<String>,
    #[serde(rename = "previousEducationCredits")]
    pub previous_education_credits: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(rename = "placeOfResidence")]
    pub place_of_residence: Option<String>,
    #[serde(rename = "municipalityOfResidence")]
    pub municipality_of_residence: Option<String>,
    pub country: Option<String>,
    pub address: Option<String>,
    #[serde(rename = "temporaryAddress")]
    pub temporary_address: Option<String>,
    pub phone: Option<String>,
    #[serde(rename = "mobilePhone")]
    pub mobile_phone: Option<String>,
    #[serde(rename = "passportNumber")]
    pub passport_number: Option<String>,
    #[serde(rename = "passportExpiryDate")]
    pub passport_expiry_date: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "microsoftEmail")]
    pub microsoft_email: Option<String>,
}
