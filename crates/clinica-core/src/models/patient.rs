//! Patient models.

use serde::{Deserialize, Serialize};

/// Patient gender.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Gender {
    /// Storage code for this gender.
    pub fn as_code(&self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
        }
    }

    /// Parse a storage code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "M" => Some(Gender::Male),
            "F" => Some(Gender::Female),
            _ => None,
        }
    }
}

/// A patient record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    /// Surrogate UUID, generated locally
    pub id: String,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Gender
    pub gender: Gender,
    /// Home address
    pub address: Option<String>,
    /// Phone number
    pub phone: Option<String>,
    /// Date of birth, free-form text (dd/mm/yy in legacy records)
    pub dob: Option<String>,
    /// Age in years
    pub age: u32,
    /// Creation timestamp
    pub created_at: String,
    /// Last update timestamp
    pub updated_at: String,
}

impl Patient {
    /// Create a new patient with required fields.
    pub fn new(first_name: String, last_name: String, gender: Gender) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            first_name,
            last_name,
            gender,
            address: None,
            phone: None,
            dob: None,
            age: 0,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Display name: first and last name separated by a single space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_patient() {
        let patient = Patient::new("Jane".into(), "Doe".into(), Gender::Female);
        assert_eq!(patient.first_name, "Jane");
        assert_eq!(patient.age, 0);
        assert_eq!(patient.id.len(), 36); // UUID format
    }

    #[test]
    fn test_full_name() {
        let patient = Patient::new("Jane".into(), "Doe".into(), Gender::Female);
        assert_eq!(patient.full_name(), "Jane Doe");
    }

    #[test]
    fn test_gender_codes() {
        assert_eq!(Gender::Male.as_code(), "M");
        assert_eq!(Gender::from_code("F"), Some(Gender::Female));
        assert_eq!(Gender::from_code("X"), None);
    }

    #[test]
    fn test_gender_serializes_as_code() {
        let json = serde_json::to_string(&Gender::Male).unwrap();
        assert_eq!(json, r#""M""#);
    }
}
