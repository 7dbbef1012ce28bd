//! Staff models.

use serde::{Deserialize, Serialize};

/// Staff designation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Designation {
    #[serde(rename = "Doctor")]
    Doctor,
    #[serde(rename = "Nurse")]
    Nurse,
    #[serde(rename = "Lab Technician")]
    LabTechnician,
    #[serde(rename = "Receptionist")]
    Receptionist,
}

impl Designation {
    /// Storage code for this designation.
    pub fn as_code(&self) -> &'static str {
        match self {
            Designation::Doctor => "Doctor",
            Designation::Nurse => "Nurse",
            Designation::LabTechnician => "Lab Technician",
            Designation::Receptionist => "Receptionist",
        }
    }

    /// Parse a storage code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Doctor" => Some(Designation::Doctor),
            "Nurse" => Some(Designation::Nurse),
            "Lab Technician" => Some(Designation::LabTechnician),
            "Receptionist" => Some(Designation::Receptionist),
            _ => None,
        }
    }
}

/// A staff member record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Staff {
    /// Surrogate UUID, generated locally
    pub id: String,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Phone number
    pub phone: String,
    /// Alternate phone number
    pub alternate_phone: Option<String>,
    /// Email address
    pub email: Option<String>,
    /// Designation
    pub designation: Designation,
    /// Creation timestamp
    pub created_at: String,
    /// Last update timestamp
    pub updated_at: String,
}

impl Staff {
    /// Create a new staff member with required fields.
    pub fn new(
        first_name: String,
        last_name: String,
        phone: String,
        designation: Designation,
    ) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            first_name,
            last_name,
            phone,
            alternate_phone: None,
            email: None,
            designation,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Display name: first and last name separated by a single space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
