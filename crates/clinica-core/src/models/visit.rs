//! Visit models: the clinical encounter aggregate and its join records.

use serde::{Deserialize, Serialize};

/// Inpatient or outpatient visit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum VisitCategory {
    #[serde(rename = "IN")]
    Inpatient,
    #[serde(rename = "OUT")]
    Outpatient,
}

impl VisitCategory {
    /// Storage code for this category.
    pub fn as_code(&self) -> &'static str {
        match self {
            VisitCategory::Inpatient => "IN",
            VisitCategory::Outpatient => "OUT",
        }
    }

    /// Parse a storage code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "IN" => Some(VisitCategory::Inpatient),
            "OUT" => Some(VisitCategory::Outpatient),
            _ => None,
        }
    }
}

/// One clinical encounter between a patient and an attending staff member.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Visit {
    /// Surrogate UUID, generated locally
    pub id: String,
    /// The patient seen
    pub patient_id: String,
    /// The attending staff member
    pub attendant_id: String,
    /// Inpatient or outpatient
    pub category: VisitCategory,
    /// Diagnosis text
    pub diagnosis: String,
    /// Whether the visit included a consultation
    pub consultation: bool,
    /// Set once at creation; updates never touch it
    pub visit_date: String,
    /// Creation timestamp
    pub created_at: String,
    /// Last update timestamp
    pub updated_at: String,
}

impl Visit {
    /// Create a new visit. The visit date is stamped here and is
    /// immutable thereafter.
    pub fn new(
        patient_id: String,
        attendant_id: String,
        category: VisitCategory,
        diagnosis: String,
    ) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            patient_id,
            attendant_id,
            category,
            diagnosis,
            consultation: true,
            visit_date: now.clone(),
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

/// Join record: a lab test ordered on a visit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VisitTest {
    pub id: String,
    pub visit_id: String,
    pub test_id: String,
    pub created_at: String,
}

impl VisitTest {
    /// Create a new lab order for a visit.
    pub fn new(visit_id: String, test_id: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            visit_id,
            test_id,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Join record: a drug dispensed on a visit, with the quantity given out.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VisitItem {
    pub id: String,
    pub visit_id: String,
    pub item_id: String,
    /// Quantity dispensed to the patient
    pub quantity: i64,
    pub created_at: String,
}

impl VisitItem {
    /// Create a new dispense record for a visit.
    pub fn new(visit_id: String, item_id: String, quantity: i64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            visit_id,
            item_id,
            quantity,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_visit_defaults() {
        let visit = Visit::new(
            "patient-1".into(),
            "staff-1".into(),
            VisitCategory::Outpatient,
            "seasonal flu".into(),
        );
        assert!(visit.consultation);
        assert_eq!(visit.visit_date, visit.created_at);
        assert_eq!(visit.id.len(), 36);
    }

    #[test]
    fn test_category_codes() {
        assert_eq!(VisitCategory::Inpatient.as_code(), "IN");
        assert_eq!(VisitCategory::from_code("OUT"), Some(VisitCategory::Outpatient));
        assert_eq!(VisitCategory::from_code("ER"), None);
    }
}
