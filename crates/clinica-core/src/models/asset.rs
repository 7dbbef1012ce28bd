//! Fixed-asset inventory models.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Fixed-asset category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AssetCategory {
    #[serde(rename = "MEDICAL")]
    Medical,
    #[serde(rename = "ELECTRO")]
    ElectroMechanical,
    #[serde(rename = "FURNITURE")]
    Furniture,
}

impl AssetCategory {
    /// Storage code for this category.
    pub fn as_code(&self) -> &'static str {
        match self {
            AssetCategory::Medical => "MEDICAL",
            AssetCategory::ElectroMechanical => "ELECTRO",
            AssetCategory::Furniture => "FURNITURE",
        }
    }

    /// Parse a storage code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "MEDICAL" => Some(AssetCategory::Medical),
            "ELECTRO" => Some(AssetCategory::ElectroMechanical),
            "FURNITURE" => Some(AssetCategory::Furniture),
            _ => None,
        }
    }
}

/// Functional condition of an asset.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AssetCondition {
    #[serde(rename = "NEW")]
    New,
    #[serde(rename = "GOOD")]
    Good,
    #[serde(rename = "REPAIR")]
    DueForService,
    #[serde(rename = "UNREPAIRABLE")]
    Unrepairable,
}

impl AssetCondition {
    /// Storage code for this condition.
    pub fn as_code(&self) -> &'static str {
        match self {
            AssetCondition::New => "NEW",
            AssetCondition::Good => "GOOD",
            AssetCondition::DueForService => "REPAIR",
            AssetCondition::Unrepairable => "UNREPAIRABLE",
        }
    }

    /// Parse a storage code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "NEW" => Some(AssetCondition::New),
            "GOOD" => Some(AssetCondition::Good),
            "REPAIR" => Some(AssetCondition::DueForService),
            "UNREPAIRABLE" => Some(AssetCondition::Unrepairable),
            _ => None,
        }
    }
}

/// A fixed asset (equipment, furniture) tracked for servicing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FixedAsset {
    /// Surrogate UUID, generated locally
    pub id: String,
    /// Asset name
    pub name: String,
    /// Asset category
    pub category: AssetCategory,
    /// Delivery date of the equipment
    pub acquired_on: NaiveDate,
    /// Service interval in days
    pub service_period: u32,
    /// Date of the most recent service
    pub last_service_date: NaiveDate,
    /// Whether the asset is due for service (see [`FixedAsset::is_service_due`])
    pub service_due: bool,
    /// Functional condition
    pub condition: AssetCondition,
    /// Creation timestamp
    pub created_at: String,
    /// Last update timestamp
    pub updated_at: String,
}

impl FixedAsset {
    /// Create a new asset. The last service date starts at the delivery date.
    pub fn new(
        name: String,
        category: AssetCategory,
        acquired_on: NaiveDate,
        service_period: u32,
    ) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            category,
            acquired_on,
            service_period,
            last_service_date: acquired_on,
            service_due: false,
            condition: AssetCondition::New,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// The date the next service falls due.
    pub fn due_date(&self) -> NaiveDate {
        self.last_service_date + Duration::days(i64::from(self.service_period))
    }

    /// Whether the asset is due for service as of `today`.
    ///
    /// The date is a parameter rather than read from the clock so the
    /// check stays pure and testable.
    pub fn is_service_due(&self, today: NaiveDate) -> bool {
        today >= self.due_date()
    }
}
