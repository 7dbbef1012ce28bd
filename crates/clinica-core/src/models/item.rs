//! Prescription drug (pharmacy item) model.

use serde::{Deserialize, Serialize};

/// A prescription drug held in pharmacy stock.
///
/// `quantity` is signed: dispensing performs no floor check, so stock
/// may go negative when over-dispensed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    /// Surrogate UUID, generated locally
    pub id: String,
    /// Drug name
    pub name: String,
    /// Quantity on hand
    pub quantity: i64,
    /// Retail price per unit
    pub unit_cost: u32,
    /// Wholesale price per unit
    pub cost_price: u32,
    /// Creation timestamp
    pub created_at: String,
    /// Last update timestamp
    pub updated_at: String,
}

impl Item {
    /// Create a new item with zero stock and zero prices.
    pub fn new(name: String) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            quantity: 0,
            unit_cost: 0,
            cost_price: 0,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}
