//! Supplier model.

use serde::{Deserialize, Serialize};

/// A supplier of clinic stock.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Supplier {
    pub id: String,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub alternate_phone: Option<String>,
    pub email: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl Supplier {
    /// Create a new supplier with required fields.
    pub fn new(name: String, address: String, phone: String) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            address,
            phone,
            alternate_phone: None,
            email: None,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}
