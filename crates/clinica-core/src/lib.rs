//! Clinica Core Library
//!
//! Data layer for a small clinic-management application: patients, staff,
//! visits, lab tests, prescription drugs, suppliers, and fixed-asset
//! inventory, persisted in SQLite.
//!
//! # Architecture
//!
//! ```text
//!                 Patient ──1:N── Visit ──N:1── Staff (attendant)
//!                                   │
//!                      ┌────────────┴────────────┐
//!                      │                         │
//!                 VisitTest                 VisitItem (quantity)
//!                      │                         │
//!                   LabTest                    Item ── stock decremented
//!                                                      on dispense
//!
//!                 Supplier, FixedAsset: independent aggregates
//! ```
//!
//! The admin/presentation layer and HTTP surface live elsewhere; this crate
//! only owns the records, their referential rules, and the handful of
//! behaviors attached to them:
//!
//! - `full_name` display projections on [`models::Patient`] and
//!   [`models::Staff`]
//! - the service-due evaluation on [`models::FixedAsset`], with
//!   [`db::Database::refresh_service_due`] persisting the flag
//! - the `lab_test_names` / `prescription_names` display projections on a
//!   visit
//! - [`db::Database::dispense`], which records a dispense and takes the
//!   quantity out of pharmacy stock in one transaction
//!
//! # Modules
//!
//! - [`db`]: SQLite database layer, one operations file per aggregate
//! - [`models`]: Domain types (Patient, Staff, Visit, Item, etc.)

pub mod db;
pub mod models;

// Re-export commonly used types
pub use db::{Database, DbError, DbResult};
pub use models::{
    AssetCategory, AssetCondition, Designation, FixedAsset, Gender, Item, LabTest, Patient,
    Staff, Supplier, Visit, VisitCategory, VisitItem, VisitTest,
};
