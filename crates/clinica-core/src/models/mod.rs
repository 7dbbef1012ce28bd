//! Domain models for the clinic data layer.

mod asset;
mod item;
mod patient;
mod staff;
mod supplier;
mod visit;

pub use asset::{AssetCategory, AssetCondition, FixedAsset};
pub use item::Item;
pub use lab_test::LabTest;
pub use patient::{Gender, Patient};
pub use staff::{Designation, Staff};
pub use supplier::Supplier;
pub use visit::{Visit, VisitCategory, VisitItem, VisitTest};
