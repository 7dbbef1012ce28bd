//! End-to-end tests for the visit flow: registration, the encounter,
//! lab orders, dispensing, and the display projections.

use clinica_core::db::Database;
use clinica_core::models::{
    Designation, Gender, Item, LabTest, Patient, Staff, Visit, VisitCategory, VisitItem,
    VisitTest,
};

fn seed_clinic(db: &Database) -> (Patient, Staff) {
    let mut patient = Patient::new("Amina".into(), "Yusuf".into(), Gender::Female);
    patient.phone = Some("555-0142".into());
    patient.age = 29;
    db.insert_patient(&patient).unwrap();

    let staff = Staff::new(
        "Daniel".into(),
        "Mwangi".into(),
        "555-0101".into(),
        Designation::Doctor,
    );
    db.insert_staff(&staff).unwrap();

    (patient, staff)
}

#[test]
fn test_full_visit_flow() {
    let mut db = Database::open_in_memory().unwrap();
    let (patient, staff) = seed_clinic(&db);

    // Catalog setup
    let cbc = LabTest::new("CBC".into(), 1200);
    let xray = LabTest::new("X-Ray".into(), 2500);
    db.insert_lab_test(&cbc).unwrap();
    db.insert_lab_test(&xray).unwrap();

    let mut paracetamol = Item::new("Paracetamol".into());
    paracetamol.quantity = 100;
    paracetamol.unit_cost = 50;
    db.insert_item(&paracetamol).unwrap();

    // The encounter
    let visit = Visit::new(
        patient.id.clone(),
        staff.id.clone(),
        VisitCategory::Outpatient,
        "suspected pneumonia".into(),
    );
    db.insert_visit(&visit).unwrap();

    db.order_lab_test(&VisitTest::new(visit.id.clone(), cbc.id.clone()))
        .unwrap();
    db.order_lab_test(&VisitTest::new(visit.id.clone(), xray.id.clone()))
        .unwrap();
    db.dispense(&VisitItem::new(visit.id.clone(), paracetamol.id.clone(), 10))
        .unwrap();

    // Projections the admin screens display
    assert_eq!(db.lab_test_names(&visit.id).unwrap(), "CBC, X-Ray");
    assert_eq!(db.prescription_names(&visit.id).unwrap(), "Paracetamol");
    assert_eq!(
        db.get_patient(&patient.id).unwrap().unwrap().full_name(),
        "Amina Yusuf"
    );
    assert_eq!(
        db.get_staff(&staff.id).unwrap().unwrap().full_name(),
        "Daniel Mwangi"
    );

    // Stock went down by the dispensed quantity
    let stocked = db.get_item(&paracetamol.id).unwrap().unwrap();
    assert_eq!(stocked.quantity, 90);

    // The dispense record keeps the quantity given out
    let dispensed = db.dispensed_items_for_visit(&visit.id).unwrap();
    assert_eq!(dispensed.len(), 1);
    assert_eq!(dispensed[0].quantity, 10);
}

#[test]
fn test_repeat_dispensing_accumulates() {
    let mut db = Database::open_in_memory().unwrap();
    let (patient, staff) = seed_clinic(&db);

    let mut item = Item::new("Cough Syrup".into());
    item.quantity = 30;
    db.insert_item(&item).unwrap();

    let visit = Visit::new(
        patient.id,
        staff.id,
        VisitCategory::Inpatient,
        "bronchitis".into(),
    );
    db.insert_visit(&visit).unwrap();

    db.dispense(&VisitItem::new(visit.id.clone(), item.id.clone(), 4))
        .unwrap();
    db.dispense(&VisitItem::new(visit.id.clone(), item.id.clone(), 6))
        .unwrap();

    assert_eq!(db.get_item(&item.id).unwrap().unwrap().quantity, 20);
    assert_eq!(db.dispensed_items_for_visit(&visit.id).unwrap().len(), 2);
}

#[test]
fn test_visit_history_per_patient() {
    let db = Database::open_in_memory().unwrap();
    let (patient, staff) = seed_clinic(&db);

    let other = Patient::new("Brian".into(), "Ochieng".into(), Gender::Male);
    db.insert_patient(&other).unwrap();

    for diagnosis in ["malaria", "follow-up"] {
        db.insert_visit(&Visit::new(
            patient.id.clone(),
            staff.id.clone(),
            VisitCategory::Outpatient,
            diagnosis.into(),
        ))
        .unwrap();
    }
    db.insert_visit(&Visit::new(
        other.id.clone(),
        staff.id.clone(),
        VisitCategory::Outpatient,
        "sprained ankle".into(),
    ))
    .unwrap();

    assert_eq!(db.list_visits_for_patient(&patient.id).unwrap().len(), 2);
    assert_eq!(db.list_visits_for_patient(&other.id).unwrap().len(), 1);
    assert_eq!(db.list_visits().unwrap().len(), 3);
}

#[test]
fn test_referential_rules_across_the_aggregate() {
    let db = Database::open_in_memory().unwrap();
    let (patient, staff) = seed_clinic(&db);

    let visit = Visit::new(
        patient.id.clone(),
        staff.id.clone(),
        VisitCategory::Outpatient,
        "checkup".into(),
    );
    db.insert_visit(&visit).unwrap();

    let test = LabTest::new("Malaria Smear".into(), 400);
    db.insert_lab_test(&test).unwrap();
    db.order_lab_test(&VisitTest::new(visit.id.clone(), test.id.clone()))
        .unwrap();

    // Patient and staff with visits cannot be deleted
    assert!(db.delete_patient(&patient.id).is_err());
    assert!(db.delete_staff(&staff.id).is_err());

    // A lab test referenced by a visit cannot be deleted either
    assert!(db.delete_lab_test(&test.id).is_err());

    // Dropping the visit releases everything
    assert!(db.delete_visit(&visit.id).unwrap());
    assert!(db.delete_lab_test(&test.id).unwrap());
    assert!(db.delete_patient(&patient.id).unwrap());
    assert!(db.delete_staff(&staff.id).unwrap());
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Patient and Staff build the display name the same way, for any
        /// pair of name strings.
        #[test]
        fn full_name_identical_for_patient_and_staff(
            first in "[A-Za-z'-]{1,20}",
            last in "[A-Za-z'-]{1,20}",
        ) {
            let patient = Patient::new(first.clone(), last.clone(), Gender::Male);
            let staff = Staff::new(first.clone(), last.clone(), "555".into(), Designation::Nurse);
            prop_assert_eq!(patient.full_name(), staff.full_name());
            prop_assert_eq!(patient.full_name(), format!("{} {}", first, last));
        }

        /// Dispensing Q against stock N always leaves N - Q, including when
        /// the result is negative.
        #[test]
        fn dispense_leaves_stock_minus_quantity(
            stock in 0i64..5_000,
            quantity in 0i64..5_000,
        ) {
            let mut db = Database::open_in_memory().unwrap();
            let (patient, staff) = seed_clinic(&db);

            let mut item = Item::new("Saline".into());
            item.quantity = stock;
            db.insert_item(&item).unwrap();

            let visit = Visit::new(
                patient.id,
                staff.id,
                VisitCategory::Outpatient,
                "dehydration".into(),
            );
            db.insert_visit(&visit).unwrap();

            db.dispense(&VisitItem::new(visit.id.clone(), item.id.clone(), quantity))
                .unwrap();

            let stocked = db.get_item(&item.id).unwrap().unwrap();
            prop_assert_eq!(stocked.quantity, stock - quantity);

            let dispensed = db.dispensed_items_for_visit(&visit.id).unwrap();
            prop_assert_eq!(dispensed[0].quantity, quantity);
        }
    }
}
