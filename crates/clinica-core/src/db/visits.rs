//! Visit database operations: the encounter record, its lab orders and
//! dispense records, and the display projections over them.

use rusqlite::{params, OptionalExtension};
use tracing::{debug, info};

use super::{Database, DbError, DbResult};
use crate::models::{LabTest, Visit, VisitCategory, VisitItem, VisitTest};

impl Database {
    /// Insert a new visit.
    pub fn insert_visit(&self, visit: &Visit) -> DbResult<()> {
        debug!(visit = %visit.id, patient = %visit.patient_id, "recording visit");
        self.conn.execute(
            r#"
            INSERT INTO visits (
                id, patient_id, attendant_id, category, diagnosis,
                consultation, visit_date, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
            params![
                visit.id,
                visit.patient_id,
                visit.attendant_id,
                visit.category.as_code(),
                visit.diagnosis,
                visit.consultation,
                visit.visit_date,
                visit.created_at,
                visit.updated_at,
            ],
        )?;
        Ok(())
    }

    /// Update an existing visit. `visit_date` is stamped at insert and
    /// deliberately absent from this statement.
    pub fn update_visit(&self, visit: &Visit) -> DbResult<bool> {
        let rows_affected = self.conn.execute(
            r#"
            UPDATE visits SET
                patient_id = ?2,
                attendant_id = ?3,
                category = ?4,
                diagnosis = ?5,
                consultation = ?6,
                updated_at = datetime('now')
            WHERE id = ?1
            "#,
            params![
                visit.id,
                visit.patient_id,
                visit.attendant_id,
                visit.category.as_code(),
                visit.diagnosis,
                visit.consultation,
            ],
        )?;
        Ok(rows_affected > 0)
    }

    /// Get a visit by ID.
    pub fn get_visit(&self, id: &str) -> DbResult<Option<Visit>> {
        self.conn
            .query_row(
                r#"
                SELECT id, patient_id, attendant_id, category, diagnosis,
                       consultation, visit_date, created_at, updated_at
                FROM visits
                WHERE id = ?
                "#,
                [id],
                map_visit_row,
            )
            .optional()?
            .map(|row| row.try_into())
            .transpose()
    }

    /// List all visits for a patient, most recent first.
    pub fn list_visits_for_patient(&self, patient_id: &str) -> DbResult<Vec<Visit>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, patient_id, attendant_id, category, diagnosis,
                   consultation, visit_date, created_at, updated_at
            FROM visits
            WHERE patient_id = ?
            ORDER BY visit_date DESC
            "#,
        )?;

        let rows = stmt.query_map([patient_id], map_visit_row)?;

        let mut visits = Vec::new();
        for row in rows {
            visits.push(row?.try_into()?);
        }
        Ok(visits)
    }

    /// List all visits, most recent first.
    pub fn list_visits(&self) -> DbResult<Vec<Visit>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, patient_id, attendant_id, category, diagnosis,
                   consultation, visit_date, created_at, updated_at
            FROM visits
            ORDER BY visit_date DESC
            "#,
        )?;

        let rows = stmt.query_map([], map_visit_row)?;

        let mut visits = Vec::new();
        for row in rows {
            visits.push(row?.try_into()?);
        }
        Ok(visits)
    }

    /// Delete a visit. Its lab orders and dispense records go with it.
    pub fn delete_visit(&self, id: &str) -> DbResult<bool> {
        let rows_affected = self.conn.execute("DELETE FROM visits WHERE id = ?", [id])?;
        Ok(rows_affected > 0)
    }

    // =========================================================================
    // Lab orders
    // =========================================================================

    /// Record a lab test ordered on a visit.
    pub fn order_lab_test(&self, order: &VisitTest) -> DbResult<()> {
        self.conn.execute(
            r#"
            INSERT INTO visit_tests (id, visit_id, test_id, created_at)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![order.id, order.visit_id, order.test_id, order.created_at],
        )?;
        Ok(())
    }

    /// The lab tests ordered on a visit, in order-entry order.
    pub fn lab_tests_for_visit(&self, visit_id: &str) -> DbResult<Vec<LabTest>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT t.id, t.name, t.unit_cost, t.created_at, t.updated_at
            FROM visit_tests vt
            JOIN lab_tests t ON t.id = vt.test_id
            WHERE vt.visit_id = ?
            ORDER BY vt.rowid
            "#,
        )?;

        let rows = stmt.query_map([visit_id], |row| {
            Ok(LabTest {
                id: row.get(0)?,
                name: row.get(1)?,
                unit_cost: row.get(2)?,
                created_at: row.get(3)?,
                updated_at: row.get(4)?,
            })
        })?;

        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Names of the lab tests ordered on a visit, joined with ", ".
    pub fn lab_test_names(&self, visit_id: &str) -> DbResult<String> {
        let tests = self.lab_tests_for_visit(visit_id)?;
        let names: Vec<String> = tests.into_iter().map(|t| t.name).collect();
        Ok(names.join(", "))
    }

    /// Remove a lab order from a visit.
    pub fn delete_visit_test(&self, id: &str) -> DbResult<bool> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM visit_tests WHERE id = ?", [id])?;
        Ok(rows_affected > 0)
    }

    // =========================================================================
    // Dispensing
    // =========================================================================

    /// Dispense a drug on a visit: persist the dispense record, then take
    /// the dispensed quantity out of the item's stock.
    ///
    /// Runs in one transaction, join row first, so a failed stock
    /// adjustment can never leave an unpersisted dispense record. The
    /// relative UPDATE keeps concurrent adjustments against the same item
    /// from losing updates. No floor check: stock may go negative.
    pub fn dispense(&mut self, visit_item: &VisitItem) -> DbResult<()> {
        let tx = self.conn.transaction()?;

        tx.execute(
            r#"
            INSERT INTO visit_items (id, visit_id, item_id, quantity, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                visit_item.id,
                visit_item.visit_id,
                visit_item.item_id,
                visit_item.quantity,
                visit_item.created_at,
            ],
        )?;
        tx.execute(
            "UPDATE items SET quantity = quantity - ?2, updated_at = datetime('now') WHERE id = ?1",
            params![visit_item.item_id, visit_item.quantity],
        )?;

        tx.commit()?;
        info!(
            item = %visit_item.item_id,
            quantity = visit_item.quantity,
            "dispensed"
        );
        Ok(())
    }

    /// Update a dispense record's quantity. The item's stock is reduced by
    /// the record's new quantity again; saving a dispense record always
    /// applies its quantity to stock.
    pub fn update_dispense(&mut self, visit_item: &VisitItem) -> DbResult<bool> {
        let tx = self.conn.transaction()?;

        let rows_affected = tx.execute(
            "UPDATE visit_items SET quantity = ?2 WHERE id = ?1",
            params![visit_item.id, visit_item.quantity],
        )?;
        if rows_affected == 0 {
            return Ok(false);
        }
        tx.execute(
            "UPDATE items SET quantity = quantity - ?2, updated_at = datetime('now') WHERE id = ?1",
            params![visit_item.item_id, visit_item.quantity],
        )?;

        tx.commit()?;
        info!(
            item = %visit_item.item_id,
            quantity = visit_item.quantity,
            "dispense updated"
        );
        Ok(true)
    }

    /// The dispense records for a visit, in dispense order.
    pub fn dispensed_items_for_visit(&self, visit_id: &str) -> DbResult<Vec<VisitItem>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, visit_id, item_id, quantity, created_at
            FROM visit_items
            WHERE visit_id = ?
            ORDER BY rowid
            "#,
        )?;

        let rows = stmt.query_map([visit_id], |row| {
            Ok(VisitItem {
                id: row.get(0)?,
                visit_id: row.get(1)?,
                item_id: row.get(2)?,
                quantity: row.get(3)?,
                created_at: row.get(4)?,
            })
        })?;

        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Names of the drugs dispensed on a visit, joined with "," and no
    /// space (legacy display format, kept as-is).
    pub fn prescription_names(&self, visit_id: &str) -> DbResult<String> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT i.name
            FROM visit_items vi
            JOIN items i ON i.id = vi.item_id
            WHERE vi.visit_id = ?
            ORDER BY vi.rowid
            "#,
        )?;

        let rows = stmt.query_map([visit_id], |row| row.get::<_, String>(0))?;
        let names = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(names.join(","))
    }

    /// Remove a dispense record. Stock is not restored.
    pub fn delete_visit_item(&self, id: &str) -> DbResult<bool> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM visit_items WHERE id = ?", [id])?;
        Ok(rows_affected > 0)
    }
}

/// Intermediate row struct for database mapping.
struct VisitRow {
    id: String,
    patient_id: String,
    attendant_id: String,
    category: String,
    diagnosis: String,
    consultation: bool,
    visit_date: String,
    created_at: String,
    updated_at: String,
}

fn map_visit_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<VisitRow> {
    Ok(VisitRow {
        id: row.get(0)?,
        patient_id: row.get(1)?,
        attendant_id: row.get(2)?,
        category: row.get(3)?,
        diagnosis: row.get(4)?,
        consultation: row.get(5)?,
        visit_date: row.get(6)?,
        created_at: row.get(7)?,
        updated_at: row.get(8)?,
    })
}

impl TryFrom<VisitRow> for Visit {
    type Error = DbError;

    fn try_from(row: VisitRow) -> Result<Self, Self::Error> {
        let category = VisitCategory::from_code(&row.category).ok_or_else(|| {
            DbError::Constraint(format!("Unknown visit category code: {}", row.category))
        })?;

        Ok(Visit {
            id: row.id,
            patient_id: row.patient_id,
            attendant_id: row.attendant_id,
            category,
            diagnosis: row.diagnosis,
            consultation: row.consultation,
            visit_date: row.visit_date,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}
