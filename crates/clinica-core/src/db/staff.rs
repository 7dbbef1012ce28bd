//! Staff database operations.

use rusqlite::{params, OptionalExtension};

use super::{Database, DbError, DbResult};
use crate::models::{Designation, Staff};

impl Database {
    /// Insert a new staff member.
    pub fn insert_staff(&self, staff: &Staff) -> DbResult<()> {
        self.conn.execute(
            r#"
            INSERT INTO staff (
                id, first_name, last_name, phone, alternate_phone,
                email, designation, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
            params![
                staff.id,
                staff.first_name,
                staff.last_name,
                staff.phone,
                staff.alternate_phone,
                staff.email,
                staff.designation.as_code(),
                staff.created_at,
                staff.updated_at,
            ],
        )?;
        Ok(())
    }

    /// Update an existing staff member.
    pub fn update_staff(&self, staff: &Staff) -> DbResult<bool> {
        let rows_affected = self.conn.execute(
            r#"
            UPDATE staff SET
                first_name = ?2,
                last_name = ?3,
                phone = ?4,
                alternate_phone = ?5,
                email = ?6,
                designation = ?7,
                updated_at = datetime('now')
            WHERE id = ?1
            "#,
            params![
                staff.id,
                staff.first_name,
                staff.last_name,
                staff.phone,
                staff.alternate_phone,
                staff.email,
                staff.designation.as_code(),
            ],
        )?;
        Ok(rows_affected > 0)
    }

    /// Get a staff member by ID.
    pub fn get_staff(&self, id: &str) -> DbResult<Option<Staff>> {
        self.conn
            .query_row(
                r#"
                SELECT id, first_name, last_name, phone, alternate_phone,
                       email, designation, created_at, updated_at
                FROM staff
                WHERE id = ?
                "#,
                [id],
                map_staff_row,
            )
            .optional()?
            .map(|row| row.try_into())
            .transpose()
    }

    /// Search staff by first name (prefix match).
    pub fn search_staff(&self, query: &str, limit: usize) -> DbResult<Vec<Staff>> {
        let pattern = format!("{}%", query);
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, first_name, last_name, phone, alternate_phone,
                   email, designation, created_at, updated_at
            FROM staff
            WHERE first_name LIKE ?
            ORDER BY first_name
            LIMIT ?
            "#,
        )?;

        let rows = stmt.query_map(params![pattern, limit as i64], map_staff_row)?;

        let mut members = Vec::new();
        for row in rows {
            members.push(row?.try_into()?);
        }
        Ok(members)
    }

    /// List all staff, ordered by first name.
    pub fn list_staff(&self) -> DbResult<Vec<Staff>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, first_name, last_name, phone, alternate_phone,
                   email, designation, created_at, updated_at
            FROM staff
            ORDER BY first_name
            "#,
        )?;

        let rows = stmt.query_map([], map_staff_row)?;

        let mut members = Vec::new();
        for row in rows {
            members.push(row?.try_into()?);
        }
        Ok(members)
    }

    /// Delete a staff member. Blocked while the member still attends visits.
    pub fn delete_staff(&self, id: &str) -> DbResult<bool> {
        let rows_affected = self.conn.execute("DELETE FROM staff WHERE id = ?", [id])?;
        Ok(rows_affected > 0)
    }
}

/// Intermediate row struct for database mapping.
struct StaffRow {
    id: String,
    first_name: String,
    last_name: String,
    phone: String,
    alternate_phone: Option<String>,
    email: Option<String>,
    designation: String,
    created_at: String,
    updated_at: String,
}

fn map_staff_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<StaffRow> {
    Ok(StaffRow {
        id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        phone: row.get(3)?,
        alternate_phone: row.get(4)?,
        email: row.get(5)?,
        designation: row.get(6)?,
        created_at: row.get(7)?,
        updated_at: row.get(8)?,
    })
}

impl TryFrom<StaffRow> for Staff {
    type Error = DbError;

    fn try_from(row: StaffRow) -> Result<Self, Self::Error> {
        let designation = Designation::from_code(&row.designation).ok_or_else(|| {
            DbError::Constraint(format!("Unknown designation code: {}", row.designation))
        })?;

        Ok(Staff {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            phone: row.phone,
            alternate_phone: row.alternate_phone,
            email: row.email,
            designation,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}
