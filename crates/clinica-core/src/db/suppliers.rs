//! Supplier database operations.

use rusqlite::{params, OptionalExtension};

use super::{Database, DbResult};
use crate::models::Supplier;

impl Database {
    /// Insert a new supplier.
    pub fn insert_supplier(&self, supplier: &Supplier) -> DbResult<()> {
        self.conn.execute(
            r#"
            INSERT INTO suppliers (
                id, name, address, phone, alternate_phone, email,
                created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
            params![
                supplier.id,
                supplier.name,
                supplier.address,
                supplier.phone,
                supplier.alternate_phone,
                supplier.email,
                supplier.created_at,
                supplier.updated_at,
            ],
        )?;
        Ok(())
    }

    /// Update an existing supplier.
    pub fn update_supplier(&self, supplier: &Supplier) -> DbResult<bool> {
        let rows_affected = self.conn.execute(
            r#"
            UPDATE suppliers SET
                name = ?2,
                address = ?3,
                phone = ?4,
                alternate_phone = ?5,
                email = ?6,
                updated_at = datetime('now')
            WHERE id = ?1
            "#,
            params![
                supplier.id,
                supplier.name,
                supplier.address,
                supplier.phone,
                supplier.alternate_phone,
                supplier.email,
            ],
        )?;
        Ok(rows_affected > 0)
    }

    /// Get a supplier by ID.
    pub fn get_supplier(&self, id: &str) -> DbResult<Option<Supplier>> {
        self.conn
            .query_row(
                r#"
                SELECT id, name, address, phone, alternate_phone, email,
                       created_at, updated_at
                FROM suppliers
                WHERE id = ?
                "#,
                [id],
                map_supplier_row,
            )
            .optional()
            .map_err(Into::into)
    }

    /// Search suppliers by name (prefix match).
    pub fn search_suppliers(&self, query: &str, limit: usize) -> DbResult<Vec<Supplier>> {
        let pattern = format!("{}%", query);
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, name, address, phone, alternate_phone, email,
                   created_at, updated_at
            FROM suppliers
            WHERE name LIKE ?
            ORDER BY name
            LIMIT ?
            "#,
        )?;

        let rows = stmt.query_map(params![pattern, limit as i64], map_supplier_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// List all suppliers, ordered by name.
    pub fn list_suppliers(&self) -> DbResult<Vec<Supplier>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, name, address, phone, alternate_phone, email,
                   created_at, updated_at
            FROM suppliers
            ORDER BY name
            "#,
        )?;

        let rows = stmt.query_map([], map_supplier_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Delete a supplier.
    pub fn delete_supplier(&self, id: &str) -> DbResult<bool> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM suppliers WHERE id = ?", [id])?;
        Ok(rows_affected > 0)
    }
}

fn map_supplier_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Supplier> {
    Ok(Supplier {
        id: row.get(0)?,
        name: row.get(1)?,
        address: row.get(2)?,
        phone: row.get(3)?,
        alternate_phone: row.get(4)?,
        email: row.get(5)?,
        created_at: row.get(6)?,
        updated_at: row.get(7)?,
    })
}
