//! Fixed-asset database operations.

use chrono::NaiveDate;
use rusqlite::{params, OptionalExtension};
use tracing::debug;

use super::{Database, DbError, DbResult};
use crate::models::{AssetCategory, AssetCondition, FixedAsset};

impl Database {
    /// Insert a new fixed asset.
    pub fn insert_asset(&self, asset: &FixedAsset) -> DbResult<()> {
        self.conn.execute(
            r#"
            INSERT INTO fixed_assets (
                id, name, category, acquired_on, service_period,
                last_service_date, service_due, condition, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            "#,
            params![
                asset.id,
                asset.name,
                asset.category.as_code(),
                asset.acquired_on.to_string(),
                asset.service_period,
                asset.last_service_date.to_string(),
                asset.service_due,
                asset.condition.as_code(),
                asset.created_at,
                asset.updated_at,
            ],
        )?;
        Ok(())
    }

    /// Update an existing fixed asset.
    pub fn update_asset(&self, asset: &FixedAsset) -> DbResult<bool> {
        let rows_affected = self.conn.execute(
            r#"
            UPDATE fixed_assets SET
                name = ?2,
                category = ?3,
                acquired_on = ?4,
                service_period = ?5,
                last_service_date = ?6,
                service_due = ?7,
                condition = ?8,
                updated_at = datetime('now')
            WHERE id = ?1
            "#,
            params![
                asset.id,
                asset.name,
                asset.category.as_code(),
                asset.acquired_on.to_string(),
                asset.service_period,
                asset.last_service_date.to_string(),
                asset.service_due,
                asset.condition.as_code(),
            ],
        )?;
        Ok(rows_affected > 0)
    }

    /// Get a fixed asset by ID.
    pub fn get_asset(&self, id: &str) -> DbResult<Option<FixedAsset>> {
        self.conn
            .query_row(
                r#"
                SELECT id, name, category, acquired_on, service_period,
                       last_service_date, service_due, condition, created_at, updated_at
                FROM fixed_assets
                WHERE id = ?
                "#,
                [id],
                map_asset_row,
            )
            .optional()?
            .map(|row| row.try_into())
            .transpose()
    }

    /// List all fixed assets, in insertion order.
    pub fn list_assets(&self) -> DbResult<Vec<FixedAsset>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, name, category, acquired_on, service_period,
                   last_service_date, service_due, condition, created_at, updated_at
            FROM fixed_assets
            ORDER BY rowid
            "#,
        )?;

        let rows = stmt.query_map([], map_asset_row)?;

        let mut assets = Vec::new();
        for row in rows {
            assets.push(row?.try_into()?);
        }
        Ok(assets)
    }

    /// Delete a fixed asset.
    pub fn delete_asset(&self, id: &str) -> DbResult<bool> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM fixed_assets WHERE id = ?", [id])?;
        Ok(rows_affected > 0)
    }

    /// Recompute the service-due flag for an asset as of `today` and
    /// persist it. Returns the computed flag.
    pub fn refresh_service_due(&self, id: &str, today: NaiveDate) -> DbResult<bool> {
        let asset = self
            .get_asset(id)?
            .ok_or_else(|| DbError::NotFound(format!("fixed asset {}", id)))?;

        let due = asset.is_service_due(today);
        debug!(asset = %asset.name, due, "refreshed service-due flag");

        self.conn.execute(
            "UPDATE fixed_assets SET service_due = ?2, updated_at = datetime('now') WHERE id = ?1",
            params![id, due],
        )?;
        Ok(due)
    }
}

/// Intermediate row struct for database mapping.
struct AssetRow {
    id: String,
    name: String,
    category: String,
    acquired_on: String,
    service_period: u32,
    last_service_date: String,
    service_due: bool,
    condition: String,
    created_at: String,
    updated_at: String,
}

fn map_asset_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<AssetRow> {
    Ok(AssetRow {
        id: row.get(0)?,
        name: row.get(1)?,
        category: row.get(2)?,
        acquired_on: row.get(3)?,
        service_period: row.get(4)?,
        last_service_date: row.get(5)?,
        service_due: row.get(6)?,
        condition: row.get(7)?,
        created_at: row.get(8)?,
        updated_at: row.get(9)?,
    })
}

fn parse_date(s: &str) -> Result<NaiveDate, DbError> {
    s.parse()
        .map_err(|_| DbError::Constraint(format!("Undecodable stored date: {}", s)))
}

impl TryFrom<AssetRow> for FixedAsset {
    type Error = DbError;

    fn try_from(row: AssetRow) -> Result<Self, Self::Error> {
        let category = AssetCategory::from_code(&row.category).ok_or_else(|| {
            DbError::Constraint(format!("Unknown asset category code: {}", row.category))
        })?;
        let condition = AssetCondition::from_code(&row.condition).ok_or_else(|| {
            DbError::Constraint(format!("Unknown asset condition code: {}", row.condition))
        })?;

        Ok(FixedAsset {
            id: row.id,
            name: row.name,
            category,
            acquired_on: parse_date(&row.acquired_on)?,
            service_period: row.service_period,
            last_service_date: parse_date(&row.last_service_date)?,
            service_due: row.service_due,
            condition,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}
