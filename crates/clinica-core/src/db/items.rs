//! Pharmacy item database operations.

use rusqlite::{params, OptionalExtension};

use super::{Database, DbResult};
use crate::models::Item;

impl Database {
    /// Insert a new item.
    pub fn insert_item(&self, item: &Item) -> DbResult<()> {
        self.conn.execute(
            r#"
            INSERT INTO items (
                id, name, quantity, unit_cost, cost_price, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![
                item.id,
                item.name,
                item.quantity,
                item.unit_cost,
                item.cost_price,
                item.created_at,
                item.updated_at,
            ],
        )?;
        Ok(())
    }

    /// Update an existing item.
    pub fn update_item(&self, item: &Item) -> DbResult<bool> {
        let rows_affected = self.conn.execute(
            r#"
            UPDATE items SET
                name = ?2,
                quantity = ?3,
                unit_cost = ?4,
                cost_price = ?5,
                updated_at = datetime('now')
            WHERE id = ?1
            "#,
            params![
                item.id,
                item.name,
                item.quantity,
                item.unit_cost,
                item.cost_price,
            ],
        )?;
        Ok(rows_affected > 0)
    }

    /// Get an item by ID.
    pub fn get_item(&self, id: &str) -> DbResult<Option<Item>> {
        self.conn
            .query_row(
                r#"
                SELECT id, name, quantity, unit_cost, cost_price, created_at, updated_at
                FROM items
                WHERE id = ?
                "#,
                [id],
                map_item_row,
            )
            .optional()
            .map_err(Into::into)
    }

    /// Search items by name (prefix match).
    pub fn search_items(&self, query: &str, limit: usize) -> DbResult<Vec<Item>> {
        let pattern = format!("{}%", query);
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, name, quantity, unit_cost, cost_price, created_at, updated_at
            FROM items
            WHERE name LIKE ?
            ORDER BY name
            LIMIT ?
            "#,
        )?;

        let rows = stmt.query_map(params![pattern, limit as i64], map_item_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// List all items, ordered by name.
    pub fn list_items(&self) -> DbResult<Vec<Item>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, name, quantity, unit_cost, cost_price, created_at, updated_at
            FROM items
            ORDER BY name
            "#,
        )?;

        let rows = stmt.query_map([], map_item_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Delete an item. Blocked while dispense records still reference it.
    pub fn delete_item(&self, id: &str) -> DbResult<bool> {
        let rows_affected = self.conn.execute("DELETE FROM items WHERE id = ?", [id])?;
        Ok(rows_affected > 0)
    }
}

fn map_item_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Item> {
    Ok(Item {
        id: row.get(0)?,
        name: row.get(1)?,
        quantity: row.get(2)?,
        unit_cost: row.get(3)?,
        cost_price: row.get(4)?,
        created_at: row.get(5)?,
        updated_at: row.get(6)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let db = Database::open_in_memory().unwrap();

        let mut item = Item::new("Paracetamol".into());
        item.quantity = 100;
        item.unit_cost = 50;
        item.cost_price = 30;
        db.insert_item(&item).unwrap();

        let retrieved = db.get_item(&item.id).unwrap().unwrap();
        assert_eq!(retrieved.name, "Paracetamol");
        assert_eq!(retrieved.quantity, 100);
        assert_eq!(retrieved.unit_cost, 50);
        assert_eq!(retrieved.cost_price, 30);
    }

    #[test]
    fn test_negative_quantity_is_storable() {
        let db = Database::open_in_memory().unwrap();

        let mut item = Item::new("Amoxicillin".into());
        item.quantity = -5;
        db.insert_item(&item).unwrap();

        let retrieved = db.get_item(&item.id).unwrap().unwrap();
        assert_eq!(retrieved.quantity, -5);
    }

    #[test]
    fn test_list_ordered_by_name() {
        let db = Database::open_in_memory().unwrap();

        for name in ["Ibuprofen", "Amoxicillin", "Paracetamol"] {
            db.insert_item(&Item::new(name.into())).unwrap();
        }

        let items = db.list_items().unwrap();
        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Amoxicillin", "Ibuprofen", "Paracetamol"]);
    }
}
