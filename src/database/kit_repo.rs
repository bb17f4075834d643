use sqlx::SqlitePool;
use std::collections::HashMap;
use std::str::FromStr;

use super::models::{ItemKind, Kit, KitItem};

#[derive(sqlx::FromRow)]
struct KitRow {
    id: String,
    name: String,
}

#[derive(sqlx::FromRow)]
struct KitItemRow {
    kit_id: String,
    name: String,
    kind: String,
}

/// Fetch the whole kit catalog with every item list populated.
///
/// Kits come back in creation order so downstream ranking has a
/// deterministic tie-break. Items with an unrecognized kind are logged
/// and skipped rather than failing the load.
pub async fn get_all_kits(pool: &SqlitePool) -> Result<Vec<Kit>, sqlx::Error> {
    let kit_rows: Vec<KitRow> =
        sqlx::query_as("SELECT id, name FROM kits ORDER BY created_at ASC, id ASC")
            .fetch_all(pool)
            .await?;

    let item_rows: Vec<KitItemRow> = sqlx::query_as(
        "SELECT kit_id, name, kind FROM kit_items ORDER BY kit_id ASC, position ASC, rowid ASC",
    )
    .fetch_all(pool)
    .await?;

    let mut items_by_kit: HashMap<String, Vec<KitItem>> = HashMap::new();
    for row in item_rows {
        let kind = match ItemKind::from_str(&row.kind) {
            Ok(kind) => kind,
            Err(e) => {
                log::warn!("Skipping kit item \"{}\": {e}", row.name);
                continue;
            }
        };
        items_by_kit
            .entry(row.kit_id)
            .or_default()
            .push(KitItem { name: row.name, kind });
    }

    let kits = kit_rows
        .into_iter()
        .map(|row| {
            let mut kit = Kit::new(row.id, row.name);
            if let Some(items) = items_by_kit.remove(&kit.id) {
                for item in items {
                    kit.push_item(item);
                }
            }
            kit
        })
        .collect();

    Ok(kits)
}

/// Fetch a single kit by id, or `None` if it does not exist.
pub async fn get_kit(pool: &SqlitePool, kit_id: &str) -> Result<Option<Kit>, sqlx::Error> {
    let row: Option<KitRow> = sqlx::query_as("SELECT id, name FROM kits WHERE id = ?")
        .bind(kit_id)
        .fetch_optional(pool)
        .await?;

    let Some(row) = row else {
        return Ok(None);
    };

    let item_rows: Vec<KitItemRow> = sqlx::query_as(
        "SELECT kit_id, name, kind FROM kit_items WHERE kit_id = ? ORDER BY position ASC, rowid ASC",
    )
    .bind(kit_id)
    .fetch_all(pool)
    .await?;

    let mut kit = Kit::new(row.id, row.name);
    for row in item_rows {
        match ItemKind::from_str(&row.kind) {
            Ok(kind) => kit.push_item(KitItem { name: row.name, kind }),
            Err(e) => log::warn!("Skipping kit item \"{}\": {e}", row.name),
        }
    }

    Ok(Some(kit))
}

/// Insert a kit with its item list. Returns the stored kit.
pub async fn insert_kit(
    pool: &SqlitePool,
    name: &str,
    items: &[(String, ItemKind)],
) -> Result<Kit, sqlx::Error> {
    let kit_id = uuid::Uuid::new_v4().to_string();
    let created_at = chrono::Utc::now().to_rfc3339();

    let mut tx = pool.begin().await?;

    sqlx::query("INSERT INTO kits (id, name, created_at) VALUES (?, ?, ?)")
        .bind(&kit_id)
        .bind(name)
        .bind(&created_at)
        .execute(&mut *tx)
        .await?;

    for (position, (item_name, kind)) in items.iter().enumerate() {
        sqlx::query(
            "INSERT INTO kit_items (id, kit_id, name, kind, position) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(uuid::Uuid::new_v4().to_string())
        .bind(&kit_id)
        .bind(item_name)
        .bind(kind.to_string())
        .bind(position as i64)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    let mut kit = Kit::new(kit_id, name);
    for (item_name, kind) in items {
        kit.push_item(KitItem {
            name: item_name.clone(),
            kind: *kind,
        });
    }
    Ok(kit)
}

#[cfg(test)]
#[path = "tests/kit_repo_test.rs"]
mod tests;
