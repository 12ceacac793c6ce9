use anyhow::{anyhow, Context, Result};
use log::{error, info};
use rusqlite::Connection;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::blobs::{get_blob, put_blob};
use super::connection::{get_connection, DbPool};
use super::setup::init_database;
use crate::domain::Catalog;

pub const ITEMS_KEY: &str = "ratingItems";
pub const USERS_KEY: &str = "users";
pub const PROFILE_RATINGS_KEY: &str = "profileRatings";

/// Durable home of the catalog: one JSON document per collection
#[derive(Clone)]
pub struct Store {
    pool: DbPool,
}

impl Store {
    pub fn new(pool: DbPool) -> Result<Self> {
        let mut conn = get_connection(&pool)?;
        init_database(&mut conn)?;
        Ok(Self { pool })
    }

    pub fn load_catalog(&self) -> Result<Catalog> {
        let conn = get_connection(&self.pool)?;
        let catalog = Catalog::new(
            load_list(&conn, ITEMS_KEY)?,
            load_list(&conn, USERS_KEY)?,
            load_list(&conn, PROFILE_RATINGS_KEY)?,
        );

        info!(
            "Loaded {} items, {} users, {} profile ratings",
            catalog.items.len(),
            catalog.users.len(),
            catalog.profile_ratings.len()
        );
        Ok(catalog)
    }

    /// Writes every collection back inside one transaction
    pub fn save_catalog(&self, catalog: &Catalog) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;
        let tx = conn.transaction().context("Failed to start store transaction")?;

        for (key, json) in [
            (ITEMS_KEY, to_json(&catalog.items)?),
            (USERS_KEY, to_json(&catalog.users)?),
            (PROFILE_RATINGS_KEY, to_json(&catalog.profile_ratings)?),
        ] {
            put_blob(&tx, key, &json)?;
        }

        tx.commit().context("Failed to commit store transaction")
    }
}

/// A missing key is an empty list. A document that no longer parses is an
/// error, so no later save can replace it with an empty list.
fn load_list<T: DeserializeOwned>(conn: &Connection, key: &str) -> Result<Vec<T>> {
    let Some(json) = get_blob(conn, key)? else {
        return Ok(Vec::new());
    };

    serde_json::from_str(&json).map_err(|e| {
        error!("Error loading {}: {}", key, e);
        anyhow!(e).context(format!(
            "Failed to parse stored {}. First 200 chars: {}",
            key,
            preview(&json)
        ))
    })
}

fn to_json<T: Serialize + ?Sized>(data: &T) -> Result<String> {
    serde_json::to_string(data).context("Failed to serialize data")
}

fn preview(json: &str) -> &str {
    match json.char_indices().nth(200) {
        Some((idx, _)) => &json[..idx],
        None => json,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Categories;
    use crate::database::create_memory_pool;
    use crate::domain::NewItem;

    fn store() -> Store {
        Store::new(create_memory_pool().unwrap()).unwrap()
    }

    #[test]
    fn test_empty_store_loads_empty_catalog() {
        assert_eq!(store().load_catalog().unwrap(), Catalog::default());
    }

    #[test]
    fn test_catalog_survives_a_save() {
        let store = store();
        let mut catalog = Catalog::default();
        catalog.register_user("alice", "pw").unwrap();
        catalog.register_user("bob", "pw").unwrap();
        let alice = catalog.user("alice").unwrap().clone();
        let new_item = NewItem {
            name: "Dune".to_string(),
            category: "books".to_string(),
            description: String::new(),
            value: 4,
            review: "Great world building".to_string(),
        };
        catalog.add_item(&alice, new_item, &Categories::default()).unwrap();
        catalog.submit_profile_rating(&alice, "bob", 5, "helpful").unwrap();

        store.save_catalog(&catalog).unwrap();

        assert_eq!(store.load_catalog().unwrap(), catalog);
    }

    #[test]
    fn test_corrupt_blob_fails_load_and_survives() {
        let store = store();
        let conn = get_connection(&store.pool).unwrap();
        put_blob(&conn, ITEMS_KEY, "{not json").unwrap();
        drop(conn);

        let err = store.load_catalog().unwrap_err();
        assert!(format!("{:#}", err).contains("First 200 chars: {not json"));

        let conn = get_connection(&store.pool).unwrap();
        assert_eq!(get_blob(&conn, ITEMS_KEY).unwrap().as_deref(), Some("{not json"));
    }

    #[test]
    fn test_malformed_rating_values_are_tolerated() {
        let store = store();
        let json = r#"[{
            "id": "6f1c2a8e-0c1b-4d8e-9a57-1d3f5c7b9e21",
            "name": "Legacy",
            "category": "other",
            "createdAt": "2024-01-01T00:00:00Z",
            "createdBy": "old",
            "averageRating": 3,
            "ratings": [
                {"id": "0b7e6c52-5a0e-4f3e-8c1d-2e4f6a8b0c13", "user": "old", "userId": "3a9d8c7b-6e5f-4d3c-2b1a-0f9e8d7c6b5a", "value": 3, "comments": null, "timestamp": "2024-01-01T00:00:00Z"},
                {"id": "1c8f7d63-6b1f-4a4f-9d2e-3f5a7b9c1d24", "user": "older", "userId": "4b0e9d8c-7f6a-4e5d-3c2b-1a0f9e8d7c6b", "value": "x", "timestamp": "2024-01-01T00:00:00Z"}
            ]
        }]"#;
        let conn = get_connection(&store.pool).unwrap();
        put_blob(&conn, ITEMS_KEY, json).unwrap();
        drop(conn);

        let mut catalog = store.load_catalog().unwrap();
        let ratings = &catalog.items[0].ratings;
        assert_eq!(ratings.len(), 2);
        assert_eq!(crate::stats::average_rating(ratings), 3.0);

        catalog.register_user("newbie", "pw").unwrap();
        store.save_catalog(&catalog).unwrap();

        let reloaded = store.load_catalog().unwrap();
        assert_eq!(reloaded.items.len(), 1);
        assert_eq!(reloaded.items[0].name, "Legacy");
        assert!(reloaded.user("newbie").is_some());
    }
}
