use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};

use crate::errors::store_context;

pub fn get_blob(conn: &Connection, key: &str) -> Result<Option<String>> {
    let sql = "SELECT value FROM blobs WHERE key = ?1";

    conn.query_row(sql, params![key], |row| row.get(0))
        .optional()
        .with_context(|| store_context("read", key))
}

/// Inserts or overwrites the document stored under `key`; last write wins
pub fn put_blob(conn: &Connection, key: &str, value: &str) -> Result<()> {
    let sql = "INSERT INTO blobs (key, value, updated_at) VALUES (?1, ?2, CURRENT_TIMESTAMP) ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";

    conn.execute(sql, params![key, value])
        .with_context(|| store_context("write", key))
        .map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{create_memory_pool, get_connection, setup::init_database, DbConn};

    fn conn() -> DbConn {
        let pool = create_memory_pool().unwrap();
        let mut conn = get_connection(&pool).unwrap();
        init_database(&mut conn).unwrap();
        conn
    }

    #[test]
    fn test_put_then_overwrite() {
        let mut conn = conn();
        assert_eq!(get_blob(&mut conn, "users").unwrap(), None);

        put_blob(&mut conn, "users", "[]").unwrap();
        put_blob(&mut conn, "users", "[1]").unwrap();

        assert_eq!(get_blob(&mut conn, "users").unwrap().as_deref(), Some("[1]"));
    }
}
