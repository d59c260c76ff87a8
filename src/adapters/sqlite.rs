use crate::domain::ports::{ClientRow, ClientStore};
use crate::utils::error::Result;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS users (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name  TEXT NOT NULL,
    last_name   TEXT NOT NULL,
    national_id TEXT NOT NULL UNIQUE,
    age         INTEGER NOT NULL
);
CREATE TABLE IF NOT EXISTS license_types (
    id    INTEGER PRIMARY KEY AUTOINCREMENT,
    label TEXT NOT NULL UNIQUE
);
CREATE TABLE IF NOT EXISTS user_licenses (
    user_id    INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    license_id INTEGER NOT NULL REFERENCES license_types(id) ON DELETE CASCADE,
    PRIMARY KEY (user_id, license_id)
);
";

/// Standard license categories seeded into a fresh database.
const DEFAULT_LICENSE_LABELS: [&str; 6] = ["A", "A1", "B", "C", "D", "E"];

/// SQLite-backed implementation of the `ClientStore` port. Every method is a
/// single parameterized statement; the repository sequences them.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path)?;
        Self::with_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.pragma_update(None, "foreign_keys", true)?;
        conn.execute_batch(SCHEMA)?;
        for label in DEFAULT_LICENSE_LABELS {
            conn.execute(
                "INSERT OR IGNORE INTO license_types (label) VALUES (?1)",
                params![label],
            )?;
        }
        Ok(Self { conn })
    }
}

impl ClientStore for SqliteStore {
    fn find_user_id(&self, national_id: &str) -> Result<Option<i64>> {
        let id = self
            .conn
            .query_row(
                "SELECT id FROM users WHERE UPPER(national_id) = ?1",
                params![national_id.to_uppercase()],
                |row| row.get(0),
            )
            .optional()?;
        Ok(id)
    }

    fn insert_user(
        &mut self,
        first_name: &str,
        last_name: &str,
        national_id: &str,
        age: i64,
    ) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO users (first_name, last_name, national_id, age) VALUES (?1, ?2, ?3, ?4)",
            params![first_name, last_name, national_id, age],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn fetch_user(&self, national_id: &str) -> Result<Option<ClientRow>> {
        let row = self
            .conn
            .query_row(
                "SELECT id, first_name, last_name, national_id, age
                 FROM users WHERE UPPER(national_id) = ?1",
                params![national_id.to_uppercase()],
                |row| {
                    Ok(ClientRow {
                        id: row.get(0)?,
                        first_name: row.get(1)?,
                        last_name: row.get(2)?,
                        national_id: row.get(3)?,
                        age: row.get(4)?,
                    })
                },
            )
            .optional()?;
        Ok(row)
    }

    fn all_users(&self) -> Result<Vec<ClientRow>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, first_name, last_name, national_id, age FROM users ORDER BY id",
        )?;
        let rows = stmt.query_map(params![], |row| {
            Ok(ClientRow {
                id: row.get(0)?,
                first_name: row.get(1)?,
                last_name: row.get(2)?,
                national_id: row.get(3)?,
                age: row.get(4)?,
            })
        })?;

        let mut users = Vec::new();
        for row in rows {
            users.push(row?);
        }
        Ok(users)
    }

    fn delete_user(&mut self, user_id: i64) -> Result<()> {
        self.conn
            .execute("DELETE FROM users WHERE id = ?1", params![user_id])?;
        Ok(())
    }

    fn license_type_id(&self, label: &str) -> Result<Option<i64>> {
        let id = self
            .conn
            .query_row(
                "SELECT id FROM license_types WHERE label = ?1",
                params![label],
                |row| row.get(0),
            )
            .optional()?;
        Ok(id)
    }

    fn attach_license(&mut self, user_id: i64, license_id: i64) -> Result<()> {
        self.conn.execute(
            "INSERT OR IGNORE INTO user_licenses (user_id, license_id) VALUES (?1, ?2)",
            params![user_id, license_id],
        )?;
        Ok(())
    }

    fn licenses_for(&self, user_id: i64) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT lt.label FROM user_licenses ul
             JOIN license_types lt ON ul.license_id = lt.id
             WHERE ul.user_id = ?1
             ORDER BY lt.label",
        )?;
        let rows = stmt.query_map(params![user_id], |row| row.get(0))?;

        let mut labels = Vec::new();
        for label in rows {
            labels.push(label?);
        }
        Ok(labels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_is_idempotent_and_seeded() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert!(store.license_type_id("B").unwrap().is_some());
        assert!(store.license_type_id("A1").unwrap().is_some());
        assert!(store.license_type_id("TRACTOR").unwrap().is_none());
    }

    #[test]
    fn test_insert_and_fetch_case_insensitive() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let id = store.insert_user("Jean", "Dupont", "AB123456", 35).unwrap();

        let row = store.fetch_user("ab123456").unwrap().unwrap();
        assert_eq!(row.id, id);
        assert_eq!(row.first_name, "Jean");
        assert_eq!(row.last_name, "Dupont");
        assert_eq!(row.age, 35);

        assert_eq!(store.find_user_id("Ab123456").unwrap(), Some(id));
    }

    #[test]
    fn test_delete_cascades_to_associations() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let user_id = store.insert_user("Jean", "Dupont", "AB123456", 35).unwrap();
        let license_id = store.license_type_id("B").unwrap().unwrap();
        store.attach_license(user_id, license_id).unwrap();
        assert_eq!(store.licenses_for(user_id).unwrap(), vec!["B"]);

        store.delete_user(user_id).unwrap();
        assert!(store.fetch_user("AB123456").unwrap().is_none());
        assert!(store.licenses_for(user_id).unwrap().is_empty());
    }

    #[test]
    fn test_reopening_keeps_rows() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("clients.db");

        {
            let mut store = SqliteStore::open(&db_path).unwrap();
            store.insert_user("Jean", "Dupont", "AB123456", 35).unwrap();
        }

        let store = SqliteStore::open(&db_path).unwrap();
        assert_eq!(store.all_users().unwrap().len(), 1);
    }
}
