use crate::db::migrations;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;

pub const DB_FILE_NAME: &str = "taskman.db";

/// Owner of the single SQLite connection.
///
/// One `Db` per process; every store module borrows its connection from
/// here. Opening the database applies all pending migrations, so callers
/// always see the current schema.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    pub fn new() -> Result<Db> {
        let mut conn = Self::open()?;
        migrations::init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }

    /// Opens the database file without applying migrations.
    /// Used by the migrations command to inspect state as-is.
    pub fn new_without_migrations() -> Result<Connection> {
        Self::open()
    }

    fn open() -> Result<Connection> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        let conn = Connection::open(db_file_path)?;

        Ok(conn)
    }
}
