//! SQLite mapping for `specialites`.

use crate::model::specialite::Specialite;
use crate::repo::sqlite::{SqliteEntity, SqliteRepository};
use crate::repo::RepoResult;
use rusqlite::types::Value;
use rusqlite::Row;

/// SQLite-backed specialty repository.
pub type SqliteSpecialiteRepository<'conn> = SqliteRepository<'conn, Specialite>;

impl SqliteEntity for Specialite {
    const TABLE: &'static str = "specialites";
    const WRITE_COLUMNS: &'static [&'static str] = &["code", "libelle"];
    const SELECT_SQL: &'static str = "SELECT
    s.id AS id,
    s.code AS code,
    s.libelle AS libelle
FROM specialites s";
    const ID_COLUMN: &'static str = "s.id";

    fn write_values(&self) -> Vec<Value> {
        vec![
            Value::Text(self.code.clone()),
            Value::Text(self.libelle.clone()),
        ]
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        Ok(Self {
            id: row.get("id")?,
            code: row.get("code")?,
            libelle: row.get("libelle")?,
        })
    }
}
