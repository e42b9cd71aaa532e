//! Generic SQLite repository over a per-entity table mapping.
//!
//! # Responsibility
//! - Implement `Repository<T>` once for every `SqliteEntity`.
//! - Verify the borrowed connection is migrated before use.
//!
//! # Invariants
//! - Reads go through `SqliteEntity::SELECT_SQL` so joins stay in one place.
//! - `save` reads the row back, so returned records carry joined fields.

use crate::db::migrations::{latest_version, schema_version};
use crate::model::{Entity, EntityId};
use crate::repo::{RepoError, RepoResult, Repository};
use log::{debug, info};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Params, Row};
use std::marker::PhantomData;

/// Table mapping that lets `SqliteRepository` persist an entity.
pub trait SqliteEntity: Entity + Sized {
    /// Backing table name.
    const TABLE: &'static str;
    /// Writable columns, in the order produced by `write_values`.
    const WRITE_COLUMNS: &'static [&'static str];
    /// `SELECT ... FROM ...` without `WHERE`/`ORDER BY`.
    const SELECT_SQL: &'static str;
    /// Qualified id column usable in clauses appended to `SELECT_SQL`.
    const ID_COLUMN: &'static str;

    /// Values for `WRITE_COLUMNS`.
    fn write_values(&self) -> Vec<Value>;

    /// Builds one record from a `SELECT_SQL` row.
    fn from_row(row: &Row<'_>) -> RepoResult<Self>;
}

/// SQLite-backed repository borrowing an open, migrated connection.
pub struct SqliteRepository<'conn, T> {
    conn: &'conn Connection,
    _entity: PhantomData<fn() -> T>,
}

impl<'conn, T: SqliteEntity> SqliteRepository<'conn, T> {
    /// Creates repository from migrated connection.
    ///
    /// # Errors
    /// - `UninitializedConnection` when the schema version is not current.
    /// - `MissingRequiredTable` / `MissingRequiredColumn` on schema drift.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready::<T>(conn)?;
        Ok(Self {
            conn,
            _entity: PhantomData,
        })
    }

    /// Runs `SELECT_SQL` followed by `clause` and collects every row.
    pub(crate) fn query_where<P: Params>(&self, clause: &str, params: P) -> RepoResult<Vec<T>> {
        let mut stmt = self.conn.prepare(&format!("{} {clause};", T::SELECT_SQL))?;
        let mut rows = stmt.query(params)?;
        let mut items = Vec::new();
        while let Some(row) = rows.next()? {
            items.push(T::from_row(row)?);
        }
        Ok(items)
    }

    fn insert(&self, entity: &T) -> RepoResult<EntityId> {
        let columns = T::WRITE_COLUMNS.join(", ");
        let placeholders = (1..=T::WRITE_COLUMNS.len())
            .map(|index| format!("?{index}"))
            .collect::<Vec<_>>()
            .join(", ");
        self.conn.execute(
            &format!("INSERT INTO {} ({columns}) VALUES ({placeholders});", T::TABLE),
            params_from_iter(entity.write_values()),
        )?;

        let rowid = self.conn.last_insert_rowid();
        EntityId::try_from(rowid).map_err(|_| {
            RepoError::InvalidData(format!("rowid {rowid} in {} exceeds id range", T::TABLE))
        })
    }

    fn upsert(&self, entity: &T) -> RepoResult<()> {
        let columns = T::WRITE_COLUMNS.join(", ");
        let placeholders = (2..=T::WRITE_COLUMNS.len() + 1)
            .map(|index| format!("?{index}"))
            .collect::<Vec<_>>()
            .join(", ");
        let assignments = T::WRITE_COLUMNS
            .iter()
            .map(|column| format!("{column} = excluded.{column}"))
            .collect::<Vec<_>>()
            .join(", ");

        let mut values = Vec::with_capacity(T::WRITE_COLUMNS.len() + 1);
        values.push(Value::Integer(i64::from(entity.id())));
        values.extend(entity.write_values());

        self.conn.execute(
            &format!(
                "INSERT INTO {table} (id, {columns}) VALUES (?1, {placeholders})
                 ON CONFLICT (id) DO UPDATE SET {assignments};",
                table = T::TABLE
            ),
            params_from_iter(values),
        )?;
        Ok(())
    }
}

impl<T: SqliteEntity> Repository<T> for SqliteRepository<'_, T> {
    fn save(&self, entity: &T) -> RepoResult<T> {
        entity.validate()?;

        let id = if entity.id() == 0 {
            self.insert(entity)?
        } else {
            self.upsert(entity)?;
            entity.id()
        };
        info!(
            "event=repo_save module=repo status=ok table={} id={}",
            T::TABLE,
            id
        );

        self.find_by_id(id)?.ok_or_else(|| {
            RepoError::InvalidData(format!("{} row {id} missing after save", T::TABLE))
        })
    }

    fn find_by_id(&self, id: EntityId) -> RepoResult<Option<T>> {
        let mut items = self.query_where(&format!("WHERE {} = ?1", T::ID_COLUMN), params![id])?;
        Ok(items.pop())
    }

    fn find_all(&self) -> RepoResult<Vec<T>> {
        self.query_where(&format!("ORDER BY {} ASC", T::ID_COLUMN), [])
    }

    fn delete(&self, entity: &T) -> RepoResult<()> {
        let changed = self.conn.execute(
            &format!("DELETE FROM {} WHERE id = ?1;", T::TABLE),
            params![entity.id()],
        )?;
        debug!(
            "event=repo_delete module=repo status=ok table={} id={} changed={}",
            T::TABLE,
            entity.id(),
            changed
        );
        Ok(())
    }
}

fn ensure_connection_ready<T: SqliteEntity>(conn: &Connection) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version = schema_version(conn)?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    if !table_exists(conn, T::TABLE)? {
        return Err(RepoError::MissingRequiredTable(T::TABLE));
    }

    for column in std::iter::once("id").chain(T::WRITE_COLUMNS.iter().copied()) {
        if !table_has_column(conn, T::TABLE, column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: T::TABLE,
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
