//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the generic persistence contract shared by every entity.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repository writes must enforce `Entity::validate()` before persistence.
//! - `save` with id `0` assigns a fresh id; with a positive id it writes
//!   that row (insert-or-replace).
//! - Deleting a missing row is not an error.

use crate::db::DbError;
use crate::model::professeur::Professeur;
use crate::model::specialite::Specialite;
use crate::model::{EntityId, ValidationError};
use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory;
pub mod professeur_repo;
pub mod specialite_repo;
pub mod sqlite;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    /// Record rejected by model invariants before any write.
    Validation(ValidationError),
    /// Underlying SQLite/bootstrap error.
    Db(DbError),
    /// Persisted data cannot be converted to a valid record.
    InvalidData(String),
    /// Connection schema is not at the expected migrated version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Required table is missing.
    MissingRequiredTable(&'static str),
    /// Required column is missing from expected table.
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
    /// Non-SQLite backend failure.
    Backend(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "repository requires schema version {expected_version}, got {actual_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "repository requires table `{table}`")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "repository requires column `{column}` in table `{table}`")
            }
            Self::Backend(message) => write!(f, "storage backend failure: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Generic persistence contract, one implementation per entity and backend.
pub trait Repository<T> {
    /// Inserts (id `0`) or writes at the given id, returning the stored record.
    fn save(&self, entity: &T) -> RepoResult<T>;
    fn find_by_id(&self, id: EntityId) -> RepoResult<Option<T>>;
    /// Returns all records ordered by id.
    fn find_all(&self) -> RepoResult<Vec<T>>;
    fn delete(&self, entity: &T) -> RepoResult<()>;
}

/// Professor repository with the two professor-specific finders.
pub trait ProfesseurRepository: Repository<Professeur> {
    /// Professors whose specialty id equals `specialite.id`.
    fn find_by_specialite(&self, specialite: &Specialite) -> RepoResult<Vec<Professeur>>;

    /// Professors hired within `[start, end]`, both bounds inclusive.
    fn find_by_date_embauche_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> RepoResult<Vec<Professeur>>;
}
