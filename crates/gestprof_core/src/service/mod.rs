//! Core use-case services.
//!
//! # Responsibility
//! - Expose the uniform data-access contract (`Dao`) for each entity.
//! - Keep the HTTP layer decoupled from storage details.
//!
//! # Invariants
//! - Services delegate to exactly one repository call per operation.
//! - `Dao::delete` never propagates store errors; it reports `false`.

use crate::model::EntityId;
use crate::repo::RepoResult;

pub mod entity_service;
pub mod professeur_service;

pub use entity_service::{EntityService, SpecialiteService};
pub use professeur_service::ProfesseurService;

/// Generic data-access contract implemented by every entity service.
pub trait Dao<T> {
    /// Persists `entity` and returns the stored instance with its id.
    fn create(&self, entity: &T) -> RepoResult<T>;

    /// Removes `entity`. Returns `false` when the store rejects the delete.
    fn delete(&self, entity: &T) -> bool;

    /// Persists `entity` at its existing id (same store call as `create`).
    fn update(&self, entity: &T) -> RepoResult<T>;

    fn find_all(&self) -> RepoResult<Vec<T>>;

    fn find_by_id(&self, id: EntityId) -> RepoResult<Option<T>>;
}
