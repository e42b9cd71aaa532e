//! Core domain logic for the professor/specialty registry.
//! This crate owns the entity model, persistence and use-case services.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LogConfig};
pub use model::professeur::Professeur;
pub use model::specialite::Specialite;
pub use model::{Entity, EntityId, ValidationError};
pub use repo::memory::InMemoryRepository;
pub use repo::professeur_repo::SqliteProfesseurRepository;
pub use repo::specialite_repo::SqliteSpecialiteRepository;
pub use repo::sqlite::{SqliteEntity, SqliteRepository};
pub use repo::{ProfesseurRepository, RepoError, RepoResult, Repository};
pub use service::{Dao, EntityService, ProfesseurService, SpecialiteService};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
