//! Specialty (department/subject) record.

use super::{deserialize_lenient_id, require_text, Entity, EntityId, ValidationError};
use serde::{Deserialize, Serialize};

/// Subject-matter specialty referenced by professors.
///
/// `code` and `libelle` default to empty on deserialization so a bare
/// reference such as `{"id": 1}` is accepted inside professor payloads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specialite {
    #[serde(default, deserialize_with = "deserialize_lenient_id")]
    pub id: EntityId,
    /// Short code, e.g. `CS`.
    #[serde(default)]
    pub code: String,
    /// Descriptive label, e.g. `Computer Science`.
    #[serde(default)]
    pub libelle: String,
}

impl Specialite {
    /// Creates an unsaved specialty (`id == 0`).
    pub fn new(code: impl Into<String>, libelle: impl Into<String>) -> Self {
        Self {
            id: 0,
            code: code.into(),
            libelle: libelle.into(),
        }
    }

    /// Builds a transient reference carrying only an id.
    ///
    /// Used by finder queries that match on the specialty id alone.
    pub fn reference(id: EntityId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }
}

impl Entity for Specialite {
    const ENTITY_NAME: &'static str = "Specialite";

    fn id(&self) -> EntityId {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text(Self::ENTITY_NAME, "code", &self.code)?;
        require_text(Self::ENTITY_NAME, "libelle", &self.libelle)?;
        Ok(())
    }
}
