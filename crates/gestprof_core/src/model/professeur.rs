//! Professor record.
//!
//! # Invariants
//! - A valid professor references exactly one specialty with a store id.
//! - `date_embauche` is a calendar date without time-of-day.

use super::specialite::Specialite;
use super::{deserialize_lenient_id, require_text, Entity, EntityId, ValidationError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Professor with contact details, hire date and specialty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Professeur {
    #[serde(default, deserialize_with = "deserialize_lenient_id")]
    pub id: EntityId,
    pub nom: String,
    pub prenom: String,
    pub telephone: String,
    pub email: String,
    /// Hire date, serialized as `yyyy-MM-dd`.
    pub date_embauche: NaiveDate,
    /// Many-to-one link. Only `specialite.id` is used on writes.
    pub specialite: Option<Specialite>,
}

impl Professeur {
    /// Creates an unsaved professor (`id == 0`).
    pub fn new(
        nom: impl Into<String>,
        prenom: impl Into<String>,
        telephone: impl Into<String>,
        email: impl Into<String>,
        date_embauche: NaiveDate,
        specialite: Specialite,
    ) -> Self {
        Self {
            id: 0,
            nom: nom.into(),
            prenom: prenom.into(),
            telephone: telephone.into(),
            email: email.into(),
            date_embauche,
            specialite: Some(specialite),
        }
    }

    /// Returns the referenced specialty id, `0` when no reference is set.
    pub fn specialite_id(&self) -> EntityId {
        self.specialite.as_ref().map_or(0, |specialite| specialite.id)
    }
}

impl Entity for Professeur {
    const ENTITY_NAME: &'static str = "Professeur";

    fn id(&self) -> EntityId {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text(Self::ENTITY_NAME, "nom", &self.nom)?;
        require_text(Self::ENTITY_NAME, "prenom", &self.prenom)?;
        require_text(Self::ENTITY_NAME, "telephone", &self.telephone)?;
        require_text(Self::ENTITY_NAME, "email", &self.email)?;
        if self.specialite_id() == 0 {
            return Err(ValidationError::MissingReference {
                entity: Self::ENTITY_NAME,
                field: "specialite",
            });
        }
        Ok(())
    }
}
