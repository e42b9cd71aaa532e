//! Domain model for professors and their specialties.
//!
//! # Responsibility
//! - Define the records persisted by core repositories.
//! - Expose a small `Entity` contract so generic code can read and force ids.
//!
//! # Invariants
//! - Identifier `0` means "not yet assigned by the store".
//! - A record that passed `validate()` has every required field present.

use serde::de::{self, Deserializer, Visitor};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod professeur;
pub mod specialite;

/// Store-assigned row identifier. `0` is the unassigned sentinel.
pub type EntityId = u32;

/// Identity access shared by every persisted record.
pub trait Entity: Clone {
    /// Human-facing entity name used in API messages (`Professeur`, ...).
    const ENTITY_NAME: &'static str;

    fn id(&self) -> EntityId;
    fn set_id(&mut self, id: EntityId);

    /// Checks required-field invariants before persistence.
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Field-level invariant violation detected before a write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required text field is empty or whitespace only.
    BlankField {
        entity: &'static str,
        field: &'static str,
    },
    /// Required reference to another record is missing or unassigned.
    MissingReference {
        entity: &'static str,
        field: &'static str,
    },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankField { entity, field } => {
                write!(f, "{entity}.{field} must not be blank")
            }
            Self::MissingReference { entity, field } => {
                write!(f, "{entity}.{field} must reference an existing record id")
            }
        }
    }
}

impl Error for ValidationError {}

pub(crate) fn require_text(
    entity: &'static str,
    field: &'static str,
    value: &str,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::BlankField { entity, field });
    }
    Ok(())
}

/// Reads a record id from any JSON integer or `null`.
///
/// Ids outside the `EntityId` range collapse to `0` (unassigned).
pub(crate) fn deserialize_lenient_id<'de, D>(deserializer: D) -> Result<EntityId, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(LenientIdVisitor)
}

struct LenientIdVisitor;

impl<'de> Visitor<'de> for LenientIdVisitor {
    type Value = EntityId;

    fn expecting(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("an integer id or null")
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<EntityId, E> {
        Ok(EntityId::try_from(value).unwrap_or(0))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<EntityId, E> {
        Ok(EntityId::try_from(value).unwrap_or(0))
    }

    fn visit_unit<E: de::Error>(self) -> Result<EntityId, E> {
        Ok(0)
    }

    fn visit_none<E: de::Error>(self) -> Result<EntityId, E> {
        Ok(0)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<EntityId, D::Error> {
        deserializer.deserialize_any(self)
    }
}
