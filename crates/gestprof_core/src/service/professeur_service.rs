//! Professor service: `Dao` plus specialty and hire-date finders.

use crate::model::professeur::Professeur;
use crate::model::specialite::Specialite;
use crate::repo::{ProfesseurRepository, RepoResult};
use crate::service::entity_service::EntityService;
use chrono::NaiveDate;

/// Professor service over any `ProfesseurRepository`.
pub type ProfesseurService<R> = EntityService<Professeur, R>;

impl<R: ProfesseurRepository> EntityService<Professeur, R> {
    /// Lists professors whose specialty id equals `specialite.id`.
    pub fn find_by_specialite(&self, specialite: &Specialite) -> RepoResult<Vec<Professeur>> {
        self.repository().find_by_specialite(specialite)
    }

    /// Lists professors hired within `[start, end]` (inclusive).
    ///
    /// Callers are expected to pass `start <= end`; an inverted range is
    /// forwarded unchanged and matches nothing.
    pub fn find_by_date_embauche_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> RepoResult<Vec<Professeur>> {
        self.repository().find_by_date_embauche_between(start, end)
    }
}
