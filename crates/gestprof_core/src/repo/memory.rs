//! In-memory repository backend for tests and benchmarks.
//!
//! Mirrors the SQLite contract: ids are assigned on insert, `save` with a
//! positive id writes that slot, deletes of missing rows succeed. Specialty
//! references are stored as given (no join).

use crate::model::professeur::Professeur;
use crate::model::specialite::Specialite;
use crate::model::{Entity, EntityId};
use crate::repo::{ProfesseurRepository, RepoError, RepoResult, Repository};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

struct Rows<T> {
    items: BTreeMap<EntityId, T>,
    last_id: EntityId,
}

/// Thread-safe in-memory implementation of `Repository<T>`.
pub struct InMemoryRepository<T> {
    rows: RwLock<Rows<T>>,
    fail_deletes: AtomicBool,
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Rows {
                items: BTreeMap::new(),
                last_id: 0,
            }),
            fail_deletes: AtomicBool::new(false),
        }
    }

    /// Makes every subsequent `delete` fail with `RepoError::Backend`.
    pub fn set_fail_deletes(&self, fail: bool) {
        self.fail_deletes.store(fail, Ordering::SeqCst);
    }

    /// Number of stored records.
    pub fn count(&self) -> usize {
        self.read().map_or(0, |rows| rows.items.len())
    }

    fn read(&self) -> RepoResult<RwLockReadGuard<'_, Rows<T>>> {
        self.rows
            .read()
            .map_err(|_| RepoError::Backend("in-memory store lock poisoned".to_string()))
    }

    fn write(&self) -> RepoResult<RwLockWriteGuard<'_, Rows<T>>> {
        self.rows
            .write()
            .map_err(|_| RepoError::Backend("in-memory store lock poisoned".to_string()))
    }

    fn filter(&self, predicate: impl Fn(&T) -> bool) -> RepoResult<Vec<T>> {
        Ok(self
            .read()?
            .items
            .values()
            .filter(|item| predicate(item))
            .cloned()
            .collect())
    }
}

impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    fn save(&self, entity: &T) -> RepoResult<T> {
        entity.validate()?;

        let mut rows = self.write()?;
        let mut stored = entity.clone();
        if stored.id() == 0 {
            rows.last_id += 1;
            stored.set_id(rows.last_id);
        } else {
            rows.last_id = rows.last_id.max(stored.id());
        }
        rows.items.insert(stored.id(), stored.clone());
        Ok(stored)
    }

    fn find_by_id(&self, id: EntityId) -> RepoResult<Option<T>> {
        Ok(self.read()?.items.get(&id).cloned())
    }

    fn find_all(&self) -> RepoResult<Vec<T>> {
        self.filter(|_| true)
    }

    fn delete(&self, entity: &T) -> RepoResult<()> {
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(RepoError::Backend(format!(
                "delete of {} {} rejected",
                T::ENTITY_NAME,
                entity.id()
            )));
        }
        self.write()?.items.remove(&entity.id());
        Ok(())
    }
}

impl ProfesseurRepository for InMemoryRepository<Professeur> {
    fn find_by_specialite(&self, specialite: &Specialite) -> RepoResult<Vec<Professeur>> {
        self.filter(|professeur| professeur.specialite_id() == specialite.id)
    }

    fn find_by_date_embauche_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> RepoResult<Vec<Professeur>> {
        self.filter(|professeur| {
            start <= professeur.date_embauche && professeur.date_embauche <= end
        })
    }
}
