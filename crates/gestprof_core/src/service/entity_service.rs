//! Generic entity service delegating `Dao` operations to a repository.

use crate::model::specialite::Specialite;
use crate::model::{Entity, EntityId};
use crate::repo::{RepoResult, Repository};
use crate::service::Dao;
use log::warn;
use std::marker::PhantomData;

/// Use-case service wrapper over one entity repository.
pub struct EntityService<T, R> {
    repo: R,
    _entity: PhantomData<fn() -> T>,
}

/// Specialty service: the plain `Dao` contract.
pub type SpecialiteService<R> = EntityService<Specialite, R>;

impl<T: Entity, R: Repository<T>> EntityService<T, R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            _entity: PhantomData,
        }
    }

    /// Borrows the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repo
    }
}

impl<T: Entity, R: Repository<T>> Dao<T> for EntityService<T, R> {
    fn create(&self, entity: &T) -> RepoResult<T> {
        self.repo.save(entity)
    }

    fn delete(&self, entity: &T) -> bool {
        match self.repo.delete(entity) {
            Ok(()) => true,
            Err(err) => {
                warn!(
                    "event=entity_delete module=service status=error entity={} id={} error={}",
                    T::ENTITY_NAME,
                    entity.id(),
                    err
                );
                false
            }
        }
    }

    fn update(&self, entity: &T) -> RepoResult<T> {
        self.repo.save(entity)
    }

    fn find_all(&self) -> RepoResult<Vec<T>> {
        self.repo.find_all()
    }

    fn find_by_id(&self, id: EntityId) -> RepoResult<Option<T>> {
        self.repo.find_by_id(id)
    }
}

#[cfg(test)]
mod tests {
    use super::SpecialiteService;
    use crate::model::specialite::Specialite;
    use crate::repo::memory::InMemoryRepository;
    use crate::service::Dao;

    #[test]
    fn delete_reports_false_when_store_rejects() {
        let service = SpecialiteService::new(InMemoryRepository::<Specialite>::new());
        let created = service.create(&Specialite::new("CS", "Computer Science")).unwrap();

        service.repository().set_fail_deletes(true);
        assert!(!service.delete(&created));
        assert!(service.find_by_id(created.id).unwrap().is_some());

        service.repository().set_fail_deletes(false);
        assert!(service.delete(&created));
        assert!(service.find_by_id(created.id).unwrap().is_none());
    }
}
