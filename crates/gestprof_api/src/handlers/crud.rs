//! Handlers shared by every resource: list, get, create, update, delete.
//!
//! Each handler builds a repository and service over the locked connection
//! for the duration of one store call. Update and delete check existence
//! first and act in a second call; the two are not atomic.

use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    Json,
};
use gestprof_core::{Dao, EntityId, EntityService, SqliteEntity, SqliteRepository};
use log::info;
use rusqlite::Connection;
use serde::{de::DeserializeOwned, Serialize};

/// Entity exposed as a REST resource.
pub trait Resource: SqliteEntity + Serialize + DeserializeOwned + Send + 'static {}

impl<T> Resource for T where T: SqliteEntity + Serialize + DeserializeOwned + Send + 'static {}

/// Service over the SQLite repository borrowed from `conn`.
pub(crate) fn service<T: Resource>(
    conn: &Connection,
) -> ApiResult<EntityService<T, SqliteRepository<'_, T>>> {
    Ok(EntityService::new(SqliteRepository::try_new(conn)?))
}

fn lookup<T: Resource>(state: &AppState, id: EntityId) -> ApiResult<Option<T>> {
    state.with_conn(|conn| Ok(service::<T>(conn)?.find_by_id(id)?))
}

/// `GET /api/<resource>`
pub async fn find_all<T: Resource>(State(state): State<AppState>) -> ApiResult<Json<Vec<T>>> {
    let items = state.with_conn(|conn| Ok(service::<T>(conn)?.find_all()?))?;
    Ok(Json(items))
}

/// `GET /api/<resource>/:id`
pub async fn find_by_id<T: Resource>(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> ApiResult<Json<T>> {
    lookup::<T>(&state, id)?
        .map(Json)
        .ok_or_else(|| ApiError::not_found::<T>(id))
}

/// `POST /api/<resource>`; any id in the body is discarded.
pub async fn create<T: Resource>(
    State(state): State<AppState>,
    Json(mut entity): Json<T>,
) -> ApiResult<Json<T>> {
    entity.set_id(0);
    let created = state.with_conn(|conn| Ok(service::<T>(conn)?.create(&entity)?))?;
    info!(
        "event=entity_create module=api status=ok entity={} id={}",
        T::ENTITY_NAME,
        created.id()
    );
    Ok(Json(created))
}

/// `PUT /api/<resource>/:id`; the path id overrides any id in the body.
pub async fn update<T: Resource>(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    Json(mut entity): Json<T>,
) -> ApiResult<Json<T>> {
    if lookup::<T>(&state, id)?.is_none() {
        return Err(ApiError::not_found::<T>(id));
    }

    entity.set_id(id);
    let updated = state.with_conn(|conn| Ok(service::<T>(conn)?.update(&entity)?))?;
    Ok(Json(updated))
}

/// `DELETE /api/<resource>/:id`
///
/// Answers success once the entity was found, whatever `Dao::delete`
/// reports; a rejected delete is only visible in the service log.
pub async fn delete<T: Resource>(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> ApiResult<String> {
    let Some(entity) = lookup::<T>(&state, id)? else {
        return Err(ApiError::not_found::<T>(id));
    };

    state.with_conn(|conn| {
        service::<T>(conn)?.delete(&entity);
        Ok(())
    })?;
    Ok(format!("{} has been deleted", T::ENTITY_NAME))
}
