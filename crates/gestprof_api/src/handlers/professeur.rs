//! Professor-only query endpoints.

use crate::{error::ApiResult, handlers::crud::service, models::DateRangeQuery, state::AppState};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use gestprof_core::{EntityId, Professeur, Specialite};

/// `GET /api/professeur/specialite/:id`
pub async fn find_by_specialite(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> ApiResult<Json<Vec<Professeur>>> {
    let specialite = Specialite::reference(id);
    let items = state.with_conn(|conn| {
        Ok(service::<Professeur>(conn)?.find_by_specialite(&specialite)?)
    })?;
    Ok(Json(items))
}

/// `GET /api/professeur/filterByDate?dateDebut=yyyy-MM-dd&dateFin=yyyy-MM-dd`
pub async fn filter_by_date(
    State(state): State<AppState>,
    Query(range): Query<DateRangeQuery>,
) -> ApiResult<Json<Vec<Professeur>>> {
    let items = state.with_conn(|conn| {
        Ok(service::<Professeur>(conn)?
            .find_by_date_embauche_between(range.date_debut, range.date_fin)?)
    })?;
    Ok(Json(items))
}
