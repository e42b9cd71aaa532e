//! API route definitions

use axum::{middleware, routing::get, Router};
use gestprof_core::{Professeur, Specialite};

use crate::{
    handlers::{crud, health, professeur},
    middleware::log_requests,
    state::AppState,
};

/// Resource routes without state attached.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        // Professors
        .route(
            "/api/professeur",
            get(crud::find_all::<Professeur>).post(crud::create::<Professeur>),
        )
        .route(
            "/api/professeur/filterByDate",
            get(professeur::filter_by_date),
        )
        .route(
            "/api/professeur/specialite/:id",
            get(professeur::find_by_specialite),
        )
        .route(
            "/api/professeur/:id",
            get(crud::find_by_id::<Professeur>)
                .put(crud::update::<Professeur>)
                .delete(crud::delete::<Professeur>),
        )
        // Specialties
        .route(
            "/api/specialite",
            get(crud::find_all::<Specialite>).post(crud::create::<Specialite>),
        )
        .route(
            "/api/specialite/:id",
            get(crud::find_by_id::<Specialite>)
                .put(crud::update::<Specialite>)
                .delete(crud::delete::<Specialite>),
        )
}

/// Complete application router with logging and state.
pub fn app(state: AppState) -> Router {
    api_routes()
        .layer(middleware::from_fn(log_requests))
        .with_state(state)
}
