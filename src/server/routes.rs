use std::str::FromStr;
use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::calc::performance::{calculate_build_performance, PerformanceResult};
use crate::data::database::GameDatabase;
use crate::data::types::WeaponCategory;
use crate::data::weapon::WeaponSummary;
use crate::server::api::{ApiError, HealthResponse, WeaponsQuery, WeaponsResponse};
use crate::state::calc_state::CalcStateSpecification;
use crate::state::request::CalcRequest;

pub fn create_router(db: Arc<GameDatabase>) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/weapons", get(list_weapons))
        .route("/api/calc-state/spec", get(calc_state_spec))
        .route("/api/calculate", post(calculate))
        .with_state(db)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

async fn list_weapons(
    State(db): State<Arc<GameDatabase>>,
    query: Result<Query<WeaponsQuery>, QueryRejection>,
) -> Result<Json<WeaponsResponse>, ApiError> {
    let Query(query) = query?;
    let categories = match query.category.as_deref() {
        Some(raw) => vec![WeaponCategory::from_str(raw)
            .map_err(|_| ApiError::UnknownCategory(raw.to_string()))?],
        None => WeaponCategory::ALL.to_vec(),
    };

    let weapons: Vec<WeaponSummary> = categories
        .into_iter()
        .flat_map(|category| db.weapons(category).map(WeaponSummary::from))
        .collect();
    Ok(Json(WeaponsResponse {
        count: weapons.len(),
        weapons,
    }))
}

async fn calc_state_spec() -> Json<&'static CalcStateSpecification> {
    Json(CalcStateSpecification::get())
}

async fn calculate(
    State(db): State<Arc<GameDatabase>>,
    payload: Result<Json<CalcRequest>, JsonRejection>,
) -> Result<Json<PerformanceResult>, ApiError> {
    let Json(request) = payload?;
    tracing::debug!(
        category = %request.build.category,
        weapon = %request.build.weapon_id,
        "calculate request"
    );
    let result = calculate_build_performance(&db, &request.build, &request.calc_state)?;
    Ok(Json(result))
}
