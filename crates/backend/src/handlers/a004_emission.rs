use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Json,
};
use contracts::domain::a004_emission::aggregate::Emission;
use contracts::shared::list_query::ListPage;
use std::collections::HashMap;

use super::common::{list_page, parse_id};
use crate::domain::a004_emission;

/// GET /api/emission
pub async fn list_all() -> Result<Json<Vec<Emission>>, StatusCode> {
    match a004_emission::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list emissions: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/emission/list?search=&sort=&dir=&page=&instrument_type=&year=
pub async fn list_paginated(
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<ListPage<Emission>>, StatusCode> {
    let items = a004_emission::service::list_all().await.map_err(|e| {
        tracing::error!("Failed to list emissions: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    Ok(Json(list_page(&items, &Emission::list_config(), &params)))
}

/// GET /api/emission/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Emission>, StatusCode> {
    let uuid = parse_id(&id)?;
    match a004_emission::service::get_by_id(uuid).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to load emission {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/emission/testdata (admin)
pub async fn insert_test_data() -> StatusCode {
    match a004_emission::service::insert_test_data().await {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::error!("Failed to insert emission test data: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
