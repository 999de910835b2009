use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Json,
};
use contracts::domain::a001_report::aggregate::{Report, ReportDto};
use contracts::shared::list_query::ListPage;
use serde_json::json;
use std::collections::HashMap;

use super::common::{list_page, parse_id, service_error_status};
use crate::domain::a001_report;
use crate::system::auth::extractor::CurrentUser;

/// GET /api/report
pub async fn list_all() -> Result<Json<Vec<Report>>, StatusCode> {
    match a001_report::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list reports: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/report/list?search=&sort=&dir=&page=&category=&language=&year=
pub async fn list_paginated(
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<ListPage<Report>>, StatusCode> {
    let items = a001_report::service::list_all().await.map_err(|e| {
        tracing::error!("Failed to list reports: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    Ok(Json(list_page(&items, &Report::list_config(), &params)))
}

/// GET /api/report/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Report>, StatusCode> {
    let uuid = parse_id(&id)?;
    match a001_report::service::get_by_id(uuid).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to load report {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/report (admin)
pub async fn upsert(
    CurrentUser(claims): CurrentUser,
    Json(dto): Json<ReportDto>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let result = match dto.id.clone() {
        Some(id) => a001_report::service::update(dto).await.map(|_| id),
        None => a001_report::service::create(dto)
            .await
            .map(|id| id.to_string()),
    };

    match result {
        Ok(id) => {
            tracing::info!("Report {} saved by {}", id, claims.sub);
            Ok(Json(json!({ "id": id })))
        }
        Err(e) => {
            tracing::error!("Failed to save report: {}", e);
            Err(service_error_status(&e))
        }
    }
}

/// DELETE /api/report/:id (admin)
pub async fn delete(
    CurrentUser(claims): CurrentUser,
    Path(id): Path<String>,
) -> Result<(), StatusCode> {
    let uuid = parse_id(&id)?;
    match a001_report::service::delete(uuid).await {
        Ok(()) => {
            tracing::info!("Report {} deleted by {}", id, claims.sub);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Failed to delete report {}: {}", id, e);
            Err(service_error_status(&e))
        }
    }
}

/// POST /api/report/testdata (admin)
pub async fn insert_test_data() -> StatusCode {
    match a001_report::service::insert_test_data().await {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::error!("Failed to insert report test data: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
