use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Json,
};
use contracts::domain::a002_auction::aggregate::{Auction, AuctionDto};
use contracts::shared::list_query::ListPage;
use serde_json::json;
use std::collections::HashMap;

use super::common::{list_page, parse_id, service_error_status};
use crate::domain::a002_auction;
use crate::system::auth::extractor::CurrentUser;

/// GET /api/auction
pub async fn list_all() -> Result<Json<Vec<Auction>>, StatusCode> {
    match a002_auction::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list auctions: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/auction/list?search=&sort=&dir=&page=&instrument_type=&status=&year=
pub async fn list_paginated(
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<ListPage<Auction>>, StatusCode> {
    let items = a002_auction::service::list_all().await.map_err(|e| {
        tracing::error!("Failed to list auctions: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    Ok(Json(list_page(&items, &Auction::list_config(), &params)))
}

/// GET /api/auction/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Auction>, StatusCode> {
    let uuid = parse_id(&id)?;
    match a002_auction::service::get_by_id(uuid).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to load auction {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/auction (admin)
pub async fn upsert(
    CurrentUser(claims): CurrentUser,
    Json(dto): Json<AuctionDto>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let result = match dto.id.clone() {
        Some(id) => a002_auction::service::update(dto).await.map(|_| id),
        None => a002_auction::service::create(dto)
            .await
            .map(|id| id.to_string()),
    };

    match result {
        Ok(id) => {
            tracing::info!("Auction {} saved by {}", id, claims.sub);
            Ok(Json(json!({ "id": id })))
        }
        Err(e) => {
            tracing::error!("Failed to save auction: {}", e);
            Err(service_error_status(&e))
        }
    }
}

/// DELETE /api/auction/:id (admin)
pub async fn delete(
    CurrentUser(claims): CurrentUser,
    Path(id): Path<String>,
) -> Result<(), StatusCode> {
    let uuid = parse_id(&id)?;
    match a002_auction::service::delete(uuid).await {
        Ok(()) => {
            tracing::info!("Auction {} deleted by {}", id, claims.sub);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Failed to delete auction {}: {}", id, e);
            Err(service_error_status(&e))
        }
    }
}

/// POST /api/auction/testdata (admin)
pub async fn insert_test_data() -> StatusCode {
    match a002_auction::service::insert_test_data().await {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::error!("Failed to insert auction test data: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
