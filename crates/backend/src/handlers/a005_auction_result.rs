use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Json,
};
use contracts::domain::a005_auction_result::aggregate::AuctionResult;
use contracts::shared::list_query::ListPage;
use std::collections::HashMap;

use super::common::{list_page, parse_id};
use crate::domain::a005_auction_result;

/// GET /api/auction_result
pub async fn list_all() -> Result<Json<Vec<AuctionResult>>, StatusCode> {
    match a005_auction_result::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list auction results: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/auction_result/list?search=&sort=&dir=&page=&instrument_type=&year=
pub async fn list_paginated(
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<ListPage<AuctionResult>>, StatusCode> {
    let items = a005_auction_result::service::list_all().await.map_err(|e| {
        tracing::error!("Failed to list auction results: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    Ok(Json(list_page(&items, &AuctionResult::list_config(), &params)))
}

/// GET /api/auction_result/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<AuctionResult>, StatusCode> {
    let uuid = parse_id(&id)?;
    match a005_auction_result::service::get_by_id(uuid).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to load auction result {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/auction_result/testdata (admin)
pub async fn insert_test_data() -> StatusCode {
    match a005_auction_result::service::insert_test_data().await {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::error!("Failed to insert auction result test data: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
