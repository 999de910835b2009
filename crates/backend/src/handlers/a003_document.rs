use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Json,
};
use contracts::domain::a003_document::aggregate::Document;
use contracts::shared::list_query::ListPage;
use std::collections::HashMap;

use super::common::{list_page, parse_id};
use crate::domain::a003_document;

/// GET /api/document
pub async fn list_all() -> Result<Json<Vec<Document>>, StatusCode> {
    match a003_document::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list documents: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/document/list?search=&sort=&dir=&page=&doc_type=&language=&year=
pub async fn list_paginated(
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<ListPage<Document>>, StatusCode> {
    let items = a003_document::service::list_all().await.map_err(|e| {
        tracing::error!("Failed to list documents: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    Ok(Json(list_page(&items, &Document::list_config(), &params)))
}

/// GET /api/document/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Document>, StatusCode> {
    let uuid = parse_id(&id)?;
    match a003_document::service::get_by_id(uuid).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to load document {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/document/testdata (admin)
pub async fn insert_test_data() -> StatusCode {
    match a003_document::service::insert_test_data().await {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::error!("Failed to insert document test data: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
