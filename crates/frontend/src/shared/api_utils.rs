//! API utilities for frontend-backend communication
//!
//! Адрес backend и HTTP-реализация `RecordSource` для коллекций портала.

use async_trait::async_trait;
use contracts::domain::common::AggregateRoot;
use contracts::shared::record_source::{RecordSource, SourceError};
use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path ("/api/...")
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn with_bearer(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

/// Коллекция backend (`/api/<collection>`) как источник записей
pub struct HttpRecordSource<T> {
    path: String,
    token: Option<String>,
    _marker: PhantomData<T>,
}

impl<T: AggregateRoot> HttpRecordSource<T> {
    pub fn for_aggregate() -> Self {
        Self {
            path: T::api_path(),
            token: None,
            _marker: PhantomData,
        }
    }

    /// Токен администратора: нужен для удаления
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }
}

#[async_trait(?Send)]
impl<T: DeserializeOwned> RecordSource<T> for HttpRecordSource<T> {
    async fn fetch_all(&self) -> Result<Vec<T>, SourceError> {
        let response = with_bearer(Request::get(&api_url(&self.path)), self.token.as_deref())
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(SourceError::Http {
                status: response.status(),
            });
        }

        response
            .json::<Vec<T>>()
            .await
            .map_err(|e| SourceError::Decode(e.to_string()))
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), SourceError> {
        let url = api_url(&format!("{}/{}", self.path, id));
        let response = with_bearer(Request::delete(&url), self.token.as_deref())
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(SourceError::from_status(response.status(), id));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpsertResponse {
    pub id: String,
}

/// POST DTO в коллекцию (создание или обновление), возвращает ID записи
pub async fn upsert_dto<D: Serialize>(
    path: &str,
    dto: &D,
    token: Option<&str>,
) -> Result<String, String> {
    let response = with_bearer(Request::post(&api_url(path)), token)
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Erreur réseau : {}", e))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(if body.trim().is_empty() {
            format!("Erreur serveur : {}", status)
        } else {
            format!("Erreur serveur ({}) : {}", status, body.trim())
        });
    }

    response
        .json::<UpsertResponse>()
        .await
        .map(|r| r.id)
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Заполнить коллекцию демонстрационными записями (`POST /api/<collection>/testdata`)
pub async fn insert_test_data(path: &str, token: Option<&str>) -> Result<(), String> {
    let url = api_url(&format!("{}/testdata", path));
    let response = with_bearer(Request::post(&url), token)
        .send()
        .await
        .map_err(|e| format!("Erreur réseau : {}", e))?;

    if !response.ok() {
        return Err(format!("Erreur serveur : {}", response.status()));
    }
    Ok(())
}
