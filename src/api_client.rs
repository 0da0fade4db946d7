//! api_client.rs
//!
//! Тонкая обёртка над HTTP-клиентом для бэкенда бронирований.
//!
//! Все запросы проходят через [`ApiClient::fetch`]: он добавляет JSON-заголовки,
//! проверяет статус ответа и разбирает тело. Ошибки логируются здесь же и
//! возвращаются вызывающему без повторных попыток.

use reqwest::{header, Method};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, error};

use crate::{
    config::ApiConfig,
    error::{ApiError, ApiResult},
    models::{Booking, BookingConfirmation, BookingRequest, Bus, Route},
};

/// Клиент бэкенда бронирований. Дешево клонируется.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

/// Поиск бронирований студента: нужен хотя бы один из ключей.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StudentLookup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "studentId", skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Generic request: JSON in, JSON out. Any transport failure or non-2xx
    /// status is logged and returned as an [`ApiError`].
    pub async fn fetch<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, url);

        let result = self.send(method.clone(), &url, body).await;
        if let Err(ref e) = result {
            error!("API Error: {} {}: {}", method, url, e);
        }
        result
    }

    async fn send<T, B>(&self, method: Method, url: &str, body: Option<&B>) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let mut request = self
            .http
            .request(method, url)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            // Бэкенд отдаёт {"error": "..."}; если нет - берём тело как есть
            let message = serde_json::from_str::<ErrorBody>(&text)
                .map(|b| b.error)
                .unwrap_or(text);
            return Err(ApiError::Status { status, message });
        }

        serde_json::from_str(&text).map_err(|source| ApiError::Decode {
            url: url.to_string(),
            source,
        })
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.fetch::<T, ()>(Method::GET, path, None).await
    }

    pub async fn get_routes(&self) -> ApiResult<Vec<Route>> {
        self.get("/api/routes").await
    }

    pub async fn get_bookings(&self) -> ApiResult<Vec<Booking>> {
        self.get("/api/bookings").await
    }

    pub async fn get_buses(&self) -> ApiResult<Vec<Bus>> {
        self.get("/api/buses").await
    }

    pub async fn get_student_bookings(&self, lookup: &StudentLookup) -> ApiResult<Vec<Booking>> {
        if lookup.email.is_none() && lookup.student_id.is_none() {
            return Err(ApiError::InvalidRequest(
                "Email or Student ID is required".to_string(),
            ));
        }
        let query = serde_urlencoded::to_string(lookup)
            .map_err(|e| ApiError::InvalidRequest(e.to_string()))?;
        self.get(&format!("/api/student-bookings?{}", query)).await
    }

    pub async fn book_seat(&self, request: &BookingRequest) -> ApiResult<BookingConfirmation> {
        self.fetch(Method::POST, "/api/book", Some(request)).await
    }
}
