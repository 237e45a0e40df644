// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::application::use_cases::scrape_pipeline::PipelineError;
use crate::domain::repositories::catalog_repository::RepositoryError;

/// 应用错误类型
///
/// 封装所有可能的应用层错误，统一返回 `{ success: false, message }`
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl AppError {
    pub fn status(&self) -> StatusCode {
        if let Some(err) = self.0.downcast_ref::<PipelineError>() {
            return match err {
                PipelineError::AlreadyRunning => StatusCode::CONFLICT,
                PipelineError::UnknownSource(_) => StatusCode::BAD_REQUEST,
                PipelineError::Disabled(_) => StatusCode::SERVICE_UNAVAILABLE,
                PipelineError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
        }

        match self.0.downcast_ref::<RepositoryError>() {
            Some(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
            Some(RepositoryError::Database(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            None if self.0.is::<validator::ValidationErrors>()
                || self.0.is::<serde_json::Error>() =>
            {
                StatusCode::BAD_REQUEST
            }
            None => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {:#}", self.0);
        }

        let body = Json(json!({ "success": false, "message": self.0.to_string() }));
        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
