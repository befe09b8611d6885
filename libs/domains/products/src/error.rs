use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
#[allow(unused_imports)]
use serde_json::json;
use thiserror::Error;
use utoipa::ToResponse;

use crate::models::{MessageResponse, ProductId};

/// Body text clients receive for any missing product.
pub const NOT_FOUND_MESSAGE: &str = "Produto não encontrado";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(ProductId),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        match self {
            ProductError::NotFound(id) => {
                tracing::info!(product_id = id, "Product not found");
                (
                    StatusCode::NOT_FOUND,
                    Json(MessageResponse {
                        mensagem: NOT_FOUND_MESSAGE.to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

#[derive(ToResponse)]
#[response(
    description = "Product not found",
    content_type = "application/json",
    example = json!({ "mensagem": "Produto não encontrado" })
)]
pub struct ProductNotFoundResponse(pub MessageResponse);
