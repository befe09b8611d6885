use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Identifier issued by the repository. Never reused within a process.
pub type ProductId = u64;

/// Product entity.
///
/// Only the repository builds these, so `id` always comes from its counter.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Product {
    /// Unique product identifier
    #[schema(example = 1)]
    id: ProductId,
    /// Product name
    #[serde(rename = "nome")]
    #[schema(example = "Caneta")]
    name: String,
    /// Product price
    #[serde(rename = "preco")]
    #[schema(example = 2.5)]
    price: f64,
}

impl Product {
    pub(crate) fn new(id: ProductId, input: CreateProduct) -> Self {
        Self {
            id,
            name: input.name,
            price: input.price,
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// Replace name and price; the id stays as issued.
    pub(crate) fn apply_update(&mut self, update: UpdateProduct) {
        self.name = update.name;
        self.price = update.price;
    }
}

/// DTO for creating a new product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateProduct {
    #[serde(rename = "nome")]
    #[schema(example = "Caneta")]
    pub name: String,
    #[serde(rename = "preco")]
    #[schema(example = 2.5)]
    pub price: f64,
}

impl CreateProduct {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// DTO for replacing a product's name and price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateProduct {
    #[serde(rename = "nome")]
    #[schema(example = "Caneta azul")]
    pub name: String,
    #[serde(rename = "preco")]
    #[schema(example = 3.0)]
    pub price: f64,
}

impl UpdateProduct {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// Body returned when a product lookup misses
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Produto não encontrado")]
    pub mensagem: String,
}
