//! Backend API
//!
//! `RecipeGateway` is the seam between the UI controllers and the recipe
//! backend. `HttpGateway` talks to the real service with browser fetch;
//! tests swap in `mock::MockGateway`.

mod item;
mod recipe;
#[cfg(test)]
pub mod mock;

use async_trait::async_trait;
use gloo_net::http::Response;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::models::{GeneratedRecipe, Item, NewItem, Recipe};

pub use item::*;
pub use recipe::*;

pub type ApiResult<T> = Result<T, ApiError>;

/// Backend call failures
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Request never produced a response (offline, CORS, DNS)
    Network(String),
    /// Backend answered with a non-2xx status
    Status { status: u16, body: String },
    /// Response body did not have the expected shape
    Decode(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Status { status, body } if body.is_empty() => write!(f, "HTTP {}", status),
            ApiError::Status { status, body } => write!(f, "HTTP {}: {}", status, body),
            ApiError::Decode(msg) => write!(f, "Invalid response: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

/// Operations the recipe backend offers.
///
/// Every call is a single request/response exchange; nothing is retried.
#[async_trait(?Send)]
pub trait RecipeGateway {
    async fn list_ingredients(&self) -> ApiResult<Vec<Item>>;

    /// Persist an ingredient. The returned item always has an id.
    async fn add_ingredient(&self, item: &NewItem) -> ApiResult<Item>;

    async fn remove_ingredient(&self, id: i64) -> ApiResult<()>;

    /// Ask the backend for a recipe. The backend works from the ingredients
    /// stored through `/itens`, so `ingredients` is not sent.
    async fn generate_recipe(&self, ingredients: &[Item]) -> ApiResult<GeneratedRecipe>;

    /// Same endpoint, legacy markdown-ish text response.
    async fn generate_recipe_text(&self) -> ApiResult<Recipe>;

    async fn save_recipe(&self, recipe: &Recipe) -> ApiResult<Recipe>;

    async fn get_recipes(&self) -> ApiResult<Vec<Recipe>>;

    async fn delete_recipe(&self, id: &str) -> ApiResult<()>;

    async fn update_recipe(&self, id: &str, recipe: &Recipe) -> ApiResult<Recipe>;
}

/// Gateway backed by browser fetch
#[derive(Debug, Clone)]
pub struct HttpGateway {
    config: ApiConfig,
}

impl HttpGateway {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl RecipeGateway for HttpGateway {
    async fn list_ingredients(&self) -> ApiResult<Vec<Item>> {
        list_items(&self.config).await
    }

    async fn add_ingredient(&self, item: &NewItem) -> ApiResult<Item> {
        create_item(&self.config, item).await
    }

    async fn remove_ingredient(&self, id: i64) -> ApiResult<()> {
        delete_item(&self.config, id).await
    }

    async fn generate_recipe(&self, ingredients: &[Item]) -> ApiResult<GeneratedRecipe> {
        log::debug!("generating recipe for {} ingredients", ingredients.len());
        generate_recipe(&self.config).await
    }

    async fn generate_recipe_text(&self) -> ApiResult<Recipe> {
        generate_recipe_text(&self.config).await
    }

    async fn save_recipe(&self, recipe: &Recipe) -> ApiResult<Recipe> {
        create_recipe(&self.config, recipe).await
    }

    async fn get_recipes(&self) -> ApiResult<Vec<Recipe>> {
        list_recipes(&self.config).await
    }

    async fn delete_recipe(&self, id: &str) -> ApiResult<()> {
        delete_recipe(&self.config, id).await
    }

    async fn update_recipe(&self, id: &str, recipe: &Recipe) -> ApiResult<Recipe> {
        update_recipe(&self.config, id, recipe).await
    }
}

// ========================
// Response Helpers
// ========================

async fn check_status(response: Response) -> ApiResult<Response> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status { status, body })
}

async fn read_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let response = check_status(response).await?;
    response.json::<T>().await.map_err(ApiError::from)
}

async fn read_text(response: Response) -> ApiResult<String> {
    let response = check_status(response).await?;
    response.text().await.map_err(ApiError::from)
}
