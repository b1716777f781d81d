//! Recipe Endpoints
//!
//! `/api/v1/receita` serves generation (GET), listing and CRUD on saved recipes.

use gloo_net::http::Request;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use super::{check_status, read_json, read_text, ApiResult};
use crate::config::ApiConfig;
use crate::models::{GeneratedRecipe, Recipe};
use crate::recipe_text::legacy_text_to_recipe;

const RECIPE_PATH: &str = "/api/v1/receita";

fn recipe_url(config: &ApiConfig, id: &str) -> String {
    format!("{}/{}", config.endpoint(RECIPE_PATH), utf8_percent_encode(id, NON_ALPHANUMERIC))
}

pub async fn generate_recipe(config: &ApiConfig) -> ApiResult<GeneratedRecipe> {
    let response = Request::get(&config.endpoint(RECIPE_PATH))
        .header("Accept", "application/json")
        .send()
        .await?;
    read_json(response).await
}

pub async fn generate_recipe_text(config: &ApiConfig) -> ApiResult<Recipe> {
    let response = Request::get(&config.endpoint(RECIPE_PATH))
        .header("Accept", "text/plain")
        .send()
        .await?;
    let text = read_text(response).await?;
    Ok(legacy_text_to_recipe(&text))
}

pub async fn create_recipe(config: &ApiConfig, recipe: &Recipe) -> ApiResult<Recipe> {
    let response = Request::post(&config.endpoint(RECIPE_PATH))
        .json(recipe)?
        .send()
        .await?;
    read_json(response).await
}

pub async fn list_recipes(config: &ApiConfig) -> ApiResult<Vec<Recipe>> {
    let response = Request::get(&config.endpoint(RECIPE_PATH))
        .header("Accept", "application/json")
        .send()
        .await?;
    read_json(response).await
}

pub async fn delete_recipe(config: &ApiConfig, id: &str) -> ApiResult<()> {
    let response = Request::delete(&recipe_url(config, id)).send().await?;
    check_status(response).await?;
    Ok(())
}

pub async fn update_recipe(config: &ApiConfig, id: &str, recipe: &Recipe) -> ApiResult<Recipe> {
    let response = Request::put(&recipe_url(config, id))
        .json(recipe)?
        .send()
        .await?;
    read_json(response).await
}
