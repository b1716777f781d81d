//! Ingredient Endpoints
//!
//! `/api/v1/receita/itens`

use gloo_net::http::Request;

use super::{check_status, read_json, ApiResult};
use crate::config::ApiConfig;
use crate::models::{Item, NewItem};

const ITEMS_PATH: &str = "/api/v1/receita/itens";

pub async fn list_items(config: &ApiConfig) -> ApiResult<Vec<Item>> {
    let response = Request::get(&config.endpoint(ITEMS_PATH))
        .header("Accept", "application/json")
        .send()
        .await?;
    read_json(response).await
}

pub async fn create_item(config: &ApiConfig, item: &NewItem) -> ApiResult<Item> {
    let response = Request::post(&config.endpoint(ITEMS_PATH))
        .json(item)?
        .send()
        .await?;
    let saved: Item = read_json(response).await?;
    Ok(saved.ensure_id())
}

pub async fn delete_item(config: &ApiConfig, id: i64) -> ApiResult<()> {
    let url = format!("{}/{}", config.endpoint(ITEMS_PATH), id);
    let response = Request::delete(&url).send().await?;
    check_status(response).await?;
    Ok(())
}
