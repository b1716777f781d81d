//! Receita AI Frontend App
//!
//! Main container: ingredient column on the left, generated recipe on the
//! right, saved recipes below.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::HttpGateway;
use crate::components::{IngredientColumn, RecipeView, SavedRecipeList};
use crate::config::ApiConfig;
use crate::context::AppContext;
use crate::models::{Item, Recipe};
use crate::store::{store_clear, store_ingredient_count, store_recipe, store_set_ingredients, store_set_recipe, AppState};

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(AppState::default());
    let (saved_version, set_saved_version) = signal(0u32);
    let config = ApiConfig::from_build_env();
    log::info!("using backend at {}", config.base_url());

    // Provide context to all children
    let ctx = AppContext::new(HttpGateway::new(config), (saved_version, set_saved_version));
    provide_context(ctx.clone());

    let on_ingredients_change = move |items: Vec<Item>| store_set_ingredients(&store, items);
    let on_recipe_generated = move |recipe: Recipe| store_set_recipe(&store, recipe);
    let on_recipe_saved = move |_: Recipe| {
        store_clear(&store);
        ctx.reload_saved();
    };

    view! {
        <div class="main-container">
            <header class="app-header">
                <h1>"Receita AI"</h1>
                <p class="subtitle">"Monte sua lista de ingredientes e deixe a IA sugerir uma receita"</p>
            </header>

            <div class="app-layout">
                // Left: ingredient list
                <IngredientColumn
                    on_change=on_ingredients_change
                    on_generated=on_recipe_generated
                />

                // Right: generated recipe
                <RecipeView
                    recipe=Signal::derive(move || store_recipe(&store))
                    on_saved=on_recipe_saved
                    on_regenerated=on_recipe_generated
                />
            </div>

            <p class="item-count">{move || format!("{} ingredientes selecionados", store_ingredient_count(&store))}</p>

            <SavedRecipeList />
        </div>
    }
}
