//! Global Application State Store
//!
//! Cross-component state of the main container, using Leptos
//! reactive_stores for field-level reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Item, Recipe};

/// State shared between the ingredient list and the recipe panel
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Ingredient set last reported by the ingredient list
    pub ingredients: Vec<Item>,
    /// Recipe currently on display (at most one)
    pub generated_recipe: Option<Recipe>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

pub fn store_set_ingredients(store: &AppStore, ingredients: Vec<Item>) {
    *store.ingredients().write() = ingredients;
}

pub fn store_set_recipe(store: &AppStore, recipe: Recipe) {
    *store.generated_recipe().write() = Some(recipe);
}

/// Back to the empty state after the current recipe was saved
pub fn store_clear(store: &AppStore) {
    store.ingredients().write().clear();
    *store.generated_recipe().write() = None;
}

pub fn store_recipe(store: &AppStore) -> Option<Recipe> {
    store.generated_recipe().get()
}

pub fn store_ingredient_count(store: &AppStore) -> usize {
    store.ingredients().read().len()
}
