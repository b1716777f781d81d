//! Saved Recipes
//!
//! Recipes the user already stored on the backend.

use leptos::prelude::*;

use crate::api::RecipeGateway;
use crate::error::AppError;
use crate::models::Recipe;

const LOAD_FAILED: &str = "Erro ao carregar receitas salvas.";
const DELETE_FAILED: &str = "Não foi possível excluir a receita. Por favor, tente novamente.";
const UPDATE_FAILED: &str = "Não foi possível atualizar a receita. Por favor, tente novamente.";
const NOT_FOUND: &str = "Receita não encontrada.";

#[derive(Clone)]
pub struct SavedRecipes<G> {
    gateway: G,
    recipes: ArcRwSignal<Vec<Recipe>>,
    loading: ArcRwSignal<bool>,
}

impl<G: RecipeGateway> SavedRecipes<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            recipes: ArcRwSignal::new(Vec::new()),
            loading: ArcRwSignal::new(false),
        }
    }

    pub fn recipes(&self) -> ArcRwSignal<Vec<Recipe>> {
        self.recipes.clone()
    }

    pub fn loading(&self) -> ArcRwSignal<bool> {
        self.loading.clone()
    }

    pub async fn refresh(&self) -> Result<(), AppError> {
        self.loading.set(true);
        let result = self.gateway.get_recipes().await;
        self.loading.set(false);

        match result {
            Ok(recipes) => {
                self.recipes.set(recipes);
                Ok(())
            }
            Err(err) => {
                log::error!("failed to list recipes: {}", err);
                Err(AppError::request(LOAD_FAILED, err))
            }
        }
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        if let Err(err) = self.gateway.delete_recipe(id).await {
            log::error!("failed to delete recipe {}: {}", id, err);
            return Err(AppError::request(DELETE_FAILED, err));
        }
        self.recipes.update(|recipes| recipes.retain(|recipe| recipe.id != id));
        Ok(())
    }

    /// Store new notes for a saved recipe. Empty text clears them.
    pub async fn update_notes(&self, id: &str, notes: &str) -> Result<Recipe, AppError> {
        let current = self
            .recipes
            .with_untracked(|recipes| recipes.iter().find(|recipe| recipe.id == id).cloned());
        let Some(mut recipe) = current else {
            return Err(AppError::Validation(NOT_FOUND));
        };
        let notes = notes.trim();
        recipe.notes = (!notes.is_empty()).then(|| notes.to_string());

        match self.gateway.update_recipe(id, &recipe).await {
            Ok(updated) => {
                self.recipes.update(|recipes| {
                    if let Some(slot) = recipes.iter_mut().find(|r| r.id == id) {
                        *slot = updated.clone();
                    }
                });
                Ok(updated)
            }
            Err(err) => {
                log::error!("failed to update recipe {}: {}", id, err);
                Err(AppError::request(UPDATE_FAILED, err))
            }
        }
    }
}
