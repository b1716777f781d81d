//! Recipe Panel
//!
//! Save and regenerate actions for the recipe on display.

use leptos::prelude::*;

use crate::api::{ApiError, RecipeGateway};
use crate::error::AppError;
use crate::events::Listener;
use crate::models::Recipe;

const SAVE_FAILED: &str = "Erro ao salvar receita. Tente novamente!";
const REGENERATE_FAILED: &str = "Erro ao gerar nova receita. Tente novamente!";

#[derive(Debug, Clone, PartialEq)]
pub enum PanelEvent {
    Saved(Recipe),
    Regenerated(Recipe),
}

#[derive(Clone)]
pub struct RecipePanel<G> {
    gateway: G,
    saving: ArcRwSignal<bool>,
    regenerating: ArcRwSignal<bool>,
    error_message: ArcRwSignal<String>,
    emit: Listener<PanelEvent>,
}

impl<G: RecipeGateway> RecipePanel<G> {
    pub fn new(gateway: G, emit: Listener<PanelEvent>) -> Self {
        Self {
            gateway,
            saving: ArcRwSignal::new(false),
            regenerating: ArcRwSignal::new(false),
            error_message: ArcRwSignal::new(String::new()),
            emit,
        }
    }

    pub fn saving(&self) -> ArcRwSignal<bool> {
        self.saving.clone()
    }

    pub fn regenerating(&self) -> ArcRwSignal<bool> {
        self.regenerating.clone()
    }

    pub fn error_message(&self) -> ArcRwSignal<String> {
        self.error_message.clone()
    }

    pub async fn save(&self, recipe: &Recipe) -> Result<Recipe, AppError> {
        if self.saving.get_untracked() {
            return Err(AppError::Busy);
        }

        self.saving.set(true);
        self.error_message.set(String::new());
        let result = self.gateway.save_recipe(recipe).await;
        self.saving.set(false);

        match result {
            Ok(saved) => {
                log::info!("saved recipe \"{}\"", saved.title);
                (self.emit)(PanelEvent::Saved(saved.clone()));
                Ok(saved)
            }
            Err(err) => {
                log::error!("failed to save recipe {}: {}", recipe.id, err);
                self.error_message.set(SAVE_FAILED.to_string());
                Err(AppError::request(SAVE_FAILED, err))
            }
        }
    }

    /// Ask the backend for a different recipe over the same ingredients.
    ///
    /// A body that is not the structured `{title, instructions}` answer is
    /// fetched again as legacy text. The displayed ingredients are kept
    /// whenever the answer carries none.
    pub async fn regenerate(&self, current: &Recipe) -> Result<Recipe, AppError> {
        if self.regenerating.get_untracked() {
            return Err(AppError::Busy);
        }

        self.regenerating.set(true);
        self.error_message.set(String::new());
        let result = match self.gateway.generate_recipe(&current.ingredients).await {
            Ok(generated) => Ok(generated.into_recipe(current.ingredients.clone())),
            Err(ApiError::Decode(reason)) => {
                log::warn!("generation answer is not JSON ({}), reading it as legacy text", reason);
                self.gateway.generate_recipe_text().await.map(|mut recipe| {
                    if recipe.ingredients.is_empty() {
                        recipe.ingredients = current.ingredients.clone();
                    }
                    recipe
                })
            }
            Err(err) => Err(err),
        };
        self.regenerating.set(false);

        match result {
            Ok(recipe) => {
                (self.emit)(PanelEvent::Regenerated(recipe.clone()));
                Ok(recipe)
            }
            Err(err) => {
                log::error!("failed to regenerate recipe: {}", err);
                self.error_message.set(REGENERATE_FAILED.to_string());
                Err(AppError::request(REGENERATE_FAILED, err))
            }
        }
    }
}
