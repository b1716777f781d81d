//! In-memory gateway for controller tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::{ApiError, ApiResult, RecipeGateway};
use crate::models::{GeneratedRecipe, Item, NewItem, Recipe};
use crate::recipe_text::legacy_text_to_recipe;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ListIngredients,
    AddIngredient(NewItem),
    RemoveIngredient(i64),
    GenerateRecipe(usize),
    GenerateRecipeText,
    SaveRecipe(String),
    GetRecipes,
    DeleteRecipe(String),
    UpdateRecipe(String),
}

#[derive(Default)]
struct MockState {
    calls: Vec<Call>,
    failing: bool,
    omit_ids: bool,
    next_id: i64,
    items: Vec<Item>,
    generated: Option<GeneratedRecipe>,
    legacy_text: String,
    recipes: Vec<Recipe>,
}

/// Records every call; answers from canned data or fails every call.
#[derive(Clone, Default)]
pub struct MockGateway {
    state: Arc<Mutex<MockState>>,
    during_generate: Option<Arc<dyn Fn() + Send + Sync>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(self, items: Vec<Item>) -> Self {
        self.state.lock().unwrap().items = items;
        self
    }

    pub fn with_generated(self, title: &str, steps: &[&str]) -> Self {
        self.state.lock().unwrap().generated = Some(GeneratedRecipe {
            title: title.to_string(),
            instructions: steps.iter().map(|s| s.to_string()).collect(),
        });
        self
    }

    pub fn with_legacy_text(self, text: &str) -> Self {
        self.state.lock().unwrap().legacy_text = text.to_string();
        self
    }

    pub fn with_recipes(self, recipes: Vec<Recipe>) -> Self {
        self.state.lock().unwrap().recipes = recipes;
        self
    }

    /// Created items come back without an id
    pub fn without_ids(self) -> Self {
        self.state.lock().unwrap().omit_ids = true;
        self
    }

    /// Runs while a structured generation request is "in flight"
    pub fn on_generate(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.during_generate = Some(Arc::new(hook));
        self
    }

    pub fn set_failing(&self, failing: bool) {
        self.state.lock().unwrap().failing = failing;
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    fn record(&self, call: Call) -> ApiResult<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        if state.failing {
            Err(ApiError::Status { status: 500, body: String::new() })
        } else {
            Ok(())
        }
    }
}

#[async_trait(?Send)]
impl RecipeGateway for MockGateway {
    async fn list_ingredients(&self) -> ApiResult<Vec<Item>> {
        self.record(Call::ListIngredients)?;
        Ok(self.state.lock().unwrap().items.clone())
    }

    async fn add_ingredient(&self, item: &NewItem) -> ApiResult<Item> {
        self.record(Call::AddIngredient(item.clone()))?;
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let id = (!state.omit_ids).then(|| state.next_id.to_string());
        let saved = Item {
            id,
            nome: item.nome.clone(),
            quantidade: item.quantidade.clone(),
        };
        state.items.push(saved.clone());
        Ok(saved)
    }

    async fn remove_ingredient(&self, id: i64) -> ApiResult<()> {
        self.record(Call::RemoveIngredient(id))?;
        let id = id.to_string();
        self.state.lock().unwrap().items.retain(|item| item.id.as_deref() != Some(id.as_str()));
        Ok(())
    }

    async fn generate_recipe(&self, ingredients: &[Item]) -> ApiResult<GeneratedRecipe> {
        self.record(Call::GenerateRecipe(ingredients.len()))?;
        if let Some(hook) = &self.during_generate {
            hook();
        }
        let generated = self.state.lock().unwrap().generated.clone();
        generated.ok_or_else(|| ApiError::Decode("no canned recipe".to_string()))
    }

    async fn generate_recipe_text(&self) -> ApiResult<Recipe> {
        self.record(Call::GenerateRecipeText)?;
        Ok(legacy_text_to_recipe(&self.state.lock().unwrap().legacy_text))
    }

    async fn save_recipe(&self, recipe: &Recipe) -> ApiResult<Recipe> {
        self.record(Call::SaveRecipe(recipe.id.clone()))?;
        self.state.lock().unwrap().recipes.push(recipe.clone());
        Ok(recipe.clone())
    }

    async fn get_recipes(&self) -> ApiResult<Vec<Recipe>> {
        self.record(Call::GetRecipes)?;
        Ok(self.state.lock().unwrap().recipes.clone())
    }

    async fn delete_recipe(&self, id: &str) -> ApiResult<()> {
        self.record(Call::DeleteRecipe(id.to_string()))?;
        self.state.lock().unwrap().recipes.retain(|recipe| recipe.id != id);
        Ok(())
    }

    async fn update_recipe(&self, id: &str, recipe: &Recipe) -> ApiResult<Recipe> {
        self.record(Call::UpdateRecipe(id.to_string()))?;
        let mut state = self.state.lock().unwrap();
        if let Some(stored) = state.recipes.iter_mut().find(|r| r.id == id) {
            *stored = recipe.clone();
        }
        Ok(recipe.clone())
    }
}
