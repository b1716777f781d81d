//! Ingredient List
//!
//! Holds the working set of ingredients, keeps it in sync with the backend
//! and turns it into a recipe on request.

use leptos::prelude::*;

use crate::api::RecipeGateway;
use crate::error::AppError;
use crate::events::Listener;
use crate::models::{parse_server_id, Item, Recipe};

const EMPTY_LIST: &str = "Adicione pelo menos um ingrediente";
const LOAD_FAILED: &str = "Erro ao carregar ingredientes.";
const REMOVE_FAILED: &str = "Não foi possível remover o ingrediente. Por favor, tente novamente.";
const GENERATE_FAILED: &str = "Erro ao gerar receita. Tente novamente!";

#[derive(Debug, Clone, PartialEq)]
pub enum IngredientEvent {
    /// The held sequence changed; carries the full new sequence
    Changed(Vec<Item>),
    RecipeGenerated(Recipe),
}

#[derive(Clone)]
pub struct IngredientList<G> {
    gateway: G,
    items: ArcRwSignal<Vec<Item>>,
    loading: ArcRwSignal<bool>,
    generating: ArcRwSignal<bool>,
    form_open: ArcRwSignal<bool>,
    emit: Listener<IngredientEvent>,
}

impl<G: RecipeGateway> IngredientList<G> {
    pub fn new(gateway: G, emit: Listener<IngredientEvent>) -> Self {
        Self {
            gateway,
            items: ArcRwSignal::new(Vec::new()),
            loading: ArcRwSignal::new(false),
            generating: ArcRwSignal::new(false),
            form_open: ArcRwSignal::new(false),
            emit,
        }
    }

    pub fn items(&self) -> ArcRwSignal<Vec<Item>> {
        self.items.clone()
    }

    pub fn loading(&self) -> ArcRwSignal<bool> {
        self.loading.clone()
    }

    pub fn generating(&self) -> ArcRwSignal<bool> {
        self.generating.clone()
    }

    pub fn form_open(&self) -> ArcRwSignal<bool> {
        self.form_open.clone()
    }

    pub fn open_form(&self) {
        self.form_open.set(true);
    }

    pub fn close_form(&self) {
        self.form_open.set(false);
    }

    fn publish(&self, items: Vec<Item>) {
        self.items.set(items.clone());
        (self.emit)(IngredientEvent::Changed(items));
    }

    /// Replace the held sequence with what the backend has stored.
    pub async fn load(&self) -> Result<(), AppError> {
        self.loading.set(true);
        let result = self.gateway.list_ingredients().await;
        self.loading.set(false);

        match result {
            Ok(items) => {
                log::info!("loaded {} ingredients", items.len());
                self.publish(items.into_iter().map(Item::ensure_id).collect());
                Ok(())
            }
            Err(err) => {
                log::error!("failed to load ingredients: {}", err);
                Err(AppError::request(LOAD_FAILED, err))
            }
        }
    }

    /// Append an ingredient the backend already accepted.
    pub fn add_ingredient(&self, item: Item) {
        let mut items = self.items.get_untracked();
        items.push(item);
        self.publish(items);
        self.close_form();
    }

    /// Numeric ids are deleted on the backend first; other ids never left
    /// the browser and are dropped right away.
    pub async fn remove_ingredient(&self, id: &str) -> Result<(), AppError> {
        if let Some(server_id) = parse_server_id(id) {
            if let Err(err) = self.gateway.remove_ingredient(server_id).await {
                log::error!("failed to remove ingredient {}: {}", server_id, err);
                return Err(AppError::request(REMOVE_FAILED, err));
            }
        }

        let mut items = self.items.get_untracked();
        items.retain(|item| item.id.as_deref() != Some(id));
        self.publish(items);
        Ok(())
    }

    /// Generate a recipe from the current sequence. The recipe keeps the
    /// sequence as it was at call time.
    pub async fn request_recipe_generation(&self) -> Result<Recipe, AppError> {
        let snapshot = self.items.get_untracked();
        if snapshot.is_empty() {
            return Err(AppError::Validation(EMPTY_LIST));
        }
        if self.generating.get_untracked() {
            return Err(AppError::Busy);
        }

        self.generating.set(true);
        let result = self.gateway.generate_recipe(&snapshot).await;
        self.generating.set(false);

        match result {
            Ok(generated) => {
                let recipe = generated.into_recipe(snapshot);
                log::info!("generated recipe \"{}\"", recipe.title);
                (self.emit)(IngredientEvent::RecipeGenerated(recipe.clone()));
                Ok(recipe)
            }
            Err(err) => {
                log::error!("failed to generate recipe: {}", err);
                Err(AppError::request(GENERATE_FAILED, err))
            }
        }
    }
}

/// Ingredient name -> glyph
const ICONS: &[(&str, &str)] = &[
    ("tomate", "🍅"),
    ("ovo", "🥚"),
    ("queijo", "🧀"),
    ("pão", "🍞"),
    ("leite", "🥛"),
    ("manteiga", "🧈"),
    ("sal", "🧂"),
    ("pimenta", "🌶️"),
    ("alho", "🧄"),
    ("cebola", "🧅"),
    ("cenoura", "🥕"),
    ("brócolis", "🥦"),
    ("alface", "🥬"),
    ("tofu", "🟫"),
    ("frango", "🍗"),
    ("carne", "🥩"),
    ("peixe", "🐟"),
    ("camarão", "🦐"),
    ("arroz", "🍚"),
    ("macarrão", "🍝"),
    ("feijão", "🫘"),
    ("lentilha", "🫘"),
    ("batata", "🥔"),
    ("abóbora", "🎃"),
    ("melancia", "🍉"),
    ("morango", "🍓"),
    ("banana", "🍌"),
    ("maçã", "🍎"),
    ("laranja", "🍊"),
    ("limão", "🍋"),
    ("abacaxi", "🍍"),
    ("uva", "🍇"),
    ("melão", "🍈"),
    ("pêra", "🍐"),
    ("chocolate", "🍫"),
    ("café", "☕"),
    ("chá", "🫖"),
    ("iogurte", "🥛"),
    ("mel", "🍯"),
    ("azeite", "🫒"),
    ("vinagre", "🍶"),
    ("molho", "🍲"),
    ("sopa", "🍲"),
    ("caldo", "🍲"),
];

pub const DEFAULT_ICON: &str = "🥘";

pub fn ingredient_icon(name: &str) -> &'static str {
    let name = name.to_lowercase();
    ICONS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, icon)| *icon)
        .unwrap_or(DEFAULT_ICON)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::{Call, MockGateway};
    use crate::events::recorder;

    fn list_with(gateway: MockGateway, items: Vec<Item>) -> IngredientList<MockGateway> {
        let (emit, _) = recorder();
        let list = IngredientList::new(gateway, emit);
        list.items.set(items);
        list
    }

    #[tokio::test]
    async fn test_load_assigns_ids() {
        let gateway = MockGateway::new().with_items(vec![
            Item::new("3", "tomate", "2"),
            Item { id: None, nome: "sal".into(), quantidade: String::new() },
        ]);
        let (emit, events) = recorder();
        let list = IngredientList::new(gateway, emit);

        list.load().await.unwrap();

        let items = list.items().get_untracked();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id.as_deref(), Some("3"));
        assert!(items[1].id.is_some());
        assert!(!list.loading().get_untracked());
        assert_eq!(events.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_load_failure_keeps_list() {
        let gateway = MockGateway::new();
        gateway.set_failing(true);
        let list = list_with(gateway, vec![Item::new("1", "ovo", "")]);

        assert!(list.load().await.is_err());
        assert_eq!(list.items().get_untracked().len(), 1);
        assert!(!list.loading().get_untracked());
    }

    #[test]
    fn test_add_appends_and_closes_form() {
        let (emit, events) = recorder();
        let list = IngredientList::new(MockGateway::new(), emit);
        list.open_form();

        list.add_ingredient(Item::new("1", "ovo", "2"));
        list.add_ingredient(Item::new("1", "ovo", "2"));

        assert_eq!(list.items().get_untracked().len(), 2);
        assert!(!list.form_open().get_untracked());
        let events = events.lock().unwrap();
        assert_eq!(events.last(), Some(&IngredientEvent::Changed(list.items().get_untracked())));
    }

    #[tokio::test]
    async fn test_remove_numeric_id_deletes_on_server() {
        let gateway = MockGateway::new();
        let list = list_with(gateway.clone(), vec![Item::new("12", "queijo", ""), Item::new("13", "pão", "")]);

        list.remove_ingredient("12").await.unwrap();

        assert_eq!(gateway.calls(), vec![Call::RemoveIngredient(12)]);
        let items = list.items().get_untracked();
        assert!(items.iter().all(|item| item.id.as_deref() != Some("12")));
        assert_eq!(items.len(), 1);
    }

    #[tokio::test]
    async fn test_remove_failure_keeps_list() {
        let gateway = MockGateway::new();
        gateway.set_failing(true);
        let before = vec![Item::new("12", "queijo", "")];
        let list = list_with(gateway.clone(), before.clone());

        let err = list.remove_ingredient("12").await.unwrap_err();

        assert_eq!(gateway.calls().len(), 1);
        assert_eq!(list.items().get_untracked(), before);
        assert_eq!(err.to_string(), REMOVE_FAILED);
    }

    #[tokio::test]
    async fn test_remove_local_id_skips_server() {
        let gateway = MockGateway::new();
        let list = list_with(gateway.clone(), vec![Item::new("local-1-0", "mel", ""), Item::new("ing-2", "uva", "")]);

        list.remove_ingredient("local-1-0").await.unwrap();

        assert!(gateway.calls().is_empty());
        assert_eq!(list.items().get_untracked(), vec![Item::new("ing-2", "uva", "")]);
    }

    #[tokio::test]
    async fn test_generate_with_empty_list_makes_no_call() {
        let gateway = MockGateway::new().with_generated("Nada", &[]);
        let list = list_with(gateway.clone(), Vec::new());

        let err = list.request_recipe_generation().await.unwrap_err();

        assert_eq!(err, AppError::Validation(EMPTY_LIST));
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn test_generated_recipe_keeps_snapshot() {
        let held = ArcRwSignal::new(Vec::<Item>::new());
        let mutate = held.clone();
        let gateway = MockGateway::new()
            .with_generated("Omelete", &["Bata os ovos", "Frite"])
            .on_generate(move || mutate.update(|items| items.push(Item::new("99", "sal", ""))));

        let (emit, events) = recorder();
        let mut list = IngredientList::new(gateway, emit);
        list.items = held;
        let snapshot = vec![Item::new("1", "ovo", "3")];
        list.items.set(snapshot.clone());

        let recipe = list.request_recipe_generation().await.unwrap();

        assert_eq!(recipe.ingredients, snapshot);
        assert_eq!(recipe.title, "Omelete");
        assert_eq!(recipe.instructions, vec!["Bata os ovos", "Frite"]);
        assert_eq!(list.items().get_untracked().len(), 2);
        assert_eq!(events.lock().unwrap().as_slice(), &[IngredientEvent::RecipeGenerated(recipe)]);
    }

    #[tokio::test]
    async fn test_generate_failure_leaves_state() {
        let gateway = MockGateway::new();
        gateway.set_failing(true);
        let (emit, events) = recorder();
        let list = IngredientList::new(gateway, emit);
        list.items.set(vec![Item::new("1", "ovo", "")]);

        let err = list.request_recipe_generation().await.unwrap_err();

        assert_eq!(err.to_string(), GENERATE_FAILED);
        assert!(!list.generating().get_untracked());
        assert!(events.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_generate_rejected_while_in_flight() {
        let gateway = MockGateway::new().with_generated("Sopa", &[]);
        let list = list_with(gateway.clone(), vec![Item::new("1", "caldo", "")]);
        list.generating.set(true);

        assert_eq!(list.request_recipe_generation().await.unwrap_err(), AppError::Busy);
        assert!(gateway.calls().is_empty());
    }

    #[test]
    fn test_ingredient_icon() {
        assert_eq!(ingredient_icon("Tomate"), "🍅");
        assert_eq!(ingredient_icon("MAÇÃ"), "🍎");
        assert_eq!(ingredient_icon("quinoa"), DEFAULT_ICON);
    }
}
