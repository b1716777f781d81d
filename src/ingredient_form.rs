//! Add-Ingredient Form
//!
//! Name/quantity fields and their submission to the backend.

use leptos::prelude::*;

use crate::api::RecipeGateway;
use crate::error::AppError;
use crate::events::Listener;
use crate::models::{Item, NewItem};

const NAME_REQUIRED: &str = "Digite o nome do ingrediente";
const ADD_FAILED: &str = "Erro ao adicionar ingrediente. Por favor, tente novamente.";

#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    Added(Item),
    Closed,
}

#[derive(Clone)]
pub struct IngredientForm<G> {
    gateway: G,
    name: ArcRwSignal<String>,
    quantity: ArcRwSignal<String>,
    submitting: ArcRwSignal<bool>,
    error_message: ArcRwSignal<String>,
    emit: Listener<FormEvent>,
}

impl<G: RecipeGateway> IngredientForm<G> {
    pub fn new(gateway: G, emit: Listener<FormEvent>) -> Self {
        Self {
            gateway,
            name: ArcRwSignal::new(String::new()),
            quantity: ArcRwSignal::new(String::new()),
            submitting: ArcRwSignal::new(false),
            error_message: ArcRwSignal::new(String::new()),
            emit,
        }
    }

    pub fn name(&self) -> ArcRwSignal<String> {
        self.name.clone()
    }

    pub fn quantity(&self) -> ArcRwSignal<String> {
        self.quantity.clone()
    }

    pub fn submitting(&self) -> ArcRwSignal<bool> {
        self.submitting.clone()
    }

    pub fn error_message(&self) -> ArcRwSignal<String> {
        self.error_message.clone()
    }

    pub fn close(&self) {
        (self.emit)(FormEvent::Closed);
    }

    /// Persist the typed ingredient. On success the form empties itself and
    /// asks to be closed; on failure the typed values stay for another try.
    pub async fn submit(&self) -> Result<Item, AppError> {
        let nome = self.name.get_untracked().trim().to_string();
        if nome.is_empty() {
            return Err(AppError::Validation(NAME_REQUIRED));
        }
        if self.submitting.get_untracked() {
            return Err(AppError::Busy);
        }
        let new_item = NewItem {
            nome,
            quantidade: self.quantity.get_untracked().trim().to_string(),
        };

        self.submitting.set(true);
        self.error_message.set(String::new());
        let result = self.gateway.add_ingredient(&new_item).await;
        self.submitting.set(false);

        match result {
            Ok(saved) => {
                let item = saved.ensure_id();
                (self.emit)(FormEvent::Added(item.clone()));
                self.name.set(String::new());
                self.quantity.set(String::new());
                self.close();
                Ok(item)
            }
            Err(err) => {
                log::error!("failed to add ingredient {:?}: {}", new_item.nome, err);
                self.error_message.set(ADD_FAILED.to_string());
                Err(AppError::request(ADD_FAILED, err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::{Call, MockGateway};
    use crate::events::recorder;

    fn form_with(gateway: MockGateway, name: &str, quantity: &str) -> (IngredientForm<MockGateway>, std::sync::Arc<std::sync::Mutex<Vec<FormEvent>>>) {
        let (emit, events) = recorder();
        let form = IngredientForm::new(gateway, emit);
        form.name().set(name.to_string());
        form.quantity().set(quantity.to_string());
        (form, events)
    }

    #[tokio::test]
    async fn test_submit_trims_and_emits() {
        let gateway = MockGateway::new();
        let (form, events) = form_with(gateway.clone(), "  tomate ", " 3 unidades ");

        let item = form.submit().await.unwrap();

        assert_eq!(
            gateway.calls(),
            vec![Call::AddIngredient(NewItem { nome: "tomate".into(), quantidade: "3 unidades".into() })]
        );
        assert_eq!(item.id.as_deref(), Some("1"));
        assert_eq!(form.name().get_untracked(), "");
        assert_eq!(form.quantity().get_untracked(), "");
        assert_eq!(events.lock().unwrap().as_slice(), &[FormEvent::Added(item), FormEvent::Closed]);
    }

    #[tokio::test]
    async fn test_blank_name_makes_no_call() {
        let gateway = MockGateway::new();
        let (form, events) = form_with(gateway.clone(), "   ", "2");

        let err = form.submit().await.unwrap_err();

        assert_eq!(err, AppError::Validation(NAME_REQUIRED));
        assert!(gateway.calls().is_empty());
        assert!(events.lock().unwrap().is_empty());
        assert_eq!(form.quantity().get_untracked(), "2");
    }

    #[tokio::test]
    async fn test_missing_server_id_gets_fallback() {
        let (form, _) = form_with(MockGateway::new().without_ids(), "ovo", "");

        let item = form.submit().await.unwrap();

        let id = item.id.unwrap();
        assert!(!id.is_empty());
        assert!(id.parse::<i64>().is_err());
    }

    #[tokio::test]
    async fn test_failure_keeps_fields_open() {
        let gateway = MockGateway::new();
        gateway.set_failing(true);
        let (form, events) = form_with(gateway, "arroz", "1 xícara");

        let err = form.submit().await.unwrap_err();

        assert_eq!(err.to_string(), ADD_FAILED);
        assert_eq!(form.name().get_untracked(), "arroz");
        assert_eq!(form.quantity().get_untracked(), "1 xícara");
        assert_eq!(form.error_message().get_untracked(), ADD_FAILED);
        assert!(!form.submitting().get_untracked());
        assert!(events.lock().unwrap().is_empty());
    }
}
