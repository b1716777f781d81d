//! Ingredient Column Component
//!
//! Ingredient list with add/remove and the "generate recipe" action.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{AddIngredientModal, DeleteConfirmButton};
use crate::context::use_app_context;
use crate::error::alert_user;
use crate::events::listener;
use crate::ingredients::{ingredient_icon, IngredientEvent, IngredientList};
use crate::models::{Item, Recipe};

#[component]
pub fn IngredientColumn(
    #[prop(into)] on_change: Callback<Vec<Item>>,
    #[prop(into)] on_generated: Callback<Recipe>,
) -> impl IntoView {
    let ctx = use_app_context();

    let list = IngredientList::new(
        ctx.gateway.clone(),
        listener(move |event| match event {
            IngredientEvent::Changed(items) => on_change.run(items),
            IngredientEvent::RecipeGenerated(recipe) => on_generated.run(recipe),
        }),
    );
    let items = RwSignal::from(list.items());
    let loading = RwSignal::from(list.loading());
    let generating = RwSignal::from(list.generating());
    let form_open = RwSignal::from(list.form_open());
    let list = StoredValue::new(list);

    // Load stored ingredients on mount (failures are logged by the controller)
    spawn_local({
        let list = list.get_value();
        async move {
            let _ = list.load().await;
        }
    });

    let remove = move |id: String| {
        let list = list.get_value();
        spawn_local(async move {
            if let Err(err) = list.remove_ingredient(&id).await {
                alert_user(&err);
            }
        });
    };

    let generate = move |_| {
        let list = list.get_value();
        spawn_local(async move {
            if let Err(err) = list.request_recipe_generation().await {
                alert_user(&err);
            }
        });
    };

    let on_added = move |item: Item| list.with_value(|list| list.add_ingredient(item));
    let on_close = move |_: ()| list.with_value(|list| list.close_form());

    view! {
        <section class="ingredient-list">
            <div class="ingredient-list-header">
                <h2>"Ingredientes"</h2>
                <button class="add-btn" on:click=move |_| list.with_value(|list| list.open_form())>
                    "+ Adicionar"
                </button>
            </div>

            <Show when=move || loading.get()>
                <p class="loading">"Carregando ingredientes..."</p>
            </Show>

            <ul class="ingredients">
                {move || items.get().into_iter().map(|item| {
                    let id = item.id.clone().unwrap_or_default();
                    let icon = ingredient_icon(&item.nome);
                    view! {
                        <li class="ingredient-item">
                            <span class="ingredient-icon">{icon}</span>
                            <span class="ingredient-name">{item.nome}</span>
                            <span class="ingredient-quantity">{item.quantidade}</span>
                            <DeleteConfirmButton
                                button_class="delete-btn"
                                on_confirm=move |_: ()| remove(id.clone())
                            />
                        </li>
                    }
                }).collect_view()}
            </ul>

            <Show when=move || items.with(Vec::is_empty) && !loading.get()>
                <p class="empty-state">"Nenhum ingrediente adicionado ainda"</p>
            </Show>

            <button
                class="generate-btn"
                disabled=move || generating.get()
                on:click=generate
            >
                {move || if generating.get() { "Gerando receita..." } else { "Gerar Receita" }}
            </button>

            <Show when=move || form_open.get()>
                <AddIngredientModal on_add=on_added on_close=on_close />
            </Show>
        </section>
    }
}
