//! Saved Recipe List Component
//!
//! Recipes stored on the backend, with inline notes and delete.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::error::alert_user;
use crate::saved_recipes::SavedRecipes;

#[component]
pub fn SavedRecipeList() -> impl IntoView {
    let ctx = use_app_context();
    let saved_version = ctx.saved_version;

    let saved = SavedRecipes::new(ctx.gateway.clone());
    let recipes = RwSignal::from(saved.recipes());
    let loading = RwSignal::from(saved.loading());
    let saved = StoredValue::new(saved);

    // Load on mount and after every save
    Effect::new(move |_| {
        let _ = saved_version.get();
        let saved = saved.get_value();
        spawn_local(async move {
            let _ = saved.refresh().await;
        });
    });

    let delete = move |id: String| {
        let saved = saved.get_value();
        spawn_local(async move {
            if let Err(err) = saved.delete(&id).await {
                alert_user(&err);
            }
        });
    };

    // Save notes on blur
    let save_notes = move |id: String, notes: String| {
        let saved = saved.get_value();
        spawn_local(async move {
            if let Err(err) = saved.update_notes(&id, &notes).await {
                alert_user(&err);
            }
        });
    };

    view! {
        <section class="saved-recipes">
            <h2>"Receitas Salvas"</h2>

            <Show when=move || loading.get()>
                <p class="loading">"Carregando receitas..."</p>
            </Show>

            <Show when=move || recipes.with(Vec::is_empty) && !loading.get()>
                <p class="empty-state">"Nenhuma receita salva"</p>
            </Show>

            <ul class="saved-recipe-list">
                {move || recipes.get().into_iter().map(|recipe| {
                    let id = recipe.id.clone();
                    let delete_id = recipe.id.clone();
                    let notes = recipe.notes.clone().unwrap_or_default();
                    let count = recipe.ingredients.len();
                    view! {
                        <li class="saved-recipe">
                            <div class="saved-recipe-header">
                                <span class="saved-recipe-title">{recipe.title}</span>
                                <span class="saved-recipe-meta">{format!("{} ingredientes", count)}</span>
                                <DeleteConfirmButton
                                    button_class="delete-btn"
                                    prompt="Excluir receita?"
                                    on_confirm=move |_: ()| delete(delete_id.clone())
                                />
                            </div>
                            <textarea
                                class="saved-recipe-notes"
                                placeholder="Anotações..."
                                prop:value=notes
                                on:blur=move |ev| {
                                    let value = ev
                                        .target()
                                        .and_then(|target| target.dyn_into::<web_sys::HtmlTextAreaElement>().ok())
                                        .map(|textarea| textarea.value())
                                        .unwrap_or_default();
                                    save_notes(id.clone(), value);
                                }
                            ></textarea>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </section>
    }
}
