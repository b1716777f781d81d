//! Recipe View Component
//!
//! Shows the generated recipe with save / regenerate actions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::events::listener;
use crate::ingredients::ingredient_icon;
use crate::markdown::{format_instruction, render_notes};
use crate::models::Recipe;
use crate::recipe_panel::{PanelEvent, RecipePanel};

#[component]
pub fn RecipeView(
    #[prop(into)] recipe: Signal<Option<Recipe>>,
    #[prop(into)] on_saved: Callback<Recipe>,
    #[prop(into)] on_regenerated: Callback<Recipe>,
) -> impl IntoView {
    let ctx = use_app_context();

    let panel = RecipePanel::new(
        ctx.gateway.clone(),
        listener(move |event| match event {
            PanelEvent::Saved(recipe) => on_saved.run(recipe),
            PanelEvent::Regenerated(recipe) => on_regenerated.run(recipe),
        }),
    );
    let saving = RwSignal::from(panel.saving());
    let regenerating = RwSignal::from(panel.regenerating());
    let error_message = RwSignal::from(panel.error_message());
    let panel = StoredValue::new(panel);

    // Errors land in `error_message`
    let save = move |_| {
        let Some(current) = recipe.get_untracked() else {
            return;
        };
        let panel = panel.get_value();
        spawn_local(async move {
            let _ = panel.save(&current).await;
        });
    };

    let regenerate = move |_| {
        let Some(current) = recipe.get_untracked() else {
            return;
        };
        let panel = panel.get_value();
        spawn_local(async move {
            let _ = panel.regenerate(&current).await;
        });
    };

    view! {
        <section class="recipe-generator">
            {move || match recipe.get() {
                Some(recipe) => view! { <RecipeCard recipe=recipe /> }.into_any(),
                None => view! {
                    <div class="recipe-empty">
                        <p>"Adicione ingredientes e clique em \"Gerar Receita\" para ver uma sugestão aqui."</p>
                    </div>
                }.into_any(),
            }}

            <Show when=move || !error_message.with(String::is_empty)>
                <p class="error-message">{move || error_message.get()}</p>
            </Show>

            <Show when=move || recipe.with(Option::is_some)>
                <div class="recipe-actions">
                    <button class="save-btn" disabled=move || saving.get() on:click=save>
                        {move || if saving.get() { "Salvando..." } else { "Salvar Receita" }}
                    </button>
                    <button class="regenerate-btn" disabled=move || regenerating.get() on:click=regenerate>
                        {move || if regenerating.get() { "Gerando..." } else { "Gerar Outra" }}
                    </button>
                </div>
            </Show>
        </section>
    }
}

/// Read-only rendering of one recipe
#[component]
fn RecipeCard(recipe: Recipe) -> impl IntoView {
    let Recipe { title, ingredients, instructions, notes, tags, .. } = recipe;
    let tags = tags.unwrap_or_default();

    view! {
        <article class="recipe-card">
            <h2 class="recipe-title">{title}</h2>

            <h3>"Ingredientes"</h3>
            <ul class="recipe-ingredients">
                {ingredients.into_iter().map(|item| {
                    let icon = ingredient_icon(&item.nome);
                    let label = if item.quantidade.is_empty() {
                        item.nome
                    } else {
                        format!("{} {}", item.quantidade, item.nome)
                    };
                    view! {
                        <li>
                            <span class="ingredient-icon">{icon}</span>
                            " "
                            {label}
                        </li>
                    }
                }).collect_view()}
            </ul>

            <h3>"Modo de Preparo"</h3>
            <ol class="recipe-instructions">
                {instructions.into_iter().map(|step| view! {
                    <li inner_html=format_instruction(&step)></li>
                }).collect_view()}
            </ol>

            {notes.map(|notes| view! {
                <div class="recipe-notes" inner_html=render_notes(&notes)></div>
            })}

            {(!tags.is_empty()).then(|| view! {
                <div class="recipe-tags">
                    {tags.into_iter().map(|tag| view! { <span class="tag">{tag}</span> }).collect_view()}
                </div>
            })}
        </article>
    }
}
