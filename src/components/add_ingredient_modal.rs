//! Add Ingredient Modal Component
//!
//! Name + quantity form; saves the ingredient on the backend before handing
//! it to the list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::error::{alert_user, AppError};
use crate::events::listener;
use crate::ingredient_form::{FormEvent, IngredientForm};
use crate::models::Item;

#[component]
pub fn AddIngredientModal(
    #[prop(into)] on_add: Callback<Item>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();

    let form = IngredientForm::new(
        ctx.gateway.clone(),
        listener(move |event| match event {
            FormEvent::Added(item) => on_add.run(item),
            FormEvent::Closed => on_close.run(()),
        }),
    );
    let name = RwSignal::from(form.name());
    let quantity = RwSignal::from(form.quantity());
    let submitting = RwSignal::from(form.submitting());
    let error_message = RwSignal::from(form.error_message());
    let form = StoredValue::new(form);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = form.get_value();
        spawn_local(async move {
            // Backend failures are shown inline through `error_message`
            if let Err(err @ AppError::Validation(_)) = form.submit().await {
                alert_user(&err);
            }
        });
    };

    let close = move |_| form.with_value(|form| form.close());

    view! {
        <div class="modal-backdrop" on:click=close>
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <h3>"Adicionar Ingrediente"</h3>

                <form class="add-ingredient-form" on:submit=submit>
                    <label>
                        "Nome"
                        <input
                            type="text"
                            placeholder="Ex: Tomate"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>

                    <label>
                        "Quantidade"
                        <input
                            type="text"
                            placeholder="Ex: 2 unidades"
                            prop:value=move || quantity.get()
                            on:input=move |ev| quantity.set(event_target_value(&ev))
                        />
                    </label>

                    <Show when=move || !error_message.with(String::is_empty)>
                        <p class="error-message">{move || error_message.get()}</p>
                    </Show>

                    <div class="modal-actions">
                        <button type="button" class="cancel-btn" on:click=close>
                            "Cancelar"
                        </button>
                        <button type="submit" class="confirm-btn" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Adicionando..." } else { "Adicionar" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
