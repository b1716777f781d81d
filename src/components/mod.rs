//! UI Components
//!
//! Leptos views over the controllers in `ingredients`, `ingredient_form`,
//! `recipe_panel` and `saved_recipes`.

mod ingredient_column;
mod add_ingredient_modal;
mod recipe_view;
mod saved_recipe_list;
mod delete_confirm_button;

pub use ingredient_column::IngredientColumn;
pub use add_ingredient_modal::AddIngredientModal;
pub use recipe_view::RecipeView;
pub use saved_recipe_list::SavedRecipeList;
pub use delete_confirm_button::DeleteConfirmButton;
