#![allow(warnings)]
//! Receita AI Frontend Entry Point

mod models;
mod config;
mod logger;
mod error;
mod events;
mod api;
mod recipe_text;
mod markdown;
mod ingredients;
mod ingredient_form;
mod recipe_panel;
mod saved_recipes;
mod context;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init();
    mount_to_body(App);
}
