//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::HttpGateway;

/// App-wide handles provided via context
#[derive(Clone)]
pub struct AppContext {
    /// Backend gateway used by every component
    pub gateway: HttpGateway,
    /// Bumped whenever the saved recipe list should be fetched again - read
    pub saved_version: ReadSignal<u32>,
    /// Bumped whenever the saved recipe list should be fetched again - write
    set_saved_version: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(gateway: HttpGateway, saved_version: (ReadSignal<u32>, WriteSignal<u32>)) -> Self {
        Self {
            gateway,
            saved_version: saved_version.0,
            set_saved_version: saved_version.1,
        }
    }

    /// Trigger a reload of saved recipes
    pub fn reload_saved(&self) {
        self.set_saved_version.update(|v| *v += 1);
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
