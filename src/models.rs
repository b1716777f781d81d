//! Frontend Models
//!
//! Data structures matching backend entities.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Deserializer, Serialize};

/// Ingredient (matches backend `Item`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default, deserialize_with = "optional_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub nome: String,
    #[serde(default)]
    pub quantidade: String,
}

impl Item {
    pub fn new(id: impl Into<String>, nome: impl Into<String>, quantidade: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            nome: nome.into(),
            quantidade: quantidade.into(),
        }
    }

    /// Numeric ids were assigned by the backend; anything else only exists locally.
    pub fn server_id(&self) -> Option<i64> {
        self.id.as_deref().and_then(parse_server_id)
    }

    /// Give the item a client-side id if the backend did not return one.
    pub fn ensure_id(mut self) -> Self {
        if self.id.as_deref().map_or(true, str::is_empty) {
            self.id = Some(local_id());
        }
        self
    }
}

/// Body for creating an ingredient (no id)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewItem {
    pub nome: String,
    pub quantidade: String,
}

/// Recipe data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(deserialize_with = "required_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub ingredients: Vec<Item>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Structured response of the generation endpoint
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeneratedRecipe {
    pub title: String,
    #[serde(default)]
    pub instructions: Vec<String>,
}

impl GeneratedRecipe {
    /// Attach the ingredient snapshot the generation was requested with.
    pub fn into_recipe(self, ingredients: Vec<Item>) -> Recipe {
        Recipe {
            id: recipe_id(),
            title: self.title,
            ingredients,
            instructions: self.instructions,
            notes: None,
            tags: None,
        }
    }
}

pub fn parse_server_id(id: &str) -> Option<i64> {
    id.parse().ok()
}

/// Time-based id for a freshly generated recipe.
pub fn recipe_id() -> String {
    chrono::Utc::now().timestamp_millis().to_string()
}

static LOCAL_SEQ: AtomicU64 = AtomicU64::new(0);

/// Time-based id for an ingredient the backend never numbered.
/// Never parses as an integer, so such items stay local-only.
pub fn local_id() -> String {
    let seq = LOCAL_SEQ.fetch_add(1, Ordering::Relaxed);
    format!("local-{}-{}", chrono::Utc::now().timestamp_millis(), seq)
}

// Backend ids come back as JSON numbers; the UI keys everything by string.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Number(n) => n.to_string(),
            RawId::Text(s) => s,
        }
    }
}

fn optional_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<RawId>::deserialize(deserializer)?.map(String::from))
}

fn required_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    RawId::deserialize(deserializer).map(String::from)
}
