//! Legacy Recipe Text
//!
//! Older backends answered the generation endpoint with a markdown-ish text
//! block instead of JSON:
//!
//! ```text
//! ### Bolo de Cenoura
//! - 2 xícaras farinha
//! #### Modo de Preparo
//! 1. Misture tudo
//! 2. Asse por 40 minutos
//! ```
//!
//! This module turns that text into a [`Recipe`].

use std::sync::OnceLock;

use regex::Regex;

use crate::models::{recipe_id, Item, Recipe};

pub const DEFAULT_TITLE: &str = "Nova Receita";

static TITLE: OnceLock<Regex> = OnceLock::new();
static QUANTITY_AND_NAME: OnceLock<Regex> = OnceLock::new();
static STEPS_HEADING: OnceLock<Regex> = OnceLock::new();
static STEP_MARKER: OnceLock<Regex> = OnceLock::new();

fn title_re() -> &'static Regex {
    TITLE.get_or_init(|| Regex::new(r"(?m)^### (.+)$").expect("valid title regex"))
}

fn quantity_and_name_re() -> &'static Regex {
    // "2 xícaras farinha" -> ("2 xícaras", "farinha")
    QUANTITY_AND_NAME.get_or_init(|| Regex::new(r"^([\d/.,]+ .+?) (.+)$").expect("valid ingredient regex"))
}

fn steps_heading_re() -> &'static Regex {
    STEPS_HEADING.get_or_init(|| {
        Regex::new(r"(?i)####.*(?:Modo de Preparo|Instruções|Preparo)").expect("valid heading regex")
    })
}

fn step_marker_re() -> &'static Regex {
    STEP_MARKER.get_or_init(|| Regex::new(r"\d+\.\s|\n-\s").expect("valid step regex"))
}

/// Parse a legacy text response. Never fails: missing sections fall back to
/// defaults (title) or empty lists.
pub fn legacy_text_to_recipe(text: &str) -> Recipe {
    Recipe {
        id: recipe_id(),
        title: parse_title(text),
        ingredients: parse_ingredients(text),
        instructions: parse_instructions(text),
        notes: None,
        tags: None,
    }
}

fn parse_title(text: &str) -> String {
    title_re()
        .captures(text)
        .map(|caps| caps[1].trim_end().to_string())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string())
}

fn parse_ingredients(text: &str) -> Vec<Item> {
    text.lines()
        .filter_map(|line| line.strip_prefix("- "))
        .enumerate()
        .map(|(index, entry)| {
            let entry = entry.trim_end();
            let id = format!("ing-{}", index);
            match quantity_and_name_re().captures(entry) {
                Some(caps) => Item::new(id, &caps[2], &caps[1]),
                None => Item::new(id, entry, ""),
            }
        })
        .collect()
}

fn parse_instructions(text: &str) -> Vec<String> {
    let Some(heading) = steps_heading_re().find(text) else {
        return Vec::new();
    };
    // Steps may follow the heading on the same line. Any other leftover on
    // that line (":" or "(30 min):") is dropped; the newline stays so a
    // leading "- " bullet is still recognised as a marker.
    let rest = &text[heading.end()..];
    let line_end = rest.find('\n').unwrap_or(rest.len());
    let start = step_marker_re().find(&rest[..line_end]).map_or(line_end, |marker| marker.start());
    let body = &rest[start..];
    step_marker_re()
        .split(body)
        .map(str::trim)
        .filter(|step| !step.is_empty())
        .map(str::to_string)
        .collect()
}
