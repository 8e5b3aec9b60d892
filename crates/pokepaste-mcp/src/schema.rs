//! Input schema for the `create_pokepaste` tool.
//!
//! The same document is advertised in `tools/list` and compiled by the validator.

use serde_json::{Value, json};

pub const TOOL_NAME: &str = "create_pokepaste";
pub const TOOL_DESCRIPTION: &str = "Create a Pokepaste from Pokemon set data";

fn stats_table(description: &str) -> Value {
    json!({
        "type": "object",
        "description": description,
        "properties": {
            "hp": { "type": "integer" },
            "atk": { "type": "integer" },
            "def": { "type": "integer" },
            "spa": { "type": "integer" },
            "spd": { "type": "integer" },
            "spe": { "type": "integer" }
        },
        "required": ["hp", "atk", "def", "spa", "spd", "spe"]
    })
}

fn pokemon_set() -> Value {
    json!({
        "type": "object",
        "properties": {
            "name": { "type": "string", "description": "Pokemon nickname" },
            "species": { "type": "string", "description": "Pokemon species" },
            "item": { "type": "string", "description": "Held item" },
            "ability": { "type": "string", "description": "Pokemon ability" },
            "moves": {
                "type": "array",
                "items": { "type": "string" },
                "description": "Array of move names"
            },
            "nature": { "type": "string", "description": "Pokemon nature" },
            "gender": { "type": "string", "description": "Pokemon gender (M/F/N)" },
            "evs": stats_table("Effort Values"),
            "ivs": stats_table("Individual Values"),
            "level": { "type": "integer", "description": "Pokemon level" },
            "shiny": { "type": "boolean", "description": "Is shiny", "default": false },
            "happiness": { "type": "integer", "description": "Pokemon happiness" },
            "pokeball": { "type": "string", "description": "Pokeball type" },
            "hpType": { "type": "string", "description": "Hidden Power type" },
            "dynamaxLevel": { "type": "integer", "description": "Dynamax level" },
            "gigantamax": { "type": "boolean", "description": "Can Gigantamax" },
            "teraType": { "type": "string", "description": "Tera type" }
        },
        "required": [
            "name", "species", "item", "ability", "moves",
            "nature", "gender", "evs", "ivs", "level"
        ]
    })
}

/// JSON Schema for the tool arguments.
#[must_use]
pub fn input_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "pokemon": {
                "type": "array",
                "description": "Array of Pokemon set objects",
                "minItems": 1,
                "items": pokemon_set()
            },
            "title": { "type": "string", "description": "Optional title for the paste" },
            "author": { "type": "string", "description": "Optional author name" },
            "notes": { "type": "string", "description": "Optional notes" }
        },
        "required": ["pokemon"]
    })
}
