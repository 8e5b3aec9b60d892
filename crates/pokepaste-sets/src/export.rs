//! Showdown export text for a single set.
//!
//! The block has no trailing newline; callers join blocks with a blank line.

use crate::set::{PokemonSet, StatId, StatsTable};

const DEFAULT_LEVEL: i64 = 100;
const DEFAULT_HAPPINESS: i64 = 255;
const DEFAULT_DYNAMAX_LEVEL: i64 = 10;
const DEFAULT_IV: i64 = 31;

const HIDDEN_POWER_PREFIX: &str = "Hidden Power ";

/// Render one set as a Showdown export block.
#[must_use]
pub fn export_set(set: &PokemonSet) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(8 + set.moves.len());

    lines.push(header_line(set));

    if !set.ability.is_empty() {
        lines.push(format!("Ability: {}", set.ability));
    }
    if set.level != 0 && set.level != DEFAULT_LEVEL {
        lines.push(format!("Level: {}", set.level));
    }
    if set.shiny == Some(true) {
        lines.push("Shiny: Yes".to_string());
    }
    if let Some(h) = set.happiness
        && h != DEFAULT_HAPPINESS
    {
        lines.push(format!("Happiness: {h}"));
    }
    if let Some(ball) = non_empty(set.pokeball.as_deref()) {
        lines.push(format!("Pokeball: {ball}"));
    }
    if let Some(hp) = non_empty(set.hp_type.as_deref()) {
        lines.push(format!("Hidden Power: {hp}"));
    }
    if let Some(d) = set.dynamax_level
        && d != DEFAULT_DYNAMAX_LEVEL
    {
        lines.push(format!("Dynamax Level: {d}"));
    }
    if set.gigantamax == Some(true) {
        lines.push("Gigantamax: Yes".to_string());
    }
    if let Some(tera) = non_empty(set.tera_type.as_deref()) {
        lines.push(format!("Tera Type: {tera}"));
    }

    if let Some(evs) = stat_line("EVs", &set.evs, |v| v != 0) {
        lines.push(evs);
    }
    if !set.nature.is_empty() {
        lines.push(format!("{} Nature", set.nature));
    }
    if let Some(ivs) = stat_line("IVs", &set.ivs, |v| v != DEFAULT_IV) {
        lines.push(ivs);
    }

    for mv in &set.moves {
        lines.push(format!("- {}", normalize_move(mv)));
    }

    lines.join("\n")
}

fn header_line(set: &PokemonSet) -> String {
    let mut out = if !set.name.is_empty() && set.name != set.species {
        format!("{} ({})", set.name, set.species)
    } else {
        set.species.clone()
    };

    match set.gender.as_str() {
        "M" => out.push_str(" (M)"),
        "F" => out.push_str(" (F)"),
        _ => {}
    }

    if !set.item.is_empty() {
        out.push_str(" @ ");
        out.push_str(&set.item);
    }
    out
}

fn stat_line(label: &str, table: &StatsTable, shown: impl Fn(i64) -> bool) -> Option<String> {
    let parts: Vec<String> = StatId::ALL
        .iter()
        .filter(|s| shown(table.get(**s)))
        .map(|s| format!("{} {}", table.get(*s), s.short_name()))
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(format!("{label}: {}", parts.join(" / ")))
    }
}

// `Hidden Power Fire` -> `Hidden Power [Fire]`
fn normalize_move(mv: &str) -> String {
    match mv.strip_prefix(HIDDEN_POWER_PREFIX) {
        Some(kind) if !kind.is_empty() && !kind.starts_with('[') => {
            format!("{HIDDEN_POWER_PREFIX}[{kind}]")
        }
        _ => mv.to_string(),
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pikachu() -> PokemonSet {
        PokemonSet {
            name: "Pikachu".to_string(),
            species: "Pikachu".to_string(),
            item: "Light Ball".to_string(),
            ability: "Static".to_string(),
            moves: ["Thunderbolt", "Quick Attack", "Iron Tail", "Agility"]
                .map(str::to_string)
                .to_vec(),
            nature: "Jolly".to_string(),
            gender: "M".to_string(),
            evs: StatsTable {
                hp: 0,
                atk: 252,
                def: 0,
                spa: 4,
                spd: 0,
                spe: 252,
            },
            ivs: StatsTable::uniform(31),
            level: 50,
            shiny: None,
            happiness: None,
            pokeball: None,
            hp_type: None,
            dynamax_level: None,
            gigantamax: None,
            tera_type: None,
        }
    }

    #[test]
    fn exports_full_block_in_showdown_order() {
        let text = export_set(&pikachu());
        assert_eq!(
            text,
            "Pikachu (M) @ Light Ball\n\
             Ability: Static\n\
             Level: 50\n\
             EVs: 252 Atk / 4 SpA / 252 Spe\n\
             Jolly Nature\n\
             - Thunderbolt\n\
             - Quick Attack\n\
             - Iron Tail\n\
             - Agility"
        );
    }

    #[test]
    fn lists_only_non_default_ivs() {
        let mut set = pikachu();
        set.ivs.atk = 0;
        let text = export_set(&set);
        assert!(text.contains("IVs: 0 Atk"), "{text}");
        assert!(!text.contains("31 HP"));
    }

    #[test]
    fn nickname_differs_from_species() {
        let mut set = pikachu();
        set.name = "Sparky".to_string();
        set.gender = "F".to_string();
        set.item = String::new();
        let header = export_set(&set).lines().next().map(str::to_string);
        assert_eq!(header.as_deref(), Some("Sparky (Pikachu) (F)"));
    }

    #[test]
    fn neutral_gender_and_level_100_are_omitted() {
        let mut set = pikachu();
        set.gender = "N".to_string();
        set.level = 100;
        let text = export_set(&set);
        assert!(text.starts_with("Pikachu @ Light Ball\n"), "{text}");
        assert!(!text.contains("Level:"));
    }

    #[test]
    fn optional_fields_render_when_set() {
        let mut set = pikachu();
        set.shiny = Some(true);
        set.happiness = Some(0);
        set.pokeball = Some("Premier Ball".to_string());
        set.hp_type = Some("Ice".to_string());
        set.dynamax_level = Some(5);
        set.gigantamax = Some(true);
        set.tera_type = Some("Electric".to_string());

        let text = export_set(&set);
        for want in [
            "Shiny: Yes",
            "Happiness: 0",
            "Pokeball: Premier Ball",
            "Hidden Power: Ice",
            "Dynamax Level: 5",
            "Gigantamax: Yes",
            "Tera Type: Electric",
        ] {
            assert!(text.contains(want), "missing {want:?} in {text}");
        }
    }

    #[test]
    fn default_valued_optionals_are_omitted() {
        let mut set = pikachu();
        set.shiny = Some(false);
        set.happiness = Some(255);
        set.dynamax_level = Some(10);
        set.pokeball = Some(String::new());
        let text = export_set(&set);
        assert!(!text.contains("Shiny"));
        assert!(!text.contains("Happiness"));
        assert!(!text.contains("Dynamax"));
        assert!(!text.contains("Pokeball"));
    }

    #[test]
    fn minimal_set_has_no_stat_lines() {
        let mut set = pikachu();
        set.species = "Bulbasaur".to_string();
        set.name = "Bulbasaur".to_string();
        set.item = String::new();
        set.evs = StatsTable::default();
        set.moves = vec!["Tackle".to_string()];
        let text = export_set(&set);
        assert!(text.contains("Bulbasaur"));
        assert!(!text.contains("EVs:"));
        assert!(!text.contains("IVs:"));
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn hidden_power_moves_are_bracketed() {
        assert_eq!(normalize_move("Hidden Power Fire"), "Hidden Power [Fire]");
        assert_eq!(normalize_move("Hidden Power [Fire]"), "Hidden Power [Fire]");
        assert_eq!(normalize_move("Hidden Power"), "Hidden Power");
        assert_eq!(normalize_move("Surf"), "Surf");
    }
}
