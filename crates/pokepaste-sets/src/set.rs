use serde::{Deserialize, Serialize};

/// The six stat channels, in export order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatId {
    Hp,
    Atk,
    Def,
    Spa,
    Spd,
    Spe,
}

impl StatId {
    pub const ALL: [Self; 6] = [
        Self::Hp,
        Self::Atk,
        Self::Def,
        Self::Spa,
        Self::Spd,
        Self::Spe,
    ];

    /// Short display name used in `EVs:` / `IVs:` lines.
    #[must_use]
    pub fn short_name(self) -> &'static str {
        match self {
            Self::Hp => "HP",
            Self::Atk => "Atk",
            Self::Def => "Def",
            Self::Spa => "SpA",
            Self::Spd => "SpD",
            Self::Spe => "Spe",
        }
    }
}

/// A full record of the six stat channels (EVs or IVs).
///
/// No range checks: values are rendered as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatsTable {
    pub hp: i64,
    pub atk: i64,
    pub def: i64,
    pub spa: i64,
    pub spd: i64,
    pub spe: i64,
}

impl StatsTable {
    /// Every channel set to `value`.
    #[must_use]
    pub fn uniform(value: i64) -> Self {
        Self {
            hp: value,
            atk: value,
            def: value,
            spa: value,
            spd: value,
            spe: value,
        }
    }

    #[must_use]
    pub fn get(&self, stat: StatId) -> i64 {
        match stat {
            StatId::Hp => self.hp,
            StatId::Atk => self.atk,
            StatId::Def => self.def,
            StatId::Spa => self.spa,
            StatId::Spd => self.spd,
            StatId::Spe => self.spe,
        }
    }
}

/// One team member's loadout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PokemonSet {
    /// Nickname (may equal `species`, or be empty).
    pub name: String,
    pub species: String,
    /// Held item (empty when none).
    pub item: String,
    pub ability: String,
    pub moves: Vec<String>,
    pub nature: String,
    /// `M`, `F` or `N`; anything else is carried but not rendered.
    pub gender: String,
    pub evs: StatsTable,
    pub ivs: StatsTable,
    pub level: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shiny: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub happiness: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pokeball: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hp_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamax_level: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gigantamax: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tera_type: Option<String>,
}
