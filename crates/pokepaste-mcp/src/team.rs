use pokepaste_sets::PokemonSet;
use serde::Deserialize;

/// Validated `create_pokepaste` arguments.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TeamSubmission {
    /// Team members in paste order.
    pub pokemon: Vec<PokemonSet>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl TeamSubmission {
    /// A submission without metadata.
    #[must_use]
    pub fn new(pokemon: Vec<PokemonSet>) -> Self {
        Self {
            pokemon,
            title: None,
            author: None,
            notes: None,
        }
    }

    /// Optional form fields in wire order, skipping the absent ones.
    pub fn metadata(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("title", self.title.as_deref()),
            ("author", self.author.as_deref()),
            ("notes", self.notes.as_deref()),
        ]
        .into_iter()
        .filter_map(|(k, v)| v.map(|v| (k, v)))
    }
}
