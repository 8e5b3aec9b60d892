//! Pokemon set data model and the Showdown team export format.
//!
//! This crate is used by:
//! - `pokepaste-mcp` (rendering submitted teams before uploading them)
//!
//! It contains **no** I/O; `export_set` is a pure function of its input.

pub mod export;
pub mod set;

pub use export::export_set;
pub use set::{PokemonSet, StatId, StatsTable};
