//! Season and roster entities.

pub mod model;

pub use model::{Player, Season, SeasonInput};
