//! Season entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

/// A playing season ("annata") with its roster embedded.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Season {
    /// Unique season identifier.
    pub id: Uuid,
    /// Season label, e.g. `"2024/2025"`. Unique.
    pub year: String,
    /// Display name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Hosted team photo URL.
    pub image: Option<String>,
    /// Roster for the season.
    pub players: Json<Vec<Player>>,
    /// When the season was created.
    pub created_at: DateTime<Utc>,
    /// When the season was last updated.
    pub updated_at: DateTime<Utc>,
}

/// A player listed in a season roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// First name.
    pub name: String,
    /// Last name.
    pub surname: String,
    /// Playing position.
    pub role: String,
    /// Shirt number.
    #[serde(default)]
    pub number: Option<i32>,
    /// Photo URL (a `data:` URL on input, hosted URL once stored).
    #[serde(default)]
    pub image: Option<String>,
    /// Short biography.
    #[serde(default)]
    pub bio: Option<String>,
}

/// Full season payload used for both creation and replacement.
#[derive(Debug, Clone)]
pub struct SeasonInput {
    /// Season label.
    pub year: String,
    /// Display name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Hosted team photo URL.
    pub image: Option<String>,
    /// Roster with hosted player photos.
    pub players: Vec<Player>,
}

impl SeasonInput {
    /// Materialize a new row.
    pub fn into_season(self) -> Season {
        let now = Utc::now();
        Season {
            id: Uuid::new_v4(),
            year: self.year,
            name: self.name,
            description: self.description,
            image: self.image,
            players: Json(self.players),
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite an existing row's content, keeping its identity.
    pub fn apply_to(self, season: &mut Season) {
        season.year = self.year;
        season.name = self.name;
        season.description = self.description;
        season.image = self.image;
        season.players = Json(self.players);
        season.updated_at = Utc::now();
    }
}
