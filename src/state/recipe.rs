/// Shared data structures for the application state
///
/// These structs represent the recipe records that flow between
/// the content loader and the UI layer.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A single recipe in the catalog.
///
/// The CMS export is one JSON document per recipe with camelCase field
/// names. A recipe is never mutated after loading; filtering and sorting
/// produce new ordered views only.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Opaque unique identifier, stable across reloads
    pub id: String,
    /// Display title, searched case-insensitively
    pub title: String,
    /// URL-style path segment, unique per recipe
    pub slug: String,
    /// Preparation time in minutes
    pub prep_time: u32,
    /// Cooking time in minutes
    pub cook_time: u32,
    /// Cooling or resting time in minutes
    #[serde(default)]
    pub cool_time: Option<u32>,
    /// How long the dish keeps at room temperature, in days
    #[serde(default)]
    pub shelf_life: Option<u32>,
    /// How long the dish keeps refrigerated, in days
    #[serde(default)]
    pub fridge_life: Option<u32>,
    /// How long the dish keeps frozen, in days
    #[serde(default)]
    pub freezer_life: Option<u32>,
    /// Free-text labels used for faceted filtering
    #[serde(default)]
    pub tags: Vec<String>,
    /// Authoring timestamp, the chronological sort key
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub tips: Vec<String>,
    /// Image file for the card grid, relative to the content folder
    #[serde(default)]
    pub thumbnail: Option<String>,
}

impl Recipe {
    /// Total start-to-table time in minutes.
    ///
    /// A missing cool time counts as zero here and in the sort comparators.
    /// This zero-default applies to arithmetic only; display code shows
    /// optional fields exactly when they are present.
    pub fn total_time(&self) -> u32 {
        self.prep_time + self.cook_time + self.cool_time.unwrap_or(0)
    }
}
