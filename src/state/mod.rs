/// State management module
///
/// This module handles all application state, including:
/// - Recipe records as loaded from the content folder (recipe.rs)
/// - The filter/sort engine behind the browse grid (query.rs)
/// - The tag filter popover state machine and scroll lock (popover.rs)
/// - Persisted preferences (settings.rs)

pub mod popover;
pub mod query;
pub mod recipe;
pub mod settings;
