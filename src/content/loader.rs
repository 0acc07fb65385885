/// Recipe document loader
///
/// The CMS export is one JSON document per recipe, anywhere under the
/// content folder. A record that fails to read or parse is skipped and
/// counted; a broken export never takes the whole catalog down.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

use crate::state::recipe::Recipe;

/// Why a single recipe document could not be loaded
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result of a catalog scan
#[derive(Debug, Clone)]
pub struct CatalogLoad {
    /// Every loadable recipe, in walk order
    pub recipes: Vec<Recipe>,
    /// Records dropped for being unreadable, unparseable, or duplicated
    pub skipped_count: usize,
}

/// Whether a directory entry looks like an exported recipe document
pub fn is_recipe_document(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Load and parse one recipe document
pub fn load_recipe(path: &Path) -> Result<Recipe, ContentError> {
    let raw = fs::read_to_string(path).map_err(|source| ContentError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| ContentError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Walk the content folder and load every recipe document in it.
///
/// Documents are visited in file-name order, so reloading an unchanged
/// folder always produces the same catalog order. Ids and slugs must both
/// be unique: the id is the record's identity and the slug keys the
/// thumbnail cache and the detail screen. A record that reuses either is
/// skipped like a broken one, with a warning.
pub fn scan_folder(content_dir: &Path) -> CatalogLoad {
    let mut recipes: Vec<Recipe> = Vec::new();
    let mut seen_ids: HashSet<String> = HashSet::new();
    let mut seen_slugs: HashSet<String> = HashSet::new();
    let mut skipped_count = 0;

    for entry in WalkDir::new(content_dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !is_recipe_document(path) {
            continue;
        }

        match load_recipe(path) {
            Ok(recipe) => {
                if seen_ids.contains(&recipe.id) {
                    log::warn!(
                        "skipping duplicate id '{}' from {}",
                        recipe.id,
                        path.display()
                    );
                    skipped_count += 1;
                } else if seen_slugs.contains(&recipe.slug) {
                    log::warn!(
                        "skipping duplicate slug '{}' from {}",
                        recipe.slug,
                        path.display()
                    );
                    skipped_count += 1;
                } else {
                    seen_ids.insert(recipe.id.clone());
                    seen_slugs.insert(recipe.slug.clone());
                    recipes.push(recipe);
                }
            }
            Err(err) => {
                log::warn!("{err}");
                skipped_count += 1;
            }
        }
    }

    log::info!(
        "loaded {} recipes from {} ({} skipped)",
        recipes.len(),
        content_dir.display(),
        skipped_count
    );

    CatalogLoad {
        recipes,
        skipped_count,
    }
}
