/// Card thumbnail generation
///
/// Thumbnails are resized once and cached on disk, keyed by recipe slug,
/// so subsequent launches skip the decode entirely.

use std::fs;
use std::path::{Path, PathBuf};

use image::imageops::FilterType;

use crate::state::recipe::Recipe;

/// Bounding box of generated thumbnails (square)
pub const THUMBNAIL_SIZE: u32 = 512;

/// Get the thumbnail cache directory
/// Returns ~/.cache/recipe-shelf/thumbnails on Linux
pub fn cache_dir() -> PathBuf {
    let mut path = dirs_next::cache_dir()
        .or_else(dirs_next::home_dir)
        .expect("Could not determine cache directory");

    path.push("recipe-shelf");
    path.push("thumbnails");

    fs::create_dir_all(&path).expect("Failed to create thumbnail cache directory");

    path
}

/// Produce (or reuse) the cached thumbnail for a recipe.
/// Returns None when the recipe has no image at all.
pub fn cached_thumbnail(content_dir: &Path, recipe: &Recipe) -> Option<PathBuf> {
    let relative = recipe.thumbnail.as_deref()?;
    let source = content_dir.join(relative);
    let target = cache_dir().join(format!("{}.jpg", recipe.slug));

    if target.exists() {
        return Some(target);
    }

    let written = generate_thumbnail(&source, &target);
    if written.is_some() {
        log::info!("generated thumbnail for '{}'", recipe.slug);
    }
    written
}

/// Decode, resize and write one thumbnail.
/// Returns None if the source cannot be decoded or the target written.
pub fn generate_thumbnail(source: &Path, target: &Path) -> Option<PathBuf> {
    let decoded = match image::open(source) {
        Ok(img) => img,
        Err(err) => {
            log::warn!("could not decode {}: {err}", source.display());
            return None;
        }
    };

    // resize() also scales up; sources already inside the box pass through
    let thumbnail = if decoded.width() > THUMBNAIL_SIZE || decoded.height() > THUMBNAIL_SIZE {
        decoded.resize(THUMBNAIL_SIZE, THUMBNAIL_SIZE, FilterType::Lanczos3)
    } else {
        decoded
    }
    .into_rgb8(); // JPEG output has no alpha channel

    if let Err(err) = thumbnail.save(target) {
        log::warn!("could not write {}: {err}", target.display());
        return None;
    }

    Some(target.to_path_buf())
}
