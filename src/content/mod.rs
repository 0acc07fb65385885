/// Content loading module
///
/// This module handles:
/// - Scanning the content folder for exported recipe documents
/// - Parsing records into Recipe values
/// - Generating and caching card thumbnails

pub mod loader;
pub mod thumbnail;
