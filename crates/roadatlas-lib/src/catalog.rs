use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

/// Numeric identifier for a place.
pub type PlaceId = i64;

/// Display name stored for records whose name field is empty.
pub const PLACEHOLDER_NAME: &str = "null";

/// Bidirectional name/identifier lookup tables built from the places file.
///
/// Both maps are first-seen-wins: a later record reusing an identifier is
/// discarded, and a later record reusing a name keeps resolving to the
/// identifier that claimed the name first. The two key sets therefore need
/// not mirror each other.
#[derive(Debug, Clone, Default)]
pub struct PlaceCatalog {
    name_to_id: HashMap<String, PlaceId>,
    id_to_name: HashMap<PlaceId, String>,
}

impl PlaceCatalog {
    /// Lookup a place identifier by its case-sensitive name.
    pub fn place_id_by_name(&self, name: &str) -> Option<PlaceId> {
        self.name_to_id.get(name).copied()
    }

    /// Lookup a place name by identifier.
    pub fn place_name(&self, id: PlaceId) -> Option<&str> {
        self.id_to_name.get(&id).map(String::as_str)
    }

    /// Name for an identifier, falling back to the placeholder sentinel.
    pub fn display_name(&self, id: PlaceId) -> &str {
        self.place_name(id).unwrap_or(PLACEHOLDER_NAME)
    }

    /// Number of identifiers with a recorded name.
    pub fn place_count(&self) -> usize {
        self.id_to_name.len()
    }

    /// Number of unique names usable for forward lookup.
    pub fn name_count(&self) -> usize {
        self.name_to_id.len()
    }

    /// Iterate the forward name lookup entries, up to `limit`.
    pub fn sample_names(&self, limit: usize) -> Vec<(&str, PlaceId)> {
        self.name_to_id
            .iter()
            .take(limit)
            .map(|(name, id)| (name.as_str(), *id))
            .collect()
    }
}

/// Load the places file into a [`PlaceCatalog`].
///
/// Each non-blank line is `<identifier>,<name>` split into exactly two
/// parts, so names may contain further commas. An empty name field is
/// stored as the `"null"` placeholder. Any malformed line aborts the load.
pub fn load_places(place_file: &Path) -> Result<PlaceCatalog> {
    if !place_file.exists() {
        return Err(Error::PlaceFileNotFound {
            path: place_file.to_path_buf(),
        });
    }

    let contents = fs::read_to_string(place_file)?;
    let mut catalog = PlaceCatalog::default();

    for (index, raw_line) in contents.lines().enumerate() {
        let line_number = index + 1;
        let stripped = raw_line.trim();
        if stripped.is_empty() {
            continue;
        }

        let malformed = || Error::MalformedPlace {
            path: place_file.to_path_buf(),
            line: line_number,
            content: raw_line.to_string(),
        };

        let (id_field, name_field) = stripped.split_once(',').ok_or_else(malformed)?;

        let id_field = id_field.trim();
        if id_field.is_empty() {
            return Err(malformed());
        }
        let place_id: PlaceId = id_field.parse().map_err(|_| malformed())?;

        let name_field = name_field.trim();
        let place_name = if name_field.is_empty() {
            PLACEHOLDER_NAME
        } else {
            name_field
        };

        catalog
            .id_to_name
            .entry(place_id)
            .or_insert_with(|| place_name.to_string());
        catalog
            .name_to_id
            .entry(place_name.to_string())
            .or_insert(place_id);
    }

    debug!(
        path = %place_file.display(),
        places = catalog.place_count(),
        names = catalog.name_count(),
        "loaded place catalog"
    );

    Ok(catalog)
}
