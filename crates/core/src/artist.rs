//! Artist profiles, matching the frontend's catalog entry shape.

use serde::{Deserialize, Serialize};

/// A selectable artist in step 1 of the booking wizard.
///
/// Sourced read-only from the content provider (CMS with fallback); the
/// wizard never mutates the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistProfile {
    pub id: String,
    pub name: String,
    pub specialties: Vec<String>,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

impl ArtistProfile {
    /// Instagram handle without the leading `@`, if any.
    pub fn instagram_handle(&self) -> Option<&str> {
        self.instagram
            .as_deref()
            .map(|h| h.trim_start_matches('@'))
            .filter(|h| !h.is_empty())
    }
}
