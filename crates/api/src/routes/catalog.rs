//! Handlers for the booking catalogs: selectable artists and styles.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use estudio12_content::ContentKind;
use estudio12_core::artist::ArtistProfile;
use estudio12_core::style::TattooStyle;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::locale::resolve_locale;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /{lang}/artists
// ---------------------------------------------------------------------------

/// The ordered artist catalog for step 1 of the wizard, founder first.
pub async fn list_artists(
    State(state): State<AppState>,
    Path(lang): Path<String>,
) -> AppResult<impl IntoResponse> {
    let locale = resolve_locale(&lang)?;

    let content = state
        .content
        .get_content(ContentKind::BookingArtists, locale)
        .await;

    // Whatever the source, the catalog must hold well-formed profiles.
    let artists: Vec<ArtistProfile> = serde_json::from_value(content.data)
        .map_err(|e| AppError::InternalError(format!("Malformed artist catalog: {e}")))?;

    tracing::debug!(count = artists.len(), %locale, "Listed booking artists");

    Ok(Json(DataResponse { data: artists }))
}

// ---------------------------------------------------------------------------
// GET /{lang}/styles
// ---------------------------------------------------------------------------

/// A selectable style option with its localized display name.
#[derive(Debug, Serialize)]
pub struct StyleOption {
    pub id: &'static str,
    pub name: String,
}

/// The fixed style set with localized names, presentation order.
pub async fn list_styles(
    State(state): State<AppState>,
    Path(lang): Path<String>,
) -> AppResult<impl IntoResponse> {
    let locale = resolve_locale(&lang)?;
    let dict = state.dictionaries.get(locale);

    let styles: Vec<StyleOption> = TattooStyle::ALL
        .into_iter()
        .map(|style| {
            let name = dict
                .get(&style.dictionary_key())
                .unwrap_or_else(|| style.as_str())
                .to_string();
            StyleOption {
                id: style.as_str(),
                name,
            }
        })
        .collect();

    Ok(Json(DataResponse { data: styles }))
}
