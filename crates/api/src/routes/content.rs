//! Handlers for CMS-backed page content.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use estudio12_content::{Content, ContentKind};

use crate::error::{AppError, AppResult};
use crate::middleware::locale::resolve_locale;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /content/{lang}/{page}
// ---------------------------------------------------------------------------

/// Resolve one page's content through the CMS→fallback chain.
pub async fn get_page(
    State(state): State<AppState>,
    Path((lang, page)): Path<(String, String)>,
) -> AppResult<impl IntoResponse> {
    let locale = resolve_locale(&lang)?;
    let kind: ContentKind = page.parse().map_err(AppError::Core)?;

    let content: Content = state.content.get_content(kind, locale).await;

    tracing::debug!(%kind, %locale, source = ?content.source, "Resolved page content");

    Ok(Json(DataResponse { data: content }))
}
