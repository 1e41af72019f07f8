//! Route modules and the `/api/v1` route tree.

pub mod booking;
pub mod catalog;
pub mod contact;
pub mod content;
pub mod health;

use axum::routing::{get, post, put};
use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /content/{lang}/{page}               page content (CMS w/ fallback)
///
/// /{lang}/artists                      booking artist catalog
/// /{lang}/styles                       selectable tattoo styles
///
/// /booking/sessions                    create session (POST)
/// /booking/sessions/{id}               session snapshot (GET)
/// /booking/sessions/{id}/draft         merge draft fields (PUT)
/// /booking/sessions/{id}/next          advance one step (POST)
/// /booking/sessions/{id}/previous      go back one step (POST)
/// /booking/sessions/{id}/submit        WhatsApp handoff (POST)
///
/// /contact/messages                    contact form → WhatsApp (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/content/{lang}/{page}", get(content::get_page))
        .route("/{lang}/artists", get(catalog::list_artists))
        .route("/{lang}/styles", get(catalog::list_styles))
        .route("/booking/sessions", post(booking::create_session))
        .route("/booking/sessions/{id}", get(booking::get_session))
        .route("/booking/sessions/{id}/draft", put(booking::update_draft))
        .route("/booking/sessions/{id}/next", post(booking::next_step))
        .route("/booking/sessions/{id}/previous", post(booking::previous_step))
        .route("/booking/sessions/{id}/submit", post(booking::submit_session))
        .route("/contact/messages", post(contact::send_message))
}
