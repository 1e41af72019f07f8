//! Handler for the contact page form.
//!
//! Like the booking wizard, the contact form stores nothing: the
//! submission is composed into a WhatsApp message and handed off as a
//! deep link for the client to open.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use estudio12_core::error::CoreError;
use estudio12_core::locale::Locale;
use estudio12_core::whatsapp::{self, ContactMessage, KEY_PHONE_NUMBER};

use crate::error::AppResult;
use crate::middleware::locale::resolve_locale;
use crate::response::DataResponse;
use crate::state::AppState;

/// A contact form submission.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub message: String,
}

/// Locale selection for the composed message.
#[derive(Debug, Deserialize)]
pub struct ContactParams {
    pub lang: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    pub whatsapp_url: String,
}

// ---------------------------------------------------------------------------
// POST /contact/messages
// ---------------------------------------------------------------------------

/// Compose the contact message and issue the WhatsApp handoff.
///
/// Name, email, and message are required (the form marks them as such);
/// phone is optional and only included in the message when given.
pub async fn send_message(
    State(state): State<AppState>,
    Query(params): Query<ContactParams>,
    Json(request): Json<ContactRequest>,
) -> AppResult<impl IntoResponse> {
    let locale = match params.lang.as_deref() {
        Some(tag) => resolve_locale(tag)?,
        None => Locale::DEFAULT,
    };

    for (field, value) in [
        ("name", &request.name),
        ("email", &request.email),
        ("message", &request.message),
    ] {
        if value.trim().is_empty() {
            return Err(CoreError::Validation(format!("Field '{field}' is required")).into());
        }
    }

    let dict = state.dictionaries.get(locale);
    let contact = ContactMessage {
        name: request.name,
        email: request.email,
        phone: request.phone.filter(|p| !p.is_empty()),
        message: request.message,
    };

    let message = whatsapp::compose_contact_message(dict, &contact)?;
    let destination = dict.require(KEY_PHONE_NUMBER)?;
    let url = whatsapp::deep_link(destination, &message);

    state.opener.open(&url);

    tracing::info!(%locale, "Contact message handed off to WhatsApp");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: ContactResponse { whatsapp_url: url },
        }),
    ))
}
