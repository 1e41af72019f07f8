//! Handlers for the booking wizard session lifecycle.
//!
//! The wizard's error model is the disabled button: a blocked `next`,
//! `previous`, or `submit` is not a 4xx but a normal response reporting
//! that nothing moved. Only addressing errors (unknown session id,
//! invalid locale) surface as HTTP errors.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use estudio12_core::booking::{BookingDraft, DraftPatch, SubmissionState, WizardSession, STEP_COUNT};
use estudio12_core::error::CoreError;
use estudio12_core::locale::Locale;
use estudio12_core::whatsapp::{MessageComposer, KEY_PHONE_NUMBER};

use crate::error::{AppError, AppResult};
use crate::middleware::locale::resolve_locale;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// Client-facing view of a wizard session.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub id: Uuid,
    pub step: &'static str,
    pub step_index: u8,
    pub step_count: u8,
    pub submission: SubmissionState,
    pub draft: BookingDraft,
    pub can_advance: bool,
    pub can_submit: bool,
}

impl From<&WizardSession> for SessionSnapshot {
    fn from(session: &WizardSession) -> Self {
        Self {
            id: session.id,
            step: session.step().as_str(),
            step_index: session.step().index(),
            step_count: STEP_COUNT,
            submission: session.submission(),
            draft: session.draft().clone(),
            can_advance: session.can_advance(),
            can_submit: session.can_submit(),
        }
    }
}

/// Result of a `next`/`previous` call.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationResponse {
    pub moved: bool,
    pub session: SessionSnapshot,
}

/// Result of a `submit` call.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub submitted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp_url: Option<String>,
    pub session: SessionSnapshot,
}

/// Locale selection for the composed message.
#[derive(Debug, Deserialize)]
pub struct SubmitParams {
    pub lang: Option<String>,
}

fn session_not_found(id: Uuid) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "WizardSession",
        id: id.to_string(),
    })
}

// ---------------------------------------------------------------------------
// POST /booking/sessions
// ---------------------------------------------------------------------------

/// Start a fresh wizard session.
pub async fn create_session(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let session = state.sessions.create().await;

    tracing::info!(session_id = %session.id, "Booking session created");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: SessionSnapshot::from(&session),
        }),
    ))
}

// ---------------------------------------------------------------------------
// GET /booking/sessions/{id}
// ---------------------------------------------------------------------------

/// Snapshot a session by id.
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let session = state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| session_not_found(id))?;

    Ok(Json(DataResponse {
        data: SessionSnapshot::from(&session),
    }))
}

// ---------------------------------------------------------------------------
// PUT /booking/sessions/{id}/draft
// ---------------------------------------------------------------------------

/// Merge a partial draft update. Always succeeds on a live session:
/// validation gates navigation, never mutation.
pub async fn update_draft(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<DraftPatch>,
) -> AppResult<impl IntoResponse> {
    let snapshot = state
        .sessions
        .with_session(id, |session| {
            session.apply(patch);
            SessionSnapshot::from(&*session)
        })
        .await
        .ok_or_else(|| session_not_found(id))?;

    tracing::debug!(session_id = %id, step = snapshot.step, "Booking draft updated");

    Ok(Json(DataResponse { data: snapshot }))
}

// ---------------------------------------------------------------------------
// POST /booking/sessions/{id}/next
// ---------------------------------------------------------------------------

/// Advance one step if the current step's gate passes. A blocked advance
/// reports `moved: false` with the unchanged snapshot.
pub async fn next_step(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let (moved, snapshot) = state
        .sessions
        .with_session(id, |session| {
            let moved = session.next();
            (moved, SessionSnapshot::from(&*session))
        })
        .await
        .ok_or_else(|| session_not_found(id))?;

    tracing::debug!(session_id = %id, moved, step = snapshot.step, "Booking session next");

    Ok(Json(DataResponse {
        data: NavigationResponse {
            moved,
            session: snapshot,
        },
    }))
}

// ---------------------------------------------------------------------------
// POST /booking/sessions/{id}/previous
// ---------------------------------------------------------------------------

/// Go back one step; a no-op on the first step.
pub async fn previous_step(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let (moved, snapshot) = state
        .sessions
        .with_session(id, |session| {
            let moved = session.previous();
            (moved, SessionSnapshot::from(&*session))
        })
        .await
        .ok_or_else(|| session_not_found(id))?;

    tracing::debug!(session_id = %id, moved, step = snapshot.step, "Booking session previous");

    Ok(Json(DataResponse {
        data: NavigationResponse {
            moved,
            session: snapshot,
        },
    }))
}

// ---------------------------------------------------------------------------
// POST /booking/sessions/{id}/submit
// ---------------------------------------------------------------------------

/// Submit the booking: compose the WhatsApp message in the requested
/// locale and issue the open-link handoff.
///
/// Fire-and-forget: the handoff's outcome is not observed and the session
/// reaches `submitted` unconditionally once it has been issued. A blocked
/// submit (wrong step, incomplete contact data, already submitted)
/// returns `submitted: false` with the unchanged snapshot.
pub async fn submit_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<SubmitParams>,
) -> AppResult<impl IntoResponse> {
    let locale = match params.lang.as_deref() {
        Some(tag) => resolve_locale(tag)?,
        None => Locale::DEFAULT,
    };

    let dict = state.dictionaries.get(locale);
    let composer = MessageComposer::from_dictionary(dict)?;
    let destination = dict.require(KEY_PHONE_NUMBER)?.to_string();

    // Scripted delay for the frontend's loading indicator. Runs before
    // the store lock is taken so other sessions are not held up.
    if state.config.submit_delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(state.config.submit_delay_ms)).await;
    }

    let opener = Arc::clone(&state.opener);
    let (url, snapshot) = state
        .sessions
        .with_session(id, |session| {
            let url = session.submit(&composer, &destination, opener.as_ref());
            (url, SessionSnapshot::from(&*session))
        })
        .await
        .ok_or_else(|| session_not_found(id))?;

    match &url {
        Some(_) => tracing::info!(session_id = %id, %locale, "Booking submitted via WhatsApp handoff"),
        None => tracing::debug!(session_id = %id, "Booking submit refused by gate"),
    }

    Ok(Json(DataResponse {
        data: SubmitResponse {
            submitted: url.is_some(),
            whatsapp_url: url,
            session: snapshot,
        },
    }))
}
