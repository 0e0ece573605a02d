//! API handlers for the ProseCheck server
//!
//! Provides REST endpoints for:
//! - Correction session lifecycle (create, inspect)
//! - Content analysis via the external grammar oracle
//! - Fix application, session-based and stateless

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use correction_engine::{apply_replacement, SessionState};
use shared_types::Language;

use crate::error::ServerError;
use crate::models::{
    validate_content, ApplyRequest, ApplyResponse, CheckRequest, CreateSessionRequest,
    FixRequest, FixResponse, LanguageEntry, LanguagesResponse, SessionResponse,
};
use crate::state::{AppState, SessionEntry};

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Handler: GET /health
pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "prosecheck-server",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Handler: GET /api/languages
pub async fn handle_list_languages() -> Json<LanguagesResponse> {
    let languages: Vec<LanguageEntry> = Language::ALL
        .iter()
        .map(|l| LanguageEntry {
            code: l.code(),
            name: l.name(),
        })
        .collect();
    let count = languages.len();

    Json(LanguagesResponse {
        success: true,
        languages,
        count,
    })
}

/// Handler: POST /api/session
pub async fn handle_create_session(
    State(state): State<AppState>,
    Json(req): Json<CreateSessionRequest>,
) -> Result<Json<SessionResponse>, ServerError> {
    let language = req
        .language
        .as_deref()
        .map(Language::from_code)
        .unwrap_or_default();

    let id = Uuid::new_v4();
    let entry = SessionEntry::new(language);
    let response = session_response(id, &entry);
    state.sessions.write().await.insert(id, entry);

    info!("Created session {} ({})", id, language);
    Ok(Json(response))
}

/// Handler: GET /api/session/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>, ServerError> {
    let sessions = state.sessions.read().await;
    let entry = sessions.get(&id).ok_or(ServerError::SessionNotFound(id))?;
    Ok(Json(session_response(id, entry)))
}

/// Handler: POST /api/session/:id/check
///
/// Validates the content, submits it to the oracle and stores the results.
/// The session lock is released for the duration of the oracle call; the
/// submission epoch recorded beforehand lets the session discard a result
/// that was superseded by a newer submission in the meantime.
pub async fn handle_check(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<CheckRequest>,
) -> Result<Json<SessionResponse>, ServerError> {
    validate_content(&req.content).map_err(ServerError::Validation)?;

    let (epoch, language) = {
        let mut sessions = state.sessions.write().await;
        let entry = sessions
            .get_mut(&id)
            .ok_or(ServerError::SessionNotFound(id))?;
        (entry.session.begin_submission(), entry.language)
    };

    info!(
        "Session {}: analyzing {} characters ({})",
        id,
        req.content.chars().count(),
        language
    );
    let result = state.oracle.check(&req.content, language).await;

    let mut sessions = state.sessions.write().await;
    let entry = sessions
        .get_mut(&id)
        .ok_or(ServerError::SessionNotFound(id))?;
    entry.updated_at = Utc::now();

    match result {
        Ok(outcome) => {
            let match_count = outcome.matches.len();
            if entry.session.complete_submission(epoch, req.content, outcome) {
                debug!("Session {}: {} findings", id, match_count);
            } else {
                debug!("Session {}: submission {} superseded, result discarded", id, epoch);
            }
            Ok(Json(session_response(id, entry)))
        }
        Err(err) => {
            let message = err.to_string();
            entry.session.fail_submission(epoch, &message);
            Err(ServerError::Oracle(message))
        }
    }
}

/// Handler: POST /api/session/:id/fix
pub async fn handle_apply_fix(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<FixRequest>,
) -> Result<Json<FixResponse>, ServerError> {
    let mut sessions = state.sessions.write().await;
    let entry = sessions
        .get_mut(&id)
        .ok_or(ServerError::SessionNotFound(id))?;

    entry.session.apply_fix(&req.fingerprint, &req.replacement)?;
    entry.updated_at = Utc::now();

    info!("Session {}: applied fix {}", id, req.fingerprint);

    let classified = entry.session.classified();
    Ok(Json(FixResponse {
        success: true,
        new_content: entry.session.content().to_string(),
        corrections: classified.corrections.into_iter().map(Into::into).collect(),
        suggestions: classified.suggestions.into_iter().map(Into::into).collect(),
        resolved_count: entry.session.resolved_count(),
    }))
}

/// Handler: POST /api/apply
///
/// Stateless fix application: the client owns the buffer and sends it along
/// with the finding. Applies exactly the same contract as the session fix.
pub async fn handle_apply_stateless(
    Json(req): Json<ApplyRequest>,
) -> Result<Json<ApplyResponse>, ServerError> {
    let new_content = apply_replacement(&req.content, &req.finding, &req.replacement)?;
    Ok(Json(ApplyResponse {
        success: true,
        new_content,
    }))
}

/// Build the full session view: classification and grouping are recomputed
/// here on every read, which is what makes applied fixes show up as done.
fn session_response(id: Uuid, entry: &SessionEntry) -> SessionResponse {
    let classified = entry.session.classified();
    let (status, error) = match entry.session.state() {
        SessionState::Idle => ("idle", None),
        SessionState::Submitting => ("submitting", None),
        SessionState::Ready => ("ready", None),
        SessionState::Failed { error } => ("failed", Some(error.clone())),
    };

    SessionResponse {
        id,
        status,
        error,
        language: entry.language.code().to_string(),
        content: entry.session.content().to_string(),
        corrections: classified.corrections.into_iter().map(Into::into).collect(),
        suggestions: classified.suggestions.into_iter().map(Into::into).collect(),
        groups: entry.session.groups(),
        resolved_count: entry.session.resolved_count(),
        detected_language: entry.session.detected_language().cloned(),
        created_at: entry.created_at,
        updated_at: entry.updated_at,
    }
}
