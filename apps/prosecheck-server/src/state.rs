//! Application state for the ProseCheck server

use chrono::{DateTime, Utc};
use correction_engine::CheckSession;
use shared_types::Language;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::oracle::OracleClient;

/// One stored session plus its server-side bookkeeping
pub struct SessionEntry {
    pub session: CheckSession,
    /// Language the user selected for this session (already coerced)
    pub language: Language,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SessionEntry {
    pub fn new(language: Language) -> Self {
        let now = Utc::now();
        Self {
            session: CheckSession::new(),
            language,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Shared application state.
///
/// Sessions live in process memory only: resolution tracking is scoped to
/// one analysis snapshot, so there is nothing worth persisting across a
/// restart. The session map is never locked across the oracle call.
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<RwLock<HashMap<Uuid, SessionEntry>>>,
    pub oracle: Arc<OracleClient>,
}

impl AppState {
    pub fn new(oracle: OracleClient) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            oracle: Arc::new(oracle),
        }
    }
}
