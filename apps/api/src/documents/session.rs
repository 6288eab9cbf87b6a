//! In-memory document sessions.
//!
//! A session holds one uploaded document for as long as the caller keeps it
//! (explicit delete) or until its TTL runs out. Nothing is written to disk and
//! every session is independent of the others.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::models::document::{PreviewKind, SimplificationResult, UploadedDocumentMetadata};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSession {
    pub id: Uuid,
    pub document: UploadedDocumentMetadata,
    pub preview_kind: PreviewKind,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    /// Set once on the first simplify call for this session, then reused.
    pub simplification: Option<SimplificationResult>,
}

impl DocumentSession {
    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// The parts of a session the simplify endpoint reads.
#[derive(Debug, Clone, PartialEq)]
pub struct SimplifyInputs {
    pub name: String,
    pub mime_type: String,
    pub simplification: Option<SimplificationResult>,
}

/// Shared handle to the session map. Cloning shares the same sessions.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, DocumentSession>>>,
    ttl: chrono::Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl: chrono::Duration::from_std(ttl).unwrap_or_else(|_| chrono::Duration::days(36_500)),
        }
    }

    /// Stores `document` under a fresh id. Expired sessions are purged first.
    pub async fn create(
        &self,
        document: UploadedDocumentMetadata,
        now: DateTime<Utc>,
    ) -> DocumentSession {
        let session = DocumentSession {
            id: Uuid::new_v4(),
            preview_kind: PreviewKind::for_mime(&document.mime_type),
            document,
            created_at: now,
            expires_at: now.checked_add_signed(self.ttl).unwrap_or(DateTime::<Utc>::MAX_UTC),
            simplification: None,
        };

        let mut sessions = self.sessions.write().await;
        purge_expired(&mut sessions, now);
        sessions.insert(session.id, session.clone());

        session
    }

    /// Returns the session if it exists and has not expired.
    /// An expired session is removed on lookup.
    pub async fn get(&self, id: Uuid, now: DateTime<Utc>) -> Option<DocumentSession> {
        self.inspect(id, now, DocumentSession::clone).await
    }

    /// Name, MIME type and any stored simplification of a live session.
    /// Leaves the data URI in place.
    pub async fn simplify_inputs(&self, id: Uuid, now: DateTime<Utc>) -> Option<SimplifyInputs> {
        self.inspect(id, now, |session| SimplifyInputs {
            name: session.document.name.clone(),
            mime_type: session.document.mime_type.clone(),
            simplification: session.simplification.clone(),
        })
        .await
    }

    /// Applies `view` to a live session under the read lock.
    /// An expired session is removed instead.
    async fn inspect<R>(
        &self,
        id: Uuid,
        now: DateTime<Utc>,
        view: impl FnOnce(&DocumentSession) -> R,
    ) -> Option<R> {
        {
            let sessions = self.sessions.read().await;
            match sessions.get(&id) {
                None => return None,
                Some(session) if !session.is_expired(now) => return Some(view(session)),
                Some(_) => {}
            }
        }

        let mut sessions = self.sessions.write().await;
        if sessions.get(&id).is_some_and(|s| s.is_expired(now)) {
            debug!(session_id = %id, "session expired");
            sessions.remove(&id);
        }
        None
    }

    /// Ends a session. Returns whether it existed.
    pub async fn remove(&self, id: Uuid) -> bool {
        self.sessions.write().await.remove(&id).is_some()
    }

    /// Records the simplification for a session and returns the stored value.
    /// If one was already recorded, the first result is kept and returned.
    /// Returns `None` when the session no longer exists.
    pub async fn set_simplification(
        &self,
        id: Uuid,
        result: SimplificationResult,
    ) -> Option<SimplificationResult> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id)?;
        Some(session.simplification.get_or_insert(result).clone())
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

fn purge_expired(sessions: &mut HashMap<Uuid, DocumentSession>, now: DateTime<Utc>) {
    let before = sessions.len();
    sessions.retain(|_, session| !session.is_expired(now));
    let purged = before - sessions.len();
    if purged > 0 {
        debug!("Purged {purged} expired document session(s)");
    }
}
