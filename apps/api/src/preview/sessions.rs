//! In-memory registry of anonymous preview sessions.
//!
//! Sessions are ephemeral and never persisted. A session ends when it is
//! closed or when it sits untouched for longer than the idle TTL; either way
//! its renderer is dropped, which stops its task.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::preview::renderer::{PreviewInput, PreviewRenderer, PreviewState, PreviewStatus};

struct Session {
    renderer: PreviewRenderer,
    last_seen: Instant,
}

impl Session {
    fn touch(&mut self) -> &PreviewRenderer {
        self.last_seen = Instant::now();
        &self.renderer
    }
}

#[derive(Clone)]
pub struct PreviewSessions {
    inner: Arc<RwLock<HashMap<Uuid, Session>>>,
    debounce: Duration,
    max_sessions: usize,
    idle_ttl: Duration,
}

impl PreviewSessions {
    pub fn new(debounce: Duration, max_sessions: usize, idle_ttl: Duration) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            debounce,
            max_sessions,
            idle_ttl,
        }
    }

    /// Opens a session. Idle sessions are evicted first, so abandoned tabs
    /// never hold the limit.
    pub async fn open(&self, input: PreviewInput) -> Result<Uuid, AppError> {
        let mut sessions = self.inner.write().await;

        let before = sessions.len();
        sessions.retain(|_, session| session.last_seen.elapsed() < self.idle_ttl);
        let evicted = before - sessions.len();
        if evicted > 0 {
            info!(evicted, remaining = sessions.len(), "Evicted idle preview sessions");
        }

        if sessions.len() >= self.max_sessions {
            return Err(AppError::Unavailable(format!(
                "Preview session limit of {} reached",
                self.max_sessions
            )));
        }

        let id = Uuid::new_v4();
        info!(session_id = %id, template = %input.template_id, "Opening preview session");
        sessions.insert(
            id,
            Session {
                renderer: PreviewRenderer::spawn(input, self.debounce),
                last_seen: Instant::now(),
            },
        );
        Ok(id)
    }

    /// Queues an edit and returns its revision.
    pub async fn update(&self, id: Uuid, input: PreviewInput) -> Result<u64, AppError> {
        let mut sessions = self.inner.write().await;
        let session = sessions.get_mut(&id).ok_or_else(|| not_found(id))?;
        Ok(session.touch().update(input))
    }

    pub async fn state(&self, id: Uuid) -> Result<PreviewState, AppError> {
        let mut sessions = self.inner.write().await;
        sessions
            .get_mut(&id)
            .map(|session| session.touch().state())
            .ok_or_else(|| not_found(id))
    }

    /// Waits until `revision` has been rendered, or `timeout` passes, and
    /// returns the state at that point.
    pub async fn wait_for_revision(
        &self,
        id: Uuid,
        revision: u64,
        timeout: Duration,
    ) -> Result<PreviewState, AppError> {
        let mut rx = {
            let mut sessions = self.inner.write().await;
            sessions
                .get_mut(&id)
                .map(|session| session.touch().subscribe())
                .ok_or_else(|| not_found(id))?
        };

        let rendered = rx.wait_for(|s| {
            s.rendered_revision >= revision && s.status != PreviewStatus::Loading
        });
        // Timing out, or the session closing underneath us, still reports current state.
        let _ = tokio::time::timeout(timeout, rendered).await;

        self.state(id).await
    }

    pub async fn close(&self, id: Uuid) -> Result<(), AppError> {
        let removed = self.inner.write().await.remove(&id);
        match removed {
            Some(_) => {
                info!(session_id = %id, "Closed preview session");
                Ok(())
            }
            None => Err(not_found(id)),
        }
    }

    pub async fn count(&self) -> usize {
        self.inner.read().await.len()
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Preview session {id} not found"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::ResumeData;

    const IDLE_TTL: Duration = Duration::from_secs(1800);

    fn input() -> PreviewInput {
        PreviewInput {
            data: ResumeData::sample(),
            template_id: "modern".to_string(),
        }
    }

    #[tokio::test]
    async fn test_open_update_close() {
        let sessions = PreviewSessions::new(Duration::from_millis(10), 10, IDLE_TTL);
        let id = sessions.open(input()).await.unwrap();
        assert_eq!(sessions.count().await, 1);

        assert_eq!(sessions.update(id, input()).await.unwrap(), 2);
        assert_eq!(sessions.state(id).await.unwrap().revision, 2);

        sessions.close(id).await.unwrap();
        assert_eq!(sessions.count().await, 0);
        assert!(matches!(sessions.state(id).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_wait_for_revision_returns_rendered_state() {
        let sessions = PreviewSessions::new(Duration::from_millis(10), 10, IDLE_TTL);
        let id = sessions.open(input()).await.unwrap();
        let revision = sessions.update(id, input()).await.unwrap();

        let state = sessions
            .wait_for_revision(id, revision, Duration::from_secs(5))
            .await
            .unwrap();
        assert_eq!(state.rendered_revision, revision);
        assert!(matches!(state.status, PreviewStatus::Ready { .. }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_for_revision_times_out() {
        let sessions = PreviewSessions::new(Duration::from_secs(60), 10, IDLE_TTL);
        let id = sessions.open(input()).await.unwrap();
        let revision = sessions.update(id, input()).await.unwrap();

        let state = sessions
            .wait_for_revision(id, revision, Duration::from_millis(100))
            .await
            .unwrap();
        assert_eq!(state.revision, revision);
        assert!(state.rendered_revision < revision);
    }

    #[tokio::test]
    async fn test_unknown_session_is_not_found() {
        let sessions = PreviewSessions::new(Duration::from_millis(10), 10, IDLE_TTL);
        let id = Uuid::new_v4();
        assert!(matches!(sessions.update(id, input()).await, Err(AppError::NotFound(_))));
        assert!(matches!(sessions.close(id).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn test_idle_sessions_are_evicted_on_open() {
        let sessions = PreviewSessions::new(Duration::from_millis(10), 2, Duration::from_secs(60));
        let first = sessions.open(input()).await.unwrap();
        sessions.open(input()).await.unwrap();

        tokio::time::sleep(Duration::from_secs(86_400)).await;

        let third = sessions.open(input()).await.unwrap();
        assert_eq!(sessions.count().await, 1);
        assert!(sessions.state(third).await.is_ok());
        assert!(matches!(sessions.state(first).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn test_touched_session_survives_eviction() {
        let sessions = PreviewSessions::new(Duration::from_millis(10), 2, Duration::from_secs(60));
        let active = sessions.open(input()).await.unwrap();
        let idle = sessions.open(input()).await.unwrap();

        tokio::time::sleep(Duration::from_secs(40)).await;
        sessions.update(active, input()).await.unwrap();
        tokio::time::sleep(Duration::from_secs(30)).await;

        sessions.open(input()).await.unwrap();
        assert_eq!(sessions.count().await, 2);
        assert!(sessions.state(active).await.is_ok());
        assert!(matches!(sessions.state(idle).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_session_limit() {
        let sessions = PreviewSessions::new(Duration::from_millis(10), 1, IDLE_TTL);
        sessions.open(input()).await.unwrap();
        assert!(matches!(sessions.open(input()).await, Err(AppError::Unavailable(_))));
    }
}
