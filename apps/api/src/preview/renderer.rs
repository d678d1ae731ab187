//! Live preview: a debounced re-render loop around `render_document`.
//!
//! # Architecture
//! - Edits land in a `watch` channel; only the latest input is ever kept.
//! - A spawned task waits for the input to go quiet for the debounce interval,
//!   then renders the trailing value once. Every new edit restarts the wait.
//! - State moves `Loading` → `Ready` | `Failed` on every recompute and is
//!   published through a second `watch` channel.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::models::resume::ResumeData;
use crate::render::handlers::render_blocking;

pub const GENERATION_FAILED: &str = "Failed to generate preview";

#[derive(Debug, Clone, PartialEq)]
pub struct PreviewInput {
    pub data: ResumeData,
    pub template_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PreviewStatus {
    Loading,
    Ready { html: String },
    Failed { message: String },
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewState {
    /// Number of inputs received, the initial one included.
    pub revision: u64,
    /// Revision the current status belongs to.
    pub rendered_revision: u64,
    /// Renders performed so far.
    pub recomputes: u64,
    #[serde(flatten)]
    pub status: PreviewStatus,
    pub updated_at: DateTime<Utc>,
}

pub struct PreviewRenderer {
    input_tx: watch::Sender<(u64, PreviewInput)>,
    state_rx: watch::Receiver<PreviewState>,
    task: JoinHandle<()>,
}

impl PreviewRenderer {
    /// Starts the render loop. The initial input is rendered without delay.
    pub fn spawn(initial: PreviewInput, debounce: Duration) -> Self {
        let (input_tx, input_rx) = watch::channel((1, initial.clone()));
        let (state_tx, state_rx) = watch::channel(PreviewState {
            revision: 1,
            rendered_revision: 0,
            recomputes: 0,
            status: PreviewStatus::Loading,
            updated_at: Utc::now(),
        });

        let task = tokio::spawn(run_render_loop(initial, input_rx, state_tx, debounce));

        Self {
            input_tx,
            state_rx,
            task,
        }
    }

    /// Replaces the pending input and returns its revision.
    pub fn update(&self, input: PreviewInput) -> u64 {
        let mut revision = 0;
        self.input_tx.send_modify(|(rev, current)| {
            *rev += 1;
            revision = *rev;
            *current = input;
        });
        revision
    }

    pub fn state(&self) -> PreviewState {
        let mut state = self.state_rx.borrow().clone();
        state.revision = self.input_tx.borrow().0;
        state
    }

    pub fn subscribe(&self) -> watch::Receiver<PreviewState> {
        self.state_rx.clone()
    }
}

impl Drop for PreviewRenderer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Renders `initial` as revision 1, then one render per quiet period.
///
/// The receiver starts with revision 1 marked as seen, so an edit that lands
/// before this task first runs still goes through the debounce.
async fn run_render_loop(
    initial: PreviewInput,
    mut input_rx: watch::Receiver<(u64, PreviewInput)>,
    state_tx: watch::Sender<PreviewState>,
    debounce: Duration,
) {
    recompute(&state_tx, 1, initial).await;

    loop {
        // Wait for the next edit, then for the edits to stop.
        if input_rx.changed().await.is_err() {
            return;
        }
        loop {
            match tokio::time::timeout(debounce, input_rx.changed()).await {
                Ok(Ok(())) => continue,
                Ok(Err(_)) => return,
                Err(_) => break,
            }
        }

        let (revision, input) = input_rx.borrow_and_update().clone();
        recompute(&state_tx, revision, input).await;
    }
}

async fn recompute(state_tx: &watch::Sender<PreviewState>, revision: u64, input: PreviewInput) {
    state_tx.send_modify(|state| {
        state.revision = revision;
        state.status = PreviewStatus::Loading;
        state.updated_at = Utc::now();
    });

    let template = input.template_id.clone();
    let status = match render_blocking(input.data, input.template_id).await {
        Ok(html) => PreviewStatus::Ready { html },
        Err(e) => {
            warn!(template = %template, revision, "Preview generation failed: {e}");
            PreviewStatus::Failed {
                message: GENERATION_FAILED.to_string(),
            }
        }
    };

    state_tx.send_modify(|state| {
        state.rendered_revision = revision;
        state.recomputes += 1;
        state.status = status;
        state.updated_at = Utc::now();
    });
    debug!(template = %template, revision, "Preview recomputed");
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEBOUNCE: Duration = Duration::from_millis(300);

    fn input(name: &str) -> PreviewInput {
        let mut data = ResumeData::sample();
        data.personal_info.name = name.to_string();
        PreviewInput {
            data,
            template_id: "modern".to_string(),
        }
    }

    async fn wait_for_recomputes(renderer: &PreviewRenderer, n: u64) -> PreviewState {
        let mut rx = renderer.subscribe();
        let state = rx
            .wait_for(|s| s.recomputes >= n && s.status != PreviewStatus::Loading)
            .await
            .unwrap()
            .clone();
        state
    }

    #[tokio::test(start_paused = true)]
    async fn test_initial_input_renders_immediately() {
        let renderer = PreviewRenderer::spawn(input("Ada Lovelace"), DEBOUNCE);
        let state = wait_for_recomputes(&renderer, 1).await;
        assert_eq!(state.recomputes, 1);
        match state.status {
            PreviewStatus::Ready { html } => assert!(html.contains("Ada Lovelace")),
            other => panic!("unexpected status {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_of_edits_coalesces_into_one_render() {
        let renderer = PreviewRenderer::spawn(input("Start"), DEBOUNCE);
        wait_for_recomputes(&renderer, 1).await;

        for i in 0..10 {
            renderer.update(input(&format!("Edit {i}")));
            tokio::time::sleep(Duration::from_millis(25)).await;
        }
        wait_for_recomputes(&renderer, 2).await;
        tokio::time::sleep(Duration::from_secs(2)).await;

        let state = renderer.state();
        assert_eq!(state.recomputes, 2);
        assert_eq!(state.revision, 11);
        assert_eq!(state.rendered_revision, 11);
        match state.status {
            PreviewStatus::Ready { html } => {
                assert!(html.contains("Edit 9"));
                assert!(!html.contains("Edit 8"));
            }
            other => panic!("unexpected status {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_render_before_quiet_period() {
        let renderer = PreviewRenderer::spawn(input("Start"), DEBOUNCE);
        wait_for_recomputes(&renderer, 1).await;

        renderer.update(input("Pending"));
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(renderer.state().recomputes, 1);

        let state = wait_for_recomputes(&renderer, 2).await;
        assert_eq!(state.rendered_revision, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_separated_edits_render_separately() {
        let renderer = PreviewRenderer::spawn(input("Start"), DEBOUNCE);
        wait_for_recomputes(&renderer, 1).await;

        renderer.update(input("First"));
        let state = wait_for_recomputes(&renderer, 2).await;
        assert_eq!(state.rendered_revision, 2);

        renderer.update(input("Second"));
        let state = wait_for_recomputes(&renderer, 3).await;
        assert_eq!(state.rendered_revision, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_edit_before_first_poll_is_still_debounced() {
        let renderer = PreviewRenderer::spawn(input("Start"), DEBOUNCE);
        // The render task has not been polled yet.
        renderer.update(input("Early"));

        let state = wait_for_recomputes(&renderer, 1).await;
        assert_eq!(state.rendered_revision, 1);
        match state.status {
            PreviewStatus::Ready { html } => assert!(html.contains("Start")),
            other => panic!("unexpected status {other:?}"),
        }

        tokio::time::sleep(DEBOUNCE / 2).await;
        assert_eq!(renderer.state().recomputes, 1);

        let state = wait_for_recomputes(&renderer, 2).await;
        assert_eq!(state.rendered_revision, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_recompute_enters_loading_first() {
        let renderer = PreviewRenderer::spawn(input("Start"), DEBOUNCE);
        wait_for_recomputes(&renderer, 1).await;

        let mut rx = renderer.subscribe();
        renderer.update(input("Next"));
        let loading = rx
            .wait_for(|s| s.status == PreviewStatus::Loading)
            .await
            .unwrap()
            .clone();
        assert_eq!(loading.revision, 2);
        assert_eq!(loading.recomputes, 1);

        let state = wait_for_recomputes(&renderer, 2).await;
        assert!(matches!(state.status, PreviewStatus::Ready { .. }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_template_change_rerenders() {
        let renderer = PreviewRenderer::spawn(input("Ada"), DEBOUNCE);
        wait_for_recomputes(&renderer, 1).await;

        let mut next = input("Ada");
        next.template_id = "professional".to_string();
        renderer.update(next);
        let state = wait_for_recomputes(&renderer, 2).await;
        match state.status {
            PreviewStatus::Ready { html } => assert!(html.contains(r#"class="resume professional""#)),
            other => panic!("unexpected status {other:?}"),
        }
    }

    #[test]
    fn test_state_serializes_with_status_tag() {
        let state = PreviewState {
            revision: 2,
            rendered_revision: 2,
            recomputes: 1,
            status: PreviewStatus::Failed {
                message: GENERATION_FAILED.to_string(),
            },
            updated_at: Utc::now(),
        };
        let v = serde_json::to_value(&state).unwrap();
        assert_eq!(v["status"], "failed");
        assert_eq!(v["message"], GENERATION_FAILED);
        assert_eq!(v["renderedRevision"], 2);
    }
}
