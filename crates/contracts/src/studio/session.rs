use uuid::Uuid;

use super::{ApiError, GenerationStatus, SvgArtifact};

/// State machine for one studio session.
///
/// Owns the status, the append-only history (newest first), the pointer to
/// the current artifact and the active error. All transitions are synchronous
/// and total; the frontend controller drives the async calls and feeds their
/// outcomes back in.
///
/// Error auto-dismiss uses an epoch counter: every `fail` bumps it, and a
/// delayed `clear_expired_error` only takes effect when the epoch it was
/// armed with is still the latest and the session is still in the error
/// state. A stale timer can therefore never overwrite a newer state.
#[derive(Debug, Clone, Default)]
pub struct StudioSession {
    status: GenerationStatus,
    history: Vec<SvgArtifact>,
    current_id: Option<Uuid>,
    error: Option<ApiError>,
    error_epoch: u64,
}

impl StudioSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> GenerationStatus {
        self.status
    }

    /// History of all artifacts produced this session, newest first.
    pub fn history(&self) -> &[SvgArtifact] {
        &self.history
    }

    pub fn error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }

    /// The artifact being displayed, always a member of the history.
    pub fn current(&self) -> Option<&SvgArtifact> {
        let id = self.current_id?;
        self.history.iter().find(|artifact| artifact.id == id)
    }

    /// Start a generate call: the previous result is cleared so the viewer
    /// shows the full-screen loading state.
    pub fn begin_generation(&mut self) {
        self.status = GenerationStatus::Loading;
        self.error = None;
        self.current_id = None;
    }

    /// Start a refine call: the current artifact stays visible behind the
    /// loading overlay.
    pub fn begin_refinement(&mut self) {
        self.status = GenerationStatus::Loading;
        self.error = None;
    }

    /// Record a successful generate/refine outcome.
    pub fn complete(&mut self, artifact: SvgArtifact) {
        self.current_id = Some(artifact.id);
        self.history.insert(0, artifact);
        self.error = None;
        self.status = GenerationStatus::Success;
    }

    /// Record a failed outcome. History and the current artifact are left
    /// untouched so the previous valid result stays available. Returns the
    /// epoch the caller should arm the auto-dismiss timer with.
    pub fn fail(&mut self, error: ApiError) -> u64 {
        self.status = GenerationStatus::Error;
        self.error = Some(error);
        self.error_epoch += 1;
        self.error_epoch
    }

    /// Make a history entry current. Ignored for ids not in the history.
    pub fn select(&mut self, id: Uuid) -> bool {
        if !self.history.iter().any(|artifact| artifact.id == id) {
            return false;
        }
        self.current_id = Some(id);
        self.error = None;
        self.status = GenerationStatus::Success;
        true
    }

    /// Timer callback for the 3-second toast auto-dismiss. No-op unless the
    /// session is still showing the error the timer was armed for.
    pub fn clear_expired_error(&mut self, epoch: u64) {
        if self.status != GenerationStatus::Error || epoch != self.error_epoch {
            return;
        }
        self.settle_after_error();
    }

    /// Immediate, user-driven toast dismissal.
    pub fn dismiss_error(&mut self) {
        if self.status == GenerationStatus::Error {
            self.settle_after_error();
        }
    }

    /// Return to the last good state: success when there is something to
    /// show, idle otherwise.
    fn settle_after_error(&mut self) {
        self.error = None;
        self.status = if self.current_id.is_some() {
            GenerationStatus::Success
        } else {
            GenerationStatus::Idle
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact(label: &str) -> SvgArtifact {
        SvgArtifact::from_generation("<svg/>".to_string(), label, false)
    }

    #[test]
    fn new_session_is_idle_and_empty() {
        let session = StudioSession::new();
        assert_eq!(session.status(), GenerationStatus::Idle);
        assert!(session.history().is_empty());
        assert!(session.current().is_none());
        assert!(session.error().is_none());
    }

    #[test]
    fn successful_generation_becomes_current_and_heads_history() {
        let mut session = StudioSession::new();
        session.begin_generation();
        assert_eq!(session.status(), GenerationStatus::Loading);

        session.complete(artifact("cat"));
        assert_eq!(session.status(), GenerationStatus::Success);
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.current().unwrap().prompt_label, "cat");
        assert_eq!(session.current().unwrap().id, session.history()[0].id);
    }

    #[test]
    fn history_grows_newest_first() {
        let mut session = StudioSession::new();
        for label in ["first", "second", "third"] {
            session.begin_generation();
            session.complete(artifact(label));
        }
        let labels: Vec<&str> = session
            .history()
            .iter()
            .map(|a| a.prompt_label.as_str())
            .collect();
        assert_eq!(labels, vec!["third", "second", "first"]);
        assert_eq!(session.current().unwrap().prompt_label, "third");
    }

    #[test]
    fn refinement_keeps_current_visible_while_loading() {
        let mut session = StudioSession::new();
        session.begin_generation();
        session.complete(artifact("cat"));

        session.begin_refinement();
        assert_eq!(session.status(), GenerationStatus::Loading);
        assert_eq!(session.current().unwrap().prompt_label, "cat");

        let refined = session.current().unwrap().refined_from("<svg/>".into(), "make it blue");
        session.complete(refined);
        assert_eq!(session.history().len(), 2);
        assert_eq!(
            session.current().unwrap().prompt_label,
            "cat (Refined: make it blue)"
        );
        assert_eq!(session.history()[1].prompt_label, "cat");
    }

    #[test]
    fn failure_never_touches_history_or_current() {
        let mut session = StudioSession::new();
        session.begin_generation();
        session.complete(artifact("cat"));
        let current_before = session.current().unwrap().id;

        session.begin_refinement();
        session.fail(ApiError::refinement_failed("timeout"));

        assert_eq!(session.status(), GenerationStatus::Error);
        assert_eq!(session.error().unwrap().details, "timeout");
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.current().unwrap().id, current_before);
    }

    #[test]
    fn failure_without_prior_artifact_keeps_current_null() {
        let mut session = StudioSession::new();
        session.begin_generation();
        session.fail(ApiError::generation_failed("timeout"));

        assert_eq!(session.status(), GenerationStatus::Error);
        assert!(session.current().is_none());
        assert!(session.history().is_empty());
    }

    #[test]
    fn selecting_a_history_entry_changes_only_the_pointer() {
        let mut session = StudioSession::new();
        session.begin_generation();
        session.complete(artifact("first"));
        let first_id = session.current().unwrap().id;
        session.begin_generation();
        session.complete(artifact("second"));

        assert!(session.select(first_id));
        assert_eq!(session.status(), GenerationStatus::Success);
        assert_eq!(session.current().unwrap().id, first_id);
        assert_eq!(session.history().len(), 2);
        assert_eq!(session.history()[0].prompt_label, "second");
    }

    #[test]
    fn selecting_an_unknown_id_is_ignored() {
        let mut session = StudioSession::new();
        session.begin_generation();
        session.complete(artifact("cat"));
        let current = session.current().unwrap().id;

        assert!(!session.select(Uuid::new_v4()));
        assert_eq!(session.current().unwrap().id, current);
    }

    #[test]
    fn expired_error_settles_to_idle_without_an_artifact() {
        let mut session = StudioSession::new();
        session.begin_generation();
        let epoch = session.fail(ApiError::generation_failed("timeout"));

        session.clear_expired_error(epoch);
        assert_eq!(session.status(), GenerationStatus::Idle);
        assert!(session.error().is_none());
    }

    #[test]
    fn expired_error_settles_to_success_with_an_artifact() {
        let mut session = StudioSession::new();
        session.begin_generation();
        session.complete(artifact("cat"));
        session.begin_refinement();
        let epoch = session.fail(ApiError::refinement_failed(""));

        session.clear_expired_error(epoch);
        assert_eq!(session.status(), GenerationStatus::Success);
        assert!(session.error().is_none());
        assert_eq!(session.current().unwrap().prompt_label, "cat");
    }

    #[test]
    fn stale_timer_does_not_overwrite_a_newer_state() {
        let mut session = StudioSession::new();
        session.begin_generation();
        let stale_epoch = session.fail(ApiError::generation_failed("first failure"));

        // A new action starts before the timer fires.
        session.begin_generation();
        session.clear_expired_error(stale_epoch);
        assert_eq!(session.status(), GenerationStatus::Loading);

        // The new attempt fails too: only the matching epoch clears it.
        let fresh_epoch = session.fail(ApiError::generation_failed("second failure"));
        session.clear_expired_error(stale_epoch);
        assert_eq!(session.status(), GenerationStatus::Error);
        session.clear_expired_error(fresh_epoch);
        assert_eq!(session.status(), GenerationStatus::Idle);
    }

    #[test]
    fn dismissing_the_toast_clears_the_error_immediately() {
        let mut session = StudioSession::new();
        session.begin_generation();
        session.complete(artifact("cat"));
        session.begin_refinement();
        session.fail(ApiError::refinement_failed("timeout"));

        session.dismiss_error();
        assert_eq!(session.status(), GenerationStatus::Success);
        assert!(session.error().is_none());

        // Dismiss outside the error state is a no-op.
        session.dismiss_error();
        assert_eq!(session.status(), GenerationStatus::Success);
    }

    #[test]
    fn current_is_always_a_member_of_history() {
        let mut session = StudioSession::new();
        session.begin_generation();
        session.complete(artifact("cat"));
        session.begin_refinement();
        let refined = session.current().unwrap().refined_from("<svg/>".into(), "blue");
        session.complete(refined);

        let current = session.current().unwrap();
        assert!(session.history().iter().any(|a| a.id == current.id));
    }
}
