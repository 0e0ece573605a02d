// Session state machine orchestrating analysis and fix application
use crate::apply::{apply_replacement, ApplyError};
use crate::classify::{classify, ClassifiedFindings};
use crate::fingerprint::fingerprint;
use crate::group::{group_by_context, SentenceGroup};
use crate::tracker::ResolutionTracker;
use shared_types::{AnalysisOutcome, Finding, LanguageInfo};
use thiserror::Error;

/// Failure of a session operation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("no analysis results to act on in the current state")]
    NotReady,

    #[error("no finding with fingerprint '{0}' in the current analysis")]
    UnknownFinding(String),

    #[error(transparent)]
    Apply(#[from] ApplyError),
}

/// Where the session is in the submit/analyze cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Submitting,
    Ready,
    Failed { error: String },
}

/// One user's correction session.
///
/// Exclusive owner of the content buffer, the finding set of the latest
/// analysis and the resolution tracker; every mutation goes through this
/// type. Classification and grouping are recomputed by the accessors, so a
/// fix is visible on the next read without any push-style invalidation.
#[derive(Debug, Default)]
pub struct CheckSession {
    state: SessionState,
    content: String,
    findings: Vec<Finding>,
    detected_language: Option<LanguageInfo>,
    tracker: ResolutionTracker,
    epoch: u64,
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState::Idle
    }
}

impl CheckSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new submission, superseding any still in flight.
    ///
    /// Returns the epoch the caller must present when completing or
    /// failing the submission. A caller holding a stale epoch (because a
    /// newer submission started while its oracle call was pending) gets
    /// its result discarded, which keeps an out-of-order completion from
    /// clobbering the tracker reset performed by the newer submission.
    pub fn begin_submission(&mut self) -> u64 {
        self.epoch += 1;
        self.state = SessionState::Submitting;
        self.epoch
    }

    /// Accept analysis results for the given submission.
    ///
    /// Replaces the buffer with the analyzed content, resets the tracker
    /// and swaps in the new finding set wholesale. Returns false (and
    /// changes nothing) when the submission has been superseded.
    pub fn complete_submission(
        &mut self,
        epoch: u64,
        content: String,
        outcome: AnalysisOutcome,
    ) -> bool {
        if epoch != self.epoch {
            return false;
        }
        self.content = content;
        self.findings = outcome.matches;
        self.detected_language = Some(outcome.language);
        self.tracker.reset();
        self.state = SessionState::Ready;
        true
    }

    /// Record an analysis failure. Buffer, findings and tracker keep their
    /// previous values; only the state changes. Same epoch guard as
    /// `complete_submission`.
    pub fn fail_submission(&mut self, epoch: u64, error: impl Into<String>) -> bool {
        if epoch != self.epoch {
            return false;
        }
        self.state = SessionState::Failed {
            error: error.into(),
        };
        true
    }

    /// Apply one replacement, identified by the finding's fingerprint.
    ///
    /// On success the buffer is replaced and the fingerprint marked
    /// resolved; the session stays `Ready` and the finding set is kept
    /// (reclassification happens lazily in the accessors). On any error
    /// nothing is mutated.
    pub fn apply_fix(
        &mut self,
        fingerprint_key: &str,
        replacement: &str,
    ) -> Result<&str, SessionError> {
        if self.state != SessionState::Ready {
            return Err(SessionError::NotReady);
        }

        let finding = self
            .findings
            .iter()
            .find(|f| fingerprint(f) == fingerprint_key)
            .ok_or_else(|| SessionError::UnknownFinding(fingerprint_key.to_string()))?;

        let updated = apply_replacement(&self.content, finding, replacement)?;
        self.content = updated;
        self.tracker.mark_resolved(fingerprint_key);
        Ok(&self.content)
    }

    /// Classification of the current finding set against the tracker
    pub fn classified(&self) -> ClassifiedFindings {
        classify(&self.findings, &self.tracker)
    }

    /// Findings bucketed by sentence context
    pub fn groups(&self) -> Vec<SentenceGroup> {
        group_by_context(&self.findings)
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn detected_language(&self) -> Option<&LanguageInfo> {
        self.detected_language.as_ref()
    }

    pub fn resolved_count(&self) -> usize {
        self.tracker.resolved_count()
    }
}
