//! Submission form orchestration.
//!
//! `SubmissionForm` owns one form session: the editable draft, and the
//! lifecycle state that gates submission. A submit attempt runs validation,
//! image resolution and the record insert strictly in sequence; the insert
//! never starts before the image address is known.

use replica_core::models::{
    DraftField, ImageFile, ImageMode, InsertedSubmission, SubmissionDraft,
    SubmissionLifecycleState,
};
use replica_core::{validate_draft, ErrorMetadata, LogLevel};
use replica_db::{RecordStore, SUBMISSIONS_TABLE};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::watch;

use crate::error::SubmissionError;
use crate::image_resolver::ImageResolver;

/// Acknowledgment shown after a successful submission.
pub const ACKNOWLEDGMENT: &str =
    "Thank you! Your request has been submitted. We will contact you soon.";

/// Result of one `on_submit` call.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Another attempt was already in flight; nothing happened.
    Ignored,
    Submitted {
        acknowledgment: &'static str,
        rows: Vec<InsertedSubmission>,
    },
    Failed {
        message: String,
    },
}

/// Puts the form back to `Idle` if an attempt is dropped before it settles,
/// so the submitting flag can never stay set.
struct SubmittingGuard<'a> {
    state: &'a watch::Sender<SubmissionLifecycleState>,
    settled: bool,
}

impl SubmittingGuard<'_> {
    fn settle(mut self, next: SubmissionLifecycleState) {
        self.settled = true;
        self.state.send_replace(next);
    }
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        if !self.settled {
            tracing::warn!("Submission attempt dropped before settling");
            self.state.send_modify(|state| {
                if state.is_submitting() {
                    *state = SubmissionLifecycleState::Idle;
                }
            });
        }
    }
}

/// One form session.
pub struct SubmissionForm {
    resolver: ImageResolver,
    records: Arc<dyn RecordStore>,
    draft: Mutex<SubmissionDraft>,
    state: watch::Sender<SubmissionLifecycleState>,
}

impl SubmissionForm {
    pub fn new(resolver: ImageResolver, records: Arc<dyn RecordStore>) -> Self {
        let (state, _) = watch::channel(SubmissionLifecycleState::Idle);
        Self {
            resolver,
            records,
            draft: Mutex::new(SubmissionDraft::default()),
            state,
        }
    }

    fn lock_draft(&self) -> MutexGuard<'_, SubmissionDraft> {
        self.draft.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn on_field_change(&self, field: DraftField, value: impl Into<String>) {
        self.lock_draft().set_field(field, value.into());
    }

    /// Select an image. It is only read while the form is in file mode.
    pub fn on_image_select(&self, file: ImageFile) {
        self.lock_draft().image_file = Some(file);
    }

    /// Switch image mode. The other mode's value is kept.
    pub fn on_mode_change(&self, mode: ImageMode) {
        self.lock_draft().mode = mode;
    }

    /// Snapshot of the current draft
    pub fn draft(&self) -> SubmissionDraft {
        self.lock_draft().clone()
    }

    /// Current lifecycle state
    pub fn state(&self) -> SubmissionLifecycleState {
        self.state.borrow().clone()
    }

    /// Watch lifecycle transitions.
    pub fn subscribe(&self) -> watch::Receiver<SubmissionLifecycleState> {
        self.state.subscribe()
    }

    /// Run one submit attempt, or do nothing if one is already in flight.
    ///
    /// Validation failures never reach storage or the record store. On
    /// failure the draft is left untouched; on success it is reset.
    pub async fn on_submit(&self) -> SubmitOutcome {
        let entered = self.state.send_if_modified(|state| {
            if state.is_submitting() {
                false
            } else {
                *state = SubmissionLifecycleState::Submitting;
                true
            }
        });
        if !entered {
            tracing::debug!("Submit ignored: a submission is already in progress");
            return SubmitOutcome::Ignored;
        }

        let guard = SubmittingGuard {
            state: &self.state,
            settled: false,
        };
        let draft = self.draft();

        match self.submit_draft(&draft).await {
            Ok(rows) => {
                *self.lock_draft() = SubmissionDraft::default();
                guard.settle(SubmissionLifecycleState::Success);
                tracing::info!(rows = rows.len(), mode = %draft.mode, "Submission completed");
                SubmitOutcome::Submitted {
                    acknowledgment: ACKNOWLEDGMENT,
                    rows,
                }
            }
            Err(err) => {
                log_failure(&err);
                let message = err.client_message();
                guard.settle(SubmissionLifecycleState::Error(message.clone()));
                SubmitOutcome::Failed { message }
            }
        }
    }

    async fn submit_draft(
        &self,
        draft: &SubmissionDraft,
    ) -> Result<Vec<InsertedSubmission>, SubmissionError> {
        let fields = validate_draft(draft)?;
        let product_url = self.resolver.resolve(&fields.image).await?;
        let record = fields.to_record(product_url);

        self.records
            .insert(SUBMISSIONS_TABLE, &record)
            .await
            .map_err(SubmissionError::InsertFailed)
    }
}

fn log_failure(err: &SubmissionError) {
    let code = err.error_code();
    match err.log_level() {
        LogLevel::Debug => tracing::debug!(error_code = code, error = %err, "Submission rejected"),
        LogLevel::Warn => tracing::warn!(error_code = code, error = %err, "Submission failed"),
        LogLevel::Error => tracing::error!(error_code = code, error = %err, "Submission failed"),
    }
}
