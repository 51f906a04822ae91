use serde::{Deserialize, Serialize};

/// State of a form session. Only `Submitting` blocks a new attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "message", rename_all = "lowercase")]
pub enum SubmissionLifecycleState {
    #[default]
    Idle,
    Submitting,
    Success,
    Error(String),
}

impl SubmissionLifecycleState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionLifecycleState::Submitting)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            SubmissionLifecycleState::Error(message) => Some(message),
            _ => None,
        }
    }
}
