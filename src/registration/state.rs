use log::error;
use thiserror::Error;

use super::transport::TransportError;
use crate::config;

/// Lifecycle of the registration form.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Success,
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("a registration is already being submitted")]
    InFlight,
    #[error("the registration has already been completed")]
    AlreadyRegistered,
}

impl SubmissionState {
    /// Enters `Submitting`, dropping any previous error. Only `Idle` and
    /// `Failed` may start an attempt.
    pub fn begin(&self) -> Result<SubmissionState, SubmitRejected> {
        match self {
            SubmissionState::Idle | SubmissionState::Failed(_) => Ok(SubmissionState::Submitting),
            SubmissionState::Submitting => Err(SubmitRejected::InFlight),
            SubmissionState::Success => Err(SubmitRejected::AlreadyRegistered),
        }
    }

    /// Result of a settled request. The response is opaque, so anything short
    /// of a transport error counts as a completed registration.
    pub fn settle(outcome: Result<(), TransportError>) -> SubmissionState {
        match outcome {
            Ok(()) => SubmissionState::Success,
            Err(e) => {
                error!("Registration request failed: {}", e);
                SubmissionState::Failed(config::SUBMIT_ERROR_MESSAGE.to_string())
            }
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionState::Success)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            SubmissionState::Failed(message) => Some(message),
            _ => None,
        }
    }
}
