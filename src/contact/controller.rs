use serde::{Deserialize, Serialize};

use super::form::{Field, FieldErrors, FormFields};
use super::transport::{SubmitError, SubmitTransport};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

/// Result of the first half of a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStart {
    /// Fields passed validation; this snapshot is what should be sent.
    Started(FormFields),
    /// Validation failed and the errors are now stored on the controller.
    Invalid,
    /// Not idle, nothing happened.
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    Failed,
    Invalid,
    Ignored,
}

/// Owns the contact form's values, errors and submission lifecycle.
///
/// One instance belongs to one mounted form and is dropped with it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactController {
    fields: FormFields,
    errors: FieldErrors,
    state: SubmissionState,
    submit_error: Option<SubmitError>,
}

impl ContactController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// The last transport failure, cleared by the next submit attempt.
    pub fn submit_error(&self) -> Option<&SubmitError> {
        self.submit_error.as_ref()
    }

    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.fields.set(field, value.into());
        // optimistic: drop the stale message without re-checking anything
        if self.errors.clear(field) {
            log::trace!("cleared error on {field}");
        }
    }

    /// Re-checks all fields and replaces the stored errors with the result.
    pub fn validate(&mut self) -> (bool, FieldErrors) {
        self.errors = self.fields.validate();
        (self.errors.is_empty(), self.errors.clone())
    }

    /// Validates and, if everything passes, moves to `Submitting`.
    ///
    /// Hosts that cannot hold the controller across an await (e.g. a reactive
    /// signal) pair this with [`ContactController::finish_submit`].
    pub fn begin_submit(&mut self) -> SubmitStart {
        if self.state != SubmissionState::Idle {
            log::debug!("submit ignored while {:?}", self.state);
            return SubmitStart::Ignored;
        }
        self.submit_error = None;
        let (is_valid, errors) = self.validate();
        if !is_valid {
            log::debug!("contact form invalid: {} field(s) failing", errors.len());
            return SubmitStart::Invalid;
        }
        self.state = SubmissionState::Submitting;
        log::debug!("contact form submitting");
        SubmitStart::Started(self.fields.clone())
    }

    /// Applies the transport's result. Ignored unless a submission is in flight.
    pub fn finish_submit(&mut self, result: Result<(), SubmitError>) -> SubmitOutcome {
        if self.state != SubmissionState::Submitting {
            return SubmitOutcome::Ignored;
        }
        match result {
            Ok(()) => {
                self.state = SubmissionState::Submitted;
                self.fields.clear();
                self.errors.clear_all();
                log::debug!("contact form submitted");
                SubmitOutcome::Sent
            }
            Err(e) => {
                log::warn!("contact form submission failed: {e}");
                self.state = SubmissionState::Idle;
                self.submit_error = Some(e);
                SubmitOutcome::Failed
            }
        }
    }

    /// Runs a whole submission against `transport`.
    ///
    /// If the returned future is dropped mid-flight the controller goes back
    /// to `Idle` with the fields intact.
    pub async fn submit<T: SubmitTransport>(&mut self, transport: &T) -> SubmitOutcome {
        let message = match self.begin_submit() {
            SubmitStart::Started(message) => message,
            SubmitStart::Invalid => return SubmitOutcome::Invalid,
            SubmitStart::Ignored => return SubmitOutcome::Ignored,
        };
        let mut in_flight = InFlight { controller: self };
        let result = transport.send(&message).await;
        in_flight.finish(result)
    }

    /// "Send another message": back from `Submitted` to `Idle`.
    pub fn reset_after_submission(&mut self) -> bool {
        if self.state != SubmissionState::Submitted {
            return false;
        }
        self.state = SubmissionState::Idle;
        true
    }
}

struct InFlight<'a> {
    controller: &'a mut ContactController,
}

impl InFlight<'_> {
    fn finish(&mut self, result: Result<(), SubmitError>) -> SubmitOutcome {
        self.controller.finish_submit(result)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.controller.state == SubmissionState::Submitting {
            log::warn!("contact submission dropped before completing");
            self.controller.state = SubmissionState::Idle;
        }
    }
}
