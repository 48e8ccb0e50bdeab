//! Modal workflows: local form state, client-side validation, and a single
//! dispatched mutation per submit.
//!
//! ```text
//! Closed -> Idle -> Submitting -> Success -> Closed (after delay)
//!                              \-> Error -> Idle
//! ```

pub mod checkout;
pub mod issue;
pub mod mark_ordered;
pub mod reorder;
pub mod transfer;

use chrono::NaiveDate;
use shared::error::UserFacingError;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, warn};

pub use checkout::CheckoutForm;
pub use issue::IssueForm;
pub use mark_ordered::MarkOrderedForm;
pub use reorder::ReorderRequestForm;
pub use transfer::TransferForm;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<&str> = self.0.iter().map(|e| e.message.as_str()).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

impl ValidationErrors {
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn for_field(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// `Ok(value)` if nothing was recorded.
    pub fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, ValidationErrors> {
        if self.is_empty() { Ok(value()) } else { Err(self) }
    }
}

pub trait Form {
    /// The validated payload handed to the dispatcher.
    type Submission;

    const SUCCESS_MESSAGE: &'static str;

    fn validate(&self, today: NaiveDate) -> Result<Self::Submission, ValidationErrors>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Idle,
    Submitting,
    Success {
        message: String,
    },
    Error {
        message: String,
    },
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        !matches!(self, ModalState::Closed)
    }

    fn accepts_submit(&self) -> bool {
        matches!(self, ModalState::Idle | ModalState::Error { .. })
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum SubmitOutcome<T> {
    /// The modal was closed or already submitting.
    Ignored,
    /// Local validation failed; nothing was dispatched.
    Invalid(ValidationErrors),
    Succeeded(T),
    Failed { message: String },
}

type HideCallback = Box<dyn FnMut() + Send>;

pub struct Modal<F: Form> {
    state: ModalState,
    form: Option<F>,
    field_errors: ValidationErrors,
    close_delay: Duration,
    on_hide: Option<HideCallback>,
}

impl<F: Form> Modal<F> {
    pub fn new(close_delay: Duration) -> Self {
        Self {
            state: ModalState::Closed,
            form: None,
            field_errors: ValidationErrors::default(),
            close_delay,
            on_hide: None,
        }
    }

    #[must_use]
    pub fn with_on_hide(mut self, on_hide: impl FnMut() + Send + 'static) -> Self {
        self.on_hide = Some(Box::new(on_hide));
        self
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn form(&self) -> Option<&F> {
        self.form.as_ref()
    }

    pub fn field_errors(&self) -> &ValidationErrors {
        &self.field_errors
    }

    /// Always starts from `Idle` with the given blank form.
    pub fn open(&mut self, form: F) {
        self.form = Some(form);
        self.field_errors = ValidationErrors::default();
        self.state = ModalState::Idle;
    }

    /// Editing after a failed submit dismisses the error.
    pub fn edit(&mut self, update: impl FnOnce(&mut F)) {
        if matches!(self.state, ModalState::Submitting | ModalState::Closed) {
            return;
        }
        if let Some(form) = self.form.as_mut() {
            update(form);
            if matches!(self.state, ModalState::Error { .. }) {
                self.state = ModalState::Idle;
            }
        }
    }

    pub fn can_submit(&self, today: NaiveDate) -> bool {
        self.state.accepts_submit()
            && self
                .form
                .as_ref()
                .is_some_and(|form| form.validate(today).is_ok())
    }

    pub async fn submit<T, E, Fut>(
        &mut self,
        today: NaiveDate,
        dispatch: impl FnOnce(F::Submission) -> Fut,
    ) -> SubmitOutcome<T>
    where
        Fut: Future<Output = Result<T, E>>,
        E: UserFacingError,
    {
        if !self.state.accepts_submit() {
            return SubmitOutcome::Ignored;
        }
        let Some(form) = self.form.as_ref() else {
            return SubmitOutcome::Ignored;
        };

        let submission = match form.validate(today) {
            Ok(submission) => submission,
            Err(errors) => {
                debug!(errors = %errors, "form failed validation");
                self.field_errors = errors.clone();
                self.state = ModalState::Idle;
                return SubmitOutcome::Invalid(errors);
            }
        };

        self.field_errors = ValidationErrors::default();
        self.state = ModalState::Submitting;

        match dispatch(submission).await {
            Ok(value) => {
                info!(message = F::SUCCESS_MESSAGE, "modal submission succeeded");
                self.state = ModalState::Success {
                    message: F::SUCCESS_MESSAGE.to_string(),
                };
                SubmitOutcome::Succeeded(value)
            }
            Err(e) => {
                let message = e.user_message();
                warn!(error = %e, "modal submission failed");
                self.state = ModalState::Error {
                    message: message.clone(),
                };
                SubmitOutcome::Failed { message }
            }
        }
    }

    /// Leaves the success message up for the configured delay, then closes.
    pub async fn close_after_success(&mut self) {
        if !matches!(self.state, ModalState::Success { .. }) {
            return;
        }
        if !self.close_delay.is_zero() {
            sleep(self.close_delay).await;
        }
        self.close();
    }

    pub fn close(&mut self) {
        let was_open = self.state.is_open();
        self.state = ModalState::Closed;
        self.form = None;
        self.field_errors = ValidationErrors::default();
        if was_open && let Some(on_hide) = self.on_hide.as_mut() {
            on_hide();
        }
    }
}

/// Parses a strictly positive whole number from raw input.
pub(crate) fn parse_positive_quantity(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|q| *q > 0)
}

pub(crate) fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

pub(crate) fn parse_input_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}
