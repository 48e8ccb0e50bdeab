pub mod auth;
pub mod calibrations;
pub mod chemicals;
pub mod cycle_counts;
pub mod dashboard;
pub mod export;
pub mod kits;
pub mod tools;
pub mod warehouses;

use crate::error::MainError;
use crate::state::AppState;
use api_client::{ApiError, cancellable};
use tracing::debug;
use views::forms::{Form, Modal, ModalState, SubmitOutcome};

/// Opens a modal with `blank`, fills it from the command line, and submits
/// it once. Prints the success message before the modal closes.
pub async fn run_modal<F, T, Fut>(
    state: &AppState,
    blank: F,
    fill: impl FnOnce(&mut F),
    dispatch: impl FnOnce(F::Submission) -> Fut,
) -> Result<T, MainError>
where
    F: Form,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let mut modal = Modal::new(state.close_delay()?);
    modal.open(blank);
    modal.edit(fill);

    let shutdown = state.shutdown.clone();
    let outcome = modal
        .submit(state.today(), |submission| async move {
            cancellable(&shutdown, dispatch(submission)).await
        })
        .await;

    match outcome {
        SubmitOutcome::Succeeded(value) => {
            if let ModalState::Success { message } = modal.state() {
                println!("{message}");
            }
            modal.close_after_success().await;
            Ok(value)
        }
        SubmitOutcome::Invalid(errors) => Err(MainError::Validation(errors)),
        SubmitOutcome::Failed { message } => Err(MainError::Rejected(message)),
        SubmitOutcome::Ignored => {
            debug!("modal ignored submission");
            Err(MainError::Usage("nothing to submit".to_string()))
        }
    }
}
