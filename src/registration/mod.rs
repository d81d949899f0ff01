pub mod fields;
pub mod state;
pub mod transport;

use log::{debug, info, warn};
use thiserror::Error;

pub use fields::{FieldError, FieldName, RegistrationFields};
pub use state::{SubmissionState, SubmitRejected};
pub use transport::{FormIntakeTransport, RegistrationTransport};

/// Why a submit attempt never reached the transport.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("invalid registration: {0}")]
    Invalid(#[from] FieldError),
    #[error(transparent)]
    Rejected(#[from] SubmitRejected),
}

/// Receiver of a submission's progress, normally the registration card.
pub trait SubmissionSink {
    /// False once the owning component has been torn down.
    fn is_live(&self) -> bool;
    fn set_state(&self, state: SubmissionState);
    fn clear_fields(&self);
}

/// Opens an attempt: gate, then `Submitting`. Runs synchronously inside the
/// submit handler, so a second submit in the same frame sees `Submitting`
/// in the sink and is refused before another request can go out.
pub fn begin_submission<S>(
    sink: &S,
    current: &SubmissionState,
    fields: &RegistrationFields,
) -> Result<(), SubmitError>
where
    S: SubmissionSink + ?Sized,
{
    if let Err(e) = fields.validate() {
        debug!("Registration blocked by validation: {}", e);
        return Err(e.into());
    }
    let submitting = current.begin()?;
    sink.set_state(submitting);
    info!("Submitting webinar registration");
    Ok(())
}

/// Delivers an attempt opened by [`begin_submission`] and settles it.
///
/// Transport failures are absorbed into `SubmissionState::Failed`.
/// Completions arriving after the sink went away are dropped.
pub async fn complete_submission<T, S>(transport: &T, sink: &S, fields: &RegistrationFields)
where
    T: RegistrationTransport + ?Sized,
    S: SubmissionSink + ?Sized,
{
    let outcome = transport.deliver(fields).await;

    if !sink.is_live() {
        warn!("Registration settled after the form was removed, ignoring result");
        return;
    }
    let settled = SubmissionState::settle(outcome);
    if settled.is_success() {
        info!("Webinar registration sent");
        sink.clear_fields();
    }
    sink.set_state(settled);
}
