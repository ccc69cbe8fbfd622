mod controller;
mod form;
mod transport;

pub use controller::{ContactController, SubmissionState, SubmitOutcome, SubmitStart};
pub use form::{Field, FieldErrors, FormFields, ValidationError, MESSAGE_MIN_LEN};
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use transport::SimulatedTransport;
pub use transport::{SubmitError, SubmitTransport, SIMULATED_LATENCY};
