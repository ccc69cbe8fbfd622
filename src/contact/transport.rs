use std::time::Duration;

use thiserror::Error;

use super::form::FormFields;

/// How long the simulated round trip takes by default.
pub const SIMULATED_LATENCY: Duration = Duration::from_millis(2000);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Network error: {0}")]
    Network(String),
}

/// Delivers a validated contact message somewhere.
///
/// The controller only knows that sending suspends and then succeeds or fails;
/// swapping the simulated transport for a real one leaves the state machine
/// untouched.
#[allow(async_fn_in_trait)]
pub trait SubmitTransport {
    async fn send(&self, message: &FormFields) -> Result<(), SubmitError>;
}

/// Stand-in for a backend: waits out a fixed latency and reports success.
#[cfg(any(feature = "ssr", feature = "hydrate"))]
#[derive(Debug, Clone, Copy)]
pub struct SimulatedTransport {
    latency: Duration,
}

#[cfg(any(feature = "ssr", feature = "hydrate"))]
impl SimulatedTransport {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[cfg(any(feature = "ssr", feature = "hydrate"))]
impl Default for SimulatedTransport {
    fn default() -> Self {
        Self::new(SIMULATED_LATENCY)
    }
}

#[cfg(any(feature = "ssr", feature = "hydrate"))]
impl SubmitTransport for SimulatedTransport {
    async fn send(&self, message: &FormFields) -> Result<(), SubmitError> {
        log::debug!(
            "simulating contact submission: {}",
            serde_json::to_string(message).unwrap_or_default()
        );
        sleep(self.latency).await;
        Ok(())
    }
}

#[cfg(feature = "hydrate")]
async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

#[cfg(all(feature = "ssr", not(feature = "hydrate")))]
async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulated_latency_is_two_seconds() {
        assert_eq!(SIMULATED_LATENCY, Duration::from_millis(2000));
    }

    #[test]
    fn test_submit_error_display() {
        assert_eq!(
            SubmitError::Network("timed out".to_string()).to_string(),
            "Network error: timed out"
        );
    }

    #[cfg(feature = "ssr")]
    #[tokio::test(start_paused = true)]
    async fn test_simulated_transport_waits_out_latency() {
        let transport = SimulatedTransport::default();

        let start = tokio::time::Instant::now();
        let res = transport.send(&FormFields::default()).await;
        assert_eq!(res, Ok(()));
        assert!(start.elapsed() >= SIMULATED_LATENCY);
    }
}
