//! Contact submission: validate, deliver once, classify, schedule the reset.
//!
//! The flow is generic over three seams so it runs the same in the browser
//! and in native tests:
//!
//! - [`ContactTransport`] delivers the JSON payload (gloo-net in the app).
//! - [`Delay`] sleeps for the simulated latency and the banner reset.
//! - [`FormStore`] gives short, synchronous access to the [`ContactForm`]
//!   between suspension points. It returns `None` once the owning view is
//!   gone, which ends the flow without touching torn-down state.

use std::cell::RefCell;
use std::future::Future;
use std::time::Duration;

use crate::form::{ContactDraft, ContactForm, StatusTicket, SubmitBlocked, ValidationErrors};

/// Latency stand-in when the endpoint cannot be reached.
pub const DEFAULT_FALLBACK_LATENCY: Duration = Duration::from_millis(1200);
/// How long success and error banners stay up.
pub const DEFAULT_STATUS_RESET: Duration = Duration::from_millis(5000);

/// Where the form is in its submit cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error(SubmitFailure),
}

impl SubmissionStatus {
    /// Success or error: a banner is showing and a reset is pending.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SubmissionStatus::Success | SubmissionStatus::Error(_))
    }
}

/// A delivery that ended badly.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitFailure {
    /// The endpoint answered with a non-2xx status.
    #[error("contact endpoint rejected the submission with HTTP {status}")]
    Rejected { status: u16 },
    /// The request went out but failed before a response arrived.
    #[error("contact request failed in flight: {0}")]
    Interrupted(String),
    /// Nothing answered. Only reported under [`UnreachableFallback::Surface`].
    #[error("contact endpoint is unreachable")]
    Unreachable,
}

/// Transport-level failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    /// The request could not be dispatched at all (no network, no handler).
    #[error("request was not dispatched: {0}")]
    Unreachable(String),
    /// The request was dispatched but did not complete.
    #[error("request interrupted: {0}")]
    Interrupted(String),
}

/// What came back from the endpoint. The body is never read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeliveryResponse {
    pub status: u16,
}

impl DeliveryResponse {
    pub fn new(status: u16) -> Self {
        Self { status }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// How a single delivery attempt ended, after fallback handling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Delivered,
    /// Endpoint unreachable; latency simulated and treated as delivered.
    Simulated,
    Failed(SubmitFailure),
}

/// Behaviour when the endpoint cannot be reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnreachableFallback {
    /// Wait `latency`, then report success. Keeps the form demonstrable
    /// before a backend exists, at the cost of hiding the outage.
    Simulate { latency: Duration },
    /// Report [`SubmitFailure::Unreachable`].
    Surface,
}

impl Default for UnreachableFallback {
    fn default() -> Self {
        UnreachableFallback::Simulate {
            latency: DEFAULT_FALLBACK_LATENCY,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmissionPolicy {
    pub fallback: UnreachableFallback,
    pub status_reset: Duration,
}

impl Default for SubmissionPolicy {
    fn default() -> Self {
        Self {
            fallback: UnreachableFallback::default(),
            status_reset: DEFAULT_STATUS_RESET,
        }
    }
}

/// Sends a draft to the contact endpoint as JSON.
pub trait ContactTransport {
    fn deliver(
        &self,
        payload: &ContactDraft,
    ) -> impl Future<Output = Result<DeliveryResponse, DispatchError>>;
}

/// Timer source.
pub trait Delay {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

/// Owner of the [`ContactForm`] the flow mutates.
pub trait FormStore {
    /// Run `f` against the form. `None` means the form no longer exists.
    fn update<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> Option<R>;
}

impl FormStore for RefCell<ContactForm> {
    fn update<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl<S: FormStore + ?Sized> FormStore for std::rc::Rc<S> {
    fn update<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> Option<R> {
        (**self).update(f)
    }
}

/// Result of [`SubmissionFlow::submit`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitReport {
    /// Delivery finished; `ticket` identifies the pending banner reset.
    Concluded {
        status: SubmissionStatus,
        ticket: StatusTicket,
    },
    /// Validation failed. Nothing was sent.
    Invalid(ValidationErrors),
    /// Another submission is still running. Nothing was sent.
    InFlight,
    /// The form went away mid-flight.
    Detached,
}

impl SubmitReport {
    pub fn ticket(&self) -> Option<StatusTicket> {
        match self {
            SubmitReport::Concluded { ticket, .. } => Some(*ticket),
            _ => None,
        }
    }
}

pub struct SubmissionFlow<T, D> {
    transport: T,
    delay: D,
    policy: SubmissionPolicy,
}

impl<T: ContactTransport, D: Delay> SubmissionFlow<T, D> {
    pub fn new(transport: T, delay: D, policy: SubmissionPolicy) -> Self {
        Self {
            transport,
            delay,
            policy,
        }
    }

    pub fn policy(&self) -> &SubmissionPolicy {
        &self.policy
    }

    /// One submit click: validate, deliver exactly once, record the outcome.
    /// The banner reset is left to [`expire_after`](Self::expire_after).
    pub async fn submit<S: FormStore + ?Sized>(&self, store: &S) -> SubmitReport {
        let payload = match store.update(ContactForm::begin_submission) {
            None => return SubmitReport::Detached,
            Some(Err(SubmitBlocked::InFlight)) => {
                tracing::debug!("submit ignored: already in flight");
                return SubmitReport::InFlight;
            }
            Some(Err(SubmitBlocked::Invalid(errors))) => {
                tracing::debug!(fields = errors.len(), "submit blocked by validation");
                return SubmitReport::Invalid(errors);
            }
            Some(Ok(payload)) => payload,
        };

        let outcome = self.deliver(&payload).await;
        match &outcome {
            DeliveryOutcome::Delivered => tracing::info!("contact submission delivered"),
            DeliveryOutcome::Simulated => {
                tracing::info!("contact endpoint unreachable; simulated delivery")
            }
            DeliveryOutcome::Failed(failure) => {
                tracing::warn!(error = %failure, "contact submission failed")
            }
        }

        match store.update(|form| {
            let ticket = form.conclude(outcome);
            (form.status().clone(), ticket)
        }) {
            Some((status, ticket)) => SubmitReport::Concluded { status, ticket },
            None => SubmitReport::Detached,
        }
    }

    /// Wait out the banner and return the form to idle.
    pub async fn expire_after<S: FormStore + ?Sized>(&self, store: &S, ticket: StatusTicket) -> bool {
        self.delay.sleep(self.policy.status_reset).await;
        store
            .update(|form| form.expire_status(ticket))
            .unwrap_or(false)
    }

    /// [`submit`](Self::submit) followed by the scheduled reset, if any.
    pub async fn run<S: FormStore + ?Sized>(&self, store: &S) -> SubmitReport {
        let report = self.submit(store).await;
        if let Some(ticket) = report.ticket() {
            self.expire_after(store, ticket).await;
        }
        report
    }

    async fn deliver(&self, payload: &ContactDraft) -> DeliveryOutcome {
        match self.transport.deliver(payload).await {
            Ok(response) if response.is_success() => DeliveryOutcome::Delivered,
            Ok(response) => DeliveryOutcome::Failed(SubmitFailure::Rejected {
                status: response.status,
            }),
            Err(DispatchError::Interrupted(reason)) => {
                DeliveryOutcome::Failed(SubmitFailure::Interrupted(reason))
            }
            Err(DispatchError::Unreachable(reason)) => {
                tracing::debug!(%reason, "contact endpoint not reachable");
                match self.policy.fallback {
                    UnreachableFallback::Simulate { latency } => {
                        self.delay.sleep(latency).await;
                        DeliveryOutcome::Simulated
                    }
                    UnreachableFallback::Surface => {
                        DeliveryOutcome::Failed(SubmitFailure::Unreachable)
                    }
                }
            }
        }
    }
}
