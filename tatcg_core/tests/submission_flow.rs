//! Submission flow against scripted transports on a paused clock.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use tatcg_core::form::{ContactDraft, ContactField, ContactForm};
use tatcg_core::submission::{
    ContactTransport, Delay, DeliveryResponse, DispatchError, FormStore, SubmissionFlow,
    SubmissionPolicy, SubmissionStatus, SubmitFailure, SubmitReport, UnreachableFallback,
};
use tokio::time::Instant;

/// Plays back one canned result and records every payload it sees.
struct ScriptedTransport {
    reply: Result<DeliveryResponse, DispatchError>,
    calls: RefCell<Vec<ContactDraft>>,
    latency: Duration,
}

impl ScriptedTransport {
    fn replying(reply: Result<DeliveryResponse, DispatchError>) -> Self {
        Self {
            reply,
            calls: RefCell::new(Vec::new()),
            latency: Duration::ZERO,
        }
    }

    fn ok() -> Self {
        Self::replying(Ok(DeliveryResponse::new(200)))
    }

    fn status(code: u16) -> Self {
        Self::replying(Ok(DeliveryResponse::new(code)))
    }

    fn unreachable() -> Self {
        Self::replying(Err(DispatchError::Unreachable("no handler".into())))
    }

    fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl ContactTransport for &ScriptedTransport {
    async fn deliver(&self, payload: &ContactDraft) -> Result<DeliveryResponse, DispatchError> {
        self.calls.borrow_mut().push(payload.clone());
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        self.reply.clone()
    }
}

struct TokioDelay;

impl Delay for TokioDelay {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// A store whose owner can be dropped mid-flight.
struct DetachableStore {
    form: RefCell<ContactForm>,
    alive: Cell<bool>,
}

impl FormStore for DetachableStore {
    fn update<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> Option<R> {
        self.alive.get().then(|| f(&mut self.form.borrow_mut()))
    }
}

fn valid_draft() -> ContactDraft {
    ContactDraft {
        name: "Fatmata Sesay".into(),
        email: "fatmata@example.sl".into(),
        phone: "+232 76 000000".into(),
        company: "Wellington Freight".into(),
        service_interest: "business".into(),
        message: "Looking for asset verification support in Q3.".into(),
    }
}

fn filled_form() -> RefCell<ContactForm> {
    let mut form = ContactForm::new();
    let draft = valid_draft();
    for field in ContactField::ALL {
        form.set_field(field, draft.field(field));
    }
    RefCell::new(form)
}

fn flow(transport: &ScriptedTransport) -> SubmissionFlow<&ScriptedTransport, TokioDelay> {
    SubmissionFlow::new(transport, TokioDelay, SubmissionPolicy::default())
}

#[tokio::test(start_paused = true)]
async fn healthy_endpoint_succeeds_clears_draft_then_idles() {
    let transport = ScriptedTransport::ok();
    let flow = flow(&transport);
    let store = filled_form();

    let report = flow.submit(&store).await;
    assert!(matches!(
        report,
        SubmitReport::Concluded {
            status: SubmissionStatus::Success,
            ..
        }
    ));
    assert_eq!(transport.call_count(), 1);
    assert_eq!(transport.calls.borrow()[0], valid_draft());
    {
        let form = store.borrow();
        assert_eq!(*form.status(), SubmissionStatus::Success);
        assert!(form.draft().is_empty());
        assert!(form.can_submit());
    }

    let start = Instant::now();
    let ticket = report.ticket().expect("ticket");
    assert!(flow.expire_after(&store, ticket).await);
    assert_eq!(start.elapsed(), Duration::from_secs(5));

    let form = store.borrow();
    assert_eq!(*form.status(), SubmissionStatus::Idle);
    assert!(form.draft().is_empty());
}

#[tokio::test(start_paused = true)]
async fn unreachable_endpoint_is_masked_as_success() {
    let transport = ScriptedTransport::unreachable();
    let flow = flow(&transport);
    let store = filled_form();

    let start = Instant::now();
    let report = flow.submit(&store).await;
    assert_eq!(start.elapsed(), Duration::from_millis(1200));
    assert!(matches!(
        report,
        SubmitReport::Concluded {
            status: SubmissionStatus::Success,
            ..
        }
    ));
    assert!(store.borrow().draft().is_empty());
    assert_eq!(transport.call_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn surfaced_unreachable_keeps_draft() {
    let transport = ScriptedTransport::unreachable();
    let policy = SubmissionPolicy {
        fallback: UnreachableFallback::Surface,
        ..SubmissionPolicy::default()
    };
    let flow = SubmissionFlow::new(&transport, TokioDelay, policy);
    let store = filled_form();

    let start = Instant::now();
    flow.submit(&store).await;
    assert_eq!(start.elapsed(), Duration::ZERO);

    let form = store.borrow();
    assert_eq!(
        *form.status(),
        SubmissionStatus::Error(SubmitFailure::Unreachable)
    );
    assert_eq!(form.draft(), &valid_draft());
}

#[tokio::test(start_paused = true)]
async fn rejected_submission_preserves_draft_then_idles() {
    let transport = ScriptedTransport::status(503);
    let flow = flow(&transport);
    let store = filled_form();

    let report = flow.run(&store).await;
    assert!(matches!(
        report,
        SubmitReport::Concluded {
            status: SubmissionStatus::Error(SubmitFailure::Rejected { status: 503 }),
            ..
        }
    ));

    let form = store.borrow();
    assert_eq!(*form.status(), SubmissionStatus::Idle);
    assert_eq!(form.draft(), &valid_draft());
}

#[tokio::test(start_paused = true)]
async fn interrupted_request_is_an_error_not_a_fallback() {
    let transport =
        ScriptedTransport::replying(Err(DispatchError::Interrupted("connection reset".into())));
    let flow = flow(&transport);
    let store = filled_form();

    flow.submit(&store).await;
    assert!(matches!(
        store.borrow().status(),
        SubmissionStatus::Error(SubmitFailure::Interrupted(_))
    ));
    assert_eq!(store.borrow().draft(), &valid_draft());
}

#[tokio::test(start_paused = true)]
async fn invalid_draft_never_reaches_the_network() {
    let transport = ScriptedTransport::ok();
    let flow = flow(&transport);
    let store = RefCell::new(ContactForm::new());
    store
        .borrow_mut()
        .set_field(ContactField::Email, "not-an-email");

    let report = flow.submit(&store).await;
    let SubmitReport::Invalid(errors) = report else {
        panic!("expected validation failure");
    };
    assert_eq!(errors.len(), 3);
    assert_eq!(
        errors.message(ContactField::Email).as_deref(),
        Some("Invalid email")
    );
    assert_eq!(transport.call_count(), 0);

    let form = store.borrow();
    assert_eq!(*form.status(), SubmissionStatus::Idle);
    assert_eq!(form.errors(), &errors);
}

#[tokio::test(start_paused = true)]
async fn overlapping_submit_is_refused_by_the_flow() {
    let mut transport = ScriptedTransport::ok();
    transport.latency = Duration::from_millis(300);
    let flow = flow(&transport);
    let store = Rc::new(filled_form());

    let (first, second) = tokio::join!(flow.submit(&store), async {
        // Second click lands while the first request is outstanding.
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(store.borrow().is_submitting());
        flow.submit(&store).await
    });

    assert!(matches!(first, SubmitReport::Concluded { .. }));
    assert_eq!(second, SubmitReport::InFlight);
    assert_eq!(transport.call_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn reset_timer_from_an_older_attempt_is_ignored() {
    let transport = ScriptedTransport::status(500);
    let flow = flow(&transport);
    let store = filled_form();

    let failed = flow.submit(&store).await.ticket().expect("ticket");
    tokio::time::sleep(Duration::from_secs(2)).await;

    // Retry succeeds before the first banner would have cleared.
    let transport_ok = ScriptedTransport::ok();
    let retry_flow = SubmissionFlow::new(&transport_ok, TokioDelay, SubmissionPolicy::default());
    let succeeded = retry_flow.submit(&store).await.ticket().expect("ticket");

    assert!(!store.borrow_mut().expire_status(failed));
    assert_eq!(*store.borrow().status(), SubmissionStatus::Success);
    assert!(retry_flow.expire_after(&store, succeeded).await);
    assert_eq!(*store.borrow().status(), SubmissionStatus::Idle);
}

#[tokio::test(start_paused = true)]
async fn torn_down_form_detaches_the_flow() {
    let transport = ScriptedTransport::unreachable();
    let flow = flow(&transport);
    let store = DetachableStore {
        form: filled_form(),
        alive: Cell::new(true),
    };

    let (report, ()) = tokio::join!(flow.submit(&store), async {
        tokio::time::sleep(Duration::from_millis(100)).await;
        store.alive.set(false);
    });

    assert_eq!(report, SubmitReport::Detached);
    // Last write before teardown: still submitting, draft untouched.
    assert_eq!(*store.form.borrow().status(), SubmissionStatus::Submitting);
    assert_eq!(store.form.borrow().draft(), &valid_draft());
}
