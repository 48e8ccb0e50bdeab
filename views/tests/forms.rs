use chrono::NaiveDate;
use shared::error::UserFacingError;
use shared::supplyline::kit::{ItemType, Location, LocationType};
use std::fmt::{Display, Formatter};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use views::forms::{
    CheckoutForm, IssueForm, MarkOrderedForm, Modal, ModalState, ReorderRequestForm,
    SubmitOutcome, TransferForm,
};

#[derive(Debug)]
struct Rejected(&'static str);

impl Display for Rejected {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "rejected: {}", self.0)
    }
}

impl std::error::Error for Rejected {}

impl UserFacingError for Rejected {
    fn user_message(&self) -> String {
        self.0.to_string()
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

fn counting_modal<F: views::forms::Form>() -> (Modal<F>, Arc<AtomicUsize>) {
    let hidden = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hidden);
    let modal = Modal::new(Duration::ZERO).with_on_hide(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    (modal, hidden)
}

#[tokio::test]
async fn zero_quantity_blocks_reorder_without_dispatching() {
    let mut modal = Modal::new(Duration::ZERO);
    modal.open(ReorderRequestForm::new(7, 10.0, "ml"));
    modal.edit(|form| form.requested_quantity = "0".to_string());
    assert!(!modal.can_submit(today()));

    let dispatched = AtomicUsize::new(0);
    let outcome = modal
        .submit(today(), |_request| {
            dispatched.fetch_add(1, Ordering::SeqCst);
            async { Ok::<(), Rejected>(()) }
        })
        .await;

    let SubmitOutcome::Invalid(errors) = outcome else {
        panic!("expected a validation failure, got {outcome:?}");
    };
    assert!(
        errors
            .for_field("requested_quantity")
            .is_some_and(|m| m.contains("quantity greater than 0"))
    );
    assert_eq!(dispatched.load(Ordering::SeqCst), 0);
    assert_eq!(modal.state(), &ModalState::Idle);
    assert!(modal.field_errors().for_field("requested_quantity").is_some());
}

#[tokio::test]
async fn submit_enables_exactly_when_valid() {
    let mut modal: Modal<ReorderRequestForm> = Modal::new(Duration::ZERO);
    assert!(!modal.can_submit(today()));

    modal.open(ReorderRequestForm::new(7, 10.0, "ml"));
    assert!(!modal.can_submit(today()));
    for (input, valid) in [("", false), ("-3", false), ("2.5", false), ("abc", false), ("12", true)] {
        modal.edit(|form| form.requested_quantity = input.to_string());
        assert_eq!(modal.can_submit(today()), valid, "input {input:?}");
    }
}

#[tokio::test]
async fn delivery_date_must_be_tomorrow_or_later() {
    let mut modal = Modal::new(Duration::ZERO);
    modal.open(MarkOrderedForm::new(3));
    assert!(!modal.can_submit(today()));

    for (input, valid) in [
        ("2026-10-18", false),
        ("2026-10-19", false),
        ("10/25/2026", false),
        ("2026-10-20", true),
    ] {
        modal.edit(|form| form.expected_delivery_date = input.to_string());
        assert_eq!(modal.can_submit(today()), valid, "input {input:?}");
    }
}

#[tokio::test]
async fn failed_mark_ordered_keeps_modal_open_with_message() {
    let (mut modal, hidden) = counting_modal::<MarkOrderedForm>();
    modal.open(MarkOrderedForm::new(3));
    modal.edit(|form| form.expected_delivery_date = "2026-11-02".to_string());

    let outcome = modal
        .submit(today(), |_request| async {
            Err::<(), _>(Rejected("Chemical is already on order"))
        })
        .await;

    assert_eq!(
        outcome,
        SubmitOutcome::Failed {
            message: "Chemical is already on order".to_string()
        }
    );
    assert!(modal.is_open());
    assert_eq!(
        modal.state(),
        &ModalState::Error {
            message: "Chemical is already on order".to_string()
        }
    );
    assert_eq!(hidden.load(Ordering::SeqCst), 0);
    assert!(modal.can_submit(today()));

    modal.edit(|form| form.notes = "PO 4411".to_string());
    assert_eq!(modal.state(), &ModalState::Idle);
}

#[tokio::test]
async fn success_closes_after_delay_and_reopens_blank() {
    let (mut modal, hidden) = counting_modal::<ReorderRequestForm>();
    modal.open(ReorderRequestForm::new(7, 10.0, "ml"));
    modal.edit(|form| {
        form.requested_quantity = "25".to_string();
        form.notes = "  for C-check  ".to_string();
    });

    let outcome = modal
        .submit(today(), |request| async move { Ok::<_, Rejected>(request) })
        .await;
    let SubmitOutcome::Succeeded(request) = outcome else {
        panic!("expected success, got {outcome:?}");
    };
    assert_eq!(request.requested_quantity, 25);
    assert_eq!(request.notes.as_deref(), Some("for C-check"));
    assert!(matches!(modal.state(), ModalState::Success { .. }));

    modal.close_after_success().await;
    assert_eq!(modal.state(), &ModalState::Closed);
    assert!(modal.form().is_none());
    assert_eq!(hidden.load(Ordering::SeqCst), 1);

    modal.open(ReorderRequestForm::new(7, 10.0, "ml"));
    assert_eq!(modal.state(), &ModalState::Idle);
    assert!(modal.form().is_some_and(|f| f.requested_quantity.is_empty()));
}

#[tokio::test(start_paused = true)]
async fn close_waits_for_configured_delay() {
    let mut modal = Modal::new(Duration::from_millis(1500));
    modal.open(ReorderRequestForm::new(7, 10.0, "ml"));
    modal.edit(|form| form.requested_quantity = "1".to_string());
    let _ = modal
        .submit(today(), |_request| async { Ok::<(), Rejected>(()) })
        .await;

    let started = tokio::time::Instant::now();
    modal.close_after_success().await;
    assert!(started.elapsed() >= Duration::from_millis(1500));
    assert!(!modal.is_open());
}

#[tokio::test]
async fn closed_modal_ignores_submit() {
    let mut modal: Modal<ReorderRequestForm> = Modal::new(Duration::ZERO);
    let outcome = modal
        .submit(today(), |_request| async { Ok::<(), Rejected>(()) })
        .await;
    assert_eq!(outcome, SubmitOutcome::Ignored);
}

#[test]
fn cancel_resets_local_state() {
    let (mut modal, hidden) = counting_modal::<IssueForm>();
    modal.open(IssueForm::new(1, 4.0));
    modal.edit(|form| form.quantity = "2".to_string());
    modal.close();
    assert!(modal.form().is_none());
    assert_eq!(hidden.load(Ordering::SeqCst), 1);

    // Closing twice only hides once.
    modal.close();
    assert_eq!(hidden.load(Ordering::SeqCst), 1);
}

#[test]
fn issue_form_checks_available_quantity_and_hangar() {
    use views::forms::Form;

    let mut form = IssueForm::new(1, 4.0);
    form.quantity = "5".to_string();
    let errors = form.validate(today()).unwrap_err();
    assert!(errors.for_field("quantity").is_some_and(|m| m.contains("(4)")));
    assert_eq!(errors.for_field("hangar"), Some("Hangar is required"));

    form.quantity = "4".to_string();
    form.hangar = "Hangar 3".to_string();
    let request = form.validate(today()).unwrap();
    assert_eq!(request.quantity, 4);
    assert_eq!(request.purpose, None);
}

#[test]
fn transfer_form_requires_a_different_destination() {
    use views::forms::Form;

    let source = Location {
        kind: LocationType::Kit,
        id: 12,
    };
    let mut form = TransferForm::new(ItemType::Expendable, 88, source, 10.0);
    form.quantity = "3".to_string();
    assert!(form.validate(today()).unwrap_err().for_field("destination").is_some());

    form.destination = Some(source);
    assert!(form.validate(today()).is_err());

    form.destination = Some(Location {
        kind: LocationType::Warehouse,
        id: 1,
    });
    let request = form.validate(today()).unwrap();
    assert_eq!(request.to_location_type, LocationType::Warehouse);
    assert_eq!(request.quantity, 3);
}

#[test]
fn checkout_return_date_is_optional_but_not_past() {
    use views::forms::Form;

    let mut form = CheckoutForm::new(5);
    assert!(form.validate(today()).unwrap_err().for_field("user_id").is_some());

    form.user_id = "42".to_string();
    assert_eq!(form.validate(today()).unwrap().expected_return_date, None);

    form.expected_return_date = "2026-10-18".to_string();
    assert!(form.validate(today()).is_err());

    form.expected_return_date = "2026-10-19".to_string();
    assert_eq!(
        form.validate(today()).unwrap().expected_return_date,
        Some(today())
    );
}
