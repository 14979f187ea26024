//! New-bill submission handler
//!
//! Drives one expense-report submission: a receipt file is gated on its
//! declared content type, then the form values are combined with the
//! uploaded receipt into a draft that the bills store persists. On success
//! the navigator is pointed at the bill list; on failure the error is
//! logged and the caller stays on the form, free to resubmit. The handler
//! performs no retries and does not deduplicate concurrent submits.

use std::sync::Arc;

use billed_core::models::{Bill, BillDraft, BillForm, BillStatus};
use billed_core::{AppError, BillsStore, ReceiptFile, ReceiptValidator};

use crate::routes::{Navigator, Route};
use crate::session::Session;

/// Where the current submission attempt stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    /// No valid receipt retained (initial state, or after a rejected file)
    Idle,
    /// A receipt passed validation and is retained for submit
    Validated,
    /// The store calls are in flight
    Submitting,
    /// The bill was created and navigation was triggered
    Succeeded,
    /// The store rejected the submission; the retained receipt survives
    /// so the user can resubmit manually
    Failed,
}

/// Handler for the employee new-bill form.
pub struct NewBill {
    session: Session,
    store: Arc<dyn BillsStore>,
    navigator: Arc<dyn Navigator>,
    validator: ReceiptValidator,
    receipt: Option<ReceiptFile>,
    state: SubmissionState,
}

impl NewBill {
    pub fn new(session: Session, store: Arc<dyn BillsStore>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            session,
            store,
            navigator,
            validator: ReceiptValidator::default(),
            receipt: None,
            state: SubmissionState::Idle,
        }
    }

    /// Replace the default validator (e.g. with a configured allowed set).
    pub fn with_validator(mut self, validator: ReceiptValidator) -> Self {
        self.validator = validator;
        self
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Name of the currently retained receipt, if any.
    pub fn receipt_file_name(&self) -> Option<&str> {
        self.receipt.as_ref().map(|r| r.file_name.as_str())
    }

    /// React to a file selection. A file whose declared content type is not
    /// an accepted image type is rejected: any previously retained receipt
    /// is discarded so no stale selection survives, and the returned error
    /// is surfaced synchronously by the UI adapter (blocking warning plus
    /// cleared input). An accepted file is retained for the submit step.
    pub fn handle_change_file(
        &mut self,
        file_name: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> Result<(), AppError> {
        match self.validator.validate(file_name, content_type, data) {
            Ok(receipt) => {
                tracing::debug!(file_name = %receipt.file_name, "Receipt accepted");
                self.receipt = Some(receipt);
                self.state = SubmissionState::Validated;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(
                    file_name = %file_name,
                    content_type = %content_type,
                    "Rejected receipt selection"
                );
                self.receipt = None;
                self.state = SubmissionState::Idle;
                Err(err)
            }
        }
    }

    /// Submit the form. Requires a previously validated receipt; submitting
    /// without one is a precondition violation reported as `MissingReceipt`
    /// (no store call is made). Otherwise: upload the receipt, assemble the
    /// draft with `status = pending` and the session email, create the bill,
    /// and navigate to the bill list.
    pub async fn handle_submit(&mut self, form: BillForm) -> Result<Bill, AppError> {
        let receipt = match self.receipt.as_ref() {
            Some(receipt) => receipt,
            None => {
                tracing::debug!("Submit without a validated receipt");
                return Err(AppError::MissingReceipt);
            }
        };

        self.state = SubmissionState::Submitting;

        let upload = match self.store.upload_receipt(receipt).await {
            Ok(upload) => upload,
            Err(err) => return Err(self.fail(err)),
        };

        let draft = BillDraft {
            email: self.session.email().to_string(),
            expense_type: form.expense_type,
            name: form.name,
            amount: form.amount,
            date: form.date,
            vat: form.vat,
            pct: form.pct,
            commentary: form.commentary,
            file_url: upload.file_url,
            file_name: receipt.file_name.clone(),
            status: BillStatus::Pending,
        };

        let bill = match self.store.create_bill(&draft).await {
            Ok(bill) => bill,
            Err(err) => return Err(self.fail(err)),
        };

        tracing::info!(bill_id = %bill.id, "Bill created, navigating to bill list");
        self.state = SubmissionState::Succeeded;
        self.navigator.navigate(Route::Bills);
        Ok(bill)
    }

    fn fail(&mut self, err: AppError) -> AppError {
        tracing::error!(error = %err.detailed_message(), "Bill submission failed");
        self.state = SubmissionState::Failed;
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{MockBillsStore, RecordingNavigator};
    use billed_core::ErrorPresentation;
    use chrono::NaiveDate;

    fn handler(store: &Arc<MockBillsStore>, navigator: &Arc<RecordingNavigator>) -> NewBill {
        NewBill::new(
            Session::employee("employee@test.tld"),
            store.clone() as Arc<dyn BillsStore>,
            navigator.clone() as Arc<dyn Navigator>,
        )
    }

    fn flight_form() -> BillForm {
        BillForm {
            expense_type: "Transports".to_string(),
            name: "vol".to_string(),
            date: NaiveDate::from_ymd_opt(2022, 7, 25).unwrap(),
            amount: 250,
            vat: "30".to_string(),
            pct: 40,
            commentary: None,
        }
    }

    #[test]
    fn test_change_file_accepts_png() {
        let store = Arc::new(MockBillsStore::new());
        let navigator = Arc::new(RecordingNavigator::new());
        let mut handler = handler(&store, &navigator);

        handler
            .handle_change_file("chucknorris.png", "image/png", vec![1, 2, 3])
            .unwrap();

        assert_eq!(handler.state(), SubmissionState::Validated);
        assert_eq!(handler.receipt_file_name(), Some("chucknorris.png"));
    }

    #[test]
    fn test_change_file_rejects_text_and_clears_selection() {
        let store = Arc::new(MockBillsStore::new());
        let navigator = Arc::new(RecordingNavigator::new());
        let mut handler = handler(&store, &navigator);

        // A good selection first, then a bad one: the stale receipt must go.
        handler
            .handle_change_file("chucknorris.png", "image/png", vec![1])
            .unwrap();
        let err = handler
            .handle_change_file("chucknorris.txt", "text/plain", vec![2])
            .unwrap_err();

        assert!(err.is_user_correctable());
        assert_eq!(handler.state(), SubmissionState::Idle);
        assert_eq!(handler.receipt_file_name(), None);
    }

    #[tokio::test]
    async fn test_submit_creates_one_bill_and_navigates() {
        let store = Arc::new(MockBillsStore::new());
        let navigator = Arc::new(RecordingNavigator::new());
        let mut handler = handler(&store, &navigator);

        handler
            .handle_change_file("chucknorris.png", "image/png", vec![1, 2, 3])
            .unwrap();
        let bill = handler.handle_submit(flight_form()).await.unwrap();

        assert_eq!(store.create_calls(), 1);
        assert_eq!(bill.email, "employee@test.tld");
        assert_eq!(bill.name, "vol");
        assert_eq!(bill.amount, 250);
        assert_eq!(bill.status, billed_core::models::BillStatus::Pending);
        assert_eq!(bill.file_name, "chucknorris.png");
        assert!(bill.file_url.contains("chucknorris.png"));
        assert_eq!(handler.state(), SubmissionState::Succeeded);
        assert_eq!(navigator.visited(), vec![Route::Bills]);
        assert_eq!(Route::Bills.title(), "Mes notes de frais");
    }

    #[tokio::test]
    async fn test_submit_without_receipt_fails_fast() {
        let store = Arc::new(MockBillsStore::new());
        let navigator = Arc::new(RecordingNavigator::new());
        let mut handler = handler(&store, &navigator);

        let err = handler.handle_submit(flight_form()).await.unwrap_err();

        assert!(matches!(err, AppError::MissingReceipt));
        assert_eq!(store.create_calls(), 0);
        assert_eq!(store.upload_calls(), 0);
        assert!(navigator.visited().is_empty());
    }

    #[tokio::test]
    async fn test_store_failure_keeps_user_on_form() {
        let store = Arc::new(MockBillsStore::new());
        store.fail_next_create();
        let navigator = Arc::new(RecordingNavigator::new());
        let mut handler = handler(&store, &navigator);

        handler
            .handle_change_file("chucknorris.png", "image/png", vec![1])
            .unwrap();
        let err = handler.handle_submit(flight_form()).await.unwrap_err();

        assert!(matches!(err, AppError::SubmissionFailed { .. }));
        assert_eq!(handler.state(), SubmissionState::Failed);
        assert!(navigator.visited().is_empty());

        // Manual resubmit works once the store recovers; no automatic retry
        // happened in between.
        let bill = handler.handle_submit(flight_form()).await.unwrap();
        assert_eq!(bill.name, "vol");
        assert_eq!(store.create_calls(), 2);
        assert_eq!(navigator.visited(), vec![Route::Bills]);
    }

    #[tokio::test]
    async fn test_upload_failure_skips_create() {
        let store = Arc::new(MockBillsStore::new());
        store.fail_next_upload();
        let navigator = Arc::new(RecordingNavigator::new());
        let mut handler = handler(&store, &navigator);

        handler
            .handle_change_file("chucknorris.png", "image/png", vec![1])
            .unwrap();
        let err = handler.handle_submit(flight_form()).await.unwrap_err();

        assert!(matches!(err, AppError::SubmissionFailed { .. }));
        assert_eq!(store.create_calls(), 0);
        assert_eq!(handler.state(), SubmissionState::Failed);
    }

    #[tokio::test]
    async fn test_double_submit_is_not_deduplicated() {
        let store = Arc::new(MockBillsStore::new());
        let navigator = Arc::new(RecordingNavigator::new());
        let mut handler = handler(&store, &navigator);

        handler
            .handle_change_file("chucknorris.png", "image/png", vec![1])
            .unwrap();
        handler.handle_submit(flight_form()).await.unwrap();
        handler.handle_submit(flight_form()).await.unwrap();

        assert_eq!(store.create_calls(), 2);
        assert_eq!(navigator.visited(), vec![Route::Bills, Route::Bills]);
    }
}
