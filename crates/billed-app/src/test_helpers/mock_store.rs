//! In-memory bills store and recording navigator.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use billed_core::models::{Bill, BillDraft, ReceiptUpload};
use billed_core::{AppError, BillsStore, ReceiptFile};

use crate::routes::{Navigator, Route};

/// Mock bills store backed by a Vec, with per-call failure injection and
/// call counters so tests can assert exactly how often the API was hit.
#[derive(Clone)]
pub struct MockBillsStore {
    bills: Arc<Mutex<Vec<Bill>>>,
    upload_calls: Arc<AtomicU32>,
    create_calls: Arc<AtomicU32>,
    update_calls: Arc<AtomicU32>,
    fail_next_upload: Arc<AtomicBool>,
    fail_next_create: Arc<AtomicBool>,
}

impl MockBillsStore {
    pub fn new() -> Self {
        Self {
            bills: Arc::new(Mutex::new(Vec::new())),
            upload_calls: Arc::new(AtomicU32::new(0)),
            create_calls: Arc::new(AtomicU32::new(0)),
            update_calls: Arc::new(AtomicU32::new(0)),
            fail_next_upload: Arc::new(AtomicBool::new(false)),
            fail_next_create: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn add_bill(&self, bill: Bill) {
        self.bills.lock().unwrap().push(bill);
    }

    pub fn bills(&self) -> Vec<Bill> {
        self.bills.lock().unwrap().clone()
    }

    pub fn upload_calls(&self) -> u32 {
        self.upload_calls.load(Ordering::SeqCst)
    }

    pub fn create_calls(&self) -> u32 {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn update_calls(&self) -> u32 {
        self.update_calls.load(Ordering::SeqCst)
    }

    /// Make the next upload_receipt call fail once.
    pub fn fail_next_upload(&self) {
        self.fail_next_upload.store(true, Ordering::SeqCst);
    }

    /// Make the next create_bill call fail once.
    pub fn fail_next_create(&self) {
        self.fail_next_create.store(true, Ordering::SeqCst);
    }
}

impl Default for MockBillsStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BillsStore for MockBillsStore {
    async fn upload_receipt(&self, receipt: &ReceiptFile) -> Result<ReceiptUpload, AppError> {
        self.upload_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_next_upload.swap(false, Ordering::SeqCst) {
            return Err(AppError::SubmissionFailed {
                source: anyhow::anyhow!("mock upload failure"),
            });
        }
        Ok(ReceiptUpload {
            file_url: format!("https://test.storage.tld/{}", receipt.file_name),
            key: format!("receipts/{}", receipt.file_name),
        })
    }

    async fn create_bill(&self, draft: &BillDraft) -> Result<Bill, AppError> {
        let call = self.create_calls.fetch_add(1, Ordering::SeqCst) + 1;
        if self.fail_next_create.swap(false, Ordering::SeqCst) {
            return Err(AppError::SubmissionFailed {
                source: anyhow::anyhow!("mock create failure"),
            });
        }
        let bill = Bill {
            id: format!("bill-{}", call),
            email: draft.email.clone(),
            expense_type: draft.expense_type.clone(),
            name: draft.name.clone(),
            amount: draft.amount,
            date: draft.date,
            vat: draft.vat.clone(),
            pct: draft.pct,
            commentary: draft.commentary.clone(),
            file_url: draft.file_url.clone(),
            file_name: draft.file_name.clone(),
            status: draft.status,
            comment_admin: None,
        };
        self.bills.lock().unwrap().push(bill.clone());
        Ok(bill)
    }

    async fn update_bill(&self, bill: &Bill) -> Result<Bill, AppError> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        let mut bills = self.bills.lock().unwrap();
        match bills.iter_mut().find(|b| b.id == bill.id) {
            Some(stored) => {
                *stored = bill.clone();
                Ok(bill.clone())
            }
            None => Err(AppError::NotFound(format!("No bill with id {}", bill.id))),
        }
    }

    async fn list_bills(&self) -> Result<Vec<Bill>, AppError> {
        Ok(self.bills.lock().unwrap().clone())
    }
}

/// Navigator double that records every navigation target.
pub struct RecordingNavigator {
    visited: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self {
            visited: Mutex::new(Vec::new()),
        }
    }

    pub fn visited(&self) -> Vec<Route> {
        self.visited.lock().unwrap().clone()
    }
}

impl Default for RecordingNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.visited.lock().unwrap().push(route);
    }
}
