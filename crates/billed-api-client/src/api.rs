//! Domain methods for the bills API client.
//!
//! Implements `billed_core::BillsStore` over the REST endpoints, so the
//! submission handler can be wired to this client or to a test double
//! interchangeably. Transport errors are wrapped into
//! `AppError::SubmissionFailed`; the client never retries.

use anyhow::Result;
use async_trait::async_trait;

use billed_core::models::{Bill, BillDraft, ReceiptUpload};
use billed_core::{AppError, BillsStore, ReceiptFile};

use crate::{api_prefix, ApiClient};

impl ApiClient {
    /// Upload a receipt image as a multipart form. The server stores the
    /// file and responds with its public URL and storage key.
    pub async fn upload_receipt_file(&self, receipt: &ReceiptFile) -> Result<ReceiptUpload> {
        let part = reqwest::multipart::Part::bytes(receipt.data.clone())
            .file_name(receipt.file_name.clone())
            .mime_str(&receipt.content_type)
            .map_err(|e| anyhow::anyhow!("Invalid content type for upload: {}", e))?;
        let form = reqwest::multipart::Form::new().part("file", part);

        self.post_multipart(&format!("{}/bills/receipts", api_prefix()), form)
            .await
    }

    /// Create a bill record from a draft payload.
    pub async fn create_bill_record(&self, draft: &BillDraft) -> Result<Bill> {
        self.post_json(&format!("{}/bills", api_prefix()), draft)
            .await
    }

    /// Update an existing bill record.
    pub async fn update_bill_record(&self, bill: &Bill) -> Result<Bill> {
        self.put_json(&format!("{}/bills/{}", api_prefix(), bill.id), bill)
            .await
    }

    /// List bills visible to the authenticated user.
    pub async fn list_bill_records(&self) -> Result<Vec<Bill>> {
        self.get(&format!("{}/bills", api_prefix()), &[]).await
    }
}

#[async_trait]
impl BillsStore for ApiClient {
    async fn upload_receipt(&self, receipt: &ReceiptFile) -> Result<ReceiptUpload, AppError> {
        self.upload_receipt_file(receipt)
            .await
            .map_err(|source| AppError::SubmissionFailed { source })
    }

    async fn create_bill(&self, draft: &BillDraft) -> Result<Bill, AppError> {
        self.create_bill_record(draft)
            .await
            .map_err(|source| AppError::SubmissionFailed { source })
    }

    async fn update_bill(&self, bill: &Bill) -> Result<Bill, AppError> {
        self.update_bill_record(bill)
            .await
            .map_err(|source| AppError::SubmissionFailed { source })
    }

    async fn list_bills(&self) -> Result<Vec<Bill>, AppError> {
        self.list_bill_records()
            .await
            .map_err(|source| AppError::SubmissionFailed { source })
    }
}
