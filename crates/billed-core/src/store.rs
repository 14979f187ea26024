//! Bills store seam
//!
//! The remote Bills API is expressed as an injectable capability so that the
//! HTTP-backed client and in-memory test doubles satisfy the same contract.
//! The store owns persisted bills; callers hold no reference after create.

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::{Bill, BillDraft, ReceiptUpload};
use crate::validation::ReceiptFile;

#[async_trait]
pub trait BillsStore: Send + Sync {
    /// Upload a validated receipt file, returning the stored file URL and key.
    async fn upload_receipt(&self, receipt: &ReceiptFile) -> Result<ReceiptUpload, AppError>;

    /// Create a new bill record. The server assigns the id.
    async fn create_bill(&self, draft: &BillDraft) -> Result<Bill, AppError>;

    /// Update an existing bill record.
    async fn update_bill(&self, bill: &Bill) -> Result<Bill, AppError>;

    /// List the bills visible to the authenticated user.
    async fn list_bills(&self) -> Result<Vec<Bill>, AppError>;
}
