use crate::error::AppError;

/// Content types accepted for receipt images.
pub const ALLOWED_RECEIPT_CONTENT_TYPES: [&str; 3] = ["image/jpg", "image/jpeg", "image/png"];

/// A receipt file that passed validation. Retains the declared name and
/// content type plus the raw bytes, so the upload can happen lazily at
/// submit time. Discarded whenever a later selection fails validation.
#[derive(Debug, Clone)]
pub struct ReceiptFile {
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

/// Receipt file validator
///
/// Gates file selections on their declared content type. The type reported
/// by the selection event is trusted as-is; the bytes are never sniffed.
pub struct ReceiptValidator {
    allowed_content_types: Vec<String>,
}

impl ReceiptValidator {
    pub fn new(allowed_content_types: Vec<String>) -> Self {
        Self {
            allowed_content_types,
        }
    }

    pub fn allowed_content_types(&self) -> &[String] {
        &self.allowed_content_types
    }

    /// Validate a selected file. Accepts iff the declared content type is in
    /// the allowed set (compared case-insensitively). Pure and synchronous;
    /// the caller is responsible for clearing its selection on rejection.
    pub fn validate(
        &self,
        file_name: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> Result<ReceiptFile, AppError> {
        let normalized = content_type.to_lowercase();

        if !self
            .allowed_content_types
            .iter()
            .any(|ct| ct == &normalized)
        {
            return Err(AppError::InvalidFileType {
                content_type: content_type.to_string(),
                allowed: self.allowed_content_types.clone(),
            });
        }

        Ok(ReceiptFile {
            file_name: file_name.to_string(),
            content_type: normalized,
            data,
        })
    }
}

impl Default for ReceiptValidator {
    fn default() -> Self {
        Self::new(
            ALLOWED_RECEIPT_CONTENT_TYPES
                .iter()
                .map(|ct| ct.to_string())
                .collect(),
        )
    }
}
