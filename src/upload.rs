//! Upload flow — client-side validation gate plus the multipart submit.
//!
//! Drag-and-drop and the file picker are two input paths converging on
//! the same validation: declared type in {pdf, jpeg, png} and size at
//! most 10 MiB. A rejected candidate never reaches the network; each
//! upload is independent, with no queueing or progress tracking.

use std::io;
use std::path::Path;

use chrono::NaiveDate;

use crate::api::{HealthApi, UploadPayload};

pub const UPLOAD_FAILED: &str = "Failed to upload record. Please try again.";
pub const UPLOAD_SUCCESS: &str = "Medical record uploaded successfully!";
pub const NO_FILE_SELECTED: &str = "Please select a file";

/// 10 MiB.
pub const MAX_FILE_BYTES: u64 = 10 * 1024 * 1024;

/// Declared MIME types the gate accepts. `image/jpg` is a non-standard
/// alias some pickers still report.
pub const ALLOWED_TYPES: [&str; 4] = [
    "application/pdf",
    "image/jpeg",
    "image/png",
    "image/jpg",
];

/// Record types offered by the upload form.
pub const RECORD_TYPES: [&str; 9] = [
    "Blood Test",
    "X-Ray",
    "MRI",
    "CT Scan",
    "Ultrasound",
    "ECG",
    "Pathology Report",
    "Prescription",
    "Other",
];

/// Validation failures; the display string is the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FileValidationError {
    #[error("Only PDF, JPG, and PNG files are allowed")]
    UnsupportedType,
    #[error("File size must be less than 10MB")]
    TooLarge,
}

/// A file the user offered, before or after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    pub name: String,
    /// Declared MIME type (from the drop event or guessed from the path).
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl CandidateFile {
    /// Drop path: the host hands over name, declared type, and content.
    pub fn new(name: &str, content_type: &str, bytes: Vec<u8>) -> Self {
        Self {
            name: name.to_string(),
            content_type: content_type.to_string(),
            bytes,
        }
    }

    /// Picker path: read from disk, MIME guessed from the extension.
    pub fn from_path(path: &Path) -> io::Result<Self> {
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let content_type = mime_guess::from_path(path)
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        Ok(Self {
            name,
            content_type,
            bytes,
        })
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// The shared gate both input paths run through. Type is checked before
/// size, so an oversized unsupported file reports the type error.
pub fn validate_file(file: &CandidateFile) -> Result<(), FileValidationError> {
    if !ALLOWED_TYPES.contains(&file.content_type.as_str()) {
        return Err(FileValidationError::UnsupportedType);
    }
    if file.size() > MAX_FILE_BYTES {
        return Err(FileValidationError::TooLarge);
    }
    Ok(())
}

/// The metadata fields next to the file input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadForm {
    pub record_type: String,
    pub report_date: Option<NaiveDate>,
    pub lab_name: String,
    pub notes: String,
}

/// Page state for the upload route.
#[derive(Debug, Default)]
pub struct UploadController {
    pub file: Option<CandidateFile>,
    pub form: UploadForm,
    pub loading: bool,
    pub success: bool,
    pub error: Option<String>,
}

impl UploadController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage a candidate through the validation gate. On failure the
    /// candidate is discarded and only the error message is kept.
    pub fn stage_file(&mut self, candidate: CandidateFile) {
        match validate_file(&candidate) {
            Ok(()) => {
                self.file = Some(candidate);
                self.error = None;
            }
            Err(e) => {
                self.error = Some(e.to_string());
            }
        }
    }

    pub fn clear_file(&mut self) {
        self.file = None;
    }

    /// Submit file + metadata as one multipart request. Without a staged
    /// file this sets the inline error and sends nothing; with required
    /// fields missing it sends nothing at all.
    pub async fn submit<A: HealthApi>(&mut self, api: &A) {
        let Some(file) = &self.file else {
            self.error = Some(NO_FILE_SELECTED.to_string());
            return;
        };
        let Some(report_date) = self.form.report_date else {
            return;
        };
        if self.form.record_type.is_empty() || self.form.lab_name.is_empty() {
            return;
        }

        self.loading = true;
        self.error = None;
        self.success = false;

        let notes = self.form.notes.clone();
        let payload = UploadPayload {
            file_name: file.name.clone(),
            content_type: file.content_type.clone(),
            bytes: file.bytes.clone(),
            record_type: self.form.record_type.clone(),
            report_date,
            lab_name: self.form.lab_name.clone(),
            notes: if notes.is_empty() { None } else { Some(notes) },
        };

        let result = api.upload_record(payload).await;
        self.loading = false;
        match result {
            Ok(_) => {
                self.success = true;
                self.file = None;
                self.form = UploadForm::default();
            }
            Err(e) => {
                tracing::error!(error = %e, "record upload failed");
                self.error = Some(UPLOAD_FAILED.to_string());
            }
        }
    }

    pub fn dismiss_success(&mut self) {
        self.success = false;
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}
