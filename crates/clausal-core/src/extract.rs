//! Text extraction from uploaded documents.
//!
//! Only plain text is actually parsed. PDF and DOCX uploads are accepted
//! at the ingest surface but yield a fixed placeholder string; real binary
//! parsing is a known gap, not an error.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Returned for any media type we accept but cannot parse.
pub const PARSING_PLACEHOLDER: &str = "PDF/DOC parsing placeholder (text-based assumed)";

/// Errors that can occur during text extraction.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Plain-text content is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),
}

/// Declared media type of an uploaded document.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MediaType {
    PlainText,
    Pdf,
    Docx,
}

impl MediaType {
    /// Map a declared MIME type to a supported media type.
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            "text/plain" => Some(MediaType::PlainText),
            "application/pdf" => Some(MediaType::Pdf),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                Some(MediaType::Docx)
            }
            _ => None,
        }
    }

    /// Infer the media type from a filename suffix.
    ///
    /// Accepted suffixes are txt, pdf and docx; anything else is rejected
    /// with [`ExtractError::UnsupportedMediaType`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ExtractError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "txt" => Ok(MediaType::PlainText),
            "pdf" => Ok(MediaType::Pdf),
            "docx" => Ok(MediaType::Docx),
            _ => Err(ExtractError::UnsupportedMediaType(
                path.display().to_string(),
            )),
        }
    }
}

/// Extract raw text from document bytes.
///
/// Plain text decodes as strict UTF-8; invalid bytes are a fatal error
/// for the document and propagate to the caller. All other media types
/// return [`PARSING_PLACEHOLDER`] regardless of content.
pub fn extract_text(bytes: &[u8], media_type: MediaType) -> Result<String, ExtractError> {
    match media_type {
        MediaType::PlainText => Ok(std::str::from_utf8(bytes)?.to_string()),
        MediaType::Pdf | MediaType::Docx => Ok(PARSING_PLACEHOLDER.to_string()),
    }
}
