//! Resume attachment value object

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest accepted attachment, in bytes (5 MB).
pub const MAX_RESUME_BYTES: u64 = 5 * 1024 * 1024;

/// Accepted file extensions, lowercase.
pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["pdf", "doc", "docx"];

/// Metadata for a resume attachment, validated at construction.
///
/// The file content itself stays with the caller; the application flow only
/// needs to know the attachment is acceptable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeFile {
    file_name: String,
    size_bytes: u64,
}

impl ResumeFile {
    /// Validate an attachment's name and size.
    pub fn new(file_name: impl Into<String>, size_bytes: u64) -> Result<Self, ResumeFileError> {
        let file_name = file_name.into();
        let extension = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .ok_or_else(|| ResumeFileError::UnsupportedType(file_name.clone()))?;
        if !ACCEPTED_EXTENSIONS.contains(&extension.as_str()) {
            return Err(ResumeFileError::UnsupportedType(file_name));
        }
        if size_bytes > MAX_RESUME_BYTES {
            return Err(ResumeFileError::TooLarge(size_bytes));
        }
        Ok(Self {
            file_name,
            size_bytes,
        })
    }

    /// Original file name.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Attachment size in bytes.
    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }
}

/// Attachment rejection reasons.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ResumeFileError {
    /// Not a pdf/doc/docx file.
    #[error("'{0}' is not an accepted file type (pdf, doc, docx)")]
    UnsupportedType(String),
    /// Over the 5 MB cap.
    #[error("file is too large ({0} bytes, limit is {MAX_RESUME_BYTES})")]
    TooLarge(u64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_supported_types() {
        for name in ["cv.pdf", "cv.doc", "cv.docx", "CV.PDF"] {
            assert!(ResumeFile::new(name, 1024).is_ok(), "{name}");
        }
    }

    #[test]
    fn test_rejects_other_types() {
        assert!(matches!(
            ResumeFile::new("cv.exe", 1024),
            Err(ResumeFileError::UnsupportedType(_))
        ));
        assert!(matches!(
            ResumeFile::new("no-extension", 1024),
            Err(ResumeFileError::UnsupportedType(_))
        ));
    }

    #[test]
    fn test_size_cap() {
        assert!(ResumeFile::new("cv.pdf", MAX_RESUME_BYTES).is_ok());
        assert!(matches!(
            ResumeFile::new("cv.pdf", MAX_RESUME_BYTES + 1),
            Err(ResumeFileError::TooLarge(_))
        ));
    }
}
