//! Text acquisition — turns an uploaded PDF or DOCX into plain text.
//!
//! Byte-level parsing is delegated to `pdf-extract` and `docx-lite`. Everything
//! here is blocking I/O; async callers go through `spawn_blocking`.

use std::fmt::Display;
use std::io::Write;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum AcquisitionError {
    #[error("Unsupported file format '{extension}'. Use PDF or DOCX.")]
    UnsupportedFormat { extension: String },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read PDF {path}: {message}")]
    Pdf { path: PathBuf, message: String },

    #[error("Failed to read DOCX {path}: {message}")]
    Docx { path: PathBuf, message: String },
}

impl AcquisitionError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        AcquisitionError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Document formats with a text extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Kind from the file extension, case-insensitively.
    pub fn from_path(path: &Path) -> Result<Self, AcquisitionError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "pdf" => Ok(DocumentKind::Pdf),
            "docx" => Ok(DocumentKind::Docx),
            _ => Err(AcquisitionError::UnsupportedFormat { extension }),
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            DocumentKind::Pdf => "pdf",
            DocumentKind::Docx => "docx",
        }
    }
}

/// Plain text of the document at `path`: pages joined by newlines for PDF,
/// paragraphs joined by newlines for DOCX.
pub fn extract_text_from_file(path: &Path) -> Result<String, AcquisitionError> {
    let kind = DocumentKind::from_path(path)?;
    std::fs::metadata(path).map_err(|e| AcquisitionError::io(path, e))?;

    let text = match kind {
        DocumentKind::Pdf => extract_pdf_text(path)?,
        DocumentKind::Docx => extract_docx_text(path)?,
    };
    debug!(
        "Extracted {} chars from {} ({:?})",
        text.len(),
        path.display(),
        kind
    );
    Ok(text)
}

/// Stores `bytes` in a temporary file under `upload_dir` named after
/// `file_name`'s extension and extracts its text. The file is removed before
/// returning.
pub fn extract_text_from_upload(
    bytes: &[u8],
    file_name: &str,
    upload_dir: &Path,
) -> Result<String, AcquisitionError> {
    let kind = DocumentKind::from_path(Path::new(file_name))?;

    let mut file = tempfile::Builder::new()
        .prefix("cv-")
        .suffix(&format!(".{}", kind.extension()))
        .tempfile_in(upload_dir)
        .map_err(|e| AcquisitionError::io(upload_dir, e))?;
    file.write_all(bytes)
        .and_then(|_| file.flush())
        .map_err(|e| AcquisitionError::io(file.path(), e))?;

    extract_text_from_file(file.path())
}

fn extract_pdf_text(path: &Path) -> Result<String, AcquisitionError> {
    let raw = run_pdf_extractor(path, |p| pdf_extract::extract_text(p))?;
    Ok(join_pages(&raw))
}

/// `pdf_extract` can panic on malformed input; a panic is reported like any
/// other unreadable PDF.
fn run_pdf_extractor<F, E>(path: &Path, extract: F) -> Result<String, AcquisitionError>
where
    F: FnOnce(&Path) -> Result<String, E>,
    E: Display,
{
    let pdf_error = |message: String| AcquisitionError::Pdf {
        path: path.to_path_buf(),
        message,
    };
    match panic::catch_unwind(AssertUnwindSafe(|| extract(path))) {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(pdf_error(e.to_string())),
        Err(_) => {
            warn!("PDF parser panicked on {}", path.display());
            Err(pdf_error("PDF parser panicked (malformed PDF)".to_string()))
        }
    }
}

fn extract_docx_text(path: &Path) -> Result<String, AcquisitionError> {
    docx_lite::extract_text(path).map_err(|e| AcquisitionError::Docx {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Pages come back separated by form feeds. Empty pages are dropped and each
/// kept page ends with a newline.
fn join_pages(raw: &str) -> String {
    raw.split('\x0c')
        .filter(|page| !page.trim().is_empty())
        .fold(String::new(), |mut text, page| {
            text.push_str(page);
            if !page.ends_with('\n') {
                text.push('\n');
            }
            text
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_extension() {
        assert_eq!(
            DocumentKind::from_path(Path::new("cv.pdf")).unwrap(),
            DocumentKind::Pdf
        );
        assert_eq!(
            DocumentKind::from_path(Path::new("/tmp/My CV.DOCX")).unwrap(),
            DocumentKind::Docx
        );
    }

    #[test]
    fn test_unsupported_extension() {
        let err = DocumentKind::from_path(Path::new("cv.txt")).unwrap_err();
        assert!(matches!(
            err,
            AcquisitionError::UnsupportedFormat { ref extension } if extension == "txt"
        ));
        assert!(err.to_string().contains("Use PDF or DOCX"));
    }

    #[test]
    fn test_missing_extension_is_unsupported() {
        assert!(matches!(
            DocumentKind::from_path(Path::new("resume")),
            Err(AcquisitionError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = extract_text_from_file(Path::new("/nonexistent/cv.pdf")).unwrap_err();
        assert!(matches!(err, AcquisitionError::Io { .. }));
    }

    #[test]
    fn test_unsupported_checked_before_io() {
        let err = extract_text_from_file(Path::new("/nonexistent/cv.odt")).unwrap_err();
        assert!(matches!(err, AcquisitionError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_garbage_pdf_upload_is_pdf_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = extract_text_from_upload(b"not a pdf", "cv.pdf", dir.path()).unwrap_err();
        assert!(matches!(err, AcquisitionError::Pdf { .. }), "got {err:?}");
        // temp file cleaned up
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_pdf_parser_panic_is_pdf_error() {
        let err = run_pdf_extractor(Path::new("cv.pdf"), |_| -> Result<String, std::io::Error> {
            panic!("broken xref table")
        })
        .unwrap_err();
        assert!(
            matches!(err, AcquisitionError::Pdf { ref message, .. } if message.contains("panicked")),
            "got {err:?}"
        );
    }

    #[test]
    fn test_pdf_parser_error_keeps_message() {
        let err = run_pdf_extractor(Path::new("cv.pdf"), |_| {
            Err::<String, _>(std::io::Error::other("no trailer"))
        })
        .unwrap_err();
        assert!(err.to_string().contains("no trailer"));
    }

    #[test]
    fn test_garbage_docx_upload_is_docx_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = extract_text_from_upload(b"not a zip", "cv.docx", dir.path()).unwrap_err();
        assert!(matches!(err, AcquisitionError::Docx { .. }), "got {err:?}");
    }

    #[test]
    fn test_join_pages_skips_empty_pages() {
        assert_eq!(join_pages("Jane Doe\n\x0c\n\x0cSkills: Rust"), "Jane Doe\nSkills: Rust\n");
        assert_eq!(join_pages(""), "");
    }
}
