//! Document text extraction
//!
//! Turns an uploaded file (plain text or PDF) into the document text the
//! reviewer and summarizer operate on. Plain text must be valid UTF-8;
//! PDFs are extracted page by page and the pages concatenated in page
//! order with no separator between them, matching the behavior the rest
//! of the system was built against. Word-wrap across a page boundary can
//! therefore split a word; callers that care should not rely on page
//! boundaries surviving extraction.

use pdf_extract::extract_text_from_mem;
use thiserror::Error;

/// The two upload types the extraction step accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    PlainText,
    Pdf,
}

impl DocumentKind {
    /// Map a MIME content type onto a supported document kind.
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        // Ignore any parameters, e.g. "text/plain; charset=utf-8".
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or(content_type)
            .trim();

        match essence {
            "text/plain" => Some(Self::PlainText),
            "application/pdf" => Some(Self::Pdf),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("uploaded text is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("document could not be read as a PDF: {0}")]
    UnreadableDocument(String),
}

/// Extract the full text of an uploaded document.
pub fn extract_text(kind: DocumentKind, bytes: &[u8]) -> Result<String, ExtractError> {
    match kind {
        DocumentKind::PlainText => decode_utf8(bytes),
        DocumentKind::Pdf => extract_pdf_text(bytes),
    }
}

fn decode_utf8(bytes: &[u8]) -> Result<String, ExtractError> {
    Ok(String::from_utf8(bytes.to_vec())?)
}

/// Extract text from PDF bytes, pages concatenated in page order.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let raw_text = extract_text_from_mem(bytes)
        .map_err(|e| ExtractError::UnreadableDocument(e.to_string()))?;

    Ok(join_pages(&raw_text))
}

/// pdf-extract marks page breaks with form feed characters; drop them so
/// pages are joined with no separator.
fn join_pages(raw_text: &str) -> String {
    if raw_text.contains('\x0C') {
        raw_text.split('\x0C').collect()
    } else {
        raw_text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn content_type_maps_to_document_kind() {
        assert_eq!(
            DocumentKind::from_content_type("text/plain"),
            Some(DocumentKind::PlainText)
        );
        assert_eq!(
            DocumentKind::from_content_type("text/plain; charset=utf-8"),
            Some(DocumentKind::PlainText)
        );
        assert_eq!(
            DocumentKind::from_content_type("application/pdf"),
            Some(DocumentKind::Pdf)
        );
        assert_eq!(DocumentKind::from_content_type("image/png"), None);
    }

    #[test]
    fn valid_utf8_decodes_verbatim() {
        let text = extract_text(DocumentKind::PlainText, "judgment \u{2014} text".as_bytes());
        assert_eq!(text.unwrap(), "judgment \u{2014} text");
    }

    #[test]
    fn invalid_utf8_is_an_encoding_error() {
        let result = extract_text(DocumentKind::PlainText, &[0xff, 0xfe, 0x41]);
        assert!(matches!(result, Err(ExtractError::Encoding(_))));
    }

    #[test]
    fn garbage_bytes_are_not_a_readable_pdf() {
        let result = extract_text(DocumentKind::Pdf, b"not a pdf at all");
        assert!(matches!(result, Err(ExtractError::UnreadableDocument(_))));
    }

    #[test]
    fn pages_join_with_no_separator() {
        let joined = join_pages("end of page one\x0Cstart of page two\x0Cpage three");
        assert_eq!(joined, "end of page onestart of page twopage three");
    }

    #[test]
    fn single_page_text_is_unchanged() {
        let joined = join_pages("one page, no form feeds");
        assert_eq!(joined, "one page, no form feeds");
    }
}
