//! PDF text extraction — the boundary collaborator in front of the scoring
//! engine. The engine is never invoked with unusable text: unreadable or
//! text-free documents fail here and surface as a request-level error.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Failed to parse PDF content: {0}")]
    Unreadable(#[from] pdf_extract::OutputError),

    #[error("PDF contained no extractable text")]
    Empty,
}

/// Extracts plain text from raw PDF bytes, trimmed of surrounding whitespace.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let text = pdf_extract::extract_text_from_mem(bytes)?;
    let text = text.trim();
    if text.is_empty() {
        return Err(ExtractError::Empty);
    }
    Ok(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_bytes_are_unreadable() {
        assert!(matches!(
            extract_pdf_text(b"definitely not a pdf"),
            Err(ExtractError::Unreadable(_))
        ));
    }

    #[test]
    fn test_empty_input_is_an_error_not_an_empty_string() {
        assert!(extract_pdf_text(b"").is_err());
    }
}
