use bytes::Bytes;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("PDF text extraction failed: {0}")]
    Pdf(String),

    #[error("PDF extractor aborted: {0}")]
    Aborted(String),

    #[error("document contains no extractable text")]
    Empty,
}

/// Extracts plain text from an in-memory PDF.
///
/// The extractor is CPU-bound and can panic on malformed input, so it runs on
/// the blocking pool; a panic comes back as `ExtractError::Aborted`.
pub async fn extract_text(document: Bytes) -> Result<String, ExtractError> {
    let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&document))
        .await
        .map_err(|e| ExtractError::Aborted(e.to_string()))?
        .map_err(|e| ExtractError::Pdf(e.to_string()))?;

    if text.trim().is_empty() {
        return Err(ExtractError::Empty);
    }

    tracing::debug!("Extracted {} chars from uploaded document", text.len());
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_non_pdf_bytes_fail_extraction() {
        let result = extract_text(Bytes::from_static(b"plain text, not a pdf")).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_empty_upload_fails_extraction() {
        let result = extract_text(Bytes::new()).await;
        assert!(result.is_err());
    }
}
