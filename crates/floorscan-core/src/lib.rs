pub mod classify;
pub mod error;
pub mod extraction;
pub mod parsing;

use classify::outcome::ExtractionResult;
use error::FloorscanError;
use extraction::{PageBlocks, PdfSource};

/// Main API entry point: extract floorplan data from a PDF.
///
/// Obtains positioned text blocks from the source backend, classifies
/// each page, and assembles the per-page records plus the annotation
/// directives for the rendering sink.
pub fn extract_floorplan(
    pdf_bytes: &[u8],
    source: &dyn PdfSource,
) -> Result<ExtractionResult, FloorscanError> {
    let pages = source.extract_blocks(pdf_bytes)?;

    if pages.is_empty() {
        return Err(FloorscanError::EmptyDocument);
    }

    Ok(classify_pages(&pages))
}

/// Classify pre-extracted pages. Pages are independent; results keep the
/// input page order.
pub fn classify_pages(pages: &[PageBlocks]) -> ExtractionResult {
    let mut result = ExtractionResult {
        pages: Vec::new(),
        annotations: Vec::new(),
        warnings: Vec::new(),
    };

    for page in pages {
        let outcome = classify::classify_page(page);
        result.pages.push(outcome.result);
        result.annotations.extend(outcome.annotations);
        result.warnings.extend(outcome.warnings);
    }

    result
}
