pub mod pdftotext;

use crate::error::FloorscanError;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in page-local units. Origin is the top-left
/// corner of the page (y grows downward), matching pdftotext output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BBox {
    pub x_min: f32,
    pub y_min: f32,
    pub x_max: f32,
    pub y_max: f32,
}

/// One positioned unit of page text. The text may span multiple lines.
#[derive(Debug, Clone)]
pub struct TextBlock {
    pub bbox: BBox,
    pub text: String,
}

/// Text blocks of a single page, in the order the backend emitted them.
/// That order is the canonical traversal order for classification.
#[derive(Debug, Clone)]
pub struct PageBlocks {
    pub page_number: usize,
    /// Page size in the same units as the block bounding boxes.
    pub width: f32,
    pub height: f32,
    pub blocks: Vec<TextBlock>,
}

/// Trait for PDF block extraction backends.
pub trait PdfSource: Send + Sync {
    /// Extract positioned text blocks from PDF bytes, one PageBlocks per page.
    fn extract_blocks(&self, pdf_bytes: &[u8]) -> Result<Vec<PageBlocks>, FloorscanError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
