use crate::extraction::BBox;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A named space with a successfully converted length x width pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// The label line, as it appeared above the dimension line.
    pub name: String,
    /// The dimension pair as captured, e.g. `10' x 8'6"`.
    pub raw_text: String,
    pub length_in: f64,
    pub width_in: f64,
    /// Bounding box of the originating block.
    pub bbox: BBox,
}

/// A dimension token found in a block that is not a room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OtherDimension {
    pub raw: String,
    pub inches: f64,
    pub bbox: BBox,
}

/// Everything recognized on one page.
///
/// `rooms` and `other_dimensions` preserve the block traversal order.
/// `codes` has set semantics: duplicates collapse, and the sorted order it
/// serializes in carries no meaning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResult {
    pub page: usize,
    pub rooms: Vec<Room>,
    pub other_dimensions: Vec<OtherDimension>,
    pub codes: BTreeSet<String>,
}

/// Stroke color for an annotation rectangle: green for rooms, red for
/// dimension-bearing leftovers, blue for code-only leftovers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationColor {
    Green,
    Red,
    Blue,
}

impl AnnotationColor {
    pub fn rgb(self) -> [f32; 3] {
        match self {
            AnnotationColor::Green => [0.0, 1.0, 0.0],
            AnnotationColor::Red => [1.0, 0.0, 0.0],
            AnnotationColor::Blue => [0.0, 0.0, 1.0],
        }
    }
}

/// Instruction for the rendering sink: stroke a rectangle on the source
/// page. Produced in lockstep with classification but not part of the
/// page data record.
#[derive(Debug, Clone, Serialize)]
pub struct AnnotationDirective {
    pub page_number: usize,
    pub bbox: BBox,
    pub color: AnnotationColor,
    pub stroke_width: f32,
}

/// Operator-visible diagnostic collected during classification.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractWarning {
    pub page_number: usize,
    pub message: String,
}

/// Classification output for one page.
#[derive(Debug, Clone)]
pub struct PageOutcome {
    pub result: PageResult,
    pub annotations: Vec<AnnotationDirective>,
    pub warnings: Vec<ExtractWarning>,
}

/// Document-level result: per-page records plus the annotation side
/// channel and collected warnings.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionResult {
    pub pages: Vec<PageResult>,
    pub annotations: Vec<AnnotationDirective>,
    pub warnings: Vec<ExtractWarning>,
}
