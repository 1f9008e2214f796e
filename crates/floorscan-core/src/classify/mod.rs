pub mod engine;
pub mod outcome;

pub use engine::classify_page;
pub use outcome::{
    AnnotationColor, AnnotationDirective, ExtractionResult, OtherDimension, PageResult, Room,
};
