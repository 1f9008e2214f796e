use floorscan_core::classify::outcome::ExtractionResult;
use floorscan_core::error::FloorscanError;

/// The JSON data record is the per-page results only. Annotation
/// directives are a side channel consumed by the annotate command.
pub fn to_string(result: &ExtractionResult) -> Result<String, FloorscanError> {
    Ok(serde_json::to_string_pretty(&result.pages)?)
}
