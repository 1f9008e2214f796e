use floorscan_core::extraction::pdftotext::PdftotextSource;
use std::path::PathBuf;

use crate::output;

pub fn run(
    input_file: PathBuf,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<(), floorscan_core::error::FloorscanError> {
    let pdf_bytes = std::fs::read(&input_file)?;
    let source = PdftotextSource::new();
    let result = floorscan_core::extract_floorplan(&pdf_bytes, &source)?;

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            let json = output::json::to_string(&result)?;
            std::fs::write(&path, json)?;
            eprintln!(
                "Extracted {} page(s), written to {}",
                result.pages.len(),
                path.display()
            );
            for w in &result.warnings {
                eprintln!("  warning: page {}: {}", w.page_number, w.message);
            }
        }
        None => {
            let output_str = match output_format {
                "json" => output::json::to_string(&result)?,
                _ => output::table::format(&result),
            };
            println!("{output_str}");
        }
    }

    Ok(())
}
