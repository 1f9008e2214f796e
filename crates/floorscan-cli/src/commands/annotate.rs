use floorscan_core::error::FloorscanError;
use floorscan_core::extraction::pdftotext::PdftotextSource;
use std::path::{Path, PathBuf};

use crate::output;
use crate::render;

pub fn run(
    input_file: PathBuf,
    out: Option<PathBuf>,
    data: Option<PathBuf>,
) -> Result<(), FloorscanError> {
    let pdf_bytes = std::fs::read(&input_file)?;
    let source = PdftotextSource::new();
    let result = floorscan_core::extract_floorplan(&pdf_bytes, &source)?;

    let out_path = out.unwrap_or_else(|| default_out_path(&input_file));

    // Replace any stale copy from an earlier run.
    if out_path.exists() {
        std::fs::remove_file(&out_path)?;
    }

    render::write_annotated(&pdf_bytes, &result.annotations, &out_path)?;
    eprintln!(
        "Outlined {} block(s) across {} page(s), written to {}",
        result.annotations.len(),
        result.pages.len(),
        out_path.display()
    );

    if let Some(data_path) = data {
        let json = output::json::to_string(&result)?;
        std::fs::write(&data_path, json)?;
        eprintln!("Extracted data written to {}", data_path.display());
    }

    for w in &result.warnings {
        eprintln!("  warning: page {}: {}", w.page_number, w.message);
    }

    Ok(())
}

fn default_out_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("floorplan");
    input.with_file_name(format!("{stem}-annotated.pdf"))
}
