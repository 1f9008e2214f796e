use crate::error::FloorscanError;
use crate::extraction::{BBox, PageBlocks, PdfSource, TextBlock};
use std::io::Write;
use std::process::Command;

/// PDF block extraction backend using pdftotext (from poppler-utils).
///
/// Uses `pdftotext -bbox-layout`, which reports text grouped into
/// positioned blocks, lines and words.
pub struct PdftotextSource;

impl PdftotextSource {
    pub fn new() -> Self {
        PdftotextSource
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl Default for PdftotextSource {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfSource for PdftotextSource {
    fn extract_blocks(&self, pdf_bytes: &[u8]) -> Result<Vec<PageBlocks>, FloorscanError> {
        // Write PDF bytes to a temp file
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| FloorscanError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(pdf_bytes)
            .map_err(|e| FloorscanError::Extraction(e.to_string()))?;

        let output = Command::new("pdftotext")
            .arg("-bbox-layout")
            .arg(tmpfile.path())
            .arg("-") // output to stdout
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    FloorscanError::PdftotextNotFound
                } else {
                    FloorscanError::Extraction(format!("pdftotext failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(FloorscanError::PdftotextFailed { code, stderr });
        }

        let xml = String::from_utf8_lossy(&output.stdout);
        Ok(parse_bbox_xml(&xml))
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

/// Parse the -bbox-layout XML tag stream into block-level page content.
///
/// Words within a line are joined by single spaces, lines within a block
/// by `\n`, so a block whose first line is a room label keeps the label
/// and its dimension line separated the way the classifier expects.
fn parse_bbox_xml(xml: &str) -> Vec<PageBlocks> {
    let mut pages: Vec<PageBlocks> = Vec::new();
    let mut current_page: Option<PageBlocks> = None;
    let mut current_bbox: Option<BBox> = None;
    let mut current_lines: Vec<String> = Vec::new();
    let mut current_words: Vec<String> = Vec::new();

    for raw in xml.lines() {
        let line = raw.trim();

        if line.starts_with("<page") {
            if let Some(page) = current_page.take() {
                pages.push(page);
            }
            current_page = Some(PageBlocks {
                page_number: pages.len() + 1,
                width: parse_attr_f32(line, "width").unwrap_or(0.0),
                height: parse_attr_f32(line, "height").unwrap_or(0.0),
                blocks: Vec::new(),
            });
            continue;
        }

        if line.starts_with("<block ") {
            current_bbox = parse_bbox(line);
            current_lines.clear();
            continue;
        }

        if line.starts_with("<line ") {
            current_words.clear();
            continue;
        }

        if line.starts_with("<word ") {
            if let Some(word_text) = parse_word_text(line) {
                let w = decode_xml_entities(&word_text).trim().to_string();
                if !w.is_empty() {
                    current_words.push(w);
                }
            }
            continue;
        }

        if line.starts_with("</line>") {
            let text = current_words.join(" ");
            if !text.is_empty() {
                current_lines.push(text);
            }
            current_words.clear();
            continue;
        }

        if line.starts_with("</block>") {
            if let (Some(page), Some(bbox)) = (current_page.as_mut(), current_bbox.take()) {
                let text = current_lines.join("\n");
                if !text.is_empty() {
                    page.blocks.push(TextBlock { bbox, text });
                }
            }
            current_lines.clear();
        }
    }

    if let Some(page) = current_page.take() {
        pages.push(page);
    }

    pages
}

fn parse_attr_f32(tag: &str, name: &str) -> Option<f32> {
    parse_attr(tag, name)?.parse().ok()
}

fn parse_attr<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    let needle = format!("{}=\"", name);
    let start = tag.find(&needle)? + needle.len();
    let rest = &tag[start..];
    let end = rest.find('"')?;
    Some(&rest[..end])
}

fn parse_bbox(block_tag: &str) -> Option<BBox> {
    Some(BBox {
        x_min: parse_attr_f32(block_tag, "xMin")?,
        y_min: parse_attr_f32(block_tag, "yMin")?,
        x_max: parse_attr_f32(block_tag, "xMax")?,
        y_max: parse_attr_f32(block_tag, "yMax")?,
    })
}

fn parse_word_text(word_tag: &str) -> Option<String> {
    let start = word_tag.find('>')? + 1;
    let end = word_tag.rfind("</word>")?;
    Some(word_tag[start..end].to_string())
}

fn decode_xml_entities(s: &str) -> String {
    s.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
}
