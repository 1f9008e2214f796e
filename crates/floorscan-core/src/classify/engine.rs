use crate::classify::outcome::{
    AnnotationColor, AnnotationDirective, ExtractWarning, OtherDimension, PageOutcome, PageResult,
    Room,
};
use crate::extraction::PageBlocks;
use crate::parsing::dimension::parse_dimension;
use crate::parsing::patterns::{CODE_TOKEN, DIMENSION_TOKEN, ROOM_BLOCK};
use std::collections::BTreeSet;

const ROOM_STROKE_WIDTH: f32 = 1.5;
const LEFTOVER_STROKE_WIDTH: f32 = 1.0;

/// Terminal classification of one block. A block reaches exactly one of
/// these; consumed blocks are never revisited.
#[derive(Debug, Clone, Copy, PartialEq)]
enum BlockState {
    Unclassified,
    Room,
    Leftover,
}

/// Classify one page's blocks in two passes.
///
/// Pass 1 takes complete room blocks (label line + dimension pair); pass 2
/// scavenges every remaining block for bare dimension tokens and codes.
/// Pass 1 runs to completion first: pass 2's skip set is pass 1's
/// consumption marks.
pub fn classify_page(page: &PageBlocks) -> PageOutcome {
    let mut result = PageResult {
        page: page.page_number,
        rooms: Vec::new(),
        other_dimensions: Vec::new(),
        codes: BTreeSet::new(),
    };
    let mut annotations = Vec::new();
    let mut warnings = Vec::new();
    let mut states = vec![BlockState::Unclassified; page.blocks.len()];

    // Pass 1: rooms
    for (i, block) in page.blocks.iter().enumerate() {
        let Some(caps) = ROOM_BLOCK.captures(&block.text) else {
            continue;
        };

        let name = caps[1].trim().to_string();
        let dim1_raw = caps[2].trim().to_string();
        let dim2_raw = caps[3].trim().to_string();

        let dim1 = parse_dimension(&dim1_raw);
        let dim2 = parse_dimension(&dim2_raw);

        // Both dimensions must convert for the block to become a room;
        // otherwise it stays unconsumed and pass 2 scavenges it.
        if let (Some(length_in), Some(width_in)) = (dim1, dim2) {
            result.rooms.push(Room {
                name,
                raw_text: format!("{} x {}", dim1_raw, dim2_raw),
                length_in,
                width_in,
                bbox: block.bbox.clone(),
            });
            annotations.push(AnnotationDirective {
                page_number: page.page_number,
                bbox: block.bbox.clone(),
                color: AnnotationColor::Green,
                stroke_width: ROOM_STROKE_WIDTH,
            });
            states[i] = BlockState::Room;
        } else {
            let message = format!(
                "room candidate '{}': could not convert '{}' x '{}', block left for pass 2",
                name, dim1_raw, dim2_raw
            );
            log::debug!("page {}: {}", page.page_number, message);
            warnings.push(ExtractWarning {
                page_number: page.page_number,
                message,
            });
        }
    }

    // Pass 2: leftover dimensions and codes
    for (i, block) in page.blocks.iter().enumerate() {
        if states[i] != BlockState::Unclassified {
            continue;
        }

        let mut found_dimension = false;
        let mut found_code = false;

        for m in DIMENSION_TOKEN.find_iter(&block.text) {
            let raw = m.as_str().trim();
            if let Some(inches) = parse_dimension(raw) {
                result.other_dimensions.push(OtherDimension {
                    raw: raw.to_string(),
                    inches,
                    bbox: block.bbox.clone(),
                });
                found_dimension = true;
            }
        }

        for m in CODE_TOKEN.find_iter(&block.text) {
            result.codes.insert(m.as_str().to_string());
            found_code = true;
        }

        if found_dimension || found_code {
            states[i] = BlockState::Leftover;
            annotations.push(AnnotationDirective {
                page_number: page.page_number,
                bbox: block.bbox.clone(),
                // Dimensions take visual precedence when a block has both.
                color: if found_dimension {
                    AnnotationColor::Red
                } else {
                    AnnotationColor::Blue
                },
                stroke_width: LEFTOVER_STROKE_WIDTH,
            });
        }
    }

    PageOutcome {
        result,
        annotations,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::{BBox, TextBlock};

    fn bbox(i: f32) -> BBox {
        BBox {
            x_min: i * 100.0,
            y_min: 0.0,
            x_max: i * 100.0 + 80.0,
            y_max: 20.0,
        }
    }

    fn page(texts: &[&str]) -> PageBlocks {
        PageBlocks {
            page_number: 1,
            width: 612.0,
            height: 792.0,
            blocks: texts
                .iter()
                .enumerate()
                .map(|(i, t)| TextBlock {
                    bbox: bbox(i as f32),
                    text: t.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_room_block_classified() {
        let outcome = classify_page(&page(&["Bedroom\n10' x 8'6\""]));
        assert_eq!(outcome.result.rooms.len(), 1);
        let room = &outcome.result.rooms[0];
        assert_eq!(room.name, "Bedroom");
        assert_eq!(room.raw_text, "10' x 8'6\"");
        assert_eq!(room.length_in, 120.0);
        assert_eq!(room.width_in, 102.0);
        assert!(outcome.result.other_dimensions.is_empty());
        assert!(outcome.result.codes.is_empty());
    }

    #[test]
    fn test_room_annotation_green() {
        let outcome = classify_page(&page(&["Bedroom\n10' x 8'6\""]));
        assert_eq!(outcome.annotations.len(), 1);
        assert_eq!(outcome.annotations[0].color, AnnotationColor::Green);
        assert_eq!(outcome.annotations[0].stroke_width, 1.5);
    }

    #[test]
    fn test_room_wins_over_code_in_same_block() {
        // The code inside a consumed room block is not surfaced by pass 2.
        let outcome = classify_page(&page(&["Pantry\n10' x 8' DB24"]));
        assert_eq!(outcome.result.rooms.len(), 1);
        assert!(outcome.result.codes.is_empty());
        assert!(outcome.result.other_dimensions.is_empty());
    }

    #[test]
    fn test_room_shaped_block_with_alpha_dims_scavenged() {
        let outcome = classify_page(&page(&["Kitchen\nBIG x BIG DB24"]));
        assert!(outcome.result.rooms.is_empty());
        assert_eq!(
            outcome.result.codes,
            BTreeSet::from(["DB24".to_string()])
        );
    }

    #[test]
    fn test_room_candidate_with_bad_fraction_demoted() {
        // Structurally a room, but the first dimension has a zero
        // denominator: no Room, pass 2 recovers the second dimension.
        let outcome = classify_page(&page(&["Kitchen\n6 1/0\" x 8'"]));
        assert!(outcome.result.rooms.is_empty());
        assert_eq!(outcome.result.other_dimensions.len(), 1);
        assert_eq!(outcome.result.other_dimensions[0].raw, "8'");
        assert_eq!(outcome.result.other_dimensions[0].inches, 96.0);
        assert_eq!(outcome.warnings.len(), 1);
        assert!(outcome.warnings[0].message.contains("Kitchen"));
    }

    #[test]
    fn test_multi_token_leftover_block() {
        let outcome = classify_page(&page(&["DB24 6' OTS"]));
        assert_eq!(outcome.result.other_dimensions.len(), 1);
        assert_eq!(outcome.result.other_dimensions[0].raw, "6'");
        assert_eq!(outcome.result.other_dimensions[0].inches, 72.0);
        assert_eq!(
            outcome.result.codes,
            BTreeSet::from(["DB24".to_string(), "OTS".to_string()])
        );
        // One directive for the block, red: dimension beats code.
        assert_eq!(outcome.annotations.len(), 1);
        assert_eq!(outcome.annotations[0].color, AnnotationColor::Red);
        assert_eq!(outcome.annotations[0].stroke_width, 1.0);
    }

    #[test]
    fn test_code_only_block_blue() {
        let outcome = classify_page(&page(&["OTS"]));
        assert!(outcome.result.other_dimensions.is_empty());
        assert_eq!(outcome.annotations.len(), 1);
        assert_eq!(outcome.annotations[0].color, AnnotationColor::Blue);
    }

    #[test]
    fn test_unmatched_block_produces_nothing() {
        let outcome = classify_page(&page(&["GENERAL NOTES"]));
        assert!(outcome.result.rooms.is_empty());
        assert!(outcome.result.other_dimensions.is_empty());
        assert!(outcome.result.codes.is_empty());
        assert!(outcome.annotations.is_empty());
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn test_codes_deduplicated_across_blocks() {
        let outcome = classify_page(&page(&["DB24", "DB24 OTS"]));
        assert_eq!(
            outcome.result.codes,
            BTreeSet::from(["DB24".to_string(), "OTS".to_string()])
        );
        // Both blocks still get their own directive.
        assert_eq!(outcome.annotations.len(), 2);
    }

    #[test]
    fn test_traversal_order_preserved() {
        let outcome = classify_page(&page(&["6'", "Bedroom\n10' x 8'", "7'"]));
        assert_eq!(outcome.result.rooms.len(), 1);
        let raws: Vec<&str> = outcome
            .result
            .other_dimensions
            .iter()
            .map(|d| d.raw.as_str())
            .collect();
        assert_eq!(raws, vec!["6'", "7'"]);
    }

    #[test]
    fn test_exclusive_consumption() {
        let outcome = classify_page(&page(&["Bedroom\n10' x 8'", "6'"]));
        // The room block contributes nothing to pass 2 output.
        assert_eq!(outcome.result.rooms.len(), 1);
        assert_eq!(outcome.result.other_dimensions.len(), 1);
        assert_eq!(outcome.result.other_dimensions[0].raw, "6'");
        assert_eq!(outcome.result.other_dimensions[0].bbox, bbox(1.0));
    }
}
