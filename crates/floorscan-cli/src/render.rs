use floorscan_core::classify::outcome::AnnotationDirective;
use floorscan_core::error::FloorscanError;
use lopdf::{dictionary, Document, Object, ObjectId};
use std::path::Path;

/// Apply annotation directives to a copy of the source PDF.
///
/// Each directive becomes a `/Square` annotation with the directive's
/// stroke color and width. Directive coordinates have a top-left origin;
/// PDF user space is bottom-left, so rectangles are flipped against the
/// page MediaBox height. Directives addressing pages the document does
/// not have are skipped.
pub fn write_annotated(
    pdf_bytes: &[u8],
    annotations: &[AnnotationDirective],
    out: &Path,
) -> Result<(), FloorscanError> {
    let mut doc =
        Document::load_mem(pdf_bytes).map_err(|e| FloorscanError::Annotation(e.to_string()))?;
    let pages = doc.get_pages();

    for directive in annotations {
        let Some(&page_id) = pages.get(&(directive.page_number as u32)) else {
            log::warn!(
                "document has no page {}, directive skipped",
                directive.page_number
            );
            continue;
        };
        let Some(height) = page_height(&doc, page_id) else {
            log::warn!(
                "no MediaBox found for page {}, directive skipped",
                directive.page_number
            );
            continue;
        };

        let b = &directive.bbox;
        let rect: Vec<Object> = vec![
            b.x_min.into(),
            (height - b.y_max).into(),
            b.x_max.into(),
            (height - b.y_min).into(),
        ];
        let [r, g, bl] = directive.color.rgb();

        let annot_id = doc.add_object(dictionary! {
            "Type" => "Annot",
            "Subtype" => "Square",
            "Rect" => rect,
            "C" => vec![r.into(), g.into(), bl.into()],
            "BS" => dictionary! { "W" => directive.stroke_width, "S" => "S" },
            "F" => 4i64,
        });
        push_page_annotation(&mut doc, page_id, annot_id)?;
    }

    doc.save(out)
        .map_err(|e| FloorscanError::Annotation(e.to_string()))?;
    Ok(())
}

/// Resolve the page's MediaBox height, walking `/Parent` for inherited
/// boxes. The walk is bounded in case of a malformed page tree.
fn page_height(doc: &Document, page_id: ObjectId) -> Option<f32> {
    let mut current = page_id;
    for _ in 0..32 {
        let dict = doc.get_dictionary(current).ok()?;
        if let Ok(obj) = dict.get(b"MediaBox") {
            let arr = resolve(doc, obj)?.as_array().ok()?;
            if arr.len() < 4 {
                return None;
            }
            let y0 = number(resolve(doc, &arr[1])?)?;
            let y1 = number(resolve(doc, &arr[3])?)?;
            return Some(y1 - y0);
        }
        current = dict.get(b"Parent").ok()?.as_reference().ok()?;
    }
    None
}

fn resolve<'a>(doc: &'a Document, obj: &'a Object) -> Option<&'a Object> {
    match obj {
        Object::Reference(id) => doc.get_object(*id).ok(),
        _ => Some(obj),
    }
}

fn number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r as f32),
        _ => None,
    }
}

/// Append an annotation reference to the page's `/Annots`, which may be
/// absent, a direct array, or a reference to one.
fn push_page_annotation(
    doc: &mut Document,
    page_id: ObjectId,
    annot_id: ObjectId,
) -> Result<(), FloorscanError> {
    let annots = doc
        .get_dictionary(page_id)
        .ok()
        .and_then(|d| d.get(b"Annots").ok().cloned());

    match annots {
        Some(Object::Reference(arr_id)) => {
            let arr = doc
                .get_object_mut(arr_id)
                .and_then(Object::as_array_mut)
                .map_err(|e| FloorscanError::Annotation(e.to_string()))?;
            arr.push(Object::Reference(annot_id));
        }
        Some(Object::Array(mut arr)) => {
            arr.push(Object::Reference(annot_id));
            set_page_annots(doc, page_id, arr)?;
        }
        _ => {
            set_page_annots(doc, page_id, vec![Object::Reference(annot_id)])?;
        }
    }

    Ok(())
}

fn set_page_annots(
    doc: &mut Document,
    page_id: ObjectId,
    arr: Vec<Object>,
) -> Result<(), FloorscanError> {
    let dict = doc
        .get_object_mut(page_id)
        .and_then(Object::as_dict_mut)
        .map_err(|e| FloorscanError::Annotation(e.to_string()))?;
    dict.set("Annots", arr);
    Ok(())
}
