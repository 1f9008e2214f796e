use floorscan_core::classify::outcome::ExtractionResult;

pub fn format(result: &ExtractionResult) -> String {
    let mut out = String::new();

    for page in &result.pages {
        out.push_str(&format!("=== Page {} ===\n", page.page));

        if page.rooms.is_empty() && page.other_dimensions.is_empty() && page.codes.is_empty() {
            out.push_str("  (nothing recognized)\n\n");
            continue;
        }

        if !page.rooms.is_empty() {
            out.push_str("  Rooms:\n");
            let max_name = page.rooms.iter().map(|r| r.name.len()).max().unwrap_or(10);
            for room in &page.rooms {
                out.push_str(&format!(
                    "    {:<width$}  {:<16}  {} x {} in\n",
                    room.name,
                    room.raw_text,
                    room.length_in,
                    room.width_in,
                    width = max_name
                ));
            }
        }

        if !page.other_dimensions.is_empty() {
            out.push_str("  Other dimensions:\n");
            for dim in &page.other_dimensions {
                out.push_str(&format!("    {:<16}  {} in\n", dim.raw, dim.inches));
            }
        }

        if !page.codes.is_empty() {
            let codes: Vec<&str> = page.codes.iter().map(|c| c.as_str()).collect();
            out.push_str(&format!("  Codes: {}\n", codes.join(", ")));
        }

        out.push('\n');
    }

    out
}
