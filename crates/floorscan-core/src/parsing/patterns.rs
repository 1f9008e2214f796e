use regex::Regex;
use std::sync::LazyLock;

/// One dimension token, as a non-capturing fragment so it can nest inside
/// the composite patterns without shifting their capture groups. Accepts
/// the feet-led notations (`10'`, `8' 2"`, `8' 2 1/2"`, `6'6"`) and the
/// inch-led ones (`6 1/2"`, `6"`); a bare number without a unit marker is
/// not located, even though the converter would accept it.
const DIM_TOKEN: &str = r#"(?:\d+'(?:(?:\s*\d*(?:\s+\d+/\d+)?)?\s*"?)?|\d+(?:\s+\d+/\d+)?\s*")"#;

/// Locates a single dimension token anywhere in a block's text. Scanned
/// repeatedly: a block may carry more than one token.
pub static DIMENSION_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("({DIM_TOKEN})")).expect("dimension token pattern"));

/// Locates a complete room block: a name line followed by a
/// `<dimension> x <dimension>` line. The name capture is non-greedy and
/// bound to the first line break; `(?m)` lets the match start at any line
/// of a multi-line block, but always at a line start.
pub static ROOM_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?m)^(.*?)\n\s*({DIM_TOKEN})\s*[xX]\s*({DIM_TOKEN})"
    ))
    .expect("room block pattern")
});

/// Locates equipment/fixture codes: 1-2 uppercase letters, 2-3 digits,
/// optional trailing letters (`DB24`), plus the literal `OTS`, whole-word.
pub static CODE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z]{1,2}\d{2,3}[A-Z]*\b|\bOTS\b").expect("code pattern"));
