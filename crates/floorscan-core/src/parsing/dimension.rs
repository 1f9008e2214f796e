use regex::{Captures, Regex};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::sync::LazyLock;

/// One notation the grammar accepts: an anchored pattern plus the
/// conversion from its captures to inches.
struct DimensionForm {
    /// Short identifier used in diagnostics.
    name: &'static str,
    pattern: Regex,
    convert: fn(&Captures) -> Option<f64>,
}

/// The six accepted notations, most specific first. Ordering is load
/// bearing: `6'6"` must be taken by the feet-and-inches form before the
/// bare-feet form can see its `6'` prefix, and `6 1/2"` before the bare
/// inches form can see the `6`.
static FORMS: LazyLock<[DimensionForm; 6]> = LazyLock::new(|| {
    [
        // 8' 2 1/2"
        DimensionForm {
            name: "feet-inches-fraction",
            pattern: Regex::new(r#"^(\d+)'\s*(\d+)\s+(\d+)/(\d+)"?$"#).expect("dimension form"),
            convert: |c| {
                let feet: f64 = c[1].parse().ok()?;
                let whole: f64 = c[2].parse().ok()?;
                let frac = exact_fraction(&c[3], &c[4])?;
                Some(feet * 12.0 + whole + frac)
            },
        },
        // 8' 2"
        DimensionForm {
            name: "feet-inches",
            pattern: Regex::new(r#"^(\d+)'\s+(\d+(?:\.\d+)?)"?$"#).expect("dimension form"),
            convert: |c| {
                let feet: f64 = c[1].parse().ok()?;
                let inches: f64 = c[2].parse().ok()?;
                Some(feet * 12.0 + inches)
            },
        },
        // 6'6"
        DimensionForm {
            name: "feet-inches-compact",
            pattern: Regex::new(r#"^(\d+)'(\d+(?:\.\d+)?)"?$"#).expect("dimension form"),
            convert: |c| {
                let feet: f64 = c[1].parse().ok()?;
                let inches: f64 = c[2].parse().ok()?;
                Some(feet * 12.0 + inches)
            },
        },
        // 20' or 10.5'
        DimensionForm {
            name: "feet",
            pattern: Regex::new(r"^(\d+(?:\.\d+)?)\s*'$").expect("dimension form"),
            convert: |c| {
                let feet: f64 = c[1].parse().ok()?;
                Some(feet * 12.0)
            },
        },
        // 6 1/2"
        DimensionForm {
            name: "inches-fraction",
            pattern: Regex::new(r#"^(\d+)\s+(\d+)/(\d+)"?$"#).expect("dimension form"),
            convert: |c| {
                let whole: f64 = c[1].parse().ok()?;
                let frac = exact_fraction(&c[2], &c[3])?;
                Some(whole + frac)
            },
        },
        // 6" or 6
        DimensionForm {
            name: "inches",
            pattern: Regex::new(r#"^(\d+(?:\.\d+)?)"?$"#).expect("dimension form"),
            convert: |c| c[1].parse().ok(),
        },
    ]
});

/// Evaluate `num/den` as an exact decimal before the single conversion to
/// f64, so the fractional part is never assembled from intermediate floats.
/// A zero denominator is a conversion failure, not a panic.
fn exact_fraction(num: &str, den: &str) -> Option<f64> {
    let num: u64 = num.parse().ok()?;
    let den: u64 = den.parse().ok()?;
    Decimal::from(num)
        .checked_div(Decimal::from(den))?
        .to_f64()
}

/// Convert a single dimension string (e.g. `10'`, `8' 2"`, `6'6"`) into
/// inches.
///
/// Leading/trailing hyphens and spaces are stripped, but never the unit
/// markers `'` and `"` — they decide which notation applies. Returns None
/// for anything the grammar does not accept; parse failures are logged,
/// never raised.
pub fn parse_dimension(raw: &str) -> Option<f64> {
    let cleaned = raw.trim().trim_matches(|c: char| c == '-' || c == ' ');
    if cleaned.is_empty() {
        return None;
    }

    for form in FORMS.iter() {
        if let Some(caps) = form.pattern.captures(cleaned) {
            let value = (form.convert)(&caps);
            if value.is_none() {
                log::warn!(
                    "dimension '{}' matched form '{}' but did not convert",
                    raw,
                    form.name
                );
            }
            // First structural match wins; a failed conversion does not
            // fall through to later forms.
            return value;
        }
    }

    log::debug!("no dimension form matched '{}'", raw);
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feet_alone() {
        assert_eq!(parse_dimension("10'"), Some(120.0));
        assert_eq!(parse_dimension("20'"), Some(240.0));
    }

    #[test]
    fn test_decimal_feet() {
        assert_eq!(parse_dimension("10.5'"), Some(126.0));
    }

    #[test]
    fn test_feet_and_inches() {
        assert_eq!(parse_dimension("8' 2\""), Some(98.0));
    }

    #[test]
    fn test_feet_and_inches_compact() {
        assert_eq!(parse_dimension("6'6\""), Some(78.0));
    }

    #[test]
    fn test_feet_inches_fraction() {
        assert_eq!(parse_dimension("8' 2 1/2\""), Some(98.5));
    }

    #[test]
    fn test_inches_fraction() {
        assert_eq!(parse_dimension("6 1/2\""), Some(6.5));
    }

    #[test]
    fn test_inches_alone() {
        assert_eq!(parse_dimension("6\""), Some(6.0));
        assert_eq!(parse_dimension("6"), Some(6.0));
    }

    #[test]
    fn test_hyphen_and_space_stripping() {
        assert_eq!(parse_dimension(" - 10' -"), Some(120.0));
        assert_eq!(parse_dimension("-8' 2\"-"), Some(98.0));
    }

    #[test]
    fn test_empty_yields_none() {
        assert_eq!(parse_dimension(""), None);
        assert_eq!(parse_dimension("   "), None);
        assert_eq!(parse_dimension("- -"), None);
    }

    #[test]
    fn test_alpha_yields_none() {
        assert_eq!(parse_dimension("abc"), None);
        assert_eq!(parse_dimension("BIG"), None);
    }

    #[test]
    fn test_zero_denominator_yields_none() {
        assert_eq!(parse_dimension("6 1/0\""), None);
        assert_eq!(parse_dimension("8' 2 1/0\""), None);
    }

    #[test]
    fn test_decimal_feet_with_inches_unsupported() {
        // Documented unsupported notation: no form matches it.
        assert_eq!(parse_dimension("10.5' 6\""), None);
    }

    #[test]
    fn test_compact_form_not_swallowed_by_feet_form() {
        // Would be 72.0 if the bare-feet form matched the 6' prefix.
        assert_eq!(parse_dimension("6'6\""), Some(78.0));
    }

    #[test]
    fn test_fraction_evaluated_exactly() {
        assert_eq!(parse_dimension("5 3/8\""), Some(5.375));
        assert_eq!(parse_dimension("12' 0 1/4\""), Some(144.25));
    }
}
