//! Display helpers for the parcel information panel.

/// Title-cases free text from the assessor records.
///
/// Words are split on whitespace, `-` and `/`; separators are preserved as-is.
/// Empty input yields an empty string.
pub fn title_case(s: &str) -> String {
    let lower = s.to_lowercase();
    let mut out = String::with_capacity(lower.len());
    let mut at_word_start = true;
    for ch in lower.chars() {
        if ch.is_whitespace() || ch == '-' || ch == '/' {
            out.push(ch);
            at_word_start = true;
        } else if at_word_start {
            out.extend(ch.to_uppercase());
            at_word_start = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Formats an area with thousands separators and at most two fraction digits.
///
/// Trailing zeros in the fraction are dropped: `1234.5` -> `"1,234.5"`.
pub fn format_area(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let cents = (value.abs() * 100.0).round() as u128;
    let whole = cents / 100;
    let frac = cents % 100;

    let mut out = String::new();
    if value < 0.0 && cents != 0 {
        out.push('-');
    }
    out.push_str(&group_thousands(whole));
    if frac != 0 {
        let digits = format!("{frac:02}");
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
    out
}

fn group_thousands(n: u128) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{format_area, title_case};

    #[test]
    fn title_case_keeps_separators() {
        assert_eq!(title_case("123 MAIN ST, DALLAS 75001"), "123 Main St, Dallas 75001");
        assert_eq!(title_case("single-family/duplex"), "Single-Family/Duplex");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn area_formatting() {
        assert_eq!(format_area(0.0), "0");
        assert_eq!(format_area(300.0), "300");
        assert_eq!(format_area(1234.5), "1,234.5");
        assert_eq!(format_area(1234567.891), "1,234,567.89");
        assert_eq!(format_area(999.999), "1,000");
        assert_eq!(format_area(12.05), "12.05");
    }
}
