//! Number formatting for display

/// Format with comma thousands separators, e.g. `342,000,000,000,000`
pub fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Convert a Rar amount into a display currency at a caller-supplied rate.
/// A non-finite or negative rate displays as zero.
pub fn to_display_currency(rar: u64, rate: f64) -> f64 {
    if !rate.is_finite() || rate < 0.0 {
        return 0.0;
    }
    rar as f64 * rate
}
