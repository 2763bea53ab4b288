/// Display-formatting helpers — counts and guarded percentages.
///
/// All internal counts are `u64`. Floating point is only used at the
/// ratio boundary, and every ratio here guards a zero denominator: an
/// empty clean set yields `0.0` / `"0"` rather than NaN or infinity.

/// Share of `part` in `whole` as a percentage (0.0–100.0).
///
/// Returns `0.0` when `whole == 0`.
pub fn percentage(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}

/// Percentage label with one decimal place, or `"0"` for a zero denominator.
pub fn format_percent(part: u64, whole: u64) -> String {
    if whole == 0 {
        return "0".to_owned();
    }
    format!("{:.1}", percentage(part, whole))
}

/// Row and title counts with `,` between each group of three digits.
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.char_indices() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
