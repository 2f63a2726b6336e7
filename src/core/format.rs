//! Compact number formatting for follow counts.

/// Formats a count for display: values of 1000 and above are shown in
/// thousands with one decimal (a trailing `.0` is dropped), smaller values
/// as plain integers. Halves round up.
///
/// ```
/// use mangarank::core::format::format_count;
/// assert_eq!(format_count(999), "999");
/// assert_eq!(format_count(1000), "1K");
/// assert_eq!(format_count(1250), "1.3K");
/// ```
pub fn format_count(value: u64) -> String {
    if value < 1000 {
        return value.to_string();
    }
    // Count in tenths of a thousand, rounded half up.
    let tenths = value.saturating_add(50) / 100;
    match tenths % 10 {
        0 => format!("{}K", tenths / 10),
        digit => format!("{}.{}K", tenths / 10, digit),
    }
}

/// Formats an optional bayesian score to two decimals, `"0.00"` when absent.
pub fn format_score(score: Option<f64>) -> String {
    format!("{:.2}", score.unwrap_or(0.0))
}
