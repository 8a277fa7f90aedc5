// Format a percentage with one fractional digit
pub fn format_percentage(value: f64) -> String {
    // Handle negative zero case
    let formatted_value = if value == 0.0 { 0.0 } else { value };
    format!("{:.1}", formatted_value)
}

// Format the status line fields: tokens|raw%|usable%|overhead
pub fn format_metrics_line(tokens: u64, raw_pct: f64, usable_pct: f64, overhead: f64) -> String {
    format!(
        "{}|{}|{}|{}",
        tokens,
        format_percentage(raw_pct),
        format_percentage(usable_pct),
        format_percentage(overhead)
    )
}
