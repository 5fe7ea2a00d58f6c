//! Formatting helpers shared by log messages and reports.

/// Format an amount as Thai baht with thousands separators, e.g. `฿ 100,000`.
pub fn format_currency(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if value < 0 { "-" } else { "" };
    format!("฿ {}{}", sign, grouped)
}

/// Format an accumulated risk value the way the dashboard shows it.
pub fn format_risk(risk: f64) -> String {
    format!("{:.1}", risk)
}
