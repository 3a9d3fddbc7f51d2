// Formatting helpers for the countdown display

/// Zero-pad a non-negative value to at least two digits: `5 -> "05"`,
/// `12 -> "12"`. Wider values pass through unchanged.
pub fn pad2(n: i64) -> String {
    format!("{n:02}")
}

/// Group digits in threes for the totals panels: `1234567 -> "1,234,567"`.
pub fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if n < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
