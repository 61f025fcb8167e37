//! Currency formatting for reports and recommendations

/// Format a dollar amount with thousands separators.
///
/// `format_usd(4270.5, 0)` renders `$4,270`; `format_usd(1277.5, 2)`
/// renders `$1,277.50`. Negative amounts carry a leading minus sign.
pub fn format_usd(amount: f64, decimals: usize) -> String {
    let rendered = format!("{:.prec$}", amount, prec = decimals);
    let (integer, fraction) = match rendered.split_once('.') {
        Some((integer, fraction)) => (integer.to_string(), Some(fraction.to_string())),
        None => (rendered, None),
    };
    let (sign, digits) = match integer.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", integer.as_str()),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match fraction {
        Some(fraction) => format!("{sign}${grouped}.{fraction}"),
        None => format!("{sign}${grouped}"),
    }
}
