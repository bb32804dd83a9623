/// Formats a bar value with `,` thousands grouping and `precision` decimals.
///
/// Never emits a negative zero.
#[must_use]
pub fn format_value_label(value: f64, precision: u8) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let formatted = format!("{:.*}", usize::from(precision), value.abs());
    let (integer_part, fraction_part) = match formatted.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (formatted.as_str(), None),
    };

    let is_zero = formatted.chars().all(|ch| matches!(ch, '0' | '.'));
    let mut out = String::with_capacity(formatted.len() + integer_part.len() / 3 + 1);
    if value.is_sign_negative() && !is_zero {
        out.push('-');
    }
    out.push_str(&group_thousands(integer_part));
    if let Some(fraction) = fraction_part {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (len - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
