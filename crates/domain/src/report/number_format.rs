/// `1234567` -> `"1,234,567"`.
pub fn group_thousands(value: usize) -> String {
    group_digits(&value.to_string())
}

/// Round to zero decimal places (exact halves go to even), then group:
/// `12345.6` -> `"12,346"`, `2.5` -> `"2"`.
pub fn group_thousands_f64(value: f64) -> String {
    let rounded = format!("{value:.0}");
    match rounded.strip_prefix('-') {
        Some(digits) if digits.bytes().all(|b| b.is_ascii_digit()) => format!("-{}", group_digits(digits)),
        Some(_) => rounded,
        None if rounded.bytes().all(|b| b.is_ascii_digit()) => group_digits(&rounded),
        None => rounded, // inf / NaN
    }
}

fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
