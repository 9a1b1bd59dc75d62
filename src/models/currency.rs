//! KRW display formatting.

/// Formats a KRW amount with thousands separators and the `원` suffix.
///
/// # Example
///
/// ```
/// use wage_engine::models::format_won;
///
/// assert_eq!(format_won(1_800_568), "1,800,568원");
/// assert_eq!(format_won(0), "0원");
/// ```
pub fn format_won(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped.push('원');
    grouped
}
