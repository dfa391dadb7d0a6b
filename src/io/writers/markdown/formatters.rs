//! Pure formatting helpers for report prose and statistics cells.

/// Placeholder for a statistic that could not be retrieved.
pub const NOT_AVAILABLE: &str = "N/A";

/// Group digits in threes with commas, en-US style: `12345` -> `12,345`.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Statistics cell: grouped number, or [`NOT_AVAILABLE`].
pub fn format_stat(value: Option<u64>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), format_thousands)
}

/// `"MIT License"` -> `"MIT"`. Only the literal trailing suffix is removed.
pub fn strip_license_suffix(name: &str) -> &str {
    name.strip_suffix(" License").unwrap_or(name)
}

/// English list grammar used by the missing-implementation call-outs.
///
/// - one item: `A`
/// - two or three items: joined with `" and "`, so three gives `A and B and C`
/// - four or more: `A, B, C, and D`
pub fn join_list<S: AsRef<str>>(items: &[S]) -> String {
    let items: Vec<&str> = items.iter().map(AsRef::as_ref).collect();
    match items.len() {
        0 => String::new(),
        1 => items[0].to_string(),
        // NOTE: three items skip the serial comma used for four or more.
        2 | 3 => items.join(" and "),
        n => {
            let (head, last) = items.split_at(n - 1);
            format!("{}, and {}", head.join(", "), last[0])
        }
    }
}
