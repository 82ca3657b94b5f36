#![forbid(unsafe_code)]

//! Compact number labels for the statistics band.

/// Render `n` as a compact label: `2.5M`, `180K`, `142`.
///
/// Millions keep one decimal place, thousands none; values below 1000 are
/// printed as-is. Ties round up (`1_250_000` is `1.3M`).
#[must_use]
pub fn format_compact(n: u64) -> String {
    if n >= 1_000_000 {
        let tenths = n / 100_000 + u64::from(n % 100_000 >= 50_000);
        format!("{}.{}M", tenths / 10, tenths % 10)
    } else if n >= 1_000 {
        let thousands = n / 1_000 + u64::from(n % 1_000 >= 500);
        format!("{thousands}K")
    } else {
        n.to_string()
    }
}
