/// Unit labels for successive powers of 1024.
const UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

/// Format a byte count as a human-readable string (e.g. `"7.3 GB"`).
///
/// Promotion stops before dividing once the value drops below 1024, so
/// exact powers land on the larger unit (`1024 → "1.0 KB"`). Values that
/// would exceed the largest unit stay clamped at PB.
pub fn format_bytes(bytes: u64) -> String {
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    format!("{size:.1} {}", UNITS[unit])
}
