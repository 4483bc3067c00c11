/// Размер ответа для строки лога запросов
///
/// Up to 1023 bytes the exact count is shown, larger sizes use binary units
/// with two decimals.
///
/// # Примеры
/// ```text
/// format_size(42)        == "42 B"
/// format_size(2048)      == "2.00 KB"
/// format_size(5_452_595) == "5.20 MB"
/// ```
pub fn format_size(n: usize) -> String {
    const UNITS: [&str; 3] = ["KB", "MB", "GB"];

    if n < 1024 {
        return format!("{} B", n);
    }

    let mut value = n as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.2} {}", value, UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(42), "42 B");
        assert_eq!(format_size(1023), "1023 B");
        assert_eq!(format_size(1024), "1.00 KB");
        assert_eq!(format_size(2048), "2.00 KB");
        assert_eq!(format_size(1536), "1.50 KB");
        assert_eq!(format_size(5_452_595), "5.20 MB");
        assert_eq!(format_size(3 * 1024 * 1024 * 1024), "3.00 GB");
    }
}
