/// Форматирует число с разделителями тысяч (точками)
///
/// # Примеры
/// ```
/// use backend::shared::format::format_number;
/// assert_eq!(format_number(1234567), "1.234.567");
/// assert_eq!(format_number(42), "42");
/// assert_eq!(format_number(0), "0");
/// ```
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Форматирует количество материала: до двух знаков после запятой, без хвостовых нулей
///
/// # Примеры
/// ```
/// use backend::shared::format::format_quantity;
/// assert_eq!(format_quantity(45.0), "45");
/// assert_eq!(format_quantity(12.5), "12,5");
/// assert_eq!(format_quantity(-5.0), "-5");
/// ```
pub fn format_quantity(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    let text = format!("{:.2}", rounded);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    let text = if text == "-0" { "0" } else { text };
    text.replace('.', ",")
}

/// Количество с единицей измерения, например "45 мл"
pub fn format_stock(value: f64, unit: &str) -> String {
    format!("{} {}", format_quantity(value), unit)
}
