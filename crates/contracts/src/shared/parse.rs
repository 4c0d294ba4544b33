use super::LedgerError;

/// Обязательное текстовое поле формы: обрезает пробелы, пустое значение — ошибка
pub fn required_text(field: &'static str, value: &str) -> Result<String, LedgerError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::required(field));
    }
    Ok(trimmed.to_string())
}

/// Обязательное числовое поле формы
///
/// Принимает десятичную запятую ("12,5"). Диапазон не проверяется:
/// ноль и отрицательные значения допустимы.
pub fn required_number(field: &'static str, value: &str) -> Result<f64, LedgerError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::required(field));
    }
    let parsed: f64 = trimmed
        .replace(',', ".")
        .parse()
        .map_err(|_| LedgerError::validation(field, format!("'{}' не является числом", trimmed)))?;
    if !parsed.is_finite() {
        return Err(LedgerError::validation(
            field,
            format!("'{}' не является конечным числом", trimmed),
        ));
    }
    Ok(parsed)
}
