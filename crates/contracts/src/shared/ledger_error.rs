use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Результат операции учёта
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Ошибки операций учёта
///
/// Любая ошибка означает, что состояние склада не изменилось.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// Обязательное поле пустое или не разбирается
    #[error("Поле '{field}': {message}")]
    Validation { field: &'static str, message: String },

    /// Материал с указанным ID отсутствует в каталоге
    #[error("Материал не найден: {0}")]
    MaterialNotFound(String),

    /// Списание уводит остаток ниже нуля (только при запрете отрицательных остатков)
    #[error("Недостаточно материала '{material}': в наличии {available}, требуется {requested}")]
    InsufficientStock {
        material: String,
        available: f64,
        requested: f64,
    },
}

impl LedgerError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    pub fn required(field: &'static str) -> Self {
        Self::validation(field, "обязательное поле")
    }

    /// Стабильный код ошибки для слоя представления
    pub fn code(&self) -> &'static str {
        match self {
            LedgerError::Validation { .. } => "VALIDATION_ERROR",
            LedgerError::MaterialNotFound(_) => "NOT_FOUND",
            LedgerError::InsufficientStock { .. } => "INSUFFICIENT_STOCK",
        }
    }

    /// Поле формы, к которому относится ошибка
    pub fn field(&self) -> Option<&'static str> {
        match self {
            LedgerError::Validation { field, .. } => Some(*field),
            LedgerError::MaterialNotFound(_) => Some("materialId"),
            LedgerError::InsufficientStock { .. } => Some("quantity"),
        }
    }

    pub fn to_body(&self) -> LedgerErrorBody {
        LedgerErrorBody {
            code: self.code().to_string(),
            message: self.to_string(),
            field: self.field().map(str::to_string),
        }
    }
}

/// Тело ответа с ошибкой
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerErrorBody {
    pub code: String,
    pub message: String,
    pub field: Option<String>,
}
