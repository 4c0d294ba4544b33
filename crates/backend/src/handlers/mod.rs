pub mod a001_material;
pub mod a002_usage_record;
pub mod d400_stock_summary;

use axum::{http::StatusCode, Json};
use contracts::shared::{LedgerError, LedgerErrorBody};

/// Ответ с ошибкой учёта: код, сообщение и поле формы
pub fn error_response(err: LedgerError) -> (StatusCode, Json<LedgerErrorBody>) {
    let status = match err {
        LedgerError::Validation { .. } => StatusCode::BAD_REQUEST,
        LedgerError::MaterialNotFound(_) => StatusCode::NOT_FOUND,
        LedgerError::InsufficientStock { .. } => StatusCode::CONFLICT,
    };
    (status, Json(err.to_body()))
}
