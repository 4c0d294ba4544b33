use axum::{extract::State, http::StatusCode, Json};
use contracts::domain::a002_usage_record::{UsageRecord, UsageRecordDto};
use contracts::shared::LedgerErrorBody;

use super::error_response;
use crate::domain::a002_usage_record;
use crate::shared::data::LedgerController;

/// GET /api/usage_record
pub async fn list_all(State(ledger): State<&'static LedgerController>) -> Json<Vec<UsageRecord>> {
    Json(ledger.read(a002_usage_record::service::list_all))
}

/// POST /api/usage_record
pub async fn create(
    State(ledger): State<&'static LedgerController>,
    Json(dto): Json<UsageRecordDto>,
) -> Result<(StatusCode, Json<UsageRecord>), (StatusCode, Json<LedgerErrorBody>)> {
    ledger
        .record_usage(dto)
        .map(|r| (StatusCode::CREATED, Json(r)))
        .map_err(error_response)
}
