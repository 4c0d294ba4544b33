use axum::{extract::State, Json};
use contracts::dashboards::d400_stock_summary::{
    MaterialStockRow, StatisticsResponse, StockSummaryResponse,
};

use crate::dashboards::d400_stock_summary::service;
use crate::shared::data::LedgerController;

/// GET /api/d400/summary
pub async fn summary(State(ledger): State<&'static LedgerController>) -> Json<StockSummaryResponse> {
    Json(ledger.read(service::get_summary))
}

/// GET /api/d400/statistics
pub async fn statistics(State(ledger): State<&'static LedgerController>) -> Json<StatisticsResponse> {
    Json(ledger.read(service::get_statistics))
}

/// GET /api/d400/low_stock
pub async fn low_stock(State(ledger): State<&'static LedgerController>) -> Json<Vec<MaterialStockRow>> {
    Json(ledger.read(service::get_low_stock))
}
