use axum::{routing::get, Router};

use crate::handlers;
use crate::shared::data::LedgerController;

/// Конфигурация всех роутов приложения
pub fn configure_routes(ledger: &'static LedgerController) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // A001 Material
        // ========================================
        .route(
            "/api/material",
            get(handlers::a001_material::list_all).post(handlers::a001_material::create),
        )
        .route("/api/material/stock", get(handlers::a001_material::stock))
        .route("/api/material/:id", get(handlers::a001_material::get_by_id))
        // ========================================
        // A002 Usage record
        // ========================================
        .route(
            "/api/usage_record",
            get(handlers::a002_usage_record::list_all).post(handlers::a002_usage_record::create),
        )
        // ========================================
        // D400 Stock summary
        // ========================================
        .route("/api/d400/summary", get(handlers::d400_stock_summary::summary))
        .route("/api/d400/statistics", get(handlers::d400_stock_summary::statistics))
        .route("/api/d400/low_stock", get(handlers::d400_stock_summary::low_stock))
        .with_state(ledger)
}
