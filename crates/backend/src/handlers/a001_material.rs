use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use contracts::dashboards::d400_stock_summary::MaterialStockRow;
use contracts::domain::a001_material::{Material, MaterialDto, MaterialId};
use contracts::domain::common::AggregateId;
use contracts::shared::{LedgerError, LedgerErrorBody};

use super::error_response;
use crate::dashboards::d400_stock_summary;
use crate::domain::a001_material;
use crate::shared::data::LedgerController;

/// GET /api/material
pub async fn list_all(State(ledger): State<&'static LedgerController>) -> Json<Vec<Material>> {
    Json(ledger.read(a001_material::service::list_all))
}

/// GET /api/material/:id
pub async fn get_by_id(
    State(ledger): State<&'static LedgerController>,
    Path(id): Path<String>,
) -> Result<Json<Material>, (StatusCode, Json<LedgerErrorBody>)> {
    let material_id = MaterialId::from_string(&id)
        .map_err(|e| error_response(LedgerError::validation("id", e)))?;
    ledger
        .get_material(material_id)
        .map(Json)
        .ok_or_else(|| error_response(LedgerError::MaterialNotFound(id)))
}

/// POST /api/material
pub async fn create(
    State(ledger): State<&'static LedgerController>,
    Json(dto): Json<MaterialDto>,
) -> Result<(StatusCode, Json<Material>), (StatusCode, Json<LedgerErrorBody>)> {
    ledger
        .add_material(dto)
        .map(|m| (StatusCode::CREATED, Json(m)))
        .map_err(error_response)
}

/// GET /api/material/stock
pub async fn stock(State(ledger): State<&'static LedgerController>) -> Json<Vec<MaterialStockRow>> {
    Json(ledger.read(d400_stock_summary::service::get_stock))
}
