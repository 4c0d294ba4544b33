use serde::{Deserialize, Serialize};

use crate::domain::a001_material::{Material, MaterialId};
use crate::domain::a002_usage_record::UsageRecord;

/// Number of materials in the top-consumed view
pub const TOP_MATERIALS_LIMIT: usize = 5;

/// Number of records in the recent usage list on the home page
pub const RECENT_USAGE_LIMIT: usize = 5;

/// Material card with its stock indicator (warehouse page and low-stock list)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialStockRow {
    #[serde(rename = "materialId")]
    pub material_id: MaterialId,
    pub name: String,
    pub category: String,
    pub quantity: f64,
    pub unit: String,
    #[serde(rename = "minQuantity")]
    pub min_quantity: f64,
    /// Fill indicator in percent, 0..=100
    #[serde(rename = "fillPercent")]
    pub fill_percent: f64,
    #[serde(rename = "isLow")]
    pub is_low: bool,
    /// Quantity with unit, e.g. "45 мл"
    pub display: String,
}

impl MaterialStockRow {
    pub fn from_material(material: &Material, display: String) -> Self {
        Self {
            material_id: material.id,
            name: material.name.clone(),
            category: material.category.clone(),
            quantity: material.quantity,
            unit: material.unit.clone(),
            min_quantity: material.min_quantity,
            fill_percent: material.stock_fill_percent(),
            is_low: material.is_low_stock(),
            display,
        }
    }
}

/// Number of materials in one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
    /// Share of the whole catalog in percent
    #[serde(rename = "sharePercent")]
    pub share_percent: f64,
}

/// Aggregated consumption of one material
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopMaterialRow {
    #[serde(rename = "materialId")]
    pub material_id: MaterialId,
    #[serde(rename = "materialName")]
    pub material_name: String,
    #[serde(rename = "totalQuantity")]
    pub total_quantity: f64,
    /// Number of usage records
    pub count: usize,
}

/// Home page response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockSummaryResponse {
    /// Ledger version the view was computed from
    pub version: u64,
    /// Today's date in format "YYYY-MM-DD"
    pub today: String,
    #[serde(rename = "totalMaterials")]
    pub total_materials: usize,
    #[serde(rename = "lowStockCount")]
    pub low_stock_count: usize,
    #[serde(rename = "todayUsageCount")]
    pub today_usage_count: usize,
    #[serde(rename = "lowStock")]
    pub low_stock: Vec<MaterialStockRow>,
    #[serde(rename = "recentUsage")]
    pub recent_usage: Vec<UsageRecord>,
}

/// Statistics page response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsResponse {
    pub version: u64,
    #[serde(rename = "totalMaterials")]
    pub total_materials: usize,
    #[serde(rename = "lowStockCount")]
    pub low_stock_count: usize,
    #[serde(rename = "totalUsageRecords")]
    pub total_usage_records: usize,
    #[serde(rename = "categoryCount")]
    pub category_count: usize,
    pub categories: Vec<CategoryCount>,
    #[serde(rename = "topMaterials")]
    pub top_materials: Vec<TopMaterialRow>,
}
