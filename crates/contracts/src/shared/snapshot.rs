use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::a001_material::Material;
use crate::domain::a002_usage_record::UsageRecord;

/// Снимок состояния учёта: каталог и журнал расхода
///
/// Значение, которым ядро обменивается с хранилищем состояния.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub materials: Vec<Material>,
    /// Новые записи первыми
    #[serde(rename = "usageRecords")]
    pub usage_records: Vec<UsageRecord>,
}

impl LedgerSnapshot {
    pub fn new(materials: Vec<Material>, usage_records: Vec<UsageRecord>) -> Self {
        Self {
            materials,
            usage_records,
        }
    }

    /// Проверить уникальность ID материалов и записей
    pub fn ensure_unique_ids(&self) -> anyhow::Result<()> {
        let mut material_ids = HashSet::new();
        for m in &self.materials {
            if !material_ids.insert(m.id) {
                anyhow::bail!("Duplicate material id in snapshot: {}", m.id);
            }
        }
        let mut record_ids = HashSet::new();
        for r in &self.usage_records {
            if !record_ids.insert(r.id) {
                anyhow::bail!("Duplicate usage record id in snapshot: {}", r.id.0);
            }
        }
        Ok(())
    }
}
