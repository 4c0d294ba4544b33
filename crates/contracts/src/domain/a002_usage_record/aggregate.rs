use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::a001_material::{Material, MaterialId};
use crate::domain::common::{AggregateId, AggregateRoot};
use crate::shared::parse::{required_number, required_text};
use crate::shared::LedgerError;

/// Формат даты записи расхода (ISO, без времени)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор записи расхода
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UsageRecordId(pub Uuid);

impl UsageRecordId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for UsageRecordId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(UsageRecordId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Запись расхода материала на клиента/услугу. Неизменяема после создания.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageRecord {
    pub id: UsageRecordId,
    #[serde(rename = "materialId")]
    pub material_id: MaterialId,
    /// Название материала на момент записи
    #[serde(rename = "materialName")]
    pub material_name: String,
    pub quantity: f64,
    pub client: String,
    pub service: String,
    /// Дата в формате YYYY-MM-DD
    pub date: String,
}

impl UsageRecord {
    /// Создать запись расхода для материала на указанную дату
    pub fn new_for_insert(
        material: &Material,
        quantity: f64,
        client: String,
        service: String,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: UsageRecordId::new_v4(),
            material_id: material.id,
            material_name: material.name.clone(),
            quantity,
            client,
            service,
            date: format_date(date),
        }
    }

    /// Получить ID как строку
    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }

    /// Запись сделана в указанный день (точное сравнение строк)
    pub fn is_on(&self, date: NaiveDate) -> bool {
        self.date == format_date(date)
    }
}

/// Дата в формате записи расхода
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

impl AggregateRoot for UsageRecord {
    type Id = UsageRecordId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn description(&self) -> &str {
        &self.material_name
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "usage_record"
    }

    fn element_name() -> &'static str {
        "Расход материала"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO формы учёта расхода
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UsageRecordDto {
    #[serde(rename = "materialId")]
    pub material_id: String,
    pub quantity: String,
    pub client: String,
    pub service: String,
}

/// Разобранная форма учёта расхода
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedUsage {
    pub material_id: MaterialId,
    pub quantity: f64,
    pub client: String,
    pub service: String,
}

impl UsageRecordDto {
    pub fn new(material_id: &str, quantity: &str, client: &str, service: &str) -> Self {
        Self {
            material_id: material_id.into(),
            quantity: quantity.into(),
            client: client.into(),
            service: service.into(),
        }
    }

    /// Проверить наличие полей и разобрать количество
    ///
    /// ID, который не является UUID, не может ссылаться на материал
    /// и возвращается как [`LedgerError::MaterialNotFound`].
    pub fn parse(&self) -> Result<ParsedUsage, LedgerError> {
        let raw_id = required_text("materialId", &self.material_id)?;
        let quantity = required_number("quantity", &self.quantity)?;
        let client = required_text("client", &self.client)?;
        let service = required_text("service", &self.service)?;
        let material_id =
            MaterialId::from_string(&raw_id).map_err(|_| LedgerError::MaterialNotFound(raw_id))?;

        Ok(ParsedUsage {
            material_id,
            quantity,
            client,
            service,
        })
    }
}
