use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{AggregateId, AggregateRoot};
use crate::shared::parse::{required_number, required_text};
use crate::shared::LedgerError;

/// Единица измерения по умолчанию (значение формы добавления материала)
pub const DEFAULT_UNIT: &str = "мл";

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор материала
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaterialId(pub Uuid);

impl MaterialId {
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

impl AggregateId for MaterialId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(MaterialId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

impl std::fmt::Display for MaterialId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Расходный материал салона (краска, шампунь, фольга, перчатки...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub id: MaterialId,
    pub name: String,
    /// Текущий остаток. Может стать отрицательным при списании сверх наличия.
    pub quantity: f64,
    pub unit: String,
    /// Порог, на котором и ниже которого материал считается заканчивающимся
    #[serde(rename = "minQuantity")]
    pub min_quantity: f64,
    pub category: String,
}

impl Material {
    /// Создать новый материал со свежим ID
    pub fn new_for_insert(
        name: String,
        quantity: f64,
        unit: String,
        min_quantity: f64,
        category: String,
    ) -> Self {
        Self::new_with_id(MaterialId::new_v4(), name, quantity, unit, min_quantity, category)
    }

    /// Создать материал с заданным ID (для загрузки снимка и демо-данных)
    pub fn new_with_id(
        id: MaterialId,
        name: String,
        quantity: f64,
        unit: String,
        min_quantity: f64,
        category: String,
    ) -> Self {
        Self {
            id,
            name,
            quantity,
            unit,
            min_quantity,
            category,
        }
    }

    /// Разобрать форму добавления материала
    ///
    /// Проверяется только наличие полей и то, что числа разбираются.
    /// Пустая единица измерения заменяется на [`DEFAULT_UNIT`].
    pub fn from_dto(dto: &MaterialDto) -> Result<Self, LedgerError> {
        let name = required_text("name", &dto.name)?;
        let quantity = required_number("quantity", &dto.quantity)?;
        let min_quantity = required_number("minQuantity", &dto.min_quantity)?;
        let category = required_text("category", &dto.category)?;
        let unit = match dto.unit.trim() {
            "" => DEFAULT_UNIT.to_string(),
            unit => unit.to_string(),
        };

        Ok(Self::new_for_insert(name, quantity, unit, min_quantity, category))
    }

    /// Получить ID как строку
    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }

    /// Остаток на пороге или ниже
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.min_quantity
    }

    /// Заполненность склада в процентах для индикатора: `quantity / (min * 3)`, в пределах 0..=100
    pub fn stock_fill_percent(&self) -> f64 {
        if self.min_quantity == 0.0 {
            return if self.quantity > 0.0 { 100.0 } else { 0.0 };
        }
        (self.quantity / (self.min_quantity * 3.0) * 100.0).clamp(0.0, 100.0)
    }

    /// Списать количество без ограничения снизу
    pub fn consume(&mut self, quantity: f64) {
        self.quantity -= quantity;
    }
}

impl AggregateRoot for Material {
    type Id = MaterialId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn description(&self) -> &str {
        &self.name
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "material"
    }

    fn element_name() -> &'static str {
        "Материал"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO формы добавления материала
///
/// Числа приходят строками, как из полей ввода.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MaterialDto {
    pub name: String,
    pub quantity: String,
    pub unit: String,
    #[serde(rename = "minQuantity")]
    pub min_quantity: String,
    pub category: String,
}

impl MaterialDto {
    pub fn new(name: &str, quantity: &str, unit: &str, min_quantity: &str, category: &str) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
            unit: unit.into(),
            min_quantity: min_quantity.into(),
            category: category.into(),
        }
    }
}
