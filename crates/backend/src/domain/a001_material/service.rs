use super::repository;
use crate::shared::data::LedgerState;
use crate::shared::format::format_stock;
use contracts::domain::a001_material::{Material, MaterialDto, MaterialId};
use contracts::domain::common::AggregateRoot;
use contracts::shared::LedgerResult;

/// Добавление нового материала в каталог
///
/// Проверяется только наличие полей и разбор чисел; при ошибке каталог не меняется.
pub fn create(state: &mut LedgerState, dto: MaterialDto) -> LedgerResult<Material> {
    let aggregate = match Material::from_dto(&dto) {
        Ok(aggregate) => aggregate,
        Err(e) => {
            tracing::warn!("{} rejected: {}", Material::element_name(), e);
            return Err(e);
        }
    };

    repository::insert(state, aggregate.clone());
    let version = state.bump_version();

    tracing::info!(
        "{} added: id={}, name='{}', stock={}, min={}, category='{}', version={}",
        Material::element_name(),
        aggregate.id,
        aggregate.name,
        format_stock(aggregate.quantity, &aggregate.unit),
        format_stock(aggregate.min_quantity, &aggregate.unit),
        aggregate.category,
        version
    );
    if aggregate.is_low_stock() {
        tracing::warn!("Material '{}' is added already at low stock", aggregate.name);
    }

    Ok(aggregate)
}

/// Получение материала по ID
pub fn get_by_id(state: &LedgerState, id: MaterialId) -> Option<Material> {
    repository::get_by_id(state, id).cloned()
}

/// Получение каталога в порядке добавления
pub fn list_all(state: &LedgerState) -> Vec<Material> {
    repository::list_all(state).to_vec()
}
