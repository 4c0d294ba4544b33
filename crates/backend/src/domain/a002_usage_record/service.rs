use super::repository;
use crate::domain::a001_material::repository as material_repository;
use crate::shared::data::LedgerState;
use crate::shared::format::format_stock;
use contracts::domain::a002_usage_record::{UsageRecord, UsageRecordDto};
use contracts::domain::common::AggregateId;
use contracts::shared::{LedgerError, LedgerResult};

/// Учёт расхода материала
///
/// Запись добавляется в начало журнала, остаток материала уменьшается
/// на списанное количество. Остаток не ограничивается нулём, если
/// отрицательные остатки разрешены. При ошибке ничего не меняется.
pub fn create(state: &mut LedgerState, dto: UsageRecordDto) -> LedgerResult<UsageRecord> {
    match try_create(state, dto) {
        Ok(record) => Ok(record),
        Err(e) => {
            tracing::warn!("Usage record rejected: {}", e);
            Err(e)
        }
    }
}

fn try_create(state: &mut LedgerState, dto: UsageRecordDto) -> LedgerResult<UsageRecord> {
    let usage = dto.parse()?;
    let today = state.today();
    let allow_negative_stock = state.allow_negative_stock();

    let material = material_repository::get_by_id_mut(state, usage.material_id)
        .ok_or_else(|| LedgerError::MaterialNotFound(usage.material_id.as_string()))?;

    if !allow_negative_stock && material.quantity - usage.quantity < 0.0 {
        return Err(LedgerError::InsufficientStock {
            material: material.name.clone(),
            available: material.quantity,
            requested: usage.quantity,
        });
    }

    let record =
        UsageRecord::new_for_insert(material, usage.quantity, usage.client, usage.service, today);
    material.consume(usage.quantity);
    let remaining = format_stock(material.quantity, &material.unit);
    let went_negative = material.quantity < 0.0;
    let is_low = material.is_low_stock();

    repository::insert(state, record.clone());
    let version = state.bump_version();

    tracing::info!(
        "Usage recorded: material='{}', quantity={}, client='{}', service='{}', remaining={}, version={}",
        record.material_name,
        record.quantity,
        record.client,
        record.service,
        remaining,
        version
    );
    if went_negative {
        tracing::warn!(
            "Material '{}' is over-consumed: stock is {}",
            record.material_name,
            remaining
        );
    } else if is_low {
        tracing::warn!("Material '{}' is low on stock: {}", record.material_name, remaining);
    }

    Ok(record)
}

/// Журнал расхода, новые записи первыми
pub fn list_all(state: &LedgerState) -> Vec<UsageRecord> {
    repository::list_all(state).to_vec()
}

/// Последние записи журнала
pub fn list_recent(state: &LedgerState, limit: usize) -> Vec<UsageRecord> {
    repository::list_recent(state, limit).to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_material;
    use crate::shared::clock::FixedClock;
    use chrono::NaiveDate;
    use contracts::domain::a001_material::{Material, MaterialDto};
    use std::sync::Arc;

    fn state(allow_negative_stock: bool) -> LedgerState {
        let clock = Arc::new(FixedClock(NaiveDate::from_ymd_opt(2025, 11, 26).unwrap()));
        LedgerState::new(clock, allow_negative_stock)
    }

    fn add(state: &mut LedgerState, name: &str, quantity: &str, min: &str) -> Material {
        a001_material::service::create(state, MaterialDto::new(name, quantity, "мл", min, "Окрашивание"))
            .unwrap()
    }

    fn usage(material: &Material, quantity: &str) -> UsageRecordDto {
        UsageRecordDto::new(&material.to_string_id(), quantity, "Client", "Service")
    }

    fn quantity_of(state: &LedgerState, material: &Material) -> f64 {
        a001_material::service::get_by_id(state, material.id)
            .unwrap()
            .quantity
    }

    #[test]
    fn test_create_decrements_and_prepends() {
        let mut state = state(true);
        let dye = add(&mut state, "Краска для волос (Блонд)", "45", "20");

        let first = create(&mut state, usage(&dye, "10")).unwrap();
        let second = create(&mut state, usage(&dye, "2,5")).unwrap();

        assert_eq!(quantity_of(&state, &dye), 32.5);
        let records = list_all(&state);
        assert_eq!(records, vec![second.clone(), first]);
        assert_eq!(second.material_name, "Краска для волос (Блонд)");
        assert_eq!(second.date, "2025-11-26");
        assert_eq!(list_recent(&state, 1), vec![second]);
    }

    #[test]
    fn test_over_consumption_goes_negative() {
        let mut state = state(true);
        let dye = add(&mut state, "Краска для волос (Блонд)", "45", "20");

        create(&mut state, usage(&dye, "50")).unwrap();

        let after = a001_material::service::get_by_id(&state, dye.id).unwrap();
        assert_eq!(after.quantity, -5.0);
        assert!(after.is_low_stock());
    }

    #[test]
    fn test_over_consumption_rejected_when_hardened() {
        let mut state = state(false);
        let dye = add(&mut state, "Краска для волос (Блонд)", "45", "20");
        let version = state.version();

        let err = create(&mut state, usage(&dye, "50")).unwrap_err();
        assert_eq!(
            err,
            LedgerError::InsufficientStock {
                material: "Краска для волос (Блонд)".into(),
                available: 45.0,
                requested: 50.0,
            }
        );
        assert_eq!(quantity_of(&state, &dye), 45.0);
        assert!(list_all(&state).is_empty());
        assert_eq!(state.version(), version);

        create(&mut state, usage(&dye, "45")).unwrap();
        assert_eq!(quantity_of(&state, &dye), 0.0);
    }

    #[test]
    fn test_unknown_material_is_rejected() {
        let mut state = state(true);
        let dye = add(&mut state, "Краска", "45", "20");
        let missing = Material::new_for_insert("Нет".into(), 1.0, "мл".into(), 1.0, "Уход".into());

        let err = create(&mut state, usage(&missing, "5")).unwrap_err();
        assert_eq!(err, LedgerError::MaterialNotFound(missing.to_string_id()));
        assert_eq!(quantity_of(&state, &dye), 45.0);
        assert!(list_all(&state).is_empty());
    }

    #[test]
    fn test_missing_fields_are_rejected() {
        let mut state = state(true);
        let dye = add(&mut state, "Краска", "45", "20");
        let id = dye.to_string_id();

        for dto in [
            UsageRecordDto::new(&id, "", "Client", "Service"),
            UsageRecordDto::new(&id, "5", "", "Service"),
            UsageRecordDto::new(&id, "5", "Client", " "),
            UsageRecordDto::new("", "5", "Client", "Service"),
        ] {
            assert!(create(&mut state, dto).is_err());
        }
        assert_eq!(quantity_of(&state, &dye), 45.0);
        assert!(list_all(&state).is_empty());
    }
}
