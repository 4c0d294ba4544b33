use contracts::domain::a001_material::Material;
use contracts::domain::a002_usage_record::{UsageRecord, UsageRecordId};
use contracts::shared::LedgerSnapshot;

fn material(name: &str, quantity: f64, unit: &str, min_quantity: f64, category: &str) -> Material {
    Material::new_for_insert(
        name.to_string(),
        quantity,
        unit.to_string(),
        min_quantity,
        category.to_string(),
    )
}

fn history(material: &Material, quantity: f64, client: &str, service: &str, date: &str) -> UsageRecord {
    UsageRecord {
        id: UsageRecordId::new_v4(),
        material_id: material.id,
        material_name: material.name.clone(),
        quantity,
        client: client.to_string(),
        service: service.to_string(),
        date: date.to_string(),
    }
}

/// Демонстрационный склад салона
///
/// Записи истории не списаны с остатков: остатки уже указаны после них.
pub fn demo_snapshot() -> LedgerSnapshot {
    let blonde = material("Краска для волос (Блонд)", 45.0, "мл", 20.0, "Окрашивание");
    let chestnut = material("Краска для волос (Каштан)", 60.0, "мл", 20.0, "Окрашивание");
    let shampoo = material("Шампунь профессиональный", 850.0, "мл", 200.0, "Уход");

    let usage_records = vec![
        history(&blonde, 50.0, "Мария Петрова", "Окрашивание", "2025-11-25"),
        history(&shampoo, 30.0, "Анна Смирнова", "Стрижка + укладка", "2025-11-25"),
        history(&chestnut, 60.0, "Елена Иванова", "Окрашивание", "2025-11-24"),
    ];

    let materials = vec![
        blonde,
        chestnut,
        shampoo,
        material("Кондиционер", 520.0, "мл", 200.0, "Уход"),
        material("Маска для волос", 180.0, "мл", 100.0, "Уход"),
        material("Фольга для мелирования", 250.0, "листов", 50.0, "Окрашивание"),
        material("Перчатки одноразовые", 180.0, "шт", 50.0, "Расходники"),
        material("Окислитель 3%", 320.0, "мл", 100.0, "Окрашивание"),
    ];

    LedgerSnapshot::new(materials, usage_records)
}
