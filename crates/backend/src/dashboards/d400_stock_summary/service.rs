use contracts::dashboards::d400_stock_summary::{
    CategoryCount, MaterialStockRow, StatisticsResponse, StockSummaryResponse, TopMaterialRow,
    RECENT_USAGE_LIMIT, TOP_MATERIALS_LIMIT,
};
use contracts::domain::a001_material::Material;
use contracts::domain::a002_usage_record::{format_date, UsageRecord};
use chrono::NaiveDate;

use crate::domain::{a001_material, a002_usage_record};
use crate::shared::data::LedgerState;
use crate::shared::format::format_stock;

// Views are recomputed on every call; nothing here is cached.

/// Card for a single material
pub fn stock_row(material: &Material) -> MaterialStockRow {
    MaterialStockRow::from_material(material, format_stock(material.quantity, &material.unit))
}

/// Materials with `quantity <= minQuantity`, in catalog order
pub fn low_stock(materials: &[Material]) -> Vec<MaterialStockRow> {
    materials
        .iter()
        .filter(|m| m.is_low_stock())
        .map(stock_row)
        .collect()
}

/// All materials with their stock indicator, in catalog order
pub fn stock_rows(materials: &[Material]) -> Vec<MaterialStockRow> {
    materials.iter().map(stock_row).collect()
}

/// Number of records made on `today`
pub fn today_usage_count(records: &[UsageRecord], today: NaiveDate) -> usize {
    let today = format_date(today);
    records.iter().filter(|r| r.date == today).count()
}

/// Materials per category, in order of first occurrence
pub fn category_counts(materials: &[Material]) -> Vec<CategoryCount> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for material in materials {
        match counts.iter_mut().find(|(c, _)| *c == material.category) {
            Some((_, count)) => *count += 1,
            None => counts.push((material.category.clone(), 1)),
        }
    }

    let total = materials.len();
    counts
        .into_iter()
        .map(|(category, count)| CategoryCount {
            category,
            count,
            share_percent: count as f64 / total as f64 * 100.0,
        })
        .collect()
}

/// Most consumed materials
///
/// Records are grouped by material in order of first encounter in the log
/// (newest first). The sort is stable, so equal totals keep that order.
pub fn top_materials(records: &[UsageRecord], limit: usize) -> Vec<TopMaterialRow> {
    let mut rows: Vec<TopMaterialRow> = Vec::new();
    for record in records {
        match rows.iter_mut().find(|r| r.material_id == record.material_id) {
            Some(row) => {
                row.total_quantity += record.quantity;
                row.count += 1;
            }
            None => rows.push(TopMaterialRow {
                material_id: record.material_id,
                material_name: record.material_name.clone(),
                total_quantity: record.quantity,
                count: 1,
            }),
        }
    }

    rows.sort_by(|a, b| b.total_quantity.total_cmp(&a.total_quantity));
    rows.truncate(limit);
    rows
}

/// Home page: counters, low-stock list and recent usage
pub fn get_summary(state: &LedgerState) -> StockSummaryResponse {
    let materials = a001_material::repository::list_all(state);
    let records = a002_usage_record::repository::list_all(state);
    let today = state.today();
    let low_stock = low_stock(materials);

    tracing::debug!("d400 summary computed at version {}", state.version());

    StockSummaryResponse {
        version: state.version(),
        today: format_date(today),
        total_materials: materials.len(),
        low_stock_count: low_stock.len(),
        today_usage_count: today_usage_count(records, today),
        low_stock,
        recent_usage: a002_usage_record::service::list_recent(state, RECENT_USAGE_LIMIT),
    }
}

/// Statistics page: category breakdown and top consumed materials
pub fn get_statistics(state: &LedgerState) -> StatisticsResponse {
    let materials = a001_material::repository::list_all(state);
    let records = a002_usage_record::repository::list_all(state);
    let categories = category_counts(materials);

    StatisticsResponse {
        version: state.version(),
        total_materials: materials.len(),
        low_stock_count: materials.iter().filter(|m| m.is_low_stock()).count(),
        total_usage_records: records.len(),
        category_count: categories.len(),
        categories,
        top_materials: top_materials(records, TOP_MATERIALS_LIMIT),
    }
}

/// Low-stock list
pub fn get_low_stock(state: &LedgerState) -> Vec<MaterialStockRow> {
    low_stock(a001_material::repository::list_all(state))
}

/// Warehouse page: every material with its stock indicator
pub fn get_stock(state: &LedgerState) -> Vec<MaterialStockRow> {
    stock_rows(a001_material::repository::list_all(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::clock::FixedClock;
    use crate::shared::data::fixtures::demo_snapshot;
    use contracts::domain::a001_material::MaterialDto;
    use contracts::domain::a002_usage_record::UsageRecordDto;
    use std::sync::Arc;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 25).unwrap()
    }

    fn empty_state() -> LedgerState {
        LedgerState::new(Arc::new(FixedClock(today())), true)
    }

    fn demo_state() -> LedgerState {
        LedgerState::from_snapshot(demo_snapshot(), Arc::new(FixedClock(today())), true).unwrap()
    }

    fn add(state: &mut LedgerState, name: &str, quantity: &str, min: &str, category: &str) -> Material {
        a001_material::service::create(state, MaterialDto::new(name, quantity, "мл", min, category))
            .unwrap()
    }

    fn use_material(state: &mut LedgerState, material: &Material, quantity: &str) {
        let dto = UsageRecordDto::new(&material.to_string_id(), quantity, "Client", "Service");
        a002_usage_record::service::create(state, dto).unwrap();
    }

    fn low_names(state: &LedgerState) -> Vec<String> {
        get_low_stock(state).into_iter().map(|r| r.name).collect()
    }

    #[test]
    fn test_low_stock_matches_predicate() {
        let mut state = empty_state();
        add(&mut state, "Шампунь", "850", "200", "Уход");
        add(&mut state, "Маска", "100", "100", "Уход");
        let dye = add(&mut state, "Краска", "45", "20", "Окрашивание");
        assert_eq!(low_names(&state), vec!["Маска"]);

        use_material(&mut state, &dye, "25");
        assert_eq!(low_names(&state), vec!["Маска", "Краска"]);

        for row in get_stock(&state) {
            assert_eq!(row.is_low, row.quantity <= row.min_quantity);
        }
    }

    #[test]
    fn test_added_low_material_is_immediately_low() {
        let mut state = empty_state();
        a001_material::service::create(&mut state, MaterialDto::new("Wax", "10", "g", "20", "Care"))
            .unwrap();
        let rows = get_low_stock(&state);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Wax");
        assert_eq!(rows[0].display, "10 g");
        assert_eq!(rows[0].fill_percent, 10.0 / 60.0 * 100.0);
    }

    #[test]
    fn test_negative_stock_is_low() {
        let mut state = demo_state();
        let blonde = state.materials()[0].clone();
        assert_eq!(blonde.quantity, 45.0);
        assert_eq!(blonde.min_quantity, 20.0);

        use_material(&mut state, &blonde, "50");

        let row = get_low_stock(&state)
            .into_iter()
            .find(|r| r.material_id == blonde.id)
            .unwrap();
        assert_eq!(row.quantity, -5.0);
        assert_eq!(row.fill_percent, 0.0);
        assert_eq!(row.display, "-5 мл");
    }

    #[test]
    fn test_today_usage_count() {
        let mut state = demo_state();
        // two demo records are dated 2025-11-25
        assert_eq!(get_summary(&state).today_usage_count, 2);

        let shampoo = state.materials()[2].clone();
        use_material(&mut state, &shampoo, "30");
        let inserted_date = state.usage_records()[0].date.clone();
        let expected = state
            .usage_records()
            .iter()
            .filter(|r| r.date == inserted_date)
            .count();
        assert_eq!(get_summary(&state).today_usage_count, expected);
        assert_eq!(expected, 3);
    }

    #[test]
    fn test_summary() {
        let state = demo_state();
        let summary = get_summary(&state);
        assert_eq!(summary.today, "2025-11-25");
        assert_eq!(summary.total_materials, 8);
        assert_eq!(summary.low_stock_count, 0);
        assert_eq!(summary.recent_usage.len(), 3);
        assert_eq!(summary.recent_usage[0].client, "Мария Петрова");
        assert_eq!(summary.version, 0);
    }

    #[test]
    fn test_statistics_counters() {
        let mut state = demo_state();
        let stats = get_statistics(&state);
        assert_eq!(stats.total_materials, 8);
        assert_eq!(stats.low_stock_count, 0);
        assert_eq!(stats.total_usage_records, 3);
        assert_eq!(stats.category_count, 3);

        let blonde = state.materials()[0].clone();
        use_material(&mut state, &blonde, "30");
        let stats = get_statistics(&state);
        assert_eq!(stats.low_stock_count, 1);
        assert_eq!(stats.total_usage_records, 4);
        assert_eq!(stats.version, 1);
    }

    #[test]
    fn test_recent_usage_is_limited() {
        let mut state = demo_state();
        let gloves = state.materials()[6].clone();
        for _ in 0..4 {
            use_material(&mut state, &gloves, "2");
        }
        let summary = get_summary(&state);
        assert_eq!(summary.recent_usage.len(), RECENT_USAGE_LIMIT);
        assert_eq!(summary.recent_usage[0].material_name, "Перчатки одноразовые");
        assert_eq!(summary.version, 4);
    }

    #[test]
    fn test_category_counts_in_first_occurrence_order() {
        let state = demo_state();
        let categories = get_statistics(&state).categories;
        let pairs: Vec<(&str, usize)> = categories
            .iter()
            .map(|c| (c.category.as_str(), c.count))
            .collect();
        assert_eq!(
            pairs,
            vec![("Окрашивание", 4), ("Уход", 3), ("Расходники", 1)]
        );
        assert_eq!(categories[0].share_percent, 50.0);
    }

    #[test]
    fn test_category_counts_empty_catalog() {
        assert!(category_counts(&[]).is_empty());
    }

    #[test]
    fn test_top_materials_sums_per_material() {
        let mut state = empty_state();
        let a = add(&mut state, "A", "1000", "10", "X");
        let b = add(&mut state, "B", "1000", "10", "X");
        use_material(&mut state, &a, "30");
        use_material(&mut state, &b, "10");
        use_material(&mut state, &a, "70");

        let top = get_statistics(&state).top_materials;
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].material_id, a.id);
        assert_eq!(top[0].total_quantity, 100.0);
        assert_eq!(top[0].count, 2);
        assert_eq!(top[1].material_id, b.id);
        assert_eq!(top[1].total_quantity, 10.0);
    }

    #[test]
    fn test_top_materials_limit_and_order() {
        let mut state = empty_state();
        let materials: Vec<Material> = (1..=7)
            .map(|i| add(&mut state, &format!("M{}", i), "1000", "10", "X"))
            .collect();
        for (i, m) in materials.iter().enumerate() {
            use_material(&mut state, m, &((i % 3 + 1) * 10).to_string());
        }

        let top = top_materials(state.usage_records(), TOP_MATERIALS_LIMIT);
        assert_eq!(top.len(), TOP_MATERIALS_LIMIT);
        assert!(top
            .windows(2)
            .all(|w| w[0].total_quantity >= w[1].total_quantity));
    }

    #[test]
    fn test_top_materials_ties_keep_first_encounter() {
        let mut state = empty_state();
        let first = add(&mut state, "First", "100", "10", "X");
        let second = add(&mut state, "Second", "100", "10", "X");
        use_material(&mut state, &first, "5");
        use_material(&mut state, &second, "5");

        // the log is newest first, so "Second" is encountered first
        let top = top_materials(state.usage_records(), TOP_MATERIALS_LIMIT);
        let names: Vec<&str> = top.iter().map(|r| r.material_name.as_str()).collect();
        assert_eq!(names, vec!["Second", "First"]);
    }
}
