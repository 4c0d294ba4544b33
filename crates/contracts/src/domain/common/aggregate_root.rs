use super::AggregateId;

/// Трейт для корня агрегата
///
/// Определяет идентичность записи и статические имена агрегата,
/// которые используются в логах и ответах API.
pub trait AggregateRoot {
    /// Тип идентификатора агрегата
    type Id: AggregateId;

    /// Получить ID записи
    fn id(&self) -> Self::Id;

    /// Получить отображаемое название записи
    fn description(&self) -> &str;

    // ============================================================================
    // Метаданные класса агрегата (статические данные)
    // ============================================================================

    /// Индекс агрегата в системе (например, "a001")
    fn aggregate_index() -> &'static str;

    /// Имя коллекции (например, "material")
    fn collection_name() -> &'static str;

    /// Имя элемента для UI (единственное число, например, "Материал")
    fn element_name() -> &'static str;

    /// Полное имя агрегата для системы (например, "a001_material")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }
}
