use contracts::domain::a002_usage_record::{UsageRecord, UsageRecordId};

use crate::shared::data::LedgerState;

/// Журнал расхода, новые записи первыми
pub fn list_all(state: &LedgerState) -> &[UsageRecord] {
    state.usage_records()
}

/// Последние `limit` записей
pub fn list_recent(state: &LedgerState, limit: usize) -> &[UsageRecord] {
    let records = state.usage_records();
    &records[..records.len().min(limit)]
}

/// Добавить запись в начало журнала
pub fn insert(state: &mut LedgerState, record: UsageRecord) -> UsageRecordId {
    let id = record.id;
    state.usage_records_mut().insert(0, record);
    id
}
