use std::sync::Mutex;

use contracts::shared::LedgerSnapshot;
use thiserror::Error;

/// Ошибки хранилища состояния
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Snapshot encoding error: {0}")]
    Encoding(#[from] serde_json::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Контракт загрузки/сохранения состояния учёта
///
/// Ядро не знает, где лежит состояние. Долговременного хранения
/// нет: реализации держат снимок в памяти процесса.
pub trait StateStore: Send + Sync {
    /// Загрузить последнее сохранённое состояние
    fn load_state(&self) -> Result<LedgerSnapshot, StoreError>;

    /// Сохранить состояние
    fn save_state(&self, snapshot: &LedgerSnapshot) -> Result<(), StoreError>;
}

/// Хранилище в памяти: снимок хранится как сырой JSON
#[derive(Debug, Default)]
pub struct InMemoryStore {
    raw_json: Mutex<Option<String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Хранилище с начальным снимком
    pub fn with_snapshot(snapshot: &LedgerSnapshot) -> Result<Self, StoreError> {
        let store = Self::new();
        store.save_state(snapshot)?;
        Ok(store)
    }

    fn slot(&self) -> Result<std::sync::MutexGuard<'_, Option<String>>, StoreError> {
        self.raw_json
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }
}

impl StateStore for InMemoryStore {
    fn load_state(&self) -> Result<LedgerSnapshot, StoreError> {
        match self.slot()?.as_deref() {
            Some(raw) => Ok(serde_json::from_str(raw)?),
            None => Ok(LedgerSnapshot::default()),
        }
    }

    fn save_state(&self, snapshot: &LedgerSnapshot) -> Result<(), StoreError> {
        let raw = serde_json::to_string(snapshot)?;
        *self.slot()? = Some(raw);
        tracing::debug!(
            "Saved ledger snapshot: materials={}, usage_records={}",
            snapshot.materials.len(),
            snapshot.usage_records.len()
        );
        Ok(())
    }
}
