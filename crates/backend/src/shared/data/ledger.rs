use std::sync::{Arc, Mutex, MutexGuard};

use chrono::NaiveDate;
use contracts::domain::a001_material::{Material, MaterialDto, MaterialId};
use contracts::domain::a002_usage_record::{UsageRecord, UsageRecordDto};
use contracts::domain::common::AggregateRoot;
use contracts::shared::{LedgerResult, LedgerSnapshot};
use once_cell::sync::OnceCell;
use tokio::sync::watch;

use super::fixtures::demo_snapshot;
use super::store::{InMemoryStore, StateStore};
use crate::domain::{a001_material, a002_usage_record};
use crate::shared::clock::{Clock, SystemClock};
use crate::shared::config::LedgerConfig;

static LEDGER: OnceCell<LedgerController> = OnceCell::new();

/// Состояние учёта: каталог материалов и журнал расхода
///
/// Изменяется только операциями добавления материала и учёта расхода;
/// каждое успешное изменение увеличивает версию.
pub struct LedgerState {
    materials: Vec<Material>,
    /// Новые записи первыми
    usage_records: Vec<UsageRecord>,
    version: u64,
    clock: Arc<dyn Clock>,
    allow_negative_stock: bool,
}

impl LedgerState {
    /// Пустой склад
    pub fn new(clock: Arc<dyn Clock>, allow_negative_stock: bool) -> Self {
        Self {
            materials: Vec::new(),
            usage_records: Vec::new(),
            version: 0,
            clock,
            allow_negative_stock,
        }
    }

    /// Состояние из снимка (ID в снимке должны быть уникальны)
    pub fn from_snapshot(
        snapshot: LedgerSnapshot,
        clock: Arc<dyn Clock>,
        allow_negative_stock: bool,
    ) -> anyhow::Result<Self> {
        snapshot.ensure_unique_ids()?;
        let mut state = Self::new(clock, allow_negative_stock);
        state.materials = snapshot.materials;
        state.usage_records = snapshot.usage_records;
        Ok(state)
    }

    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    pub fn usage_records(&self) -> &[UsageRecord] {
        &self.usage_records
    }

    pub(crate) fn materials_mut(&mut self) -> &mut Vec<Material> {
        &mut self.materials
    }

    pub(crate) fn usage_records_mut(&mut self) -> &mut Vec<UsageRecord> {
        &mut self.usage_records
    }

    /// Монотонный счётчик изменений
    pub fn version(&self) -> u64 {
        self.version
    }

    pub(crate) fn bump_version(&mut self) -> u64 {
        self.version += 1;
        self.version
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn allow_negative_stock(&self) -> bool {
        self.allow_negative_stock
    }

    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot::new(self.materials.clone(), self.usage_records.clone())
    }
}

/// Владелец состояния учёта
///
/// Операции выполняются по одной под мьютексом. После успешного изменения
/// состояние сохраняется в хранилище, а новая версия публикуется подписчикам.
pub struct LedgerController {
    state: Mutex<LedgerState>,
    store: Box<dyn StateStore>,
    changes: watch::Sender<u64>,
}

impl LedgerController {
    pub fn new(state: LedgerState, store: Box<dyn StateStore>) -> Self {
        let (changes, _) = watch::channel(state.version());
        Self {
            state: Mutex::new(state),
            store,
            changes,
        }
    }

    /// Загрузить состояние из хранилища
    pub fn open(
        store: Box<dyn StateStore>,
        clock: Arc<dyn Clock>,
        allow_negative_stock: bool,
    ) -> anyhow::Result<Self> {
        let snapshot = store.load_state()?;
        let state = LedgerState::from_snapshot(snapshot, clock, allow_negative_stock)?;
        Ok(Self::new(state, store))
    }

    fn lock(&self) -> MutexGuard<'_, LedgerState> {
        // Сервисы меняют состояние только после всех проверок
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Прочитать состояние
    pub fn read<R>(&self, f: impl FnOnce(&LedgerState) -> R) -> R {
        f(&*self.lock())
    }

    /// Выполнить изменяющую операцию
    ///
    /// При ошибке состояние, версия и подписчики не затрагиваются.
    pub fn mutate<T>(
        &self,
        op: impl FnOnce(&mut LedgerState) -> LedgerResult<T>,
    ) -> LedgerResult<T> {
        let mut state = self.lock();
        let result = op(&mut *state)?;

        if let Err(e) = self.store.save_state(&state.snapshot()) {
            tracing::warn!("Failed to save ledger state: {}", e);
        }
        self.changes.send_replace(state.version());
        Ok(result)
    }

    /// Добавить материал в каталог
    pub fn add_material(&self, dto: MaterialDto) -> LedgerResult<Material> {
        self.mutate(|state| a001_material::service::create(state, dto))
    }

    /// Учесть расход материала
    pub fn record_usage(&self, dto: UsageRecordDto) -> LedgerResult<UsageRecord> {
        self.mutate(|state| a002_usage_record::service::create(state, dto))
    }

    pub fn get_material(&self, id: MaterialId) -> Option<Material> {
        self.read(|state| a001_material::service::get_by_id(state, id))
    }

    pub fn materials(&self) -> Vec<Material> {
        self.read(|state| state.materials().to_vec())
    }

    pub fn usage_records(&self) -> Vec<UsageRecord> {
        self.read(|state| state.usage_records().to_vec())
    }

    pub fn version(&self) -> u64 {
        self.read(LedgerState::version)
    }

    /// Подписка на изменения: получатель видит номер последней версии
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.changes.subscribe()
    }
}

/// Создать глобальный экземпляр учёта по конфигурации
pub fn initialize_ledger(config: &LedgerConfig) -> anyhow::Result<()> {
    let snapshot = if config.seed_demo_data {
        demo_snapshot()
    } else {
        LedgerSnapshot::default()
    };
    let store = InMemoryStore::with_snapshot(&snapshot)?;
    let controller = LedgerController::open(
        Box::new(store),
        Arc::new(SystemClock),
        config.allow_negative_stock,
    )?;

    let (materials, records) =
        controller.read(|s| (s.materials().len(), s.usage_records().len()));
    tracing::info!(
        "Ledger initialized: {}={}, {}={}, allow_negative_stock={}",
        Material::full_name(),
        materials,
        UsageRecord::full_name(),
        records,
        config.allow_negative_stock
    );

    LEDGER
        .set(controller)
        .map_err(|_| anyhow::anyhow!("Failed to set LEDGER"))?;
    Ok(())
}

pub fn get_ledger() -> &'static LedgerController {
    LEDGER.get().expect("Ledger has not been initialized")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::clock::FixedClock;
    use contracts::shared::LedgerError;

    fn controller() -> LedgerController {
        let clock = Arc::new(FixedClock(NaiveDate::from_ymd_opt(2025, 11, 25).unwrap()));
        let store = InMemoryStore::with_snapshot(&demo_snapshot()).unwrap();
        LedgerController::open(Box::new(store), clock, true).unwrap()
    }

    fn blonde_id(controller: &LedgerController) -> String {
        controller.read(|s| s.materials()[0].to_string_id())
    }

    #[test]
    fn test_open_loads_store() {
        let c = controller();
        assert_eq!(c.materials().len(), 8);
        assert_eq!(c.usage_records().len(), 3);
        assert_eq!(c.version(), 0);

        let first = c.materials()[0].clone();
        assert_eq!(c.get_material(first.id), Some(first));
        assert_eq!(c.get_material(MaterialId::new_v4()), None);
    }

    #[test]
    fn test_successful_mutation_notifies_and_saves() {
        let c = controller();
        let mut rx = c.subscribe();
        assert!(!rx.has_changed().unwrap());

        c.add_material(MaterialDto::new("Воск", "10", "г", "20", "Уход"))
            .unwrap();
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), 1);

        let id = blonde_id(&c);
        c.record_usage(UsageRecordDto::new(&id, "5", "Анна", "Окрашивание"))
            .unwrap();
        assert_eq!(*rx.borrow_and_update(), 2);

        let saved = c.store.load_state().unwrap();
        assert_eq!(saved.materials.len(), 9);
        assert_eq!(saved.usage_records.len(), 4);
        assert_eq!(saved.materials[0].quantity, 40.0);
    }

    #[test]
    fn test_failed_mutation_changes_nothing() {
        let c = controller();
        let rx = c.subscribe();
        let before = c.read(LedgerState::snapshot);

        let err = c
            .record_usage(UsageRecordDto::new(&blonde_id(&c), "5", "", "Окрашивание"))
            .unwrap_err();
        assert_eq!(err, LedgerError::required("client"));

        let err = c
            .add_material(MaterialDto::new("Воск", "10", "г", "", "Уход"))
            .unwrap_err();
        assert_eq!(err, LedgerError::required("minQuantity"));

        assert!(!rx.has_changed().unwrap());
        assert_eq!(c.version(), 0);
        assert_eq!(c.read(LedgerState::snapshot), before);
        assert_eq!(c.store.load_state().unwrap(), before);
    }

    #[test]
    fn test_from_snapshot_rejects_duplicate_ids() {
        let mut snapshot = demo_snapshot();
        let first = snapshot.materials[0].clone();
        snapshot.materials.push(first);
        let clock = Arc::new(SystemClock);
        assert!(LedgerState::from_snapshot(snapshot, clock, true).is_err());
    }
}
