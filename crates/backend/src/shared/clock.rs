use chrono::{NaiveDate, Utc};

/// Источник текущей даты для учёта
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Системные часы: текущая дата по UTC
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Фиксированная дата (тесты, воспроизведение)
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
