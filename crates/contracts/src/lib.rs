//! Общие типы BeautyStock: агрегаты склада, DTO форм и DTO производных представлений.
//!
//! Крейт не содержит состояния и не знает о транспорте; его используют
//! и ядро учёта (`backend`), и любой слой представления.

pub mod dashboards;
pub mod domain;
pub mod shared;
