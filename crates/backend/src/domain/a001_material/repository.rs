use contracts::domain::a001_material::{Material, MaterialId};

use crate::shared::data::LedgerState;

/// Все материалы в порядке добавления
pub fn list_all(state: &LedgerState) -> &[Material] {
    state.materials()
}

pub fn get_by_id(state: &LedgerState, id: MaterialId) -> Option<&Material> {
    state.materials().iter().find(|m| m.id == id)
}

pub fn get_by_id_mut(state: &mut LedgerState, id: MaterialId) -> Option<&mut Material> {
    state.materials_mut().iter_mut().find(|m| m.id == id)
}

/// Добавить материал в конец каталога
pub fn insert(state: &mut LedgerState, aggregate: Material) -> MaterialId {
    let id = aggregate.id;
    state.materials_mut().push(aggregate);
    id
}
