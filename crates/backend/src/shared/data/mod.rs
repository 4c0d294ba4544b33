pub mod fixtures;
pub mod ledger;
pub mod store;

pub use ledger::{get_ledger, initialize_ledger, LedgerController, LedgerState};
