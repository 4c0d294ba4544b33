pub mod ledger_error;
pub mod parse;
pub mod snapshot;

pub use ledger_error::{LedgerError, LedgerErrorBody, LedgerResult};
pub use snapshot::LedgerSnapshot;
