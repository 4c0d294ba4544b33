pub mod aggregate;

pub use aggregate::{format_date, ParsedUsage, UsageRecord, UsageRecordDto, UsageRecordId};
