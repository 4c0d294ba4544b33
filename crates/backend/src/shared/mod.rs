pub mod clock;
pub mod config;
pub mod data;
pub mod format;
