pub mod a001_material;
pub mod a002_usage_record;
pub mod common;
