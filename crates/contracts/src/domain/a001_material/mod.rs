pub mod aggregate;

pub use aggregate::{Material, MaterialDto, MaterialId, DEFAULT_UNIT};
