//! Traits do Hardware Abstraction Layer (HAL).
//! Interfaces públicas que a extensão usa para falar com o hardware.

pub mod cache;

// Re-exportar para facilitar uso: `use crate::arch::traits::CacheMaintenance;`
pub use cache::CacheMaintenance;
