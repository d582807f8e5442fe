//! # Hardware Abstraction Layer (HAL)
//!
//! A extensão não sabe em qual núcleo nem em qual kernel hospedeiro está
//! rodando. Tudo que toca hardware (manutenção de cache, TLB) passa pelas
//! traits de `traits/`, implementadas pelo hospedeiro.
//!
//! ## Regras
//! - Nenhuma instrução privilegiada fora deste módulo.
//! - Dispatch estático (`impl Trait`/genéricos), nunca `dyn` no caminho de SVC.

pub mod traits;

pub use traits::CacheMaintenance;
