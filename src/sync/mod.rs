//! # Synchronization Primitives
//!
//! A extensão roda em todos os núcleos ao mesmo tempo e quase nunca trava:
//!
//! ```text
//! spin::Once     → Tabela oficial (escrita uma vez no boot, leitura livre)
//! RecursiveLock  → Seção crítica do hospedeiro (lista global de threads)
//! Atômicos       → Custom flags / scheduling mask (dono semântico)
//! ```
//!
//! ## Regras
//!
//! - Nenhum lock no caminho rápido dos hooks.
//! - Nunca chamar colaboradores externos segurando o `RecursiveLock`.

pub mod recursive;

pub use recursive::{RecursiveLock, RecursiveLockGuard};
