//! # Sistema de SVCs da extensão
//!
//! Toda SVC do userspace passa por aqui antes (ou em vez) do handler do
//! kernel hospedeiro.
//!
//! # Módulos
//!
//! - `abi`: Frame de trap, convenção de registradores
//! - `error`: Códigos de resultado (ResultCode)
//! - `numbers`: Ids e sentinelas
//! - `dispatch`: Tabela oficial + resolução de handler
//! - `hooks`: Entrada/retorno/pós-processamento
//! - `exit`: Limpeza de ExitProcess
//! - `ext`: Handlers de extensão

pub mod abi;
pub mod dispatch;
pub mod error;
pub mod exit;
pub mod ext;
pub mod hooks;
pub mod numbers;
pub mod sched;

#[cfg(test)]
mod tests;

// Re-exports principais
pub use dispatch::{Dispatcher, SvcHandler, OFFICIAL_SVCS};
pub use error::{ResultCode, SvcResult};
