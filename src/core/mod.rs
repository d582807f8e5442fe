//! Core Module
//!
//! Lógica central da extensão, independente de arquitetura: objetos do
//! kernel e seus guardas, processo e thread, a seam com o kernel hospedeiro,
//! colaboradores externos, logging e diagnóstico.

pub mod collab;
pub mod debug;
pub mod host;
pub mod logging;
pub mod object;
pub mod process;
pub mod thread;
