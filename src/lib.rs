//! Forge Kernel Extension.
//!
//! Camada privilegiada que fica entre o kernel hospedeiro (fechado) e o
//! código de usuário: intercepta toda SVC, decide entre o handler oficial e
//! um handler de extensão, e mantém as invariantes de refcount e de
//! coerência de cache dos objetos que toca.
//!
//! Fluxo por SVC:
//!
//! ```text
//! trap -> signal_svc_entry -> resolve -> handler -> signal_svc_return -> postprocess_svc
//! ```

#![cfg_attr(not(test), no_std)]

// --- Módulos de Baixo Nível (Hardware) ---
pub mod arch; // Traits de cache (HAL)

// --- Módulos Centrais ---
pub mod core; // Objetos, processo, thread, seam com o kernel hospedeiro, logging
pub mod klib; // Alinhamento, lista intrusiva
pub mod sync; // Lock recursivo da seção crítica

// --- Interface com Userspace ---
pub mod syscall; // ABI, números, dispatch, hooks, handlers de extensão

pub use crate::core::host::HostKernel;
pub use crate::syscall::dispatch::{Dispatcher, SvcHandler};
pub use crate::syscall::error::{ResultCode, SvcResult};
