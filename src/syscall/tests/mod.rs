//! Testes do sistema de SVCs
//!
//! Rodam no host contra um kernel de mentira (`mock`), que conta
//! referências e registra em ordem cada efeito observável (handlers
//! oficiais, eventos de debug, operações de cache...).
//!
//! # Como Executar os Testes
//! ```bash
//! cargo test --lib syscall::tests
//! cargo test --lib syscall::tests::memory
//! ```
//!
//! # Estrutura dos Testes
//!
//! - `dispatch.rs` - Tabela oficial e resolução de handler
//! - `hooks.rs` - Hooks de entrada/retorno e pós-processamento
//! - `memory.rs` - Map/Unmap estendidos, ControlMemory, caches
//! - `handles.rs` - CopyHandle, TranslateHandle, SVCs de info
//! - `process.rs` - ControlProcess e limpeza de ExitProcess
//! - `control.rs` - Controle estendido, KernelSetState, ControlService
//!
//! # Convenções
//!
//! - Prefixo `test_` para testes de um handler
//! - Prefixo `integration_` para o caminho completo de `handle_trap`
//! - `#[should_panic]` para os caminhos fatais

#![cfg(test)]

pub mod control;
pub mod handles;

use crate::syscall::abi::TrapFrame;
use crate::syscall::dispatch::Dispatcher;

use mock::{boot_table, MockKernel};

/// Roda o caminho completo de uma SVC e devolve o frame de saída.
pub fn trap(kernel: &MockKernel, mut frame: TrapFrame) -> TrapFrame {
    let dispatcher = Dispatcher::new(kernel, boot_table());
    dispatcher.handle_trap(&mut frame);
    frame
}

/// Frame de SVC curta com argumentos.
pub fn short(svc_id: u8, args: &[u32]) -> TrapFrame {
    TrapFrame::with_short_id(svc_id).with_args(args)
}

/// Frame de SVC estendida com argumentos.
pub fn extended(svc_id: u32, args: &[u32]) -> TrapFrame {
    TrapFrame::with_extended_id(svc_id).with_args(args)
}
