//! Resolução de handles em referências contadas.
//!
//! Contrato para todo handler que recebe um handle:
//! - pseudo-handle do processo/thread atual: sem lookup, uma referência
//!   extra sobre o objeto já conhecido;
//! - qualquer outro valor: lookup na tabela do processo chamador. Se não
//!   resolver para a classe pedida, `INVALID_HANDLE` imediato.
//!
//! O `ObjectRef` devolvido solta a referência sozinho em todo caminho.

use crate::core::host::HostKernel;
use crate::core::object::{Handle, ObjectRef};
use crate::syscall::error::{ResultCode, SvcResult};

/// Resolve `handle` para um processo.
pub fn resolve_process<K: HostKernel>(kernel: &K, handle: Handle) -> SvcResult<ObjectRef<'_, K::Process>> {
    let current = kernel.current_process();

    if handle == Handle::CURRENT_PROCESS {
        return Ok(ObjectRef::acquire(current));
    }

    kernel
        .lookup_process(current, handle)
        .ok_or(ResultCode::INVALID_HANDLE)
}

/// Resolve `handle` para uma thread.
pub fn resolve_thread<K: HostKernel>(kernel: &K, handle: Handle) -> SvcResult<ObjectRef<'_, K::Thread>> {
    if handle == Handle::CURRENT_THREAD {
        return Ok(ObjectRef::acquire(kernel.current_thread()));
    }

    kernel
        .lookup_thread(kernel.current_process(), handle)
        .ok_or(ResultCode::INVALID_HANDLE)
}

/// Resolve `handle` na tabela de `owner` para um objeto de qualquer classe.
///
/// Os pseudo-handles valem relativos a essa tabela: "processo atual" é o
/// próprio `owner`, "thread atual" é a thread em execução.
pub fn resolve_object_in<'k, K: HostKernel>(
    kernel: &'k K,
    owner: &'k K::Process,
    handle: Handle,
) -> SvcResult<ObjectRef<'k, K::Object>> {
    if handle.is_pseudo() {
        let object = if handle == Handle::CURRENT_PROCESS {
            kernel.process_object(owner)
        } else {
            kernel.thread_object(kernel.current_thread())
        };
        return Ok(ObjectRef::acquire(object));
    }

    kernel
        .lookup_object(owner, handle)
        .ok_or(ResultCode::INVALID_HANDLE)
}

/// Resolve `handle` na tabela do processo chamador.
pub fn resolve_object<K: HostKernel>(kernel: &K, handle: Handle) -> SvcResult<ObjectRef<'_, K::Object>> {
    resolve_object_in(kernel, kernel.current_process(), handle)
}
