//! Operações de handle entre processos (0xB1, 0xB2).

use crate::core::host::HostKernel;
use crate::core::object::accessor::{resolve_object, resolve_object_in, resolve_process};
use crate::core::object::{Handle, KAutoObject};
use crate::syscall::error::{ResultCode, SvcResult};

/// Copia `handle` da tabela de `src` para a tabela de `dst`.
///
/// `handle` é resolvido na tabela de `src`: o pseudo-handle de processo
/// aponta para o próprio `src`. As três referências transitórias (dois
/// processos + objeto) são soltas em todo caminho; o hospedeiro conta a
/// referência do handle novo.
pub fn copy_handle<K: HostKernel>(kernel: &K, dst: Handle, handle: Handle, src: Handle) -> SvcResult<Handle> {
    let dst = resolve_process(kernel, dst)?;
    let src = resolve_process(kernel, src)?;
    let object = resolve_object_in(kernel, src.get(), handle)?;

    kernel.insert_handle(&dst, &object)
}

/// Maior nome de classe copiado para o userspace, sem o NUL.
pub const CLASS_NAME_MAX: usize = 31;

/// Endereço de kernel do objeto apontado por `handle`.
///
/// Com `class_name_out != 0`, copia também o nome da classe (terminado em
/// NUL, truncado em `CLASS_NAME_MAX`) para o userspace, numa cópia só.
pub fn translate_handle<K: HostKernel>(kernel: &K, handle: Handle, class_name_out: u32) -> SvcResult<u32> {
    let object = resolve_object(kernel, handle)?;

    if class_name_out != 0 {
        let name = object.class_name().as_bytes();
        let len = name.len().min(CLASS_NAME_MAX);

        let mut buf = [0u8; CLASS_NAME_MAX + 1];
        buf[..len].copy_from_slice(&name[..len]);

        if !kernel.copy_to_user(class_name_out, &buf[..=len]) {
            return Err(ResultCode::INVALID_POINTER);
        }
    }

    Ok(object.kernel_address())
}
