//! Memória estendida (0x01, 0xA0-0xA3)
//!
//! Map/Unmap entre processos arbitrários. Depois de mexer na tabela de
//! mapeamento, as caches da máquina inteira são sincronizadas (I-cache
//! invalidada, D-cache flushada): exatamente uma vez, em todo caminho de
//! saída depois do gate de versão, inclusive nos de erro.

use crate::arch::CacheMaintenance;
use crate::core::host::{ControlMemoryRequest, HostKernel};
use crate::core::object::accessor::resolve_process;
use crate::core::object::Handle;
use crate::core::process::KProcess;
use crate::klib::align::{is_page_aligned, pages_of};
use crate::syscall::abi::TrapFrame;
use crate::syscall::dispatch::Dispatcher;
use crate::syscall::error::{ResultCode, SvcResult};
use crate::syscall::numbers::SVC_CONTROL_MEMORY;

/// Guarda que sincroniza as caches no `Drop`.
struct RemapCacheSync<'a, C: CacheMaintenance> {
    cache: &'a C,
}

impl<'a, C: CacheMaintenance> RemapCacheSync<'a, C> {
    fn new(cache: &'a C) -> Self {
        Self { cache }
    }
}

impl<C: CacheMaintenance> Drop for RemapCacheSync<'_, C> {
    fn drop(&mut self) {
        self.cache.sync_after_remap();
    }
}

/// ControlMemory oficial; em sucesso marca o layout do processo atual.
pub fn control_memory<K: HostKernel>(dispatcher: &Dispatcher<'_, K>, frame: &mut TrapFrame) {
    dispatcher.invoke_official(SVC_CONTROL_MEMORY, frame);

    if frame.result().is_success() {
        dispatcher
            .kernel()
            .current_process()
            .custom_flags()
            .mark_layout_changed();
    }
}

/// Tamanho até o qual o unmap legado equivale ao estendido.
pub const LEGACY_UNMAP_MAX_SIZE: u32 = 0x0400_0000;

/// UnmapProcessMemoryEx.
///
/// Em revisões antigas do hospedeiro delega ao UnmapProcessMemory oficial,
/// sem a sincronização de cache. Esse caminho só é equivalente para
/// `size <= LEGACY_UNMAP_MAX_SIZE` (64 MiB).
///
/// Caso contrário: valida alinhamento, resolve o processo, faz o unmap por
/// páginas e devolve o código do primitivo sem alteração.
pub fn unmap_process_memory_ex<K: HostKernel>(
    kernel: &K,
    process: Handle,
    addr: u32,
    size: u32,
) -> ResultCode {
    if !kernel.version().supports_extended_memory_ops() {
        crate::ktrace!("(Memory) Unmap legado, addr=", addr);
        if size > LEGACY_UNMAP_MAX_SIZE {
            crate::kwarn!("(Memory) Unmap legado acima de 64 MiB, size=", size);
        }
        return kernel.legacy_unmap_process_memory(process, addr, size);
    }

    // Declarado primeiro: o Drop roda depois do release do processo.
    let _sync = RemapCacheSync::new(kernel);
    unmap_region(kernel, process, addr, size).unwrap_or_else(|code| code)
}

fn unmap_region<K: HostKernel>(kernel: &K, handle: Handle, addr: u32, size: u32) -> SvcResult<ResultCode> {
    check_region(addr, size)?;

    let target = resolve_process(kernel, handle)?;
    let result = kernel.unmap_pages(&target, addr, pages_of(size));

    if result.is_success() {
        mark_if_current(kernel, &target);
    }
    Ok(result)
}

/// MapProcessMemoryEx: mapeia `size` bytes de `src` em `dst`.
///
/// Sem equivalente legado para dois processos arbitrários: revisões antigas
/// recebem `NOT_IMPLEMENTED`.
pub fn map_process_memory_ex<K: HostKernel>(
    kernel: &K,
    dst: Handle,
    dst_addr: u32,
    src: Handle,
    src_addr: u32,
    size: u32,
) -> ResultCode {
    if !kernel.version().supports_extended_memory_ops() {
        return ResultCode::NOT_IMPLEMENTED;
    }

    let _sync = RemapCacheSync::new(kernel);
    map_region(kernel, dst, dst_addr, src, src_addr, size).unwrap_or_else(|code| code)
}

fn map_region<K: HostKernel>(
    kernel: &K,
    dst: Handle,
    dst_addr: u32,
    src: Handle,
    src_addr: u32,
    size: u32,
) -> SvcResult<ResultCode> {
    check_region(dst_addr, size)?;
    check_region(src_addr, size)?;

    let dst = resolve_process(kernel, dst)?;
    let src = resolve_process(kernel, src)?;
    let result = kernel.map_pages(&dst, dst_addr, &src, src_addr, pages_of(size));

    if result.is_success() {
        mark_if_current(kernel, &dst);
    }
    Ok(result)
}

/// ControlMemory estendido sobre o processo atual. Devolve o endereço.
pub fn control_memory_ex<K: HostKernel>(kernel: &K, request: &ControlMemoryRequest) -> SvcResult<u32> {
    let process = kernel.current_process();
    let addr = kernel.control_memory(process, request)?;
    process.custom_flags().mark_layout_changed();
    Ok(addr)
}

/// ControlMemory sem as checagens de região do hospedeiro.
pub fn control_memory_unsafe<K: HostKernel>(kernel: &K, request: &ControlMemoryRequest) -> SvcResult<u32> {
    let process = kernel.current_process();
    let addr = kernel.control_memory_unsafe(process, request)?;
    process.custom_flags().mark_layout_changed();
    Ok(addr)
}

/// Região alinhada a página e sem overflow.
fn check_region(addr: u32, size: u32) -> SvcResult<()> {
    if !is_page_aligned(addr) {
        return Err(ResultCode::MISALIGNED_ADDRESS);
    }
    if !is_page_aligned(size) {
        return Err(ResultCode::MISALIGNED_SIZE);
    }
    if addr.checked_add(size).is_none() {
        return Err(ResultCode::OUT_OF_RANGE);
    }
    Ok(())
}

/// O evento de layout só existe para o processo que está rodando.
fn mark_if_current<K: HostKernel>(kernel: &K, target: &K::Process) {
    if target.pid() == kernel.current_process().pid() {
        target.custom_flags().mark_layout_changed();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_region() {
        assert_eq!(check_region(0x1400_0000, 0x1000), Ok(()));
        assert_eq!(check_region(0x1400_0800, 0x1000), Err(ResultCode::MISALIGNED_ADDRESS));
        assert_eq!(check_region(0x1400_0000, 0x800), Err(ResultCode::MISALIGNED_SIZE));
        assert_eq!(check_region(0xFFFF_F000, 0x2000), Err(ResultCode::OUT_OF_RANGE));
    }
}
