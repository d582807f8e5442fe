//! Manutenção de cache e tradução de endereço (0x90-0x94).

use crate::arch::CacheMaintenance;
use crate::core::host::HostKernel;
use crate::syscall::error::ResultCode;

/// VA do processo atual para PA. Devolve o endereço cru (0 = não mapeado).
pub fn convert_va_to_pa<K: HostKernel>(kernel: &K, va: u32, write_check: bool) -> u32 {
    kernel
        .va_to_pa(kernel.current_process(), va, write_check)
        .unwrap_or(0)
}

pub fn flush_data_cache_range<C: CacheMaintenance>(cache: &C, addr: u32, len: u32) -> ResultCode {
    if addr.checked_add(len).is_none() {
        return ResultCode::OUT_OF_RANGE;
    }
    cache.flush_data_cache_range(addr, len);
    ResultCode::SUCCESS
}

pub fn flush_entire_data_cache<C: CacheMaintenance>(cache: &C) -> ResultCode {
    cache.flush_entire_data_cache();
    ResultCode::SUCCESS
}

pub fn invalidate_instruction_cache_range<C: CacheMaintenance>(
    cache: &C,
    addr: u32,
    len: u32,
) -> ResultCode {
    if addr.checked_add(len).is_none() {
        return ResultCode::OUT_OF_RANGE;
    }
    cache.invalidate_instruction_cache_range(addr, len);
    ResultCode::SUCCESS
}

pub fn invalidate_entire_instruction_cache<C: CacheMaintenance>(cache: &C) -> ResultCode {
    cache.invalidate_entire_instruction_cache();
    ResultCode::SUCCESS
}
