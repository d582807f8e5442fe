//! Break, GPU, Wi-Fi e Backdoor.

use crate::core::host::HostKernel;
use crate::syscall::error::{ResultCode, SvcResult};

/// Break sem debugger anexado.
pub fn break_with_reason<K: HostKernel>(kernel: &K, reason: u32) -> ResultCode {
    crate::kwarn!("(Break) Sem debugger, reason=", reason);
    kernel.raise_break(reason)
}

pub fn set_gpu_prot<K: HostKernel>(kernel: &K, enabled: bool) -> ResultCode {
    kernel.set_gpu_protection(enabled);
    ResultCode::SUCCESS
}

pub fn set_wifi_enabled<K: HostKernel>(kernel: &K, enabled: bool) -> ResultCode {
    kernel.set_wifi_enabled(enabled);
    ResultCode::SUCCESS
}

/// Executa `entry(arg)` em modo kernel. O retorno do callback vai cru para r0.
pub fn backdoor<K: HostKernel>(kernel: &K, entry: u32, arg: u32) -> SvcResult<u32> {
    if entry == 0 {
        return Err(ResultCode::INVALID_POINTER);
    }
    crate::kdebug!("(Backdoor) entry=", entry);
    Ok(kernel.run_kernel_callback(entry, arg))
}
