//! Extensões das SVCs de informação (0x29-0x2C, 0x2E)
//!
//! Types abaixo de `EXT_INFO_TYPE_BASE` vão intactos para o handler oficial.
//! Saídas de 64 bits: r1 = parte baixa, r2 = parte alta.

use crate::core::host::{HostKernel, KernelVersion};
use crate::core::object::accessor::{resolve_object, resolve_process, resolve_thread};
use crate::core::object::{Handle, KAutoObject};
use crate::core::process::KProcess;
use crate::core::thread::KThread;
use crate::syscall::abi::TrapFrame;
use crate::syscall::dispatch::Dispatcher;
use crate::syscall::error::{ResultCode, SvcResult};
use crate::syscall::numbers::*;

use super::write_u64;

// =============================================================================
// VERSÃO DA EXTENSÃO
// =============================================================================

/// Versão da extensão, empacotada como a do kernel (`major<<24|minor<<16|rev<<8`).
pub const EXTENSION_VERSION: u32 = KernelVersion::new(
    parse_decimal(env!("CARGO_PKG_VERSION_MAJOR")),
    parse_decimal(env!("CARGO_PKG_VERSION_MINOR")),
    parse_decimal(env!("CARGO_PKG_VERSION_PATCH")),
)
.raw();

/// Hash do commit (8 dígitos hex de `FORGE_KEXT_COMMIT` no build), 0 se ausente.
pub const COMMIT_HASH: u32 = parse_hex(option_env!("FORGE_KEXT_COMMIT"));

const fn parse_decimal(digits: &str) -> u8 {
    let bytes = digits.as_bytes();
    let mut value: u8 = 0;
    let mut i = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        value = value.wrapping_mul(10).wrapping_add(bytes[i] - b'0');
        i += 1;
    }
    value
}

const fn parse_hex(digits: Option<&str>) -> u32 {
    let bytes = match digits {
        Some(digits) => digits.as_bytes(),
        None => return 0,
    };

    let mut value: u32 = 0;
    let mut i = 0;
    while i < bytes.len() && i < 8 {
        let nibble = match bytes[i] {
            b'0'..=b'9' => bytes[i] - b'0',
            b'a'..=b'f' => bytes[i] - b'a' + 10,
            b'A'..=b'F' => bytes[i] - b'A' + 10,
            _ => break,
        };
        value = (value << 4) | nibble as u32;
        i += 1;
    }
    value
}

// =============================================================================
// TYPES ESTENDIDOS
// =============================================================================

/// GetSystemInfo: type da extensão (param escolhe o campo).
pub const SYSTEM_INFO_EXTENSION: u32 = EXT_INFO_TYPE_BASE;
/// param de `SYSTEM_INFO_EXTENSION`
pub const SYSTEM_PARAM_VERSION: u32 = 0;
pub const SYSTEM_PARAM_COMMIT_HASH: u32 = 1;
pub const SYSTEM_PARAM_KERNEL_VERSION: u32 = 2;

pub const PROCESS_INFO_NAME: u32 = EXT_INFO_TYPE_BASE;
pub const PROCESS_INFO_TITLE_ID: u32 = EXT_INFO_TYPE_BASE + 1;
pub const PROCESS_INFO_CUSTOM_FLAGS: u32 = EXT_INFO_TYPE_BASE + 2;

pub const THREAD_INFO_TLS_ADDRESS: u32 = EXT_INFO_TYPE_BASE;

pub const HANDLE_INFO_KERNEL_ADDRESS: u32 = EXT_INFO_TYPE_BASE;
pub const HANDLE_INFO_CLASS_NAME_LEN: u32 = EXT_INFO_TYPE_BASE + 1;

// =============================================================================
// COLA COM O FRAME (r0 = handle/type, r1 = type/param)
// =============================================================================

pub fn get_handle_info<K: HostKernel>(dispatcher: &Dispatcher<'_, K>, frame: &mut TrapFrame) {
    let info_type = frame.r1;
    if info_type < EXT_INFO_TYPE_BASE {
        return dispatcher.invoke_official(SVC_GET_HANDLE_INFO, frame);
    }
    let result = handle_info(dispatcher.kernel(), Handle::from_raw(frame.r0), info_type);
    write_u64(frame, result);
}

pub fn get_system_info<K: HostKernel>(dispatcher: &Dispatcher<'_, K>, frame: &mut TrapFrame) {
    let info_type = frame.r0;
    if info_type < EXT_INFO_TYPE_BASE {
        return dispatcher.invoke_official(SVC_GET_SYSTEM_INFO, frame);
    }
    let result = system_info(dispatcher.kernel(), info_type, frame.r1);
    write_u64(frame, result);
}

pub fn get_process_info<K: HostKernel>(dispatcher: &Dispatcher<'_, K>, frame: &mut TrapFrame) {
    let info_type = frame.r1;
    if info_type < EXT_INFO_TYPE_BASE {
        return dispatcher.invoke_official(SVC_GET_PROCESS_INFO, frame);
    }
    let result = process_info(dispatcher.kernel(), Handle::from_raw(frame.r0), info_type);
    write_u64(frame, result);
}

pub fn get_thread_info<K: HostKernel>(dispatcher: &Dispatcher<'_, K>, frame: &mut TrapFrame) {
    let info_type = frame.r1;
    if info_type < EXT_INFO_TYPE_BASE {
        return dispatcher.invoke_official(SVC_GET_THREAD_INFO, frame);
    }
    let result = thread_info(dispatcher.kernel(), Handle::from_raw(frame.r0), info_type);
    write_u64(frame, result);
}

// =============================================================================
// HANDLERS
// =============================================================================

pub fn handle_info<K: HostKernel>(kernel: &K, handle: Handle, info_type: u32) -> SvcResult<u64> {
    let object = resolve_object(kernel, handle)?;
    match info_type {
        HANDLE_INFO_KERNEL_ADDRESS => Ok(object.kernel_address() as u64),
        HANDLE_INFO_CLASS_NAME_LEN => Ok(object.class_name().len() as u64),
        _ => Err(ResultCode::INVALID_ENUM_VALUE),
    }
}

pub fn system_info<K: HostKernel>(kernel: &K, info_type: u32, param: u32) -> SvcResult<u64> {
    if info_type != SYSTEM_INFO_EXTENSION {
        return Err(ResultCode::INVALID_ENUM_VALUE);
    }
    match param {
        SYSTEM_PARAM_VERSION => Ok(EXTENSION_VERSION as u64),
        SYSTEM_PARAM_COMMIT_HASH => Ok(COMMIT_HASH as u64),
        SYSTEM_PARAM_KERNEL_VERSION => Ok(kernel.version().raw() as u64),
        _ => Err(ResultCode::INVALID_ENUM_VALUE),
    }
}

pub fn process_info<K: HostKernel>(kernel: &K, handle: Handle, info_type: u32) -> SvcResult<u64> {
    let process = resolve_process(kernel, handle)?;
    match info_type {
        PROCESS_INFO_NAME => Ok(u64::from_le_bytes(process.name())),
        PROCESS_INFO_TITLE_ID => Ok(process.title_id()),
        PROCESS_INFO_CUSTOM_FLAGS => Ok(process.custom_flags().get().bits() as u64),
        _ => Err(ResultCode::INVALID_ENUM_VALUE),
    }
}

pub fn thread_info<K: HostKernel>(kernel: &K, handle: Handle, info_type: u32) -> SvcResult<u64> {
    let thread = resolve_thread(kernel, handle)?;
    match info_type {
        THREAD_INFO_TLS_ADDRESS => Ok(thread.tls_address() as u64),
        _ => Err(ResultCode::INVALID_ENUM_VALUE),
    }
}

/// GetCfwInfo (obsoleta): (versão, commit).
pub fn cfw_info() -> (u32, u32) {
    (EXTENSION_VERSION, COMMIT_HASH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constants() {
        assert_eq!(EXTENSION_VERSION, 0x0001_0000);
        assert_eq!(parse_decimal("37"), 37);
        assert_eq!(parse_hex(Some("deadBEEF42")), 0xDEAD_BEEF);
        assert_eq!(parse_hex(Some("12g4")), 0x12);
        assert_eq!(parse_hex(None), 0);
    }
}
