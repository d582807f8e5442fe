//! Controle estendido (0x80) e KernelSetState (0x7C).

use crate::core::collab::{InteractiveSession, SessionMode};
use crate::core::host::HostKernel;
use crate::core::object::accessor::resolve_process;
use crate::core::object::Handle;
use crate::core::process::KProcess;
use crate::syscall::abi::TrapFrame;
use crate::syscall::dispatch::Dispatcher;
use crate::syscall::error::{result_code, ResultCode, SvcResult};
use crate::syscall::numbers::{EXT_INFO_TYPE_BASE, SVC_KERNEL_SET_STATE};

use super::info::EXTENSION_VERSION;

/// Opcodes da SVC 0x80.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ControlOp {
    GetExtensionVersion = 0,
    GetKernelVersion = 1,
    FlushAllCaches = 2,
    /// (process handle)
    GetProcessCustomFlags = 3,
    GetSessionMode = 4,
}

impl ControlOp {
    pub const fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            0 => Some(Self::GetExtensionVersion),
            1 => Some(Self::GetKernelVersion),
            2 => Some(Self::FlushAllCaches),
            3 => Some(Self::GetProcessCustomFlags),
            4 => Some(Self::GetSessionMode),
            _ => None,
        }
    }
}

pub fn extended_control<K: HostKernel>(kernel: &K, op: u32, arg0: u32) -> SvcResult<u32> {
    let op = ControlOp::from_raw(op).ok_or(ResultCode::INVALID_ENUM_VALUE)?;

    match op {
        ControlOp::GetExtensionVersion => Ok(EXTENSION_VERSION),
        ControlOp::GetKernelVersion => Ok(kernel.version().raw()),
        ControlOp::FlushAllCaches => {
            kernel.flush_entire_data_cache();
            kernel.invalidate_entire_instruction_cache();
            Ok(0)
        }
        ControlOp::GetProcessCustomFlags => {
            let process = resolve_process(kernel, Handle::from_raw(arg0))?;
            Ok(process.custom_flags().get().bits())
        }
        ControlOp::GetSessionMode => Ok(kernel.session().mode().bits()),
    }
}

/// KernelSetState: liga/desliga bits de modo da sessão interativa.
pub const KERNEL_STATE_SESSION_MODE: u32 = EXT_INFO_TYPE_BASE;

/// r0 = type, r1 = bits, r2 = enable.
pub fn kernel_set_state<K: HostKernel>(dispatcher: &Dispatcher<'_, K>, frame: &mut TrapFrame) {
    let state_type = frame.r0;
    if state_type < EXT_INFO_TYPE_BASE {
        return dispatcher.invoke_official(SVC_KERNEL_SET_STATE, frame);
    }
    let code = result_code(set_extended_state(dispatcher.kernel(), state_type, frame.r1, frame.r2));
    frame.set_result(code);
}

pub fn set_extended_state<K: HostKernel>(kernel: &K, state_type: u32, bits: u32, enable: u32) -> SvcResult<()> {
    match state_type {
        KERNEL_STATE_SESSION_MODE => {
            let bits = SessionMode::from_bits(bits).ok_or(ResultCode::INVALID_ENUM_VALUE)?;
            kernel.session().set_mode(bits, enable != 0);
            Ok(())
        }
        _ => Err(ResultCode::INVALID_ENUM_VALUE),
    }
}
