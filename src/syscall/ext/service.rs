//! ControlService (0xB0)

use crate::core::host::HostKernel;
use crate::core::object::accessor::resolve_object;
use crate::core::object::Handle;
use crate::syscall::error::{ResultCode, SvcResult};

/// Tamanho máximo do nome de um serviço.
pub const SERVICE_NAME_LEN: usize = 8;

/// Operações de ControlService.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ServiceOp {
    /// (name ptr) -> handle de sessão cliente no processo atual
    StealClientSession = 0,
    /// (out name ptr, handle) -> nome do serviço da sessão/porta
    GetServiceName = 1,
}

impl ServiceOp {
    pub const fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            0 => Some(Self::StealClientSession),
            1 => Some(Self::GetServiceName),
            _ => None,
        }
    }
}

pub fn control_service<K: HostKernel>(kernel: &K, op: u32, arg0: u32, arg1: u32) -> SvcResult<u32> {
    match ServiceOp::from_raw(op).ok_or(ResultCode::INVALID_ENUM_VALUE)? {
        ServiceOp::StealClientSession => steal_client_session(kernel, arg0).map(|handle| handle.raw()),
        ServiceOp::GetServiceName => {
            get_service_name(kernel, arg0, Handle::from_raw(arg1))?;
            Ok(0)
        }
    }
}

/// Abre no processo atual uma sessão cliente do serviço `name`.
pub fn steal_client_session<K: HostKernel>(kernel: &K, name_ptr: u32) -> SvcResult<Handle> {
    let mut name = [0u8; SERVICE_NAME_LEN];
    if !kernel.copy_from_user(&mut name, name_ptr) {
        return Err(ResultCode::INVALID_POINTER);
    }

    let session = kernel
        .service_client_session(&name)
        .ok_or(ResultCode::NOT_FOUND)?;
    kernel.insert_handle(kernel.current_process(), &session)
}

/// Copia para `name_out` o nome do serviço da sessão/porta `handle`.
pub fn get_service_name<K: HostKernel>(kernel: &K, name_out: u32, handle: Handle) -> SvcResult<()> {
    let object = resolve_object(kernel, handle)?;
    let name = kernel
        .service_name_of(&object)
        .ok_or(ResultCode::INVALID_HANDLE)?;

    if kernel.copy_to_user(name_out, &name) {
        Ok(())
    } else {
        Err(ResultCode::INVALID_POINTER)
    }
}
