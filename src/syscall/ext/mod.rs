//! # Handlers de Extensão
//!
//! Cada handler recebe argumentos já decodificados e devolve `SvcResult`;
//! `invoke` faz a cola com os registradores.
//!
//! | Submódulo | SVCs                                          |
//! |-----------|-----------------------------------------------|
//! | `cache`   | 0x90-0x94                                     |
//! | `control` | 0x80, 0x7C                                    |
//! | `handle`  | 0xB1, 0xB2                                    |
//! | `info`    | 0x29-0x2C, 0x2E                               |
//! | `memory`  | 0x01, 0xA0-0xA3                               |
//! | `misc`    | 0x3C, 0x59, 0x5A, 0x7B                        |
//! | `process` | 0xB3                                          |
//! | `service` | 0xB0                                          |

pub mod cache;
pub mod control;
pub mod handle;
pub mod info;
pub mod memory;
pub mod misc;
pub mod process;
pub mod service;

use crate::core::host::{ControlMemoryRequest, HostKernel};
use crate::core::object::Handle;

use super::abi::TrapFrame;
use super::dispatch::Dispatcher;
use super::error::{ResultCode, SvcResult};

/// SVC atendida pela extensão.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtSvc {
    ControlMemory,
    GetHandleInfo,
    GetSystemInfo,
    GetProcessInfo,
    GetThreadInfo,
    GetCfwInfo,
    Break,
    SetGpuProt,
    SetWifiEnabled,
    Backdoor,
    KernelSetState,
    ExtendedControl,
    ConvertVaToPa,
    FlushDataCacheRange,
    FlushEntireDataCache,
    InvalidateInstructionCacheRange,
    InvalidateEntireInstructionCache,
    MapProcessMemoryEx,
    UnmapProcessMemoryEx,
    ControlMemoryEx,
    ControlMemoryUnsafe,
    ControlService,
    CopyHandle,
    TranslateHandle,
    ControlProcess,
}

/// Executa `svc` sobre o frame: lê argumentos de r0.., grava o código em r0
/// e as saídas em r1.. (só em sucesso).
pub fn invoke<K: HostKernel>(dispatcher: &Dispatcher<'_, K>, svc: ExtSvc, frame: &mut TrapFrame) {
    let kernel = dispatcher.kernel();
    let TrapFrame {
        r0, r1, r2, r3, r4, ..
    } = *frame;

    match svc {
        ExtSvc::ControlMemory => memory::control_memory(dispatcher, frame),

        ExtSvc::GetHandleInfo => info::get_handle_info(dispatcher, frame),
        ExtSvc::GetSystemInfo => info::get_system_info(dispatcher, frame),
        ExtSvc::GetProcessInfo => info::get_process_info(dispatcher, frame),
        ExtSvc::GetThreadInfo => info::get_thread_info(dispatcher, frame),
        ExtSvc::GetCfwInfo => {
            let (version, commit) = info::cfw_info();
            frame.set_result(ResultCode::SUCCESS);
            frame.r1 = version;
            frame.r2 = commit;
        }

        ExtSvc::Break => frame.set_result(misc::break_with_reason(kernel, r0)),
        ExtSvc::SetGpuProt => frame.set_result(misc::set_gpu_prot(kernel, r0 != 0)),
        ExtSvc::SetWifiEnabled => frame.set_result(misc::set_wifi_enabled(kernel, r0 != 0)),
        ExtSvc::Backdoor => match misc::backdoor(kernel, r0, r1) {
            Ok(value) => frame.r0 = value,
            Err(code) => frame.set_result(code),
        },

        ExtSvc::KernelSetState => control::kernel_set_state(dispatcher, frame),
        ExtSvc::ExtendedControl => write_word(frame, control::extended_control(kernel, r0, r1)),

        ExtSvc::ConvertVaToPa => frame.r0 = cache::convert_va_to_pa(kernel, r0, r1 != 0),
        ExtSvc::FlushDataCacheRange => frame.set_result(cache::flush_data_cache_range(kernel, r0, r1)),
        ExtSvc::FlushEntireDataCache => frame.set_result(cache::flush_entire_data_cache(kernel)),
        ExtSvc::InvalidateInstructionCacheRange => {
            frame.set_result(cache::invalidate_instruction_cache_range(kernel, r0, r1))
        }
        ExtSvc::InvalidateEntireInstructionCache => {
            frame.set_result(cache::invalidate_entire_instruction_cache(kernel))
        }

        ExtSvc::MapProcessMemoryEx => frame.set_result(memory::map_process_memory_ex(
            kernel,
            Handle::from_raw(r0),
            r1,
            Handle::from_raw(r2),
            r3,
            r4,
        )),
        ExtSvc::UnmapProcessMemoryEx => {
            frame.set_result(memory::unmap_process_memory_ex(kernel, Handle::from_raw(r0), r1, r2))
        }
        ExtSvc::ControlMemoryEx => {
            let request = ControlMemoryRequest {
                op: r0,
                addr0: r1,
                addr1: r2,
                size: r3,
                perms: r4,
            };
            write_word(frame, memory::control_memory_ex(kernel, &request));
        }
        ExtSvc::ControlMemoryUnsafe => {
            let request = ControlMemoryRequest {
                op: r0,
                addr0: r1,
                addr1: 0,
                size: r2,
                perms: r3,
            };
            write_word(frame, memory::control_memory_unsafe(kernel, &request));
        }

        ExtSvc::ControlService => write_word(frame, service::control_service(kernel, r0, r1, r2)),
        ExtSvc::CopyHandle => write_word(
            frame,
            handle::copy_handle(
                kernel,
                Handle::from_raw(r0),
                Handle::from_raw(r1),
                Handle::from_raw(r2),
            )
            .map(|handle| handle.raw()),
        ),
        ExtSvc::TranslateHandle => {
            write_word(frame, handle::translate_handle(kernel, Handle::from_raw(r0), r1))
        }
        ExtSvc::ControlProcess => write_word(
            frame,
            process::control_process(kernel, Handle::from_raw(r0), r1, r2, r3),
        ),
    }
}

/// Resultado de uma palavra: código em r0, valor em r1.
pub(crate) fn write_word(frame: &mut TrapFrame, result: SvcResult<u32>) {
    match result {
        Ok(value) => {
            frame.set_result(ResultCode::SUCCESS);
            frame.r1 = value;
        }
        Err(code) => frame.set_result(code),
    }
}

/// Resultado de 64 bits: código em r0, r1 = parte baixa, r2 = parte alta.
pub(crate) fn write_u64(frame: &mut TrapFrame, result: SvcResult<u64>) {
    match result {
        Ok(value) => {
            frame.set_result(ResultCode::SUCCESS);
            frame.r1 = value as u32;
            frame.r2 = (value >> 32) as u32;
        }
        Err(code) => frame.set_result(code),
    }
}
