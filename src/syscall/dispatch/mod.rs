//! # SVC Dispatcher
//!
//! Resolve o id da SVC do frame para UM handler: oficial (da tabela
//! capturada no boot), de extensão, ou indefinido (fatal).
//!
//! A ordem dentro de `handle_trap` é fixa:
//!
//! ```text
//! signal_svc_entry -> resolve -> handler -> signal_svc_return -> postprocess_svc
//! ```

pub mod table;

use crate::core::debug::oops;
use crate::core::host::HostKernel;
use crate::core::process::KProcess;

use super::abi::TrapFrame;
use super::ext::{self, ExtSvc};
use super::numbers::*;
use super::{exit, hooks};

pub use table::{InstallError, OfficialTable, SvcEntry, OFFICIAL_SVCS};

/// Handler escolhido para uma SVC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SvcHandler {
    /// Handler original do hospedeiro.
    Official(SvcEntry),
    /// Handler da extensão.
    Extension(ExtSvc),
    /// Sem handler. O chamador trata como fatal.
    Undefined,
}

impl SvcHandler {
    pub fn is_undefined(&self) -> bool {
        matches!(self, SvcHandler::Undefined)
    }
}

/// Dispatcher ligado a um kernel hospedeiro e à tabela oficial.
pub struct Dispatcher<'k, K: HostKernel> {
    kernel: &'k K,
    table: &'k OfficialTable,
}

impl<'k, K: HostKernel> Dispatcher<'k, K> {
    pub const fn new(kernel: &'k K, table: &'k OfficialTable) -> Self {
        Self { kernel, table }
    }

    #[inline]
    pub fn kernel(&self) -> &'k K {
        self.kernel
    }

    /// Resolve o handler da SVC no frame.
    ///
    /// Efeitos colaterais: ExitProcess (0x03) roda a limpeza de saída aqui,
    /// antes de entregar o handler oficial (que nunca retorna).
    pub fn resolve(&self, frame: &TrapFrame) -> SvcHandler {
        self.resolve_id(frame.decode_svc_id())
    }

    /// Resolve um id já decodificado.
    pub fn resolve_id(&self, svc_id: u32) -> SvcHandler {
        let handler = match svc_id {
            SVC_CONTROL_MEMORY => SvcHandler::Extension(ExtSvc::ControlMemory),
            SVC_EXIT_PROCESS => {
                exit::on_exit_process(self.kernel);
                self.official(SVC_EXIT_PROCESS)
            }
            SVC_GET_HANDLE_INFO => SvcHandler::Extension(ExtSvc::GetHandleInfo),
            SVC_GET_SYSTEM_INFO => SvcHandler::Extension(ExtSvc::GetSystemInfo),
            SVC_GET_PROCESS_INFO => SvcHandler::Extension(ExtSvc::GetProcessInfo),
            SVC_GET_THREAD_INFO => SvcHandler::Extension(ExtSvc::GetThreadInfo),
            SVC_GET_CFW_INFO => SvcHandler::Extension(ExtSvc::GetCfwInfo),
            SVC_BREAK => {
                // Com debugger anexado o Break oficial gera o evento de debug.
                if self.kernel.current_process().debug().is_some() {
                    self.official(SVC_BREAK)
                } else {
                    SvcHandler::Extension(ExtSvc::Break)
                }
            }
            SVC_SET_GPU_PROT => SvcHandler::Extension(ExtSvc::SetGpuProt),
            SVC_SET_WIFI_ENABLED => SvcHandler::Extension(ExtSvc::SetWifiEnabled),
            SVC_BACKDOOR => SvcHandler::Extension(ExtSvc::Backdoor),
            SVC_KERNEL_SET_STATE => SvcHandler::Extension(ExtSvc::KernelSetState),

            0x00..=OFFICIAL_SVC_MAX => self.official(svc_id),

            SVC_EXTENDED_CONTROL => SvcHandler::Extension(ExtSvc::ExtendedControl),

            SVC_CONVERT_VA_TO_PA => SvcHandler::Extension(ExtSvc::ConvertVaToPa),
            SVC_FLUSH_DATA_CACHE_RANGE => SvcHandler::Extension(ExtSvc::FlushDataCacheRange),
            SVC_FLUSH_ENTIRE_DATA_CACHE => SvcHandler::Extension(ExtSvc::FlushEntireDataCache),
            SVC_INVALIDATE_INSTRUCTION_CACHE_RANGE => {
                SvcHandler::Extension(ExtSvc::InvalidateInstructionCacheRange)
            }
            SVC_INVALIDATE_ENTIRE_INSTRUCTION_CACHE => {
                SvcHandler::Extension(ExtSvc::InvalidateEntireInstructionCache)
            }

            SVC_MAP_PROCESS_MEMORY_EX => SvcHandler::Extension(ExtSvc::MapProcessMemoryEx),
            SVC_UNMAP_PROCESS_MEMORY_EX => SvcHandler::Extension(ExtSvc::UnmapProcessMemoryEx),
            SVC_CONTROL_MEMORY_EX => SvcHandler::Extension(ExtSvc::ControlMemoryEx),
            SVC_CONTROL_MEMORY_UNSAFE => SvcHandler::Extension(ExtSvc::ControlMemoryUnsafe),

            SVC_CONTROL_SERVICE => SvcHandler::Extension(ExtSvc::ControlService),
            SVC_COPY_HANDLE => SvcHandler::Extension(ExtSvc::CopyHandle),
            SVC_TRANSLATE_HANDLE => SvcHandler::Extension(ExtSvc::TranslateHandle),
            SVC_CONTROL_PROCESS => SvcHandler::Extension(ExtSvc::ControlProcess),

            _ => SvcHandler::Undefined,
        };

        crate::ktrace!("(Dispatch) svc id=", svc_id);
        handler
    }

    /// Executa o handler oficial `svc_id` sobre o frame.
    pub fn invoke_official(&self, svc_id: u32, frame: &mut TrapFrame) {
        match self.official(svc_id) {
            SvcHandler::Official(entry) => self.kernel.invoke_official(entry, frame),
            _ => oops::table_not_installed(svc_id),
        }
    }

    /// Caminho completo de uma SVC interceptada.
    pub fn handle_trap(&self, frame: &mut TrapFrame) {
        hooks::signal_svc_entry(self.kernel, frame);

        match self.resolve(frame) {
            SvcHandler::Official(entry) => self.kernel.invoke_official(entry, frame),
            SvcHandler::Extension(svc) => ext::invoke(self, svc, frame),
            SvcHandler::Undefined => oops::undefined_svc(frame.decode_svc_id()),
        }

        hooks::signal_svc_return(self.kernel, frame);
        hooks::postprocess_svc(self.kernel);
    }

    fn official(&self, svc_id: u32) -> SvcHandler {
        match self.table.get(svc_id) {
            Some(entry) => SvcHandler::Official(entry),
            None => oops::table_not_installed(svc_id),
        }
    }
}
