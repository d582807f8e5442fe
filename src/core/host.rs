//! # Host Kernel Seam
//!
//! Tudo o que a extensão precisa do kernel hospedeiro (fechado), numa trait.
//! O hospedeiro real implementa isto sobre as próprias estruturas; os testes
//! implementam com um kernel de mentira.
//!
//! ## Contratos
//! - Lookups devolvem `ObjectRef` já contado (o hospedeiro incrementou).
//! - Nada aqui pode alocar nem bloquear, exceto `critical_section`.
//! - `critical_section` é o lock recursivo compartilhado com o resto do runtime.

use crate::arch::CacheMaintenance;
use crate::core::collab::{InteractiveSession, PluginLoader};
use crate::core::object::{Handle, KAutoObject, ObjectRef};
use crate::core::process::{KProcess, ProcessEvent};
use crate::core::thread::KThread;
use crate::klib::list::IntrusiveList;
use crate::sync::RecursiveLock;
use crate::syscall::abi::TrapFrame;
use crate::syscall::dispatch::table::SvcEntry;
use crate::syscall::error::{ResultCode, SvcResult};

/// Versão do kernel hospedeiro (`major.minor.revision`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct KernelVersion {
    pub major: u8,
    pub minor: u8,
    pub revision: u8,
}

impl KernelVersion {
    /// Primeira revisão (minor) com o primitivo de unmap por páginas usado
    /// pelas SVCs estendidas de memória.
    pub const EXTENDED_MEMORY_MIN_MINOR: u8 = 37;

    pub const fn new(major: u8, minor: u8, revision: u8) -> Self {
        Self {
            major,
            minor,
            revision,
        }
    }

    /// Decodifica o formato empacotado do hospedeiro: `major<<24 | minor<<16 | revision<<8`.
    pub const fn from_raw(raw: u32) -> Self {
        Self {
            major: (raw >> 24) as u8,
            minor: (raw >> 16) as u8,
            revision: (raw >> 8) as u8,
        }
    }

    pub const fn raw(&self) -> u32 {
        (self.major as u32) << 24 | (self.minor as u32) << 16 | (self.revision as u32) << 8
    }

    /// O hospedeiro tem o primitivo de unmap por páginas?
    pub const fn supports_extended_memory_ops(&self) -> bool {
        self.minor >= Self::EXTENDED_MEMORY_MIN_MINOR
    }
}

/// Evento do canal de debug.
///
/// A extensão só emite `OutputString` sintético (entrada/retorno de SVC):
/// os eventos dedicados de syscall do protocolo de debug bloqueiam.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugEvent {
    OutputString { address: u32, size: u32 },
}

/// Parâmetros de ControlMemory (oficial e estendidos).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlMemoryRequest {
    pub addr0: u32,
    pub addr1: u32,
    pub size: u32,
    pub op: u32,
    pub perms: u32,
}

/// O kernel hospedeiro.
pub trait HostKernel: CacheMaintenance + Sync {
    type Process: KProcess;
    type Thread: KThread;
    /// Objeto genérico da tabela de handles (qualquer classe).
    type Object: KAutoObject;
    type Session: InteractiveSession<Self::Thread>;
    type Plugins: PluginLoader;

    // --- Contexto do núcleo ---------------------------------------------

    fn version(&self) -> KernelVersion;

    fn current_core(&self) -> u32;

    fn current_process(&self) -> &Self::Process;

    fn current_thread(&self) -> &Self::Thread;

    // --- Tabela de handles ----------------------------------------------

    /// Handle de `owner` que aponta para um processo. `None` se não existe ou
    /// se o objeto não é um processo.
    fn lookup_process(&self, owner: &Self::Process, handle: Handle) -> Option<ObjectRef<'_, Self::Process>>;

    fn lookup_thread(&self, owner: &Self::Process, handle: Handle) -> Option<ObjectRef<'_, Self::Thread>>;

    fn lookup_object(&self, owner: &Self::Process, handle: Handle) -> Option<ObjectRef<'_, Self::Object>>;

    /// O processo visto como objeto genérico. Mesmo objeto, mesmo contador.
    fn process_object<'a>(&'a self, process: &'a Self::Process) -> &'a Self::Object;

    fn thread_object<'a>(&'a self, thread: &'a Self::Thread) -> &'a Self::Object;

    /// Cria um handle em `owner` para `object` (o hospedeiro pega a própria referência).
    fn insert_handle(&self, owner: &Self::Process, object: &Self::Object) -> SvcResult<Handle>;

    // --- SVCs oficiais --------------------------------------------------

    /// Executa o handler oficial sobre o frame (resultado em r0..).
    fn invoke_official(&self, entry: SvcEntry, frame: &mut TrapFrame);

    /// Pós-processamento oficial de toda SVC.
    fn official_postprocess(&self);

    // --- Memória --------------------------------------------------------

    /// UnmapProcessMemory oficial (caminho legado).
    fn legacy_unmap_process_memory(&self, process: Handle, addr: u32, size: u32) -> ResultCode;

    /// Unmap na tabela de mapeamento do processo, em páginas.
    fn unmap_pages(&self, process: &Self::Process, addr: u32, pages: u32) -> ResultCode;

    /// Mapeia `pages` de `src` em `dst`.
    fn map_pages(
        &self,
        dst: &Self::Process,
        dst_addr: u32,
        src: &Self::Process,
        src_addr: u32,
        pages: u32,
    ) -> ResultCode;

    /// ControlMemory sobre `process`; devolve o endereço resultante.
    fn control_memory(&self, process: &Self::Process, request: &ControlMemoryRequest) -> SvcResult<u32>;

    /// ControlMemory sem as checagens de região do hospedeiro.
    fn control_memory_unsafe(&self, process: &Self::Process, request: &ControlMemoryRequest) -> SvcResult<u32>;

    fn va_to_pa(&self, process: &Self::Process, va: u32, write_check: bool) -> Option<u32>;

    /// Reescreve as permissões de todas as páginas do processo para RWX.
    fn set_mmu_rwx(&self, process: &Self::Process) -> ResultCode;

    // --- Debug / eventos ------------------------------------------------

    /// Canal de debug (não bloqueante) do processo atual.
    fn signal_debug_event(&self, event: DebugEvent);

    fn signal_process_event(&self, process: &Self::Process, event: ProcessEvent);

    /// Handle em `owner` para o evento `event` de `process` (criado se preciso).
    fn open_process_event(
        &self,
        owner: &Self::Process,
        process: &Self::Process,
        event: ProcessEvent,
    ) -> SvcResult<Handle>;

    /// Break sem debugger: gera a exceção de usuário correspondente.
    fn raise_break(&self, reason: u32) -> ResultCode;

    // --- Threads --------------------------------------------------------

    /// Seção crítica do hospedeiro + lista global de threads.
    fn critical_section(&self) -> &RecursiveLock<IntrusiveList<Self::Thread>>;

    // --- Userspace ------------------------------------------------------

    fn copy_from_user(&self, dst: &mut [u8], src: u32) -> bool;

    fn copy_to_user(&self, dst: u32, src: &[u8]) -> bool;

    // --- Serviços / hardware --------------------------------------------

    /// Sessão cliente do serviço registrado com `name`.
    fn service_client_session(&self, name: &[u8; 8]) -> Option<ObjectRef<'_, Self::Object>>;

    /// Nome do serviço a que `object` (sessão/porta) pertence.
    fn service_name_of(&self, object: &Self::Object) -> Option<[u8; 8]>;

    fn set_gpu_protection(&self, enabled: bool);

    fn set_wifi_enabled(&self, enabled: bool);

    /// Executa `entry(arg)` em modo kernel (Backdoor).
    fn run_kernel_callback(&self, entry: u32, arg: u32) -> u32;

    // --- Colaboradores --------------------------------------------------

    fn session(&self) -> &Self::Session;

    fn plugin_loader(&self) -> &Self::Plugins;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_packing() {
        let v = KernelVersion::from_raw(0x0237_0000);
        assert_eq!(v, KernelVersion::new(2, 0x37, 0));
        assert_eq!(v.raw(), 0x0237_0000);
        assert!(v.supports_extended_memory_ops());
        assert!(!KernelVersion::new(2, 36, 0).supports_extended_memory_ops());
    }
}
