//! ControlProcess (0xB3)
//!
//! Operações sobre um processo arbitrário. O processo é resolvido ANTES do
//! opcode ser validado: handle inválido sempre ganha de opcode inválido.

use crate::core::host::HostKernel;
use crate::core::object::accessor::resolve_process;
use crate::core::object::Handle;
use crate::core::process::{CustomFlags, KProcess, ProcessEvent};
use crate::core::thread::KThread;
use crate::syscall::error::{ResultCode, SvcResult};
use crate::syscall::sched;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ProcessOp {
    /// Todas as páginas do processo viram RWX (e as futuras também).
    SetMmuToRwx = 1,
    /// Handle para o evento de mudança de layout; liga a sinalização.
    GetOnMemoryChangeEvent = 2,
    /// Liga o aviso de saída.
    SignalOnExit = 3,
    /// (va) -> pa
    GetPaFromVa = 4,
    /// (lock, tls magic) trava/destrava threads, exceto as com o magic dado.
    ScheduleThreads = 5,
    /// (lock) trava/destrava todas as threads.
    ScheduleThreadsWithoutTlsMagic = 6,
}

impl ProcessOp {
    pub const fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            1 => Some(Self::SetMmuToRwx),
            2 => Some(Self::GetOnMemoryChangeEvent),
            3 => Some(Self::SignalOnExit),
            4 => Some(Self::GetPaFromVa),
            5 => Some(Self::ScheduleThreads),
            6 => Some(Self::ScheduleThreadsWithoutTlsMagic),
            _ => None,
        }
    }
}

pub fn control_process<K: HostKernel>(
    kernel: &K,
    handle: Handle,
    op: u32,
    arg0: u32,
    arg1: u32,
) -> SvcResult<u32> {
    let process = resolve_process(kernel, handle)?;
    let op = ProcessOp::from_raw(op).ok_or(ResultCode::NOT_IMPLEMENTED)?;
    crate::kdebug!("(ControlProcess) op=", op as u32);

    match op {
        ProcessOp::SetMmuToRwx => {
            kernel.set_mmu_rwx(&process).into_result()?;
            process.custom_flags().insert(CustomFlags::FORCE_RWX_PAGES);
            Ok(0)
        }
        ProcessOp::GetOnMemoryChangeEvent => {
            let event = kernel.open_process_event(
                kernel.current_process(),
                &process,
                ProcessEvent::MemoryLayoutChanged,
            )?;
            process
                .custom_flags()
                .insert(CustomFlags::SIGNAL_ON_MEM_LAYOUT_CHANGES);
            Ok(event.raw())
        }
        ProcessOp::SignalOnExit => {
            process.custom_flags().insert(CustomFlags::SIGNAL_ON_EXIT);
            Ok(0)
        }
        ProcessOp::GetPaFromVa => kernel
            .va_to_pa(&process, arg0, false)
            .ok_or(ResultCode::INVALID_POINTER),
        ProcessOp::ScheduleThreads => {
            let changed = sched::set_session_lock(kernel, process.pid(), arg0 != 0, |thread| {
                thread.tls_magic() != arg1
            });
            Ok(changed as u32)
        }
        ProcessOp::ScheduleThreadsWithoutTlsMagic => {
            let changed = sched::set_session_lock(kernel, process.pid(), arg0 != 0, |_| true);
            Ok(changed as u32)
        }
    }
}
