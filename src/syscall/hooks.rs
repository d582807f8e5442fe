//! Hooks de entrada/retorno de SVC
//!
//! Rodam em TODA SVC interceptada. O caminho sem debugger e sem flags
//! pendentes precisa ser só algumas leituras.

use crate::core::collab::{InteractiveSession, SessionMode};
use crate::core::host::{DebugEvent, HostKernel};
use crate::core::process::{DebugContext, KProcess, ProcessEvent};
use crate::core::thread::KThread;

use super::abi::TrapFrame;
use super::numbers::{SVC_ENTRY_SENTINEL, SVC_RETURN_SENTINEL};

/// OutputString sintético de entrada, se a SVC estiver rastreada pelo debugger.
#[inline]
pub fn signal_svc_entry<K: HostKernel>(kernel: &K, frame: &TrapFrame) {
    signal_traced(kernel, frame, SVC_ENTRY_SENTINEL);
}

/// OutputString sintético de retorno + evento de layout de memória (borda).
#[inline]
pub fn signal_svc_return<K: HostKernel>(kernel: &K, frame: &TrapFrame) {
    signal_traced(kernel, frame, SVC_RETURN_SENTINEL);

    let process = kernel.current_process();
    if process.custom_flags().take_layout_change() {
        crate::kdebug!("(Hooks) Layout mudou, pid=", process.pid());
        kernel.signal_process_event(process, ProcessEvent::MemoryLayoutChanged);
    }
}

/// Pós-processamento: intercepta a thread se a sessão interativa pedir e
/// encadeia o pós-processamento oficial.
pub fn postprocess_svc<K: HostKernel>(kernel: &K) {
    let thread = kernel.current_thread();
    let session = kernel.session();

    if !thread.shall_terminate()
        && session.should_intercept(thread, session.mode() & SessionMode::INTERCEPT_MASK)
    {
        crate::ktrace!("(Hooks) Thread interceptada, tid=", thread.thread_id());
        session.reschedule(thread, true);
    }

    kernel.official_postprocess();
}

fn signal_traced<K: HostKernel>(kernel: &K, frame: &TrapFrame, sentinel: u32) {
    let Some(debug) = kernel.current_process().debug() else {
        return;
    };

    let svc_id = frame.decode_svc_id();
    if debug.traces(svc_id) {
        kernel.signal_debug_event(DebugEvent::OutputString {
            address: sentinel,
            size: svc_id,
        });
    }
}
