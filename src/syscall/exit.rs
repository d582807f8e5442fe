//! Extensão de ExitProcess
//!
//! Roda ANTES do handler oficial (que nunca retorna). Só faz algo se o
//! processo pediu `SIGNAL_ON_EXIT`.

use crate::core::collab::PluginLoader;
use crate::core::host::HostKernel;
use crate::core::process::{CustomFlags, KProcess};

use super::sched;

/// Avisa o plugin loader e destrava as threads do processo que está saindo.
pub fn on_exit_process<K: HostKernel>(kernel: &K) {
    let process = kernel.current_process();
    if !process.custom_flags().get().contains(CustomFlags::SIGNAL_ON_EXIT) {
        return;
    }

    // Fora da seção crítica: o loader pode precisar dela.
    let plugins = kernel.plugin_loader();
    if plugins.is_running() {
        plugins.signal_exit();
    }

    let released = sched::set_session_lock(kernel, process.pid(), false, |_| true);
    if released > 0 {
        crate::kdebug!("(Exit) Threads destravadas=", released);
    }
}
