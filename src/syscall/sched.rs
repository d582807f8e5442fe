//! Trava/destrava de threads por sessão interativa.

use crate::core::host::HostKernel;
use crate::core::process::Pid;
use crate::core::thread::{KThread, SchedulingMask};

/// Liga (`lock`) ou limpa `SESSION_LOCKED` nas threads de `pid` aceitas por
/// `filter`. Percorre a lista global sob a seção crítica.
///
/// Retorna quantas threads mudaram de estado.
pub fn set_session_lock<K, F>(kernel: &K, pid: Pid, lock: bool, filter: F) -> usize
where
    K: HostKernel,
    F: Fn(&K::Thread) -> bool,
{
    let threads = kernel.critical_section().lock(kernel.current_core());
    let mut changed = 0;

    for thread in threads.iter().filter(|thread| thread.owner_pid() == pid) {
        let mask = thread.scheduling_mask();
        if mask.is_session_locked() == lock || !filter(thread) {
            continue;
        }

        if lock {
            mask.insert(SchedulingMask::SESSION_LOCKED);
        } else {
            mask.remove(SchedulingMask::SESSION_LOCKED);
        }
        changed += 1;
    }

    changed
}
