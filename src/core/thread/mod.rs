//! Thread (visão da extensão)

use core::sync::atomic::{AtomicU16, Ordering};

use bitflags::bitflags;

use crate::core::object::KAutoObject;
use crate::core::process::Pid;
use crate::klib::list::Linked;

bitflags! {
    /// Scheduling mask da thread no hospedeiro.
    ///
    /// Só `SESSION_LOCKED` é semanticamente da extensão; os outros bits são
    /// preservados como estão (`from_bits_retain`).
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct SchedulingMask: u16 {
        /// Thread estacionada por uma sessão interativa (menu, plugin swap).
        const SESSION_LOCKED = 0x20;
    }
}

/// Célula da scheduling mask, embutida na thread.
///
/// Escrita sob o lock da seção crítica; o atômico só evita UB nas leituras
/// concorrentes do scheduler.
#[derive(Debug, Default)]
pub struct SchedulingMaskCell(AtomicU16);

impl SchedulingMaskCell {
    pub const fn new(mask: SchedulingMask) -> Self {
        Self(AtomicU16::new(mask.bits()))
    }

    #[inline]
    pub fn get(&self) -> SchedulingMask {
        SchedulingMask::from_bits_retain(self.0.load(Ordering::Relaxed))
    }

    #[inline]
    pub fn insert(&self, mask: SchedulingMask) {
        self.0.fetch_or(mask.bits(), Ordering::Relaxed);
    }

    #[inline]
    pub fn remove(&self, mask: SchedulingMask) {
        self.0.fetch_and(!mask.bits(), Ordering::Relaxed);
    }

    #[inline]
    pub fn is_session_locked(&self) -> bool {
        self.get().contains(SchedulingMask::SESSION_LOCKED)
    }
}

/// Thread do kernel hospedeiro. Pertence a exatamente um processo e fica na
/// lista global de threads (intrusiva).
pub trait KThread: KAutoObject + Linked {
    fn thread_id(&self) -> u32;

    /// Pid do processo dono.
    fn owner_pid(&self) -> Pid;

    fn scheduling_mask(&self) -> &SchedulingMaskCell;

    /// Marcada para término?
    fn shall_terminate(&self) -> bool;

    /// Endereço da thread local storage (userspace).
    fn tls_address(&self) -> u32;

    /// Primeira palavra da TLS (magic usado para filtrar threads do sistema).
    fn tls_magic(&self) -> u32;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_lock_bit_preserves_other_bits() {
        let cell = SchedulingMaskCell::new(SchedulingMask::from_bits_retain(0x01));
        cell.insert(SchedulingMask::SESSION_LOCKED);
        assert_eq!(cell.get().bits(), 0x21);
        assert!(cell.is_session_locked());

        cell.remove(SchedulingMask::SESSION_LOCKED);
        assert_eq!(cell.get().bits(), 0x01);
    }
}
