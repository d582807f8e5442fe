//! Processo (visão da extensão)
//!
//! O `KProcess` pertence ao kernel hospedeiro. A extensão é dona SEMÂNTICA de
//! um único campo: o bitset de custom flags.

use core::sync::atomic::{AtomicU32, Ordering};

use bitflags::bitflags;

use crate::core::object::KAutoObject;

/// ID do processo
pub type Pid = u32;

bitflags! {
    /// Flags por processo controladas pela extensão.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct CustomFlags: u32 {
        /// Páginas do processo forçadas para RWX.
        const FORCE_RWX_PAGES              = 1 << 0;
        /// Dispara o evento do processo quando o layout de memória muda.
        const SIGNAL_ON_MEM_LAYOUT_CHANGES = 1 << 1;
        /// Avisa o plugin loader e destrava threads quando o processo sai.
        const SIGNAL_ON_EXIT               = 1 << 2;
        /// O layout mudou desde a última verificação do post-hook.
        const MEM_LAYOUT_CHANGED           = 1 << 3;
    }
}

/// Célula das custom flags, embutida no processo.
///
/// Escritas são RMW atômicos (ControlProcess pode escrever as flags de outro
/// processo). O consumo do bit "layout mudou" só acontece no post-hook de um
/// núcleo rodando o próprio processo.
#[derive(Debug, Default)]
pub struct CustomFlagsCell(AtomicU32);

impl CustomFlagsCell {
    pub const fn new(flags: CustomFlags) -> Self {
        Self(AtomicU32::new(flags.bits()))
    }

    #[inline]
    pub fn get(&self) -> CustomFlags {
        CustomFlags::from_bits_retain(self.0.load(Ordering::Relaxed))
    }

    #[inline]
    pub fn set(&self, flags: CustomFlags) {
        self.0.store(flags.bits(), Ordering::Relaxed);
    }

    #[inline]
    pub fn insert(&self, flags: CustomFlags) {
        self.0.fetch_or(flags.bits(), Ordering::Relaxed);
    }

    #[inline]
    pub fn remove(&self, flags: CustomFlags) {
        self.0.fetch_and(!flags.bits(), Ordering::Relaxed);
    }

    /// Marca mutação externa do layout de memória.
    #[inline]
    pub fn mark_layout_changed(&self) {
        self.insert(CustomFlags::MEM_LAYOUT_CHANGED);
    }

    /// Test-and-clear do bit "layout mudou", só se a sinalização estiver ligada.
    ///
    /// Retorna `true` exatamente uma vez por mutação (borda). O caminho comum
    /// (nada a sinalizar) é só um load.
    #[inline]
    pub fn take_layout_change(&self) -> bool {
        let pending = CustomFlags::SIGNAL_ON_MEM_LAYOUT_CHANGES | CustomFlags::MEM_LAYOUT_CHANGED;
        if !self.get().contains(pending) {
            return false;
        }

        let previous = self
            .0
            .fetch_and(!CustomFlags::MEM_LAYOUT_CHANGED.bits(), Ordering::Relaxed);
        CustomFlags::from_bits_retain(previous).contains(CustomFlags::MEM_LAYOUT_CHANGED)
    }
}

/// Eventos de kernel por processo, disparados pela extensão.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessEvent {
    /// Layout de memória mudou (borda).
    MemoryLayoutChanged,
}

/// Contexto de debug anexado a um processo.
pub trait DebugContext {
    /// A SVC `svc_id` está no conjunto rastreado?
    fn traces(&self, svc_id: u32) -> bool;
}

/// Máscara de SVCs rastreadas (ids 0x00..0xFF). Ids maiores nunca são rastreados.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SvcTraceMask([u32; 8]);

impl SvcTraceMask {
    pub const fn empty() -> Self {
        Self([0; 8])
    }

    pub fn insert(&mut self, svc_id: u32) {
        if svc_id < 0x100 {
            self.0[(svc_id / 32) as usize] |= 1 << (svc_id % 32);
        }
    }

    pub fn contains(&self, svc_id: u32) -> bool {
        svc_id < 0x100 && self.0[(svc_id / 32) as usize] & (1 << (svc_id % 32)) != 0
    }
}

impl DebugContext for SvcTraceMask {
    fn traces(&self, svc_id: u32) -> bool {
        self.contains(svc_id)
    }
}

/// Processo do kernel hospedeiro.
pub trait KProcess: KAutoObject {
    type Debug: DebugContext;

    fn pid(&self) -> Pid;

    /// Nome curto do processo (8 bytes, sem terminador garantido).
    fn name(&self) -> [u8; 8];

    fn title_id(&self) -> u64;

    fn custom_flags(&self) -> &CustomFlagsCell;

    /// Contexto de debug, se um debugger estiver anexado.
    fn debug(&self) -> Option<&Self::Debug>;
}
