//! Handle opaco para userspace

/// Handle opaco, escopado à tabela de handles de UM processo.
///
/// Userspace nunca vê ponteiros reais, apenas handles. Dois valores
/// reservados não passam pela tabela: o pseudo-handle do processo atual e o
/// da thread atual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Handle(u32);

impl Handle {
    /// Pseudo-handle "thread atual".
    pub const CURRENT_THREAD: Handle = Handle(0xFFFF_8000);

    /// Pseudo-handle "processo atual".
    pub const CURRENT_PROCESS: Handle = Handle(0xFFFF_8001);

    /// Cria handle a partir do valor raw (registrador da SVC).
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Retorna o valor raw do handle
    pub const fn raw(&self) -> u32 {
        self.0
    }

    /// É um dos pseudo-handles reservados?
    pub const fn is_pseudo(&self) -> bool {
        self.0 == Self::CURRENT_THREAD.0 || self.0 == Self::CURRENT_PROCESS.0
    }
}

impl From<u32> for Handle {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}
