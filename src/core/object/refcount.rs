// Arquivo: core/object/refcount.rs
//
// Propósito: Contagem de referências atômica para objetos do kernel.
// O kernel hospedeiro é dono do contador real de cada `KAutoObject`; este tipo
// é a forma canônica de representá-lo do lado Rust (objetos de teste,
// wrappers de objetos do hospedeiro).
//
// Detalhes de Implementação:
// - Usa `AtomicU32` (o contador do hospedeiro é de 32 bits).
// - Semântica Acquire/Release no decremento para que quem destrói o objeto
//   veja todas as escritas feitas pelos outros donos.

//! Reference Counting

use core::sync::atomic::{AtomicU32, Ordering};

/// Contador de referências atômico
#[derive(Debug)]
pub struct RefCount {
    count: AtomicU32,
}

impl RefCount {
    /// Cria um novo contador com valor inicial
    pub const fn new(initial: u32) -> Self {
        Self {
            count: AtomicU32::new(initial),
        }
    }

    /// Incrementa o contador de referências.
    /// Retorna o valor ANTERIOR.
    #[inline]
    pub fn inc(&self) -> u32 {
        // Quem chama inc() já segura uma referência válida (refcount > 0).
        self.count.fetch_add(1, Ordering::Relaxed)
    }

    /// Decrementa o contador de referências.
    /// Retorna `true` se a contagem chegou a ZERO (o objeto deve ser destruído).
    #[inline]
    #[must_use]
    pub fn dec(&self) -> bool {
        let prev = self.count.fetch_sub(1, Ordering::Release);
        debug_assert!(prev != 0, "refcount underflow");

        if prev == 1 {
            core::sync::atomic::fence(Ordering::Acquire);
            true
        } else {
            false
        }
    }

    /// Retorna o valor atual (relaxado).
    #[inline]
    pub fn get(&self) -> u32 {
        self.count.load(Ordering::Relaxed)
    }
}
