//! Lock recursivo por núcleo (seção crítica do hospedeiro)

use core::cell::UnsafeCell;
use core::marker::PhantomData;
use core::ops::Deref;
use core::sync::atomic::{AtomicU32, Ordering};

/// Valor de `owner` quando ninguém segura o lock.
const NO_OWNER: u32 = u32::MAX;

/// Lock recursivo com busy-wait, identificado pelo núcleo dono.
///
/// É o lock da seção crítica do kernel hospedeiro: protege a lista global de
/// threads e é compartilhado com o resto do runtime privilegiado, por isso
/// precisa ser reentrante no mesmo núcleo.
///
/// # Regras
///
/// - Nunca chamar outros subsistemas (plugin loader, sessão interativa)
///   segurando este lock: risco de deadlock reentrante.
/// - O guarda dá apenas `&T`. Como o mesmo núcleo pode pegar o lock de novo,
///   entregar `&mut T` criaria aliasing. Mutação é feita por campos atômicos
///   dos objetos ou via `get_mut` antes do lock ser compartilhado.
pub struct RecursiveLock<T> {
    owner: AtomicU32,
    depth: UnsafeCell<u32>,
    data: UnsafeCell<T>,
}

// SAFETY: `depth` só é tocado pelo núcleo dono; `data` só é exposto como `&T`
// enquanto o lock está seguro.
unsafe impl<T: Send> Send for RecursiveLock<T> {}
unsafe impl<T: Send + Sync> Sync for RecursiveLock<T> {}

impl<T> RecursiveLock<T> {
    /// Cria novo lock livre
    pub const fn new(data: T) -> Self {
        Self {
            owner: AtomicU32::new(NO_OWNER),
            depth: UnsafeCell::new(0),
            data: UnsafeCell::new(data),
        }
    }

    /// Adquire o lock em nome do núcleo `core`. Reentrante.
    pub fn lock(&self, core: u32) -> RecursiveLockGuard<'_, T> {
        debug_assert!(core != NO_OWNER);

        if self.owner.load(Ordering::Relaxed) == core {
            // SAFETY: somos o dono, ninguém mais toca `depth`.
            unsafe { *self.depth.get() += 1 };
        } else {
            while self
                .owner
                .compare_exchange_weak(NO_OWNER, core, Ordering::Acquire, Ordering::Relaxed)
                .is_err()
            {
                core::hint::spin_loop();
            }
            // SAFETY: acabamos de virar dono.
            unsafe { *self.depth.get() = 1 };
        }

        RecursiveLockGuard {
            lock: self,
            _not_send: PhantomData,
        }
    }

    /// O núcleo `core` segura o lock agora?
    pub fn is_held_by(&self, core: u32) -> bool {
        self.owner.load(Ordering::Relaxed) == core
    }

    /// Acesso exclusivo sem lock (exige `&mut self`).
    pub fn get_mut(&mut self) -> &mut T {
        self.data.get_mut()
    }
}

/// Guarda do lock recursivo. Libera um nível de recursão no `Drop`.
pub struct RecursiveLockGuard<'a, T> {
    lock: &'a RecursiveLock<T>,
    // O lock pertence ao núcleo, o guarda não pode migrar.
    _not_send: PhantomData<*const ()>,
}

impl<T> Deref for RecursiveLockGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        // SAFETY: o lock está seguro por este núcleo.
        unsafe { &*self.lock.data.get() }
    }
}

impl<T> Drop for RecursiveLockGuard<'_, T> {
    fn drop(&mut self) {
        // SAFETY: somos o dono enquanto o guarda existe.
        let depth = unsafe {
            let depth = &mut *self.lock.depth.get();
            *depth -= 1;
            *depth
        };

        if depth == 0 {
            self.lock.owner.store(NO_OWNER, Ordering::Release);
        }
    }
}
