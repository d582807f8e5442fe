// Arquivo: core/object/kobject.rs
//
// Propósito: Visão que a extensão tem dos objetos do kernel hospedeiro
// (processos, threads, eventos, sessões...). O hospedeiro é dono da memória
// e do contador; a extensão só pega referências TRANSITÓRIAS durante uma SVC.
//
// Detalhes de Implementação:
// - `KAutoObject`: operações mínimas de refcount + identificação.
// - `ObjectRef`: guarda RAII de UMA referência. O release acontece no `Drop`,
//   portanto em todo caminho de saída (sucesso, erro, `?`).

//! Kernel Object Base

use core::fmt;
use core::ops::Deref;

/// Trait base de todo objeto do kernel visível pela extensão.
pub trait KAutoObject: Sync {
    /// Incrementa o contador de referências do objeto.
    fn add_reference(&self);

    /// Decrementa o contador. O hospedeiro destrói o objeto quando chega a zero.
    fn release_reference(&self);

    /// Nome da classe do objeto no hospedeiro (ex: "KProcess").
    fn class_name(&self) -> &'static str;

    /// Endereço do objeto no espaço do kernel.
    fn kernel_address(&self) -> u32;
}

/// Uma referência contada a um objeto do kernel.
///
/// Invariante: cada `ObjectRef` vivo corresponde a exatamente UMA referência
/// no contador do objeto, solta exatamente uma vez no `Drop`.
pub struct ObjectRef<'k, T: KAutoObject + ?Sized> {
    object: &'k T,
}

impl<'k, T: KAutoObject + ?Sized> ObjectRef<'k, T> {
    /// Pega uma referência nova sobre um objeto já conhecido (ex: processo atual).
    #[inline]
    pub fn acquire(object: &'k T) -> Self {
        object.add_reference();
        Self { object }
    }

    /// Assume uma referência que JÁ foi contada (ex: lookup na tabela de handles).
    ///
    /// # Safety
    ///
    /// O chamador precisa ter incrementado o contador de `object` exatamente uma
    /// vez em nome deste guarda; caso contrário o `Drop` faz over-release.
    #[inline]
    pub unsafe fn adopt(object: &'k T) -> Self {
        Self { object }
    }

    /// Objeto referenciado (com o tempo de vida do kernel, não do guarda).
    #[inline]
    pub fn get(&self) -> &'k T {
        self.object
    }
}

impl<T: KAutoObject + ?Sized> Deref for ObjectRef<'_, T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        self.object
    }
}

impl<T: KAutoObject + ?Sized> Drop for ObjectRef<'_, T> {
    #[inline]
    fn drop(&mut self) {
        self.object.release_reference();
    }
}

impl<T: KAutoObject + ?Sized> fmt::Debug for ObjectRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectRef")
            .field("class", &self.object.class_name())
            .field("kaddr", &self.object.kernel_address())
            .finish()
    }
}
