// Arquivo: klib/list/intrusive.rs
//
// Propósito: Lista encadeada INTRUSIVA (o nó mora dentro do objeto).
// Usada para a lista global de threads do hospedeiro.
//
// Detalhes de Implementação:
// - Zero alocação: o `Link` faz parte do objeto listado.
// - Não é dona dos nós. Quem insere garante que o nó vive enquanto estiver
//   na lista (objetos do kernel vivem até o último release).
// - Mutação exige `&mut`, ou seja, acesso exclusivo (normalmente sob o lock
//   da seção crítica). O iterador empresta a lista, então nenhum `&T`
//   obtido por ele sobrevive ao guarda do lock.

//! Intrusive Singly Linked List

use core::marker::PhantomData;
use core::ptr::{self, NonNull};
use core::sync::atomic::{AtomicPtr, Ordering};

/// Campo de encadeamento embutido no objeto.
pub struct Link<T> {
    next: AtomicPtr<T>,
}

impl<T> Link<T> {
    pub const fn new() -> Self {
        Self {
            next: AtomicPtr::new(ptr::null_mut()),
        }
    }
}

impl<T> Default for Link<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Objeto que pode ser colocado numa `IntrusiveList`.
///
/// # Safety
///
/// `link()` deve sempre devolver o MESMO campo do objeto, e esse campo não
/// pode ser usado por nenhuma outra lista.
pub unsafe trait Linked: Sized {
    fn link(&self) -> &Link<Self>;
}

pub struct IntrusiveList<T: Linked> {
    head: Option<NonNull<T>>,
    tail: Option<NonNull<T>>,
    len: usize,
}

// SAFETY: a lista só guarda ponteiros para objetos `Sync`; mutação exige `&mut`.
unsafe impl<T: Linked + Sync> Send for IntrusiveList<T> {}
unsafe impl<T: Linked + Sync> Sync for IntrusiveList<T> {}

impl<T: Linked> IntrusiveList<T> {
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Insere `node` no final.
    ///
    /// # Safety
    ///
    /// `node` deve continuar vivo (e no mesmo endereço) enquanto estiver na
    /// lista, e não pode estar em outra lista.
    pub unsafe fn push_back(&mut self, node: &T) {
        node.link().next.store(ptr::null_mut(), Ordering::Relaxed);
        let node_ptr = NonNull::from(node);

        match self.tail {
            None => self.head = Some(node_ptr),
            Some(tail) => tail
                .as_ref()
                .link()
                .next
                .store(node_ptr.as_ptr(), Ordering::Relaxed),
        }

        self.tail = Some(node_ptr);
        self.len += 1;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head,
            _marker: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<T: Linked> Default for IntrusiveList<T> {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Iter<'a, T: Linked> {
    next: Option<NonNull<T>>,
    _marker: PhantomData<&'a T>,
}

impl<'a, T: Linked> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let current = self.next?;
        // SAFETY: nós inseridos via push_back vivem enquanto estão na lista,
        // e a lista está emprestada por 'a.
        let node: &'a T = unsafe { &*current.as_ptr() };
        self.next = NonNull::new(node.link().next.load(Ordering::Relaxed));
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Node {
        value: u32,
        link: Link<Node>,
    }

    unsafe impl Linked for Node {
        fn link(&self) -> &Link<Self> {
            &self.link
        }
    }

    fn node(value: u32) -> Node {
        Node {
            value,
            link: Link::new(),
        }
    }

    #[test]
    fn test_push_and_iterate_in_order() {
        let (a, b, c) = (node(1), node(2), node(3));
        let mut list = IntrusiveList::new();
        unsafe {
            list.push_back(&a);
            list.push_back(&b);
            list.push_back(&c);
        }

        assert_eq!(list.len(), 3);
        let mut values = [0u32; 3];
        for (slot, n) in values.iter_mut().zip(list.iter()) {
            *slot = n.value;
        }
        assert_eq!(values, [1, 2, 3]);
    }

    #[test]
    fn test_empty_list() {
        let list: IntrusiveList<Node> = IntrusiveList::new();
        assert!(list.is_empty());
        assert!(list.iter().next().is_none());
    }
}
