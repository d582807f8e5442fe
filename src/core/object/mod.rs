//! # Object - Objetos do Kernel
//!
//! Objetos pertencem ao kernel hospedeiro. Aqui ficam o handle opaco, a trait
//! mínima de objeto, o guarda de referência e o resolvedor de handles
//! (`accessor`) usado por todos os handlers de extensão.

pub mod accessor;
pub mod handle;
pub mod kobject;
pub mod refcount;

pub use handle::Handle;
pub use kobject::{KAutoObject, ObjectRef};
pub use refcount::RefCount;
