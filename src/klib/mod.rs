//! Kernel Library (KLib).
//!
//! Utilitários agnósticos de hardware para uso interno da extensão.
//! Nada aqui aloca.

pub mod align;
pub mod list;

pub use align::{is_page_aligned, pages_of, PAGE_SIZE};
