//! Listas do kernel (sem alocação).

pub mod intrusive;

pub use intrusive::{IntrusiveList, Link, Linked};
