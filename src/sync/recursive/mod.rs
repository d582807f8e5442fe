pub mod recursive;

pub use recursive::{RecursiveLock, RecursiveLockGuard};
