pub mod locking;

pub use locking::{atomic_write, lock_exclusive, locked_read, locked_remove, ExclusiveLock};
