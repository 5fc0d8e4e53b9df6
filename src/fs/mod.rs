//! Filesystem helpers for djstart.

mod atomic;

pub use atomic::{atomic_write, atomic_write_file};
