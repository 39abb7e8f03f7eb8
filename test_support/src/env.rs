//! Serialised, self-restoring environment mutations.
//!
//! `std::env::set_var` and `remove_var` are `unsafe` in Rust 2024 because
//! they mutate process-global state. A [`ScopedVar`] borrows an [`EnvLock`],
//! so the lock outlives every override made under it, and restores the
//! previous value on drop.
//!
//! # Examples
//!
//! ```rust
//! use test_support::{EnvLock, ScopedVar};
//!
//! {
//!     let lock = EnvLock::acquire();
//!     let _flag = ScopedVar::set(&lock, "WHICH_TEST_EXAMPLE", "1");
//!     let _ext = ScopedVar::unset(&lock, "WHICH_TEST_EXAMPLE_EXT");
//!     assert_eq!(std::env::var("WHICH_TEST_EXAMPLE").as_deref(), Ok("1"));
//! }
//! assert!(std::env::var_os("WHICH_TEST_EXAMPLE").is_none());
//! ```

use std::ffi::{OsStr, OsString};
use std::marker::PhantomData;
use std::sync::{Mutex, MutexGuard};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// RAII guard that holds the global environment lock.
#[derive(Debug)]
pub struct EnvLock {
    _guard: MutexGuard<'static, ()>,
}

impl EnvLock {
    /// Acquire the lock, recovering it if a previous holder panicked.
    pub fn acquire() -> Self {
        let guard = ENV_LOCK
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Self { _guard: guard }
    }
}

/// Environment variable override that is undone on drop.
#[derive(Debug)]
pub struct ScopedVar<'lock> {
    name: &'static str,
    previous: Option<OsString>,
    _lock: PhantomData<&'lock EnvLock>,
}

impl<'lock> ScopedVar<'lock> {
    /// Set `name` to `value` until the guard is dropped.
    #[must_use]
    pub fn set(_lock: &'lock EnvLock, name: &'static str, value: impl AsRef<OsStr>) -> Self {
        let previous = std::env::var_os(name);
        // SAFETY: the borrowed `EnvLock` is held until the value is restored.
        unsafe { std::env::set_var(name, value) };
        Self {
            name,
            previous,
            _lock: PhantomData,
        }
    }

    /// Remove `name` until the guard is dropped.
    #[must_use]
    pub fn unset(_lock: &'lock EnvLock, name: &'static str) -> Self {
        let previous = std::env::var_os(name);
        // SAFETY: the borrowed `EnvLock` is held until the value is restored.
        unsafe { std::env::remove_var(name) };
        Self {
            name,
            previous,
            _lock: PhantomData,
        }
    }
}

impl Drop for ScopedVar<'_> {
    fn drop(&mut self) {
        // SAFETY: the guard cannot outlive the `EnvLock` it borrowed.
        unsafe {
            match self.previous.take() {
                Some(value) => std::env::set_var(self.name, value),
                None => std::env::remove_var(self.name),
            }
        }
    }
}
