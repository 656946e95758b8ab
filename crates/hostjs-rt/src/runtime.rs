use std::fmt;
use std::rc::Rc;

use crate::error::Error;

/// Stack budget for script execution before a stack overflow is raised.
pub const DEFAULT_MAX_STACK_SIZE: usize = 256 * 1024;

/// Heap budget for a runtime before allocations fail with an exception.
pub const DEFAULT_MEMORY_LIMIT: usize = 64 * 1024 * 1024;

/// Wraps a QuickJS runtime.
///
/// This is a non thread-safe handle like object that can be cloned
/// cheaply to increment the refcount.
#[derive(Clone)]
pub struct Runtime {
    handle: Rc<rquickjs::Runtime>,
}

impl fmt::Debug for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runtime").finish()
    }
}

impl Runtime {
    /// Creates a new runtime with the default limits.
    pub fn new() -> Result<Runtime, Error> {
        Runtime::with_limits(DEFAULT_MAX_STACK_SIZE, DEFAULT_MEMORY_LIMIT)
    }

    /// Creates a new runtime with explicit stack and memory limits.
    ///
    /// Runaway recursion and allocation surface as script exceptions once
    /// a limit is hit.
    pub fn with_limits(max_stack_size: usize, memory_limit: usize) -> Result<Runtime, Error> {
        let rt = rquickjs::Runtime::new().map_err(Error::RuntimeInit)?;
        rt.set_max_stack_size(max_stack_size);
        rt.set_memory_limit(memory_limit);
        Ok(Runtime {
            handle: Rc::new(rt),
        })
    }

    /// Returns the underlying engine runtime.
    pub(crate) fn raw(&self) -> &rquickjs::Runtime {
        &self.handle
    }
}
