//! HostJS-RT embeds a QuickJS engine for hosts that have no console of
//! their own: a runtime with stack and memory limits, a context to run
//! scripts in and the `console` builtin that forwards to host supplied
//! print primitives.
mod console;
mod context;
mod error;
mod js_exception;
mod runtime;

pub use rquickjs;

pub use self::console::{
    format_args, include_console, install_console, make_console, register_host_primitives,
    Console, ConsoleMethod, HostPrimitives, CONSOLE_GLOBAL,
};
pub use self::context::Context;
pub use self::error::Error;
pub use self::js_exception::JsException;
pub use self::runtime::{Runtime, DEFAULT_MAX_STACK_SIZE, DEFAULT_MEMORY_LIMIT};
