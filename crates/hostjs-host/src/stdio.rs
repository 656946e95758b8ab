use std::cell::RefCell;
use std::fmt;
use std::io::{self, Stderr, Stdout, Write};

use hostjs_rt::{ConsoleMethod, Error, HostPrimitives};
use tracing::trace;

use crate::config::HostConfig;

/// Host primitives that write console lines to a pair of writers.
///
/// By default everything goes to the output writer.  Each line is written
/// and flushed individually.
pub struct StdioHost<O = Stdout, E = Stderr> {
    config: HostConfig,
    out: RefCell<O>,
    err: RefCell<E>,
}

impl<O, E> fmt::Debug for StdioHost<O, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StdioHost")
            .field("config", &self.config)
            .finish()
    }
}

impl StdioHost {
    /// Creates a host writing to the process' stdout and stderr.
    pub fn new(config: HostConfig) -> StdioHost {
        StdioHost::with_writers(config, io::stdout(), io::stderr())
    }
}

impl Default for StdioHost {
    fn default() -> StdioHost {
        StdioHost::new(HostConfig::default())
    }
}

impl<O: Write, E: Write> StdioHost<O, E> {
    /// Creates a host on top of arbitrary writers.
    pub fn with_writers(config: HostConfig, out: O, err: E) -> StdioHost<O, E> {
        StdioHost {
            config,
            out: RefCell::new(out),
            err: RefCell::new(err),
        }
    }

    /// Returns the config.
    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    /// Consumes the host and returns the output and diagnostics writers.
    pub fn into_writers(self) -> (O, E) {
        (self.out.into_inner(), self.err.into_inner())
    }

    fn write_line(&self, method: ConsoleMethod, msg: &str) -> Result<(), Error> {
        let prefix = match method {
            ConsoleMethod::Log => &self.config.print_prefix,
            ConsoleMethod::Error => &self.config.error_prefix,
            ConsoleMethod::Warn => &self.config.warn_prefix,
        };
        let to_err = method != ConsoleMethod::Log && self.config.diagnostics_to_stderr;
        trace!(method = method.name(), to_err, "writing console line");
        let rv = if to_err {
            write_prefixed(&mut *self.err.borrow_mut(), prefix, msg)
        } else {
            write_prefixed(&mut *self.out.borrow_mut(), prefix, msg)
        };
        rv.map_err(Error::host)
    }
}

fn write_prefixed<W: Write>(w: &mut W, prefix: &str, msg: &str) -> io::Result<()> {
    writeln!(w, "{}{}", prefix, msg)?;
    w.flush()
}

impl<O: Write, E: Write> HostPrimitives for StdioHost<O, E> {
    fn print(&self, msg: &str) -> Result<(), Error> {
        self.write_line(ConsoleMethod::Log, msg)
    }

    fn error(&self, msg: &str) -> Result<(), Error> {
        self.write_line(ConsoleMethod::Error, msg)
    }

    fn warn(&self, msg: &str) -> Result<(), Error> {
        self.write_line(ConsoleMethod::Warn, msg)
    }
}
