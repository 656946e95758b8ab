//! The `console` builtin.
//!
//! Scripts get a `console` object with `log`, `error` and `warn`.  Each
//! method stringifies its arguments, joins them with a single space and
//! hands the resulting line to one of the host primitives (`___print`,
//! `___error`, `___warn`).  The same behavior is available to Rust callers
//! through [`Console`], which talks to a [`HostPrimitives`] implementation
//! directly.
use std::rc::Rc;

use rquickjs::convert::Coerced;
use rquickjs::function::{Rest, This};
use rquickjs::{Array, Ctx, Exception, FromJs, Function, Object, Value};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::error::{catch_exception, Error, HOST_ERROR_NAME};

/// The global name the console object is bound to.
pub const CONSOLE_GLOBAL: &str = "console";

/// The methods exposed on the console object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsoleMethod {
    Log,
    Error,
    Warn,
}

impl ConsoleMethod {
    /// All console methods in installation order.
    pub const ALL: [ConsoleMethod; 3] = [
        ConsoleMethod::Log,
        ConsoleMethod::Error,
        ConsoleMethod::Warn,
    ];

    /// Returns the method name on the console object.
    pub fn name(self) -> &'static str {
        match self {
            ConsoleMethod::Log => "log",
            ConsoleMethod::Error => "error",
            ConsoleMethod::Warn => "warn",
        }
    }

    /// Returns the global name of the host primitive the method forwards to.
    pub fn host_primitive(self) -> &'static str {
        match self {
            ConsoleMethod::Log => "___print",
            ConsoleMethod::Error => "___error",
            ConsoleMethod::Warn => "___warn",
        }
    }

    /// Looks up a method by its name on the console object.
    pub fn from_name(name: &str) -> Option<ConsoleMethod> {
        ConsoleMethod::ALL
            .iter()
            .copied()
            .find(|method| method.name() == name)
    }
}

/// The output channels provided by the host.
///
/// Every method receives exactly one fully formatted line.
pub trait HostPrimitives {
    /// Writes to the standard output channel.
    fn print(&self, msg: &str) -> Result<(), Error>;

    /// Writes to the error channel.
    fn error(&self, msg: &str) -> Result<(), Error>;

    /// Writes to the warning channel.
    fn warn(&self, msg: &str) -> Result<(), Error>;

    /// Routes a line to the channel of a console method.
    fn dispatch(&self, method: ConsoleMethod, msg: &str) -> Result<(), Error> {
        match method {
            ConsoleMethod::Log => self.print(msg),
            ConsoleMethod::Error => self.error(msg),
            ConsoleMethod::Warn => self.warn(msg),
        }
    }
}

impl<'a, T: HostPrimitives + ?Sized> HostPrimitives for &'a T {
    fn print(&self, msg: &str) -> Result<(), Error> {
        (**self).print(msg)
    }

    fn error(&self, msg: &str) -> Result<(), Error> {
        (**self).error(msg)
    }

    fn warn(&self, msg: &str) -> Result<(), Error> {
        (**self).warn(msg)
    }
}

impl<T: HostPrimitives + ?Sized> HostPrimitives for Rc<T> {
    fn print(&self, msg: &str) -> Result<(), Error> {
        (**self).print(msg)
    }

    fn error(&self, msg: &str) -> Result<(), Error> {
        (**self).error(msg)
    }

    fn warn(&self, msg: &str) -> Result<(), Error> {
        (**self).warn(msg)
    }
}

impl<T: HostPrimitives + ?Sized> HostPrimitives for Box<T> {
    fn print(&self, msg: &str) -> Result<(), Error> {
        (**self).print(msg)
    }

    fn error(&self, msg: &str) -> Result<(), Error> {
        (**self).error(msg)
    }

    fn warn(&self, msg: &str) -> Result<(), Error> {
        (**self).warn(msg)
    }
}

/// Stringifies console arguments and joins them with a single space.
///
/// No arguments produce an empty string.  `undefined` and `null` render
/// as empty strings, the same as they do in an array join.
pub fn format_args<'js>(ctx: &Ctx<'js>, args: &[Value<'js>]) -> Result<String, Error> {
    catch_exception(ctx, join_args(ctx, args))
}

fn join_args<'js>(ctx: &Ctx<'js>, args: &[Value<'js>]) -> rquickjs::Result<String> {
    let items = Array::new(ctx.clone())?;
    for (idx, arg) in args.iter().enumerate() {
        items.set(idx, arg.clone())?;
    }
    let join: Function = items.as_object().get("join")?;
    join.call((This(items), " "))
}

/// A console that forwards directly to host primitives.
#[derive(Debug)]
pub struct Console<H> {
    host: H,
}

impl<H: HostPrimitives> Console<H> {
    /// Creates a console on top of the given host primitives.
    pub fn new(host: H) -> Console<H> {
        Console { host }
    }

    /// Formats the arguments and writes them to the output channel.
    pub fn log<'js>(&self, ctx: &Ctx<'js>, args: &[Value<'js>]) -> Result<(), Error> {
        self.emit(ctx, ConsoleMethod::Log, args)
    }

    /// Formats the arguments and writes them to the error channel.
    pub fn error<'js>(&self, ctx: &Ctx<'js>, args: &[Value<'js>]) -> Result<(), Error> {
        self.emit(ctx, ConsoleMethod::Error, args)
    }

    /// Formats the arguments and writes them to the warning channel.
    pub fn warn<'js>(&self, ctx: &Ctx<'js>, args: &[Value<'js>]) -> Result<(), Error> {
        self.emit(ctx, ConsoleMethod::Warn, args)
    }

    /// Formats the arguments and hands them to the host primitive of `method`.
    pub fn emit<'js>(
        &self,
        ctx: &Ctx<'js>,
        method: ConsoleMethod,
        args: &[Value<'js>],
    ) -> Result<(), Error> {
        let msg = format_args(ctx, args)?;
        trace!(method = method.name(), len = msg.len(), "forwarding console message");
        self.host.dispatch(method, &msg)
    }

    /// Returns the host primitives.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Consumes the console and returns the host primitives.
    pub fn into_host(self) -> H {
        self.host
    }
}

/// Raises a host failure as a script exception.
fn throw_host_error<'js>(ctx: &Ctx<'js>, err: Error) -> rquickjs::Error {
    let msg = match err {
        Error::Host(err) => err.to_string(),
        other => other.to_string(),
    };
    let exc = match Exception::from_message(ctx.clone(), &msg) {
        Ok(exc) => exc,
        Err(err) => return err,
    };
    if let Err(err) = exc.as_object().set("name", HOST_ERROR_NAME) {
        return err;
    }
    ctx.throw(exc.into_object().into_value())
}

/// Binds `___print`, `___error` and `___warn` to the given host.
///
/// Every argument is converted with the string operator.  Several
/// arguments end up on separate lines of a single host call.
pub fn register_host_primitives<'js, H>(ctx: &Ctx<'js>, host: Rc<H>) -> Result<(), Error>
where
    H: HostPrimitives + ?Sized + 'static,
{
    let globals = ctx.globals();
    for method in ConsoleMethod::ALL {
        let host = host.clone();
        let func = Function::new(
            ctx.clone(),
            move |ctx: Ctx<'js>, args: Rest<Value<'js>>| -> rquickjs::Result<()> {
                let mut lines = SmallVec::<[String; 4]>::new();
                for arg in args.0 {
                    lines.push(Coerced::<String>::from_js(&ctx, arg)?.0);
                }
                trace!(primitive = method.host_primitive(), "host primitive invoked");
                host.dispatch(method, &lines.join("\n"))
                    .map_err(|err| throw_host_error(&ctx, err))
            },
        );
        let func = catch_exception(ctx, func)?;
        catch_exception(ctx, globals.set(method.host_primitive(), func))?;
    }
    debug!("registered console host primitives");
    Ok(())
}

const CONSOLE_SOURCE: &str = r#"({
    log(...v) { globalThis.___print(`${v.join(" ")}`); },
    error(...v) { globalThis.___error(`${v.join(" ")}`); },
    warn(...v) { globalThis.___warn(`${v.join(" ")}`); },
})"#;

/// Creates a console object.
///
/// The methods resolve their host primitive through the global object when
/// they are called, so a primitive that is missing only fails once used.
pub fn make_console<'js>(ctx: &Ctx<'js>) -> Result<Object<'js>, Error> {
    catch_exception(ctx, ctx.eval(CONSOLE_SOURCE))
}

/// Creates a console object and binds it to the `console` global.
///
/// Installing again replaces the previous console.
pub fn install_console<'js>(ctx: &Ctx<'js>) -> Result<Object<'js>, Error> {
    let console = make_console(ctx)?;
    let globals = ctx.globals();
    if catch_exception(ctx, globals.contains_key(CONSOLE_GLOBAL))? {
        debug!("replaced existing console global");
    } else {
        debug!("installed console global");
    }
    catch_exception(ctx, globals.set(CONSOLE_GLOBAL, console.clone()))?;
    Ok(console)
}

/// Registers the host primitives and installs the console.
pub fn include_console<'js, H>(ctx: &Ctx<'js>, host: Rc<H>) -> Result<Object<'js>, Error>
where
    H: HostPrimitives + ?Sized + 'static,
{
    register_host_primitives(ctx, host)?;
    install_console(ctx)
}
