use std::fmt;

use rquickjs::convert::Coerced;
use rquickjs::{Ctx, Value};

use crate::error::{catch_exception, Error};
use crate::runtime::Runtime;

/// A script context with its own global namespace.
pub struct Context {
    inner: rquickjs::Context,
    #[allow(unused)]
    rt: Runtime,
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context").finish()
    }
}

impl Context {
    /// Creates a new context with the standard builtins.
    pub fn new(rt: &Runtime) -> Result<Context, Error> {
        let inner = rquickjs::Context::full(rt.raw()).map_err(Error::ContextInit)?;
        Ok(Context {
            inner,
            rt: rt.clone(),
        })
    }

    /// Returns a reference to the runtime.
    pub fn rt(&self) -> &Runtime {
        &self.rt
    }

    /// Enters the context to work with script values directly.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(Ctx<'_>) -> R,
    {
        self.inner.with(f)
    }

    /// Evaluates some code, discarding the completion value.
    pub fn eval(&self, code: &str) -> Result<(), Error> {
        self.inner.with(|ctx| {
            catch_exception(&ctx, ctx.eval::<Value, _>(code)).map(|_| ())
        })
    }

    /// Evaluates some code and stringifies the completion value.
    pub fn eval_to_string(&self, code: &str) -> Result<String, Error> {
        self.inner.with(|ctx| {
            catch_exception(&ctx, ctx.eval::<Coerced<String>, _>(code)).map(|rv| rv.0)
        })
    }

    /// Checks if a global is bound.
    pub fn has_global(&self, name: &str) -> Result<bool, Error> {
        self.inner
            .with(|ctx| catch_exception(&ctx, ctx.globals().contains_key(name)))
    }
}

#[cfg(test)]
mod tests {
    use super::Context;
    use crate::{Error, Runtime};

    fn context() -> Context {
        let rt = Runtime::new().unwrap();
        Context::new(&rt).unwrap()
    }

    #[test]
    fn test_eval_to_string() {
        let ctx = context();
        assert_eq!(ctx.eval_to_string("40 + 2").unwrap(), "42");
        assert_eq!(ctx.eval_to_string("1e21").unwrap(), "1e+21");
        assert_eq!(ctx.eval_to_string("[1, [2, 3], null]").unwrap(), "1,2,3,");
        assert_eq!(ctx.eval_to_string("({})").unwrap(), "[object Object]");
    }

    #[test]
    fn test_globals() {
        let ctx = context();
        assert!(!ctx.has_global("answer").unwrap());
        ctx.eval("globalThis.answer = 42").unwrap();
        assert!(ctx.has_global("answer").unwrap());
        ctx.eval("globalThis.answer = 23").unwrap();
        assert_eq!(ctx.eval_to_string("answer").unwrap(), "23");
    }

    #[test]
    fn test_exception_carries_stack() {
        let ctx = context();
        let err = ctx
            .eval("function fail() { throw new RangeError('boom'); }\nfail();")
            .unwrap_err();
        let exc = err.as_exception().unwrap();
        assert_eq!(exc.name(), "RangeError");
        assert_eq!(exc.message(), "boom");
        assert!(exc.stack().unwrap().contains("fail"));
    }

    #[test]
    fn test_thrown_value() {
        let ctx = context();
        match ctx.eval("throw 'plain'") {
            Err(Error::JsException(exc)) => assert_eq!(exc.message(), "plain"),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_sparse_array_index() {
        let ctx = context();
        let len = ctx
            .eval_to_string("const a = []; a[3999999999] = 1; a.length")
            .unwrap();
        assert_eq!(len, "4000000000");
    }

    #[test]
    fn test_memory_limit_raises() {
        let rt = Runtime::with_limits(256 * 1024, 8 * 1024 * 1024).unwrap();
        let ctx = Context::new(&rt).unwrap();
        assert!(ctx.eval("'x'.repeat(1 << 26)").is_err());
        assert_eq!(ctx.eval_to_string("'still alive'").unwrap(), "still alive");
    }

    #[test]
    fn test_runaway_recursion_raises() {
        let ctx = context();
        assert!(ctx.eval("function f() { return f() + 1; } f()").is_err());
    }
}
