use rquickjs::{CatchResultExt, CaughtError, Ctx};
use thiserror::Error;

use crate::js_exception::JsException;

/// Name given to script exceptions that carry a host primitive failure.
pub(crate) const HOST_ERROR_NAME: &str = "HostError";

/// Represents an error
#[derive(Error, Debug)]
pub enum Error {
    #[error("quickjs failed to initialize runtime")]
    RuntimeInit(#[source] rquickjs::Error),
    #[error("quickjs failed to initialize context")]
    ContextInit(#[source] rquickjs::Error),
    #[error("JavaScript exception: {0}")]
    JsException(JsException),
    #[error("quickjs engine error")]
    Engine(#[source] rquickjs::Error),
    #[error("host primitive failed")]
    Host(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Wraps a failure reported by a host primitive.
    pub fn host<E>(err: E) -> Error
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Error::Host(err.into())
    }

    /// Returns the exception if this error is a script exception.
    pub fn as_exception(&self) -> Option<&JsException> {
        match self {
            Error::JsException(exc) => Some(exc),
            _ => None,
        }
    }

    /// Converts whatever the engine caught into an error.
    ///
    /// Exceptions raised for host primitive failures turn back into
    /// [`Error::Host`].
    pub(crate) fn from_caught(err: CaughtError<'_>) -> Error {
        match err {
            CaughtError::Exception(exc) => {
                let name = exc
                    .as_object()
                    .get::<_, Option<String>>("name")
                    .ok()
                    .flatten();
                let msg = exc.message().unwrap_or_default();
                if name.as_deref() == Some(HOST_ERROR_NAME) {
                    return Error::host(msg);
                }
                Error::JsException(JsException {
                    name: name.unwrap_or_else(|| "Error".into()),
                    msg,
                    stack: exc.stack().filter(|stack| !stack.is_empty()),
                })
            }
            CaughtError::Value(value) => {
                let msg = value
                    .as_string()
                    .and_then(|s| s.to_string().ok())
                    .unwrap_or_else(|| format!("{:?}", value.type_of()));
                Error::JsException(JsException::new("Uncaught", msg))
            }
            CaughtError::Error(err) => Error::Engine(err),
        }
    }
}

/// Runs the result of an engine call through exception handling.
///
/// If the call raised an exception it is fetched from the context and
/// returned as wrapped error.
pub(crate) fn catch_exception<'js, T>(ctx: &Ctx<'js>, rv: rquickjs::Result<T>) -> Result<T, Error> {
    rv.catch(ctx).map_err(Error::from_caught)
}
