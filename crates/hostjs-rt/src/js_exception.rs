use std::fmt;

/// Represents a JavaScript exception.
#[derive(Debug, Clone, PartialEq)]
pub struct JsException {
    pub(crate) name: String,
    pub(crate) msg: String,
    pub(crate) stack: Option<String>,
}

impl JsException {
    pub(crate) fn new<N, M>(name: N, msg: M) -> JsException
    where
        N: Into<String>,
        M: Into<String>,
    {
        JsException {
            name: name.into(),
            msg: msg.into(),
            stack: None,
        }
    }

    /// Returns the error name (eg: `TypeError`)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.msg
    }

    /// Returns the stringified stack if available
    pub fn stack(&self) -> Option<&str> {
        self.stack.as_deref()
    }
}

impl fmt::Display for JsException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.msg.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}: {}", self.name, self.msg)
        }
    }
}
