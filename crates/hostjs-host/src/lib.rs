//! Default host primitives for the HostJS console.
//!
//! The [`StdioHost`] writes every console line to standard output, with
//! `error` and `warn` lines carrying a configurable prefix.
mod config;
mod error;
mod stdio;

pub use self::config::HostConfig;
pub use self::error::HostError;
pub use self::stdio::StdioHost;
