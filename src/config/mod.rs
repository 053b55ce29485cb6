//! JSON configuration documents and typed access to their values.

mod access;
mod comments;
mod error;
mod file;
mod set;
mod value;

pub use comments::strip_comments;
pub use error::ConfigError;
pub use file::ConfigFile;
pub use value::{FromConfigValue, Scalar};
