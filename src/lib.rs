//! Typed access to JSON configuration files.
//!
//! A [`ConfigFile`] is loaded once and then queried by key. Each getter is
//! available as a fallible call, a panicking `must_*` call, and a defaulting
//! `always_*` call.

pub mod config;

pub use config::{ConfigError, ConfigFile, FromConfigValue};
