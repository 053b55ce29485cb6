//! Typed accessors on [`ConfigFile`].
//!
//! Every accessor comes in three calling conventions:
//!
//! - `name(key)` returns a `Result`;
//! - `must_name(key)` panics with the error message on failure;
//! - `always_name(key, default)` never fails. It returns `default` when one
//!   is given, otherwise the zero value of the type (`false`, `0.0`, `""`,
//!   or an empty collection).

use std::collections::HashMap;

use serde_json::Value;
use tracing::trace;

use super::value::FromConfigValue;
use super::{ConfigError, ConfigFile};

impl ConfigFile {
    /// Reads the value under `key` as `T`.
    pub fn value<T: FromConfigValue>(&self, key: &str) -> Result<T, ConfigError> {
        T::from_config_value(key, self.get(key)?)
    }

    /// Reads the value under `key` as `T`.
    ///
    /// # Panics
    ///
    /// Panics if the key is missing or holds a value of another type.
    #[track_caller]
    pub fn must<T: FromConfigValue>(&self, key: &str) -> T {
        self.value(key).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Reads the value under `key` as `T`, or `T::default()` on failure.
    pub fn always<T: FromConfigValue + Default>(&self, key: &str) -> T {
        self.always_or(key, T::default())
    }

    /// Reads the value under `key` as `T`, or `default` on failure.
    pub fn always_or<T: FromConfigValue>(&self, key: &str, default: T) -> T {
        match self.value(key) {
            Ok(value) => value,
            Err(e) => {
                trace!(key, error = %e, "using default config value");
                default
            }
        }
    }

    fn always_with<T: FromConfigValue + Default>(&self, key: &str, default: Option<T>) -> T {
        match default {
            Some(default) => self.always_or(key, default),
            None => self.always(key),
        }
    }
}

macro_rules! accessors {
    ($( $ty:ty => $name:ident, $must:ident, $always:ident; )*) => {
        impl ConfigFile {
            $(
                #[doc = concat!("Reads `key` as `", stringify!($ty), "`.")]
                pub fn $name(&self, key: &str) -> Result<$ty, ConfigError> {
                    self.value(key)
                }

                #[doc = concat!("Reads `key` as `", stringify!($ty), "`, panicking on failure.")]
                #[track_caller]
                pub fn $must(&self, key: &str) -> $ty {
                    self.must(key)
                }

                #[doc = concat!("Reads `key` as `", stringify!($ty), "`, falling back to `default` or the zero value.")]
                pub fn $always(&self, key: &str, default: Option<$ty>) -> $ty {
                    self.always_with(key, default)
                }
            )*
        }
    };
}

accessors! {
    bool => bool, must_bool, always_bool;
    f64 => float64, must_float64, always_float64;
    String => string, must_string, always_string;
    HashMap<String, Value> => map_string_value, must_map_string_value, always_map_string_value;
    HashMap<String, bool> => map_string_bool, must_map_string_bool, always_map_string_bool;
    HashMap<String, f64> => map_string_float64, must_map_string_float64, always_map_string_float64;
    HashMap<String, String> => map_string_string, must_map_string_string, always_map_string_string;
    Vec<Value> => slice_value, must_slice_value, always_slice_value;
    Vec<bool> => slice_bool, must_slice_bool, always_slice_bool;
    Vec<f64> => slice_float64, must_slice_float64, always_slice_float64;
    Vec<String> => slice_string, must_slice_string, always_slice_string;
}
