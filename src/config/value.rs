//! Conversions from untyped JSON values to the types handed out by
//! [`ConfigFile`](super::ConfigFile) accessors.

use std::collections::HashMap;

use serde_json::Value;

use super::ConfigError;

/// A type that can be read out of a config value.
///
/// `key` is only used to build error messages.
pub trait FromConfigValue: Sized {
    fn from_config_value(key: &str, value: &Value) -> Result<Self, ConfigError>;
}

/// A single JSON element that can appear on its own or inside an array or
/// object.
///
/// [`Value`] itself is a scalar that accepts anything, so `Vec<Value>` and
/// `HashMap<String, Value>` give the raw array and object.
pub trait Scalar: Sized {
    /// Article and type name used in error messages, e.g. `"a bool"`.
    const EXPECTED: &'static str;

    fn from_scalar(value: &Value) -> Option<Self>;
}

impl Scalar for bool {
    const EXPECTED: &'static str = "a bool";

    fn from_scalar(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl Scalar for f64 {
    const EXPECTED: &'static str = "a float64";

    fn from_scalar(value: &Value) -> Option<Self> {
        value.as_f64()
    }
}

impl Scalar for String {
    const EXPECTED: &'static str = "a string";

    fn from_scalar(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }
}

impl Scalar for Value {
    const EXPECTED: &'static str = "a value";

    fn from_scalar(value: &Value) -> Option<Self> {
        Some(value.clone())
    }
}

macro_rules! scalar_from_config_value {
    ($($ty:ty),*) => {
        $(
            impl FromConfigValue for $ty {
                fn from_config_value(key: &str, value: &Value) -> Result<Self, ConfigError> {
                    <$ty as Scalar>::from_scalar(value)
                        .ok_or_else(|| ConfigError::type_mismatch(key, <$ty as Scalar>::EXPECTED))
                }
            }
        )*
    };
}

scalar_from_config_value!(bool, f64, String, Value);

impl<T: Scalar> FromConfigValue for Vec<T> {
    fn from_config_value(key: &str, value: &Value) -> Result<Self, ConfigError> {
        let items = value
            .as_array()
            .ok_or_else(|| ConfigError::type_mismatch(key, "an array"))?;

        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                T::from_scalar(item).ok_or_else(|| ConfigError::ElementMismatch {
                    key: key.to_string(),
                    element: format!("[{index}]"),
                    expected: T::EXPECTED,
                })
            })
            .collect()
    }
}

impl<T: Scalar> FromConfigValue for HashMap<String, T> {
    fn from_config_value(key: &str, value: &Value) -> Result<Self, ConfigError> {
        let object = value
            .as_object()
            .ok_or_else(|| ConfigError::type_mismatch(key, "an object"))?;

        object
            .iter()
            .map(|(name, item)| {
                T::from_scalar(item)
                    .map(|converted| (name.clone(), converted))
                    .ok_or_else(|| ConfigError::ElementMismatch {
                        key: key.to_string(),
                        element: format!("'{name}'"),
                        expected: T::EXPECTED,
                    })
            })
            .collect()
    }
}
