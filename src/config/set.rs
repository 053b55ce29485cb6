//! Decoding config values into arbitrary serde types.

use std::any::type_name;

use serde::de::DeserializeOwned;
use tracing::trace;

use super::{ConfigError, ConfigFile};

impl ConfigFile {
    /// Decodes the value under `key` into any deserializable type.
    ///
    /// Fails with [`ConfigError::InvalidTarget`] when the value does not
    /// have the shape `T` expects.
    ///
    /// ```
    /// use dragon_cfg::ConfigFile;
    /// use serde::Deserialize;
    ///
    /// #[derive(Deserialize)]
    /// struct Database {
    ///     host: String,
    ///     port: u16,
    /// }
    ///
    /// let config: ConfigFile = r#"{"db": {"host": "localhost", "port": 5432}}"#.parse()?;
    /// let db: Database = config.deserialize("db")?;
    /// assert_eq!(db.port, 5432);
    /// # Ok::<(), dragon_cfg::ConfigError>(())
    /// ```
    pub fn deserialize<T: DeserializeOwned>(&self, key: &str) -> Result<T, ConfigError> {
        let value = self.get(key)?;
        <T as serde::Deserialize>::deserialize(value).map_err(|e| ConfigError::InvalidTarget {
            key: key.to_string(),
            target: type_name::<T>(),
            source: e,
        })
    }

    /// Stores the value under `key` into `target`.
    ///
    /// On error `target` is left unchanged.
    pub fn set<T: DeserializeOwned>(&self, key: &str, target: &mut T) -> Result<(), ConfigError> {
        *target = self.deserialize(key)?;
        Ok(())
    }

    /// Stores the value under `key` into `target`.
    ///
    /// # Panics
    ///
    /// Panics if the key is missing or its value cannot be stored in a `T`.
    #[track_caller]
    pub fn must_set<T: DeserializeOwned>(&self, key: &str, target: &mut T) {
        if let Err(e) = self.set(key, target) {
            panic!("{e}");
        }
    }

    /// Stores the value under `key` into `target` when possible.
    ///
    /// The current contents of `target` act as the default. Returns whether
    /// `target` was overwritten.
    pub fn always_set<T: DeserializeOwned>(&self, key: &str, target: &mut T) -> bool {
        match self.set(key, target) {
            Ok(()) => true,
            Err(e) => {
                trace!(key, error = %e, "keeping default config value");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::collections::BTreeMap;

    const DOCUMENT: &str = r#"{
        "float64": 1.01,
        "string": "foo",
        "port": 8080,
        "tags": ["a", "b"],
        "server": {"host": "localhost", "port": 8080, "tls": false}
    }"#;

    fn config() -> ConfigFile {
        DOCUMENT.parse().unwrap()
    }

    #[derive(Debug, Default, Deserialize, PartialEq)]
    struct Server {
        host: String,
        port: u16,
        tls: bool,
    }

    #[test]
    fn test_set_float() {
        let mut f = 0.0;
        config().set("float64", &mut f).unwrap();
        assert_eq!(f, 1.01);
    }

    #[test]
    fn test_set_integer_target() {
        let mut port: u16 = 0;
        config().set("port", &mut port).unwrap();
        assert_eq!(port, 8080);
    }

    #[test]
    fn test_set_struct() {
        let mut server = Server::default();
        config().must_set("server", &mut server);
        assert_eq!(
            server,
            Server {
                host: "localhost".into(),
                port: 8080,
                tls: false,
            }
        );
    }

    #[test]
    fn test_deserialize_collections() {
        let config = config();

        let tags: Vec<String> = config.deserialize("tags").unwrap();
        assert_eq!(tags, vec!["a", "b"]);

        let server: BTreeMap<String, serde_json::Value> = config.deserialize("server").unwrap();
        assert_eq!(server.len(), 3);
    }

    #[test]
    fn test_set_wrong_type_leaves_target_unchanged() {
        let mut f = 0.5;
        let err = config().set("string", &mut f).unwrap_err();

        assert!(matches!(err, ConfigError::InvalidTarget { target: "f64", .. }));
        assert_eq!(f, 0.5);
    }

    #[test]
    fn test_set_missing_key() {
        let mut s = String::new();
        let err = config().set("missing", &mut s).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    #[should_panic(expected = "key 'string' cannot be stored in a `f64`")]
    fn test_must_set_wrong_type_panics() {
        let mut f = 0.0;
        config().must_set("string", &mut f);
    }

    #[test]
    fn test_always_set() {
        let config = config();

        let mut s = String::from("bar");
        assert!(!config.always_set("float64", &mut s));
        assert_eq!(s, "bar");

        assert!(config.always_set("string", &mut s));
        assert_eq!(s, "foo");
    }
}
