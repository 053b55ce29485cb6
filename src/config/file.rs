//! Loading a JSON config document from disk or from a string.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde_json::{Map, Value};
use tracing::debug;

use super::comments::strip_comments;
use super::ConfigError;

/// A loaded JSON configuration document.
///
/// The document is parsed once, when it is loaded, and never changes
/// afterwards. Values are looked up by their top-level key.
///
/// ## Example
///
/// ```no_run
/// use dragon_cfg::ConfigFile;
///
/// let config = ConfigFile::load("config/app.json")?;
///
/// let debug = config.always_bool("debug", None);
/// let port = config.float64("port")?;
/// let hosts = config.must_slice_string("hosts");
/// # Ok::<(), dragon_cfg::ConfigError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    path: Option<PathBuf>,
    data: Map<String, Value>,
}

impl ConfigFile {
    /// Reads and parses the config file at `path`.
    ///
    /// `//` line comments are stripped before parsing. The top-level value
    /// must be a JSON object.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::FileNotFound(path.to_path_buf())
            } else {
                ConfigError::ReadError {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;

        let data = parse_document(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        debug!(path = %path.display(), keys = data.len(), "loaded config file");

        Ok(Self {
            path: Some(path.to_path_buf()),
            data,
        })
    }

    /// Returns the path the document was loaded from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterates over the top-level keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Returns the raw value stored under `key`.
    pub fn get(&self, key: &str) -> Result<&Value, ConfigError> {
        self.data
            .get(key)
            .ok_or_else(|| ConfigError::KeyNotFound(key.to_string()))
    }

    /// Returns the raw object stored under `key`.
    pub fn object(&self, key: &str) -> Result<&Map<String, Value>, ConfigError> {
        self.get(key)?
            .as_object()
            .ok_or_else(|| ConfigError::type_mismatch(key, "an object"))
    }

    /// Returns the raw array stored under `key`.
    pub fn array(&self, key: &str) -> Result<&[Value], ConfigError> {
        self.get(key)?
            .as_array()
            .map(Vec::as_slice)
            .ok_or_else(|| ConfigError::type_mismatch(key, "an array"))
    }
}

impl FromStr for ConfigFile {
    type Err = ConfigError;

    /// Parses a document held in memory. Comments are stripped as for files.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let data = parse_document(s).map_err(ConfigError::InvalidDocument)?;
        Ok(Self { path: None, data })
    }
}

fn parse_document(contents: &str) -> Result<Map<String, Value>, serde_json::Error> {
    serde_json::from_str(&strip_comments(contents))
}
