// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Persisted settings for the cgm CLI.
//!
//! Values are JSON documents addressed by a short key. [`ConfigService`]
//! handles the encoding and leaves byte storage to a [`ConfigStore`];
//! [`FsConfigStore`] keeps one `<key>.json` file per key in a directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// Byte-level storage addressed by key.
pub trait ConfigStore {
    /// Reads the document stored under `key`; [`ConfigError::NotFound`] when
    /// nothing was ever written.
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError>;
    /// Replaces the document stored under `key`.
    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError>;
}

/// Failure to read or write a settings document.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Nothing stored under the requested key.
    #[error("no settings stored under that key")]
    NotFound,
    /// The backing storage failed.
    #[error("settings storage: {0}")]
    Io(#[from] std::io::Error),
    /// The document is not valid JSON for the requested type.
    #[error("settings document: {0}")]
    Serde(#[from] serde_json::Error),
    /// Anything else, such as an unresolvable home directory.
    #[error("{0}")]
    Other(String),
}

/// Typed JSON access on top of a [`ConfigStore`].
pub struct ConfigService<S> {
    store: S,
}

impl<S> ConfigService<S> {
    /// Wraps `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The wrapped store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: ConfigStore> ConfigService<S> {
    /// Decodes the document under `key`.
    ///
    /// A missing key and a blank document both read as `Ok(None)`, so a
    /// truncated file falls back to defaults instead of failing to parse.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, ConfigError> {
        let bytes = match self.store.load_raw(key) {
            Err(ConfigError::NotFound) => return Ok(None),
            other => other?,
        };
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    /// Encodes `value` as pretty JSON and stores it under `key`.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), ConfigError> {
        let mut data = serde_json::to_vec_pretty(value)?;
        data.push(b'\n');
        self.store.save_raw(key, &data)
    }
}

/// One `<key>.json` file per key under a base directory.
pub struct FsConfigStore {
    base: PathBuf,
}

impl FsConfigStore {
    /// Store under the platform config directory (`~/.config/cgm` on Linux).
    pub fn new() -> Result<Self, ConfigError> {
        ProjectDirs::from("dev", "flyingrobots", "cgm")
            .map(|dirs| Self::at(dirs.config_dir()))
            .ok_or_else(|| ConfigError::Other("no home directory to hold cgm settings".into()))
    }

    /// Store under `base`, which is created on first save.
    pub fn at(base: impl AsRef<Path>) -> Self {
        Self {
            base: base.as_ref().to_path_buf(),
        }
    }

    /// File holding the document for `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.base.join(key).with_extension("json")
    }
}

impl ConfigStore for FsConfigStore {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError> {
        fs::read(self.path_for(key)).map_err(|err| match err.kind() {
            ErrorKind::NotFound => ConfigError::NotFound,
            _ => ConfigError::Io(err),
        })
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError> {
        fs::create_dir_all(&self.base)?;
        fs::write(self.path_for(key), data)?;
        Ok(())
    }
}
