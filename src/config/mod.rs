use crate::error::{Result, UploadError};
use std::collections::HashMap;
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const ACCESS_KEY_ID: &str = "R2_ACCESS_KEY_ID";
pub const SECRET_ACCESS_KEY: &str = "R2_SECRET_ACCESS_KEY";
pub const ENDPOINT: &str = "R2_ENDPOINT";
pub const BUCKET: &str = "R2_BUCKET";
pub const PUBLIC_URL: &str = "R2_PUBLIC_URL";

/// Dotfile location relative to the user's home directory
const ENV_FILE_SUBPATH: &str = ".baoyu-skills/.env";

/// Path of the optional dotfile, if a home directory can be determined.
pub fn default_env_file() -> Option<PathBuf> {
    env::var_os("HOME")
        .or_else(|| env::var_os("USERPROFILE"))
        .filter(|home| !home.is_empty())
        .map(|home| PathBuf::from(home).join(ENV_FILE_SUBPATH))
}

/// Variables read from the dotfile, layered underneath the process environment.
///
/// Lookups consult the process environment first, so anything set externally
/// always wins over the dotfile. The process environment itself is never modified.
#[derive(Debug, Clone, Default)]
pub struct EnvSource {
    file_vars: HashMap<String, String>,
}

impl EnvSource {
    /// Load the dotfile at its well-known location. A missing file is not an error.
    pub fn load() -> Self {
        match default_env_file() {
            Some(path) => Self::from_file(&path),
            None => {
                debug!("No home directory, skipping dotfile");
                Self::default()
            }
        }
    }

    pub fn from_file(path: &Path) -> Self {
        let iter = match dotenvy::from_path_iter(path) {
            Ok(iter) => iter,
            Err(e) if e.not_found() => {
                debug!("No dotfile at {}", path.display());
                return Self::default();
            }
            Err(e) => {
                warn!("⚠️  Could not read {}: {}", path.display(), e);
                return Self::default();
            }
        };

        let mut file_vars = HashMap::new();
        for item in iter {
            match item {
                Ok((key, value)) => {
                    file_vars.insert(key, value);
                }
                Err(e) => warn!("⚠️  Skipping malformed line in {}: {}", path.display(), e),
            }
        }

        debug!("Loaded {} variables from {}", file_vars.len(), path.display());
        Self { file_vars }
    }

    pub fn get(&self, name: &str) -> Option<String> {
        env::var(name)
            .ok()
            .or_else(|| self.file_vars.get(name).cloned())
    }
}

/// Connection settings for the object store
#[derive(Clone)]
pub struct StorageConfig {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub endpoint: String,
    /// Target bucket, already resolved against `--bucket`
    pub bucket: String,
    /// Prefix joined with the object key to form the public URL
    pub public_url: String,
}

impl fmt::Debug for StorageConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorageConfig")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("bucket", &self.bucket)
            .field("public_url", &self.public_url)
            .finish()
    }
}

impl StorageConfig {
    pub fn from_env(source: &EnvSource, bucket_override: Option<&str>) -> Result<Self> {
        Self::from_lookup(|name| source.get(name), bucket_override)
    }

    /// Build the config from an arbitrary variable lookup.
    ///
    /// Empty values count as unset. Variables are checked in a fixed order and the
    /// first missing one is reported. A non-empty `bucket_override` takes precedence
    /// over `R2_BUCKET` and makes it optional.
    pub fn from_lookup<F>(lookup: F, bucket_override: Option<&str>) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.is_empty());
        let require = |name: &'static str| var(name).ok_or(UploadError::MissingVar(name));

        let access_key_id = require(ACCESS_KEY_ID)?;
        let secret_access_key = require(SECRET_ACCESS_KEY)?;
        let endpoint = require(ENDPOINT)?;
        let bucket = bucket_override
            .filter(|b| !b.is_empty())
            .map(str::to_owned)
            .or_else(|| var(BUCKET))
            .ok_or(UploadError::MissingBucket)?;
        let public_url = require(PUBLIC_URL)?;

        Ok(Self {
            access_key_id,
            secret_access_key,
            endpoint,
            bucket,
            public_url,
        })
    }
}
