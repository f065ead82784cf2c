//! Process configuration.
//!
//! Read once at start-up and handed to the components that need it. Values
//! come from a key lookup, normally the process environment; secrets may be
//! supplied as `<KEY>_FILE` pointing at a file such as a container secret.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use thiserror::Error;

use crate::whatsapp::adapters::cloud_api::{CloudApiSettings, DEFAULT_API_BASE};
use crate::whatsapp::domain::AdminAllowList;

/// Port bound when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 3000;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A value is present but unusable.
    #[error("invalid value for {key}: {reason}")]
    InvalidValue {
        /// Configuration key.
        key: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// A `<KEY>_FILE` secret could not be read.
    #[error("failed to read {key} from {path}: {source}")]
    SecretRead {
        /// Configuration key the file supplies.
        key: String,
        /// Path named by `<KEY>_FILE`.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

/// Settings for the whole process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// HTTP port, bound on all interfaces.
    pub port: u16,
    /// `PostgreSQL` URL; in-memory stores are used when absent.
    pub database_url: Option<String>,
    /// Shared secret for the webhook subscription handshake.
    pub verify_token: Option<String>,
    /// Outbound Cloud API settings.
    pub cloud_api: CloudApiSettings,
    /// Phones allowed to send admin commands.
    pub admins: AdminAllowList,
    /// Bearer token for the admin REST routes.
    pub admin_api_token: Option<String>,
}

impl AppConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// See [`AppConfig::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`.
    ///
    /// Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when `PORT` is not a port number
    /// and [`ConfigError::SecretRead`] when a `<KEY>_FILE` cannot be read.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_owned())
                .filter(|raw| !raw.is_empty())
        };

        let port = value("PORT")
            .map(|raw| {
                raw.parse::<u16>().map_err(|err| ConfigError::InvalidValue {
                    key: "PORT".to_owned(),
                    reason: err.to_string(),
                })
            })
            .transpose()?
            .unwrap_or(DEFAULT_PORT);

        let cloud_api = CloudApiSettings {
            api_base: value("WHATSAPP_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_owned()),
            phone_number_id: value("WHATSAPP_PHONE_NUMBER_ID"),
            access_token: secret(&value, "WHATSAPP_ACCESS_TOKEN")?,
        };

        Ok(Self {
            port,
            database_url: secret(&value, "DATABASE_URL")?,
            verify_token: secret(&value, "WHATSAPP_VERIFY_TOKEN")?,
            cloud_api,
            admins: AdminAllowList::parse(&value("WHATSAPP_ADMIN_PHONES").unwrap_or_default()),
            admin_api_token: secret(&value, "ADMIN_API_TOKEN")?,
        })
    }
}

fn secret<F>(value: &F, key: &str) -> Result<Option<String>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(direct) = value(key) {
        return Ok(Some(direct));
    }
    let Some(path) = value(&format!("{key}_FILE")) else {
        return Ok(None);
    };

    let contents = read_secret_file(Utf8Path::new(&path)).map_err(|source| {
        ConfigError::SecretRead {
            key: key.to_owned(),
            path: path.clone(),
            source,
        }
    })?;
    let trimmed = contents.trim();
    Ok((!trimmed.is_empty()).then(|| trimmed.to_owned()))
}

fn read_secret_file(path: &Utf8Path) -> std::io::Result<String> {
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let file_name = path.file_name().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, "secret path has no file name")
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.read_to_string(file_name)
}
