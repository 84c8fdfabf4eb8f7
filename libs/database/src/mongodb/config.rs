#[cfg(feature = "config")]
use core_config::{env_or_default, env_required, ConfigError, FromEnv};

/// MongoDB connection settings.
///
/// Construct manually or load from environment variables with the
/// `config` feature.
#[derive(Clone, Debug)]
pub struct MongoConfig {
    /// Connection string: mongodb://[user:pass@]host[:port][/?options]
    pub url: String,

    /// Database name to use
    pub database: String,

    /// Optional application name reported to the server
    pub app_name: Option<String>,

    /// Maximum number of pooled connections
    pub max_pool_size: u32,

    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
}

impl MongoConfig {
    /// Create a config pointing at the given URL and database.
    pub fn new(url: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            database: database.into(),
            app_name: None,
            max_pool_size: 100,
            connect_timeout_secs: 10,
        }
    }

    /// Set the application name reported in server logs.
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    pub fn database(&self) -> &str {
        &self.database
    }
}

/// Environment variables:
/// - `MONGODB_URL` (required) - connection string
/// - `MONGODB_DATABASE` (required) - database name
/// - `MONGODB_APP_NAME` (optional)
/// - `MONGODB_MAX_POOL_SIZE` (optional, default 100)
/// - `MONGODB_CONNECT_TIMEOUT_SECS` (optional, default 10)
#[cfg(feature = "config")]
impl FromEnv for MongoConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let url = env_required("MONGODB_URL")?;
        let database = env_required("MONGODB_DATABASE")?;
        let app_name = std::env::var("MONGODB_APP_NAME").ok();

        let max_pool_size = env_or_default("MONGODB_MAX_POOL_SIZE", "100")
            .parse()
            .map_err(|e| ConfigError::ParseError {
                key: "MONGODB_MAX_POOL_SIZE".to_string(),
                details: format!("{}", e),
            })?;

        let connect_timeout_secs = env_or_default("MONGODB_CONNECT_TIMEOUT_SECS", "10")
            .parse()
            .map_err(|e| ConfigError::ParseError {
                key: "MONGODB_CONNECT_TIMEOUT_SECS".to_string(),
                details: format!("{}", e),
            })?;

        Ok(Self {
            url,
            database,
            app_name,
            max_pool_size,
            connect_timeout_secs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mongo_config_new() {
        let config = MongoConfig::new("mongodb://localhost:27017", "accounts");
        assert_eq!(config.url, "mongodb://localhost:27017");
        assert_eq!(config.database(), "accounts");
        assert_eq!(config.max_pool_size, 100);
        assert!(config.app_name.is_none());
    }

    #[test]
    fn test_mongo_config_with_app_name() {
        let config = MongoConfig::new("mongodb://localhost:27017", "accounts")
            .with_app_name("accounts-api");
        assert_eq!(config.app_name, Some("accounts-api".to_string()));
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_mongo_config_from_env() {
        temp_env::with_vars(
            [
                ("MONGODB_URL", Some("mongodb://localhost:27017")),
                ("MONGODB_DATABASE", Some("testdb")),
            ],
            || {
                let config = MongoConfig::from_env().unwrap();
                assert_eq!(config.url, "mongodb://localhost:27017");
                assert_eq!(config.database, "testdb");
            },
        );
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_mongo_config_from_env_missing_url() {
        temp_env::with_vars(
            [
                ("MONGODB_URL", None::<&str>),
                ("MONGODB_DATABASE", Some("testdb")),
            ],
            || {
                assert!(MongoConfig::from_env().is_err());
            },
        );
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_mongo_config_from_env_bad_pool_size() {
        temp_env::with_vars(
            [
                ("MONGODB_URL", Some("mongodb://localhost:27017")),
                ("MONGODB_DATABASE", Some("testdb")),
                ("MONGODB_MAX_POOL_SIZE", Some("lots")),
            ],
            || {
                assert!(MongoConfig::from_env().is_err());
            },
        );
    }
}
