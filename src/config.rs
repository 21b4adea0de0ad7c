use std::collections::HashMap;
use thiserror::Error;

/// Runtime configuration, sourced from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_path: String,
    /// Re-run the depreciation rule when a vehicle is updated. Off by
    /// default: updates take the supplied price verbatim.
    pub depreciate_on_update: bool,
    /// Refuse to delete a store while vehicles still reference it. Off by
    /// default: the delete is handed to the storage engine as-is.
    pub guard_store_delete: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let database_path = env_map
            .get("DATABASE_PATH")
            .cloned()
            .unwrap_or_else(|| "autolot.db".to_string());

        let depreciate_on_update = parse_bool(&env_map, "DEPRECIATE_ON_UPDATE")?.unwrap_or(false);
        let guard_store_delete = parse_bool(&env_map, "GUARD_STORE_DELETE")?.unwrap_or(false);

        Ok(Config {
            database_path,
            depreciate_on_update,
            guard_store_delete,
        })
    }
}

fn parse_bool(env_map: &HashMap<String, String>, key: &str) -> Result<Option<bool>, ConfigError> {
    match env_map.get(key) {
        None => Ok(None),
        Some(value) => match value.to_ascii_lowercase().as_str() {
            "1" | "true" => Ok(Some(true)),
            "0" | "false" => Ok(Some(false)),
            other => Err(ConfigError::InvalidValue(
                key.to_string(),
                format!("must be true or false, got {}", other),
            )),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_env_map(HashMap::new()).unwrap();
        assert_eq!(config.database_path, "autolot.db");
        assert!(!config.depreciate_on_update);
        assert!(!config.guard_store_delete);
    }

    #[test]
    fn test_database_path_override() {
        let mut env_map = HashMap::new();
        env_map.insert("DATABASE_PATH".to_string(), "/tmp/lot.db".to_string());
        let config = Config::from_env_map(env_map).unwrap();
        assert_eq!(config.database_path, "/tmp/lot.db");
    }

    #[test]
    fn test_policy_flags() {
        let mut env_map = HashMap::new();
        env_map.insert("DEPRECIATE_ON_UPDATE".to_string(), "true".to_string());
        env_map.insert("GUARD_STORE_DELETE".to_string(), "1".to_string());
        let config = Config::from_env_map(env_map).unwrap();
        assert!(config.depreciate_on_update);
        assert!(config.guard_store_delete);
    }

    #[test]
    fn test_invalid_flag_value() {
        let mut env_map = HashMap::new();
        env_map.insert("GUARD_STORE_DELETE".to_string(), "maybe".to_string());
        let result = Config::from_env_map(env_map);
        match result {
            Err(ConfigError::InvalidValue(k, _)) => assert_eq!(k, "GUARD_STORE_DELETE"),
            _ => panic!("Expected InvalidValue error"),
        }
    }
}
