use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::fs;
use std::net::SocketAddr;
use std::path::PathBuf;

// Registry configuration sourced from environment variables, optionally
// overridden by a YAML file named in REGISTRY_CONFIG.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    pub bind_addr: SocketAddr,
    pub metrics_bind: SocketAddr,
    pub storage: StorageBackend,
    pub mongodb: Option<MongoConfig>,
    pub static_dir: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    Mongodb,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MongoConfig {
    pub url: String,
    pub database: String,
}

#[derive(Debug, Deserialize)]
struct RegistryConfigOverride {
    bind_addr: Option<String>,
    metrics_bind: Option<String>,
    storage: Option<String>,
    mongodb_url: Option<String>,
    mongodb_database: Option<String>,
    static_dir: Option<String>,
}

fn parse_storage(value: &str) -> Result<StorageBackend> {
    match value {
        "memory" => Ok(StorageBackend::Memory),
        "mongodb" => Ok(StorageBackend::Mongodb),
        other => bail!("unknown storage backend {other:?} (expected memory or mongodb)"),
    }
}

impl RegistryConfig {
    pub fn from_env() -> Result<Self> {
        let bind_addr = std::env::var("REGISTRY_BIND")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse()
            .with_context(|| "parse REGISTRY_BIND")?;
        let metrics_bind = std::env::var("REGISTRY_METRICS_BIND")
            .unwrap_or_else(|_| "0.0.0.0:8081".to_string())
            .parse()
            .with_context(|| "parse REGISTRY_METRICS_BIND")?;
        let storage = parse_storage(
            &std::env::var("REGISTRY_STORAGE").unwrap_or_else(|_| "memory".to_string()),
        )?;
        let mongodb = match std::env::var("REGISTRY_MONGODB_URL") {
            Ok(url) => Some(MongoConfig {
                url,
                database: std::env::var("REGISTRY_MONGODB_DATABASE")
                    .unwrap_or_else(|_| "alumni".to_string()),
            }),
            Err(_) => None,
        };
        let static_dir =
            PathBuf::from(std::env::var("REGISTRY_STATIC_DIR").unwrap_or_else(|_| "public".into()));
        Ok(Self {
            bind_addr,
            metrics_bind,
            storage,
            mongodb,
            static_dir,
        })
    }

    pub fn from_env_or_yaml() -> Result<Self> {
        let mut config = Self::from_env()?;
        if let Ok(path) = std::env::var("REGISTRY_CONFIG") {
            let contents =
                fs::read_to_string(&path).with_context(|| format!("read REGISTRY_CONFIG: {path}"))?;
            let override_cfg: RegistryConfigOverride =
                serde_yaml::from_str(&contents).with_context(|| "parse registry config yaml")?;
            if let Some(value) = override_cfg.bind_addr {
                config.bind_addr = value.parse().with_context(|| "parse bind_addr")?;
            }
            if let Some(value) = override_cfg.metrics_bind {
                config.metrics_bind = value.parse().with_context(|| "parse metrics_bind")?;
            }
            if let Some(value) = override_cfg.storage {
                config.storage = parse_storage(&value)?;
            }
            if let Some(url) = override_cfg.mongodb_url {
                let database = override_cfg
                    .mongodb_database
                    .or_else(|| config.mongodb.as_ref().map(|m| m.database.clone()))
                    .unwrap_or_else(|| "alumni".to_string());
                config.mongodb = Some(MongoConfig { url, database });
            }
            if let Some(value) = override_cfg.static_dir {
                config.static_dir = PathBuf::from(value);
            }
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_registry_env() {
        for key in [
            "REGISTRY_BIND",
            "REGISTRY_METRICS_BIND",
            "REGISTRY_STORAGE",
            "REGISTRY_MONGODB_URL",
            "REGISTRY_MONGODB_DATABASE",
            "REGISTRY_STATIC_DIR",
            "REGISTRY_CONFIG",
        ] {
            unsafe {
                std::env::remove_var(key);
            }
        }
    }

    #[test]
    #[serial]
    fn defaults_apply_without_env() {
        clear_registry_env();
        let config = RegistryConfig::from_env().expect("config");
        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(config.storage, StorageBackend::Memory);
        assert!(config.mongodb.is_none());
        assert_eq!(config.static_dir, PathBuf::from("public"));
    }

    #[test]
    #[serial]
    fn env_selects_mongodb_backend() {
        clear_registry_env();
        unsafe {
            std::env::set_var("REGISTRY_STORAGE", "mongodb");
            std::env::set_var("REGISTRY_MONGODB_URL", "mongodb://127.0.0.1:27017");
        }
        let config = RegistryConfig::from_env().expect("config");
        assert_eq!(config.storage, StorageBackend::Mongodb);
        let mongo = config.mongodb.expect("mongo config");
        assert_eq!(mongo.database, "alumni");
        clear_registry_env();
    }

    #[test]
    #[serial]
    fn unknown_backend_is_an_error() {
        clear_registry_env();
        unsafe {
            std::env::set_var("REGISTRY_STORAGE", "cassandra");
        }
        assert!(RegistryConfig::from_env().is_err());
        clear_registry_env();
    }

    #[test]
    #[serial]
    fn yaml_override_wins_over_env() {
        clear_registry_env();
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("registry.yaml");
        std::fs::write(
            &path,
            "bind_addr: \"127.0.0.1:4100\"\nstorage: mongodb\nmongodb_url: \"mongodb://db:27017\"\nmongodb_database: records\n",
        )
        .expect("write yaml");
        unsafe {
            std::env::set_var("REGISTRY_CONFIG", &path);
        }
        let config = RegistryConfig::from_env_or_yaml().expect("config");
        assert_eq!(config.bind_addr.port(), 4100);
        assert_eq!(config.storage, StorageBackend::Mongodb);
        assert_eq!(config.mongodb.expect("mongo").database, "records");
        clear_registry_env();
    }
}
