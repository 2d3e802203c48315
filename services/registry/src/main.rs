//! Alumni registry HTTP service entry point.
//!
//! # Purpose
//! Wires configuration, storage, and the HTTP router, then starts the API
//! server and the metrics endpoint.
//!
//! # Notes
//! The `build_state` helper keeps wiring testable and minimizes main setup
//! logic.
mod api;
mod app;
mod config;
mod observability;
mod store;

use anyhow::Context;
use app::{AppState, build_router};
use std::future::Future;
use std::sync::Arc;
use store::{GraduateStore, memory::InMemoryStore, mongo::MongoStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::RegistryConfig::from_env_or_yaml().expect("registry config");
    run_with_shutdown(config, async {
        let _ = tokio::signal::ctrl_c().await;
    })
    .await
}

async fn run_with_shutdown<F>(config: config::RegistryConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let metrics_handle = observability::init_observability("alumni-registry");
    let state = build_state(config.clone()).await?;
    tracing::info!(
        backend = state.store.backend_name(),
        durable = state.store.is_durable(),
        "storage ready"
    );
    let metrics_task = tokio::spawn(observability::serve_metrics(
        metrics_handle,
        config.metrics_bind,
    ));

    let app = build_router(state);

    let addr = config.bind_addr;
    tracing::info!(%addr, "registry listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tokio::pin!(shutdown);
    tokio::select! {
        result = axum::serve(listener, app.into_make_service()) => {
            result?;
        }
        _ = &mut shutdown => {}
    }

    metrics_task.abort();
    let _ = metrics_task.await;
    Ok(())
}

async fn build_state(config: config::RegistryConfig) -> anyhow::Result<AppState> {
    let store: Arc<dyn GraduateStore + Send + Sync> = match config.storage {
        config::StorageBackend::Memory => Arc::new(InMemoryStore::new()),
        config::StorageBackend::Mongodb => {
            let mongo = config
                .mongodb
                .as_ref()
                .context("mongodb configuration missing")?;
            Arc::new(MongoStore::connect(mongo).await?)
        }
    };

    Ok(AppState {
        api_version: "v1".to_string(),
        store,
        static_dir: config.static_dir,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::path::PathBuf;

    fn memory_config() -> config::RegistryConfig {
        config::RegistryConfig {
            bind_addr: "127.0.0.1:0".parse().expect("bind"),
            metrics_bind: "127.0.0.1:0".parse().expect("metrics"),
            storage: config::StorageBackend::Memory,
            mongodb: None,
            static_dir: PathBuf::from("public"),
        }
    }

    #[tokio::test]
    async fn build_state_memory_backend() {
        let state = build_state(memory_config()).await.expect("state");
        assert_eq!(state.api_version, "v1");
        assert_eq!(state.store.backend_name(), "memory");
        assert!(!state.store.is_durable());
    }

    #[tokio::test]
    async fn build_state_mongodb_requires_config() {
        let mut config = memory_config();
        config.storage = config::StorageBackend::Mongodb;
        let err = build_state(config).await.err().expect("missing mongodb");
        assert!(err.to_string().contains("mongodb configuration missing"));
    }

    #[tokio::test]
    #[serial]
    async fn run_with_shutdown_starts_and_stops() {
        run_with_shutdown(memory_config(), async {
            tokio::time::sleep(std::time::Duration::from_millis(100)).await;
        })
        .await
        .expect("run should stop cleanly");
    }
}
