//! Wiring of configuration, storage, tools and the browser transport.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use tabfix_config::{Config, ConfigLoader, ConfigValidator, tabfix_dir};
use tabfix_core::{
    ActiveToolStore, FileKvStorage, MessageRouter, Orchestrator, ShortcutMap, StateStore,
    ToolRegistry,
};
use tabfix_page_cdp::{CdpClient, CdpTabs};
use tabfix_tools_class_swap::register_catalog;

/// The assembled background side.
pub(crate) struct App {
    pub router: MessageRouter,
    pub registry: Arc<ToolRegistry>,
    pub active: Arc<ActiveToolStore>,
}

/// Default configuration file location.
pub(crate) fn default_config_path() -> PathBuf {
    tabfix_dir().join("config.toml")
}

/// Load and validate configuration. A missing file yields defaults.
pub(crate) fn load_config(
    path: &Path,
    endpoint: Option<String>,
) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = ConfigLoader::load_or_default(path)?;
    if let Some(endpoint) = endpoint {
        config.browser.endpoint = endpoint;
    }

    for warning in ConfigValidator::validate(&config)?.into_result()? {
        warn!("Config {}: {}", warning.path, warning.message);
    }

    Ok(config)
}

impl App {
    pub(crate) async fn build(config: &Config) -> Result<Self, Box<dyn std::error::Error>> {
        let registry = Arc::new(ToolRegistry::new());
        let count = register_catalog(&registry, &config.tools)?;
        debug!("Registered {} tools", count);

        let storage_path = config.storage.resolved_path();
        let storage = Arc::new(FileKvStorage::open(&storage_path).await?);
        debug!("Using storage at {}", storage_path.display());

        let client = CdpClient::new(
            &config.browser.endpoint,
            Duration::from_secs(config.browser.call_timeout_seconds),
        )?;
        let tabs = Arc::new(CdpTabs::new(client, registry.clone()));

        let state = Arc::new(StateStore::new(storage.clone(), &config.storage));
        let active = Arc::new(ActiveToolStore::new(storage, config));
        let orchestrator = Arc::new(Orchestrator::new(
            registry.clone(),
            tabs.clone(),
            tabs,
            state,
        ));
        let router = MessageRouter::new(
            orchestrator,
            active.clone(),
            ShortcutMap::new(&config.shortcuts),
        );

        Ok(Self {
            router,
            registry,
            active,
        })
    }
}
