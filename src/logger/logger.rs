use crate::settings::Log;
use anyhow::{Result, anyhow};
use tracing_subscriber::{
    EnvFilter, Registry, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt,
};

const BOOTSTRAP_FILTER: &str = "info";

pub struct Logger {
    reload_handle: reload::Handle<EnvFilter, Registry>,
}

impl Logger {
    /// Installs the global subscriber. Fails if one is already installed.
    pub fn new_bootstrap() -> Result<Self> {
        Self::with_filter(BOOTSTRAP_FILTER)
    }

    pub fn with_filter(filter: &str) -> Result<Self> {
        let filter = EnvFilter::try_new(filter).map_err(|e| anyhow!(e))?;
        let (filter, reload_handle) = reload::Layer::new(filter);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init()
            .map_err(|e| anyhow!(e))?;

        Ok(Self { reload_handle })
    }

    pub fn reload_from_settings(&self, log: &Log) -> Result<()> {
        let filter = EnvFilter::try_new(&log.filter).map_err(|e| anyhow!(e))?;
        self.reload_handle.reload(filter).map_err(|e| anyhow!(e))?;
        Ok(())
    }
}
