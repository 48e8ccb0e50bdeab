use crate::args::OutputFormat;
use crate::error::MainError;
use api_client::{InventoryStore, SupplyLineClient};
use chrono::{Local, NaiveDate};
use shared::Config;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Everything a command needs, built once in `main`.
pub struct AppState {
    pub config: Config,
    pub store: InventoryStore,
    pub format: OutputFormat,
    pub shutdown: CancellationToken,
}

impl AppState {
    pub fn new(
        config: Config,
        format: OutputFormat,
        shutdown: CancellationToken,
    ) -> Result<Self, MainError> {
        let client = SupplyLineClient::new(&config.api)?;
        Ok(Self {
            config,
            store: InventoryStore::new(client),
            format,
            shutdown,
        })
    }

    pub fn client(&self) -> &SupplyLineClient {
        self.store.client()
    }

    pub fn page_size(&self, requested: Option<usize>) -> usize {
        requested.unwrap_or(self.config.views.page_size)
    }

    pub fn close_delay(&self) -> Result<Duration, MainError> {
        Ok(self.config.forms.success_close_delay()?)
    }

    pub fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
